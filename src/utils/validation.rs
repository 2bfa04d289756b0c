use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    path: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension)
            if allowed_extensions
                .iter()
                .any(|a| a.eq_ignore_ascii_case(extension)) =>
        {
            Ok(())
        }
        Some(extension) => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_file", "./input.xlsx").is_ok());
        assert!(validate_path("input_file", "").is_err());
        assert!(validate_path("input_file", "   ").is_err());
        assert!(validate_path("input_file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("input_file", "data.xlsx", &["xlsx", "csv"]).is_ok());
        assert!(validate_file_extension("input_file", "data.CSV", &["xlsx", "csv"]).is_ok());
        assert!(validate_file_extension("input_file", "data.txt", &["xlsx", "csv"]).is_err());
        assert!(validate_file_extension("input_file", "data", &["xlsx", "csv"]).is_err());
    }
}
