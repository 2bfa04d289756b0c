use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Spreadsheet read error: {0}")]
    SpreadsheetError(#[from] calamine::Error),

    #[error("Workbook write error: {0}")]
    WorkbookError(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("QR encoding error: {message}")]
    QrError { message: String },

    #[error("Image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing column '{column}' in {file}")]
    MissingColumnError { column: String, file: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    InputData,
    Rendering,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::SpreadsheetError(_)
            | EtlError::CsvError(_)
            | EtlError::MissingColumnError { .. } => ErrorCategory::InputData,
            EtlError::QrError { .. } | EtlError::ImageError(_) => ErrorCategory::Rendering,
            EtlError::WorkbookError(_) | EtlError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::IoError(_) => ErrorSeverity::Critical,
            EtlError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            EtlError::SpreadsheetError(_)
            | EtlError::CsvError(_)
            | EtlError::MissingColumnError { .. } => ErrorSeverity::High,
            EtlError::QrError { .. } | EtlError::ImageError(_) | EtlError::WorkbookError(_) => {
                ErrorSeverity::High
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::SpreadsheetError(_) | EtlError::CsvError(_) => {
                "Check that the input file is a valid .xlsx or .csv table".to_string()
            }
            EtlError::MissingColumnError { column, .. } => {
                format!("Add a '{}' column to the input table header row", column)
            }
            EtlError::QrError { .. } => {
                "The identifier could not be encoded; check the starting id".to_string()
            }
            EtlError::ImageError(_) | EtlError::WorkbookError(_) => {
                "Check that the output location is writable and has free space".to_string()
            }
            EtlError::IoError(_) => {
                "Check file paths, permissions and free disk space".to_string()
            }
            EtlError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value passed for --{}", field.replace('_', "-"))
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::SpreadsheetError(_) | EtlError::CsvError(_) => {
                "The input table could not be read".to_string()
            }
            EtlError::MissingColumnError { column, file } => {
                format!("The table '{}' has no '{}' column", file, column)
            }
            EtlError::QrError { .. } => "A QR code could not be generated".to_string(),
            EtlError::ImageError(_) => "A QR image could not be encoded".to_string(),
            EtlError::WorkbookError(_) => "The output spreadsheet could not be written".to_string(),
            EtlError::IoError(e) => format!("A file operation failed: {}", e),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
