use regex::Regex;
use std::sync::OnceLock;

static FORBIDDEN_CHARS: OnceLock<Regex> = OnceLock::new();

/// 清理檔名：把路徑片段裡不允許的字元換成底線
///
/// Total over any input and idempotent; everything outside the forbidden
/// set passes through unchanged.
pub fn sanitize_filename(name: &str) -> String {
    let re = FORBIDDEN_CHARS.get_or_init(|| Regex::new(r#"[\\/*?:"<>|\n]"#).unwrap());
    re.replace_all(name, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_forbidden_character() {
        assert_eq!(sanitize_filename(r#"a\b/c*d?e:f"g<h>i|j"#), "a_b_c_d_e_f_g_h_i_j");
        assert_eq!(sanitize_filename("line1\nline2"), "line1_line2");
    }

    #[test]
    fn test_leaves_other_characters_unchanged() {
        assert_eq!(sanitize_filename("Jane Doe-42 (ñandú)"), "Jane Doe-42 (ñandú)");
        assert_eq!(sanitize_filename(""), "");
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize_filename("Jane/Doe:A?B");
        assert_eq!(sanitize_filename(&once), once);
    }
}
