//! Pure parse/render for the INI config file.

use ini::{EscapePolicy, Ini, ParseOption, WriteOption};

use crate::domain::AppError;

/// Parse config content the way Python's `configparser` reads it.
///
/// Quotes and backslashes are kept verbatim, indented lines continue the
/// previous value, and every entry must sit under a section header.
pub fn parse_config_content(content: &str) -> Result<Ini, AppError> {
    let option = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        enabled_indented_mutiline_value: true,
        ..ParseOption::default()
    };
    let doc = Ini::load_from_str_opt(content, option)?;
    if doc.section(None::<String>).is_some_and(|props| !props.is_empty()) {
        return Err(AppError::config_error(
            "Invalid config file: entries must follow a section header such as [heroku]",
        ));
    }
    Ok(doc)
}

/// Render a document as `key = value` lines without escaping.
pub fn render_config(doc: &Ini) -> Result<String, AppError> {
    let option = WriteOption {
        escape_policy: EscapePolicy::Nothing,
        kv_separator: " = ",
        ..WriteOption::default()
    };
    let mut buf = Vec::new();
    doc.write_to_opt(&mut buf, option)?;
    String::from_utf8(buf).map_err(|e| AppError::config_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections_and_entries() {
        let doc = parse_config_content(
            "# comment\n[heroku]\napi_key = abc\naddons: heroku-postgresql:mini\n\n[env_vars]\nDEBUG = true\n",
        )
        .unwrap();

        assert_eq!(doc.get_from(Some("heroku"), "api_key"), Some("abc"));
        assert_eq!(doc.get_from(Some("heroku"), "addons"), Some("heroku-postgresql:mini"));
        assert_eq!(doc.get_from(Some("env_vars"), "DEBUG"), Some("true"));
        assert_eq!(doc.get_from(Some("cloudflare"), "email"), None);
    }

    #[test]
    fn value_may_contain_separators_and_backslashes() {
        let doc = parse_config_content(
            "[env_vars]\nDATABASE_URL = postgres://u:p@h/db?x=1\nPATTERN = \\d+\"x\"\n",
        )
        .unwrap();
        assert_eq!(doc.get_from(Some("env_vars"), "DATABASE_URL"), Some("postgres://u:p@h/db?x=1"));
        assert_eq!(doc.get_from(Some("env_vars"), "PATTERN"), Some("\\d+\"x\""));
    }

    #[test]
    fn keys_keep_their_case() {
        let doc = parse_config_content("[env_vars]\nRAILS_ENV = review\n").unwrap();
        assert_eq!(doc.get_from(Some("env_vars"), "RAILS_ENV"), Some("review"));
    }

    #[test]
    fn indented_line_continues_previous_value() {
        let doc = parse_config_content("[env_vars]\nNOTE = first\n    second\nNEXT = 1\n").unwrap();

        let note = doc.get_from(Some("env_vars"), "NOTE").unwrap();
        assert!(note.starts_with("first"));
        assert!(note.ends_with("second"));
        assert_eq!(doc.get_from(Some("env_vars"), "NEXT"), Some("1"));
    }

    #[test]
    fn comment_after_section_header_is_ignored() {
        let doc = parse_config_content("[heroku] ; main\napi_key = k\n").unwrap();
        assert_eq!(doc.get_from(Some("heroku"), "api_key"), Some("k"));
    }

    #[test]
    fn rejects_entry_outside_section() {
        let err = parse_config_content("api_key = abc\n").unwrap_err();
        assert!(err.to_string().contains("section header"));
    }

    #[test]
    fn rejects_unterminated_section_header() {
        let err = parse_config_content("[heroku\napi_key = abc\n").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
    }

    #[test]
    fn render_uses_spaced_separator_and_reparses() {
        let mut doc = Ini::new();
        doc.with_section(Some("heroku")).set("api_key", "abc").set("pipeline_id", "p-1");
        doc.with_section(Some("env_vars")).set("PATTERN", "a\\b");

        let text = render_config(&doc).unwrap();

        assert!(text.contains("[heroku]\napi_key = abc\npipeline_id = p-1\n"));
        assert!(text.contains("PATTERN = a\\b"));
        let reparsed = parse_config_content(&text).unwrap();
        assert_eq!(reparsed.get_from(Some("env_vars"), "PATTERN"), Some("a\\b"));
    }
}
