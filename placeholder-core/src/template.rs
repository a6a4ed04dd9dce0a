//! `{token}` substitution for the legacy URL templates

use crate::error::{PlaceholderError, Result};
use std::collections::BTreeMap;

/// Replace every `{name}` in `template` with its value from `variables`
///
/// # Errors
///
/// Returns an internal error if a token has no value or a brace is never closed
pub fn render(template: &str, variables: &BTreeMap<&str, String>) -> Result<String> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);

        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| {
            PlaceholderError::internal(format!("Unterminated template token in '{template}'"))
                .with_context("template", template)
        })?;

        let name = &after[..end];
        let value = variables.get(name).ok_or_else(|| {
            PlaceholderError::internal(format!("Missing template variable '{name}'"))
                .with_context("template", template)
                .with_context("variable", name)
        })?;
        output.push_str(value);

        rest = &after[end + 1..];
    }

    output.push_str(rest);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn vars(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_render_substitutes_all_tokens() {
        let variables = vars(&[("baseUrl", "https://example.com"), ("width", "300"), ("height", "200")]);
        let rendered = render("{baseUrl}/{width}x{height}", &variables).unwrap();
        assert_eq!(rendered, "https://example.com/300x200");
    }

    #[test]
    fn test_render_without_tokens() {
        let rendered = render("static", &BTreeMap::new()).unwrap();
        assert_eq!(rendered, "static");
    }

    #[test]
    fn test_render_missing_variable_is_internal_error() {
        let variables = vars(&[("width", "300")]);
        let err = render("{width}/{height}", &variables).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.context()["variable"], "height");
    }

    #[test]
    fn test_render_unterminated_token() {
        let err = render("{width", &vars(&[("width", "1")])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.message().contains("Unterminated"));
    }
}
