//! Field validation helpers shared by request schemas.

use validator::{ValidationError, ValidationErrors};

use crate::slug::is_url_safe_slug;

/// Returns true when a string field counts as "missing": absent or blank.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}

/// Takes a required string field, recording a `required` error when it is
/// missing. The returned value is empty in that case and must not be used
/// unless `errors` stays empty.
pub fn require_field(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
) -> String {
    match value {
        Some(v) if !is_blank(Some(&v)) => v,
        _ => {
            let mut err = ValidationError::new("required");
            err.message = Some(format!("{} is required", field).into());
            errors.add(field, err);
            String::new()
        }
    }
}

/// Rejects strings that are empty after trimming.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value cannot be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Rejects slugs that are not lowercase hyphen-separated words.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if is_url_safe_slug(slug) {
        Ok(())
    } else {
        let mut err = ValidationError::new("slug_format");
        err.message = Some(
            "Slug may only contain lowercase letters, digits and single hyphens".into(),
        );
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   \t")));
        assert!(!is_blank(Some("x")));
        assert!(!is_blank(Some("  Maria ")));
    }

    #[test]
    fn test_require_field() {
        let mut errors = ValidationErrors::new();
        assert_eq!(require_field(&mut errors, "name", Some("Ana".to_string())), "Ana");
        assert!(errors.is_empty());

        assert_eq!(require_field(&mut errors, "email", None), "");
        assert_eq!(require_field(&mut errors, "message", Some("  ".to_string())), "");
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["email"][0].code, "required");
        assert_eq!(
            fields["email"][0].message.as_ref().unwrap().to_string(),
            "email is required"
        );
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Título").is_ok());
        let err = validate_not_blank("  ").unwrap_err();
        assert_eq!(err.code, "blank");
        assert_eq!(err.message.unwrap().to_string(), "Value cannot be blank");
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("mindfulness-no-dia-a-dia").is_ok());
        let err = validate_slug("Mindfulness").unwrap_err();
        assert_eq!(err.code, "slug_format");
    }
}
