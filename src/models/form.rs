use thiserror::Error;

/// Why a form refused to submit. Shown inline under the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),
    #[error("Unknown robot selected")]
    UnknownRobot,
}

/// Trimmed copy of a required text field.
pub(crate) fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_field_is_rejected() {
        assert_eq!(required("   ", "name"), Err(FormError::MissingField("name")));
        assert_eq!(required(" Gold ", "name"), Ok("Gold".to_string()));
    }

    #[test]
    fn missing_field_message_names_the_field() {
        assert_eq!(
            FormError::MissingField("server").to_string(),
            "Please fill in the server field"
        );
    }
}
