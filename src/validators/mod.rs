//! Validation helpers shared by the handlers.

use validator::ValidationErrors;

use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Extracts error messages from ValidationErrors and converts them into
/// a format suitable for API responses.
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 3, message = "too short"))]
        name: String,
    }

    #[test]
    fn validation_errors_carry_field_messages() {
        let err = Probe {
            name: "ab".to_string(),
        }
        .validate()
        .unwrap_err();

        match validation_errors_to_api_error(err) {
            ApiError::ValidationError(errors) => {
                assert_eq!(errors, vec!["too short".to_string()]);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
