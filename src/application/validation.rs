use validator::{ValidationError, ValidationErrors};

use crate::application::error::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Rejects values that are empty once surrounding whitespace is removed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Field names travel to the client as the camelCase keys it sent.
fn client_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                // One message per field is enough for the client.
                let first = errs.first()?;
                let field = client_field_name(&field);
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                Some(FieldError { field, message })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ServiceError::Validation(fields)
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(
            required(message = "Name is required"),
            custom(function = "not_blank", message = "Name is required"),
            length(max = 3, message = "Name is too long")
        )]
        name: Option<String>,
        #[validate(range(min = 0))]
        lucky_number: Option<i32>,
    }

    fn fields(sample: Sample) -> Vec<FieldError> {
        match sample.validate().map_err(ServiceError::from) {
            Err(ServiceError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn blank_and_missing_values_share_one_message() {
        for name in [None, Some("   ".to_string())] {
            let errors = fields(Sample {
                name,
                lucky_number: None,
            });
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "name");
            assert_eq!(errors[0].message, "Name is required");
        }
    }

    #[test]
    fn length_counts_characters() {
        let ok = Sample {
            name: Some("ééé".into()),
            lucky_number: None,
        };
        assert!(ok.validate().is_ok());
        let errors = fields(Sample {
            name: Some("éééé".into()),
            lucky_number: None,
        });
        assert_eq!(errors[0].message, "Name is too long");
    }

    #[test]
    fn snake_case_fields_are_reported_in_camel_case_and_sorted() {
        let errors = fields(Sample {
            name: None,
            lucky_number: Some(-1),
        });
        let names: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(names, vec!["luckyNumber", "name"]);
        assert_eq!(errors[0].message, "luckyNumber is invalid");
    }
}
