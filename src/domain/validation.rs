use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    InvalidVerifyCode { input: String },
    MissingCodePlaceholder { placeholder: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidVerifyCode { input } => {
                write!(f, "verify code must contain only ASCII digits: {input}")
            }
            Self::MissingCodePlaceholder { placeholder } => {
                write!(f, "template must contain the {placeholder} placeholder")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty {
            field: "phone_number",
        };
        assert_eq!(err.to_string(), "phone_number must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::InvalidVerifyCode {
            input: "12a45".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "verify code must contain only ASCII digits: 12a45"
        );

        let err = ValidationError::MissingCodePlaceholder {
            placeholder: "$$CODE$$",
        };
        assert_eq!(
            err.to_string(),
            "template must contain the $$CODE$$ placeholder"
        );
    }
}
