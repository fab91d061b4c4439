/// A contact-form submission that passed the presence check.
///
/// Only presence is enforced: the values are not trimmed, the email is not
/// checked for format and nothing is length-limited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub topic: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("All fields are required")]
pub struct ValidationError {
    pub missing_fields: Vec<&'static str>,
}

impl ContactSubmission {
    pub fn parse(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        topic: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ValidationError> {
        let mut missing_fields = Vec::new();
        let mut require = |field: &'static str, value: Option<String>| match value {
            Some(value) if !value.is_empty() => value,
            _ => {
                missing_fields.push(field);
                String::new()
            }
        };

        let submission = Self {
            name: require("name", name),
            email: require("email", email),
            phone: require("phone", phone),
            topic: require("topic", topic),
            message: require("message", message),
        };

        if missing_fields.is_empty() {
            Ok(submission)
        } else {
            Err(ValidationError { missing_fields })
        }
    }
}
