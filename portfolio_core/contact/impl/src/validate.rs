//! Parsing of untrusted contact form payloads into [`ContactSubmission`]s.

use portfolio_models::{
    contact::{
        ContactField, ContactFieldError, ContactFieldErrors, ContactMessageAuthorName,
        ContactMessageContent, ContactSubmission,
    },
    email_address::EmailAddress,
};
use serde_json::{Map, Value};

/// Validate a contact form payload.
///
/// All fields are checked, so a rejected payload reports every violated
/// constraint at once, in the order name, email, message. A payload which
/// is not a JSON object is treated like an empty object.
pub fn validate_submission(payload: &Value) -> Result<ContactSubmission, ContactFieldErrors> {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);

    // a name below the minimum length counts as missing
    let name = field_str(fields, ContactField::Name).and_then(|name| {
        ContactMessageAuthorName::try_new(name.to_owned())
            .map_err(|_| ContactFieldError::new(ContactField::Name, "Name is required"))
    });

    let email = field_str(fields, ContactField::Email).and_then(|email| {
        email
            .trim()
            .parse::<EmailAddress>()
            .map_err(|_| ContactFieldError::new(ContactField::Email, "Invalid email address"))
    });

    let message = field_str(fields, ContactField::Message).and_then(|message| {
        ContactMessageContent::try_new(message.to_owned()).map_err(|_| {
            ContactFieldError::new(
                ContactField::Message,
                format!(
                    "Message must be at least {} characters",
                    ContactMessageContent::MIN_LEN
                ),
            )
        })
    });

    match (name, email, message) {
        (Ok(name), Ok(email), Ok(message)) => Ok(ContactSubmission {
            name,
            email,
            message,
        }),
        (name, email, message) => Err([name.err(), email.err(), message.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}

fn field_str(fields: &Map<String, Value>, field: ContactField) -> Result<&str, ContactFieldError> {
    match fields.get(field.key()) {
        None | Some(Value::Null) => Err(ContactFieldError::new(
            field,
            format!("{} is required", field.label()),
        )),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(ContactFieldError::new(
            field,
            format!("{} must be a string", field.label()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn ok() {
        // Act
        let result = validate_submission(&json!({
            "name": "Al",
            "email": "al@example.com",
            "message": "Hello, this is a test message.",
        }));

        // Assert
        let submission = result.unwrap();
        assert_eq!(submission.name.as_str(), "Al");
        assert_eq!(submission.email.as_str(), "al@example.com");
        assert_eq!(submission.message.as_str(), "Hello, this is a test message.");
    }

    #[test]
    fn trims_whitespace() {
        // Act
        let result = validate_submission(&json!({
            "name": "  Max Mustermann ",
            "email": " max.mustermann@example.de\n",
            "message": "\tHello World, how are you?  ",
        }));

        // Assert
        let submission = result.unwrap();
        assert_eq!(submission.name.as_str(), "Max Mustermann");
        assert_eq!(submission.email.as_str(), "max.mustermann@example.de");
        assert_eq!(submission.message.as_str(), "Hello World, how are you?");
    }

    #[test]
    fn ignores_unknown_fields() {
        let result = validate_submission(&json!({
            "name": "Al",
            "email": "al@example.com",
            "message": "Hello, this is a test message.",
            "subject": 42,
        }));

        result.unwrap();
    }

    #[test]
    fn boundaries() {
        for (name_len, message_len, ok) in [
            (2, 10, true),
            (1000, 5000, true),
            (1, 10, false),
            (2, 9, false),
            (0, 10, false),
        ] {
            let result = validate_submission(&json!({
                "name": "n".repeat(name_len),
                "email": "al@example.com",
                "message": "m".repeat(message_len),
            }));
            assert_eq!(result.is_ok(), ok, "name={name_len} message={message_len}");
        }
    }

    #[test]
    fn long_message_is_accepted() {
        // Act
        let result = validate_submission(&json!({
            "name": "Max Mustermann",
            "email": "max.mustermann@example.de",
            "message": "Hello! ".repeat(1000),
        }));

        // Assert
        let submission = result.unwrap();
        assert_eq!(submission.message.chars().count(), 6999);
    }

    #[test]
    fn lengths_are_counted_in_characters() {
        let result = validate_submission(&json!({
            "name": "Jö",
            "email": "al@example.com",
            "message": "äöüäöüäöüß",
        }));

        result.unwrap();
    }

    #[test]
    fn empty_object() {
        // Act
        let result = validate_submission(&json!({}));

        // Assert
        assert_eq!(
            result.unwrap_err(),
            [
                ContactFieldError::new(ContactField::Name, "Name is required"),
                ContactFieldError::new(ContactField::Email, "Email is required"),
                ContactFieldError::new(ContactField::Message, "Message is required"),
            ]
        );
    }

    #[test]
    fn not_an_object() {
        for payload in [json!(null), json!("hello"), json!([1, 2, 3]), json!(7)] {
            let result = validate_submission(&payload);
            assert_eq!(result.unwrap_err().len(), 3, "{payload}");
        }
    }

    #[test]
    fn null_and_wrong_types() {
        // Act
        let result = validate_submission(&json!({
            "name": null,
            "email": ["al@example.com"],
            "message": 1234567890,
        }));

        // Assert
        assert_eq!(
            result.unwrap_err(),
            [
                ContactFieldError::new(ContactField::Name, "Name is required"),
                ContactFieldError::new(ContactField::Email, "Email must be a string"),
                ContactFieldError::new(ContactField::Message, "Message must be a string"),
            ]
        );
    }

    #[test]
    fn single_invalid_field() {
        // Act
        let result = validate_submission(&json!({
            "name": "A",
            "email": "al@example.com",
            "message": "Hello, this is a test message.",
        }));

        // Assert
        assert_eq!(
            result.unwrap_err(),
            [ContactFieldError::new(ContactField::Name, "Name is required")]
        );
    }

    #[test]
    fn all_fields_invalid() {
        // Act
        let result = validate_submission(&json!({
            "name": " x ",
            "email": "not-an-email",
            "message": "short",
        }));

        // Assert
        assert_eq!(
            result.unwrap_err(),
            [
                ContactFieldError::new(ContactField::Name, "Name is required"),
                ContactFieldError::new(ContactField::Email, "Invalid email address"),
                ContactFieldError::new(
                    ContactField::Message,
                    "Message must be at least 10 characters"
                ),
            ]
        );
    }

    #[test]
    fn whitespace_only_message_is_too_short() {
        let result = validate_submission(&json!({
            "name": "Al",
            "email": "al@example.com",
            "message": "              ",
        }));

        assert_eq!(
            result.unwrap_err(),
            [ContactFieldError::new(
                ContactField::Message,
                "Message must be at least 10 characters"
            )]
        );
    }
}
