//! Contact form validation.
//!
//! The form is rendered statically; the dev server validates submissions
//! at `POST /api/contact`. Error messages come from the `Contact` namespace
//! of the submitter's catalog:
//!
//! ```text
//! Contact.form.nameRequired     blank name
//! Contact.form.emailRequired    blank email
//! Contact.form.emailInvalid     email not shaped like a@b.c
//! Contact.form.subjectRequired  blank subject
//! Contact.form.messageRequired  blank message
//! ```
//!
//! Delivering the message is out of scope; a valid form is only acknowledged.

use crate::i18n::Catalog;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const CONTACT_NAMESPACE: &str = "Contact";

/// Dev-server endpoint the form posts to.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A contact form submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Locale of the page the form was sent from.
    pub locale: Option<String>,
}

/// Localized error per invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl ContactForm {
    /// Validate every field, returning all errors at once.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), FieldErrors> {
        let t = catalog.namespace(CONTACT_NAMESPACE);
        let required = |value: &str, key: &str| value.trim().is_empty().then(|| t.t(key));

        let email = if self.email.trim().is_empty() {
            Some(t.t("form.emailRequired"))
        } else if !is_valid_email(&self.email) {
            Some(t.t("form.emailInvalid"))
        } else {
            None
        };

        let errors = FieldErrors {
            name: required(&self.name, "form.nameRequired"),
            email,
            subject: required(&self.subject, "form.subjectRequired"),
            message: required(&self.message, "form.messageRequired"),
        };

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::from_value(
            "en",
            json!({ "Contact": { "form": {
                "nameRequired": "Name is required",
                "emailRequired": "Email is required",
                "emailInvalid": "Please enter a valid email",
                "subjectRequired": "Subject is required",
                "messageRequired": "Message is required"
            } } }),
        )
        .unwrap()
    }

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
            locale: None,
        }
    }

    #[test]
    fn test_valid_form() {
        let form = form("Sara", "sara@example.com", "Hi", "Let's talk");
        assert!(form.validate(&catalog()).is_ok());
    }

    #[test]
    fn test_blank_fields_reported_together() {
        let errors = form("  ", "", "\t", "").validate(&catalog()).unwrap_err();
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.subject.as_deref(), Some("Subject is required"));
        assert_eq!(errors.message.as_deref(), Some("Message is required"));
    }

    #[test]
    fn test_invalid_email() {
        let errors = form("Sara", "sara@example", "Hi", "Hello")
            .validate(&catalog())
            .unwrap_err();
        assert_eq!(errors.email.as_deref(), Some("Please enter a valid email"));
        assert!(errors.name.is_none());

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, json!({ "email": "Please enter a valid email" }));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email(" a@b.c"));
    }

    #[test]
    fn test_untranslated_errors_echo_key() {
        let errors = form("", "x@y.z", "s", "m")
            .validate(&Catalog::default())
            .unwrap_err();
        assert_eq!(errors.name.as_deref(), Some("Contact.form.nameRequired"));
    }

    #[test]
    fn test_deserialize_partial_json() {
        let form: ContactForm =
            serde_json::from_str(r#"{"name":"Sara","locale":"ar"}"#).unwrap();
        assert_eq!(form.locale.as_deref(), Some("ar"));
        assert!(form.email.is_empty());
    }
}
