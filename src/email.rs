//! Contact form: validation plus the transactional email send.
//!
//! Validation is pure and runs on both sides of the wire; the actual send is
//! ssr-only and posts the EmailJS REST payload. Failure surfaces to the page
//! as a generic retry-later message, no retry, no backoff.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub project_type: String,
    pub budget: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Required fields and a structural email check. Company, project type and
/// budget are optional context.
pub fn validate(form: &ContactForm) -> Vec<(Field, &'static str)> {
    let mut errors = Vec::new();
    if form.name.trim().is_empty() {
        errors.push((Field::Name, "Please tell me your name"));
    }
    if form.email.trim().is_empty() {
        errors.push((Field::Email, "An email address is required"));
    } else if !is_valid_email(form.email.trim()) {
        errors.push((Field::Email, "That email address doesn't look right"));
    }
    if form.message.trim().is_empty() {
        errors.push((Field::Message, "The message can't be empty"));
    }
    errors
}

/// Good enough for a contact form: one `@`, a dotted domain, no spaces.
pub fn is_valid_email(address: &str) -> bool {
    if address.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

#[cfg(feature = "ssr")]
pub use send::{send, EmailError};

#[cfg(feature = "ssr")]
mod send {
    use super::ContactForm;
    use crate::config;
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum EmailError {
        #[error("email provider rejected the message with {0}")]
        Rejected(reqwest::StatusCode),
        #[error(transparent)]
        Http(#[from] reqwest::Error),
    }

    /// Deliver the form through the EmailJS REST API to the fixed recipient.
    pub async fn send(form: &ContactForm) -> Result<(), EmailError> {
        let payload = serde_json::json!({
            "service_id": config::EMAILJS_SERVICE_ID,
            "template_id": config::EMAILJS_TEMPLATE_ID,
            "user_id": config::EMAILJS_PUBLIC_KEY,
            "template_params": {
                "from_name": form.name,
                "from_email": form.email,
                "company": form.company,
                "project_type": form.project_type,
                "budget": form.budget,
                "message": form.message,
                "to_email": config::CONTACT_EMAIL,
            },
        });
        let client = reqwest::Client::new();
        let response = client
            .post(config::EMAILJS_API_URL)
            .json(&payload)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(EmailError::Rejected(response.status()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: String::new(),
            project_type: "Web Development".to_string(),
            budget: String::new(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn complete_form_validates() {
        assert!(validate(&filled_form()).is_empty());
    }

    #[test]
    fn required_fields_are_enforced() {
        let form = ContactForm::default();
        let errors = validate(&form);
        let fields: Vec<Field> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn malformed_email_is_flagged() {
        let mut form = filled_form();
        for bad in ["plainaddress", "a@b", "@example.com", "a@.com", "a b@c.io"] {
            form.email = bad.to_string();
            let errors = validate(&form);
            assert!(
                errors.iter().any(|(f, _)| *f == Field::Email),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("someone@example.com"));
        assert!(is_valid_email("first.last@sub.domain.io"));
        assert!(!is_valid_email("nope"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("trailing@example.com."));
    }

    #[test]
    fn whitespace_only_fields_do_not_pass() {
        let mut form = filled_form();
        form.message = "   ".to_string();
        let errors = validate(&form);
        assert_eq!(errors, vec![(Field::Message, "The message can't be empty")]);
    }
}
