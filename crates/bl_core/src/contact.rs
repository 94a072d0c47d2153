use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Bug,
    Suggestion,
    Compliment,
    General,
}

impl FeedbackType {
    pub const ALL: [FeedbackType; 4] = [
        FeedbackType::Bug,
        FeedbackType::Suggestion,
        FeedbackType::Compliment,
        FeedbackType::General,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            FeedbackType::Bug => "bug",
            FeedbackType::Suggestion => "suggestion",
            FeedbackType::Compliment => "compliment",
            FeedbackType::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackType::Bug => "Bug Report",
            FeedbackType::Suggestion => "Feature Suggestion",
            FeedbackType::Compliment => "Compliment",
            FeedbackType::General => "General Inquiry",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for FeedbackType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FeedbackType::ALL
            .into_iter()
            .find(|t| t.value() == s)
            .ok_or_else(|| Error::InvalidValue(format!("unknown feedback type '{}'", s)))
    }
}

/// Raw contact form fields as posted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub feedback_type: String,
    pub message: String,
}

/// A contact form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub feedback_type: Option<FeedbackType>,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !email.contains('@') {
            errors.push(FieldError::new("email", "Enter a valid email address"));
        }

        let feedback_type = match self.feedback_type.trim() {
            "" => None,
            value => match value.parse::<FeedbackType>() {
                Ok(t) => Some(t),
                Err(_) => {
                    errors.push(FieldError::new("feedback_type", "Select a listed feedback type"));
                    None
                }
            },
        };

        if self.message.trim().is_empty() {
            errors.push(FieldError::new("message", "Message is required"));
        }

        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            feedback_type,
            message: self.message.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            feedback_type: "suggestion".to_string(),
            message: "More sources please".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let submission = form().validate().unwrap();
        assert_eq!(submission.feedback_type, Some(FeedbackType::Suggestion));
        assert_eq!(submission.message, "More sources please");
    }

    #[test]
    fn test_feedback_type_is_optional() {
        let mut form = form();
        form.feedback_type.clear();
        assert_eq!(form.validate().unwrap().feedback_type, None);
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let err = ContactForm::default().validate().unwrap_err();
        match err {
            Error::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec!["name", "email", "message"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_email_and_type() {
        let mut form = form();
        form.email = "not-an-email".to_string();
        form.feedback_type = "rant".to_string();
        match form.validate() {
            Err(Error::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].field, "email");
                assert_eq!(errors[1].field, "feedback_type");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
