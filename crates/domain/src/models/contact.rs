//! Contact message domain model and its status workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::require_field;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use super::fields::trimmed;

/// Processing status of a contact message.
///
/// Status only moves forward: `novo` -> `lido` -> `respondido`, with
/// `novo` -> `respondido` allowed directly.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Novo,
    Lido,
    Respondido,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Novo => "novo",
            ContactStatus::Lido => "lido",
            ContactStatus::Respondido => "respondido",
        }
    }

    /// Whether an admin may move a message from `self` to `next`.
    ///
    /// Re-applying the current status is allowed and changes nothing.
    pub fn can_transition_to(self, next: ContactStatus) -> bool {
        next >= self
    }

    /// Validates a transition, returning the resulting status.
    pub fn transition_to(self, next: ContactStatus) -> Result<ContactStatus, StatusTransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(StatusTransitionError::Backward {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = StatusTransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "novo" => Ok(ContactStatus::Novo),
            "lido" => Ok(ContactStatus::Lido),
            "respondido" => Ok(ContactStatus::Respondido),
            other => Err(StatusTransitionError::Unknown(other.to_string())),
        }
    }
}

/// Rejected status change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusTransitionError {
    #[error("Unknown contact status '{0}', expected novo, lido or respondido")]
    Unknown(String),

    #[error("Contact status cannot go back from {from} to {to}")]
    Backward {
        from: ContactStatus,
        to: ContactStatus,
    },
}

/// A message sent through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub subject: Option<String>,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// Public contact form payload. Unknown keys such as `status` are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 5000, message = "Message must be at most 5000 characters"))]
    pub message: Option<String>,

    #[validate(length(max = 255, message = "Subject must be at most 255 characters"))]
    pub subject: Option<String>,
}

/// Validated contact message, always stored as `novo`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub subject: Option<String>,
}

impl TryFrom<CreateContactRequest> for NewContact {
    type Error = ValidationErrors;

    fn try_from(request: CreateContactRequest) -> Result<Self, Self::Error> {
        let mut errors = request.validate().err().unwrap_or_else(ValidationErrors::new);
        let name = require_field(&mut errors, "name", request.name);
        let email = require_field(&mut errors, "email", request.email);
        let message = require_field(&mut errors, "message", request.message);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: request.phone.filter(|p| !p.trim().is_empty()),
            message,
            subject: request.subject.filter(|s| !s.trim().is_empty()),
        })
    }
}

/// Payload for `PATCH /api/admin/contact/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContactStatusRequest {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&ContactStatus::Novo).unwrap(), "\"novo\"");
        let parsed: ContactStatus = serde_json::from_str("\"respondido\"").unwrap();
        assert_eq!(parsed, ContactStatus::Respondido);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("lido".parse::<ContactStatus>().unwrap(), ContactStatus::Lido);
        assert_eq!(
            "arquivado".parse::<ContactStatus>(),
            Err(StatusTransitionError::Unknown("arquivado".to_string()))
        );
        assert!("Lido".parse::<ContactStatus>().is_err());
    }

    #[test]
    fn test_forward_transitions() {
        use ContactStatus::*;
        assert_eq!(Novo.transition_to(Lido), Ok(Lido));
        assert_eq!(Lido.transition_to(Respondido), Ok(Respondido));
        assert_eq!(Novo.transition_to(Respondido), Ok(Respondido));
    }

    #[test]
    fn test_same_status_is_idempotent() {
        for status in [ContactStatus::Novo, ContactStatus::Lido, ContactStatus::Respondido] {
            assert_eq!(status.transition_to(status), Ok(status));
        }
    }

    #[test]
    fn test_backward_transitions_rejected() {
        use ContactStatus::*;
        for (from, to) in [(Lido, Novo), (Respondido, Lido), (Respondido, Novo)] {
            assert!(!from.can_transition_to(to));
            let err = from.transition_to(to).unwrap_err();
            assert_eq!(err, StatusTransitionError::Backward { from, to });
        }
        assert_eq!(
            Respondido.transition_to(Novo).unwrap_err().to_string(),
            "Contact status cannot go back from respondido to novo"
        );
    }

    #[test]
    fn test_default_status_is_novo() {
        assert_eq!(ContactStatus::default(), ContactStatus::Novo);
    }

    #[test]
    fn test_new_contact_trims_email_before_validation() {
        let json = r#"{"name":"Ana","email":"  ana@example.com ","message":"Olá"}"#;
        let req: CreateContactRequest = serde_json::from_str(json).unwrap();
        let contact = NewContact::try_from(req).unwrap();
        assert_eq!(contact.email, "ana@example.com");
    }

    #[test]
    fn test_new_contact_ignores_client_status() {
        let json = r#"{"name":"Ana","email":"ana@example.com","message":"Olá","status":"respondido"}"#;
        let req: CreateContactRequest = serde_json::from_str(json).unwrap();
        let contact = NewContact::try_from(req).unwrap();
        assert_eq!(contact.name, "Ana");
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn test_new_contact_required_fields() {
        let req = CreateContactRequest {
            name: Some(" ".to_string()),
            ..Default::default()
        };
        let errors = NewContact::try_from(req).unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("message"));
    }

    #[test]
    fn test_new_contact_invalid_email() {
        let req = CreateContactRequest {
            name: Some("Ana".to_string()),
            email: Some("not-an-email".to_string()),
            message: Some("Oi".to_string()),
            ..Default::default()
        };
        let errors = NewContact::try_from(req).unwrap_err();
        assert_eq!(errors.field_errors()["email"][0].code, "email");
    }

    #[test]
    fn test_contact_serializes_camel_case() {
        let contact = Contact {
            id: 3,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            message: "Oi".to_string(),
            subject: None,
            status: ContactStatus::Lido,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["status"], "lido");
        assert!(value.get("createdAt").is_some());
    }
}
