//! Contact entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::ContactStatus;
use sqlx::FromRow;

/// Database enum for contact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "contact_status", rename_all = "lowercase")]
pub enum ContactStatusDb {
    Novo,
    Lido,
    Respondido,
}

impl From<ContactStatusDb> for ContactStatus {
    fn from(status: ContactStatusDb) -> Self {
        match status {
            ContactStatusDb::Novo => ContactStatus::Novo,
            ContactStatusDb::Lido => ContactStatus::Lido,
            ContactStatusDb::Respondido => ContactStatus::Respondido,
        }
    }
}

impl From<ContactStatus> for ContactStatusDb {
    fn from(status: ContactStatus) -> Self {
        match status {
            ContactStatus::Novo => ContactStatusDb::Novo,
            ContactStatus::Lido => ContactStatusDb::Lido,
            ContactStatus::Respondido => ContactStatusDb::Respondido,
        }
    }
}

/// Database row mapping for the contacts table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub subject: Option<String>,
    pub status: ContactStatusDb,
    pub created_at: DateTime<Utc>,
}

impl From<ContactEntity> for domain::models::Contact {
    fn from(entity: ContactEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            message: entity.message,
            subject: entity.subject,
            status: entity.status.into(),
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::Contact;

    #[test]
    fn test_status_conversion_both_ways() {
        for status in [ContactStatus::Novo, ContactStatus::Lido, ContactStatus::Respondido] {
            let db: ContactStatusDb = status.into();
            assert_eq!(ContactStatus::from(db), status);
        }
    }

    #[test]
    fn test_contact_entity_to_domain() {
        let entity = ContactEntity {
            id: 11,
            name: "Carlos".to_string(),
            email: "carlos@example.com".to_string(),
            phone: Some("+55 11 99999-0000".to_string()),
            message: "Gostaria de agendar".to_string(),
            subject: None,
            status: ContactStatusDb::Lido,
            created_at: Utc::now(),
        };

        let contact: Contact = entity.into();
        assert_eq!(contact.id, 11);
        assert_eq!(contact.status, ContactStatus::Lido);
        assert_eq!(contact.phone.as_deref(), Some("+55 11 99999-0000"));
    }
}
