use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::validation::require_field;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "Name must not be empty".to_string()
    }

    pub fn email_req() -> String {
        "Email must not be empty".to_string()
    }

    pub fn phone_req() -> String {
        "Phone must not be empty".to_string()
    }
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Checks that every field carries text. Stores call this before writing
    /// so two empty keys can never collide on the unique columns.
    pub fn validate(&self) -> Result<(), AppError> {
        require_field(&self.name, ValidationReq::name_req)?;
        require_field(&self.email, ValidationReq::email_req)?;
        require_field(&self.phone, ValidationReq::phone_req)?;
        Ok(())
    }

    /// True when `other` claims the same email or phone.
    pub fn shares_key_with(&self, other: &Contact) -> bool {
        self.email == other.email || self.phone == other.phone
    }
}

// TEST
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_fields() {
        let contact = Contact::new("Uche", "  ", "0812345678");

        let err = contact.validate().unwrap_err();
        assert_eq!(
            format!("{}", err),
            format!("Validation failed: {}", ValidationReq::email_req())
        );

        assert!(Contact::new("", "u@example.com", "0812345678").validate().is_err());
        assert!(Contact::new("Uche", "u@example.com", "").validate().is_err());
        assert!(Contact::new("Uche", "u@example.com", "0812345678").validate().is_ok());
    }

    #[test]
    fn shares_key_on_email_or_phone() {
        let a = Contact::new("Al", "al@example.com", "0700000001");
        let same_email = Contact::new("Bo", "al@example.com", "0700000002");
        let same_phone = Contact::new("Cy", "cy@example.com", "0700000001");
        let same_name = Contact::new("Al", "al2@example.com", "0700000003");

        assert!(a.shares_key_with(&same_email));
        assert!(a.shares_key_with(&same_phone));
        assert!(!a.shares_key_with(&same_name));
    }

    #[test]
    fn serializes_as_plain_object() -> Result<(), AppError> {
        let contact = Contact::new("Ann", "ann@example.com", "0701234567");
        let value = serde_json::to_value(&contact)?;

        assert_eq!(
            value,
            serde_json::json!({"name": "Ann", "email": "ann@example.com", "phone": "0701234567"})
        );
        Ok(())
    }
}
