//! Customer domain entity.

use serde::{Deserialize, Serialize};

/// Customer record as stored in the `Customers` table.
///
/// The same shape is used for request bodies: `id` is ignored on create and
/// identifies the row on update. Missing fields deserialize as empty values
/// so the validation rules report them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub contact: String,
    pub city: String,
    pub email: String,
}

impl Customer {
    /// Copy with surrounding whitespace removed from every text field.
    pub fn trimmed(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.trim().to_string(),
            contact: self.contact.trim().to_string(),
            city: self.city.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_keeps_id_and_strips_fields() {
        let customer = Customer {
            id: 4,
            name: "  Acme ".to_string(),
            contact: "1234567890 ".to_string(),
            city: "\tPune".to_string(),
            email: " acme@x.com".to_string(),
        };

        let trimmed = customer.trimmed();
        assert_eq!(trimmed.id, 4);
        assert_eq!(trimmed.name, "Acme");
        assert_eq!(trimmed.contact, "1234567890");
        assert_eq!(trimmed.city, "Pune");
        assert_eq!(trimmed.email, "acme@x.com");
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let customer: Customer = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
        assert_eq!(customer.id, 0);
        assert_eq!(customer.name, "Acme");
        assert!(customer.contact.is_empty());
        assert!(customer.email.is_empty());
    }
}
