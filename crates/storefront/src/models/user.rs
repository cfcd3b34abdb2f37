//! User domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use naksu_core::{Email, PersonName};

/// A storefront user.
///
/// Deliberately hash-free: the stored password hash lives only inside the
/// repository and auth service, so serializing a `User` into a response can
/// never leak credential material.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: i32,
    /// First name.
    pub first: PersonName,
    /// Last name.
    pub last: PersonName,
    /// Email address, unique per user.
    pub email: Email,
    /// When the user signed up.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_without_credential_fields() {
        let user = User {
            id: 7,
            first: PersonName::parse("Ada").unwrap(),
            last: PersonName::parse("Lovelace").unwrap(),
            email: Email::parse("ada@example.com").unwrap(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj["first"], "Ada");
        assert_eq!(obj["last"], "Lovelace");
        assert_eq!(obj["email"], "ada@example.com");
        assert!(obj.contains_key("createdAt"));
        assert!(!obj.contains_key("password"));
        assert!(!obj.contains_key("passwordHash"));
    }
}
