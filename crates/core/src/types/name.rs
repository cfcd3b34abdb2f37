//! Person name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PersonName`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PersonNameError {
    /// The input is empty or whitespace only.
    #[error("name cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A person's first or last name as submitted on signup or with a review.
///
/// Surrounding whitespace is trimmed; a name must have at least one
/// non-whitespace character. No character-set restrictions beyond that -
/// names are display data, not identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Maximum length of a name.
    pub const MAX_LENGTH: usize = 100;

    /// Parse a `PersonName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than
    /// 100 characters.
    pub fn parse(s: &str) -> Result<Self, PersonNameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(PersonNameError::Empty);
        }

        if trimmed.len() > Self::MAX_LENGTH {
            return Err(PersonNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PersonName {
    type Err = PersonNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for PersonName {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for PersonName {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for PersonName {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_names() {
        assert!(PersonName::parse("Ada").is_ok());
        assert!(PersonName::parse("van der Berg").is_ok());
        assert!(PersonName::parse("O'Brien").is_ok());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let name = PersonName::parse("  Ada  ").unwrap();
        assert_eq!(name.as_str(), "Ada");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(PersonName::parse(""), Err(PersonNameError::Empty)));
        assert!(matches!(
            PersonName::parse("   "),
            Err(PersonNameError::Empty)
        ));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(101);
        assert!(matches!(
            PersonName::parse(&long),
            Err(PersonNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let name = PersonName::parse("Ada").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Ada\"");

        let parsed: PersonName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }
}
