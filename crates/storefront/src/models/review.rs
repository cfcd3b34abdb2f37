//! Review domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use naksu_core::PersonName;

/// A stored customer review.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review ID.
    pub id: i32,
    /// Reviewer's first name.
    pub first: PersonName,
    /// Reviewer's last name.
    pub last: PersonName,
    /// The review body.
    pub review_text: String,
    /// When the review was submitted.
    pub created_at: DateTime<Utc>,
}

/// The projection served by the random-review listing: first name and text
/// only, no surname or timestamp.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSample {
    /// Reviewer's first name.
    pub first: PersonName,
    /// The review body.
    pub review_text: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_review_sample_projection_keys() {
        let sample = ReviewSample {
            first: PersonName::parse("Maya").unwrap(),
            review_text: "Great tea, fast shipping.".to_string(),
        };

        let json = serde_json::to_value(&sample).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj["first"], "Maya");
        assert_eq!(obj["reviewText"], "Great tea, fast shipping.");
        assert_eq!(obj.len(), 2);
    }
}
