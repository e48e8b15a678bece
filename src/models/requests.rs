use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Occasion, ParticipantRole, SwipeDirection};

/// Request to generate date plans
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeneratePlansRequest {
    #[validate(range(min = 1, max = 3))]
    pub budget: u8,
    #[validate(range(min = 1, max = 5))]
    pub vibe: u8,
    pub occasion: Occasion,
    /// Free-text notes; accepted but not used for scoring
    #[serde(default)]
    #[validate(length(max = 500))]
    pub preferences: Option<String>,
}

/// Request to rank venues for two sets of interests
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchVenuesRequest {
    #[serde(alias = "interests_a", rename = "interestsA", default)]
    #[validate(length(max = 50))]
    pub interests_a: Vec<String>,
    #[serde(alias = "interests_b", rename = "interestsB", default)]
    #[validate(length(max = 50))]
    pub interests_b: Vec<String>,
}

/// Request to open a new session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSessionRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

/// Request to join a session by invite code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JoinSessionRequest {
    #[validate(length(min = 1, max = 16))]
    pub code: String,
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitInterestsRequest {
    pub role: ParticipantRole,
    #[validate(length(min = 1))]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SwipeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "venue_id", rename = "venueId")]
    pub venue_id: String,
    pub direction: SwipeDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_validation() {
        let ok: GeneratePlansRequest =
            serde_json::from_str(r#"{"budget": 2, "vibe": 3, "occasion": "casual"}"#).unwrap();
        assert!(ok.validate().is_ok());
        assert!(ok.preferences.is_none());

        let bad: GeneratePlansRequest =
            serde_json::from_str(r#"{"budget": 4, "vibe": 0, "occasion": "casual"}"#).unwrap();
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("budget"));
        assert!(fields.contains_key("vibe"));
    }

    #[test]
    fn test_match_request_accepts_snake_case() {
        let req: MatchVenuesRequest =
            serde_json::from_str(r#"{"interests_a": ["Sushi"], "interestsB": ["Hiking"]}"#).unwrap();
        assert_eq!(req.interests_a, vec!["Sushi"]);
        assert_eq!(req.interests_b, vec!["Hiking"]);
    }
}
