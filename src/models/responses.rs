use serde::{Deserialize, Serialize};
use crate::models::domain::{DatePlan, Interest, InterestCategory, MatchedVenue, Venue};

/// Response for plan generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlansResponse {
    pub plans: Vec<DatePlan>,
}

/// Ranked venues plus the labels both people picked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchVenuesResponse {
    pub venues: Vec<MatchedVenue>,
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<String>,
}

/// Interests of one category, in catalog order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestGroup {
    pub category: InterestCategory,
    pub label: String,
    pub interests: Vec<Interest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestsResponse {
    pub groups: Vec<InterestGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenuesResponse {
    pub venues: Vec<Venue>,
    pub total: usize,
}

/// Record swipe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeResponse {
    pub success: bool,
    #[serde(rename = "savedCount")]
    pub saved_count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
