use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a venue plays in a three-course date plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    Restaurant,
    Activity,
    Dessert,
}

impl VenueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueType::Restaurant => "restaurant",
            VenueType::Activity => "activity",
            VenueType::Dessert => "dessert",
        }
    }
}

/// Purpose of the outing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Occasion {
    FirstDate,
    Casual,
    Anniversary,
    JustBecause,
    Surprise,
}

impl Occasion {
    pub const ALL: [Occasion; 5] = [
        Occasion::FirstDate,
        Occasion::Casual,
        Occasion::Anniversary,
        Occasion::JustBecause,
        Occasion::Surprise,
    ];

    /// Wire tag, e.g. `first-date`
    pub fn as_str(&self) -> &'static str {
        match self {
            Occasion::FirstDate => "first-date",
            Occasion::Casual => "casual",
            Occasion::Anniversary => "anniversary",
            Occasion::JustBecause => "just-because",
            Occasion::Surprise => "surprise",
        }
    }

    /// Phrase used in plan explanations ("You wanted a first date ...")
    pub fn label(&self) -> &'static str {
        match self {
            Occasion::FirstDate => "a first date",
            Occasion::Casual => "a casual hangout",
            Occasion::Anniversary => "an anniversary",
            Occasion::Surprise => "a surprise date",
            Occasion::JustBecause => "a spontaneous outing",
        }
    }

    /// Tag with the first hyphen replaced by a space ("first date")
    pub fn tagline_label(&self) -> String {
        self.as_str().replacen('-', " ", 1)
    }
}

/// A single place or activity in the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub venue_type: VenueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(rename = "activityType", default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    #[serde(rename = "priceLevel")]
    pub price_level: u8,
    #[serde(rename = "vibeScore")]
    pub vibe_score: u8,
    pub neighborhood: String,
    #[serde(rename = "goodFor")]
    pub good_for: Vec<Occasion>,
}

impl Venue {
    pub fn is_good_for(&self, occasion: Occasion) -> bool {
        self.good_for.contains(&occasion)
    }
}

/// Fixed walkability labels attached to a generated plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Walkability {
    #[serde(rename = "All within 15 min walk")]
    AllWithinWalk,
    #[serde(rename = "Mostly walkable with short rides")]
    MostlyWalkable,
    #[serde(rename = "Requires ride between spots")]
    RequiresRide,
}

/// A restaurant + activity + dessert triple with its narrative
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePlan {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub restaurant: Venue,
    pub activity: Venue,
    pub dessert: Venue,
    pub explanation: String,
    pub total_cost: String,
    pub total_time: String,
    pub walkability: Walkability,
}

impl DatePlan {
    pub fn venue_ids(&self) -> [&str; 3] {
        [&self.restaurant.id, &self.activity.id, &self.dessert.id]
    }
}

/// Venue annotated with the interests it satisfied for a pair of people
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedVenue {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchedInterests")]
    pub matched_interests: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestCategory {
    Food,
    Drinks,
    Outdoors,
    Culture,
    Entertainment,
    Nightlife,
}

impl InterestCategory {
    /// Display order used when grouping the interest catalog
    pub const ORDER: [InterestCategory; 6] = [
        InterestCategory::Food,
        InterestCategory::Drinks,
        InterestCategory::Outdoors,
        InterestCategory::Culture,
        InterestCategory::Entertainment,
        InterestCategory::Nightlife,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InterestCategory::Food => "🍽️ Food",
            InterestCategory::Drinks => "🍹 Drinks",
            InterestCategory::Outdoors => "🌲 Outdoors",
            InterestCategory::Culture => "🎭 Culture",
            InterestCategory::Entertainment => "🎮 Entertainment",
            InterestCategory::Nightlife => "🌙 Nightlife",
        }
    }
}

/// Selectable interest label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub id: String,
    pub name: String,
    pub category: InterestCategory,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Waiting,
    Active,
}

/// Which side of a two-person session is acting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Creator,
    Partner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Recorded swipe decision
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swipe {
    pub venue_id: String,
    pub direction: SwipeDirection,
    pub swiped_at: chrono::DateTime<chrono::Utc>,
}

/// Snapshot of a two-person swipe session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub code: String,
    pub creator_name: String,
    pub partner_name: Option<String>,
    pub status: SessionStatus,
    pub creator_interests: Vec<String>,
    pub partner_interests: Vec<String>,
    pub saved_venue_ids: Vec<String>,
    pub swipes: Vec<Swipe>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    pub fn interests_for(&self, role: ParticipantRole) -> &[String] {
        match role {
            ParticipantRole::Creator => &self.creator_interests,
            ParticipantRole::Partner => &self.partner_interests,
        }
    }
}
