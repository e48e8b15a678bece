// Core algorithm exports
pub mod interests;
pub mod matcher;
pub mod narrative;
pub mod planner;
pub mod scoring;

pub use interests::{label_matches, InterestLabel};
pub use matcher::{get_matched_venues, get_shared_interests, MatchResult, Matcher};
pub use planner::{generate_date_plans, PlanCriteria, PlanError, PlanGenerator};
pub use scoring::calculate_venue_score;
