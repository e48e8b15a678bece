//! Date Planner - date plan generation and two-person venue matching
//!
//! This library provides the plan generator behind the single-person date
//! planner form and the interest-based matching engine behind the
//! two-person swipe sessions.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::catalog::{Adjacency, InterestCatalog, VenueCatalog};
pub use crate::core::{generate_date_plans, get_matched_venues, get_shared_interests, Matcher, PlanCriteria, PlanError, PlanGenerator};
pub use crate::models::{DatePlan, MatchedVenue, Occasion, Venue, VenueType, Walkability};
