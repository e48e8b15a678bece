use std::collections::HashSet;
use std::sync::Arc;

use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use crate::catalog::{Adjacency, VenueCatalog};
use crate::core::narrative;
use crate::models::{DatePlan, Occasion, Venue, VenueType};

/// Number of plan slots filled per request
pub const PLAN_COUNT: usize = 3;

/// Below this many strict matches a course type falls back to budget-only filtering
pub const MIN_CANDIDATES: usize = 3;

const PLAN_TITLES: [&str; 15] = [
    "The Mission Foodie Trail",
    "Marina Sunset Stroll",
    "North Beach Romance",
    "Hayes Valley Hop",
    "Golden Gate Adventure",
    "Embarcadero Evening",
    "Urban Explorer's Delight",
    "The Art Lover's Path",
    "Neighborhood Gem Hunt",
    "Classic SF Vibes",
    "The Hidden Gem Tour",
    "Coastal Charm Route",
    "City Lights Journey",
    "The Sweet Spot Circuit",
    "Bay Area Bliss",
];

const _: () = assert!(PLAN_TITLES.len() >= PLAN_COUNT);

/// Errors that can occur when generating plans
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Invalid input: budget must be 1-3, got {0}")]
    InvalidBudget(u8),

    #[error("Invalid input: vibe must be 1-5, got {0}")]
    InvalidVibe(u8),
}

/// What the couple asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCriteria {
    pub budget: u8,
    pub vibe: u8,
    pub occasion: Occasion,
    /// Free-text notes; carried through but not used for selection
    pub preferences: Option<String>,
}

impl PlanCriteria {
    pub fn new(budget: u8, vibe: u8, occasion: Occasion) -> Self {
        Self {
            budget,
            vibe,
            occasion,
            preferences: None,
        }
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if !(1..=3).contains(&self.budget) {
            return Err(PlanError::InvalidBudget(self.budget));
        }
        if !(1..=5).contains(&self.vibe) {
            return Err(PlanError::InvalidVibe(self.vibe));
        }
        Ok(())
    }

    #[inline]
    fn strict_match(&self, venue: &Venue) -> bool {
        venue.price_level <= self.budget
            && venue.vibe_score.abs_diff(self.vibe) <= 1
            && venue.is_good_for(self.occasion)
    }
}

/// Candidates for one course type
///
/// Price, vibe and occasion all have to match. When fewer than
/// [`MIN_CANDIDATES`] survive, only the budget constraint is kept.
pub fn course_candidates<'a>(
    catalog: &'a VenueCatalog,
    venue_type: VenueType,
    criteria: &PlanCriteria,
) -> Vec<&'a Venue> {
    let strict: Vec<&Venue> = catalog
        .of_type(venue_type)
        .filter(|v| criteria.strict_match(v))
        .collect();

    if strict.len() >= MIN_CANDIDATES {
        return strict;
    }

    let relaxed: Vec<&Venue> = catalog
        .of_type(venue_type)
        .filter(|v| v.price_level <= criteria.budget)
        .collect();

    tracing::debug!(
        "Only {} strict {} candidates, falling back to {} within budget {}",
        strict.len(),
        venue_type.as_str(),
        relaxed.len(),
        criteria.budget
    );

    relaxed
}

/// First unused venue, preferring ones within walking distance of `near`
fn pick_nearby<'a>(
    shuffled: &[&'a Venue],
    used: &HashSet<&'a str>,
    adjacency: &Adjacency,
    near: &str,
) -> Option<&'a Venue> {
    shuffled
        .iter()
        .find(|v| !used.contains(v.id.as_str()) && adjacency.is_adjacent(near, &v.neighborhood))
        .or_else(|| shuffled.iter().find(|v| !used.contains(v.id.as_str())))
        .copied()
}

/// Generate up to [`PLAN_COUNT`] restaurant + activity + dessert plans
///
/// No venue appears twice in the returned batch. A slot that cannot be
/// completed is skipped, and venues already picked for it stay used.
/// Randomness comes only from `rng`; pass a seeded generator for
/// reproducible output.
pub fn generate_date_plans<R: Rng + ?Sized>(
    catalog: &VenueCatalog,
    criteria: &PlanCriteria,
    rng: &mut R,
) -> Result<Vec<DatePlan>, PlanError> {
    criteria.validate()?;

    let mut restaurants = course_candidates(catalog, VenueType::Restaurant, criteria);
    let mut activities = course_candidates(catalog, VenueType::Activity, criteria);
    let mut desserts = course_candidates(catalog, VenueType::Dessert, criteria);
    let mut titles = PLAN_TITLES;

    restaurants.shuffle(rng);
    activities.shuffle(rng);
    desserts.shuffle(rng);
    titles.shuffle(rng);

    let adjacency = catalog.adjacency();
    let mut used: HashSet<&str> = HashSet::new();
    let mut plans = Vec::with_capacity(PLAN_COUNT);

    for slot in 0..PLAN_COUNT {
        let Some(restaurant) = restaurants.iter().copied().find(|r| !used.contains(r.id.as_str())) else {
            tracing::debug!("Plan slot {}: no restaurant left", slot + 1);
            continue;
        };
        used.insert(&restaurant.id);

        let Some(activity) = pick_nearby(&activities, &used, adjacency, &restaurant.neighborhood) else {
            tracing::debug!("Plan slot {}: no activity left, {} forfeited", slot + 1, restaurant.id);
            continue;
        };
        used.insert(&activity.id);

        let Some(dessert) = pick_nearby(&desserts, &used, adjacency, &activity.neighborhood) else {
            tracing::debug!("Plan slot {}: no dessert left", slot + 1);
            continue;
        };
        used.insert(&dessert.id);

        plans.push(DatePlan {
            id: format!("plan-{}", slot + 1),
            title: titles[slot].to_string(),
            tagline: narrative::tagline(criteria.occasion, criteria.vibe),
            explanation: narrative::explanation(
                restaurant,
                activity,
                dessert,
                criteria.occasion,
                criteria.vibe,
                criteria.budget,
            ),
            total_cost: narrative::estimate_cost(restaurant, activity, dessert),
            total_time: narrative::TOTAL_TIME.to_string(),
            walkability: narrative::walkability(adjacency, restaurant, activity, dessert),
            restaurant: restaurant.clone(),
            activity: activity.clone(),
            dessert: dessert.clone(),
        });
    }

    Ok(plans)
}

/// Plan generator bound to a shared catalog, drawing from thread-local entropy
#[derive(Debug, Clone)]
pub struct PlanGenerator {
    catalog: Arc<VenueCatalog>,
}

impl PlanGenerator {
    pub fn new(catalog: Arc<VenueCatalog>) -> Self {
        Self { catalog }
    }

    /// Fresh plans on every call, even for identical criteria
    pub fn generate(&self, criteria: &PlanCriteria) -> Result<Vec<DatePlan>, PlanError> {
        generate_date_plans(&self.catalog, criteria, &mut rand::rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        criteria: &PlanCriteria,
        rng: &mut R,
    ) -> Result<Vec<DatePlan>, PlanError> {
        generate_date_plans(&self.catalog, criteria, rng)
    }
}
