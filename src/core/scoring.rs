use crate::core::interests::InterestLabel;
use crate::models::{Venue, VenueType};

/// Points for an interest only one person picked
pub const SINGLE_INTEREST_POINTS: f64 = 1.0;

/// Points for an interest both people picked
pub const SHARED_INTEREST_POINTS: f64 = 2.0;

/// Flat per-type bonus applied to every venue regardless of matches
#[inline]
pub fn type_bonus(venue_type: VenueType) -> f64 {
    match venue_type {
        VenueType::Restaurant => 0.5,
        VenueType::Activity => 0.5,
        VenueType::Dessert => 0.3,
    }
}

/// Score a venue against a pair's interests
///
/// `all_interests` is iterated in order, so the matched labels come back in
/// that order. Labels without a registered predicate are skipped.
///
/// Scoring formula:
/// score = sum(2 per matched shared label, 1 per matched single label) + type bonus
pub fn calculate_venue_score(
    venue: &Venue,
    all_interests: &[String],
    shared_interests: &[String],
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut matched = Vec::new();

    for interest in all_interests {
        let Some(label) = InterestLabel::from_label(interest) else {
            continue;
        };
        if !label.matches(venue) {
            continue;
        }

        matched.push(interest.clone());
        score += if shared_interests.contains(interest) {
            SHARED_INTEREST_POINTS
        } else {
            SINGLE_INTEREST_POINTS
        };
    }

    (score + type_bonus(venue.venue_type), matched)
}
