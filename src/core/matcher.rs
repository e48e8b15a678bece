use std::sync::Arc;

use crate::catalog::VenueCatalog;
use crate::core::scoring::calculate_venue_score;
use crate::models::{MatchedVenue, Venue};

/// Result of the matching process
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub venues: Vec<MatchedVenue>,
    pub shared_interests: Vec<String>,
    pub total_candidates: usize,
}

/// Labels of `a` that also appear in `b`, in `a`'s order
///
/// Duplicates in `a` are kept.
pub fn get_shared_interests(a: &[String], b: &[String]) -> Vec<String> {
    a.iter().filter(|i| b.contains(i)).cloned().collect()
}

/// Union of both lists, first occurrence wins
fn union_interests(a: &[String], b: &[String]) -> Vec<String> {
    let mut all: Vec<String> = Vec::with_capacity(a.len() + b.len());
    for interest in a.iter().chain(b) {
        if !all.contains(interest) {
            all.push(interest.clone());
        }
    }
    all
}

/// Rank venues by how well they fit two people's interests
///
/// Every venue is scored, venues with a non-positive score are dropped and
/// the rest are sorted by score descending. The sort is stable, so ties keep
/// catalog order. No randomness is involved.
pub fn get_matched_venues(
    venues: &[Venue],
    interests_a: &[String],
    interests_b: &[String],
) -> Vec<MatchedVenue> {
    let all_interests = union_interests(interests_a, interests_b);
    let shared_interests = get_shared_interests(interests_a, interests_b);

    let mut matched: Vec<MatchedVenue> = venues
        .iter()
        .filter_map(|venue| {
            let (score, matched_interests) =
                calculate_venue_score(venue, &all_interests, &shared_interests);

            if score > 0.0 {
                Some(MatchedVenue {
                    venue: venue.clone(),
                    match_score: score,
                    matched_interests,
                })
            } else {
                None
            }
        })
        .collect();

    matched.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    matched
}

/// Matching engine bound to a shared venue catalog
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Arc<VenueCatalog>,
}

impl Matcher {
    pub fn new(catalog: Arc<VenueCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &VenueCatalog {
        &self.catalog
    }

    /// Score the whole catalog for a pair of interest lists
    pub fn find_matches(&self, interests_a: &[String], interests_b: &[String]) -> MatchResult {
        let venues = get_matched_venues(self.catalog.venues(), interests_a, interests_b);
        let shared_interests = get_shared_interests(interests_a, interests_b);

        tracing::debug!(
            "Matched {} of {} venues ({} shared interests)",
            venues.len(),
            self.catalog.len(),
            shared_interests.len()
        );

        MatchResult {
            venues,
            shared_interests,
            total_candidates: self.catalog.len(),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(Arc::new(VenueCatalog::default()))
    }
}
