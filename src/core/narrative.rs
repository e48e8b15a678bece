use std::collections::HashSet;

use crate::catalog::Adjacency;
use crate::models::{Occasion, Venue, Walkability};

/// Per-person USD range for a price level
const PRICE_RANGES: [(u8, u32, u32); 3] = [(1, 15, 25), (2, 30, 50), (3, 60, 90)];

/// Budget activities are often free
const FREE_ACTIVITY_RANGE: (u32, u32) = (0, 10);

pub const TOTAL_TIME: &str = "~3 hours";

/// Short vibe label used in taglines
pub fn vibe_label(vibe: u8) -> &'static str {
    if vibe <= 2 {
        "relaxed"
    } else if vibe >= 4 {
        "lively"
    } else {
        "easygoing"
    }
}

/// Longer vibe phrase used in explanations
pub fn vibe_descriptor(vibe: u8) -> &'static str {
    match vibe {
        0..=2 => "chill and low-key",
        3 => "balanced and versatile",
        _ => "energetic and lively",
    }
}

pub fn tagline(occasion: Occasion, vibe: u8) -> String {
    format!("Perfect for {} • {} vibes", occasion.tagline_label(), vibe_label(vibe))
}

fn price_range(price_level: u8) -> (u32, u32) {
    PRICE_RANGES
        .iter()
        .find(|(level, _, _)| *level == price_level)
        .map(|(_, min, max)| (*min, *max))
        .unwrap_or((0, 0))
}

/// Summed per-person cost range, rendered as `$<min>-<max> per person`
pub fn estimate_cost(restaurant: &Venue, activity: &Venue, dessert: &Venue) -> String {
    let restaurant_cost = price_range(restaurant.price_level);
    let activity_cost = if activity.price_level == 1 {
        FREE_ACTIVITY_RANGE
    } else {
        price_range(activity.price_level)
    };
    let dessert_cost = price_range(dessert.price_level);

    let min = restaurant_cost.0 + activity_cost.0 + dessert_cost.0;
    let max = restaurant_cost.1 + activity_cost.1 + dessert_cost.1;

    format!("${}-{} per person", min, max)
}

fn distinct_neighborhoods<'a>(venues: [&'a Venue; 3]) -> HashSet<&'a str> {
    venues.iter().map(|v| v.neighborhood.as_str()).collect()
}

pub fn walkability(
    adjacency: &Adjacency,
    restaurant: &Venue,
    activity: &Venue,
    dessert: &Venue,
) -> Walkability {
    let all_walkable = adjacency.is_adjacent(&restaurant.neighborhood, &activity.neighborhood)
        && adjacency.is_adjacent(&activity.neighborhood, &dessert.neighborhood);

    if all_walkable {
        return Walkability::AllWithinWalk;
    }

    if distinct_neighborhoods([restaurant, activity, dessert]).len() <= 2 {
        Walkability::MostlyWalkable
    } else {
        Walkability::RequiresRide
    }
}

fn budget_comment(budget: u8) -> &'static str {
    match budget {
        1 => "Perfect for keeping things affordable without compromising on quality.",
        3 => "This is a treat-yourself kind of night.",
        _ => "Great balance of quality and value.",
    }
}

/// Prose describing why the three stops were put together
pub fn explanation(
    restaurant: &Venue,
    activity: &Venue,
    dessert: &Venue,
    occasion: Occasion,
    vibe: u8,
    budget: u8,
) -> String {
    let location_comment = match distinct_neighborhoods([restaurant, activity, dessert]).len() {
        1 => format!(
            "keeps you in {} so there's no rushing around",
            restaurant.neighborhood
        ),
        2 => "keeps you in just two neighborhoods for easy walking".to_string(),
        _ => "takes you on a tour of the city's best spots".to_string(),
    };

    let cuisine = restaurant
        .cuisine
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| "great food".to_string());
    let activity_kind = activity
        .activity_type
        .as_deref()
        .filter(|a| !a.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| "a fun activity".to_string());

    format!(
        "You wanted {} that feels {}. This plan {}. We started with {} for {} ({}), then {} for {}, and wrapped up at {} because {}. {}",
        occasion.label(),
        vibe_descriptor(vibe),
        location_comment,
        restaurant.name,
        cuisine,
        restaurant.description.to_lowercase(),
        activity.name,
        activity_kind,
        dessert.name,
        dessert.description.to_lowercase(),
        budget_comment(budget),
    )
}
