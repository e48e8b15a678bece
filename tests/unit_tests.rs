// Unit tests for Date Planner

use date_planner::catalog::{Adjacency, VenueCatalog};
use date_planner::core::{
    interests::InterestLabel,
    narrative::{estimate_cost, explanation, tagline, walkability},
    scoring::{calculate_venue_score, type_bonus},
};
use date_planner::models::{Occasion, Venue, VenueType, Walkability};

fn create_venue(id: &str, venue_type: VenueType, price_level: u8, neighborhood: &str) -> Venue {
    Venue {
        id: id.to_string(),
        name: format!("Venue {}", id),
        description: "Candlelit and Cozy".to_string(),
        venue_type,
        cuisine: None,
        activity_type: None,
        price_level,
        vibe_score: 3,
        neighborhood: neighborhood.to_string(),
        good_for: vec![Occasion::FirstDate],
    }
}

#[test]
fn test_cost_free_activity_only_at_level_one() {
    let r = create_venue("r", VenueType::Restaurant, 2, "A");
    let d = create_venue("d", VenueType::Dessert, 2, "A");

    let cheap = create_venue("a", VenueType::Activity, 1, "A");
    assert_eq!(estimate_cost(&r, &cheap, &d), "$60-110 per person");

    let pricey = create_venue("a", VenueType::Activity, 3, "A");
    assert_eq!(estimate_cost(&r, &pricey, &d), "$120-190 per person");
}

#[test]
fn test_cost_level_one_dessert_not_discounted() {
    let r = create_venue("r", VenueType::Restaurant, 1, "A");
    let a = create_venue("a", VenueType::Activity, 2, "A");
    let d = create_venue("d", VenueType::Dessert, 1, "A");

    // 15+30+15, 25+50+25
    assert_eq!(estimate_cost(&r, &a, &d), "$60-100 per person");
}

#[test]
fn test_walkability_chain_with_shipped_adjacency() {
    let catalog = VenueCatalog::san_francisco();
    let adjacency = catalog.adjacency();

    let r = create_venue("r", VenueType::Restaurant, 1, "Mission");
    let a = create_venue("a", VenueType::Activity, 1, "SoMa");
    let d = create_venue("d", VenueType::Dessert, 1, "Embarcadero");
    assert_eq!(walkability(adjacency, &r, &a, &d), Walkability::AllWithinWalk);

    // Mission -> Marina is not walkable; three distinct neighborhoods
    let a = create_venue("a", VenueType::Activity, 1, "Marina");
    assert_eq!(walkability(adjacency, &r, &a, &d), Walkability::RequiresRide);

    // Two distinct neighborhoods but not adjacent
    let d = create_venue("d", VenueType::Dessert, 1, "Mission");
    assert_eq!(walkability(adjacency, &r, &a, &d), Walkability::MostlyWalkable);
}

#[test]
fn test_walkability_requires_both_hops() {
    let adjacency = Adjacency::new().with("A", &["A", "B"]);
    let r = create_venue("r", VenueType::Restaurant, 1, "A");
    let a = create_venue("a", VenueType::Activity, 1, "B");
    let d = create_venue("d", VenueType::Dessert, 1, "A");

    // B has no entry, so B is only adjacent to B
    assert_eq!(walkability(&adjacency, &r, &a, &d), Walkability::MostlyWalkable);
}

#[test]
fn test_tagline_for_each_occasion() {
    assert_eq!(tagline(Occasion::FirstDate, 1), "Perfect for first date • relaxed vibes");
    assert_eq!(tagline(Occasion::Anniversary, 3), "Perfect for anniversary • easygoing vibes");
    assert_eq!(tagline(Occasion::Surprise, 5), "Perfect for surprise • lively vibes");
}

#[test]
fn test_explanation_lowercases_descriptions() {
    let r = create_venue("r", VenueType::Restaurant, 2, "A");
    let a = create_venue("a", VenueType::Activity, 2, "A");
    let d = create_venue("d", VenueType::Dessert, 2, "A");

    let text = explanation(&r, &a, &d, Occasion::Surprise, 4, 2);
    assert!(text.starts_with("You wanted a surprise date that feels energetic and lively."));
    assert!(text.contains("(candlelit and cozy)"));
    assert!(text.contains("because candlelit and cozy."));
    assert!(!text.contains("Candlelit"));
}

#[test]
fn test_interest_labels_against_shipped_catalog() {
    let catalog = VenueCatalog::san_francisco();
    let matching = |label: InterestLabel| -> Vec<String> {
        catalog
            .venues()
            .iter()
            .filter(|v| label.matches(v))
            .map(|v| v.name.clone())
            .collect()
    };

    assert!(matching(InterestLabel::Hiking).contains(&"Lands End Trail".to_string()));
    assert!(matching(InterestLabel::Movies).contains(&"Foreign Cinema".to_string()));
    assert!(matching(InterestLabel::Museums).contains(&"Exploratorium".to_string()));
    assert!(matching(InterestLabel::Bookstores).contains(&"City Lights Booksellers".to_string()));
    assert!(matching(InterestLabel::Karaoke).is_empty());
    assert!(matching(InterestLabel::EscapeRoom).is_empty());
}

#[test]
fn test_venue_score_single_vs_shared() {
    let mut venue = create_venue("r", VenueType::Restaurant, 3, "A");
    venue.cuisine = Some("Japanese".to_string());

    let all = vec!["Sushi".to_string(), "Fine Dining".to_string()];
    let shared = vec!["Fine Dining".to_string()];

    let (score, matched) = calculate_venue_score(&venue, &all, &shared);
    assert_eq!(matched, vec!["Sushi", "Fine Dining"]);
    assert_eq!(score, 1.0 + 2.0 + type_bonus(VenueType::Restaurant));
}
