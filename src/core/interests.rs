use crate::models::{Venue, VenueType};

/// Interest labels with a registered venue predicate
///
/// Labels are looked up by exact string; anything not listed here
/// contributes nothing when scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterestLabel {
    // Food
    Italian,
    Mexican,
    Sushi,
    Pizza,
    Brunch,
    FineDining,
    StreetFood,
    Vegetarian,
    // Drinks
    WineBars,
    Cocktails,
    CraftBeer,
    Coffee,
    BubbleTea,
    // Outdoors
    Hiking,
    Beach,
    Parks,
    SunsetViews,
    Picnic,
    // Culture
    Museums,
    ArtGalleries,
    LiveMusic,
    Theater,
    Bookstores,
    // Entertainment
    Movies,
    Bowling,
    Arcade,
    MiniGolf,
    EscapeRoom,
    // Nightlife
    Dancing,
    LiveDj,
    Karaoke,
    RooftopBar,
}

impl InterestLabel {
    pub const ALL: [InterestLabel; 32] = [
        InterestLabel::Italian,
        InterestLabel::Mexican,
        InterestLabel::Sushi,
        InterestLabel::Pizza,
        InterestLabel::Brunch,
        InterestLabel::FineDining,
        InterestLabel::StreetFood,
        InterestLabel::Vegetarian,
        InterestLabel::WineBars,
        InterestLabel::Cocktails,
        InterestLabel::CraftBeer,
        InterestLabel::Coffee,
        InterestLabel::BubbleTea,
        InterestLabel::Hiking,
        InterestLabel::Beach,
        InterestLabel::Parks,
        InterestLabel::SunsetViews,
        InterestLabel::Picnic,
        InterestLabel::Museums,
        InterestLabel::ArtGalleries,
        InterestLabel::LiveMusic,
        InterestLabel::Theater,
        InterestLabel::Bookstores,
        InterestLabel::Movies,
        InterestLabel::Bowling,
        InterestLabel::Arcade,
        InterestLabel::MiniGolf,
        InterestLabel::EscapeRoom,
        InterestLabel::Dancing,
        InterestLabel::LiveDj,
        InterestLabel::Karaoke,
        InterestLabel::RooftopBar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterestLabel::Italian => "Italian",
            InterestLabel::Mexican => "Mexican",
            InterestLabel::Sushi => "Sushi",
            InterestLabel::Pizza => "Pizza",
            InterestLabel::Brunch => "Brunch",
            InterestLabel::FineDining => "Fine Dining",
            InterestLabel::StreetFood => "Street Food",
            InterestLabel::Vegetarian => "Vegetarian",
            InterestLabel::WineBars => "Wine Bars",
            InterestLabel::Cocktails => "Cocktails",
            InterestLabel::CraftBeer => "Craft Beer",
            InterestLabel::Coffee => "Coffee",
            InterestLabel::BubbleTea => "Bubble Tea",
            InterestLabel::Hiking => "Hiking",
            InterestLabel::Beach => "Beach",
            InterestLabel::Parks => "Parks",
            InterestLabel::SunsetViews => "Sunset Views",
            InterestLabel::Picnic => "Picnic",
            InterestLabel::Museums => "Museums",
            InterestLabel::ArtGalleries => "Art Galleries",
            InterestLabel::LiveMusic => "Live Music",
            InterestLabel::Theater => "Theater",
            InterestLabel::Bookstores => "Bookstores",
            InterestLabel::Movies => "Movies",
            InterestLabel::Bowling => "Bowling",
            InterestLabel::Arcade => "Arcade",
            InterestLabel::MiniGolf => "Mini Golf",
            InterestLabel::EscapeRoom => "Escape Room",
            InterestLabel::Dancing => "Dancing",
            InterestLabel::LiveDj => "Live DJ",
            InterestLabel::Karaoke => "Karaoke",
            InterestLabel::RooftopBar => "Rooftop Bar",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == label)
    }

    /// Predicate evaluated against a venue
    pub fn predicate(&self) -> fn(&Venue) -> bool {
        match self {
            InterestLabel::Italian => |v| cuisine_has(v, "italian") || name_has(v, "italian"),
            InterestLabel::Mexican => |v| cuisine_has(v, "mexican") || name_has(v, "mexican"),
            InterestLabel::Sushi => |v| cuisine_has(v, "japanese") || cuisine_has(v, "sushi"),
            InterestLabel::Pizza => |v| cuisine_has(v, "pizza") || name_has(v, "pizza"),
            InterestLabel::Brunch => |v| cuisine_has(v, "cafe") || cuisine_has(v, "bakery"),
            InterestLabel::FineDining => |v| v.price_level == 3,
            InterestLabel::StreetFood => |v| v.price_level == 1,
            InterestLabel::Vegetarian => {
                |v| cuisine_has(v, "vegetarian") || description_has(v, "vegetarian")
            }
            InterestLabel::WineBars => |v| description_has(v, "wine") || name_has(v, "wine"),
            InterestLabel::Cocktails => {
                |v| description_has(v, "cocktail") || v.venue_type == VenueType::Activity
            }
            InterestLabel::CraftBeer => |v| description_has(v, "beer"),
            InterestLabel::Coffee => |v| cuisine_has(v, "cafe") || description_has(v, "coffee"),
            InterestLabel::Hiking => |v| name_has(v, "trail") || name_has(v, "lands end"),
            InterestLabel::Beach => |v| description_has(v, "coastal") || description_has(v, "beach"),
            InterestLabel::Parks => {
                |v| name_has(v, "park") || (v.venue_type == VenueType::Activity && v.price_level == 1)
            }
            InterestLabel::SunsetViews => |v| description_has(v, "view") || name_has(v, "palace"),
            InterestLabel::Picnic => |v| name_has(v, "park") || name_has(v, "dolores"),
            InterestLabel::Museums => |v| name_has(v, "museum") || name_has(v, "exploratorium"),
            InterestLabel::ArtGalleries => |v| description_has(v, "art") || name_has(v, "sfmoma"),
            InterestLabel::LiveMusic => |v| description_has(v, "music") || v.vibe_score >= 4,
            InterestLabel::Theater => {
                |v| description_has(v, "theater") || description_has(v, "performance")
            }
            InterestLabel::Bookstores => |v| name_has(v, "book") || name_has(v, "city lights"),
            InterestLabel::Movies => |v| name_has(v, "cinema") || name_has(v, "foreign cinema"),
            InterestLabel::Arcade => |v| v.vibe_score >= 4 && v.venue_type == VenueType::Activity,
            InterestLabel::Dancing => |v| v.vibe_score == 5,
            InterestLabel::LiveDj => |v| v.vibe_score >= 4,
            InterestLabel::RooftopBar => {
                |v| description_has(v, "rooftop") || description_has(v, "view")
            }
            // No catalog support
            InterestLabel::BubbleTea
            | InterestLabel::Bowling
            | InterestLabel::MiniGolf
            | InterestLabel::EscapeRoom
            | InterestLabel::Karaoke => |_| false,
        }
    }

    #[inline]
    pub fn matches(&self, venue: &Venue) -> bool {
        (self.predicate())(venue)
    }
}

/// Evaluate an arbitrary label; unknown labels never match
pub fn label_matches(label: &str, venue: &Venue) -> bool {
    InterestLabel::from_label(label).is_some_and(|l| l.matches(venue))
}

#[inline]
fn name_has(venue: &Venue, needle: &str) -> bool {
    venue.name.to_lowercase().contains(needle)
}

#[inline]
fn description_has(venue: &Venue, needle: &str) -> bool {
    venue.description.to_lowercase().contains(needle)
}

#[inline]
fn cuisine_has(venue: &Venue, needle: &str) -> bool {
    venue
        .cuisine
        .as_deref()
        .is_some_and(|c| c.to_lowercase().contains(needle))
}
