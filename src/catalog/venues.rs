use crate::models::{Occasion, Venue, VenueType};

use Occasion::*;

#[allow(clippy::too_many_arguments)]
fn venue(
    id: &str,
    name: &str,
    description: &str,
    venue_type: VenueType,
    sub_type: &str,
    price_level: u8,
    vibe_score: u8,
    neighborhood: &str,
    good_for: &[Occasion],
) -> Venue {
    let (cuisine, activity_type) = match venue_type {
        VenueType::Activity => (None, Some(sub_type.to_string())),
        VenueType::Restaurant | VenueType::Dessert => (Some(sub_type.to_string()), None),
    };

    Venue {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        venue_type,
        cuisine,
        activity_type,
        price_level,
        vibe_score,
        neighborhood: neighborhood.to_string(),
        good_for: good_for.to_vec(),
    }
}

/// San Francisco venues shipped with the service
pub fn san_francisco_venues() -> Vec<Venue> {
    use VenueType::{Activity, Dessert, Restaurant};

    vec![
        // Restaurants
        venue("r1", "Flour + Water", "Handmade pasta in a buzzy, candlelit room",
            Restaurant, "Italian", 2, 3, "Mission", &[FirstDate, Anniversary, Casual]),
        venue("r2", "Foreign Cinema", "Californian-Mediterranean plates with classic films projected in the courtyard",
            Restaurant, "Mediterranean", 3, 3, "Mission", &[Anniversary, FirstDate, Surprise]),
        venue("r3", "La Taqueria", "Legendary no-frills burritos and carnitas tacos",
            Restaurant, "Mexican", 1, 2, "Mission", &[Casual, JustBecause]),
        venue("r4", "Tony's Pizza Napoletana", "Award-winning pizza from seven different ovens",
            Restaurant, "Pizza", 2, 4, "North Beach", &[Casual, FirstDate, JustBecause]),
        venue("r5", "Sotto Mare", "Boisterous seafood spot famous for its cioppino",
            Restaurant, "Italian Seafood", 2, 4, "North Beach", &[Casual, Anniversary]),
        venue("r6", "Zuni Café", "Iconic roast chicken and a deep wine list in a sunlit room",
            Restaurant, "Californian", 3, 3, "Hayes Valley", &[Anniversary, Surprise, FirstDate]),
        venue("r7", "Nopalito", "Regional Mexican cooking with house-ground masa",
            Restaurant, "Mexican", 1, 3, "Lower Haight", &[Casual, FirstDate, JustBecause]),
        venue("r8", "Greens Restaurant", "Vegetarian fine cooking with Golden Gate Bridge views",
            Restaurant, "Vegetarian", 2, 2, "Marina", &[Anniversary, FirstDate]),
        venue("r9", "Kusakabe", "Intimate omakase counter serving kaiseki-style courses",
            Restaurant, "Japanese", 3, 2, "Financial District", &[Anniversary, Surprise]),
        venue("r10", "Tartine Manufactory", "All-day spot with fresh bread and great coffee",
            Restaurant, "Bakery Cafe", 1, 2, "Mission", &[Casual, JustBecause, FirstDate]),
        venue("r11", "Golden Boy Pizza", "Square focaccia slices served late into the night",
            Restaurant, "Pizza", 1, 4, "North Beach", &[Casual, JustBecause]),
        // Activities
        venue("a1", "Dolores Park", "Sunny hillside picnic spot with a skyline view",
            Activity, "Park Hangout", 1, 3, "Mission", &[Casual, FirstDate, JustBecause]),
        venue("a2", "Alamo Drafthouse", "Dine-in theater pouring craft beer alongside cult screenings",
            Activity, "Movie Night", 2, 3, "Mission", &[Casual, FirstDate, JustBecause]),
        venue("a3", "SFMOMA", "Seven floors of modern and contemporary art",
            Activity, "Museum", 2, 2, "SoMa", &[FirstDate, Anniversary, Casual]),
        venue("a4", "Exploratorium", "Hands-on science exhibits with adults-only After Dark nights",
            Activity, "Interactive Museum", 2, 4, "Embarcadero", &[FirstDate, Surprise, JustBecause]),
        venue("a5", "Lands End Trail", "Coastal trail with cliffside views of the Golden Gate",
            Activity, "Hiking", 1, 2, "Outer Richmond", &[Anniversary, FirstDate, JustBecause]),
        venue("a6", "Palace of Fine Arts", "Romantic rotunda and lagoon, best at golden hour",
            Activity, "Sightseeing", 1, 1, "Marina", &[Anniversary, Surprise, FirstDate]),
        venue("a7", "City Lights Booksellers", "Historic beat-generation bookstore with poetry upstairs",
            Activity, "Bookstore Browsing", 1, 2, "North Beach", &[FirstDate, Casual, JustBecause]),
        venue("a8", "Vesuvio Cafe", "Bohemian bar pouring cocktails next door to City Lights",
            Activity, "Bar Hopping", 1, 4, "North Beach", &[Casual, JustBecause, FirstDate]),
        venue("a9", "SFJAZZ Center", "Intimate performance hall with world-class jazz and music acts",
            Activity, "Live Music", 3, 4, "Hayes Valley", &[Anniversary, Surprise]),
        venue("a10", "Top of the Mark", "Cocktails and dancing with a 360-degree rooftop view",
            Activity, "Rooftop Lounge", 3, 4, "Nob Hill", &[Anniversary, Surprise]),
        venue("a11", "Stow Lake Boathouse", "Paddle boats around a peaceful island lake",
            Activity, "Boating", 2, 2, "Golden Gate Park", &[FirstDate, Casual, Surprise]),
        venue("a12", "The Independent", "Standing-room music venue for indie bands and DJ sets",
            Activity, "Concert", 2, 5, "Lower Haight", &[Casual, JustBecause]),
        // Desserts
        venue("d1", "Bi-Rite Creamery", "Small-batch ice cream with a line worth waiting in",
            Dessert, "Ice Cream", 1, 3, "Mission", &[Casual, FirstDate, JustBecause]),
        venue("d2", "Tartine Bakery", "Morning buns and tarts from a beloved neighborhood bakery",
            Dessert, "Bakery", 1, 2, "Mission", &[Casual, JustBecause, FirstDate]),
        venue("d3", "Dandelion Chocolate", "Bean-to-bar chocolate with decadent hot cocoa",
            Dessert, "Chocolate", 2, 2, "Mission", &[Anniversary, FirstDate, Surprise]),
        venue("d4", "Mitchell's Ice Cream", "Tropical flavors scooped since 1953",
            Dessert, "Ice Cream", 1, 3, "Noe Valley", &[Casual, JustBecause]),
        venue("d5", "Stella Pastry & Cafe", "Old-school pastry shop famous for its Sacripantina cake",
            Dessert, "Italian Pastry", 1, 3, "North Beach", &[Casual, FirstDate, Anniversary]),
        venue("d6", "Smitten Ice Cream", "Made-to-order liquid-nitrogen ice cream",
            Dessert, "Ice Cream", 1, 3, "Hayes Valley", &[FirstDate, Casual, JustBecause]),
        venue("d7", "b. patisserie", "Kouign-amann and elegant French pastries",
            Dessert, "Patisserie", 2, 2, "Lower Haight", &[Anniversary, FirstDate]),
        venue("d8", "Ghirardelli Square", "Classic hot fudge sundaes with bay views",
            Dessert, "Chocolate", 2, 3, "Russian Hill", &[FirstDate, Surprise, Casual]),
        venue("d9", "Hotel Biron", "Tiny wine bar with cheese plates and dark chocolate",
            Dessert, "Wine Bar", 2, 2, "Hayes Valley", &[Anniversary, FirstDate]),
        venue("d10", "Tout Sweet Patisserie", "Macarons and tea overlooking Union Square",
            Dessert, "Patisserie", 3, 3, "Union Square", &[Anniversary, Surprise]),
    ]
}
