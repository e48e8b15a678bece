use crate::models::{Interest, InterestCategory};

fn interest(name: &str, category: InterestCategory, icon: &str) -> Interest {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    Interest {
        id: format!("int-{}", slug),
        name: name.to_string(),
        category,
        icon: Some(icon.to_string()),
    }
}

/// Interests people can pick before swiping
pub fn default_interests() -> Vec<Interest> {
    use InterestCategory::*;

    vec![
        interest("Italian", Food, "🍝"),
        interest("Mexican", Food, "🌮"),
        interest("Sushi", Food, "🍣"),
        interest("Pizza", Food, "🍕"),
        interest("Brunch", Food, "🥞"),
        interest("Fine Dining", Food, "🥂"),
        interest("Street Food", Food, "🌯"),
        interest("Vegetarian", Food, "🥗"),
        interest("Wine Bars", Drinks, "🍷"),
        interest("Cocktails", Drinks, "🍸"),
        interest("Craft Beer", Drinks, "🍺"),
        interest("Coffee", Drinks, "☕"),
        interest("Bubble Tea", Drinks, "🧋"),
        interest("Hiking", Outdoors, "🥾"),
        interest("Beach", Outdoors, "🏖️"),
        interest("Parks", Outdoors, "🌳"),
        interest("Sunset Views", Outdoors, "🌅"),
        interest("Picnic", Outdoors, "🧺"),
        interest("Museums", Culture, "🏛️"),
        interest("Art Galleries", Culture, "🎨"),
        interest("Live Music", Culture, "🎵"),
        interest("Theater", Culture, "🎭"),
        interest("Bookstores", Culture, "📚"),
        interest("Movies", Entertainment, "🎬"),
        interest("Bowling", Entertainment, "🎳"),
        interest("Arcade", Entertainment, "🕹️"),
        interest("Mini Golf", Entertainment, "⛳"),
        interest("Escape Room", Entertainment, "🔐"),
        interest("Dancing", Nightlife, "💃"),
        interest("Live DJ", Nightlife, "🎧"),
        interest("Karaoke", Nightlife, "🎤"),
        interest("Rooftop Bar", Nightlife, "🌃"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_ids_are_slugs() {
        let interests = default_interests();
        let rooftop = interests.iter().find(|i| i.name == "Rooftop Bar").unwrap();
        assert_eq!(rooftop.id, "int-rooftop-bar");
        assert_eq!(rooftop.category, InterestCategory::Nightlife);
    }

    #[test]
    fn test_every_category_populated() {
        let interests = default_interests();
        for category in InterestCategory::ORDER {
            assert!(interests.iter().any(|i| i.category == category), "{:?} empty", category);
        }
    }
}
