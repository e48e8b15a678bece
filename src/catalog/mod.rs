// Static catalog data
pub mod interests;
pub mod neighborhoods;
pub mod venues;

pub use neighborhoods::Adjacency;

use crate::models::{Interest, InterestCategory, Venue, VenueType};

/// Read-only venue collection with its neighborhood adjacency table
#[derive(Debug, Clone)]
pub struct VenueCatalog {
    venues: Vec<Venue>,
    adjacency: Adjacency,
}

impl VenueCatalog {
    pub fn new(venues: Vec<Venue>, adjacency: Adjacency) -> Self {
        Self { venues, adjacency }
    }

    /// The San Francisco catalog the service ships with
    pub fn san_francisco() -> Self {
        Self::new(venues::san_francisco_venues(), neighborhoods::san_francisco_adjacency())
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub fn get(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == id)
    }

    /// Venues of one type, in catalog order
    pub fn of_type(&self, venue_type: VenueType) -> impl Iterator<Item = &Venue> {
        self.venues.iter().filter(move |v| v.venue_type == venue_type)
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

impl Default for VenueCatalog {
    fn default() -> Self {
        Self::san_francisco()
    }
}

/// Interest labels offered to people before swiping
#[derive(Debug, Clone)]
pub struct InterestCatalog {
    interests: Vec<Interest>,
}

impl InterestCatalog {
    pub fn new(mut interests: Vec<Interest>) -> Self {
        interests.sort_by(|a, b| a.name.cmp(&b.name));
        Self { interests }
    }

    pub fn interests(&self) -> &[Interest] {
        &self.interests
    }

    pub fn contains(&self, name: &str) -> bool {
        self.interests.iter().any(|i| i.name == name)
    }

    /// Interests bucketed by category in display order, names sorted within a bucket
    pub fn grouped(&self) -> Vec<(InterestCategory, Vec<Interest>)> {
        InterestCategory::ORDER
            .iter()
            .map(|category| {
                let members = self
                    .interests
                    .iter()
                    .filter(|i| i.category == *category)
                    .cloned()
                    .collect();
                (*category, members)
            })
            .collect()
    }
}

impl Default for InterestCatalog {
    fn default() -> Self {
        Self::new(interests::default_interests())
    }
}
