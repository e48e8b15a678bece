use std::collections::HashMap;

/// Neighborhoods reachable within a short walk of each other
///
/// Lookups for a neighborhood without an entry fall back to the
/// neighborhood itself. The table is not required to be symmetric.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    walkable: HashMap<String, Vec<String>>,
}

impl Adjacency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the ordered walkable set for `neighborhood`
    pub fn with(mut self, neighborhood: &str, reachable: &[&str]) -> Self {
        self.walkable.insert(
            neighborhood.to_string(),
            reachable.iter().map(|n| n.to_string()).collect(),
        );
        self
    }

    /// Ordered walkable set for a neighborhood, or `None` when undeclared
    pub fn get(&self, neighborhood: &str) -> Option<&[String]> {
        self.walkable.get(neighborhood).map(Vec::as_slice)
    }

    #[inline]
    pub fn is_adjacent(&self, from: &str, to: &str) -> bool {
        match self.walkable.get(from) {
            Some(reachable) => reachable.iter().any(|n| n == to),
            None => from == to,
        }
    }

    pub fn len(&self) -> usize {
        self.walkable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walkable.is_empty()
    }
}

pub fn san_francisco_adjacency() -> Adjacency {
    Adjacency::new()
        .with("Mission", &["Mission", "Noe Valley", "SoMa", "Hayes Valley"])
        .with("Noe Valley", &["Noe Valley", "Mission"])
        .with("SoMa", &["SoMa", "Mission", "Embarcadero", "Financial District", "Union Square"])
        .with("Embarcadero", &["Embarcadero", "Financial District", "SoMa", "North Beach"])
        .with("Financial District", &["Financial District", "Embarcadero", "North Beach", "Union Square", "SoMa"])
        .with("North Beach", &["North Beach", "Russian Hill", "Financial District", "Embarcadero"])
        .with("Russian Hill", &["Russian Hill", "North Beach", "Nob Hill", "Marina"])
        .with("Nob Hill", &["Nob Hill", "Russian Hill", "Union Square"])
        .with("Union Square", &["Union Square", "Nob Hill", "Financial District", "SoMa"])
        .with("Marina", &["Marina", "Russian Hill"])
        .with("Hayes Valley", &["Hayes Valley", "Lower Haight", "Mission"])
        .with("Lower Haight", &["Lower Haight", "Hayes Valley"])
        .with("Golden Gate Park", &["Golden Gate Park", "Outer Richmond"])
        .with("Outer Richmond", &["Outer Richmond", "Golden Gate Park"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_adjacency() {
        let adjacency = san_francisco_adjacency();
        assert!(adjacency.is_adjacent("Mission", "Noe Valley"));
        assert!(adjacency.is_adjacent("Mission", "Mission"));
        assert!(!adjacency.is_adjacent("Mission", "Marina"));
    }

    #[test]
    fn test_undeclared_neighborhood_is_only_adjacent_to_itself() {
        let adjacency = Adjacency::new().with("A", &["A", "B"]);
        assert!(adjacency.is_adjacent("Z", "Z"));
        assert!(!adjacency.is_adjacent("Z", "A"));
        assert!(adjacency.get("Z").is_none());
    }

    #[test]
    fn test_not_forced_symmetric() {
        let adjacency = Adjacency::new().with("A", &["A", "B"]).with("B", &["B"]);
        assert!(adjacency.is_adjacent("A", "B"));
        assert!(!adjacency.is_adjacent("B", "A"));
    }
}
