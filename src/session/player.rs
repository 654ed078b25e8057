//! The player and their running total

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    total_points: u32,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_points: 0,
        }
    }

    /// Add points earned by a won match. The total never decreases.
    pub const fn add_points(&mut self, points: u32) {
        self.total_points = self.total_points.saturating_add(points);
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn total_points(&self) -> u32 {
        self.total_points
    }
}
