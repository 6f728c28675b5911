use serde::{Deserialize, Serialize};
use std::fmt;

/// Pitch size booked for the match. Fixes the players per side and the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VenueType {
    /// Five a side.
    Small,
    /// Seven a side.
    Medium,
    /// Eight a side.
    Large,
}

impl VenueType {
    /// All venue types, in the order they are offered.
    pub const ALL: [VenueType; 3] = [VenueType::Small, VenueType::Medium, VenueType::Large];

    /// Players required on each team.
    pub fn per_side_count(self) -> usize {
        match self {
            VenueType::Small => 5,
            VenueType::Medium => 7,
            VenueType::Large => 8,
        }
    }

    /// Players required for the whole match.
    pub fn total_players(self) -> usize {
        self.per_side_count() * 2
    }

    /// Callback payload attached to the selection button.
    pub fn callback_data(self) -> &'static str {
        match self {
            VenueType::Small => "venue_small",
            VenueType::Medium => "venue_medium",
            VenueType::Large => "venue_large",
        }
    }

    /// Inverse of [`VenueType::callback_data`].
    pub fn from_callback_data(data: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|venue| venue.callback_data() == data)
    }

    /// The venue type whose match needs exactly `players` players, if any.
    pub fn for_total_players(players: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|venue| venue.total_players() == players)
    }
}

impl fmt::Display for VenueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fútbol {}", self.per_side_count())
    }
}

/// Price charged for each venue type, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenuePrices {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl VenuePrices {
    pub fn price_for(&self, venue: VenueType) -> u32 {
        match venue {
            VenueType::Small => self.small,
            VenueType::Medium => self.medium,
            VenueType::Large => self.large,
        }
    }
}

impl Default for VenuePrices {
    fn default() -> Self {
        Self {
            small: 50_000,
            medium: 70_000,
            large: 80_000,
        }
    }
}
