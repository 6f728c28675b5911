use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Placeholder printed for a free slot in the slotted roster.
pub const EMPTY_SLOT: &str = "--------";

/// A registered player. Identity is the trimmed, case-sensitive name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
}

impl Player {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
        }
    }
}

/// Players signed up for the current match, in join order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim();
        self.players.iter().any(|p| p.name == name)
    }

    /// Appends `name`, refusing blanks and names already on the list.
    pub fn add(&mut self, name: &str) -> Result<&[Player], MatchError> {
        let player = Player::new(name);
        if player.name.is_empty() {
            return Err(MatchError::BlankName);
        }
        if self.contains(&player.name) {
            return Err(MatchError::AlreadyRegistered(player.name));
        }
        self.players.push(player);
        Ok(&self.players)
    }

    /// Removes the first player called `name`. Absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.trim();
        match self.players.iter().position(|p| p.name == name) {
            Some(index) => {
                self.players.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// True once the roster holds `total` players or more.
    pub fn capacity_reached(&self, total: Option<usize>) -> bool {
        total.is_some_and(|total| self.players.len() >= total)
    }

    /// Comma-joined names.
    pub fn render(&self) -> String {
        join_names(&self.players)
    }

    /// Numbered list of exactly `slots` lines, free slots shown as [`EMPTY_SLOT`].
    pub fn render_slotted(&self, slots: usize) -> String {
        (1..=slots)
            .map(|slot| {
                let name = self
                    .players
                    .get(slot - 1)
                    .map_or(EMPTY_SLOT, |p| p.name.as_str());
                format!("{slot}. {name}\n")
            })
            .collect()
    }
}

/// Comma-joined names of `players`.
pub fn join_names(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
