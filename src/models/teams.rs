use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::roster::{join_names, Player, Roster};
use super::venue::VenueType;
use crate::error::MatchError;

/// One of the two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Dark shirts.
    Primary,
    /// Light shirts.
    Opposing,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Primary => Side::Opposing,
            Side::Opposing => Side::Primary,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Primary => "Dark team",
            Side::Opposing => "Light team",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two teams. Both empty until someone assigns them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    pub primary: Vec<Player>,
    pub opposing: Vec<Player>,
}

impl Teams {
    pub fn side(&self, side: Side) -> &[Player] {
        match side {
            Side::Primary => &self.primary,
            Side::Opposing => &self.opposing,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Vec<Player> {
        match side {
            Side::Primary => &mut self.primary,
            Side::Opposing => &mut self.opposing,
        }
    }

    pub fn is_assigned(&self) -> bool {
        !self.primary.is_empty() || !self.opposing.is_empty()
    }

    pub fn reset(&mut self) {
        self.primary.clear();
        self.opposing.clear();
    }

    /// Takes `name` off whichever side has them.
    pub fn remove_player(&mut self, name: &str) -> bool {
        let name = name.trim();
        [&mut self.primary, &mut self.opposing]
            .into_iter()
            .any(|side| match side.iter().position(|p| p.name == name) {
                Some(index) => {
                    side.remove(index);
                    true
                }
                None => false,
            })
    }

    /// Puts the named players on `side` and everybody else on the other one.
    ///
    /// The named list must hold exactly `venue.per_side_count()` distinct
    /// names, all of them on the roster. Players keep their roster order.
    pub fn assign_named(
        &mut self,
        roster: &Roster,
        venue: VenueType,
        names: &[String],
        side: Side,
    ) -> Result<(), MatchError> {
        let mut wanted: Vec<&str> = Vec::with_capacity(names.len());
        for name in names.iter().map(|n| n.trim()) {
            if !wanted.contains(&name) {
                wanted.push(name);
            }
        }

        let required = venue.per_side_count();
        if wanted.len() != required || names.len() != required {
            return Err(MatchError::WrongTeamSize { required });
        }

        let unknown: Vec<String> = wanted
            .iter()
            .filter(|name| !roster.contains(name))
            .map(|name| name.to_string())
            .collect();
        if !unknown.is_empty() {
            return Err(MatchError::UnknownPlayers(unknown));
        }

        let mut pending: HashSet<&str> = wanted.into_iter().collect();
        let (named, rest): (Vec<Player>, Vec<Player>) =
            roster.players().iter().cloned().partition(|player| {
                // first roster occurrence only
                pending.remove(player.name.as_str())
            });

        *self.side_mut(side) = named;
        *self.side_mut(side.other()) = rest;
        Ok(())
    }

    /// Shuffles the roster in place and splits it into two equal halves.
    ///
    /// The team size comes from the roster alone: 10, 14 or 16 players.
    pub fn assign_random<R: Rng + ?Sized>(
        &mut self,
        roster: &mut Roster,
        rng: &mut R,
    ) -> Result<(), MatchError> {
        let total = roster.len();
        let venue =
            VenueType::for_total_players(total).ok_or(MatchError::InvalidRosterSize(total))?;
        let per_side = venue.per_side_count();

        let players = roster.players_mut();
        players.shuffle(rng);

        self.primary = players[..per_side].to_vec();
        self.opposing = players[per_side..].to_vec();
        Ok(())
    }

    /// Exchanges `primary[primary_pos]` with `opposing[opposing_pos]` (1-based).
    pub fn swap(&mut self, primary_pos: i64, opposing_pos: i64) -> Result<(), MatchError> {
        let primary_index = to_index(primary_pos, self.primary.len())?;
        let opposing_index = to_index(opposing_pos, self.opposing.len())?;
        std::mem::swap(
            &mut self.primary[primary_index],
            &mut self.opposing[opposing_index],
        );
        Ok(())
    }

    /// Both sides, `first` on top.
    pub fn render(&self, first: Side) -> String {
        format!(
            "{}: {}\n{}: {}",
            first,
            join_names(self.side(first)),
            first.other(),
            join_names(self.side(first.other()))
        )
    }
}

fn to_index(position: i64, len: usize) -> Result<usize, MatchError> {
    usize::try_from(position)
        .ok()
        .filter(|&pos| pos >= 1 && pos <= len)
        .map(|pos| pos - 1)
        .ok_or(MatchError::PositionOutOfRange)
}
