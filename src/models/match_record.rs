use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use teloxide::types::ChatId;
use tokio::sync::Mutex;

use super::roster::{Player, Roster};
use super::teams::{Side, Teams};
use super::venue::{VenuePrices, VenueType};
use super::wizard::WizardStep;
use crate::error::MatchError;
use crate::utils::datetime::format_match_time;

/// The one match this process organises, with its roster and teams.
///
/// Starts empty, is filled in by the creation wizard and roster commands, and
/// goes back to empty when the scheduled time passes.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub(crate) venue: Option<VenueType>,
    pub(crate) scheduled_at: Option<NaiveDateTime>,
    pub(crate) location: String,
    pub(crate) price: Option<u32>,
    pub(crate) created: bool,
    pub(crate) step: WizardStep,
    pub(crate) alarm_offsets: Vec<u32>,
    pub(crate) fired_alarms: BTreeSet<u32>,
    pub(crate) teams: Teams,
    pub(crate) roster: Roster,
    pub(crate) chat_id: Option<ChatId>,
    pub(crate) prices: VenuePrices,
}

/// The record shared by the command handlers and the background jobs.
///
/// Every read-modify-write happens under this one lock.
pub type SharedMatch = Arc<Mutex<MatchRecord>>;

/// Read-only view of the record for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub created: bool,
    pub step: WizardStep,
    pub players: usize,
    pub venue: Option<VenueType>,
    pub scheduled_at: Option<NaiveDateTime>,
    pub alarms: Vec<u32>,
}

impl MatchRecord {
    pub fn new(prices: VenuePrices) -> Self {
        Self {
            venue: None,
            scheduled_at: None,
            location: String::new(),
            price: None,
            created: false,
            step: WizardStep::Idle,
            alarm_offsets: Vec::new(),
            fired_alarms: BTreeSet::new(),
            teams: Teams::default(),
            roster: Roster::new(),
            chat_id: None,
            prices,
        }
    }

    pub fn into_shared(self) -> SharedMatch {
        Arc::new(Mutex::new(self))
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn venue(&self) -> Option<VenueType> {
        self.venue
    }

    pub fn price(&self) -> Option<u32> {
        self.price
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        self.scheduled_at
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn teams(&self) -> &Teams {
        &self.teams
    }

    pub fn alarm_offsets(&self) -> &[u32] {
        &self.alarm_offsets
    }

    pub fn chat_id(&self) -> Option<ChatId> {
        self.chat_id
    }

    /// Remembers where scheduler notifications should go.
    pub fn set_chat(&mut self, chat_id: ChatId) {
        self.chat_id = Some(chat_id);
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            created: self.created,
            step: self.step,
            players: self.roster.len(),
            venue: self.venue,
            scheduled_at: self.scheduled_at,
            alarms: self.alarm_offsets.clone(),
        }
    }

    fn require_created(&self) -> Result<(), MatchError> {
        if self.created {
            Ok(())
        } else {
            Err(MatchError::MatchNotCreated)
        }
    }

    fn required_venue(&self) -> Result<VenueType, MatchError> {
        self.venue.ok_or(MatchError::UnrecognizedVenueType)
    }

    /// Adds `name` to the roster of the created match.
    ///
    /// Teams picked earlier no longer cover the roster, so they are cleared.
    pub fn register(&mut self, name: &str) -> Result<&[Player], MatchError> {
        self.require_created()?;
        if self
            .roster
            .capacity_reached(self.venue.map(VenueType::total_players))
        {
            return Err(MatchError::RosterFull);
        }
        self.roster.add(name)?;
        self.teams.reset();
        Ok(self.roster.players())
    }

    /// Takes `name` off the roster and off whichever team has them.
    /// Unknown names leave both unchanged.
    pub fn unregister(&mut self, name: &str) -> &[Player] {
        if self.roster.remove(name) {
            self.teams.remove_player(name);
        }
        self.roster.players()
    }

    /// Slotted list while the venue is known, plain list otherwise.
    pub fn render_roster(&self) -> String {
        match self.venue {
            Some(venue) => self.roster.render_slotted(venue.total_players()),
            None => self.roster.render(),
        }
    }

    pub fn assign_team(&mut self, names: &[String], side: Side) -> Result<String, MatchError> {
        self.require_created()?;
        let venue = self.required_venue()?;
        self.teams.assign_named(&self.roster, venue, names, side)?;
        Ok(self.teams.render(side))
    }

    pub fn assign_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String, MatchError> {
        self.require_created()?;
        self.teams.assign_random(&mut self.roster, rng)?;
        Ok(self.teams.render(Side::Primary))
    }

    pub fn swap(&mut self, primary_pos: i64, opposing_pos: i64) -> Result<String, MatchError> {
        self.require_created()?;
        self.teams.swap(primary_pos, opposing_pos)?;
        Ok(self.teams.render(Side::Primary))
    }

    pub fn reset_teams(&mut self) -> Result<(), MatchError> {
        self.require_created()?;
        self.teams.reset();
        Ok(())
    }

    /// Registers an alarm `hours` before kickoff.
    pub fn add_alarm(&mut self, hours: u32) -> Result<(), MatchError> {
        self.require_created()?;
        if hours == 0 {
            return Err(MatchError::InvalidNumber(hours.to_string()));
        }
        self.alarm_offsets.push(hours);
        Ok(())
    }

    /// Offsets due at `now`, each reported once per match.
    ///
    /// An offset of `h` hours is due while the time left until kickoff is in
    /// `(h hours - window, h hours]`.
    pub fn due_alarms(&mut self, now: NaiveDateTime, window: Duration) -> Vec<u32> {
        let Some(scheduled_at) = self.scheduled_at.filter(|_| self.created) else {
            return Vec::new();
        };
        let remaining = scheduled_at - now;

        let mut due = Vec::new();
        for &hours in &self.alarm_offsets {
            let offset = Duration::hours(i64::from(hours));
            if remaining <= offset && remaining > offset - window && self.fired_alarms.insert(hours)
            {
                due.push(hours);
            }
        }
        due
    }

    /// Resets the record if the created match is already in the past.
    ///
    /// Returns true when the match was expired.
    pub fn expire_if_due(&mut self, now: NaiveDateTime) -> bool {
        let due = self.created && self.scheduled_at.is_some_and(|at| at < now);
        if due {
            self.reset();
        }
        due
    }

    /// Back to the uncreated, empty form. The destination chat is kept.
    pub fn reset(&mut self) {
        *self = Self {
            chat_id: self.chat_id,
            ..Self::new(self.prices)
        };
    }

    /// Venue, price, time, location and players.
    pub fn summary(&self) -> String {
        let venue = self
            .venue
            .map_or_else(|| "-".to_string(), |venue| venue.to_string());
        let price = self.price.map_or_else(|| "-".to_string(), |price| format!("${price}"));
        let when = self
            .scheduled_at
            .map_or_else(|| "-".to_string(), |at| format_match_time(&at));
        format!(
            "Venue: {venue}\nPrice: {price}\nDate and time: {when}\nLocation: {}\nPlayers: {}",
            self.location,
            self.roster.render()
        )
    }
}
