//! The three-question conversation that creates a match.
//!
//! `Idle -> AwaitingLocation -> AwaitingDateTime -> AwaitingVenueType -> Idle`,
//! with `created` flipped on the last transition.

use serde::{Deserialize, Serialize};

use super::match_record::MatchRecord;
use super::venue::VenueType;
use crate::error::MatchError;
use crate::utils::datetime::parse_match_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Idle = 0,
    AwaitingLocation = 1,
    AwaitingDateTime = 2,
    AwaitingVenueType = 3,
}

impl MatchRecord {
    /// Opens the wizard. Refused while a match exists or is being created.
    pub fn start_creation(&mut self) -> Result<(), MatchError> {
        if self.created || self.step != WizardStep::Idle {
            return Err(MatchError::MatchAlreadyExists);
        }
        self.step = WizardStep::AwaitingLocation;
        Ok(())
    }

    /// Stores the location verbatim.
    ///
    /// Returns false when the wizard is not waiting for a location.
    pub fn submit_location(&mut self, text: &str) -> bool {
        if self.step != WizardStep::AwaitingLocation {
            return false;
        }
        self.location = text.to_string();
        self.step = WizardStep::AwaitingDateTime;
        true
    }

    /// Parses `DD-MM-YYYY HH:MM`. On failure the step does not move.
    pub fn submit_date_time(&mut self, text: &str) -> Result<bool, MatchError> {
        if self.step != WizardStep::AwaitingDateTime {
            return Ok(false);
        }
        let scheduled_at = parse_match_time(text)?;
        self.scheduled_at = Some(scheduled_at);
        self.step = WizardStep::AwaitingVenueType;
        Ok(true)
    }

    /// Applies the venue button payload and creates the match.
    ///
    /// Returns `Ok(None)` when the wizard is not waiting for a venue, and the
    /// chosen venue otherwise.
    pub fn select_venue(&mut self, choice: &str) -> Result<Option<VenueType>, MatchError> {
        if self.step != WizardStep::AwaitingVenueType {
            return Ok(None);
        }
        let venue =
            VenueType::from_callback_data(choice).ok_or(MatchError::UnrecognizedVenueType)?;
        self.venue = Some(venue);
        self.price = Some(self.prices.price_for(venue));
        self.created = true;
        self.step = WizardStep::Idle;
        Ok(Some(venue))
    }
}
