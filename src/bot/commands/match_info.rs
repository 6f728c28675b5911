use crate::error::MatchError;
use crate::models::MatchRecord;
use crate::utils::feedback::Reply;

pub const LOCATION_PROMPT: &str = "Where are we playing?";
pub const DATE_TIME_PROMPT: &str = "What day and time? (format: DD-MM-YYYY HH:MM)";
pub const VENUE_PROMPT: &str = "What kind of pitch?";

/// `/crearpartido`: opens the creation wizard.
pub fn handle_create(record: &mut MatchRecord) -> Result<Reply, MatchError> {
    record.start_creation()?;
    Ok(Reply::prompt(LOCATION_PROMPT))
}

/// `/partido`
pub fn handle_show(record: &MatchRecord) -> Result<Reply, MatchError> {
    if !record.is_created() {
        return Err(MatchError::MatchNotCreated);
    }
    Ok(Reply::plain(record.summary()))
}

/// `/estado`
pub fn handle_status() -> Reply {
    Reply::success("I'm up and running")
}

/// `/ponerAlarma:`
pub fn handle_set_alarm(record: &mut MatchRecord, hours: u32) -> Result<Reply, MatchError> {
    record.add_alarm(hours)?;
    Ok(Reply::success(&format!(
        "Alarm set for {hours} hours before the match."
    )))
}

/// Routes a free-text reply to whichever wizard question is open.
///
/// Returns `None` when no question is waiting for text.
pub fn handle_wizard_reply(record: &mut MatchRecord, text: &str) -> Option<Reply> {
    if record.submit_location(text) {
        return Some(Reply::prompt(DATE_TIME_PROMPT));
    }
    match record.submit_date_time(text) {
        Ok(true) => Some(Reply::venue_choices(VENUE_PROMPT)),
        Ok(false) => None,
        Err(err) => Some(Reply::from(err)),
    }
}

/// Venue button pressed. `None` when no venue question is open.
pub fn handle_venue_choice(record: &mut MatchRecord, choice: &str) -> Option<Reply> {
    match record.select_venue(choice) {
        Ok(Some(_)) => Some(Reply::success(&format!(
            "Match created:\n{}",
            record.summary()
        ))),
        Ok(None) => None,
        Err(err) => Some(Reply::from(err)),
    }
}
