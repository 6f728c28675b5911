use crate::error::MatchError;
use crate::models::MatchRecord;
use crate::utils::feedback::Reply;

/// `/sumo` with the sender's name, `/sumoa` with a friend's.
pub fn handle_join(record: &mut MatchRecord, name: &str) -> Result<Reply, MatchError> {
    let had_teams = record.teams().is_assigned();
    record.register(name)?;
    let mut text = record.render_roster();
    if had_teams {
        text.push_str("\nTeams were cleared, pick them again.");
    }
    Ok(Reply::plain(text))
}

/// `/bajar`: works even before a match exists.
pub fn handle_leave(record: &mut MatchRecord, name: &str) -> Reply {
    record.unregister(name);
    Reply::plain(record.render_roster())
}

/// `/bajoa`
pub fn handle_leave_other(record: &mut MatchRecord, name: &str) -> Result<Reply, MatchError> {
    if !record.is_created() {
        return Err(MatchError::MatchNotCreated);
    }
    Ok(handle_leave(record, name))
}

/// `/jugadores`
pub fn handle_players(record: &MatchRecord) -> Result<Reply, MatchError> {
    if !record.is_created() {
        return Err(MatchError::MatchNotCreated);
    }
    Ok(Reply::plain(record.render_roster()))
}
