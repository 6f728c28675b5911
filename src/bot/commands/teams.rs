use rand::Rng;

use crate::error::MatchError;
use crate::models::{MatchRecord, Side};
use crate::utils::feedback::Reply;

/// `/equipoOscuro:` and `/equipoClaro:`
pub fn handle_assign(
    record: &mut MatchRecord,
    names: &[String],
    side: Side,
) -> Result<Reply, MatchError> {
    let rendered = record.assign_team(names, side)?;
    Ok(Reply::plain(rendered))
}

/// `/crearEquiposAlAzar`
pub fn handle_random<R: Rng + ?Sized>(
    record: &mut MatchRecord,
    rng: &mut R,
) -> Result<Reply, MatchError> {
    let rendered = record.assign_random(rng)?;
    Ok(Reply::plain(format!("Random teams:\n{rendered}")))
}

/// `/intercambia`
pub fn handle_swap(
    record: &mut MatchRecord,
    primary: i64,
    opposing: i64,
) -> Result<Reply, MatchError> {
    let rendered = record.swap(primary, opposing)?;
    Ok(Reply::plain(format!("Players swapped:\n{rendered}")))
}

/// `/reiniciarEquipos`
pub fn handle_reset(record: &mut MatchRecord) -> Result<Reply, MatchError> {
    record.reset_teams()?;
    Ok(Reply::success(
        "Teams cleared. Pick them again with /equipoOscuro and /equipoClaro.",
    ))
}

/// `/verEquipos`
pub fn handle_show(record: &MatchRecord) -> Reply {
    Reply::plain(record.teams().render(Side::Primary))
}
