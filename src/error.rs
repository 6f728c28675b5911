use thiserror::Error;

/// Every way a match operation can be refused.
///
/// None of these are fatal: the bot turns each one into an error reply and
/// leaves the match record untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The command needs a created match and there is none.
    #[error("There is no match yet")]
    MatchNotCreated,
    /// A match already exists or is being created.
    #[error("A match already exists, only one can be organised at a time")]
    MatchAlreadyExists,
    /// A named team does not have exactly the per-side count for the venue.
    #[error("This venue needs exactly {required} players on each team")]
    WrongTeamSize {
        /// Players required on each side.
        required: usize,
    },
    /// Some of the named players are not on the roster.
    #[error("These players are not signed up for the match: {}", .0.join(", "))]
    UnknownPlayers(Vec<String>),
    /// Random teams need 10, 14 or 16 registered players.
    #[error("Random teams need exactly 10, 14 or 16 players, there are {0}")]
    InvalidRosterSize(usize),
    /// A swap position is below 1 or past the end of its team.
    #[error("Positions out of range")]
    PositionOutOfRange,
    /// A wizard date reply did not match `DD-MM-YYYY HH:MM`.
    #[error("Invalid date and time format")]
    InvalidDateTimeFormat,
    /// The player is already on the roster.
    #[error("{0} is already on the list")]
    AlreadyRegistered(String),
    /// Every slot for the current venue is taken.
    #[error("The maximum number of players for this match has been reached")]
    RosterFull,
    /// A player name was empty after trimming.
    #[error("A player name cannot be blank")]
    BlankName,
    /// A command was sent without its argument.
    #[error("/{0} needs an argument")]
    MissingArgument(&'static str),
    /// A numeric argument could not be parsed or is not positive.
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
    /// The venue is unset or the chosen venue is not one of the three offered.
    #[error("Unrecognised venue type")]
    UnrecognizedVenueType,
}

impl MatchError {
    /// Hint shown under the error message, when there is a useful one.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            MatchError::MatchNotCreated => Some("Create one first with /crearpartido"),
            MatchError::MatchAlreadyExists => {
                Some("Use /partido to see it, a new one can be created once it has finished")
            }
            MatchError::WrongTeamSize { .. } => {
                Some("Separate the names with commas, e.g. /equipoOscuro:Ana,Beto,Caro,Dani,Eli")
            }
            MatchError::UnknownPlayers(_) => Some("Check the spelling with /jugadores"),
            MatchError::InvalidDateTimeFormat => {
                Some("Reply with the format DD-MM-YYYY HH:MM, e.g. 25-12-2024 20:30")
            }
            MatchError::MissingArgument("intercambia") => {
                Some("Use /intercambia <dark position> <light position>, e.g. /intercambia 2 4")
            }
            MatchError::MissingArgument("ponerAlarma") => {
                Some("Use /ponerAlarma:<hours before kickoff>, e.g. /ponerAlarma:3")
            }
            MatchError::MissingArgument(_) => Some("Use /ayuda to see how each command is used"),
            MatchError::BlankName => {
                Some("Set a first name in your Telegram profile, or use /sumoa <name>")
            }
            MatchError::PositionOutOfRange => Some("Use /verEquipos to check the positions"),
            _ => None,
        }
    }
}
