pub mod match_info;
pub mod roster;
pub mod teams;

use crate::error::MatchError;
use crate::models::{MatchRecord, Side};
use crate::utils::feedback::Reply;

/// Every command the bot understands. Names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/sumo`
    Join,
    /// `/sumoa <name>`
    JoinOther(String),
    /// `/bajar`
    Leave,
    /// `/bajoa <name>`
    LeaveOther(String),
    /// `/jugadores`
    Players,
    /// `/crearpartido`
    CreateMatch,
    /// `/partido`
    ShowMatch,
    /// `/estado`
    Status,
    /// `/equipoOscuro:<name,name,...>` or `/equipoClaro:<name,...>`
    AssignTeam { side: Side, names: Vec<String> },
    /// `/reiniciarEquipos`
    ResetTeams,
    /// `/verEquipos`
    ShowTeams,
    /// `/crearEquiposAlAzar`
    RandomTeams,
    /// `/intercambia <dark position> <light position>`
    Swap { primary: i64, opposing: i64 },
    /// `/ponerAlarma:<hours>`
    SetAlarm(u32),
    /// `/ayuda`
    Help,
    /// Anything else starting with `/`.
    Unknown(String),
}

/// Command names with their help line, in the order `/ayuda` lists them.
pub const COMMAND_DESCRIPTIONS: &[(&str, &str)] = &[
    ("sumo", "🙋 Sign yourself up for the match"),
    ("sumoa [name]", "🙋‍♂️ Sign up a friend"),
    ("bajar", "🚶 Drop out of the match"),
    ("bajoa [name]", "🚶‍♂️ Take a friend off the list"),
    ("jugadores", "👥 Show who is playing"),
    ("equipoOscuro:[player1,player2,...]", "⚫ Pick the dark team"),
    ("equipoClaro:[player1,player2,...]", "⚪ Pick the light team"),
    ("reiniciarEquipos", "🔄 Clear both teams"),
    ("verEquipos", "👀 Show the teams"),
    ("crearEquiposAlAzar", "🎲 Split the players into random teams"),
    (
        "intercambia [dark] [light]",
        "🔀 Swap the player at a dark team position with one at a light team position",
    ),
    ("ponerAlarma:[hours]", "⏰ Get a reminder that many hours before kickoff"),
    ("crearpartido", "🎮 Create a new match"),
    ("partido", "📋 Show the match details"),
    ("estado", "🔍 Check that the bot is running"),
    ("ayuda", "ℹ️ Show this help"),
];

impl Command {
    /// Parses a message starting with `/`.
    ///
    /// The command name is the leading run of letters, digits and underscores;
    /// an `@botname` suffix is skipped and the arguments follow after `:` or
    /// whitespace.
    pub fn parse(text: &str) -> Result<Self, MatchError> {
        let body = text.trim().strip_prefix('/').unwrap_or(text.trim());
        let name_len = body
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(body.len());
        let (name, mut rest) = body.split_at(name_len);
        if let Some(mention) = rest.strip_prefix('@') {
            let end = mention
                .find(|c: char| c == ':' || c.is_whitespace())
                .unwrap_or(mention.len());
            rest = &mention[end..];
        }
        let args = rest.strip_prefix(':').unwrap_or(rest).trim();

        let command = match name {
            "sumo" => Command::Join,
            "sumoa" => Command::JoinOther(required(args, "sumoa")?.to_string()),
            "bajar" => Command::Leave,
            "bajoa" => Command::LeaveOther(required(args, "bajoa")?.to_string()),
            "jugadores" => Command::Players,
            "crearpartido" => Command::CreateMatch,
            "partido" => Command::ShowMatch,
            "estado" => Command::Status,
            "equipoOscuro" => Command::AssignTeam {
                side: Side::Primary,
                names: split_names(required(args, "equipoOscuro")?),
            },
            "equipoClaro" => Command::AssignTeam {
                side: Side::Opposing,
                names: split_names(required(args, "equipoClaro")?),
            },
            "reiniciarEquipos" => Command::ResetTeams,
            "verEquipos" => Command::ShowTeams,
            "crearEquiposAlAzar" => Command::RandomTeams,
            "intercambia" => {
                let mut positions = args.split_whitespace();
                match (positions.next(), positions.next()) {
                    (Some(primary), Some(opposing)) => Command::Swap {
                        primary: parse_number(primary)?,
                        opposing: parse_number(opposing)?,
                    },
                    _ => return Err(MatchError::MissingArgument("intercambia")),
                }
            }
            "ponerAlarma" => {
                let hours = required(args, "ponerAlarma")?;
                Command::SetAlarm(
                    hours
                        .parse()
                        .map_err(|_| MatchError::InvalidNumber(hours.to_string()))?,
                )
            }
            "ayuda" => Command::Help,
            other => Command::Unknown(other.to_string()),
        };
        Ok(command)
    }

    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Join => "sumo",
            Command::JoinOther(_) => "sumoa",
            Command::Leave => "bajar",
            Command::LeaveOther(_) => "bajoa",
            Command::Players => "jugadores",
            Command::CreateMatch => "crearpartido",
            Command::ShowMatch => "partido",
            Command::Status => "estado",
            Command::AssignTeam {
                side: Side::Primary,
                ..
            } => "equipoOscuro",
            Command::AssignTeam {
                side: Side::Opposing,
                ..
            } => "equipoClaro",
            Command::ResetTeams => "reiniciarEquipos",
            Command::ShowTeams => "verEquipos",
            Command::RandomTeams => "crearEquiposAlAzar",
            Command::Swap { .. } => "intercambia",
            Command::SetAlarm(_) => "ponerAlarma",
            Command::Help => "ayuda",
            Command::Unknown(_) => "unknown",
        }
    }

    pub fn help_text() -> String {
        let mut text = String::from("ℹ️ Available commands:\n\n");
        for (usage, description) in COMMAND_DESCRIPTIONS {
            text.push_str(&format!("/{usage} - {description}\n"));
        }
        text
    }
}

fn required<'a>(args: &'a str, command: &'static str) -> Result<&'a str, MatchError> {
    if args.is_empty() {
        Err(MatchError::MissingArgument(command))
    } else {
        Ok(args)
    }
}

fn split_names(args: &str) -> Vec<String> {
    args.split(',').map(|name| name.trim().to_string()).collect()
}

fn parse_number(arg: &str) -> Result<i64, MatchError> {
    arg.parse()
        .map_err(|_| MatchError::InvalidNumber(arg.to_string()))
}

/// Runs `command` for `sender` against the match and builds the reply.
pub fn execute(command: Command, sender: &str, record: &mut MatchRecord) -> Result<Reply, MatchError> {
    match command {
        Command::Join => roster::handle_join(record, sender),
        Command::JoinOther(name) => roster::handle_join(record, &name),
        Command::Leave => Ok(roster::handle_leave(record, sender)),
        Command::LeaveOther(name) => roster::handle_leave_other(record, &name),
        Command::Players => roster::handle_players(record),
        Command::CreateMatch => match_info::handle_create(record),
        Command::ShowMatch => match_info::handle_show(record),
        Command::Status => Ok(match_info::handle_status()),
        Command::AssignTeam { side, names } => teams::handle_assign(record, &names, side),
        Command::ResetTeams => teams::handle_reset(record),
        Command::ShowTeams => Ok(teams::handle_show(record)),
        Command::RandomTeams => teams::handle_random(record, &mut rand::rng()),
        Command::Swap { primary, opposing } => teams::handle_swap(record, primary, opposing),
        Command::SetAlarm(hours) => match_info::handle_set_alarm(record, hours),
        Command::Help => Ok(Reply::plain(Command::help_text())),
        Command::Unknown(_) => Ok(Reply::plain("I don't understand that command, try /ayuda")),
    }
}
