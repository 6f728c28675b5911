use teloxide::prelude::*;

use super::HandlerResult;
use crate::bot::commands::{self, match_info, Command};
use crate::models::{MatchRecord, SharedMatch};
use crate::utils::feedback::{CommandFeedback, Reply};
use crate::utils::logging::{
    log_command_error, log_command_start, log_command_success, log_wizard_step,
};

pub async fn message_handler(bot: Bot, msg: Message, state: SharedMatch) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let chat_id = msg.chat.id;
    let sender = msg
        .from()
        .map(|user| user.first_name.clone())
        .unwrap_or_default();

    let reply = {
        let mut record = state.lock().await;
        record.set_chat(chat_id);

        if text.starts_with('/') {
            Some(run_command(text, &sender, chat_id.0, &mut record))
        } else if msg.reply_to_message().is_some() {
            route_wizard_reply(text, chat_id.0, &mut record)
        } else {
            None
        }
    };

    if let Some(reply) = reply {
        CommandFeedback::new(bot, chat_id).send(reply).await?;
    }
    Ok(())
}

/// Parses and runs one command, logging the outcome.
pub fn run_command(text: &str, sender: &str, chat_id: i64, record: &mut MatchRecord) -> Reply {
    let command = match Command::parse(text) {
        Ok(command) => command,
        Err(err) => {
            log_command_error(text, sender, chat_id, &err.to_string());
            return Reply::from(err);
        }
    };

    let name = command.name();
    log_command_start(name, sender, chat_id, None);
    match commands::execute(command, sender, record) {
        Ok(reply) => {
            log_command_success(name, sender, chat_id);
            reply
        }
        Err(err) => {
            log_command_error(name, sender, chat_id, &err.to_string());
            Reply::from(err)
        }
    }
}

/// Feeds a free-text reply into the creation wizard.
pub fn route_wizard_reply(text: &str, chat_id: i64, record: &mut MatchRecord) -> Option<Reply> {
    let step = record.step();
    let reply = match_info::handle_wizard_reply(record, text)?;
    if record.step() != step {
        log_wizard_step(&format!("{:?} -> {:?}", step, record.step()), chat_id, Some(text));
    } else {
        log_wizard_step(&format!("{step:?} retry"), chat_id, Some(text));
    }
    Some(reply)
}
