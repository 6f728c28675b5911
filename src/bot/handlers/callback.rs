use teloxide::prelude::*;

use super::HandlerResult;
use crate::bot::commands::match_info;
use crate::models::SharedMatch;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::log_wizard_step;

pub async fn callback_handler(bot: Bot, q: CallbackQuery, state: SharedMatch) -> HandlerResult {
    let data = q.data.clone().unwrap_or_default();
    let chat_id = q.message.as_ref().map(|m| m.chat.id);

    tracing::info!(
        "Callback received: '{}' from {} in chat {:?}",
        data,
        q.from.first_name,
        chat_id
    );

    // Venue buttons are the only inline keyboard the bot sends.
    let reply = {
        let mut record = state.lock().await;
        match_info::handle_venue_choice(&mut record, &data)
    };

    if let (Some(reply), Some(chat_id)) = (reply, chat_id) {
        log_wizard_step("venue selected", chat_id.0, Some(&data));
        CommandFeedback::new(bot.clone(), chat_id).send(reply).await?;
    }

    bot.answer_callback_query(q.id).await?;
    Ok(())
}
