pub mod callback;
pub mod message;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::models::SharedMatch;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

pub struct BotHandler {
    pub state: SharedMatch,
}

impl BotHandler {
    pub fn new(state: SharedMatch) -> Self {
        Self { state }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        let state = self.state.clone();
        let state_callback = self.state.clone();

        dptree::entry()
            .branch(
                Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
                    let state = state.clone();
                    async move { message::message_handler(bot, msg, state).await }
                }),
            )
            .branch(
                Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                    let state = state_callback.clone();
                    async move { callback::callback_handler(bot, q, state).await }
                }),
            )
    }
}
