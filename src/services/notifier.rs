use std::future::Future;
use teloxide::prelude::*;

/// Outbound side of the chat transport used by the background jobs.
pub trait Notifier: Clone + Send + Sync + 'static {
    fn notify(
        &self,
        chat_id: ChatId,
        text: String,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl Notifier for Bot {
    fn notify(
        &self,
        chat_id: ChatId,
        text: String,
    ) -> impl Future<Output = anyhow::Result<()>> + Send {
        let bot = self.clone();
        async move {
            bot.send_message(chat_id, text).await?;
            Ok(())
        }
    }
}
