use teloxide::prelude::*;
use teloxide::types::{ForceReply, InlineKeyboardButton, InlineKeyboardMarkup};

use crate::error::MatchError;
use crate::models::VenueType;

/// Feedback types for different command outcomes
#[derive(Debug, Clone, Copy)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
    Info,
}

impl FeedbackType {
    fn emoji(self) -> &'static str {
        match self {
            FeedbackType::Success => "✅",
            FeedbackType::Warning => "⚠️",
            FeedbackType::Error => "❌",
            FeedbackType::Info => "ℹ️",
        }
    }
}

/// How the transport should present a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Plain,
    /// The chat client opens a reply box so the answer routes back to the wizard.
    ForceReply,
    /// Offer the three venue types as buttons.
    VenueChoices,
}

/// An outbound message, independent of the chat transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub kind: ReplyKind,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ReplyKind::Plain,
        }
    }

    pub fn with_feedback(feedback_type: FeedbackType, message: &str) -> Self {
        Self::plain(format!("{} {}", feedback_type.emoji(), message))
    }

    pub fn success(message: &str) -> Self {
        Self::with_feedback(FeedbackType::Success, message)
    }

    pub fn error(message: &str) -> Self {
        Self::with_feedback(FeedbackType::Error, message)
    }

    pub fn warning(message: &str) -> Self {
        Self::with_feedback(FeedbackType::Warning, message)
    }

    pub fn info(message: &str) -> Self {
        Self::with_feedback(FeedbackType::Info, message)
    }

    /// Error with a helpful suggestion underneath.
    pub fn validation_error(error: &str, suggestion: &str) -> Self {
        Self::error(&format!("{error}\n\n💡 Suggestion: {suggestion}"))
    }

    /// A question whose answer must come back as a reply.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ReplyKind::ForceReply,
        }
    }

    pub fn venue_choices(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ReplyKind::VenueChoices,
        }
    }
}

impl From<MatchError> for Reply {
    fn from(err: MatchError) -> Self {
        match err.suggestion() {
            Some(suggestion) => Reply::validation_error(&err.to_string(), suggestion),
            None => Reply::error(&err.to_string()),
        }
    }
}

/// One button per venue type, in a single row.
pub fn venue_keyboard() -> InlineKeyboardMarkup {
    let row = VenueType::ALL
        .into_iter()
        .map(|venue| InlineKeyboardButton::callback(venue.to_string(), venue.callback_data()))
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(vec![row])
}

/// Sends replies to one chat.
pub struct CommandFeedback {
    bot: Bot,
    chat_id: ChatId,
}

impl CommandFeedback {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    pub async fn send(&self, reply: Reply) -> ResponseResult<Message> {
        let request = self.bot.send_message(self.chat_id, reply.text);
        let request = match reply.kind {
            ReplyKind::Plain => request,
            ReplyKind::ForceReply => request.reply_markup(ForceReply::new()),
            ReplyKind::VenueChoices => request.reply_markup(venue_keyboard()),
        };
        request.await
    }
}
