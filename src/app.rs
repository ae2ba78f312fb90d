use std::sync::Arc;

use teloxide::types::{ChatId, Message, UserId};

use crate::{
    commands::{help, info, reset, start},
    errors::HandlerResult,
    handlers::{fallback, link_received, watch_ad},
    messenger::Messenger,
    quota::QuotaLedger,
    routes::Route,
    video::Extractor,
};

/// The parts of an inbound text message the handlers care about
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub text: String,
}

impl IncomingMessage {
    /// `None` for messages without text or without a sender
    pub fn from_message(msg: &Message) -> Option<Self> {
        let text = msg.text()?;
        let user = msg.from.as_ref()?;
        Some(Self {
            chat_id: msg.chat.id,
            user_id: user.id,
            text: text.to_string(),
        })
    }
}

/// Shared services injected into every handler
pub struct App {
    pub ledger: QuotaLedger,
    pub extractor: Arc<dyn Extractor>,
}

impl App {
    pub fn new(ledger: QuotaLedger, extractor: Arc<dyn Extractor>) -> Self {
        Self { ledger, extractor }
    }

    /// Routes one message and runs its handler.
    ///
    /// Handler errors are logged here and never returned, so one failing
    /// message cannot stop the update loop.
    pub async fn dispatch(&self, bot: &dyn Messenger, bot_username: &str, msg: IncomingMessage) {
        let route = Route::resolve(&msg.text, bot_username);
        log::debug!("chat {} user {} -> {:?}", msg.chat_id.0, msg.user_id.0, route);

        if let Err(e) = self.handle(bot, route, &msg).await {
            log::error!("{:?} handler failed in chat {}: {}", route, msg.chat_id.0, e);
        }
    }

    async fn handle(
        &self,
        bot: &dyn Messenger,
        route: Route,
        msg: &IncomingMessage,
    ) -> HandlerResult {
        match route {
            Route::Start => start(bot, msg).await,
            Route::Help => help(bot, msg).await,
            Route::Info => info(bot, msg, &self.ledger).await,
            Route::Reset => reset(bot, msg, &self.ledger).await,
            Route::WatchAd => watch_ad(bot, msg, &self.ledger).await,
            Route::Link => link_received(bot, msg, &self.ledger, self.extractor.as_ref()).await,
            Route::Fallback => fallback(bot, msg).await,
        }
    }
}
