use std::sync::Arc;

use teloxide::{dispatching::UpdateHandler, prelude::*, types::Me};

use crate::{
    app::{App, IncomingMessage},
    errors::{BotError, HandlerResult},
};

pub fn schema() -> UpdateHandler<BotError> {
    // Routing itself happens in `Route::resolve`; teloxide only hands over text messages
    Update::filter_message()
        .filter_map(|msg: Message| IncomingMessage::from_message(&msg))
        .endpoint(message_received)
}

async fn message_received(
    bot: Bot,
    me: Me,
    incoming: IncomingMessage,
    app: Arc<App>,
) -> HandlerResult {
    app.dispatch(&bot, me.username(), incoming).await;
    Ok(())
}
