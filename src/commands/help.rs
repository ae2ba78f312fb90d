use crate::{app::IncomingMessage, errors::HandlerResult, messenger::Messenger, texts};

pub async fn help(bot: &dyn Messenger, msg: &IncomingMessage) -> HandlerResult {
    bot.send_message(msg.chat_id, texts::HELP, None).await
}
