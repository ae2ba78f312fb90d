use crate::{
    app::IncomingMessage, errors::HandlerResult, messenger::Messenger, quota::QuotaLedger, texts,
};

pub async fn reset(
    bot: &dyn Messenger,
    msg: &IncomingMessage,
    ledger: &QuotaLedger,
) -> HandlerResult {
    ledger.reset(msg.user_id).await;
    log::info!("Daily counter reset for user {}", msg.user_id.0);
    bot.send_message(msg.chat_id, texts::RESET_DONE, None).await
}
