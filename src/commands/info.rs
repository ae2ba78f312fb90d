use crate::{
    app::IncomingMessage, errors::HandlerResult, messenger::Messenger, quota::QuotaLedger, texts,
};

/// Shows how many downloads the user has used today
pub async fn info(
    bot: &dyn Messenger,
    msg: &IncomingMessage,
    ledger: &QuotaLedger,
) -> HandlerResult {
    let quota = ledger.get(msg.user_id).await;
    log::debug!(
        "User {} has used {} of today's downloads (since {})",
        quota.user_id.0,
        quota.count,
        quota.last_reset
    );
    bot.send_message(msg.chat_id, &texts::usage(quota.count), None).await
}
