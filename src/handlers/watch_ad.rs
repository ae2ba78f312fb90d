use crate::{
    app::IncomingMessage,
    errors::HandlerResult,
    messenger::Messenger,
    quota::{AD_BONUS, BonusOutcome, QuotaLedger},
    texts,
};

/// Triggered by the "Watch Ad" menu button, not by a slash command
pub async fn watch_ad(
    bot: &dyn Messenger,
    msg: &IncomingMessage,
    ledger: &QuotaLedger,
) -> HandlerResult {
    let reply = match ledger.grant_bonus(msg.user_id, AD_BONUS).await {
        BonusOutcome::LimitReached => texts::ad_limit_reached(),
        BonusOutcome::Granted { count } => {
            log::info!("User {} watched an ad, counter now {}", msg.user_id.0, count);
            texts::ad_bonus(AD_BONUS)
        }
    };
    bot.send_message(msg.chat_id, &reply, None).await
}
