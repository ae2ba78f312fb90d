use crate::{
    app::IncomingMessage,
    errors::HandlerResult,
    links::Platform,
    messenger::Messenger,
    quota::QuotaLedger,
    texts,
    video::Extractor,
};

pub async fn link_received(
    bot: &dyn Messenger,
    msg: &IncomingMessage,
    ledger: &QuotaLedger,
    extractor: &dyn Extractor,
) -> HandlerResult {
    let quota = ledger.get(msg.user_id).await;
    if quota.is_exhausted() {
        bot.send_message(msg.chat_id, &texts::download_limit_reached(), None).await?;
        return Ok(());
    }

    let url = msg.text.trim();
    let Some(platform) = Platform::detect(url) else {
        log::info!("Unsupported link from user {}: {}", msg.user_id.0, url);
        bot.send_message(msg.chat_id, texts::UNSUPPORTED_LINK, None).await?;
        return Ok(());
    };

    log::info!("User {} requested a {} download: {}", msg.user_id.0, platform, url);
    bot.send_message(msg.chat_id, texts::DOWNLOADING, None).await?;

    // The extractor already logged the cause
    let Ok(file) = extractor.download(url).await else {
        bot.send_message(msg.chat_id, texts::DOWNLOAD_FAILED, None).await?;
        return Ok(());
    };

    log::info!(
        "Sending \"{}\" ({}) to chat {}",
        file.title().unwrap_or("untitled"),
        file.ext().unwrap_or("unknown format"),
        msg.chat_id.0
    );
    if let Err(e) = bot.send_video(msg.chat_id, file.path()).await {
        log::error!("Send error for {}: {}", file.path().display(), e);
        bot.send_message(msg.chat_id, texts::SEND_FAILED, None).await?;
        return Ok(());
    }

    let count = ledger.increment(msg.user_id).await;
    log::info!("User {} has used {} downloads today", msg.user_id.0, count);

    let path = file.path().to_path_buf();
    if let Err(e) = file.remove().await {
        log::warn!("Failed to remove {}: {}", path.display(), e);
    }

    Ok(())
}
