mod app;
mod commands;
mod config;
mod errors;
mod handlers;
mod links;
mod messenger;
mod quota;
mod routes;
mod schema;
mod texts;
mod utils;
mod video;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use teloxide::{prelude::*, utils::command::BotCommands};

use crate::{
    app::App,
    config::Config,
    errors::BotResult,
    quota::QuotaLedger,
    routes::Command,
    schema::schema,
    utils::remove_request_root,
    video::YtDlp,
};

#[tokio::main]
async fn main() -> BotResult<()> {
    let _ = dotenvy::dotenv();
    pretty_env_logger::init();
    log::info!("Starting video downloader bot...");

    let config = Config::from_env().inspect_err(|e| log::error!("{}", e))?;
    log::debug!("Loaded {:?}", config);

    let bot = Bot::new(&config.token);
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        log::warn!("Could not register the command menu: {}", e);
    }

    let extractor = YtDlp::from_config(&config);
    log::info!("Downloads go to {}", extractor.output_dir().display());
    let request_root = extractor.request_root();
    let app = Arc::new(App::new(QuotaLedger::new(), Arc::new(extractor)));

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![app])
        .default_handler(|update| async move {
            log::debug!("Ignoring update {:?}", update.id);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    match remove_request_root(&request_root).await {
        Ok(true) => log::info!("Removed leftover downloads in {}", request_root.display()),
        Ok(false) => {}
        Err(e) => log::warn!("Failed to remove {}: {}", request_root.display(), e),
    }

    Ok(())
}
