use teloxide::utils::command::BotCommands;

use crate::{links::contains_url, texts::WATCH_AD_BUTTON};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "Welcome message")]
    Start,
    #[command(description = "List of commands")]
    Help,
    #[command(description = "Usage info")]
    Info,
    #[command(description = "Reset daily download count")]
    Reset,
}

/// Which handler a text message goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Start,
    Help,
    Info,
    Reset,
    WatchAd,
    Link,
    Fallback,
}

impl From<Command> for Route {
    fn from(command: Command) -> Self {
        match command {
            Command::Start => Route::Start,
            Command::Help => Route::Help,
            Command::Info => Route::Info,
            Command::Reset => Route::Reset,
        }
    }
}

type Matcher = fn(&str, &str) -> Option<Route>;

/// Checked in order; the first hit wins and [`Route::Fallback`] catches the rest.
const MATCHERS: [Matcher; 3] = [match_command, match_button, match_link];

fn match_command(text: &str, bot_username: &str) -> Option<Route> {
    Command::parse(text, bot_username).ok().map(Route::from)
}

fn match_button(text: &str, _: &str) -> Option<Route> {
    (text == WATCH_AD_BUTTON).then_some(Route::WatchAd)
}

fn match_link(text: &str, _: &str) -> Option<Route> {
    contains_url(text).then_some(Route::Link)
}

impl Route {
    pub fn resolve(text: &str, bot_username: &str) -> Self {
        MATCHERS
            .iter()
            .find_map(|matcher| matcher(text, bot_username))
            .unwrap_or(Route::Fallback)
    }
}
