use teloxide::types::{KeyboardButton, KeyboardMarkup};

use crate::quota::DAILY_LIMIT;

pub const START: &str = "👋 Welcome to Anything For You Bot!

Send any supported video link (YouTube, Instagram, Facebook, etc.)

💡 You get 4 downloads per day for free. 📺 Watch ads to unlock 6 more (max 10/day).

Type /help to see all commands.";

// /language and /watch_ad are advertised here but have no command handler;
// the bonus is only granted through the menu button.
pub const HELP: &str = "🛠 Bot Commands:
/start - Welcome message
/help - List of commands
/info - Usage info
/reset - Reset daily download count
/language - Change bot language
/watch_ad - Watch ad to get 2 more downloads
";

pub const RESET_DONE: &str = "✅ Your daily limit has been reset.";
pub const UNSUPPORTED_LINK: &str = "❌ Unsupported link. Try YouTube, Insta, FB, etc.";
pub const DOWNLOADING: &str = "⏬ Downloading, please wait...";
pub const DOWNLOAD_FAILED: &str = "❌ Failed to download video.";
pub const SEND_FAILED: &str = "❌ Error sending video.";
pub const FALLBACK: &str = "❓ Send a valid link or use /help for guidance.";

pub const DOWNLOAD_BUTTON: &str = "📥 Download";
pub const WATCH_AD_BUTTON: &str = "🎦 Watch Ad";
pub const INFO_BUTTON: &str = "ℹ️ Info";
pub const HELP_BUTTON: &str = "❓ Help";

pub fn usage(count: u32) -> String {
    format!("📊 Downloads today: {}/{}", count, DAILY_LIMIT)
}

pub fn ad_bonus(amount: u32) -> String {
    format!("🎉 You earned {} extra downloads! Keep going!", amount)
}

pub fn ad_limit_reached() -> String {
    format!("🚫 Daily limit reached ({0}/{0}).", DAILY_LIMIT)
}

pub fn download_limit_reached() -> String {
    format!("🚫 You've reached your {} download limit today.", DAILY_LIMIT)
}

pub fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(DOWNLOAD_BUTTON),
            KeyboardButton::new(WATCH_AD_BUTTON),
        ],
        vec![
            KeyboardButton::new(INFO_BUTTON),
            KeyboardButton::new(HELP_BUTTON),
        ],
    ])
    .resize_keyboard()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_messages_mention_the_limit() {
        assert_eq!(usage(3), "📊 Downloads today: 3/10");
        assert_eq!(ad_limit_reached(), "🚫 Daily limit reached (10/10).");
        assert_eq!(
            download_limit_reached(),
            "🚫 You've reached your 10 download limit today."
        );
        assert_eq!(ad_bonus(2), "🎉 You earned 2 extra downloads! Keep going!");
    }

    #[test]
    fn menu_has_two_rows_of_two() {
        let menu = main_menu();
        assert_eq!(menu.keyboard.len(), 2);
        assert!(menu.keyboard.iter().all(|row| row.len() == 2));
        assert_eq!(menu.keyboard[0][1].text, WATCH_AD_BUTTON);
    }
}
