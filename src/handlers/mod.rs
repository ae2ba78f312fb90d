mod fallback;
mod link_received;
mod watch_ad;

pub use fallback::fallback;
pub use link_received::link_received;
pub use watch_ad::watch_ad;
