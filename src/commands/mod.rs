mod help;
mod info;
mod reset;
mod start;

pub use help::help;
pub use info::info;
pub use reset::reset;
pub use start::start;
