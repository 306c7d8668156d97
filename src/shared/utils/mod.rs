// Utility functions
// HTML scraping, markdown, timers, navigation

pub mod delay;
pub mod html_table;
pub mod markdown;
pub mod navigation;

pub use delay::sleep_ms;
pub use markdown::render_markdown;
pub use navigation::navigate;
