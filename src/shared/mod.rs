pub mod errors;
pub mod logging;
pub mod services;
pub mod utils;

// Dioxus hooks (client and server render)
pub mod hooks;
