pub mod error;
pub mod payload;
pub mod revision;
pub mod session;
pub mod viewport;
pub mod presets;
pub mod voice;
pub mod gateway;
pub mod config;
