mod config;
pub use config::{AppConfig, SlotFormat};
