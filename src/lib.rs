pub mod api;
pub mod availability;
pub mod calendly;
pub mod cli;
pub mod core;
