pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod spec;
pub mod suggestions;
