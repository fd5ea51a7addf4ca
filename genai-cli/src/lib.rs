//! Command-line client for Gemini text completion.
pub mod config;
pub mod providers;
