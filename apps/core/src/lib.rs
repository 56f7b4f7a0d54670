//! Keyword extraction service: text normalization, English/Russian
//! detection, YAKE ranking and keyword cleanup behind a small JSON API.

pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod telemetry;

#[cfg(test)]
mod tests;
