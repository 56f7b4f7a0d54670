//! Test Module
//!
//! Cross-component test suite for the keyword API.
//!
//! ## Test Categories
//! - `brain_tests`: Normalization, language detection, cleaning, analyzer composition
//! - `server_tests`: HTTP endpoints over a real socket
//! - `config_tests`: Environment-driven configuration

pub mod config_tests;
