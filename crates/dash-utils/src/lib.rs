//! Shared utilities for stock-dash
//!
//! This crate provides common functionality used across the workspace,
//! including logging setup and environment variable helpers.

pub mod config;
pub mod logging;

pub use config::{EnvError, parse_var};
pub use logging::{LogFormat, init_tracing, init_tracing_with};
