//! Ethfinex Trustless Client - Library Root
//!
//! Re-exports all modules for the CLI and integration tests.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
