//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (HTTP, Ethereum signing, contract calls).
//!
//! Adapter categories:
//! - `api`: Ethfinex Trustless REST API client
//! - `chain`: wallet, 0x exchange binding and token wrappers via alloy-rs

pub mod api;
pub mod chain;
