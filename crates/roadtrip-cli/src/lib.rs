//! Roadtrip CLI library.
//!
//! This crate provides the presentation layer for the roadtrip route engine:
//! output formatting and the interactive console session.

pub mod interactive;
pub mod output;
