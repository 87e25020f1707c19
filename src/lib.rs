//! Fleet Rental Library
//!
//! Vehicle rental business core: a fleet of heterogeneous vehicles, the
//! rental ledger, and the rent/return transaction engine with per-variant
//! cost rules and an append-only activity log.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod output;
pub mod store;
