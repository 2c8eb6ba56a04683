//! Gestion administrative du personnel.
//!
//! The crate is layered so that record logic stays testable without any
//! terminal or filesystem:
//!
//! - the binary owns the interactive menu loop and all console I/O,
//! - [`api::GestadApi`] is the facade the loop calls into,
//! - [`commands`] holds one module per operation, each returning a
//!   [`commands::CmdResult`] describing what happened,
//! - [`store`] owns the record sequence and the JSON persistence behind a
//!   [`store::StorageBackend`] trait.
//!
//! Command modules never print and never prompt. They mutate the store,
//! trigger a save and report outcomes as data; rendering those outcomes is
//! the binary's job.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
