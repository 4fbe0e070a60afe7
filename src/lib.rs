//! Shopseed: Storefront Installation Bootstrap
//!
//! Populates an empty storefront data store in a fixed stage order: early
//! required rows first, then reference data and settings, then optional sample
//! catalog and content. Later stages find earlier rows by natural key, and an
//! installation profile may rewrite each kind's rows before they are persisted.

pub mod assets;
pub mod cli;
pub mod config;
pub mod culture;
pub mod entity;
pub mod error;
pub mod generate;
pub mod hooks;
pub mod install;
pub mod logging;
pub mod resolve;
pub mod store;
pub mod types;
