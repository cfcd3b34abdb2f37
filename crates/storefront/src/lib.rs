//! Naksu Storefront library.
//!
//! This crate provides the storefront backend as a library, allowing it to
//! be tested and reused. The `naksu-storefront` binary in `main.rs` is a
//! thin wrapper that wires configuration, the database pool, and the SMTP
//! transport into the router defined here.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
