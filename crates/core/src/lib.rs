//! Naksu Core - Shared types library.
//!
//! This crate provides the validated domain types the `storefront` backend
//! is built on: emails, person names, and money amounts.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for validated emails, names, and money

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
