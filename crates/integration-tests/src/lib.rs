//! Integration tests for Naksu.
//!
//! # Running Tests
//!
//! ```bash
//! # Apply migrations, then start the server
//! cargo run -p naksu-cli -- migrate
//! cargo run -p naksu-storefront
//!
//! # Run integration tests (ignored by default)
//! cargo test -p naksu-integration-tests -- --ignored
//! ```
//!
//! The tests exercise the live HTTP surface and therefore need a running
//! server with a reachable database; the checkout test additionally needs a
//! working SMTP relay. `NAKSU_BASE_URL` points the suite at a non-default
//! server address.
//!
//! # Test Categories
//!
//! - `storefront_api` - Smoke and health endpoints
//! - `storefront_auth` - Signup and login
//! - `storefront_reviews` - Review submission and random listing
//! - `storefront_checkout` - Checkout validation and confirmation mail
