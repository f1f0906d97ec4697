//! Version resolution layer
//!
//! This module turns a partial user request into the Resonite build to install,
//! consulting the resonite-version-monitor ledger only when it has to.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │────▶│   Ledger    │◀────│  Resolver   │
//! │   (HTTP)    │     │  (lookup)   │     │ (decision)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │ GameVersion │
//!                     │ (ordering)  │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`fetcher`]: Trait for retrieving the raw ledger document
//! - [`monitor`]: HTTP implementation against resonite-version-monitor
//! - [`ledger`]: Typed ledger document with exact and latest lookups
//! - [`game_version`]: Dotted numeric version parsing and ordering
//! - [`resolver`]: Request to (version, manifest) resolution
//! - [`error`]: Error types for ledger and resolution failures

pub mod error;
pub mod fetcher;
pub mod game_version;
pub mod ledger;
pub mod monitor;
pub mod resolver;
