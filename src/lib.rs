//! # playerdb - persisted player registry for scripted game hosts
//!
//! playerdb keeps one list of player names in a single host key-value slot, lets
//! players manage it with chat commands, and registers players automatically as
//! they join.
//!
//! ## Features
//!
//! - **Single-slot persistence**: the whole registry is a JSON array in one slot,
//!   re-read on every operation and rewritten on every change.
//! - **Defensive loading**: an absent, mistyped or corrupt slot reads as an empty
//!   registry; failed writes are logged, never raised.
//! - **Chat commands**: `+help`, `+set`, `+get`, `+del`, `+list`, `+clear`, `+json`.
//! - **Auto-registration**: on a player's first spawn and on a startup sweep.
//! - **Serialized event loop**: host events are handled one at a time.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use playerdb::commands::CommandRouter;
//! use playerdb::host::{start_service, Actor, ConsoleOutbound, RegistryService};
//! use playerdb::registry::{RegistryStore, SledProperties};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = RegistryStore::new(SledProperties::open("./data/registry")?);
//!     let service = RegistryService::new(store, CommandRouter::default(), ConsoleOutbound);
//!     let (handle, join) = start_service(service);
//!
//!     handle.startup(vec![Actor::player("Alice")])?;
//!     handle.chat(Actor::player("Alice"), "+list").await?;
//!     handle.shutdown().await;
//!     join.await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`registry`] - slot persistence and the registry store
//! - [`commands`] - chat command parsing and dispatch
//! - [`hooks`] - auto-registration on join
//! - [`host`] - host events, outbound capability and the event loop
//! - [`config`] - TOML configuration
//! - [`logutil`] - log-safe rendering of player text

pub mod commands;
pub mod config;
pub mod hooks;
pub mod host;
pub mod logutil;
pub mod registry;
