//! # Command Router
//!
//! Chat-driven access to the registry.
//!
//! - [`parser`] - trigger detection and verb/argument splitting into [`Command`]
//! - [`router`] - execution of a [`Command`] against a
//!   [`RegistryStore`](crate::registry::RegistryStore), producing a [`Response`]
//!
//! | line            | effect                          |
//! |-----------------|---------------------------------|
//! | `+help`         | usage text                      |
//! | `+set <name>`   | add if absent                   |
//! | `+get <name>`   | membership check                |
//! | `+del <name>`   | remove if present               |
//! | `+list`         | comma-joined names              |
//! | `+clear`        | empty the registry              |
//! | `+json`         | pretty JSON to the console      |

pub mod parser;
pub mod router;

pub use parser::{Command, CommandParser};
pub use router::{CommandRouter, Response};
