//! # Station distance dialogue
//!
//! Conversation driver for the distance bot. A session moves through
//! `Start → StationsSelection → FinalStationSelection → End`:
//!
//! - `/start` sends the input instructions;
//! - a multi-line message provides the origin stations;
//! - a quick-reply choice picks the destination, which triggers the distance lookup;
//! - `/cancel` ends an active conversation without a lookup.
//!
//! [`dialogue`] holds one transition function per state; [`DistanceDialogueHandler`] plugs them into the
//! handler chain, keeps sessions in a [`SessionStore`] and sends replies through [`dbot_core::Bot`].

pub mod commands;
pub mod destination;
pub mod dialogue;
mod handler;
pub mod messages;
pub mod session;
pub mod state;

pub use commands::{is_bot_command, parse_command, Command};
pub use destination::Destination;
pub use dialogue::Transition;
pub use handler::DistanceDialogueHandler;
pub use session::{InMemorySessionStore, SessionKey, SessionStore};
pub use state::State;
