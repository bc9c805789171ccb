//! Interactive driver for the inventory store.
//!
//! Everything here except `main.rs` is free of IO: a line goes in, output
//! lines come out, so sessions are testable without a console.

pub mod command;
pub mod sample;
pub mod session;
pub mod settings;

pub use command::{Command, parse_line};
pub use session::{Outcome, Session, SessionError};
pub use settings::Args;
