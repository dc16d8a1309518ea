//! Flow type emission from Go type declarations.
//!
//! Runs over a declaration batch whose names are already collected into a
//! [`SymbolTable`](goflow_core::SymbolTable), so forward references resolve.

mod config;
mod emitter;
mod render;
mod resolve;
mod tag;


pub use config::Config;
pub use emitter::Emitter;
pub use tag::{TagInfo, parse_tag};
