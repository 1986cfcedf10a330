//! Path-data mini-language
//!
//! Typed commands, a chainable builder that renders them, and a parser that
//! reads path-data text back into the same commands.

pub mod command;
mod data;
mod grammar;
pub mod lexer;

pub use command::{Mode, PathCommand, Point, Segment};
pub use data::PathData;
pub use grammar::parse;
