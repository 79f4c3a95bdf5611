//! Form host implementations

pub mod terminal;
