#[macro_use]
extern crate slog;

pub mod gen;
pub mod graph;
pub mod reach;
