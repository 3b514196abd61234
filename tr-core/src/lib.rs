#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core data types for describing time ranges.
///
/// This module contains the value types exchanged by the range utilities: raw
/// and resolved ranges, catalog entries, interval descriptors and time zones.
/// None of them hold shared state; each call builds and returns fresh values.
pub mod models;

/// Interface traits for the collaborators the range utilities depend on.
///
/// Evaluating a date-math expression, formatting an instant and parsing a raw
/// range side are all delegated through these traits, so that the utilities in
/// this crate stay pure and the concrete calendar logic can be swapped out.
pub mod ports;

mod rangeutil;
pub use rangeutil::*;
