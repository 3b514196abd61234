#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod calendar;
mod clock;
mod error;
mod formatter;
mod math;
mod parser;

pub use calendar::{MathUnit, WeekStart};
pub use clock::Clock;
pub use error::ParseError;
pub use formatter::Formatter;
pub use math::DateMathEvaluator;
pub use parser::Parser;
