mod datemath;
mod formatter;
mod parser;

pub use datemath::DateMath;
pub use formatter::DateFormatter;
pub use parser::{DateTimeParser, ParseOptions};
