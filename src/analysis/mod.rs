pub mod analyzer;
pub use analyzer::*;

pub mod odds;

pub mod style;
pub use style::*;
