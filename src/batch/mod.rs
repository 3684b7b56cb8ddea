pub mod job;
pub use job::*;

pub mod orchestrator;
pub use orchestrator::*;

pub mod progress;
pub use progress::*;
