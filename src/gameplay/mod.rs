pub mod action;
pub use action::*;

pub mod edge;
pub use edge::*;

pub mod record;
pub use record::*;

pub mod seat;
pub use seat::*;

pub mod state;
pub use state::*;
