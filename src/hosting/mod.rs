pub mod config;
pub use config::*;

pub mod handlers;

pub mod server;
pub use server::*;

pub mod state;
pub use state::*;
