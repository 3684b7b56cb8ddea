pub mod strategy;
pub use strategy::*;

pub mod entry;
pub use entry::*;

pub mod key;
pub use key::*;

pub mod memory;
pub use memory::*;

#[cfg(feature = "redis")]
pub mod remote;
#[cfg(feature = "redis")]
pub use remote::*;

pub mod store;
pub use store::*;
