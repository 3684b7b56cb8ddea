pub mod key;
pub use key::*;

pub mod node;
pub use node::*;

pub mod payoff;
pub use payoff::*;

pub mod policy;
pub use policy::*;

pub mod result;
pub use result::*;

pub mod cfr;
pub use cfr::*;

pub mod table;
pub use table::*;
