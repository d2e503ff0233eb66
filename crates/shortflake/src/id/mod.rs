mod interface;
mod short_key;

pub use interface::*;
pub use short_key::*;
