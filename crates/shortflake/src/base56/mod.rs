mod encode;
mod interface;
mod token;

pub use encode::*;
pub use interface::*;
pub use token::*;
