mod base56;
mod error;
mod factory;
mod generator;
mod id;
#[cfg(feature = "serde")]
mod serde;
mod status;
mod time;

pub use crate::base56::*;
pub use crate::error::*;
pub use crate::factory::*;
pub use crate::generator::*;
pub use crate::id::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::status::*;
pub use crate::time::*;
