//! Request handlers.

mod intake;
mod system;


pub use intake::*;
pub use system::*;
