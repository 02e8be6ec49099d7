//! Password generation and output.

pub mod charset;
mod generate;
mod mode;
pub mod output;
mod secret;

pub use charset::validate_pools;
pub use generate::generate;
pub use mode::Mode;
pub use secret::Password;
