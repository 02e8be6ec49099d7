mod context;
mod flags;
pub mod prompts;

use std::io;

use clap::Parser;

pub use context::Context;
pub use flags::CliFlags;

use crate::error::Result;

/// Parse arguments and run once against stdout.
pub fn run() -> Result<()> {
    let flags = CliFlags::parse();
    let mut ctx = Context::new(flags);
    let stdout = io::stdout();
    ctx.run(&mut stdout.lock())
}
