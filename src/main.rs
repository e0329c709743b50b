//! Sentinel Console - terminal client for agent logs and directives
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use sentinel_console::Args;
use sentinel_core::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    sentinel_console::run(args).await
}
