//! relcon - Entry Point

// Force-link relcon-providers to ensure linkme registrations are included
extern crate relcon_providers;

use std::process::ExitCode;

use clap::Parser;
use relcon::cli::{Cli, run};

#[tokio::main]
async fn main() -> ExitCode {
    run(Cli::parse()).await
}
