mod alloc;
mod cli;
mod engine;
mod harness;
mod metrics;
mod model;
mod recorder;
mod storage;
mod text_summary;

use anyhow::Result;
use clap::Parser;

// Every heap allocation in the process is tracked, so the recorder can
// sample current/peak usage per sort step.
#[global_allocator]
static ALLOCATOR: alloc::TrackingAllocator = alloc::TrackingAllocator;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)
}
