//! CLI entry point for exemplar-based texture synthesis

use clap::Parser;
use texweave::io::cli::{Cli, SynthesisJob};

fn main() -> texweave::Result<()> {
    let cli = Cli::parse();
    let mut job = SynthesisJob::new(cli);
    job.run()
}
