// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands the work to
// Layer 2 (application). Nothing is printed on success unless
// --summary is given; diagnostics go through tracing (stderr).
//
// Reference: Rust Book §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::SplitArgs;

use crate::application::split_use_case::SplitUseCase;
use crate::domain::bucket::Bucket;

/// The main CLI struct
#[derive(Parser, Debug)]
#[command(
    name = "line-split",
    version,
    about = "Split file (line by line) into train, evaluation and cross validation data",
    allow_negative_numbers = true
)]
pub struct Cli {
    #[command(flatten)]
    pub args: SplitArgs,
}

impl Cli {
    /// Run the split described by the parsed arguments.
    pub fn run(self) -> Result<()> {
        let args = self.args;

        let use_case = SplitUseCase::new((&args).into()).inspect_err(|e| {
            if e.is_configuration() {
                tracing::error!("Rejected split proportions, no files were opened");
            }
        })?;
        let report   = use_case.execute()?;

        if let Some(path) = &args.report {
            use_case.save_report(path, &report)?;
        }

        if args.summary {
            for bucket in Bucket::ALL {
                let tally = report.tally(bucket);
                println!("{:<5} {:>10} lines {:>12} bytes", bucket, tally.lines, tally.bytes);
            }
        }

        Ok(())
    }
}
