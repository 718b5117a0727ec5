extern crate env_logger;
#[macro_use]
extern crate log;
use std::{
    fs::File,
    io::{prelude::*, stdout, BufWriter},
    path::Path,
};

use anyhow::{bail, Context, Result};
use clap::Parser;

use qualdecode::{compare_encodings, convert, io, samples, statistics, validate};

mod cli;

use cli::{Cli, Commands};

/// Creates a `BufWriter` for the given output option. This allows for an output file to be passed
/// or otherwise will default to using standard output.
///
/// If `output` is `Some`, it creates a file at the specified path and returns a `BufWriter` for it.
/// If `output` is `None`, it returns a `BufWriter` for the standard output.
fn get_writer(output: &Option<String>) -> Result<impl Write> {
    // get output as a BufWriter - equal to stdout if None
    let writer = BufWriter::new(match output {
        Some(ref x) => {
            let file = File::create(Path::new(x))
                .with_context(|| format!("Unable to create output file {x}"))?;
            Box::new(file) as Box<dyn Write + Send>
        }
        None => Box::new(stdout()) as Box<dyn Write + Send>,
    });
    Ok(writer)
}

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    debug!("qualdecode v{}", cli::VERSION);

    match &cli.command {
        Commands::Convert {
            input,
            encoding,
            format,
            output,
        } => {
            let quality = input.resolve()?;
            info!("Converting {} bases as {encoding}", quality.chars().count());

            let results = convert(&quality, *encoding)?;

            let mut writer = get_writer(output)?;
            io::write_results(&mut writer, &quality, *encoding, &results, *format)?;
            writer.flush()?;
        }
        Commands::Stats {
            input,
            encoding,
            output,
        } => {
            let quality = input.resolve()?;
            let stats = statistics(&quality, *encoding)?;

            let mut writer = get_writer(output)?;
            serde_json::to_writer_pretty(&mut writer, &stats)
                .context("Could not serialize statistics")?;
            writeln!(writer)?;
            writer.flush()?;
        }
        Commands::Validate { input, encoding } => {
            let quality = input.resolve()?;
            let report = validate(&quality, *encoding);

            let mut writer = get_writer(&None)?;
            io::write_report(&mut writer, *encoding, &report)?;
            writer.flush()?;

            if !report.is_valid {
                bail!(
                    "Quality string is not valid for {} ({} error(s))",
                    encoding,
                    report.errors.len()
                );
            }
        }
        Commands::Compare { input, output } => {
            let quality = input.resolve()?;
            let comparison = compare_encodings(&quality);

            for (offset, branch) in &comparison {
                info!(
                    "Phred+{offset}: {}",
                    if branch.valid { "valid" } else { "invalid" }
                );
            }

            let mut writer = get_writer(output)?;
            serde_json::to_writer_pretty(&mut writer, &comparison)
                .context("Could not serialize comparison")?;
            writeln!(writer)?;
            writer.flush()?;
        }
        Commands::Samples => {
            let mut writer = get_writer(&None)?;
            for (i, s) in samples::SAMPLES.iter().enumerate() {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}",
                    i + 1,
                    s.description,
                    s.quality_string,
                    s.notes
                )?;
            }
            writer.flush()?;
        }
    };
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
