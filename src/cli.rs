use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::{Args, Parser, Subcommand};

use qualdecode::encoding::Encoding;
use qualdecode::io::OutputFormat;
use qualdecode::samples;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 qualdecode version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   convert FASTQ quality strings to base call error probabilities";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    flatten_help = true,
    styles = STYLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a quality string to per-base Phred scores and error probabilities
    #[command(arg_required_else_help = true)]
    Convert {
        #[command(flatten)]
        input: QualityInput,

        #[arg(short, long, value_enum, default_value = "phred33")]
        encoding: Encoding,

        /// output layout
        #[arg(short, long, value_enum, default_value = "tsv")]
        format: OutputFormat,

        /// the output file, or standard output if omitted
        #[arg(short)]
        output: Option<String>,
    },

    /// Report summary statistics for a quality string as JSON
    #[command(arg_required_else_help = true)]
    Stats {
        #[command(flatten)]
        input: QualityInput,

        #[arg(short, long, value_enum, default_value = "phred33")]
        encoding: Encoding,

        #[arg(short)]
        output: Option<String>,
    },

    /// Check a quality string against an encoding, reporting every invalid character.
    /// Exits with a non-zero status if the string is invalid.
    #[command(arg_required_else_help = true)]
    Validate {
        #[command(flatten)]
        input: QualityInput,

        #[arg(short, long, value_enum, default_value = "phred33")]
        encoding: Encoding,
    },

    /// Interpret a quality string under both Phred+33 and Phred+64, as JSON
    #[command(arg_required_else_help = true)]
    Compare {
        #[command(flatten)]
        input: QualityInput,

        #[arg(short)]
        output: Option<String>,
    },

    /// List the built-in sample quality strings
    Samples,
}

/// The quality string to operate on: given literally, or picked from the built-in samples.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct QualityInput {
    /// the quality string (the 4th line of a FASTQ record)
    #[arg(allow_hyphen_values = true)]
    pub quality: Option<String>,

    /// use a built-in sample instead, numbered as in `qualdecode samples`
    #[arg(long)]
    pub sample: Option<usize>,
}

impl QualityInput {
    pub fn resolve(&self) -> anyhow::Result<String> {
        match (&self.quality, self.sample) {
            (Some(q), _) => Ok(q.clone()),
            (None, Some(n)) => {
                let entry = samples::sample(n).ok_or_else(|| {
                    anyhow::anyhow!(
                        "No sample number {n}: choose between 1 and {}",
                        samples::SAMPLES.len()
                    )
                })?;
                info!("Using sample {n}: {}", entry.description);
                Ok(entry.quality_string.to_string())
            }
            (None, None) => anyhow::bail!("Either a quality string or --sample is required"),
        }
    }
}
