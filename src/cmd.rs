use clap::Parser;
use for_each_in_place::demo::Variant;
use for_each_in_place::render::OutputFormat;
use tracing::Level;

#[derive(Parser, Debug)]
#[clap(version, about = "Demonstrates generic in-place transforms over sequences")]
pub struct Args {
    /// How each transformed sequence is printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Run every integer step through one transform instead of the default mix.
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Diagnostics verbosity, written to stderr.
    #[arg(long, env = "FOR_EACH_LOG", default_value = "warn")]
    pub log_level: Level,

    /// Emit diagnostics as JSON.
    #[arg(long)]
    pub json_logs: bool,
}
