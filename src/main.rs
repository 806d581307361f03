mod cmd;

use clap::Parser;
use cmd::Args;
use for_each_in_place::Result;
use for_each_in_place::demo::Demo;
use for_each_in_place::tracer::{setup_json_tracing, setup_simple_tracing};

fn main() -> Result<()> {
    let args = Args::parse();
    if args.json_logs {
        setup_json_tracing(args.log_level)?;
    } else {
        setup_simple_tracing(args.log_level)?;
    }

    let stdout = std::io::stdout();
    Demo::new(args.format, args.variant).run(&mut stdout.lock())?;

    Ok(())
}
