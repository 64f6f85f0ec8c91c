use clap::Parser;
use minefield_datagen::config::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_target(false)
        .init();
    log::debug!("args: {:?}", args);

    minefield_datagen::run(&args)
}
