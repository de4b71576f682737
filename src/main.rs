use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    debug!(?args, "knightpath starting");
    let report = knightpath_cli::run(args.as_slice())?;
    println!("{report}");
    Ok(())
}
