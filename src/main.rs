use anyhow::{Context, Result};
use paperblossoms_db::{cli::Cli, load_database, LogUi};
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "load failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Cli::parse_args().into_config();
    let start = Instant::now();

    let mut ui = LogUi::new();
    let summary = load_database(&config, &mut ui).with_context(|| {
        format!(
            "failed to build {} from {}",
            config.output.display(),
            config.json_dir().display()
        )
    })?;

    info!(
        output = %config.output.display(),
        categories = summary.categories,
        tables = summary.tables.len(),
        rows = summary.total_rows(),
        "created database in {:.1}s",
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
