use trange::{AppConfig, Cli};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() -> anyhow::Result<()> {
    // Results go to stdout, so events are written to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::import();
    let config = AppConfig::load(&cli)?;
    let output = cli.evaluate(&config)?;
    output.write(std::io::stdout().lock())
}
