use trailing_pe::{PeClient, PeError, app};

#[tokio::main]
async fn main() -> Result<(), PeError> {
    #[cfg(feature = "tracing-subscriber")]
    init_tracing();

    let client = PeClient::builder().build()?;
    let stdout = std::io::stdout();
    app::run(&client, &mut stdout.lock()).await
}

#[cfg(feature = "tracing-subscriber")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
