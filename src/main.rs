use anyhow::Context;
use bookhaven_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load Bookhaven settings")?;
    bookhaven_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        port = settings.server.port,
        "bookhaven bootstrap starting"
    );

    bookhaven_app::serve(&settings).await
}
