//! Bookhaven application: catalog modules mounted on the HTTP kernel.
#![recursion_limit = "256"]

pub mod modules;

use anyhow::Context;
use bookhaven_catalog::Catalog;
use bookhaven_kernel::{settings::Settings, InitCtx, ModuleRegistry};

/// Registry holding every module, all backed by the seeded catalog
pub fn build_registry(settings: &Settings) -> anyhow::Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, Catalog::seeded(), &settings.catalog)
        .context("failed to register modules")?;
    Ok(registry)
}

/// Run the module lifecycle around the HTTP server
pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let registry = build_registry(settings)?;
    let ctx = InitCtx { settings };

    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    let served = bookhaven_http::start_server(&registry, settings).await;

    registry.stop_modules().await?;
    served
}
