pub mod authors;
pub mod books;
pub mod categories;

use bookhaven_catalog::Catalog;
use bookhaven_kernel::{settings::CatalogSettings, ModuleRegistry};

/// Register every catalog module with the registry
pub fn register_all(
    registry: &mut ModuleRegistry,
    catalog: &'static Catalog,
    settings: &CatalogSettings,
) -> anyhow::Result<()> {
    registry.register(books::create_module(catalog, settings))?;
    registry.register(categories::create_module(catalog))?;
    registry.register(authors::create_module(catalog))?;
    Ok(())
}
