use aura_storefront::{catalog::CatalogStore, config::AppConfig};

/// Resets the configured catalog storage to the built-in sample products.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    if config.storage_dir.is_none() {
        anyhow::bail!("CATALOG_STORAGE_DIR is not set; nothing to seed");
    }

    let mut catalog = CatalogStore::open(config.open_slot()?);
    catalog.restore_seed();
    if let Some(message) = catalog.take_storage_error() {
        anyhow::bail!("seeding failed: {message}");
    }

    println!("Seeded {} products", catalog.list_all().len());
    Ok(())
}
