use anyhow::Context;
use clap::Parser;

use woocsv_core::CatalogError;
use woocsv_session::Session;

mod config;
mod forms;

use config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    woocsv_observability::init(config.log_format);

    let mut session = Session::new();

    if let Some(path) = &config.import {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read product sheet {}", path.display()))?;
        session
            .import_file(&bytes)
            .with_context(|| format!("failed to import {}", path.display()))?;
    }

    let mut last_sku = None;
    for path in &config.forms {
        for form in forms::load(path, config.image_pattern.as_deref())? {
            session.add_product(&form);
            last_sku = Some(form.sku);
        }
    }

    let parent_sku = config.resolve_parent_sku(last_sku);

    let file = match session.export(&parent_sku) {
        Ok(file) => file,
        Err(CatalogError::EmptyExport) => {
            tracing::warn!("no products to export; add at least one form or import a sheet");
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to generate export"),
    };

    std::fs::write(&config.output, &file.bytes)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    tracing::info!(
        rows = file.rows,
        path = %config.output.display(),
        "product sheet written"
    );
    Ok(())
}
