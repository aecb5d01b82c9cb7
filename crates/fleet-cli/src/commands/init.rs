use std::path::{Path, PathBuf};

use tracing::info;

use fleet_core::storage::VehicleStore;
use fleet_core::SqliteVehicleStore;

use crate::app::{resolve_documents_dir, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, FleetConfig};
use crate::errors::CliError;
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, blank_line, hint, print, Badge, OutputMode};

fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = ctx.config_path()?.to_path_buf();
    if config_path.exists() && !args.force {
        return Err(CliError::conflict(
            format!("Config already exists at {}", config_path.display()),
            "Hint: Use --force to overwrite it.",
        )
        .into());
    }

    let db_path = match args.path {
        Some(ref path) => absolute(path)?,
        None => absolute(&ctx.db_path()?)?,
    };
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
        })?;
    }

    let mut store = SqliteVehicleStore::open(&db_path)?;
    let count = store.count()?;
    store.close();

    let documents_override = match args.documents_dir {
        Some(ref dir) => Some(absolute(dir)?),
        None => None,
    };
    let config = FleetConfig::new(&db_path, documents_override.as_deref());
    let documents_dir = resolve_documents_dir(&config, &db_path);
    std::fs::create_dir_all(&documents_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create documents directory {}: {}",
            documents_dir.display(),
            e
        )
    })?;
    write_config(&config_path, &config)?;
    info!(db = %db_path.display(), config = %config_path.display(), "initialized");

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui_context(false, None);
    match ui.mode {
        OutputMode::Pretty => {
            print(&ui, &badge(&ui, Badge::Ok, "Fleet database ready"));
            let context = format!(
                "{}  \u{00B7}  {} vehicles",
                db_path.display(),
                count
            );
            println!("{}", styled(&context, styles::dim(), ui.color));
            println!(
                "{}",
                styled(
                    &format!("Documents: {}", documents_dir.display()),
                    styles::dim(),
                    ui.color
                )
            );
            blank_line(&ui);
            print(&ui, &hint(&ui, "fleet add  \u{00B7}  fleet list"));
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("db_path={}", db_path.display());
            println!("config_path={}", config_path.display());
            println!("documents_dir={}", documents_dir.display());
            println!("count={}", count);
        }
    }
    Ok(())
}
