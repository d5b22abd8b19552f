//! Config command.

use anyhow::{bail, Result};

use super::{ConfigAction, ConfigArgs};
use crate::config::{generate_default_config, CardConfig};
use crate::context::Context;

pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.action {
        ConfigAction::Show => show(ctx),
        ConfigAction::Init { path, force } => init(ctx, &path, force),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration");
    ctx.output.kv(
        "release.new_release_days",
        &ctx.config.release.new_release_days.to_string(),
    );
    ctx.output.kv("catalog.currency", &ctx.config.catalog.currency);
    Ok(())
}

fn init(ctx: &Context, path: &str, force: bool) -> Result<()> {
    let full = ctx.resolve_path(path);
    if full.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", full.display());
    }

    if path.ends_with(".json") {
        CardConfig::default().save(&full.to_string_lossy())?;
    } else {
        std::fs::write(&full, generate_default_config())?;
    }

    ctx.output.success(&format!("Wrote {}", full.display()));
    Ok(())
}
