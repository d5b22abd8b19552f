//! Render command.

use anyhow::{Context as _, Result};
use shoe_ui::render_listing_grid;
use tracing::info;

use super::{resolve_now, RenderArgs};
use crate::context::Context;

pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let listings = ctx.load_listings(&args.listings)?;
    if listings.is_empty() {
        ctx.output.warn("No listings found; rendering an empty grid");
    }

    let now = resolve_now(args.now.as_deref())?;
    let window = ctx.config.release_window();
    info!(count = listings.len(), %now, window_days = window.days, "rendering cards");

    let grid = render_listing_grid(&listings, now, window).to_html();
    let html = if args.document {
        html_document(&grid)
    } else {
        grid
    };

    match args.out {
        Some(path) => {
            let full = ctx.resolve_path(&path);
            std::fs::write(&full, html)
                .with_context(|| format!("Failed to write {}", full.display()))?;
            ctx.output
                .success(&format!("Rendered {} cards to {}", listings.len(), full.display()));
        }
        None => println!("{}", html),
    }

    Ok(())
}

fn html_document(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Shoe listings</title>
<style>
.shoe-grid {{ display: flex; flex-wrap: wrap; gap: 32px; }}
.shoe-grid > .shoe-card {{ flex: 1 1 340px; }}
</style>
</head>
<body>
{body}
</body>
</html>"#,
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_document_wraps_body() {
        let doc = html_document(r#"<div class="shoe-grid"></div>"#);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<body>\n<div class=\"shoe-grid\"></div>\n</body>"));
        assert!(doc.contains(".shoe-grid { display: flex;"));
    }
}
