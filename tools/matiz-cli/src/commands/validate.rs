//! Catalog validation command.

use anyhow::{bail, Result};
use serde_json::json;

use super::ValidateArgs;
use crate::context::Context;

/// Run the validate command.
///
/// Hard errors (duplicate IDs, negative amounts, unparseable files) have
/// already failed context loading by the time this runs, so what is left
/// to report are the load-time warnings: inverted ranges, malformed
/// bounds, and self-overlapping coverage.
pub fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    ctx.output.header("Catalog validation");
    ctx.output.debug(&format!("Loaded {}", ctx.source.display()));

    let warnings = ctx.catalog.warnings();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "source": ctx.source.display().to_string(),
            "zones": ctx.catalog.len(),
            "warnings": warnings,
        }));
    } else {
        ctx.output.success(&format!(
            "{}: {} zone(s) loaded",
            ctx.source.display(),
            ctx.catalog.len()
        ));

        if ctx.catalog.is_empty() {
            ctx.output
                .info("Catalog has no zones; every quote will use the fallback policy.");
        }

        for warning in warnings {
            ctx.output.warn(&warning.to_string());
        }

        if warnings.is_empty() {
            ctx.output.success("No configuration warnings.");
        }
    }

    if args.strict && !warnings.is_empty() {
        bail!("{} configuration warning(s) in strict mode", warnings.len());
    }

    Ok(())
}
