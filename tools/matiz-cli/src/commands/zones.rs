//! Zone listing command.

use anyhow::Result;
use matiz_shipping::prelude::*;

use super::ZonesArgs;
use crate::context::Context;

/// Run the zones command.
pub fn run(args: ZonesArgs, ctx: &Context) -> Result<()> {
    // Optional coverage filter: which zones would be considered for this
    // postal code, in the order the matcher walks them.
    let filter = match &args.postal_code {
        Some(raw) => match PostalCode::parse(raw) {
            Some(code) => Some(code),
            None => {
                ctx.output.warn(&format!(
                    "{:?} is not a valid postal code; it would take the fallback path",
                    raw
                ));
                None
            }
        },
        None => None,
    };

    let zones: Vec<&ShippingZone> = ctx
        .catalog
        .zones()
        .iter()
        .filter(|zone| filter.as_ref().map_or(true, |code| zone.covers(code)))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&zones);
        return Ok(());
    }

    ctx.output.header("Zones (priority order)");

    if zones.is_empty() {
        ctx.output.info("No zones to show.");
        return Ok(());
    }

    const WIDTHS: [usize; 5] = [4, 16, 20, 12, 10];
    ctx.output.table_row(
        &["PRIO", "ID", "NAME", "COST", "DELIVERY"],
        &WIDTHS,
    );

    for zone in &zones {
        let ranges = zone
            .ranges
            .iter()
            .map(|r| format!("{}-{}", r.start, r.end))
            .collect::<Vec<_>>()
            .join(", ");

        ctx.output.table_row(
            &[
                &zone.priority.to_string(),
                zone.id.as_str(),
                &zone.name,
                &zone.cost.display(),
                &zone.estimated_days,
            ],
            &WIDTHS,
        );
        ctx.output.debug(&format!("{}: {}", zone.id, ranges));
    }

    if let Some(code) = &filter {
        match ctx.catalog.match_postal_code(code) {
            Some(zone) => ctx
                .output
                .success(&format!("{} resolves to zone {}", code, zone.id)),
            None => ctx
                .output
                .info(&format!("{} is not covered; fallback policy applies", code)),
        }
    }

    Ok(())
}
