//! Quote command.

use anyhow::{bail, Result};
use matiz_shipping::api::{self, QuoteRequest};

use super::QuoteArgs;
use crate::context::Context;

/// Run the quote command.
pub fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    // Checkout guarantees a non-negative subtotal; shell input does not.
    if args.subtotal < 0.0 {
        bail!("subtotal must be non-negative, got {}", args.subtotal);
    }

    let quoter = ctx.quoter();
    let request = QuoteRequest {
        postal_code: args.postal_code,
        subtotal: args.subtotal,
    };
    let response = api::respond(&quoter, &request);

    if ctx.output.is_json() {
        ctx.output.json(&response);
        return Ok(());
    }

    ctx.output.header("Shipping quote");
    ctx.output
        .kv("postal code", &format!("{:?}", request.postal_code));
    ctx.output.kv(
        "zone",
        response.zone_id.as_deref().unwrap_or("(no coverage)"),
    );
    ctx.output.kv("cost", &format!("{:.2}", response.cost));
    ctx.output.kv("free", if response.is_free { "yes" } else { "no" });
    ctx.output.kv("delivery", &response.estimated_days);
    if !response.reason.is_empty() {
        ctx.output.kv("reason", &response.reason);
    }

    Ok(())
}
