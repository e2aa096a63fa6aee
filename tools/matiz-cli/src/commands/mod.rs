//! CLI command implementations.

pub mod quote;
pub mod validate;
pub mod zones;

use clap::Args;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Treat configuration warnings as errors.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the zones command.
#[derive(Args)]
pub struct ZonesArgs {
    /// Only show the zones whose coverage includes this postal code.
    #[arg(short, long)]
    pub postal_code: Option<String>,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Postal code, as the customer would type it.
    pub postal_code: String,

    /// Cart subtotal as a decimal amount.
    pub subtotal: f64,
}
