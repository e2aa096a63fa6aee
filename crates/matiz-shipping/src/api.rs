//! Wire contract for the quote endpoint.
//!
//! When the engine is deployed behind `POST /shipping/quote`, these are
//! the request and response bodies. "No coverage" is a valid business
//! answer, never a transport error: every request gets a `200` with a
//! complete response, so this module has no error type at all.

use crate::money::Money;
use crate::quote::{Quote, Quoter};
use serde::{Deserialize, Serialize};

/// Request body: the two inputs checkout has.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Raw, unvalidated postal-code text as the customer typed it.
    pub postal_code: String,
    /// Cart subtotal as a decimal amount, already summed upstream.
    pub subtotal: f64,
}

/// Response body: the quote, flattened to wire-friendly scalars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Matched zone ID, or `null` for a fallback quote.
    pub zone_id: Option<String>,
    /// Shipping cost as a decimal amount.
    pub cost: f64,
    /// Whether shipping is free.
    pub is_free: bool,
    /// Delivery window, displayed verbatim.
    pub estimated_days: String,
    /// Outcome explanation, displayed verbatim.
    pub reason: String,
}

impl QuoteResponse {
    /// Flatten a resolved quote into the wire form.
    pub fn from_quote(quote: &Quote) -> Self {
        Self {
            zone_id: quote.zone.as_ref().map(|z| z.as_str().to_string()),
            cost: quote.cost.to_decimal(),
            is_free: quote.is_free,
            estimated_days: quote.estimated_days.clone(),
            reason: quote.reason.clone(),
        }
    }
}

/// Serve one quote request. Total: always produces a response.
pub fn respond(quoter: &Quoter, request: &QuoteRequest) -> QuoteResponse {
    let currency = quoter.catalog().snapshot().currency();
    let subtotal = Money::from_decimal(request.subtotal, currency);
    QuoteResponse::from_quote(&quoter.quote(&request.postal_code, subtotal))
}
