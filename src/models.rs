//! Listing data types shared by the extractor, ranker and exporters.

use serde::Serialize;

/// One product section as found in the document, before any numeric parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawListing {
    /// Text of the container's `<h3>` heading, whitespace as-is
    pub title: String,
    /// Text of the `package-name` block
    pub description: String,
    /// Text of the first `<span>` inside the `package-price` block
    pub price_text: String,
    /// Text of the first `<p>` inside the `package-price` block, present only for annual plans
    pub discount_text: Option<String>,
}

/// Billing period inferred from the price block's markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind {
    /// No discount paragraph: price is per month
    Monthly,
    /// Discount paragraph present: price is per year
    Annual,
}

impl PlanKind {
    /// Number of billing periods in a year.
    pub fn periods_per_year(self) -> f64 {
        match self {
            PlanKind::Monthly => 12.0,
            PlanKind::Annual => 1.0,
        }
    }
}

/// Normalized listing, the only record exposed to callers.
///
/// Field declaration order is the serialized field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    /// Package title
    pub title: String,
    /// Package description
    pub description: String,
    /// Price as displayed (per month or per year depending on the plan)
    pub price: f64,
    /// Advertised saving, 0 for monthly plans
    pub discount: f64,
}

/// A listing paired with the figure it is ranked by.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedListing {
    /// The public record
    pub listing: Listing,
    /// Billing period the price refers to
    pub plan: PlanKind,
    /// Cost over twelve months, used only for ordering
    pub annual_cost: f64,
}

impl From<RankedListing> for Listing {
    fn from(ranked: RankedListing) -> Self {
        ranked.listing
    }
}
