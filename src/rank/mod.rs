//! Listing normalization and ranking.
//!
//! Raw listings are converted to numbers, given an annual cost, and ordered by
//! that cost, most expensive first. The annual cost never leaves this module:
//! `rank` returns plain `Listing`s.

use log::debug;

use crate::config::PriceFallback;
use crate::error_handling::ScrapeError;
use crate::models::{Listing, PlanKind, RankedListing, RawListing};
use crate::parse::parse_price;

/// Converts one raw listing into a ranked listing.
///
/// A discount paragraph marks an annual plan, whose price is already the annual
/// cost. Without one the plan is monthly: discount is 0 and the annual cost is
/// twelve times the price.
///
/// # Errors
///
/// Propagates `ScrapeError::Parse` from the price parser.
pub fn normalize(raw: RawListing, fallback: PriceFallback) -> Result<RankedListing, ScrapeError> {
    let price = parse_price(&raw.price_text, fallback)?;
    let (plan, discount) = match raw.discount_text.as_deref() {
        Some(text) => (PlanKind::Annual, parse_price(text, fallback)?),
        None => (PlanKind::Monthly, 0.0),
    };
    let annual_cost = price * plan.periods_per_year();

    debug!(
        "Normalized '{}': {:?} plan, price {price}, discount {discount}, annual cost {annual_cost}",
        raw.title, plan
    );

    Ok(RankedListing {
        listing: Listing {
            title: raw.title,
            description: raw.description,
            price,
            discount,
        },
        plan,
        annual_cost,
    })
}

/// Orders listings by annual cost, highest first.
///
/// The sort is stable: listings with equal annual cost keep their input order.
pub fn sort_by_annual_cost(mut listings: Vec<RankedListing>) -> Vec<RankedListing> {
    listings.sort_by(|a, b| b.annual_cost.total_cmp(&a.annual_cost));
    listings
}

/// Normalizes, sorts and strips the ranking figure from every listing.
///
/// # Errors
///
/// Returns the first `ScrapeError::Parse` encountered; no partial result is produced.
pub fn rank(raw: Vec<RawListing>, fallback: PriceFallback) -> Result<Vec<Listing>, ScrapeError> {
    let ranked = raw
        .into_iter()
        .map(|listing| normalize(listing, fallback))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(sort_by_annual_cost(ranked)
        .into_iter()
        .map(Listing::from)
        .collect())
}
