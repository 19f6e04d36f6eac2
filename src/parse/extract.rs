//! Product listing extraction.
//!
//! A product is a `<div>` whose class contains `package `. Inside it:
//! - the title is an `<h3>` directly under one of the container's child `<div>`s
//! - the description is the `package-name` block
//! - the price is the first `<span>` of the `package-price` block, and a `<p>`
//!   in that block carries the discount of an annual plan

use log::debug;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::config::{
    ExtractionStrategy, CONTAINER_SELECTOR, DESCRIPTION_SELECTOR, DISCOUNT_TAG, PRICE_SELECTOR,
    PRICE_VALUE_TAG, TITLE_TAG,
};
use crate::error_handling::ScrapeError;
use crate::models::RawListing;
use crate::utils::parse_selector_unsafe;

static CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CONTAINER_SELECTOR, "product container"));
static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(DESCRIPTION_SELECTOR, "description block"));
static PRICE: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(PRICE_SELECTOR, "price block"));
static PRICE_VALUE: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(PRICE_VALUE_TAG, "price value"));
static DISCOUNT: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(DISCOUNT_TAG, "discount paragraph"));

/// Extracts one `RawListing` per product container.
///
/// # Errors
///
/// Returns `ScrapeError::Structure` when the document has no product container,
/// or when a listing cannot be assembled under the chosen strategy.
pub fn extract_listings(
    document: &Html,
    strategy: ExtractionStrategy,
) -> Result<Vec<RawListing>, ScrapeError> {
    let containers: Vec<ElementRef> = document.select(&CONTAINER).collect();
    if containers.is_empty() {
        return Err(ScrapeError::Structure(
            "no product containers found".to_string(),
        ));
    }
    debug!("Found {} product containers", containers.len());

    match strategy {
        ExtractionStrategy::PerContainer => containers
            .iter()
            .enumerate()
            .map(|(index, container)| extract_from_container(index, *container))
            .collect(),
        ExtractionStrategy::DocumentOrder => extract_by_document_order(document, &containers),
    }
}

/// Resolves every field of one listing relative to its own container.
///
/// A container must hold exactly one title, one description block and one
/// price block; anything else would drop or merge products.
fn extract_from_container(index: usize, container: ElementRef) -> Result<RawListing, ScrapeError> {
    let title = exactly_one(index, container_titles(container), "title heading")?;
    let description = exactly_one(index, container.select(&DESCRIPTION), "package-name block")?;
    let price_block = exactly_one(index, container.select(&PRICE), "package-price block")?;
    let (price_text, discount_text) = read_price_block(price_block).ok_or_else(|| {
        ScrapeError::Structure(format!("product container {} has no price value", index + 1))
    })?;

    Ok(RawListing {
        title: text_of(title),
        description: text_of(description),
        price_text,
        discount_text,
    })
}

/// Takes the single element of `found`, reporting zero or several as a structure error.
fn exactly_one<'a>(
    index: usize,
    found: impl Iterator<Item = ElementRef<'a>>,
    what: &str,
) -> Result<ElementRef<'a>, ScrapeError> {
    let found: Vec<ElementRef<'a>> = found.collect();
    match found.as_slice() {
        [single] => Ok(*single),
        [] => Err(ScrapeError::Structure(format!(
            "product container {} has no {what}",
            index + 1
        ))),
        several => Err(ScrapeError::Structure(format!(
            "product container {} has {} {what}s",
            index + 1,
            several.len()
        ))),
    }
}

/// Pairs three document-wide queries by position.
///
/// Any disagreement between the title, description and price counts is
/// reported instead of producing misaligned listings.
fn extract_by_document_order(
    document: &Html,
    containers: &[ElementRef],
) -> Result<Vec<RawListing>, ScrapeError> {
    let titles: Vec<ElementRef> = containers
        .iter()
        .flat_map(|container| container_titles(*container))
        .collect();
    let descriptions: Vec<ElementRef> = document.select(&DESCRIPTION).collect();
    let price_blocks: Vec<ElementRef> = document.select(&PRICE).collect();

    if titles.len() != descriptions.len() || titles.len() != price_blocks.len() {
        return Err(ScrapeError::Structure(format!(
            "found {} titles, {} descriptions and {} prices; cannot pair them by position",
            titles.len(),
            descriptions.len(),
            price_blocks.len()
        )));
    }

    titles
        .into_iter()
        .zip(descriptions)
        .zip(price_blocks)
        .enumerate()
        .map(|(index, ((title, description), price_block))| {
            let (price_text, discount_text) = read_price_block(price_block).ok_or_else(|| {
                ScrapeError::Structure(format!("price block {} has no price value", index + 1))
            })?;
            Ok(RawListing {
                title: text_of(title),
                description: text_of(description),
                price_text,
                discount_text,
            })
        })
        .collect()
}

/// Title headings of a container, in document order.
fn container_titles(container: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    child_elements(container, "div").flat_map(|block| child_elements(block, TITLE_TAG))
}

/// Direct element children of `parent` with the given tag name.
fn child_elements<'a>(
    parent: ElementRef<'a>,
    tag: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == tag)
}

/// Reads the price text and, for annual plans, the discount text.
///
/// Returns `None` when the block has no price value element.
fn read_price_block(price_block: ElementRef) -> Option<(String, Option<String>)> {
    let price = price_block.select(&PRICE_VALUE).next()?;
    let discount = price_block.select(&DISCOUNT).next().map(text_of);
    Some((text_of(price), discount))
}

fn text_of(element: ElementRef) -> String {
    element.text().collect()
}
