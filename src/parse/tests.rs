// Parse module tests.

use super::*;
use crate::config::{ExtractionStrategy, ParseMode, PriceFallback};
use crate::error_handling::ScrapeError;
use scraper::Html;

/// Page shaped like the live product page: containers hold a header block
/// with the title and a feature list holding description and price.
const PRODUCT_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Packages</title></head><body>
<div class="pricing-table">
  <div class="package featured-right">
    <div class="header dark-bg"><h3>Basic: 500MB Data - 12 Months</h3></div>
    <div class="package-features">
      <ul>
        <li><div class="package-name">The basic starter subscription</div></li>
        <li><div class="package-description">Up to 500MB of data per month</div></li>
        <li><div class="package-price"><span class="price-big">£5.99</span><br>(inc. VAT)<br>Per Month</div></li>
      </ul>
    </div>
  </div>
  <div class="package featured center">
    <div class="header dark-bg"><h3>Optimum: 24GB Data - 1 Year</h3></div>
    <div class="package-features">
      <ul>
        <li><div class="package-name">The optimum subscription</div></li>
        <li><div class="package-price"><span class="price-big">£174.00</span><br>(inc. VAT)<br>Per Year
          <p style="color: red">Save £17.90 on the monthly price</p></div></li>
      </ul>
    </div>
  </div>
</div>
</body></html>"#;

fn doc(html: &str) -> Html {
    Html::parse_document(html)
}

#[test]
fn test_parse_price_plain() {
    assert_eq!(parse_price("£19.99", PriceFallback::Error).unwrap(), 19.99);
}

#[test]
fn test_parse_price_save_prefix() {
    assert_eq!(parse_price("Save £5.00", PriceFallback::Error).unwrap(), 5.0);
}

#[test]
fn test_parse_price_zero() {
    assert_eq!(parse_price("£0", PriceFallback::Error).unwrap(), 0.0);
}

#[test]
fn test_parse_price_ignores_trailing_text() {
    assert_eq!(
        parse_price("Save £5.86 on the monthly price", PriceFallback::Error).unwrap(),
        5.86
    );
}

#[test]
fn test_parse_price_mojibake_symbol() {
    // UTF-8 pound sign decoded as Latin-1
    assert_eq!(parse_price("Â£16.58", PriceFallback::Error).unwrap(), 16.58);
}

#[test]
fn test_parse_price_leading_whitespace() {
    assert_eq!(parse_price("  £7.50", PriceFallback::Error).unwrap(), 7.5);
}

#[test]
fn test_parse_price_non_numeric_is_error() {
    let err = parse_price("Call for pricing", PriceFallback::Error).unwrap_err();
    match err {
        ScrapeError::Parse { text } => assert_eq!(text, "Call for pricing"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_parse_price_empty_is_error() {
    assert!(matches!(
        parse_price("£", PriceFallback::Error),
        Err(ScrapeError::Parse { .. })
    ));
}

#[test]
fn test_parse_price_zero_fallback() {
    assert_eq!(parse_price("Free!", PriceFallback::Zero).unwrap(), 0.0);
}

#[test]
fn test_parse_price_thousands_separator_stops_at_comma() {
    // Separators are not understood; only the leading digits are read
    assert_eq!(parse_price("£1,200.00", PriceFallback::Error).unwrap(), 1.0);
}

#[test]
fn test_parse_document_lenient_accepts_malformed() {
    let result = parse_document(
        "<div class='package x'><h3>Unclosed</div></span>",
        ParseMode::Lenient,
    );
    assert!(result.is_ok());
}

#[test]
fn test_parse_document_strict_rejects_malformed() {
    let result = parse_document(
        "<!DOCTYPE html><html><body><div></span></div></body></html>",
        ParseMode::Strict,
    );
    assert!(matches!(result, Err(ScrapeError::Markup(_))));
}

#[test]
fn test_parse_document_strict_accepts_well_formed() {
    let result = parse_document(
        "<!DOCTYPE html><html><head><title>t</title></head><body><p>ok</p></body></html>",
        ParseMode::Strict,
    );
    assert!(result.is_ok());
}

#[test]
fn test_extract_per_container() {
    let listings =
        extract_listings(&doc(PRODUCT_PAGE), ExtractionStrategy::PerContainer).unwrap();
    assert_eq!(listings.len(), 2);

    assert_eq!(listings[0].title, "Basic: 500MB Data - 12 Months");
    assert_eq!(listings[0].description, "The basic starter subscription");
    assert_eq!(listings[0].price_text, "£5.99");
    assert_eq!(listings[0].discount_text, None);

    assert_eq!(listings[1].title, "Optimum: 24GB Data - 1 Year");
    assert_eq!(listings[1].description, "The optimum subscription");
    assert_eq!(listings[1].price_text, "£174.00");
    assert_eq!(
        listings[1].discount_text.as_deref(),
        Some("Save £17.90 on the monthly price")
    );
}

#[test]
fn test_extract_document_order_matches_per_container() {
    let document = doc(PRODUCT_PAGE);
    let by_container = extract_listings(&document, ExtractionStrategy::PerContainer).unwrap();
    let by_order = extract_listings(&document, ExtractionStrategy::DocumentOrder).unwrap();
    assert_eq!(by_container, by_order);
}

#[test]
fn test_extract_no_containers_is_structure_error() {
    let html = r#"<html><body><div class="package-name">Orphan</div></body></html>"#;
    for strategy in [
        ExtractionStrategy::PerContainer,
        ExtractionStrategy::DocumentOrder,
    ] {
        match extract_listings(&doc(html), strategy) {
            Err(ScrapeError::Structure(msg)) => {
                assert_eq!(msg, "no product containers found")
            }
            other => panic!("expected structure error, got {other:?}"),
        }
    }
}

#[test]
fn test_extract_title_whitespace_preserved() {
    let html = r#"<div class="package a"><div><h3>  Spaced  </h3></div>
        <div class="package-name">d</div>
        <div class="package-price"><span>£1</span></div></div>"#;
    let listings = extract_listings(&doc(html), ExtractionStrategy::PerContainer).unwrap();
    assert_eq!(listings[0].title, "  Spaced  ");
}

#[test]
fn test_extract_title_must_be_under_child_div() {
    // An <h3> directly inside the container is not a title
    let html = r#"<div class="package a"><h3>Loose</h3>
        <div class="package-name">d</div>
        <div class="package-price"><span>£1</span></div></div>"#;
    match extract_listings(&doc(html), ExtractionStrategy::PerContainer) {
        Err(ScrapeError::Structure(msg)) => {
            assert!(msg.contains("container 1"));
            assert!(msg.contains("title"));
        }
        other => panic!("expected structure error, got {other:?}"),
    }
}

#[test]
fn test_extract_missing_price_is_structure_error() {
    let html = r#"<div class="package a"><div><h3>T</h3></div>
        <div class="package-name">d</div></div>"#;
    match extract_listings(&doc(html), ExtractionStrategy::PerContainer) {
        Err(ScrapeError::Structure(msg)) => assert!(msg.contains("package-price")),
        other => panic!("expected structure error, got {other:?}"),
    }
}

#[test]
fn test_extract_price_block_without_span_is_structure_error() {
    let html = r#"<div class="package a"><div><h3>T</h3></div>
        <div class="package-name">d</div>
        <div class="package-price">£1</div></div>"#;
    match extract_listings(&doc(html), ExtractionStrategy::PerContainer) {
        Err(ScrapeError::Structure(msg)) => assert!(msg.contains("price value")),
        other => panic!("expected structure error, got {other:?}"),
    }
}

#[test]
fn test_extract_document_order_count_mismatch() {
    // Second container lacks a description, which would shift every later field
    let html = r#"
        <div class="package a"><div><h3>A</h3></div>
            <div class="package-name">first</div>
            <div class="package-price"><span>£1</span></div></div>
        <div class="package b"><div><h3>B</h3></div>
            <div class="package-price"><span>£2</span></div></div>"#;
    match extract_listings(&doc(html), ExtractionStrategy::DocumentOrder) {
        Err(ScrapeError::Structure(msg)) => {
            assert!(msg.contains("2 titles"));
            assert!(msg.contains("1 descriptions"));
            assert!(msg.contains("2 prices"));
        }
        other => panic!("expected structure error, got {other:?}"),
    }
}

#[test]
fn test_extract_per_container_reports_missing_description() {
    let html = r#"
        <div class="package a"><div><h3>A</h3></div>
            <div class="package-name">first</div>
            <div class="package-price"><span>£1</span></div></div>
        <div class="package b"><div><h3>B</h3></div>
            <div class="package-price"><span>£2</span></div></div>"#;
    match extract_listings(&doc(html), ExtractionStrategy::PerContainer) {
        Err(ScrapeError::Structure(msg)) => {
            assert!(msg.contains("container 2"));
            assert!(msg.contains("package-name"));
        }
        other => panic!("expected structure error, got {other:?}"),
    }
}

#[test]
fn test_extract_per_container_rejects_two_products_in_one_container() {
    // Two title/name/price sets inside one container must not collapse to one listing
    let html = r#"
        <div class="package a">
            <div><h3>First</h3></div>
            <div class="package-name">first</div>
            <div class="package-price"><span>£1</span></div>
            <div><h3>Second</h3></div>
            <div class="package-name">second</div>
            <div class="package-price"><span>£2</span></div>
        </div>"#;
    match extract_listings(&doc(html), ExtractionStrategy::PerContainer) {
        Err(ScrapeError::Structure(msg)) => {
            assert_eq!(msg, "product container 1 has 2 title headings")
        }
        other => panic!("expected structure error, got {other:?}"),
    }
}

#[test]
fn test_extract_per_container_rejects_extra_description() {
    let html = r#"<div class="package a"><div><h3>T</h3></div>
        <div class="package-name">one</div>
        <div class="package-name">two</div>
        <div class="package-price"><span>£1</span></div></div>"#;
    match extract_listings(&doc(html), ExtractionStrategy::PerContainer) {
        Err(ScrapeError::Structure(msg)) => {
            assert_eq!(msg, "product container 1 has 2 package-name blocks")
        }
        other => panic!("expected structure error, got {other:?}"),
    }
}

#[test]
fn test_extract_per_container_rejects_extra_price_block() {
    let html = r#"<div class="package a"><div><h3>T</h3></div>
        <div class="package-name">d</div>
        <div class="package-price"><span>£1</span></div>
        <div class="package-price"><span>£2</span></div></div>"#;
    match extract_listings(&doc(html), ExtractionStrategy::PerContainer) {
        Err(ScrapeError::Structure(msg)) => {
            assert_eq!(msg, "product container 1 has 2 package-price blocks")
        }
        other => panic!("expected structure error, got {other:?}"),
    }
}
