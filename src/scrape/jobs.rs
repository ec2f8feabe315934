// src/scrape/jobs.rs

use scraper::{ElementRef, Html, Selector};

use crate::data::{JobRecord, NOT_AVAILABLE};

// Structural markers on the jobs page.
// Listing cards carry class="job-listing"; inside each card the title,
// company and blurb have their own classes, while location and expiry
// hang off icon elements whose following <li> holds the value.
const CARD: &str = ".job-listing";
const TITLE: &str = ".job-listing-title";
const COMPANY: &str = ".job-listing-company";
const LOCATION_ICON: &str = ".icon-material-outline-location-on";
const EXPIRY_ICON: &str = ".icon-material-outline-access-time";
const DESCRIPTION: &str = ".job-listing-text";

struct Markers {
    card: Selector,
    title: Selector,
    company: Selector,
    location_icon: Selector,
    expiry_icon: Selector,
    description: Selector,
}

impl Markers {
    fn new() -> Self {
        Self {
            card: marker(CARD),
            title: marker(TITLE),
            company: marker(COMPANY),
            location_icon: marker(LOCATION_ICON),
            expiry_icon: marker(EXPIRY_ICON),
            description: marker(DESCRIPTION),
        }
    }
}

fn marker(css: &str) -> Selector {
    // All inputs are the static class selectors above
    Selector::parse(css).expect("static selector")
}

/// Pull up to `max_jobs` records out of the page, in document order.
///
/// An empty result means no listing cards matched at all — every card
/// that does match yields exactly one record, with any missing field
/// degraded to `"N/A"`.
pub fn extract_jobs(html: &str, max_jobs: usize) -> Vec<JobRecord> {
    let doc = Html::parse_document(html);
    let m = Markers::new();

    doc.select(&m.card)
        .take(max_jobs)
        .map(|card| JobRecord {
            title: own_text(card.select(&m.title).next()),
            company: own_text(card.select(&m.company).next()),
            location: next_list_item(card.select(&m.location_icon).next()),
            expiry_date: next_list_item(card.select(&m.expiry_icon).next()),
            description: own_text(card.select(&m.description).next()),
        })
        .collect()
}

/// Trimmed text content of an element, `"N/A"` when absent.
fn own_text(el: Option<ElementRef>) -> String {
    match el {
        Some(el) => s!(el.text().collect::<String>().trim()),
        None => s!(NOT_AVAILABLE),
    }
}

/// Trimmed text of the next sibling `<li>` after a marker element.
///
/// `"N/A"` both when the marker is absent and when it has no `<li>`
/// sibling after it; a value field never fails the record.
fn next_list_item(icon: Option<ElementRef>) -> String {
    let Some(icon) = icon else {
        return s!(NOT_AVAILABLE);
    };

    icon.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "li")
        .map(|li| s!(li.text().collect::<String>().trim()))
        .unwrap_or_else(|| s!(NOT_AVAILABLE))
}
