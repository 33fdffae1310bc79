//! Venue-page block extraction.
//!
//! The venue schedule lists the show as "PROFESYONEL Kasım - 15 - 16 - 20".
//! Only that one labeled block is trusted; scanning the rest of the page
//! would pick up every other show's dates.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

// The month token is hardcoded (both spellings) and not subject to the
// allowed-months filter.
static VENUE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)PROFESYONEL\s+Kas[ıi]m\s*-\s*([0-9]{1,2}(?:\s*-\s*[0-9]{1,2})*)").unwrap()
});
static DAY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{1,2}").unwrap());

const VENUE_MONTH: u32 = 11;

/// Extract the days of the labeled November block as dates in the given
/// year. Returns an empty list when the block is absent.
pub fn scan_venue_block(text: &str, year: i32) -> Vec<NaiveDate> {
    let Some(caps) = VENUE_BLOCK_RE.captures(text) else {
        debug!("venue block not found");
        return Vec::new();
    };

    let mut found: Vec<NaiveDate> = DAY_RE
        .find_iter(caps.get(1).map_or("", |m| m.as_str()))
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .filter_map(|day| NaiveDate::from_ymd_opt(year, VENUE_MONTH, day))
        .collect();
    found.sort();
    found.dedup();
    debug!("venue block: {} date(s) -> {:?}", found.len(), found);
    found
}

// ── Tests ──
