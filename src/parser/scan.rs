//! Free-text date extraction.
//!
//! Scans a whitespace-joined text blob for day/month mentions like
//! "15 Kasım", "Kas 16" or "16 Kas" and returns them as dates in the
//! given year.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use super::months;

const FULL_NAMES: &str = "Ocak|Şubat|Subat|Mart|Nisan|Mayıs|Mayis|Haziran|Temmuz|Ağustos|Agustos|Eylül|Eylul|Ekim|Kasım|Kasim|Aralık|Aralik";
const ABBREVIATIONS: &str = "Oca|Şub|Sub|Mar|Nis|May|Haz|Tem|Ağu|Agu|Eyl|Eki|Kas|Ara";

// Day before full month name, abbreviation before day, day before
// abbreviation. Which capture group holds the day differs per pattern, so
// matches are disambiguated by which group is numeric.
static DAY_FULL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(\d{{1,2}})\s+({FULL_NAMES})\b")).unwrap()
});
static ABBR_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b({ABBREVIATIONS})\s*(\d{{1,2}})\b")).unwrap()
});
static DAY_ABBR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(\d{{1,2}})\s*({ABBREVIATIONS})\b")).unwrap()
});

/// Scan a text blob for day/month pairs and return the valid dates,
/// deduplicated and ascending. Tokens failing month normalization and
/// impossible calendar dates are skipped.
pub fn scan_dates(text: &str, allowed: &[String], year: i32) -> Vec<NaiveDate> {
    let mut found = Vec::new();
    for re in [&*DAY_FULL_RE, &*ABBR_DAY_RE, &*DAY_ABBR_RE] {
        for caps in re.captures_iter(text) {
            let (first, second) = (&caps[1], &caps[2]);
            let (day, token) = if first.chars().all(|c| c.is_ascii_digit()) {
                (first, second)
            } else {
                (second, first)
            };
            let Ok(day) = day.parse::<u32>() else { continue };
            let Some(month) = months::normalize(token, allowed) else {
                continue;
            };
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                found.push(date);
            }
        }
    }
    found.sort();
    found.dedup();
    debug!("free-text scan: {} date(s) -> {:?}", found.len(), found);
    found
}

// ── Tests ──
