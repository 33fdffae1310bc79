//! Notification decision logic.

use chrono::NaiveDate;

/// A notification-worthy finding: the new maximum relevant date plus every
/// relevant date for the message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub max_date: NaiveDate,
    pub relevant: Vec<NaiveDate>,
}

/// What a run concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing at or after the cutoff.
    NoRelevantDates,
    /// The maximum relevant date equals the persisted marker.
    Unchanged(NaiveDate),
    Notify(Alert),
}

/// Union both extractors' results into one ascending, duplicate-free list.
pub fn merge(show: &[NaiveDate], venue: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut all: Vec<NaiveDate> = show.iter().chain(venue.iter()).copied().collect();
    all.sort();
    all.dedup();
    all
}

/// Filter the merged dates to those at or after the cutoff and compare the
/// maximum against the persisted marker (ISO string equality). A smaller
/// maximum than the marker is treated the same as an equal one: no
/// re-notification, no retraction.
pub fn decide(dates: &[NaiveDate], cutoff: NaiveDate, last_notified: Option<&str>) -> Outcome {
    let relevant: Vec<NaiveDate> = dates.iter().copied().filter(|d| *d >= cutoff).collect();
    let Some(max_date) = relevant.last().copied() else {
        return Outcome::NoRelevantDates;
    };

    if last_notified == Some(max_date.to_string().as_str()) {
        return Outcome::Unchanged(max_date);
    }

    Outcome::Notify(Alert { max_date, relevant })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn merge_unions_sorts_and_dedups() {
        let show = vec![date(2025, 11, 16), date(2025, 11, 10)];
        let venue = vec![date(2025, 11, 16), date(2025, 11, 20)];
        assert_eq!(
            merge(&show, &venue),
            vec![date(2025, 11, 10), date(2025, 11, 16), date(2025, 11, 20)]
        );
    }

    #[test]
    fn merge_with_empty_venue_list() {
        let show = vec![date(2025, 11, 15)];
        assert_eq!(merge(&show, &[]), show);
    }

    #[test]
    fn fires_without_prior_marker() {
        let dates = vec![date(2025, 11, 10), date(2025, 11, 16)];
        let outcome = decide(&dates, date(2025, 11, 14), None);
        // 2025-11-10 is below the cutoff: it neither decides the maximum
        // nor appears in the relevant list.
        assert_eq!(
            outcome,
            Outcome::Notify(Alert {
                max_date: date(2025, 11, 16),
                relevant: vec![date(2025, 11, 16)],
            })
        );
    }

    #[test]
    fn no_relevant_dates() {
        let dates = vec![date(2025, 11, 10)];
        assert_eq!(
            decide(&dates, date(2025, 11, 14), None),
            Outcome::NoRelevantDates
        );
        assert_eq!(decide(&[], date(2025, 11, 14), None), Outcome::NoRelevantDates);
    }

    #[test]
    fn equal_marker_suppresses_notification() {
        let dates = vec![date(2025, 11, 16)];
        assert_eq!(
            decide(&dates, date(2025, 11, 14), Some("2025-11-16")),
            Outcome::Unchanged(date(2025, 11, 16))
        );
    }

    #[test]
    fn smaller_maximum_still_notifies_on_string_inequality() {
        // The comparison is string equality, not monotonic: a maximum below
        // the marker differs from it and so fires again.
        let dates = vec![date(2025, 11, 15)];
        let outcome = decide(&dates, date(2025, 11, 14), Some("2025-11-16"));
        assert!(matches!(outcome, Outcome::Notify(_)));
    }

    #[test]
    fn relevant_list_keeps_all_dates_at_or_after_cutoff() {
        let dates = vec![date(2025, 11, 14), date(2025, 11, 16), date(2025, 12, 1)];
        match decide(&dates, date(2025, 11, 14), None) {
            Outcome::Notify(alert) => {
                assert_eq!(alert.max_date, date(2025, 12, 1));
                assert_eq!(alert.relevant, dates);
            }
            other => panic!("expected Notify, got {:?}", other),
        }
    }
}
