use crate::models::DailyRecord;
use chrono::{Duration, NaiveDate};

/// Result of the day-over-day comparison. A lookup problem must never fail
/// record creation, so the failure side carries a cause for the caller to
/// log instead of an error to propagate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonOutcome {
    Computed(String),
    Skipped(String),
}

pub fn previous_date(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|day| (day - Duration::days(1)).to_string())
}

pub fn comparison_label(current: u32, previous: Option<u32>) -> String {
    match previous {
        None => "NEW".to_string(),
        Some(prev) => {
            let diff = i64::from(current) - i64::from(prev);
            if diff > 0 {
                format!("+{diff}")
            } else {
                diff.to_string()
            }
        }
    }
}

/// Looks up the record dated exactly one calendar day before `date` for the
/// same client. A gap of two or more days counts as no match even when older
/// records exist. When several records share the previous date, the newest
/// created one wins, matching the listing's tie-break.
pub fn compare_against_previous(
    records: &[DailyRecord],
    client_id: &str,
    date: &str,
    current: u32,
) -> ComparisonOutcome {
    let Some(prev_date) = previous_date(date) else {
        return ComparisonOutcome::Skipped(format!("date '{date}' is not YYYY-MM-DD"));
    };

    // `records` is in insertion order, so scan backwards.
    let previous = records
        .iter()
        .rev()
        .find(|record| record.client_id == client_id && record.date == prev_date)
        .map(|record| record.regular_candles);

    ComparisonOutcome::Computed(comparison_label(current, previous))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(client_id: &str, date: &str, regular: u32) -> DailyRecord {
        DailyRecord {
            id: "r".to_string(),
            client_id: client_id.to_string(),
            date: date.to_string(),
            regular_candles: regular,
            regular_candles_comparison: String::new(),
            seasonal_candles: 0,
            online_time: None,
            actual_duration: None,
            notes: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn gain_over_previous_day() {
        let records = vec![record("c1", "2026-03-09", 19)];
        assert_eq!(
            compare_against_previous(&records, "c1", "2026-03-10", 22),
            ComparisonOutcome::Computed("+3".to_string())
        );
    }

    #[test]
    fn no_previous_record_is_new() {
        assert_eq!(
            compare_against_previous(&[], "c1", "2026-03-10", 22),
            ComparisonOutcome::Computed("NEW".to_string())
        );
    }

    #[test]
    fn equal_counts_yield_zero() {
        let records = vec![record("c1", "2026-03-09", 20)];
        assert_eq!(
            compare_against_previous(&records, "c1", "2026-03-10", 20),
            ComparisonOutcome::Computed("0".to_string())
        );
    }

    #[test]
    fn loss_keeps_the_sign() {
        let records = vec![record("c1", "2026-03-09", 22)];
        assert_eq!(
            compare_against_previous(&records, "c1", "2026-03-10", 20),
            ComparisonOutcome::Computed("-2".to_string())
        );
    }

    #[test]
    fn gap_of_two_days_breaks_the_chain() {
        let records = vec![record("c1", "2026-03-08", 19)];
        assert_eq!(
            compare_against_previous(&records, "c1", "2026-03-10", 22),
            ComparisonOutcome::Computed("NEW".to_string())
        );
    }

    #[test]
    fn other_clients_records_are_ignored() {
        let records = vec![record("c2", "2026-03-09", 19)];
        assert_eq!(
            compare_against_previous(&records, "c1", "2026-03-10", 22),
            ComparisonOutcome::Computed("NEW".to_string())
        );
    }

    #[test]
    fn duplicate_previous_dates_resolve_to_the_newest_record() {
        let records = vec![
            record("c1", "2026-03-09", 10),
            record("c1", "2026-03-09", 19),
        ];
        assert_eq!(
            compare_against_previous(&records, "c1", "2026-03-10", 22),
            ComparisonOutcome::Computed("+3".to_string())
        );
    }

    #[test]
    fn month_boundary_uses_calendar_arithmetic() {
        let records = vec![record("c1", "2026-02-28", 10)];
        assert_eq!(
            compare_against_previous(&records, "c1", "2026-03-01", 12),
            ComparisonOutcome::Computed("+2".to_string())
        );
    }

    #[test]
    fn unparseable_date_is_skipped_with_cause() {
        match compare_against_previous(&[], "c1", "not-a-date", 5) {
            ComparisonOutcome::Skipped(cause) => assert!(cause.contains("not-a-date")),
            other => panic!("expected skip, got {other:?}"),
        }
    }
}
