use crate::models::{ClientStats, DailyRecord, TrendPoint};

/// Aggregates one client's records (already newest-first) into dashboard
/// totals, per-record averages, and a 7-record trend slice.
pub fn build_client_stats(records: &[DailyRecord]) -> ClientStats {
    if records.is_empty() {
        return ClientStats {
            total_records: 0,
            total_candles: 0,
            total_seasonal_candles: 0,
            total_hours: 0,
            avg_candles: 0,
            avg_seasonal_candles: 0,
            avg_hours: 0.0,
            trend: Vec::new(),
            latest_record: None,
        };
    }

    let total_records = records.len();
    let total_candles: u64 = records.iter().map(|r| u64::from(r.regular_candles)).sum();
    let total_seasonal_candles: u64 = records.iter().map(|r| u64::from(r.seasonal_candles)).sum();
    let total_hours: u64 = records
        .iter()
        .map(|r| u64::from(r.actual_duration.unwrap_or(0)))
        .sum();

    let denom = total_records as f64;
    let avg_candles = (total_candles as f64 / denom).round() as u64;
    let avg_seasonal_candles = (total_seasonal_candles as f64 / denom).round() as u64;
    let avg_hours = (total_hours as f64 / denom * 10.0).round() / 10.0;

    let trend = records
        .iter()
        .take(7)
        .map(|record| TrendPoint {
            date: record.date.clone(),
            regular_candles: record.regular_candles,
            seasonal_candles: record.seasonal_candles,
            actual_duration: record.actual_duration,
        })
        .collect();

    ClientStats {
        total_records,
        total_candles,
        total_seasonal_candles,
        total_hours,
        avg_candles,
        avg_seasonal_candles,
        avg_hours,
        trend,
        latest_record: records.first().cloned(),
    }
}
