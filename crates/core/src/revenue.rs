//! Revenue aggregation over booked appointments.
//!
//! The price attributed to an appointment is resolved at aggregation time:
//! the value captured when the appointment was booked (`final_price`, then
//! `service_price`) takes precedence over the service's current price, so
//! historical reports stay accurate when a service is re-priced later.
//! Appointments that were completed or canceled do not count as revenue;
//! only `scheduled` ones do.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::status;
use crate::types::Timestamp;

/// One appointment as seen by the aggregator.
#[derive(Debug, Clone)]
pub struct RevenueRow {
    pub end_time: Timestamp,
    pub status: String,
    /// Price agreed at booking time, overriding everything else.
    pub final_price: Option<f64>,
    /// Service price snapshotted when the appointment was created.
    pub service_price: Option<f64>,
    /// The linked service's current price.
    pub service_base_price: Option<f64>,
}

/// Revenue summed over one calendar day, keyed `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRevenue {
    pub date: String,
    pub revenue: f64,
}

/// Revenue summed over one calendar month, labeled `Jan/2025` style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: f64,
}

/// Daily and monthly revenue series for a date range.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RevenueReport {
    pub daily: Vec<DailyRevenue>,
    pub monthly: Vec<MonthlyRevenue>,
}

/// Resolve the price attributed to an appointment.
///
/// First non-null of: booking-time final price, booking-time service price
/// snapshot, the service's current price. An appointment with no price
/// anywhere contributes zero revenue; that is data, not an error.
pub fn resolved_price(
    final_price: Option<f64>,
    service_price: Option<f64>,
    service_base_price: Option<f64>,
) -> f64 {
    final_price
        .or(service_price)
        .or(service_base_price)
        .unwrap_or(0.0)
}

/// Group `scheduled` appointments into daily and monthly revenue series.
///
/// Daily entries are keyed by calendar date and sorted ascending (the
/// zero-padded `YYYY-MM-DD` key makes lexicographic order chronological).
/// Monthly entries are grouped on `(year, month)` and sorted
/// chronologically before being labeled, so `Jan/2025` precedes `Feb/2025`
/// even though the labels sort the other way around.
pub fn aggregate_revenue(rows: &[RevenueRow]) -> RevenueReport {
    let mut daily: BTreeMap<String, f64> = BTreeMap::new();
    let mut monthly: BTreeMap<(i32, u32), f64> = BTreeMap::new();

    for row in rows {
        if row.status != status::SCHEDULED {
            continue;
        }
        let price = resolved_price(row.final_price, row.service_price, row.service_base_price);

        let date_key = row.end_time.format("%Y-%m-%d").to_string();
        *daily.entry(date_key).or_insert(0.0) += price;

        let month_key = (row.end_time.year(), row.end_time.month());
        *monthly.entry(month_key).or_insert(0.0) += price;
    }

    RevenueReport {
        daily: daily
            .into_iter()
            .map(|(date, revenue)| DailyRevenue { date, revenue })
            .collect(),
        monthly: monthly
            .into_iter()
            .map(|((year, month), revenue)| MonthlyRevenue {
                month: month_label(year, month),
                revenue,
            })
            .collect(),
    }
}

/// `Jan/2025`-style label for a `(year, month)` pair.
fn month_label(year: i32, month: u32) -> String {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    format!("{}/{year}", NAMES[(month as usize) - 1])
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    fn row(end: &str, status: &str, final_price: Option<f64>, service_price: Option<f64>) -> RevenueRow {
        RevenueRow {
            end_time: NaiveDateTime::parse_from_str(end, "%Y-%m-%d %H:%M:%S")
                .unwrap()
                .and_utc(),
            status: status.to_string(),
            final_price,
            service_price,
            service_base_price: None,
        }
    }

    #[test]
    fn resolved_price_prefers_booking_time_values() {
        assert_eq!(resolved_price(Some(100.0), Some(50.0), Some(30.0)), 100.0);
        assert_eq!(resolved_price(None, Some(50.0), Some(30.0)), 50.0);
        assert_eq!(resolved_price(None, None, Some(30.0)), 30.0);
        assert_eq!(resolved_price(None, None, None), 0.0);
    }

    #[test]
    fn zero_price_is_zero_revenue_not_fallthrough() {
        // An explicit 0 final price means "free", not "look at the service".
        assert_eq!(resolved_price(Some(0.0), Some(50.0), Some(30.0)), 0.0);
    }

    #[test]
    fn aggregates_the_documented_example() {
        let rows = vec![
            row("2025-01-05 10:00:00", status::SCHEDULED, Some(100.0), None),
            row("2025-01-05 14:00:00", status::SCHEDULED, None, Some(50.0)),
            row("2025-02-01 09:00:00", status::CANCELED, Some(999.0), None),
        ];

        let report = aggregate_revenue(&rows);

        assert_eq!(
            report.daily,
            vec![DailyRevenue {
                date: "2025-01-05".to_string(),
                revenue: 150.0,
            }]
        );
        assert_eq!(
            report.monthly,
            vec![MonthlyRevenue {
                month: "Jan/2025".to_string(),
                revenue: 150.0,
            }]
        );
    }

    #[test]
    fn non_scheduled_appointments_are_excluded() {
        let rows = vec![
            row("2025-03-10 10:00:00", status::COMPLETED, Some(80.0), None),
            row("2025-03-10 11:00:00", status::CANCELED, Some(80.0), None),
        ];

        let report = aggregate_revenue(&rows);
        assert!(report.daily.is_empty());
        assert!(report.monthly.is_empty());
    }

    #[test]
    fn daily_keys_are_unique_and_ascending() {
        let rows = vec![
            row("2025-01-20 10:00:00", status::SCHEDULED, Some(10.0), None),
            row("2025-01-05 10:00:00", status::SCHEDULED, Some(20.0), None),
            row("2025-01-20 16:00:00", status::SCHEDULED, Some(30.0), None),
        ];

        let report = aggregate_revenue(&rows);
        let dates: Vec<&str> = report.daily.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-01-05", "2025-01-20"]);
        assert_eq!(report.daily[1].revenue, 40.0);
    }

    #[test]
    fn monthly_order_is_chronological_not_alphabetical() {
        // Dec/2024 < Jan/2025 < Feb/2025, although the labels sort
        // "Dec" < "Feb" < "Jan" alphabetically.
        let rows = vec![
            row("2025-02-01 10:00:00", status::SCHEDULED, Some(1.0), None),
            row("2024-12-15 10:00:00", status::SCHEDULED, Some(2.0), None),
            row("2025-01-10 10:00:00", status::SCHEDULED, Some(3.0), None),
        ];

        let report = aggregate_revenue(&rows);
        let months: Vec<&str> = report.monthly.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["Dec/2024", "Jan/2025", "Feb/2025"]);
    }

    #[test]
    fn appointments_without_any_price_count_as_zero() {
        let rows = vec![row("2025-04-01 10:00:00", status::SCHEDULED, None, None)];

        let report = aggregate_revenue(&rows);
        assert_eq!(report.daily.len(), 1);
        assert_eq!(report.daily[0].revenue, 0.0);
    }
}
