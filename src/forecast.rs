//! Forecast reduction: 3-hour samples down to a daily outlook
//!
//! The upstream forecast endpoint returns eight samples per day. The
//! dashboard shows one card per day, so the sequence is bucketed by calendar
//! date and the first sample of each date is kept.

use std::collections::HashSet;

use chrono::{Local, TimeZone};

use crate::models::ForecastSample;

/// Maximum number of days in a reduced forecast
pub const MAX_FORECAST_DAYS: usize = 5;

/// One representative sample per calendar day, earliest date first,
/// at most [`MAX_FORECAST_DAYS`] entries. Derived, never persisted.
pub type DailyForecast = Vec<ForecastSample>;

/// Reduce an ordered sequence of forecast samples to at most one sample per
/// calendar date in the given time zone.
///
/// The input is trusted to be sorted ascending by timestamp, as the upstream
/// service delivers it; no re-sorting happens here. For each distinct date
/// the FIRST sample encountered wins and later samples for that date are
/// discarded. Output stops after [`MAX_FORECAST_DAYS`] distinct dates; fewer
/// days yield a shorter list, never padding.
///
/// An unsorted input therefore buckets by input order, not chronological
/// order.
#[must_use]
pub fn reduce_to_daily_forecast<Tz: TimeZone>(
    samples: &[ForecastSample],
    tz: &Tz,
) -> DailyForecast {
    let mut seen_dates = HashSet::new();
    let mut daily = Vec::new();

    for sample in samples {
        let date = sample.timestamp.with_timezone(tz).date_naive();
        if seen_dates.insert(date) {
            daily.push(sample.clone());
            if daily.len() == MAX_FORECAST_DAYS {
                break;
            }
        }
    }

    daily
}

/// [`reduce_to_daily_forecast`] in the system-local time zone, the zone the
/// viewer of the dashboard lives in.
#[must_use]
pub fn reduce_to_daily_forecast_local(samples: &[ForecastSample]) -> DailyForecast {
    reduce_to_daily_forecast(samples, &Local)
}
