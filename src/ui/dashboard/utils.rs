//! Dashboard utility functions
//!
//! Contains display formatting helpers used across dashboard components

use crate::data::CoinPrices;
use crate::events::Worker;
use chrono::{DateTime, NaiveDateTime};
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Refresher => Color::Cyan,
        Worker::HistoryFetcher => Color::Green,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Temperature rounded to the nearest whole degree.
pub fn format_temperature(temperature: f64) -> String {
    format!("{}°C", temperature.round() as i64)
}

/// Price with thousands separators, no currency suffix.
pub fn format_price(price: f64) -> String {
    let rendered = format!("{:.2}", price.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((&rendered, "00"));

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let frac_part = frac_part.trim_end_matches('0');
    let mut result = String::new();
    if price < 0.0 {
        result.push('-');
    }
    result.push_str(&grouped);
    if !frac_part.is_empty() {
        result.push('.');
        result.push_str(frac_part);
    }
    result
}

/// The first currency value present for a coin, if any.
pub fn first_price(prices: &CoinPrices) -> Option<f64> {
    prices.values().next().copied()
}

/// Published timestamps as abbreviated month + day plus hour:minute,
/// e.g. `Jan 15 08:30`. Unparseable values are shown verbatim.
pub fn format_published(published: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc2822(published) {
        return parsed.format("%b %-d %H:%M").to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(published) {
        return parsed.format("%b %-d %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(published, "%Y-%m-%d %H:%M:%S") {
        return parsed.format("%b %-d %H:%M").to_string();
    }
    published.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_rounds_to_nearest_degree() {
        assert_eq!(format_temperature(17.6), "18°C");
        assert_eq!(format_temperature(17.4), "17°C");
        assert_eq!(format_temperature(-2.5), "-3°C");
        assert_eq!(format_temperature(0.0), "0°C");
    }

    #[test]
    fn prices_group_thousands_without_suffix() {
        assert_eq!(format_price(65000.0), "65,000");
        assert_eq!(format_price(3500.5), "3,500.5");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(1234567.89), "1,234,567.89");
    }

    #[test]
    fn first_price_takes_the_first_currency_present() {
        let prices: CoinPrices = serde_json::from_str(r#"{ "nzd": 65000.0 }"#).unwrap();
        assert_eq!(first_price(&prices), Some(65000.0));

        let empty = CoinPrices::new();
        assert_eq!(first_price(&empty), None);
    }

    #[test]
    fn published_formats_as_month_day_time() {
        assert_eq!(
            format_published("Mon, 15 Jan 2024 08:30:00 GMT"),
            "Jan 15 08:30"
        );
        assert_eq!(format_published("2024-01-15T08:30:00Z"), "Jan 15 08:30");
        assert_eq!(format_published("2024-01-05 07:09:00"), "Jan 5 07:09");
    }

    #[test]
    fn unparseable_published_is_shown_verbatim() {
        assert_eq!(format_published("yesterday-ish"), "yesterday-ish");
        assert_eq!(format_published(""), "");
    }

    #[test]
    fn compact_timestamp_extracts_date_and_time() {
        assert_eq!(
            format_compact_timestamp("2024-01-15 08:30:12"),
            "01-15 08:30"
        );
        assert_eq!(format_compact_timestamp("bogus"), "bogus");
    }
}
