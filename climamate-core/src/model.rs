use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// A place name typed by the user, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery(String);

impl LocationQuery {
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(FetchError::Validation);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized current conditions for one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub country: String,
    pub temperature_c: f64,
    /// Coarse category such as "Clear", "Rain" or "Clouds".
    pub condition: String,
    pub description: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub icon: String,
}

/// One timestamped step of a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub time: DateTime<Utc>,
    pub temperature_c: f64,
    pub condition: String,
    pub description: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub location_name: String,
    pub country: String,
    /// Entries in provider order (ascending time).
    pub entries: Vec<ForecastEntry>,
}

impl ForecastSnapshot {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One entry per calendar day (UTC), the one closest to midday.
    pub fn daily(&self) -> Vec<&ForecastEntry> {
        let mut days: Vec<(NaiveDate, &ForecastEntry)> = Vec::new();

        for entry in &self.entries {
            let date = entry.time.date_naive();
            match days.iter_mut().find(|(d, _)| *d == date) {
                Some((_, best)) => {
                    if distance_from_noon(entry) < distance_from_noon(best) {
                        *best = entry;
                    }
                }
                None => days.push((date, entry)),
            }
        }

        days.into_iter().map(|(_, e)| e).collect()
    }
}

fn distance_from_noon(entry: &ForecastEntry) -> u32 {
    entry.time.hour().abs_diff(12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry_at(day: u32, hour: u32, temp: f64) -> ForecastEntry {
        ForecastEntry {
            time: Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap(),
            temperature_c: temp,
            condition: "Clear".into(),
            description: "clear sky".into(),
            humidity_pct: 40,
            wind_speed_mps: 2.0,
            icon: "01d".into(),
        }
    }

    #[test]
    fn location_query_rejects_blank_input() {
        assert_eq!(LocationQuery::parse(""), Err(FetchError::Validation));
        assert_eq!(LocationQuery::parse("   \t"), Err(FetchError::Validation));
    }

    #[test]
    fn location_query_trims() {
        let q = LocationQuery::parse("  Abuja ").expect("valid query");
        assert_eq!(q.as_str(), "Abuja");
    }

    #[test]
    fn daily_picks_entry_closest_to_noon() {
        let forecast = ForecastSnapshot {
            location_name: "Kano".into(),
            country: "NG".into(),
            entries: vec![
                entry_at(1, 9, 20.0),
                entry_at(1, 12, 25.0),
                entry_at(1, 21, 18.0),
                entry_at(2, 0, 17.0),
                entry_at(2, 15, 27.0),
            ],
        };

        let daily = forecast.daily();
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].temperature_c, 25.0);
        assert_eq!(daily[1].temperature_c, 27.0);
    }

    #[test]
    fn daily_of_empty_forecast_is_empty() {
        let forecast = ForecastSnapshot {
            location_name: "Kano".into(),
            country: "NG".into(),
            entries: vec![],
        };
        assert!(forecast.is_empty());
        assert!(forecast.daily().is_empty());
    }
}
