use crate::{model::WeatherSnapshot, render::round_celsius};

/// Time-of-day greeting for an hour in `0..24`, with a weather summary when one is known.
pub fn greeting(hour: u32, weather: Option<&WeatherSnapshot>) -> String {
    let mut text = match hour {
        0..=5 => "Good evening",
        6..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
    .to_string();

    if let Some(w) = weather {
        text.push_str(&format!(
            " | {}: {}°C, {}",
            w.location_name,
            round_celsius(w.temperature_c),
            w.description
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_bands() {
        assert_eq!(greeting(0, None), "Good evening");
        assert_eq!(greeting(5, None), "Good evening");
        assert_eq!(greeting(6, None), "Good morning");
        assert_eq!(greeting(11, None), "Good morning");
        assert_eq!(greeting(12, None), "Good afternoon");
        assert_eq!(greeting(17, None), "Good afternoon");
        assert_eq!(greeting(18, None), "Good evening");
        assert_eq!(greeting(23, None), "Good evening");
    }

    #[test]
    fn appends_weather_summary() {
        let w = WeatherSnapshot {
            location_name: "Lagos".into(),
            country: "NG".into(),
            temperature_c: 28.6,
            condition: "Clouds".into(),
            description: "scattered clouds".into(),
            humidity_pct: 70,
            wind_speed_mps: 3.1,
            icon: "03d".into(),
        };
        assert_eq!(greeting(9, Some(&w)), "Good morning | Lagos: 29°C, scattered clouds");
    }
}
