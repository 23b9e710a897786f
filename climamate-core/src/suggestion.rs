//! Day-planning hints derived from temperature and condition text.
//!
//! Rules are checked top to bottom and the first match wins:
//! missing data, rain in the description, above 30 °C, below 15 °C, otherwise a
//! generic good-day line. Both thresholds are strict, so exactly 30 °C and 15 °C
//! fall through to the generic line.

/// Wording used by each view; the rule order is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voice {
    Landing,
    Home,
}

const HOT_C: f64 = 30.0;
const COLD_C: f64 = 15.0;

pub fn suggest(temperature_c: Option<f64>, description: Option<&str>, voice: Voice) -> &'static str {
    let (Some(temp), Some(desc)) = (temperature_c, description.filter(|d| !d.is_empty())) else {
        return "";
    };

    if desc.contains("rain") {
        return match voice {
            Voice::Landing => "Don't forget your umbrella today!",
            Voice::Home => "Carry an umbrella today 🌧️",
        };
    }
    if temp > HOT_C {
        return match voice {
            Voice::Landing => "Stay hydrated, it's quite hot today.",
            Voice::Home => "Stay hydrated, it's quite hot ☀️",
        };
    }
    if temp < COLD_C {
        return match voice {
            Voice::Landing => "Wear a jacket, it's chilly.",
            Voice::Home => "Wear a warm jacket, it's chilly 🧥",
        };
    }
    match voice {
        Voice::Landing => "It's a great day to be productive!",
        Voice::Home => "Weather looks great for your day! 😊",
    }
}
