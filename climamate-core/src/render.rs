//! Text projection of page state.
//!
//! Rendering is pure: the same [`Scene`] always yields the same text, and nothing
//! here touches the network or mutates state.

use crate::{
    greeting::greeting,
    icon::{IconCategory, icon_url},
    model::{ForecastSnapshot, WeatherSnapshot},
    page::Page,
    suggestion::{Voice, suggest},
    theme::{Appearance, Backdrop},
};

const RULE_WIDTH: usize = 44;

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub page: &'a Page,
    pub trivia: Option<&'a str>,
    pub appearance: Appearance,
    /// Local hour of day, used by the landing greeting.
    pub hour: u32,
}

/// Lines of one frame, each terminated by a newline.
#[derive(Debug, Default)]
struct Frame(String);

impl Frame {
    fn line(&mut self, text: impl AsRef<str>) {
        self.0.push_str(text.as_ref());
        self.0.push('\n');
    }

    fn header(&mut self, appearance: Appearance) {
        self.line(format!("☀ ClimaMate  [{appearance}]"));
    }

    fn rule(&mut self, appearance: Appearance) {
        self.line(std::iter::repeat_n(appearance.rule_char(), RULE_WIDTH).collect::<String>());
    }

    fn hint(&mut self, hint: &str) {
        if !hint.is_empty() {
            self.line(format!("💡 {hint}"));
        }
    }
}

/// Round half away from zero and drop the sign of negative zero.
pub fn round_celsius(temp: f64) -> i64 {
    temp.round() as i64
}

pub fn render_home(scene: &Scene<'_>) -> String {
    let mut out = Frame::default();
    out.header(scene.appearance);
    out.line("Check your weather instantly");
    out.rule(scene.appearance);

    let page = scene.page;
    if page.is_loading() {
        out.line("Loading…");
    }

    match page.weather() {
        Some(weather) => {
            weather_card(&mut out, weather);
            if let Some(forecast) = page.forecast() {
                forecast_section(&mut out, forecast);
            }
        }
        None if !page.is_loading() => out.line("Search for a city to see its weather"),
        None => {}
    }

    out.rule(scene.appearance);
    out.line("🌬 Weather Trivia");
    if let Some(fact) = scene.trivia {
        out.line(fact);
    }
    out.line("© 2025 ClimaMate. All rights reserved.");
    out.0
}

pub fn render_landing(scene: &Scene<'_>) -> String {
    let mut out = Frame::default();
    let weather = scene.page.weather();
    out.header(scene.appearance);

    out.line(greeting(scene.hour, weather));
    if let Some(w) = weather {
        let category = IconCategory::from_condition(Some(&w.condition));
        out.line(format!("{}  {}", category.glyph(), icon_url(&w.icon)));
    }

    let backdrop = Backdrop::for_condition(weather.map(|w| w.condition.as_str()));
    out.line(format!("Backdrop: {}", backdrop.gradient()));
    out.rule(scene.appearance);

    out.line("Plan Your Day with ClimaMate");
    out.line("Live weather updates, daily suggestions, and trivia to brighten your day.");
    if let Some(w) = weather {
        out.hint(suggest(Some(w.temperature_c), Some(&w.description), Voice::Landing));
    }

    out.rule(scene.appearance);
    if let Some(fact) = scene.trivia {
        out.line(format!("Did you know? {fact}"));
    }
    out.line("© 2025 ClimaMate. Plan your day smarter.");
    out.0
}

fn weather_card(out: &mut Frame, w: &WeatherSnapshot) {
    let icon = IconCategory::from_condition(Some(&w.condition));
    out.line(format!("{}  {}, {}", icon.glyph(), w.location_name, w.country));
    out.line(format!("{}°C", round_celsius(w.temperature_c)));
    out.line(capitalize_words(&w.description));
    out.hint(suggest(Some(w.temperature_c), Some(&w.description), Voice::Home));
    out.line(format!("Humidity: {}%   Wind: {} m/s", w.humidity_pct, w.wind_speed_mps));
}

fn forecast_section(out: &mut Frame, forecast: &ForecastSnapshot) {
    if forecast.is_empty() {
        out.line("No forecast available");
        return;
    }

    out.line("Forecast");
    for entry in forecast.daily() {
        let icon = IconCategory::from_condition(Some(&entry.condition));
        out.line(format!(
            "  {}  {}  {:>4}°C  {}",
            entry.time.format("%a %d %b"),
            icon.glyph(),
            round_celsius(entry.temperature_c),
            entry.description
        ));
    }
}

fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
