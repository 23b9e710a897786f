/// Visual category for a condition, matched on a lower-cased substring of the main category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconCategory {
    Clear,
    Rain,
    Cloud,
    Other,
}

impl IconCategory {
    pub fn from_condition(condition: Option<&str>) -> Self {
        let Some(main) = condition else {
            return IconCategory::Other;
        };
        let main = main.to_lowercase();

        if main.contains("clear") {
            IconCategory::Clear
        } else if main.contains("rain") || main.contains("drizzle") {
            IconCategory::Rain
        } else if main.contains("cloud") {
            IconCategory::Cloud
        } else {
            IconCategory::Other
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            IconCategory::Clear => "☀",
            IconCategory::Rain => "🌧",
            IconCategory::Cloud => "☁",
            IconCategory::Other => "🌬",
        }
    }
}

/// Large provider icon for an icon id such as `"03d"`.
pub fn icon_url(icon: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon}@4x.png")
}
