use serde::{Deserialize, Serialize};

/// Light or dark presentation, toggled by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn toggle(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    /// Character used for horizontal rules in rendered output.
    pub(crate) fn rule_char(&self) -> char {
        match self {
            Appearance::Light => '─',
            Appearance::Dark => '━',
        }
    }
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Landing view backdrop, chosen by the exact condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Sunny,
    Stormy,
    Overcast,
    Default,
}

impl Backdrop {
    pub fn for_condition(condition: Option<&str>) -> Self {
        match condition {
            Some("Clear") => Backdrop::Sunny,
            Some("Rain") => Backdrop::Stormy,
            Some("Clouds") => Backdrop::Overcast,
            _ => Backdrop::Default,
        }
    }

    /// Gradient described as its colour stops.
    pub fn gradient(&self) -> &'static str {
        match self {
            Backdrop::Sunny => "yellow → orange → blue",
            Backdrop::Stormy => "gray → blue → teal",
            Backdrop::Overcast => "gray → cyan → blue",
            Backdrop::Default => "blue → cyan → teal",
        }
    }
}
