use anyhow::Context;
use clap::{Parser, Subcommand};
use climamate_core::{Appearance, Config, provider_from_config};
use inquire::{Password, PasswordDisplayMode, Select, Text};

use crate::views::{self, Navigation, ViewContext};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "climamate", version, about = "ClimaMate weather dashboard")]
pub struct Cli {
    /// Use the dark appearance regardless of the saved setting.
    #[arg(long, global = true)]
    pub dark: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the OpenWeather API key, default city and appearance.
    Configure,

    /// Landing view: greeting, current weather for the default city and rotating trivia.
    Landing {
        /// Leave the view after this many trivia rotations.
        #[arg(long)]
        ticks: Option<u32>,
    },

    /// Home view: search the weather for a city.
    Home {
        /// Look up a single city and exit instead of prompting.
        #[arg(long)]
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        if let Some(Command::Configure) = self.command {
            return configure();
        }

        let config = Config::load()?.with_env_overrides();
        if !config.has_api_key() {
            tracing::warn!(
                "no API key configured; run `climamate configure` or set {}",
                climamate_core::config::API_KEY_ENV
            );
        }

        let appearance = if self.dark { Appearance::Dark } else { config.appearance };
        let mut ctx = ViewContext {
            provider: provider_from_config(&config),
            config,
            appearance,
        };

        let (mut next, ticks) = match self.command {
            Some(Command::Home { city: Some(city) }) => return views::lookup_once(&ctx, &city).await,
            Some(Command::Home { city: None }) => (Navigation::Home, None),
            Some(Command::Landing { ticks }) => (Navigation::Landing, ticks),
            Some(Command::Configure) | None => (Navigation::Landing, None),
        };

        loop {
            next = match next {
                Navigation::Landing => views::landing(&ctx, ticks).await?,
                Navigation::Home => views::home(&mut ctx).await?,
                Navigation::Quit => break,
            };
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if !key.trim().is_empty() {
        config.set_api_key(key.trim());
    }

    let city = Text::new("Default city for the landing view:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;
    if !city.trim().is_empty() {
        config.default_city = city.trim().to_string();
    }

    let options = vec![Appearance::Light, Appearance::Dark];
    let start = options.iter().position(|a| *a == config.appearance).unwrap_or(0);
    config.appearance = Select::new("Appearance:", options)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read appearance")?;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_landing() {
        let cli = Cli::try_parse_from(["climamate"]).expect("parses");
        assert!(cli.command.is_none());
        assert!(!cli.dark);
    }

    #[test]
    fn dark_flag_is_global() {
        let cli = Cli::try_parse_from(["climamate", "home", "--dark"]).expect("parses");
        assert!(cli.dark);
        assert!(matches!(cli.command, Some(Command::Home { city: None })));
    }

    #[test]
    fn home_with_city_and_landing_ticks() {
        let cli = Cli::try_parse_from(["climamate", "home", "--city", "Abuja"]).expect("parses");
        assert!(matches!(cli.command, Some(Command::Home { city: Some(ref c) }) if c == "Abuja"));

        let cli = Cli::try_parse_from(["climamate", "landing", "--ticks", "3"]).expect("parses");
        assert!(matches!(cli.command, Some(Command::Landing { ticks: Some(3) })));
    }
}
