use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Confirm, CustomType};
use tracing::debug;
use weather_widget_core::{
    Config, ConfiguredPosition, Controller, Coordinates, Page, config::validate_position,
    providers_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current conditions and a six-hour forecast")]
pub struct Cli {
    /// Print the rendered page as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Without a subcommand, shows weather for the configured position.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a city and show its weather.
    Search {
        /// City name, e.g. "Paris" or "New York". Words are joined with spaces.
        city: Vec<String>,
    },

    /// Save the position used when no city is given.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = Config::load()?;
        debug!(endpoints = ?config.endpoints, has_position = config.position.is_some(), "loaded config");

        match self.command {
            Some(Command::Configure) => configure(&mut config),
            Some(Command::Search { city }) => {
                let ctl = controller(&config)?;
                ctl.search(&city.join(" ")).await;
                print_page(&ctl.into_surface(), self.json)
            }
            None => {
                let ctl = controller(&config)?;
                ctl.on_load(&ConfiguredPosition::from_config(&config)).await;
                print_page(&ctl.into_surface(), self.json)
            }
        }
    }
}

fn controller(config: &Config) -> Result<Controller<Page>> {
    let (geocoder, forecasts) =
        providers_from_config(config).context("Failed to build HTTP client")?;
    Ok(Controller::new(geocoder, forecasts, Page::new()))
}

fn print_page(page: &Page, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(page).context("Failed to serialize page")?;
        println!("{out}");
    } else if !page.is_blank() {
        print!("{page}");
    }
    Ok(())
}

fn configure(config: &mut Config) -> Result<()> {
    if config.position.is_some() {
        let clear = Confirm::new("A position is already saved. Remove it instead?")
            .with_default(false)
            .prompt()?;
        if clear {
            config.clear_position();
            config.save()?;
            println!("Saved position removed.");
            return Ok(());
        }
    }

    let latitude = CustomType::<f64>::new("Latitude:")
        .with_help_message("Decimal degrees, -90 to 90")
        .prompt()?;
    let longitude = CustomType::<f64>::new("Longitude:")
        .with_help_message("Decimal degrees, -180 to 180")
        .prompt()?;

    let position = Coordinates::new(latitude, longitude);
    validate_position(position)?;

    config.set_position(position);
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_load_path() {
        let cli = Cli::try_parse_from(["weather"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn search_takes_city_and_global_json() {
        let cli = Cli::try_parse_from(["weather", "search", "New", "York", "--json"]).expect("parse");
        assert!(cli.json);
        match cli.command {
            Some(Command::Search { city }) => assert_eq!(city.join(" "), "New York"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn search_without_city_is_blank_input() {
        let cli = Cli::try_parse_from(["weather", "search"]).expect("parse");
        match cli.command {
            Some(Command::Search { city }) => assert!(city.is_empty()),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
