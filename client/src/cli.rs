//! Command-line surface of the `pocasie` binary
//!
//! Each invocation fills the input form from its arguments and runs one
//! browser operation against a [`TerminalScreen`].

use std::io::Write;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use shared::{CityForm, CityId, Language};

use crate::api::CityApi;
use crate::browser::CityBrowser;
use crate::config::ClientConfig;
use crate::screen::TerminalScreen;

#[derive(Debug, Parser)]
#[command(name = "pocasie")]
#[command(about = "Browse and edit city weather records")]
pub struct Cli {
    /// Base URL of the API, e.g. http://localhost:3000/api
    #[arg(long, global = true, env = "POCASIE_API_URL")]
    pub api_url: Option<String>,

    /// Alert language (sk, en)
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all cities
    List,
    /// Show one city with its weather animation
    Show { id: CityId },
    /// Add a city
    Add(FormArgs),
    /// Update the readings of the city with the given name
    Edit(FormArgs),
    /// Delete the city with the given name
    Delete {
        #[arg(long, default_value = "")]
        name: String,
    },
}

/// The input form; values are taken as typed and validated by the client
#[derive(Debug, Args)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    /// Wind strength in km/h
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub wind: String,
    /// Precipitation in mm
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub rain: String,
    /// Temperature in °C
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub temp: String,
}

impl From<&FormArgs> for CityForm {
    fn from(args: &FormArgs) -> Self {
        CityForm::new(
            args.name.as_str(),
            args.wind.as_str(),
            args.rain.as_str(),
            args.temp.as_str(),
        )
    }
}

impl Cli {
    /// Let `--api-url` and `--lang` win over the loaded configuration
    pub fn apply_overrides(&self, config: &mut ClientConfig) {
        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.clone();
        }
        if let Some(lang) = self.lang {
            config.language = lang;
        }
    }
}

impl Command {
    /// Form contents the command starts with
    pub fn form(&self) -> CityForm {
        match self {
            Command::List | Command::Show { .. } => CityForm::default(),
            Command::Add(args) | Command::Edit(args) => CityForm::from(args),
            Command::Delete { name } => CityForm::with_name(name.as_str()),
        }
    }
}

/// What a finished command left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Alerts raised on the screen
    pub alerts: usize,
    /// Whether the operation returned an error, alerted or not
    pub failed: bool,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.alerts == 0 && !self.failed
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Run `command` once, printing views and alerts to `out`
pub async fn run<W: Write>(command: Command, config: &ClientConfig, out: W) -> (RunOutcome, W) {
    let screen = TerminalScreen::new(out, command.form(), config.animations_dir.as_str());
    let api = CityApi::new(config.api_url.as_str());
    let mut browser = CityBrowser::new(api, screen, config.language);

    let result = match command {
        Command::List => browser.load_cities().await,
        Command::Show { id } => browser.show_city(id).await,
        Command::Add(_) => browser.add_city().await,
        Command::Edit(_) => browser.edit_city().await,
        Command::Delete { .. } => browser.delete_city().await,
    };

    let screen = browser.into_screen();
    let outcome = RunOutcome {
        alerts: screen.alerts(),
        failed: result.is_err(),
    };
    (outcome, screen.into_inner())
}
