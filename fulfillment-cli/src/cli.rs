use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fulfillment_core::{
    Config, IntentEvent, WeatherFulfillmentHandler, provider::provider_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "fulfillment", version, about = "Weather intent fulfillment harness")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fulfill an intent event and print the dialog-action response as JSON.
    Invoke {
        /// Path to the event JSON document; "-" or omitted reads stdin.
        #[arg(long)]
        event: Option<PathBuf>,
    },

    /// Fulfill a synthetic event for a city and print only the reply text.
    Ask {
        /// City name, as the runtime would pass it in the `city` slot.
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;
        let provider = provider_from_config(&config)?;
        let handler = WeatherFulfillmentHandler::new(provider);

        match self.command {
            Command::Invoke { event } => {
                let raw = read_event(event.as_deref())?;
                let event: IntentEvent = serde_json::from_str(&raw)
                    .context("Failed to parse intent event JSON")?;

                let response = handler.handle(&event).await;
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            Command::Ask { city } => {
                let event = IntentEvent::for_city(city);
                let response = handler.handle(&event).await;
                println!("{}", response.dialog_action.message.content);
            }
        }

        Ok(())
    }
}

fn read_event(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => fs::read_to_string(p)
            .with_context(|| format!("Failed to read event file: {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read event from stdin")?;
            Ok(buf)
        }
    }
}
