use tracing::{debug, error};

use crate::{
    event::IntentEvent, model::WeatherReading, provider::WeatherProvider,
    response::FulfillmentResponse,
};

/// Fulfills the weather intent: one provider call, one dialog-action reply.
///
/// Holds no state between invocations; a hosting runtime may call
/// [`handle`](Self::handle) concurrently.
#[derive(Debug)]
pub struct WeatherFulfillmentHandler {
    provider: Box<dyn WeatherProvider>,
}

impl WeatherFulfillmentHandler {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Handle one intent event.
    ///
    /// Always produces a response: a provider failure is logged once and
    /// mapped to a `Close`/`Failed` action instead of propagating.
    pub async fn handle(&self, event: &IntentEvent) -> FulfillmentResponse {
        let city = event.city();
        debug!(city, "fulfilling weather intent");

        match self.provider.current_weather(city).await {
            Ok(reading) => FulfillmentResponse::close_fulfilled(compose_reply(&reading)),
            Err(err) => {
                error!(%err, city, "weather lookup failed");
                FulfillmentResponse::close_failed(failure_reply(city))
            }
        }
    }
}

/// Reply sentence the runtime's conversation flow expects.
///
/// Byte-exact for compatibility, including the missing space before
/// "degrees".
fn compose_reply(reading: &WeatherReading) -> String {
    format!(
        "The temperature is {}degrees and Humidity is {}% with {} expected. \
         Would you like to make a flight reservation to this city?",
        reading.temperature, reading.humidity_pct, reading.description
    )
}

fn failure_reply(city: &str) -> String {
    if city.is_empty() {
        "Sorry, I could not look up the weather right now. Please try again later.".to_string()
    } else {
        format!("Sorry, I could not look up the weather for {city} right now. Please try again later.")
    }
}
