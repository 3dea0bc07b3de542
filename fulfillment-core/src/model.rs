/// One decoded observation from the weather provider.
///
/// Exists only for the duration of a single fulfillment.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Imperial degrees, as returned with `units=imperial`.
    pub temperature: f64,
    /// Relative humidity, 0-100.
    pub humidity_pct: u8,
    /// Short condition text, e.g. "clear sky".
    pub description: String,
}
