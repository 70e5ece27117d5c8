use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

// ============================================================================
// OpenWeatherMap API Models
// ============================================================================
//
// Readings are optional throughout: the API drops fields it has no value for,
// and reports render those as "N/A" instead of failing.

/// `GET /weather`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrentWeather {
    pub name: Option<String>,
    pub main: Readings,
    pub weather: Vec<Condition>,
    pub wind: Wind,
    /// Shift from UTC in seconds
    pub timezone: Option<i32>,
}

impl CurrentWeather {
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }

    pub fn description(&self) -> Option<&str> {
        self.condition().and_then(|c| c.description.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Readings {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Condition {
    /// OpenWeatherMap condition code (2xx thunderstorm .. 8xx clouds)
    pub id: Option<u16>,
    pub main: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Wind {
    pub speed: Option<f64>,
    pub deg: Option<f64>,
}

/// `GET /forecast`: 3-hour steps over five days
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Forecast {
    pub list: Vec<ForecastItem>,
    pub city: Option<ForecastCity>,
}

impl Forecast {
    pub fn timezone(&self) -> Option<i32> {
        self.city.as_ref().and_then(|c| c.timezone)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForecastCity {
    pub name: Option<String>,
    pub timezone: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForecastItem {
    /// Unix timestamp, UTC
    pub dt: i64,
    pub main: Readings,
    pub weather: Vec<Condition>,
    pub wind: Wind,
}

impl ForecastItem {
    pub fn description(&self) -> Option<&str> {
        self.weather.first().and_then(|c| c.description.as_deref())
    }
}

/// `GET /air_pollution`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AirPollution {
    pub list: Vec<PollutionSample>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PollutionSample {
    pub main: AqiIndex,
    pub components: Pollutants,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AqiIndex {
    pub aqi: u8,
}

/// Concentrations in μg/m³
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Pollutants {
    pub co: Option<f64>,
    pub no2: Option<f64>,
    pub o3: Option<f64>,
    pub so2: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct WeatherAtRequest {
    /// Konumun enlemi (-90 ile 90 arası)
    pub enlem: f64,
    /// Konumun boylamı (-180 ile 180 arası)
    pub boylam: f64,
    /// Konumun adı (opsiyonel)
    #[serde(default)]
    pub yer_adi: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CityRequest {
    /// Türkiye'deki şehir adı (örn. İstanbul, Ankara)
    pub sehir: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct HourlyRequest {
    /// Türkiye'deki şehir adı (örn. İstanbul, Ankara)
    pub sehir: String,
    /// Kaç günlük tahmin isteniyor (1-5 arası, varsayılan 1)
    #[serde(default = "default_days")]
    pub gun_sayisi: i64,
}

fn default_days() -> i64 {
    1
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CompareRequest {
    /// İlk şehrin adı
    pub sehir1: String,
    /// İkinci şehrin adı
    pub sehir2: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_weather_tolerates_missing_fields() {
        let weather: CurrentWeather =
            serde_json::from_str(r#"{"main": {"temp": 21.5}, "weather": []}"#).unwrap();
        assert_eq!(weather.main.temp, Some(21.5));
        assert_eq!(weather.main.humidity, None);
        assert!(weather.description().is_none());
        assert!(weather.name.is_none());
    }

    #[test]
    fn hourly_request_defaults_to_one_day() {
        let request: HourlyRequest = serde_json::from_str(r#"{"sehir": "Bursa"}"#).unwrap();
        assert_eq!(request.gun_sayisi, 1);
    }
}
