use anyhow::Result;
use chrono::{DateTime, FixedOffset, Utc};
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::api::WeatherApi;
use crate::cities;
use crate::config::Config;
use crate::demo;
use crate::error::WeatherError;
use crate::formatters::{
    format_activities, format_air_quality, format_alerts_notice, format_city_list,
    format_comparison, format_hourly, format_weather, local_offset, location_label,
    ComparisonColumn,
};
use crate::models::{CityRequest, CompareRequest, Coordinates, HourlyRequest, WeatherAtRequest};

const MAX_FORECAST_DAYS: i64 = 5;

/// Weather service for Turkish cities that handles MCP requests
#[derive(Clone)]
pub struct TurkeyWeather {
    api: Arc<WeatherApi>,
    tool_router: ToolRouter<Self>,
}

/// Current time in Turkey, used to date demo reports
fn turkey_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&local_offset(None))
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<Coordinates, WeatherError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(WeatherError::InvalidArgument(
            "Geçersiz enlem değeri. Enlem -90 ile 90 arasında olmalıdır.".to_string(),
        ));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(WeatherError::InvalidArgument(
            "Geçersiz boylam değeri. Boylam -180 ile 180 arasında olmalıdır.".to_string(),
        ));
    }
    Ok(Coordinates::new(latitude, longitude))
}

fn validate_days(days: i64) -> Result<u32, WeatherError> {
    if (1..=MAX_FORECAST_DAYS).contains(&days) {
        Ok(days as u32)
    } else {
        Err(WeatherError::InvalidArgument(
            "Geçersiz gün sayısı. Değer 1-5 arasında olmalıdır.".to_string(),
        ))
    }
}

/// Maps a lookup failure onto an MCP error; bad input is the caller's fault
fn to_mcp_error(err: WeatherError) -> McpError {
    if err.is_caller_error() {
        McpError::invalid_params(err.to_string(), None)
    } else {
        tracing::warn!("Tool call failed: {}", err);
        McpError::internal_error(err.to_string(), None)
    }
}

fn text_result(report: Result<String, WeatherError>) -> Result<CallToolResult, McpError> {
    report
        .map(|text| CallToolResult::success(vec![Content::text(text)]))
        .map_err(to_mcp_error)
}

impl TurkeyWeather {
    /// Creates a new service instance from runtime configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_api(WeatherApi::new(config)?))
    }

    pub fn with_api(api: WeatherApi) -> Self {
        Self {
            api: Arc::new(api),
            tool_router: Self::tool_router(),
        }
    }

    pub fn is_demo(&self) -> bool {
        self.api.is_demo()
    }

    /// Current conditions and five-day summary at arbitrary coordinates
    pub async fn weather_at(
        &self,
        latitude: f64,
        longitude: f64,
        label: Option<&str>,
    ) -> Result<String, WeatherError> {
        let coordinates = validate_coordinates(latitude, longitude)?;

        let current = match self.api.current(coordinates).await {
            Ok(current) => current,
            Err(WeatherError::DemoMode) => {
                let label = label
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .or_else(|| cities::find_near(coordinates).map(|c| c.name))
                    .unwrap_or(crate::constants::UNKNOWN_LOCATION);
                return Ok(demo::weather(&mut rand::rng(), label, turkey_now()));
            }
            Err(e) => return Err(e.during("Hava durumu bilgisi")),
        };

        let forecast = self
            .api
            .forecast(coordinates)
            .await
            .map_err(|e| e.during("Hava durumu tahmini"))?;

        Ok(format_weather(&location_label(label, &current), &current, &forecast))
    }

    pub async fn city_weather(&self, city: &str) -> Result<String, WeatherError> {
        let city = cities::resolve(city)?;
        self.weather_at(city.coordinates.lat, city.coordinates.lon, Some(city.name))
            .await
    }

    pub async fn hourly_forecast(&self, city: &str, days: i64) -> Result<String, WeatherError> {
        let days = validate_days(days)?;
        let city = cities::resolve(city)?;

        match self.api.forecast(city.coordinates).await {
            Ok(forecast) => Ok(format_hourly(city.name, &forecast, days)),
            Err(WeatherError::DemoMode) => {
                Ok(demo::hourly(&mut rand::rng(), city.name, days, turkey_now()))
            }
            Err(e) => Err(e.during("Hava durumu tahmini")),
        }
    }

    pub async fn air_quality(&self, city: &str) -> Result<String, WeatherError> {
        let city = cities::resolve(city)?;

        match self.api.air_pollution(city.coordinates).await {
            Ok(pollution) => format_air_quality(city.name, &pollution)
                .map_err(|e| e.during("Hava kalitesi bilgisi")),
            Err(WeatherError::DemoMode) => Ok(demo::air_quality(&mut rand::rng(), city.name)),
            Err(e) => Err(e.during("Hava kalitesi bilgisi")),
        }
    }

    pub async fn compare_cities(&self, first: &str, second: &str) -> Result<String, WeatherError> {
        let first = cities::resolve(first)?;
        let second = cities::resolve(second)?;

        let first_weather = self.api.current(first.coordinates).await;
        let second_weather = self.api.current(second.coordinates).await;

        match (first_weather, second_weather) {
            (Ok(a), Ok(b)) => Ok(format_comparison(
                "HAVA DURUMU KARŞILAŞTIRMASI",
                &ComparisonColumn::from_weather(first.name, &a),
                &ComparisonColumn::from_weather(second.name, &b),
            )),
            (Err(WeatherError::DemoMode), _) | (_, Err(WeatherError::DemoMode)) => Ok(
                demo::comparison(&mut rand::rng(), first.name, second.name),
            ),
            (a, b) => {
                let failures = [(first.name, a.err()), (second.name, b.err())]
                    .into_iter()
                    .filter_map(|(name, err)| err.map(|e| (name.to_string(), e)))
                    .collect();
                Err(WeatherError::Comparison(failures))
            }
        }
    }

    pub async fn activity_suggestions(&self, city: &str) -> Result<String, WeatherError> {
        let city = cities::resolve(city)?;

        let current = match self.api.current(city.coordinates).await {
            Ok(current) => current,
            Err(WeatherError::DemoMode) => {
                return Ok(demo::activities(&mut rand::rng(), city.name));
            }
            Err(e) => return Err(e.during("Hava durumu bilgisi")),
        };

        // the outlook section is optional; a failed forecast only drops it
        let forecast = match self.api.forecast(city.coordinates).await {
            Ok(forecast) => Some(forecast),
            Err(e) => {
                tracing::warn!("Forecast for {} unavailable: {}", city.name, e);
                None
            }
        };

        Ok(format_activities(city.name, &current, forecast.as_ref(), Utc::now()))
    }
}

#[tool_handler]
impl ServerHandler for TurkeyWeather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "turkey-weather-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Türkiye şehirleri için hava durumu, saatlik tahmin, hava kalitesi, şehir \
                karşılaştırması ve aktivite önerileri sunan servis. Veriler OpenWeatherMap \
                API'sinden alınır; API anahtarı yoksa demo verileri döner."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl TurkeyWeather {
    /// Weather at arbitrary coordinates
    #[tool(description = "Belirli bir konum için hava durumu tahminini alır. Enlem (-90..90), boylam (-180..180) ve isteğe bağlı olarak konumun adını verin.")]
    async fn hava_durumu(
        &self,
        Parameters(request): Parameters<WeatherAtRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting weather for coordinates: {}, {}",
            request.enlem,
            request.boylam
        );
        text_result(
            self.weather_at(request.enlem, request.boylam, request.yer_adi.as_deref())
                .await,
        )
    }

    #[tool(description = "Türkiye'deki bir şehir için hava durumu tahminini alır (örn. İstanbul, Ankara).")]
    async fn hava_durumu_sehir(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting weather for city: {}", request.sehir);
        text_result(self.city_weather(&request.sehir).await)
    }

    #[tool(description = "Belirli bir şehir için saatlik hava durumu tahminlerini alır. Gün sayısı 1-5 arasında olmalıdır (varsayılan 1).")]
    async fn saatlik_hava_durumu(
        &self,
        Parameters(request): Parameters<HourlyRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting {} day hourly forecast for city: {}",
            request.gun_sayisi,
            request.sehir
        );
        text_result(self.hourly_forecast(&request.sehir, request.gun_sayisi).await)
    }

    #[tool(description = "Belirli bir şehir için hava kalitesi endeksi (AQI) ve kirletici bilgisini alır.")]
    async fn hava_kalitesi(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting air quality for city: {}", request.sehir);
        text_result(self.air_quality(&request.sehir).await)
    }

    #[tool(description = "İki farklı şehrin hava durumunu karşılaştırır.")]
    async fn sehirler_karsilastir(
        &self,
        Parameters(request): Parameters<CompareRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Comparing {} and {}", request.sehir1, request.sehir2);
        text_result(self.compare_cities(&request.sehir1, &request.sehir2).await)
    }

    #[tool(description = "Belirli bir şehir için hava durumuna göre aktivite önerileri sunar.")]
    async fn havadurumu_aktivite_onerileri(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting activity suggestions for city: {}", request.sehir);
        text_result(self.activity_suggestions(&request.sehir).await)
    }

    #[tool(description = "Türkiye için aktif hava durumu alarmları ve uyarıları hakkında bilgi verir.")]
    async fn hava_alarmlari(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting weather alerts notice");
        text_result(Ok(format_alerts_notice()))
    }

    #[tool(description = "Sistemde kayıtlı Türk şehirlerinin listesini döndürür.")]
    async fn turk_sehirleri_listesi(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Listing registered cities");
        text_result(Ok(format_city_list()))
    }
}
