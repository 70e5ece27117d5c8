//! Tool behavior against a fake OpenWeatherMap server, and in demo mode.

use mockito::{Matcher, Mock, ServerGuard};
use pretty_assertions::assert_eq;
use serde_json::json;
use turkey_weather_mcp::api::WeatherApi;
use turkey_weather_mcp::{Config, TurkeyWeather, WeatherError};

const API_KEY: &str = "test-key";

// 2024-06-10 00:00 Europe/Istanbul
const MIDNIGHT_JUNE_10: i64 = 1_717_966_800;

fn service_for(server: &ServerGuard) -> TurkeyWeather {
    let api = WeatherApi::new(&Config::with_api(server.url(), API_KEY)).unwrap();
    TurkeyWeather::with_api(api)
}

fn demo_service() -> TurkeyWeather {
    TurkeyWeather::new(&Config::default()).unwrap()
}

fn query_for(lat: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("lat".into(), lat.into()),
        Matcher::UrlEncoded("appid".into(), API_KEY.into()),
        Matcher::UrlEncoded("units".into(), "metric".into()),
        Matcher::UrlEncoded("lang".into(), "tr".into()),
    ])
}

async fn mock_json(server: &mut ServerGuard, path: &str, lat: &str, body: serde_json::Value) -> Mock {
    server
        .mock("GET", path)
        .match_query(query_for(lat))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

fn current_body(name: &str, temp: f64, humidity: u8, wind: f64) -> serde_json::Value {
    json!({
        "name": name,
        "timezone": 10800,
        "main": {"temp": temp, "feels_like": temp - 0.5, "humidity": humidity},
        "weather": [{"id": 800, "main": "Clear", "description": "açık"}],
        "wind": {"speed": wind, "deg": 90}
    })
}

fn forecast_body() -> serde_json::Value {
    let list: Vec<_> = (0..40)
        .map(|i| {
            json!({
                "dt": MIDNIGHT_JUNE_10 + i * 3 * 3600,
                "main": {"temp": 18.5, "humidity": 60},
                "weather": [{"id": 803, "description": "çok bulutlu"}],
                "wind": {"speed": 4.1}
            })
        })
        .collect();
    json!({"list": list, "city": {"name": "Ankara", "timezone": 10800}})
}

#[tokio::test]
async fn city_weather_uses_live_data() {
    let mut server = mockito::Server::new_async().await;
    let current = mock_json(&mut server, "/weather", "39.9334", current_body("Ankara", 26.2, 35, 2.0)).await;
    let forecast = mock_json(&mut server, "/forecast", "39.9334", forecast_body()).await;

    let text = service_for(&server).city_weather("ANKARA").await.unwrap();

    current.assert_async().await;
    forecast.assert_async().await;
    assert!(text.starts_with("🌤️ HAVA DURUMU: ANKARA 🌤️\n\nMEVCUT DURUM:\n"));
    assert!(text.contains("🌡️ Sıcaklık: 26.2°C (Hissedilen: 25.7°C)\n"));
    assert!(text.contains("🌬️ Rüzgar: 2 m/s, yönü doğu\n"));
    assert!(text.ends_with("14.06.2024 - 18.5°C, çok bulutlu"));
    assert!(!text.contains("DEMO"));
}

#[tokio::test]
async fn coordinates_fall_back_to_api_place_name() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_json(&mut server, "/weather", "40.5", current_body("Bilecik", 17.0, 70, 1.0)).await;
    let _mock = mock_json(&mut server, "/forecast", "40.5", forecast_body()).await;

    let text = service_for(&server).weather_at(40.5, 30.0, None).await.unwrap();
    assert!(text.starts_with("🌤️ HAVA DURUMU: BİLECİK 🌤️"));
}

#[tokio::test]
async fn upstream_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/weather")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"cod":401,"message":"Invalid API key"}"#)
        .create_async()
        .await;

    let err = service_for(&server).city_weather("İzmir").await.unwrap_err();
    assert!(!err.is_caller_error());
    assert_eq!(
        err.to_string(),
        r#"Hava durumu bilgisi alınamadı: HTTP hatası: 401 - {"cod":401,"message":"Invalid API key"}"#
    );
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/air_pollution")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>bakımda</html>")
        .create_async()
        .await;

    let err = service_for(&server).air_quality("Bursa").await.unwrap_err();
    assert!(err.to_string().starts_with("Hava kalitesi bilgisi alınamadı: Yanıt çözümlenemedi"));
}

#[tokio::test]
async fn hourly_forecast_for_one_day() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_json(&mut server, "/forecast", "37.8667", forecast_body()).await;

    let text = service_for(&server).hourly_forecast("konya", 1).await.unwrap();
    assert!(text.starts_with("🕒 Konya İÇİN SAATLİK HAVA DURUMU 🕒\n\n\n📅 10.06.2024 (Pazartesi)\n"));
    assert!(text.contains("03:00 - ☁️ 18.5°C, çok bulutlu, Nem: %60, Rüzgar: 4.1m/s\n"));
    assert_eq!(text.matches("°C, ").count(), 8);
}

#[tokio::test]
async fn air_quality_report() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_json(
        &mut server,
        "/air_pollution",
        "41.0082",
        json!({"list": [{"main": {"aqi": 4}, "components": {"pm2_5": 61.2, "pm10": 90.0, "o3": 12.0}}]}),
    )
    .await;

    let text = service_for(&server).air_quality("istanbul").await.unwrap();
    assert!(text.contains("Hava Kalitesi Endeksi (AQI): 4 - Sağlıksız\n"));
    assert!(text.contains("• Partiküller (PM2.5): 61.2 μg/m³\n"));
    assert!(text.contains("• Kükürt dioksit (SO₂): N/A μg/m³\n"));
}

#[tokio::test]
async fn compares_two_cities() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_json(&mut server, "/weather", "36.8841", current_body("Antalya", 33.0, 55, 3.0)).await;
    let _mock = mock_json(&mut server, "/weather", "40.1885", current_body("Bursa", 24.0, 65, 3.0)).await;

    let text = service_for(&server).compare_cities("Antalya", "Bursa").await.unwrap();
    assert!(text.starts_with("🔄 HAVA DURUMU KARŞILAŞTIRMASI 🔄\n"));
    assert!(text.contains("• Antalya, Bursa'dan daha sıcak.\n"));
    assert!(text.contains("• Antalya, Bursa'dan daha kuru.\n"));
    assert!(text.contains("• Antalya, Bursa'dan aynı seviyede.\n"));
}

#[tokio::test]
async fn comparison_reports_each_failure() {
    let mut server = mockito::Server::new_async().await;
    let failing = server
        .mock("GET", "/weather")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("down")
        .expect(2)
        .create_async()
        .await;

    let err = service_for(&server).compare_cities("Adana", "Mersin").await.unwrap_err();
    failing.assert_async().await;
    assert_eq!(
        err.to_string(),
        "Hava durumu karşılaştırması yapılamadı: Adana: HTTP hatası: 503 - down, Mersin: HTTP hatası: 503 - down"
    );
}

#[tokio::test]
async fn activities_survive_missing_forecast() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_json(&mut server, "/weather", "38.7312", current_body("Kayseri", 34.0, 20, 1.0)).await;
    let _forecast = server
        .mock("GET", "/forecast")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let text = service_for(&server).activity_suggestions("Kayseri").await.unwrap();
    assert!(text.contains("👍 ÖNERİLEN AKTİVİTELER (çok sıcak hava için):\n• Plaja gitme (uygunsa)\n"));
    assert!(text.ends_with("🔮 İLERİYE DÖNÜK TAHMİN:\n• Tahmin verisi alınamadı."));
}

#[tokio::test]
async fn unknown_city_is_a_caller_error() {
    let server = mockito::Server::new_async().await;
    let err = service_for(&server).city_weather("Gazi").await.unwrap_err();
    assert!(err.is_caller_error());
    assert_eq!(
        err.to_string(),
        "'Gazi' bulunamadı. Bunlardan birini mi demek istediniz? Gaziantep"
    );
}

#[tokio::test]
async fn demo_mode_never_calls_upstream() {
    let service = demo_service();
    assert!(service.is_demo());

    let weather = service.city_weather("Diyarbakır").await.unwrap();
    assert!(weather.starts_with("🌤️ HAVA DURUMU: DİYARBAKIR 🌤️\n(DEMO MODU"));

    let hourly = service.hourly_forecast("Adana", 2).await.unwrap();
    assert!(hourly.starts_with("🕒 Adana İÇİN SAATLİK HAVA DURUMU (DEMO) 🕒"));
    assert_eq!(hourly.matches("°C, ").count(), 48);

    let air = service.air_quality("Mersin").await.unwrap();
    assert!(air.contains("(DEMO)"));

    let comparison = service.compare_cities("Konya", "İzmir").await.unwrap();
    assert!(comparison.contains("• Konya, İzmir'dan "));

    let activities = service.activity_suggestions("Bursa").await.unwrap();
    assert!(activities.starts_with("🎯 Bursa İÇİN AKTİVİTE ÖNERİLERİ (DEMO) 🎯"));
}

#[tokio::test]
async fn demo_coordinates_use_nearby_city_name() {
    let service = demo_service();
    let text = service.weather_at(41.01, 28.98, None).await.unwrap();
    assert!(text.starts_with("🌤️ HAVA DURUMU: İSTANBUL 🌤️"));

    let text = service.weather_at(10.0, 10.0, None).await.unwrap();
    assert!(text.starts_with("🌤️ HAVA DURUMU: BİLİNMEYEN KONUM 🌤️"));
}

#[tokio::test]
async fn arguments_are_validated_before_lookup() {
    let service = demo_service();

    let err = service.weather_at(95.0, 0.0, Some("Kuzey")).await.unwrap_err();
    assert!(matches!(err, WeatherError::InvalidArgument(_)));

    let err = service.hourly_forecast("Bilinmeyen", 9).await.unwrap_err();
    assert_eq!(err.to_string(), "Geçersiz gün sayısı. Değer 1-5 arasında olmalıdır.");

    let err = service.air_quality("Paris").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "'Paris' için bilgi bulunamadı. Lütfen geçerli bir Türk şehri adı girin."
    );
}
