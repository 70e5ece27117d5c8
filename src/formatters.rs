use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Utc};

use crate::activities::{Precipitation, Situation};
use crate::cities;
use crate::constants::{TURKEY_UTC_OFFSET_SECS, UNKNOWN_LOCATION};
use crate::error::WeatherError;
use crate::models::{AirPollution, CurrentWeather, Forecast, ForecastItem};
use crate::text::{
    aqi_advice, aqi_label, compare, day_name, reading, turkish_uppercase, weather_emoji,
    wind_direction,
};

/// Number of distinct days in the daily summary
const DAILY_SUMMARY_DAYS: usize = 5;

const TABLE_LABEL_WIDTH: usize = 19;
/// Cells widen beyond this to fit long city names or descriptions
const TABLE_MIN_CELL_WIDTH: usize = 14;

/// UTC offset for a timezone shift in seconds, Turkey time when unknown
pub fn local_offset(shift_secs: Option<i32>) -> FixedOffset {
    FixedOffset::east_opt(shift_secs.unwrap_or(TURKEY_UTC_OFFSET_SECS)).unwrap_or_else(|| Utc.fix())
}

fn local_time(timestamp: i64, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(offset))
}

fn description_or_na(description: Option<&str>) -> &str {
    description.unwrap_or(crate::constants::NOT_AVAILABLE)
}

/// Formats current conditions plus a five-day summary
pub fn format_weather(label: &str, current: &CurrentWeather, forecast: &Forecast) -> String {
    let wind_text = current
        .wind
        .deg
        .map(wind_direction)
        .unwrap_or(crate::constants::NOT_AVAILABLE);

    let mut output = format!(
        "🌤️ HAVA DURUMU: {} 🌤️\n\nMEVCUT DURUM:\n🌡️ Sıcaklık: {}°C (Hissedilen: {}°C)\n💧 Nem: %{}\n🌬️ Rüzgar: {} m/s, yönü {}\n🔍 Durum: {}\n\n5 GÜNLÜK TAHMİN:\n",
        turkish_uppercase(label),
        reading(current.main.temp),
        reading(current.main.feels_like),
        reading(current.main.humidity),
        reading(current.wind.speed),
        wind_text,
        description_or_na(current.description()),
    );

    let offset = local_offset(forecast.timezone().or(current.timezone));
    let mut seen: Vec<NaiveDate> = Vec::new();
    let mut days = Vec::new();

    for item in &forecast.list {
        let Some(time) = local_time(item.dt, &offset) else {
            continue;
        };
        let date = time.date_naive();
        if seen.contains(&date) {
            continue;
        }
        if seen.len() == DAILY_SUMMARY_DAYS {
            break;
        }
        seen.push(date);
        days.push(format!(
            "{} - {}°C, {}",
            time.format("%d.%m.%Y"),
            reading(item.main.temp),
            description_or_na(item.description())
        ));
    }

    output.push_str(&days.join("\n"));
    output
}

/// Label for a coordinate lookup: caller's name, else the API's, else unknown
pub fn location_label(requested: Option<&str>, current: &CurrentWeather) -> String {
    requested
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .or_else(|| current.name.as_deref().filter(|name| !name.is_empty()))
        .unwrap_or(UNKNOWN_LOCATION)
        .to_string()
}

/// Formats forecast entries within the first `days` days, grouped by date
pub fn format_hourly(city: &str, forecast: &Forecast, days: u32) -> String {
    let mut output = format!("🕒 {} İÇİN SAATLİK HAVA DURUMU 🕒\n\n", city);

    let offset = local_offset(forecast.timezone());
    let Some(first) = forecast.list.first() else {
        output.push_str("Tahmin verisi bulunamadı.\n");
        return output;
    };
    let window_end = first.dt + i64::from(days) * 24 * 3600;

    let mut current_date = None;
    for item in forecast.list.iter().take_while(|item| item.dt < window_end) {
        let Some(time) = local_time(item.dt, &offset) else {
            continue;
        };
        if current_date != Some(time.date_naive()) {
            current_date = Some(time.date_naive());
            output.push_str(&format!(
                "\n📅 {} ({})\n",
                time.format("%d.%m.%Y"),
                day_name(time.weekday().num_days_from_monday())
            ));
        }
        output.push_str(&hourly_line(&time, item));
    }
    output
}

fn hourly_line(time: &DateTime<FixedOffset>, item: &ForecastItem) -> String {
    let condition = description_or_na(item.description());
    format!(
        "{} - {} {}°C, {}, Nem: %{}, Rüzgar: {}m/s\n",
        time.format("%H:%M"),
        weather_emoji(condition),
        reading(item.main.temp),
        condition,
        reading(item.main.humidity),
        reading(item.wind.speed)
    )
}

/// Formats the latest air pollution sample
pub fn format_air_quality(city: &str, pollution: &AirPollution) -> Result<String, WeatherError> {
    let sample = pollution
        .list
        .first()
        .ok_or(WeatherError::MissingData("hava kirliliği ölçümü"))?;
    let aqi = sample.main.aqi;
    let c = &sample.components;

    Ok(format!(
        "🌬️ {city} HAVA KALİTESİ 🌬️\n\n\
         Hava Kalitesi Endeksi (AQI): {aqi} - {label}\n\n\
         🔍 KİRLETİCİLER:\n\
         • Partiküller (PM2.5): {pm25} μg/m³\n\
         • Partiküller (PM10): {pm10} μg/m³\n\
         • Ozon (O₃): {o3} μg/m³\n\
         • Nitrojen dioksit (NO₂): {no2} μg/m³\n\
         • Kükürt dioksit (SO₂): {so2} μg/m³\n\
         • Karbon monoksit (CO): {co} μg/m³\n\n\
         💡 TAVSİYELER:\n{advice}\n",
        label = aqi_label(aqi),
        pm25 = reading(c.pm2_5),
        pm10 = reading(c.pm10),
        o3 = reading(c.o3),
        no2 = reading(c.no2),
        so2 = reading(c.so2),
        co = reading(c.co),
        advice = aqi_advice(aqi),
    ))
}

/// Values for one column of the comparison table
pub struct ComparisonColumn<'a> {
    pub city: &'a str,
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub wind: Option<f64>,
    pub condition: &'a str,
}

impl<'a> ComparisonColumn<'a> {
    pub fn from_weather(city: &'a str, weather: &'a CurrentWeather) -> Self {
        Self {
            city,
            temp: weather.main.temp,
            feels_like: weather.main.feels_like,
            humidity: weather.main.humidity,
            wind: weather.wind.speed,
            condition: description_or_na(weather.description()),
        }
    }
}

/// Formats two cities side by side, followed by plain-language comparisons
pub fn format_comparison(title: &str, a: &ComparisonColumn<'_>, b: &ComparisonColumn<'_>) -> String {
    let with_unit = |value: Option<f64>, suffix: &str| match value {
        Some(v) => format!("{}{}", v, suffix),
        None => reading(None),
    };
    let rows = [
        ("", a.city.to_string(), b.city.to_string()),
        ("Sıcaklık", with_unit(a.temp, "°C"), with_unit(b.temp, "°C")),
        ("Hissedilen", with_unit(a.feels_like, "°C"), with_unit(b.feels_like, "°C")),
        ("Nem", format!("%{}", reading(a.humidity)), format!("%{}", reading(b.humidity))),
        ("Rüzgar", with_unit(a.wind, " m/s"), with_unit(b.wind, " m/s")),
        ("Durum", a.condition.to_string(), b.condition.to_string()),
    ];
    let cell_width = rows
        .iter()
        .flat_map(|(_, left, right)| [left.chars().count(), right.chars().count()])
        .fold(TABLE_MIN_CELL_WIDTH, usize::max);

    let rule = |left: char, mid: char, right: char| {
        format!(
            "{left}{}{mid}{}{mid}{}{right}\n",
            "─".repeat(TABLE_LABEL_WIDTH + 2),
            "─".repeat(cell_width + 2),
            "─".repeat(cell_width + 2),
        )
    };
    let row = |(label, left, right): &(&str, String, String)| {
        format!(
            "│ {:<lw$} │ {:<cw$} │ {:<cw$} │\n",
            label,
            left,
            right,
            lw = TABLE_LABEL_WIDTH,
            cw = cell_width
        )
    };

    let mut output = format!("🔄 {} 🔄\n\n", title);
    output.push_str(&rule('┌', '┬', '┐'));
    output.push_str(&row(&rows[0]));
    output.push_str(&rule('├', '┼', '┤'));
    for r in &rows[1..] {
        output.push_str(&row(r));
    }
    output.push_str(&rule('└', '┴', '┘'));

    output.push_str("\n📊 KARŞILAŞTIRMA:\n");
    for verdict in [
        compare(a.temp, b.temp, "daha sıcak", "daha soğuk"),
        compare(a.humidity, b.humidity, "daha nemli", "daha kuru"),
        compare(a.wind, b.wind, "daha rüzgarlı", "daha sakin"),
    ] {
        output.push_str(&format!("• {}, {}'dan {}.\n", a.city, b.city, verdict));
    }
    output
}

/// Temperature assumed when the API omits one
const FALLBACK_TEMP: f64 = 20.0;

/// Formats activity suggestions for current conditions plus a next-day outlook
pub fn format_activities(
    city: &str,
    current: &CurrentWeather,
    forecast: Option<&Forecast>,
    now: DateTime<Utc>,
) -> String {
    let temp = current.main.temp.unwrap_or(FALLBACK_TEMP);
    let wind = current.wind.speed.unwrap_or(0.0);
    let precipitation = current
        .condition()
        .and_then(|c| c.id)
        .and_then(Precipitation::from_condition_id);
    let situation = Situation::classify(precipitation, wind, temp);

    let mut output = format!(
        "🎯 {} İÇİN AKTİVİTE ÖNERİLERİ 🎯\n\n📝 GÜNCEL HAVA DURUMU:\n• Sıcaklık: {}°C\n• Durum: {}\n• Rüzgar: {} m/s\n\n",
        city,
        temp,
        current.description().unwrap_or("bilinmiyor"),
        wind
    );
    output.push_str(&situation.render());
    output.push_str("\n🔮 İLERİYE DÖNÜK TAHMİN:\n");
    output.push_str(&outlook(temp, forecast, current.timezone, now));
    output
}

fn outlook(current_temp: f64, forecast: Option<&Forecast>, shift: Option<i32>, now: DateTime<Utc>) -> String {
    let Some(forecast) = forecast else {
        return "• Tahmin verisi alınamadı.".to_string();
    };
    let offset = local_offset(forecast.timezone().or(shift));
    let today = now.with_timezone(&offset).date_naive();

    let next = forecast.list.iter().find_map(|item| {
        let time = local_time(item.dt, &offset)?;
        (time.date_naive() > today).then_some((time, item))
    });
    let Some((time, item)) = next else {
        return "• Yarın için tahmin verisi bulunamadı.".to_string();
    };

    let change = match item.main.temp {
        Some(next_temp) => {
            let delta = next_temp - current_temp;
            if delta.abs() < 0.05 {
                "aynı sıcaklıkta".to_string()
            } else if delta > 0.0 {
                format!("{:.1}°C daha sıcak", delta.abs())
            } else {
                format!("{:.1}°C daha soğuk", delta.abs())
            }
        }
        None => "belirsiz".to_string(),
    };

    format!(
        "• {} tarihinde hava {} olacak ve {} bekleniyor.",
        time.format("%d.%m.%Y"),
        change,
        description_or_na(item.description())
    )
}

pub fn format_alerts_notice() -> String {
    "🚨 TÜRKİYE HAVA DURUMU ALARMLARI 🚨\n\n\
     ⚠️ Meteoroloji Genel Müdürlüğü (MGM) tarafından yayınlanan resmi alarm bilgilerini görüntülemek için lütfen MGM'nin resmi web sitesini veya mobil uygulamasını kullanınız.\n\n\
     🔗 https://www.mgm.gov.tr/\n\n\
     Bu araç gerçek zamanlı alarm verilerine bağlı değildir."
        .to_string()
}

pub fn format_city_list() -> String {
    let lines: Vec<String> = cities::all().map(|c| format!("• {}", c.name)).collect();
    format!("📍 KAYITLI ŞEHİRLER 📍\n\n{}", lines.join("\n"))
}
