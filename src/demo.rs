//! Placeholder reports used when no API key is configured.
//!
//! Every generator takes its random source explicitly so tests can seed it.
//! Output mirrors the layout of the real reports, with a `DEMO` marker in the
//! title and a disclaimer footer.

use std::f64::consts::PI;

use chrono::{DateTime, Datelike, Duration, FixedOffset};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::activities::{Precipitation, Situation};
use crate::constants::demo_disclaimer;
use crate::formatters::{format_comparison, ComparisonColumn};
use crate::text::{aqi_advice, aqi_label, day_name, round1, turkish_uppercase, weather_emoji, COMPASS};

const CONDITIONS: &[&str] = &[
    "açık hava",
    "az bulutlu",
    "parçalı bulutlu",
    "çok bulutlu",
    "yağmurlu",
    "sağanak yağışlı",
    "gök gürültülü",
];

/// Conditions mild enough for a side-by-side comparison
const MILD_CONDITIONS: &[&str] = &[
    "açık hava",
    "az bulutlu",
    "parçalı bulutlu",
    "çok bulutlu",
    "yağmurlu",
];

const ACTIVITY_CONDITIONS: &[&str] = &[
    "açık hava",
    "az bulutlu",
    "parçalı bulutlu",
    "çok bulutlu",
    "yağmurlu",
    "karlı",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    round1(rng.random_range(low..=high))
}

pub fn weather<R: Rng + ?Sized>(rng: &mut R, label: &str, now: DateTime<FixedOffset>) -> String {
    let temp = uniform(rng, 5.0, 35.0);
    let feels_like = round1(temp + rng.random_range(-3.0..=3.0));
    let humidity: u8 = rng.random_range(30..=95);
    let condition = pick(rng, CONDITIONS);
    let wind = uniform(rng, 0.0, 12.0);
    let direction = pick(rng, &COMPASS);

    let mut output = format!(
        "🌤️ HAVA DURUMU: {} 🌤️\n(DEMO MODU - API anahtarı gerekli)\n\n\
         MEVCUT DURUM:\n\
         🌡️ Sıcaklık: {:.1}°C (Hissedilen: {:.1}°C)\n\
         💧 Nem: %{}\n\
         🌬️ Rüzgar: {:.1} m/s, yönü {}\n\
         🔍 Durum: {}\n\n\
         5 GÜNLÜK TAHMİN:\n",
        turkish_uppercase(label),
        temp,
        feels_like,
        humidity,
        wind,
        direction,
        condition
    );

    let days: Vec<String> = (1..=5)
        .map(|offset| {
            let date = now + Duration::days(offset);
            format!(
                "{} - {:.1}°C, {}",
                date.format("%d.%m.%Y"),
                round1(temp + rng.random_range(-5.0..=5.0)),
                pick(rng, CONDITIONS)
            )
        })
        .collect();
    output.push_str(&days.join("\n"));
    output.push_str("\n\n");
    output.push_str(&demo_disclaimer("hava durumu"));
    output
}

pub fn hourly<R: Rng + ?Sized>(
    rng: &mut R,
    city: &str,
    days: u32,
    now: DateTime<FixedOffset>,
) -> String {
    let mut output = format!("🕒 {} İÇİN SAATLİK HAVA DURUMU (DEMO) 🕒\n\n", city);
    let mut current_date = None;

    for i in 0..days * 24 {
        let time = now + Duration::hours(i64::from(i));
        if current_date != Some(time.date_naive()) {
            current_date = Some(time.date_naive());
            output.push_str(&format!(
                "\n📅 {} ({})\n",
                time.format("%d.%m.%Y"),
                day_name(time.weekday().num_days_from_monday())
            ));
        }

        // one full warm/cool cycle per day
        let temp = round1(20.0 + 5.0 * (f64::from(i) / 12.0 * PI).sin() + rng.random_range(-2.0..=2.0));
        let condition = pick(rng, CONDITIONS);
        let humidity: u8 = rng.random_range(40..=90);
        let wind = uniform(rng, 1.0, 8.0);

        output.push_str(&format!(
            "{} - {} {:.1}°C, {}, Nem: %{}, Rüzgar: {:.1}m/s\n",
            time.format("%H:%M"),
            weather_emoji(condition),
            temp,
            condition,
            humidity,
            wind
        ));
    }

    output.push('\n');
    output.push_str(&demo_disclaimer("hava durumu"));
    output
}

pub fn air_quality<R: Rng + ?Sized>(rng: &mut R, city: &str) -> String {
    let aqi: u8 = rng.random_range(1..=5);
    let pm25 = uniform(rng, 5.0, 50.0);
    let pm10 = round1(pm25 * rng.random_range(1.2..=2.0));
    let o3 = uniform(rng, 20.0, 180.0);
    let no2 = uniform(rng, 10.0, 100.0);
    let so2 = uniform(rng, 5.0, 40.0);
    let co = uniform(rng, 300.0, 1500.0);

    format!(
        "🌬️ {city} HAVA KALİTESİ (DEMO) 🌬️\n\n\
         Hava Kalitesi Endeksi (AQI): {aqi} - {label}\n\n\
         🔍 KİRLETİCİLER:\n\
         • Partiküller (PM2.5): {pm25:.1} μg/m³\n\
         • Partiküller (PM10): {pm10:.1} μg/m³\n\
         • Ozon (O₃): {o3:.1} μg/m³\n\
         • Nitrojen dioksit (NO₂): {no2:.1} μg/m³\n\
         • Kükürt dioksit (SO₂): {so2:.1} μg/m³\n\
         • Karbon monoksit (CO): {co:.1} μg/m³\n\n\
         💡 TAVSİYELER:\n{advice}\n\n{footer}\n",
        label = aqi_label(aqi),
        advice = aqi_advice(aqi),
        footer = demo_disclaimer("hava kalitesi"),
    )
}

fn random_column<'a, R: Rng + ?Sized>(rng: &mut R, city: &'a str) -> ComparisonColumn<'a> {
    let temp = uniform(rng, 10.0, 30.0);
    ComparisonColumn {
        city,
        temp: Some(temp),
        feels_like: Some(round1(temp + rng.random_range(-3.0..=3.0))),
        humidity: Some(f64::from(rng.random_range(30u8..=90))),
        wind: Some(uniform(rng, 1.0, 10.0)),
        condition: pick(rng, MILD_CONDITIONS),
    }
}

pub fn comparison<R: Rng + ?Sized>(rng: &mut R, first: &str, second: &str) -> String {
    let a = random_column(rng, first);
    let b = random_column(rng, second);

    let mut output = format_comparison("HAVA DURUMU KARŞILAŞTIRMASI (DEMO)", &a, &b);
    output.push('\n');
    output.push_str(&demo_disclaimer("karşılaştırma"));
    output
}

pub fn activities<R: Rng + ?Sized>(rng: &mut R, city: &str) -> String {
    let temp = uniform(rng, 5.0, 35.0);
    let condition = pick(rng, ACTIVITY_CONDITIONS);
    let wind = uniform(rng, 0.0, 10.0);
    let situation = Situation::classify(Precipitation::from_description(condition), wind, temp);

    format!(
        "🎯 {} İÇİN AKTİVİTE ÖNERİLERİ (DEMO) 🎯\n\n\
         📝 GÜNCEL HAVA DURUMU:\n\
         • Sıcaklık: {:.1}°C\n\
         • Durum: {}\n\
         • Rüzgar: {:.1} m/s\n\n\
         {}\n{}",
        city,
        temp,
        condition,
        wind,
        situation.render(),
        demo_disclaimer("öneriler")
    )
}
