//! Turkish string tables shared by real and demo reports.

use crate::constants::NOT_AVAILABLE;

const DAY_NAMES: [&str; 7] = [
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
    "Pazar",
];

pub const COMPASS: [&str; 8] = [
    "kuzey",
    "kuzeydoğu",
    "doğu",
    "güneydoğu",
    "güney",
    "güneybatı",
    "batı",
    "kuzeybatı",
];

/// Uppercases with Turkish casing rules, so "İzmir" becomes "İZMİR"
pub fn turkish_uppercase(text: &str) -> String {
    text.chars()
        .flat_map(|c| match c {
            'i' => vec!['İ'],
            'ı' => vec!['I'],
            other => other.to_uppercase().collect(),
        })
        .collect()
}

/// Picks an emoji for a Turkish condition description such as "parçalı bulutlu"
pub fn weather_emoji(condition: &str) -> &'static str {
    let condition = condition.to_lowercase();
    let has = |needle: &str| condition.contains(needle);

    if has("açık") {
        "☀️"
    } else if has("az bulutlu") {
        "🌤️"
    } else if has("parçalı bulutlu") {
        "⛅"
    } else if has("çok bulutlu") {
        "☁️"
    } else if has("yağmur") || has("sağanak") {
        "🌧️"
    } else if has("kar") {
        "❄️"
    } else if has("sis") {
        "🌫️"
    } else if has("fırtına") || has("gök gürültülü") {
        "⛈️"
    } else {
        "🌡️"
    }
}

/// Turkish weekday name, Monday = 0
pub fn day_name(days_from_monday: u32) -> &'static str {
    DAY_NAMES[days_from_monday as usize % DAY_NAMES.len()]
}

/// Eight-point compass direction the wind blows from
pub fn wind_direction(degrees: f64) -> &'static str {
    let sector = (degrees.rem_euclid(360.0) / 45.0).round() as usize;
    COMPASS[sector % COMPASS.len()]
}

pub fn aqi_label(aqi: u8) -> &'static str {
    match aqi {
        0 => "Bilgi yok",
        1 => "İyi",
        2 => "Makul",
        3 => "Hassas gruplar için sağlıksız",
        4 => "Sağlıksız",
        5 => "Çok sağlıksız",
        _ => "Tehlikeli",
    }
}

pub fn aqi_advice(aqi: u8) -> &'static str {
    match aqi {
        1 => "Hava kalitesi mükemmel. Açık hava aktivitelerinden güvenle yararlanabilirsiniz.",
        2 => "Hava kalitesi iyi. Çoğu insan için açık hava aktiviteleri güvenlidir.",
        3 => "Hassas gruplar (astım hastaları, yaşlılar, çocuklar) uzun süreli açık hava aktivitelerini sınırlamalıdır.",
        4 => "Herkes açık hava aktivitelerini azaltmalıdır. Hassas gruplar mümkünse içeride kalmalıdır.",
        5 => "Sağlık uyarısı: Herkes açık hava aktivitelerini ciddi şekilde sınırlamalı ve mümkünse içeride kalmalıdır.",
        _ => "Acil durum koşulları: Tüm fiziksel dış mekan aktivitelerinden kaçının ve pencerelerinizi kapalı tutun.",
    }
}

/// Describes how `first` relates to `second`
pub fn compare(
    first: Option<f64>,
    second: Option<f64>,
    higher: &'static str,
    lower: &'static str,
) -> &'static str {
    match (first, second) {
        (Some(a), Some(b)) if a > b => higher,
        (Some(a), Some(b)) if a < b => lower,
        (Some(_), Some(_)) => "aynı seviyede",
        _ => "karşılaştırılamıyor",
    }
}

/// Renders an optional reading, "N/A" when absent
pub fn reading(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Rounds to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
