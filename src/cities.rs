//! Registry of supported Turkish cities and Turkish-aware name matching.

use crate::error::WeatherError;
use crate::models::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// Normalized lookup key
    pub key: &'static str,
    /// Display name with Turkish letters
    pub name: &'static str,
    pub coordinates: Coordinates,
}

const fn city(key: &'static str, name: &'static str, lat: f64, lon: f64) -> City {
    City {
        key,
        name,
        coordinates: Coordinates::new(lat, lon),
    }
}

/// Sorted by key
static CITIES: &[City] = &[
    city("adana", "Adana", 37.0000, 35.3213),
    city("ankara", "Ankara", 39.9334, 32.8597),
    city("antalya", "Antalya", 36.8841, 30.7056),
    city("bursa", "Bursa", 40.1885, 29.0610),
    city("diyarbakir", "Diyarbakır", 37.9144, 40.2306),
    city("gaziantep", "Gaziantep", 37.0662, 37.3833),
    city("istanbul", "İstanbul", 41.0082, 28.9784),
    city("izmir", "İzmir", 38.4237, 27.1428),
    city("kayseri", "Kayseri", 38.7312, 35.4787),
    city("konya", "Konya", 37.8667, 32.4833),
    city("mersin", "Mersin", 36.8000, 34.6333),
];

/// How close (in degrees, on each axis) coordinates must be to count as a city
const NEAR_DEGREES: f64 = 0.1;

pub fn all() -> impl Iterator<Item = &'static City> {
    CITIES.iter()
}

/// Folds a Turkish place name to the lowercase ASCII form used as lookup key
pub fn normalize_turkish(text: &str) -> String {
    text.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .filter_map(fold_char)
        .collect()
}

fn fold_char(c: char) -> Option<char> {
    let folded = match c {
        'ı' | 'î' | 'ì' | 'í' | 'ï' => 'i',
        'ğ' => 'g',
        'ü' | 'û' | 'ù' | 'ú' => 'u',
        'ş' => 's',
        'ö' | 'ô' | 'ò' | 'ó' => 'o',
        'ç' => 'c',
        'â' | 'à' | 'á' | 'ä' => 'a',
        'ê' | 'è' | 'é' | 'ë' => 'e',
        // combining marks, e.g. the dot left behind by lowercasing 'İ'
        '\u{0300}'..='\u{036f}' => return None,
        other => other,
    };
    Some(folded)
}

/// Looks up a city by any spelling that normalizes to its key
pub fn resolve(input: &str) -> Result<&'static City, WeatherError> {
    let normalized = normalize_turkish(input);

    if let Some(city) = CITIES.iter().find(|c| c.key == normalized) {
        return Ok(city);
    }

    let suggestions = if normalized.is_empty() {
        Vec::new()
    } else {
        CITIES
            .iter()
            .filter(|c| c.key.contains(&normalized))
            .map(|c| c.name.to_string())
            .collect()
    };

    Err(WeatherError::UnknownCity {
        input: input.to_string(),
        suggestions,
    })
}

/// First registered city within a tenth of a degree of `coordinates`
pub fn find_near(coordinates: Coordinates) -> Option<&'static City> {
    CITIES.iter().find(|c| {
        (c.coordinates.lat - coordinates.lat).abs() < NEAR_DEGREES
            && (c.coordinates.lon - coordinates.lon).abs() < NEAR_DEGREES
    })
}
