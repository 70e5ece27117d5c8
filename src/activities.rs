//! Weather-driven activity suggestions.

const INDOOR: &[&str] = &[
    "Müze ziyareti",
    "Alışveriş merkezi gezisi",
    "Kafe veya restoranda vakit geçirme",
    "Sinema filmi izleme",
    "Kitap okuma",
    "Yerel sergi ziyareti",
];

const OUTDOOR: &[&str] = &[
    "Yürüyüş yapma",
    "Bisiklet sürme",
    "Parkta piknik yapma",
    "Şehir turu",
    "Açık hava kafelerinde oturma",
    "Sahil kenarında gezinme (uygunsa)",
];

pub const MAX_RECOMMENDED: usize = 5;
pub const MAX_DISCOURAGED: usize = 3;

/// Wind speed (m/s) from which the breeze counts as moderate
pub const WINDY_MPS: f64 = 5.5;
pub const HOT_CELSIUS: f64 = 30.0;
pub const COLD_CELSIUS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precipitation {
    Rain,
    Snow,
}

impl Precipitation {
    /// Classifies an OpenWeatherMap condition code
    pub fn from_condition_id(id: u16) -> Option<Self> {
        match id {
            600..=699 => Some(Self::Snow),
            200..=599 => Some(Self::Rain),
            _ => None,
        }
    }

    /// Classifies a Turkish condition description
    pub fn from_description(description: &str) -> Option<Self> {
        let description = description.to_lowercase();
        if description.contains("kar") {
            Some(Self::Snow)
        } else if ["yağmur", "sağanak", "gök gürültülü", "çisenti"]
            .iter()
            .any(|w| description.contains(w))
        {
            Some(Self::Rain)
        } else {
            None
        }
    }
}

/// Weather situation an activity plan is chosen for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Situation {
    Wet(Precipitation),
    Windy,
    Hot,
    Cold,
    Fair,
}

impl Situation {
    /// Precipitation wins over wind, wind over temperature
    pub fn classify(precipitation: Option<Precipitation>, wind_mps: f64, temp_celsius: f64) -> Self {
        if let Some(p) = precipitation {
            Self::Wet(p)
        } else if wind_mps > WINDY_MPS {
            Self::Windy
        } else if temp_celsius > HOT_CELSIUS {
            Self::Hot
        } else if temp_celsius < COLD_CELSIUS {
            Self::Cold
        } else {
            Self::Fair
        }
    }

    /// Phrase completing "önerilen aktiviteler (... için)"
    pub fn reason(self) -> &'static str {
        match self {
            Self::Wet(Precipitation::Rain) => "yağışlı hava",
            Self::Wet(Precipitation::Snow) => "karlı hava",
            Self::Windy => "rüzgarlı hava",
            Self::Hot => "çok sıcak hava",
            Self::Cold => "soğuk hava",
            Self::Fair => "güzel hava",
        }
    }

    pub fn recommended(self) -> Vec<&'static str> {
        let list: Vec<&'static str> = match self {
            Self::Wet(_) => INDOOR.to_vec(),
            Self::Windy => vec![
                "Kapalı mekan aktiviteleri",
                "Rüzgardan korunaklı kafelerde oturma",
                "Müze ziyareti",
                "Alışveriş merkezi gezisi",
            ],
            Self::Hot => vec![
                "Plaja gitme (uygunsa)",
                "Su parkı ziyareti",
                "Gölgeli parklar",
                "Klimalı mekanlarda vakit geçirme",
            ],
            Self::Cold => {
                let mut list = vec!["Sıcak içeceklerin tadını çıkarma"];
                list.extend_from_slice(INDOOR);
                list
            }
            Self::Fair => OUTDOOR.to_vec(),
        };
        list.into_iter().take(MAX_RECOMMENDED).collect()
    }

    pub fn discouraged(self) -> Vec<&'static str> {
        let list: &[&'static str] = match self {
            Self::Wet(_) => OUTDOOR,
            Self::Windy => &["Bisiklet sürme", "Parkta piknik yapma", "Açık hava etkinlikleri"],
            Self::Hot => &[
                "Uzun yürüyüşler",
                "Güneş altında uzun süre kalmak",
                "Fiziksel olarak yorucu aktiviteler",
            ],
            Self::Cold => &["Uzun süre dışarıda kalmak", "Su aktiviteleri"],
            Self::Fair => &[],
        };
        list.iter().copied().take(MAX_DISCOURAGED).collect()
    }

    /// Renders the recommended and discouraged sections
    pub fn render(self) -> String {
        let mut output = format!("👍 ÖNERİLEN AKTİVİTELER ({} için):\n", self.reason());
        for activity in self.recommended() {
            output.push_str(&format!("• {}\n", activity));
        }

        let discouraged = self.discouraged();
        if !discouraged.is_empty() {
            output.push_str("\n👎 KAÇINILMASI GEREKEN AKTİVİTELER:\n");
            for activity in discouraged {
                output.push_str(&format!("• {}\n", activity));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precipitation_beats_wind_and_heat() {
        assert_eq!(
            Situation::classify(Some(Precipitation::Snow), 12.0, 35.0),
            Situation::Wet(Precipitation::Snow)
        );
        assert_eq!(Situation::classify(None, 6.0, 35.0), Situation::Windy);
        assert_eq!(Situation::classify(None, 5.5, 35.0), Situation::Hot);
        assert_eq!(Situation::classify(None, 1.0, 2.0), Situation::Cold);
        assert_eq!(Situation::classify(None, 1.0, 20.0), Situation::Fair);
    }

    #[test]
    fn condition_codes() {
        assert_eq!(Precipitation::from_condition_id(211), Some(Precipitation::Rain));
        assert_eq!(Precipitation::from_condition_id(301), Some(Precipitation::Rain));
        assert_eq!(Precipitation::from_condition_id(601), Some(Precipitation::Snow));
        assert_eq!(Precipitation::from_condition_id(701), None);
        assert_eq!(Precipitation::from_condition_id(800), None);
    }

    #[test]
    fn descriptions() {
        assert_eq!(Precipitation::from_description("yağmurlu"), Some(Precipitation::Rain));
        assert_eq!(Precipitation::from_description("karlı"), Some(Precipitation::Snow));
        assert_eq!(Precipitation::from_description("az bulutlu"), None);
    }

    #[test]
    fn lists_are_capped() {
        for situation in [
            Situation::Wet(Precipitation::Rain),
            Situation::Windy,
            Situation::Hot,
            Situation::Cold,
            Situation::Fair,
        ] {
            assert!(situation.recommended().len() <= MAX_RECOMMENDED);
            assert!(situation.discouraged().len() <= MAX_DISCOURAGED);
        }
        assert_eq!(Situation::Wet(Precipitation::Rain).discouraged().len(), 3);
    }

    #[test]
    fn fair_weather_has_nothing_to_avoid() {
        let text = Situation::Fair.render();
        assert!(text.starts_with("👍 ÖNERİLEN AKTİVİTELER (güzel hava için):\n• Yürüyüş yapma\n"));
        assert!(!text.contains("KAÇINILMASI"));
    }
}
