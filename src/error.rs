//! Error types for weather lookups.
//!
//! Messages are Turkish since they are shown verbatim to the MCP client.

use thiserror::Error;

/// Errors produced while resolving a city, calling the upstream API or
/// building a report
#[derive(Error, Debug)]
pub enum WeatherError {
    /// No usable API key is configured; callers fall back to demo data
    #[error("Demo modu: geçerli bir OpenWeatherMap API anahtarı yapılandırılmamış")]
    DemoMode,

    /// Upstream answered with a non-success status
    #[error("HTTP hatası: {status} - {body}")]
    Status { status: u16, body: String },

    /// Transport failure (connect, timeout, TLS)
    #[error("İstek hatası: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("Yanıt çözümlenemedi: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response decoded but carried no usable data
    #[error("Yanıtta veri yok: {0}")]
    MissingData(&'static str),

    /// City name did not match the registry
    #[error("{}", unknown_city_message(.input, .suggestions))]
    UnknownCity {
        input: String,
        suggestions: Vec<String>,
    },

    /// Tool argument outside its accepted range
    #[error("{0}")]
    InvalidArgument(String),

    /// An upstream step failed; `what` names the data that could not be fetched
    #[error("{what} alınamadı: {source}")]
    Fetch {
        what: &'static str,
        #[source]
        source: Box<WeatherError>,
    },

    /// One or both sides of a city comparison failed
    #[error("Hava durumu karşılaştırması yapılamadı: {}", join_failures(.0))]
    Comparison(Vec<(String, WeatherError)>),
}

impl WeatherError {
    /// Tags an upstream failure with the data it was fetching
    pub fn during(self, what: &'static str) -> Self {
        match self {
            Self::DemoMode | Self::UnknownCity { .. } | Self::InvalidArgument(_) => self,
            other => Self::Fetch {
                what,
                source: Box::new(other),
            },
        }
    }

    /// True when the caller supplied bad input rather than the upstream failing
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::UnknownCity { .. } | Self::InvalidArgument(_))
    }
}

fn unknown_city_message(input: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        format!(
            "'{}' için bilgi bulunamadı. Lütfen geçerli bir Türk şehri adı girin.",
            input
        )
    } else {
        format!(
            "'{}' bulunamadı. Bunlardan birini mi demek istediniz? {}",
            input,
            suggestions.join(", ")
        )
    }
}

fn join_failures(failures: &[(String, WeatherError)]) -> String {
    failures
        .iter()
        .map(|(city, err)| format!("{}: {}", city, err))
        .collect::<Vec<_>>()
        .join(", ")
}
