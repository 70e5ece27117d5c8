//! MCP server exposing Turkish-language weather tools for Turkish cities.
//!
//! Data comes from the OpenWeatherMap API. Without an API key every tool
//! answers with clearly labeled demo data instead.

pub mod activities;
pub mod api;
pub mod cities;
pub mod config;
pub mod constants;
pub mod demo;
pub mod error;
pub mod formatters;
pub mod models;
pub mod service;
pub mod text;

pub use config::Config;
pub use error::WeatherError;
pub use service::TurkeyWeather;
