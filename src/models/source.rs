use serde::{Deserialize, Serialize};

/// Provenance tag carried by every sample handed to the prediction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    LiveWeather,
    LiveSoil,
    LiveRegional,
    EstimatedWeather,
    EstimatedSoil,
    RegionalCensus,
    Manual,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::LiveWeather => "Open-Meteo + NASA POWER (Live data)",
            DataSource::LiveSoil => "ISRIC SoilGrids (Live data)",
            DataSource::LiveRegional => "NASA POWER Agricultural (Live data)",
            DataSource::EstimatedWeather => "Location-based Estimation (Fallback)",
            DataSource::EstimatedSoil => "Soil Geography Database (Fallback)",
            DataSource::RegionalCensus => "Agricultural Census (Fallback)",
            DataSource::Manual => "Manual",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            DataSource::EstimatedWeather | DataSource::EstimatedSoil | DataSource::RegionalCensus
        )
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
