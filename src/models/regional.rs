use super::DataSource;
use serde::{Deserialize, Serialize};

/// India's three cropping seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    /// Internal key, as stored on a regional profile.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
        }
    }

    /// Display form used on weather samples.
    pub fn label(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif (Monsoon)",
            Season::Rabi => "Rabi (Winter)",
            Season::Zaid => "Zaid (Summer)",
        }
    }

    pub fn planting_window(&self) -> &'static str {
        match self {
            Season::Kharif => "June to October (Monsoon Season)",
            Season::Rabi => "November to April (Winter Season)",
            Season::Zaid => "April to June (Summer Season)",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s.starts_with("kharif") || s.contains("(kharif)") {
            Some(Season::Kharif)
        } else if s.starts_with("rabi") || s.contains("(rabi)") {
            Some(Season::Rabi)
        } else if s.starts_with("zaid") || s.contains("(zaid)") {
            Some(Season::Zaid)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropIntensity {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl CropIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropIntensity::Low => "Low",
            CropIntensity::Medium => "Medium",
            CropIntensity::High => "High",
            CropIntensity::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for CropIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketAccess {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Moderate,
}

impl MarketAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketAccess::Excellent => "Excellent",
            MarketAccess::VeryGood => "Very Good",
            MarketAccess::Good => "Good",
            MarketAccess::Moderate => "Moderate",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            MarketAccess::Excellent => 1.1,
            MarketAccess::VeryGood => 1.05,
            MarketAccess::Good => 1.0,
            MarketAccess::Moderate => 0.95,
        }
    }
}

impl std::fmt::Display for MarketAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalProfile {
    /// At most four crop names, most common first.
    pub common_crops: Vec<String>,
    pub avg_farm_size: String,
    pub irrigation_type: String,
    pub fertilizer_usage: String,
    pub crop_season: Season,
    pub agri_zone: String,
    pub crop_intensity: CropIntensity,
    pub market_access: MarketAccess,
    pub source: DataSource,
    /// Observed climate the profile was refined with, for live profiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate: Option<ClimateSummary>,
}

/// Yearly climate statistics from a daily series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateSummary {
    pub avg_temp_c: f64,
    pub total_rainfall_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_humidity_pct: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_forms_are_consistent() {
        for season in [Season::Kharif, Season::Rabi, Season::Zaid] {
            assert_eq!(Season::from_str(season.as_str()), Some(season));
            assert_eq!(Season::from_str(season.label()), Some(season));
            assert!(season
                .label()
                .to_lowercase()
                .starts_with(season.as_str()));
        }
        assert_eq!(Season::from_str("Monsoon (Kharif)"), Some(Season::Kharif));
        assert_eq!(Season::from_str("Current Season"), None);
    }

    #[test]
    fn season_serializes_as_key() {
        assert_eq!(serde_json::to_string(&Season::Rabi).unwrap(), "\"rabi\"");
    }

    #[test]
    fn market_access_multipliers() {
        assert_eq!(MarketAccess::Excellent.multiplier(), 1.1);
        assert_eq!(MarketAccess::VeryGood.multiplier(), 1.05);
        assert_eq!(MarketAccess::Good.multiplier(), 1.0);
        assert_eq!(MarketAccess::Moderate.multiplier(), 0.95);
    }

    #[test]
    fn labels_round_trip_through_serde() {
        let json = serde_json::to_string(&MarketAccess::VeryGood).unwrap();
        assert_eq!(json, "\"Very Good\"");
        let back: CropIntensity = serde_json::from_str("\"Very High\"").unwrap();
        assert_eq!(back, CropIntensity::VeryHigh);
    }
}
