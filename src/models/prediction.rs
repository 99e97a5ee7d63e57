use super::{Coordinate, RegionalProfile, SoilSample, WeatherSample};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Everything the prediction engine needs for one recommendation cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgriculturalInputRecord {
    pub coordinate: Coordinate,
    pub location_name: String,
    pub weather: WeatherSample,
    pub soil: SoilSample,
    pub regional: RegionalProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_crop: Option<String>,
}

impl AgriculturalInputRecord {
    pub fn with_target_crop(mut self, crop: impl Into<String>) -> Self {
        self.target_crop = Some(crop.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.coordinate.validate()?;
        self.weather.validate()?;
        self.soil.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskFactor {
    #[serde(rename = "Temperature stress")]
    TemperatureStress,
    #[serde(rename = "High humidity - disease risk")]
    HighHumidity,
    #[serde(rename = "Water stress")]
    WaterStress,
    #[serde(rename = "Excess water - flooding risk")]
    ExcessWater,
}

impl RiskFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFactor::TemperatureStress => "Temperature stress",
            RiskFactor::HighHumidity => "High humidity - disease risk",
            RiskFactor::WaterStress => "Water stress",
            RiskFactor::ExcessWater => "Excess water - flooding risk",
        }
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_factor_count(count: usize) -> Self {
        match count {
            0 => RiskLevel::Low,
            1 | 2 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative bucket for a soil or climate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suitability {
    Excellent,
    Good,
    Moderate,
}

impl Suitability {
    pub fn from_score(score: f64) -> Self {
        if score > 1.1 {
            Suitability::Excellent
        } else if score > 0.9 {
            Suitability::Good
        } else {
            Suitability::Moderate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Suitability::Excellent => "Excellent",
            Suitability::Good => "Good",
            Suitability::Moderate => "Moderate",
        }
    }
}

impl std::fmt::Display for Suitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: String,
}

impl DataPoint {
    pub fn new(label: &str, value: impl std::fmt::Display) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }

    pub fn percent(label: &str, factor: f64) -> Self {
        Self::new(label, format!("{:.0}%", factor * 100.0))
    }
}

impl std::fmt::Display for DataPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub crops: String,
    /// Percentage of potential yield, in [60, 120].
    pub yield_pct: u8,
    pub yield_factors: Vec<DataPoint>,
    pub season_text: String,
    pub irrigation_text: String,
    pub data_quality: u8,
    /// In [75, 98].
    pub confidence: u8,
    pub risk_level: RiskLevel,
    pub soil_suitability: Suitability,
    pub climate_match: Suitability,
    pub risk_factors: Vec<RiskFactor>,
}

impl PredictionResult {
    /// "104% of potential (pH Balance: 100%, ...)" using the first three factors.
    pub fn yield_text(&self) -> String {
        let factors: Vec<String> = self
            .yield_factors
            .iter()
            .take(3)
            .map(|f| f.to_string())
            .collect();
        if factors.is_empty() {
            format!("{}% of potential", self.yield_pct)
        } else {
            format!("{}% of potential ({})", self.yield_pct, factors.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_boundaries() {
        assert_eq!(RiskLevel::from_factor_count(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_factor_count(1), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_factor_count(2), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_factor_count(3), RiskLevel::High);
        assert_eq!(RiskLevel::from_factor_count(4), RiskLevel::High);
    }

    #[test]
    fn suitability_thresholds_are_exclusive() {
        assert_eq!(Suitability::from_score(1.15), Suitability::Excellent);
        assert_eq!(Suitability::from_score(1.1), Suitability::Good);
        assert_eq!(Suitability::from_score(0.95), Suitability::Good);
        assert_eq!(Suitability::from_score(0.9), Suitability::Moderate);
    }

    #[test]
    fn risk_factor_serializes_as_text() {
        let json = serde_json::to_string(&vec![RiskFactor::WaterStress]).unwrap();
        assert_eq!(json, "[\"Water stress\"]");
    }

    #[test]
    fn yield_text_uses_first_three_factors() {
        let result = PredictionResult {
            crops: "Wheat".into(),
            yield_pct: 104,
            yield_factors: vec![
                DataPoint::percent("pH Balance", 1.0),
                DataPoint::percent("Nutrient Profile", 0.95),
                DataPoint::percent("Climate Suitability", 1.2),
                DataPoint::percent("Regional Crop Match", 1.1),
            ],
            season_text: String::new(),
            irrigation_text: String::new(),
            data_quality: 95,
            confidence: 90,
            risk_level: RiskLevel::Low,
            soil_suitability: Suitability::Good,
            climate_match: Suitability::Excellent,
            risk_factors: Vec::new(),
        };
        assert_eq!(
            result.yield_text(),
            "104% of potential (pH Balance: 100%, Nutrient Profile: 95%, Climate Suitability: 120%)"
        );
    }
}
