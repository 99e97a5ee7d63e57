use super::DataSource;
use crate::error::{check_range, CropCastError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Laterite,
    Sandy,
    Clay,
    Loamy,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "alluvial",
            SoilType::Black => "black",
            SoilType::Red => "red",
            SoilType::Laterite => "laterite",
            SoilType::Sandy => "sandy",
            SoilType::Clay => "clay",
            SoilType::Loamy => "loamy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "alluvial" => Some(SoilType::Alluvial),
            "black" | "regur" => Some(SoilType::Black),
            "red" => Some(SoilType::Red),
            "laterite" | "lateritic" => Some(SoilType::Laterite),
            "sandy" | "desert" => Some(SoilType::Sandy),
            "clay" => Some(SoilType::Clay),
            "loamy" | "loam" => Some(SoilType::Loamy),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Drainage {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl Drainage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Drainage::Excellent => "Excellent",
            Drainage::Good => "Good",
            Drainage::Moderate => "Moderate",
            Drainage::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for Drainage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fertility {
    High,
    Medium,
    Low,
}

impl Fertility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fertility::High => "High",
            Fertility::Medium => "Medium",
            Fertility::Low => "Low",
        }
    }

    /// Yield multiplier applied by the soil score.
    pub fn multiplier(&self) -> f64 {
        match self {
            Fertility::High => 1.15,
            Fertility::Medium => 1.0,
            Fertility::Low => 0.9,
        }
    }

    /// Fixed nitrogen/phosphorus/potassium (mg/kg) assigned to a fertility tier.
    pub fn npk_tier(&self) -> (f64, f64, f64) {
        match self {
            Fertility::High => (320.0, 65.0, 280.0),
            Fertility::Medium => (220.0, 45.0, 200.0),
            Fertility::Low => (140.0, 28.0, 130.0),
        }
    }

    /// Organic carbon percentage typical of a fertility tier.
    pub fn organic_carbon_pct(&self) -> f64 {
        match self {
            Fertility::High => 1.2,
            Fertility::Medium => 0.8,
            Fertility::Low => 0.5,
        }
    }
}

impl std::fmt::Display for Fertility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    pub soil_type: SoilType,
    pub ph: f64,
    pub nitrogen_mg_kg: f64,
    pub phosphorus_mg_kg: f64,
    pub potassium_mg_kg: f64,
    pub organic_carbon_pct: f64,
    pub moisture_pct: f64,
    pub drainage: Drainage,
    pub fertility: Fertility,
    pub source: DataSource,
}

impl SoilSample {
    pub fn validate(&self) -> Result<()> {
        check_range("ph", self.ph, 0.0, 14.0)?;
        check_range("nitrogen_mg_kg", self.nitrogen_mg_kg, 0.0, f64::MAX)?;
        check_range("phosphorus_mg_kg", self.phosphorus_mg_kg, 0.0, f64::MAX)?;
        check_range("potassium_mg_kg", self.potassium_mg_kg, 0.0, f64::MAX)?;
        check_range("organic_carbon_pct", self.organic_carbon_pct, 0.0, 100.0)?;
        check_range("moisture_pct", self.moisture_pct, 0.0, 100.0)?;

        if self.drainage != crate::logic::geo::drainage_for(self.soil_type) {
            return Err(CropCastError::InvalidData(format!(
                "drainage {} does not match {} soil",
                self.drainage, self.soil_type
            )));
        }
        Ok(())
    }
}
