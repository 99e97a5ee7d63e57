use super::{DataSource, Season};
use crate::error::{check_range, CropCastError, Result};
use serde::{Deserialize, Serialize};

/// Current conditions plus the annual rainfall figure used for scoring.
///
/// `season` is display text ("Kharif (Monsoon)") rather than an enum so that
/// provider labels keep their wording. It must still name a cropping season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub annual_rainfall_mm: f64,
    pub wind_speed_kmh: f64,
    pub sunlight_hours: f64,
    pub pressure_hpa: f64,
    pub uv_index: f64,
    pub season: String,
    pub source: DataSource,
}

impl WeatherSample {
    pub fn season(&self) -> Option<Season> {
        Season::from_str(&self.season)
    }

    pub fn validate(&self) -> Result<()> {
        if self.season().is_none() {
            return Err(CropCastError::InvalidData(format!(
                "unrecognised season '{}'",
                self.season
            )));
        }
        check_range("temperature_c", self.temperature_c, -60.0, 60.0)?;
        check_range("humidity_pct", self.humidity_pct, 0.0, 100.0)?;
        check_range("annual_rainfall_mm", self.annual_rainfall_mm, 200.0, 4000.0)?;
        check_range("wind_speed_kmh", self.wind_speed_kmh, 0.0, f64::MAX)?;
        check_range("sunlight_hours", self.sunlight_hours, 6.0, 14.0)?;
        check_range("pressure_hpa", self.pressure_hpa, 0.0, f64::MAX)?;
        check_range("uv_index", self.uv_index, 0.0, f64::MAX)
    }
}
