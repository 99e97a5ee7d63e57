use super::{RegionalProvider, SoilProvider, WeatherProvider};
use crate::error::{CropCastError, Result};
use crate::logic::calculations::{
    annual_rainfall, estimate_phosphorus, estimate_potassium, estimate_soil_moisture,
    fertility_from_measurements, recent_daily_precipitation,
};
use crate::logic::geo::{classify_soil_type, drainage_for};
use crate::logic::regional::resolve_from_climate;
use crate::logic::season::{current_season_label, sunlight_hours};
use crate::models::{Coordinate, DataSource, RegionalProfile, SoilSample, SoilType, WeatherSample};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Days of forecast precipitation averaged when no annual total is available.
const RECENT_PRECIP_DAYS: usize = 7;

const DEFAULT_UV_INDEX: f64 = 5.0;

/// Current conditions as reported by a weather service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub pressure_hpa: f64,
    #[serde(default)]
    pub uv_index: Option<f64>,
    /// Measured total for the year, preferred over the recent-precipitation estimate.
    #[serde(default)]
    pub annual_rainfall_mm: Option<f64>,
    /// Daily precipitation starting today.
    #[serde(default)]
    pub daily_precip_mm: Vec<f64>,
}

/// Topsoil measurements (0-5cm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilReading {
    pub ph: f64,
    pub organic_carbon_pct: f64,
    pub nitrogen_mg_kg: f64,
    /// Classified from coordinates when absent. Accepts common aliases ("regur").
    #[serde(default, deserialize_with = "deserialize_soil_type")]
    pub soil_type: Option<SoilType>,
}

fn deserialize_soil_type<'de, D>(deserializer: D) -> std::result::Result<Option<SoilType>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => SoilType::from_str(&value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unknown soil type '{}'", value))),
    }
}

/// A year of daily climate observations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClimateSeries {
    #[serde(default)]
    pub daily_temp_c: Vec<f64>,
    #[serde(default)]
    pub daily_precip_mm: Vec<f64>,
    #[serde(default)]
    pub daily_humidity_pct: Vec<f64>,
}

/// Provider readings captured to disk. Every section is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub weather: Option<WeatherReading>,
    #[serde(default)]
    pub soil: Option<SoilReading>,
    #[serde(default)]
    pub climate: Option<ClimateSeries>,
}

impl Snapshot {
    /// Parse YAML for `.yaml`/`.yml` files, JSON otherwise.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let snapshot = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        Ok(snapshot)
    }
}

/// Turn a weather reading into a sample: integers for current conditions,
/// computed sunlight and season, and an annual rainfall figure.
pub fn normalize_weather(
    reading: &WeatherReading,
    coord: &Coordinate,
    today: NaiveDate,
) -> Result<WeatherSample> {
    let rainfall = match reading.annual_rainfall_mm {
        Some(total) if total > 0.0 => total.clamp(200.0, 4000.0).round(),
        _ => {
            let recent = recent_daily_precipitation(&reading.daily_precip_mm, RECENT_PRECIP_DAYS);
            annual_rainfall(coord.latitude, coord.longitude, recent, today)
        }
    };

    let sample = WeatherSample {
        temperature_c: reading.temperature_c.round(),
        humidity_pct: reading.humidity_pct.round(),
        annual_rainfall_mm: rainfall,
        wind_speed_kmh: reading.wind_speed_kmh.round(),
        sunlight_hours: sunlight_hours(coord.latitude, today),
        pressure_hpa: reading.pressure_hpa.round(),
        uv_index: reading.uv_index.unwrap_or(DEFAULT_UV_INDEX).round(),
        season: current_season_label(today).to_string(),
        source: DataSource::LiveWeather,
    };
    sample.validate()?;
    Ok(sample)
}

/// Derive a full soil sample from measured pH, organic carbon and nitrogen.
pub fn normalize_soil(reading: &SoilReading, coord: &Coordinate) -> Result<SoilSample> {
    let soil_type = reading
        .soil_type
        .unwrap_or_else(|| classify_soil_type(coord.latitude, coord.longitude));

    let sample = SoilSample {
        soil_type,
        ph: (reading.ph * 10.0).round() / 10.0,
        nitrogen_mg_kg: reading.nitrogen_mg_kg.round(),
        phosphorus_mg_kg: estimate_phosphorus(soil_type, reading.organic_carbon_pct).round(),
        potassium_mg_kg: estimate_potassium(soil_type, coord.latitude).round(),
        organic_carbon_pct: (reading.organic_carbon_pct * 10.0).round() / 10.0,
        moisture_pct: estimate_soil_moisture(coord.latitude, coord.longitude),
        drainage: drainage_for(soil_type),
        fertility: fertility_from_measurements(
            reading.ph,
            reading.organic_carbon_pct,
            reading.nitrogen_mg_kg,
        ),
        source: DataSource::LiveSoil,
    };
    sample.validate()?;
    Ok(sample)
}

/// Serves a captured snapshot through the provider traits.
pub struct SnapshotProvider {
    path: PathBuf,
    snapshot: Snapshot,
}

impl SnapshotProvider {
    pub fn new(path: impl Into<PathBuf>, snapshot: Snapshot) -> Self {
        Self {
            path: path.into(),
            snapshot,
        }
    }

    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = Snapshot::from_file(&path)?;
        debug!(
            path = %path.display(),
            weather = snapshot.weather.is_some(),
            soil = snapshot.soil.is_some(),
            climate = snapshot.climate.is_some(),
            "Loaded snapshot"
        );
        Ok(Self { path, snapshot })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn missing(&self, section: &str) -> CropCastError {
        CropCastError::DataSourceUnavailable(format!(
            "snapshot {} has no {} section",
            self.path.display(),
            section
        ))
    }
}

impl WeatherProvider for SnapshotProvider {
    fn name(&self) -> &'static str {
        "snapshot weather"
    }

    fn fetch_weather(&self, coord: &Coordinate, today: NaiveDate) -> Result<WeatherSample> {
        let reading = self
            .snapshot
            .weather
            .as_ref()
            .ok_or_else(|| self.missing("weather"))?;
        normalize_weather(reading, coord, today)
    }
}

impl SoilProvider for SnapshotProvider {
    fn name(&self) -> &'static str {
        "snapshot soil"
    }

    fn fetch_soil(&self, coord: &Coordinate) -> Result<SoilSample> {
        let reading = self
            .snapshot
            .soil
            .as_ref()
            .ok_or_else(|| self.missing("soil"))?;
        normalize_soil(reading, coord)
    }
}

impl RegionalProvider for SnapshotProvider {
    fn name(&self) -> &'static str {
        "snapshot climate"
    }

    fn fetch_regional(&self, location_name: &str, today: NaiveDate) -> Result<RegionalProfile> {
        let series = self
            .snapshot
            .climate
            .as_ref()
            .ok_or_else(|| self.missing("climate"))?;
        resolve_from_climate(
            location_name,
            &series.daily_temp_c,
            &series.daily_precip_mm,
            &series.daily_humidity_pct,
            today,
        )
        .ok_or_else(|| CropCastError::InvalidData("climate series has no temperatures".into()))
    }
}
