pub mod snapshot;

pub use snapshot::{ClimateSeries, Snapshot, SnapshotProvider, SoilReading, WeatherReading};

use crate::error::Result;
use crate::models::{Coordinate, RegionalProfile, SoilSample, WeatherSample};
use chrono::NaiveDate;

/// Source of current weather. Any error sends the caller to the estimator.
pub trait WeatherProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn fetch_weather(&self, coord: &Coordinate, today: NaiveDate) -> Result<WeatherSample>;
}

pub trait SoilProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn fetch_soil(&self, coord: &Coordinate) -> Result<SoilSample>;
}

pub trait RegionalProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn fetch_regional(&self, location_name: &str, today: NaiveDate) -> Result<RegionalProfile>;
}
