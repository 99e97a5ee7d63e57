use super::fallback::{estimate_soil, estimate_weather};
use super::regional::resolve_by_name;
use crate::datasources::{RegionalProvider, SoilProvider, WeatherProvider};
use crate::error::Result;
use crate::models::{
    AgriculturalInputRecord, Coordinate, RegionalProfile, SoilSample, WeatherSample,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Builds input records from optional live providers, substituting the
/// heuristic estimators for any section a provider cannot supply.
#[derive(Default)]
pub struct RecordAssembler {
    weather: Option<Arc<dyn WeatherProvider>>,
    soil: Option<Arc<dyn SoilProvider>>,
    regional: Option<Arc<dyn RegionalProvider>>,
}

/// Which sections of an assembled record came from live providers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceStatus {
    pub weather_live: bool,
    pub soil_live: bool,
    pub regional_live: bool,
}

impl SourceStatus {
    pub fn all_live(&self) -> bool {
        self.weather_live && self.soil_live && self.regional_live
    }

    pub fn any_live(&self) -> bool {
        self.weather_live || self.soil_live || self.regional_live
    }

    /// Read provenance off a record's section sources.
    pub fn of(record: &AgriculturalInputRecord) -> Self {
        Self {
            weather_live: !record.weather.source.is_fallback(),
            soil_live: !record.soil.source.is_fallback(),
            regional_live: !record.regional.source.is_fallback(),
        }
    }

    pub fn summary(&self) -> &'static str {
        if self.all_live() {
            "all live"
        } else if self.any_live() {
            "partly live"
        } else {
            "estimated"
        }
    }
}

#[derive(Debug, Clone)]
pub struct Assembly {
    pub record: AgriculturalInputRecord,
    pub status: SourceStatus,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weather(mut self, provider: Arc<dyn WeatherProvider>) -> Self {
        self.weather = Some(provider);
        self
    }

    pub fn with_soil(mut self, provider: Arc<dyn SoilProvider>) -> Self {
        self.soil = Some(provider);
        self
    }

    pub fn with_regional(mut self, provider: Arc<dyn RegionalProvider>) -> Self {
        self.regional = Some(provider);
        self
    }

    /// Use one provider for every section.
    pub fn with_provider<P>(self, provider: Arc<P>) -> Self
    where
        P: WeatherProvider + SoilProvider + RegionalProvider + 'static,
    {
        self.with_weather(provider.clone())
            .with_soil(provider.clone())
            .with_regional(provider)
    }

    pub fn assemble(
        &self,
        coord: Coordinate,
        location_name: &str,
        target_crop: Option<&str>,
        today: NaiveDate,
    ) -> Assembly {
        let weather = self
            .live_weather(&coord, today)
            .unwrap_or_else(|| estimate_weather(&coord, location_name, today));
        let soil = self
            .live_soil(&coord)
            .unwrap_or_else(|| estimate_soil(&coord, location_name));
        let regional = self
            .live_regional(location_name, today)
            .unwrap_or_else(|| resolve_by_name(location_name, today));

        info!(
            location = location_name,
            weather = %weather.source,
            soil = %soil.source,
            regional = %regional.source,
            "Assembled input record"
        );

        let record = AgriculturalInputRecord {
            coordinate: coord,
            location_name: location_name.to_string(),
            weather,
            soil,
            regional,
            target_crop: target_crop.map(str::to_string),
        };
        let status = SourceStatus::of(&record);

        Assembly { record, status }
    }

    fn live_weather(&self, coord: &Coordinate, today: NaiveDate) -> Option<WeatherSample> {
        let provider = self.weather.as_ref()?;
        accept(provider.name(), provider.fetch_weather(coord, today))
    }

    fn live_soil(&self, coord: &Coordinate) -> Option<SoilSample> {
        let provider = self.soil.as_ref()?;
        accept(provider.name(), provider.fetch_soil(coord))
    }

    fn live_regional(&self, location_name: &str, today: NaiveDate) -> Option<RegionalProfile> {
        let provider = self.regional.as_ref()?;
        accept(provider.name(), provider.fetch_regional(location_name, today))
    }
}

fn accept<T>(provider: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(sample) => {
            debug!(provider, "Using live data");
            Some(sample)
        }
        Err(e) => {
            warn!(provider, "Falling back to estimate: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasources::{ClimateSeries, Snapshot, SnapshotProvider, SoilReading};
    use crate::error::CropCastError;
    use crate::models::{DataSource, SoilType};

    struct Offline;

    impl WeatherProvider for Offline {
        fn name(&self) -> &'static str {
            "offline"
        }

        fn fetch_weather(&self, _: &Coordinate, _: NaiveDate) -> Result<WeatherSample> {
            Err(CropCastError::DataSourceUnavailable("offline".into()))
        }
    }

    impl SoilProvider for Offline {
        fn name(&self) -> &'static str {
            "offline"
        }

        fn fetch_soil(&self, _: &Coordinate) -> Result<SoilSample> {
            Err(CropCastError::DataSourceUnavailable("offline".into()))
        }
    }

    impl RegionalProvider for Offline {
        fn name(&self) -> &'static str {
            "offline"
        }

        fn fetch_regional(&self, _: &str, _: NaiveDate) -> Result<RegionalProfile> {
            Err(CropCastError::DataSourceUnavailable("offline".into()))
        }
    }

    fn pune() -> Coordinate {
        Coordinate {
            latitude: 18.5,
            longitude: 73.85,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 20).unwrap()
    }

    #[test]
    fn no_providers_uses_estimates() {
        let assembly = RecordAssembler::new().assemble(pune(), "Pune, Maharashtra", None, today());
        assert_eq!(assembly.status, SourceStatus::default());
        assert!(!assembly.status.any_live());
        assert_eq!(assembly.status.summary(), "estimated");

        let record = assembly.record;
        assert_eq!(record.weather.source, DataSource::EstimatedWeather);
        assert_eq!(record.soil.source, DataSource::EstimatedSoil);
        assert_eq!(record.regional.source, DataSource::RegionalCensus);
        assert_eq!(record.soil.soil_type, SoilType::Black);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn failing_providers_match_estimates() {
        let offline = Arc::new(Offline);
        let with_failures = RecordAssembler::new()
            .with_provider(offline)
            .assemble(pune(), "Pune, Maharashtra", Some("cotton"), today());
        let without =
            RecordAssembler::new().assemble(pune(), "Pune, Maharashtra", Some("cotton"), today());

        assert_eq!(with_failures.record, without.record);
        assert_eq!(with_failures.status, without.status);
        assert_eq!(with_failures.record.target_crop.as_deref(), Some("cotton"));
    }

    #[test]
    fn live_sections_are_marked() {
        let snapshot = Snapshot {
            soil: Some(SoilReading {
                ph: 7.6,
                organic_carbon_pct: 0.7,
                nitrogen_mg_kg: 260.0,
                soil_type: None,
            }),
            climate: Some(ClimateSeries {
                daily_temp_c: vec![26.0, 28.0],
                daily_precip_mm: vec![3.0; 300],
                daily_humidity_pct: Vec::new(),
            }),
            ..Snapshot::default()
        };
        let provider = Arc::new(SnapshotProvider::new("pune.json", snapshot));

        let assembly = RecordAssembler::new()
            .with_provider(provider)
            .assemble(pune(), "Pune, Maharashtra", None, today());

        assert_eq!(
            assembly.status,
            SourceStatus {
                weather_live: false,
                soil_live: true,
                regional_live: true,
            }
        );
        assert!(!assembly.status.all_live());
        assert_eq!(assembly.status.summary(), "partly live");
        assert_eq!(assembly.record.weather.source, DataSource::EstimatedWeather);
        assert_eq!(assembly.record.soil.source, DataSource::LiveSoil);
        assert_eq!(assembly.record.regional.source, DataSource::LiveRegional);
    }
}
