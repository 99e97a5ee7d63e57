//! Deterministic stand-ins for live weather and soil providers.
//!
//! Outputs depend only on the coordinate, the location text and the date
//! passed in, so a fixed date gives identical samples on every call.

use super::calculations::annual_rainfall;
use super::geo::drainage_for;
use super::season::{current_season_label, is_monsoon, is_summer, is_winter};
use crate::models::{Coordinate, DataSource, Fertility, SoilSample, SoilType, WeatherSample};
use chrono::NaiveDate;
use tracing::debug;

const COASTAL_CITIES: &[&str] = &["mumbai", "chennai", "kochi", "visakhapatnam"];
const DESERT_REGIONS: &[&str] = &["rajasthan", "kutch"];
const WET_SOIL_LOCATIONS: &[&str] = &["kerala", "mumbai"];

/// (winter, summer, other) temperatures and humidity for one latitude tier.
struct ClimateTier {
    min_lat_exclusive: f64,
    temps_c: (f64, f64, f64),
    humidity_pct: f64,
}

const CLIMATE_TIERS: &[ClimateTier] = &[
    ClimateTier {
        min_lat_exclusive: 30.0,
        temps_c: (18.0, 30.0, 22.0),
        humidity_pct: 60.0,
    },
    ClimateTier {
        min_lat_exclusive: 25.0,
        temps_c: (25.0, 35.0, 28.0),
        humidity_pct: 65.0,
    },
    ClimateTier {
        min_lat_exclusive: 20.0,
        temps_c: (27.0, 38.0, 30.0),
        humidity_pct: 70.0,
    },
    ClimateTier {
        min_lat_exclusive: f64::NEG_INFINITY,
        temps_c: (28.0, 35.0, 30.0),
        humidity_pct: 75.0,
    },
];

/// Soil profile keyed by state names appearing in the location text.
pub struct StateSoil {
    pub keywords: &'static [&'static str],
    pub soil_type: SoilType,
    pub ph: f64,
    pub fertility: Fertility,
}

pub const STATE_SOILS: &[StateSoil] = &[
    StateSoil {
        keywords: &["punjab", "haryana", "uttar pradesh"],
        soil_type: SoilType::Alluvial,
        ph: 7.2,
        fertility: Fertility::High,
    },
    StateSoil {
        keywords: &["maharashtra", "telangana", "karnataka"],
        soil_type: SoilType::Black,
        ph: 7.8,
        fertility: Fertility::High,
    },
    StateSoil {
        keywords: &["tamil nadu", "andhra pradesh"],
        soil_type: SoilType::Red,
        ph: 6.2,
        fertility: Fertility::Medium,
    },
    StateSoil {
        keywords: &["kerala", "goa"],
        soil_type: SoilType::Laterite,
        ph: 5.8,
        fertility: Fertility::Low,
    },
    StateSoil {
        keywords: &["rajasthan", "gujarat"],
        soil_type: SoilType::Sandy,
        ph: 8.2,
        fertility: Fertility::Low,
    },
];

pub const DEFAULT_STATE_SOIL: StateSoil = StateSoil {
    keywords: &[],
    soil_type: SoilType::Loamy,
    ph: 6.8,
    fertility: Fertility::Medium,
};

fn mentions_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

pub fn state_soil_for(location_name: &str) -> &'static StateSoil {
    let name = location_name.to_lowercase();
    STATE_SOILS
        .iter()
        .find(|s| mentions_any(&name, s.keywords))
        .unwrap_or(&DEFAULT_STATE_SOIL)
}

pub fn estimate_weather(coord: &Coordinate, location_name: &str, date: NaiveDate) -> WeatherSample {
    let lat = coord.latitude;
    let lon = coord.longitude;
    let name = location_name.to_lowercase();

    let tier = CLIMATE_TIERS
        .iter()
        .find(|t| lat > t.min_lat_exclusive)
        .unwrap_or(&CLIMATE_TIERS[CLIMATE_TIERS.len() - 1]);

    let (winter, summer, other) = tier.temps_c;
    let mut temperature = if is_winter(date) {
        winter
    } else if is_summer(date) {
        summer
    } else {
        other
    };
    let mut humidity = tier.humidity_pct;

    if mentions_any(&name, COASTAL_CITIES) {
        humidity += 10.0;
        temperature -= 2.0;
    }
    if mentions_any(&name, DESERT_REGIONS) {
        temperature += 5.0;
        humidity -= 20.0;
    }

    debug!(
        location = location_name,
        lat, lon, temperature, humidity, "Estimated fallback weather"
    );

    WeatherSample {
        temperature_c: temperature.clamp(15.0, 45.0),
        humidity_pct: humidity.clamp(30.0, 95.0),
        annual_rainfall_mm: annual_rainfall(lat, lon, 0.0, date),
        wind_speed_kmh: if lat > 25.0 { 15.0 } else { 12.0 },
        sunlight_hours: if is_monsoon(date) { 7.0 } else { 9.0 },
        pressure_hpa: 1013.0,
        uv_index: if lat < 20.0 { 8.0 } else { 6.0 },
        season: current_season_label(date).to_string(),
        source: DataSource::EstimatedWeather,
    }
}

pub fn estimate_soil(coord: &Coordinate, location_name: &str) -> SoilSample {
    let state = state_soil_for(location_name);
    let name = location_name.to_lowercase();

    let (mut nitrogen, mut phosphorus, mut potassium) = state.fertility.npk_tier();
    if coord.latitude > 25.0 {
        nitrogen += 30.0;
        phosphorus += 10.0;
        potassium += 20.0;
    }

    let moisture = if mentions_any(&name, WET_SOIL_LOCATIONS) {
        45.0
    } else {
        30.0
    };

    debug!(
        location = location_name,
        soil_type = %state.soil_type,
        fertility = %state.fertility,
        "Estimated fallback soil"
    );

    SoilSample {
        soil_type: state.soil_type,
        ph: state.ph,
        nitrogen_mg_kg: nitrogen,
        phosphorus_mg_kg: phosphorus,
        potassium_mg_kg: potassium,
        organic_carbon_pct: state.fertility.organic_carbon_pct(),
        moisture_pct: moisture,
        drainage: drainage_for(state.soil_type),
        fertility: state.fertility,
        source: DataSource::EstimatedSoil,
    }
}
