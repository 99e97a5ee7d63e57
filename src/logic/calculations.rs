use super::geo::{
    base_annual_rainfall, coastal_moisture_bonus, monsoon_moisture_bonus, soil_nutrient_baseline,
};
use super::season::is_monsoon;
use crate::models::{Fertility, SoilType};
use chrono::NaiveDate;

/// Annual rainfall estimate (mm), nudged by recent daily precipitation.
///
/// During the monsoon a wetter-than-5mm/day week raises the estimate and a
/// drier one lowers it; outside the monsoon any recent rain raises it.
pub fn annual_rainfall(lat: f64, lon: f64, avg_daily_precip_mm: f64, date: NaiveDate) -> f64 {
    let mut rainfall = base_annual_rainfall(lat, lon);

    if avg_daily_precip_mm > 0.0 {
        if is_monsoon(date) {
            rainfall += (avg_daily_precip_mm - 5.0) * 50.0;
        } else {
            rainfall += avg_daily_precip_mm * 20.0;
        }
    }

    rainfall.clamp(200.0, 4000.0).round()
}

/// Sentinel used by daily climate archives for days with no observation.
pub const FILL_VALUE: f64 = -999.0;

/// True for a real observation: finite and above the fill sentinel.
pub fn is_observed(value: f64) -> bool {
    value.is_finite() && value > FILL_VALUE
}

/// Average temperature over a daily series, rounded to whole degrees
pub fn average_temperature(daily_temp_c: &[f64]) -> Option<f64> {
    mean(daily_temp_c).map(f64::round)
}

/// Total precipitation over a daily series, skipping fill days
pub fn total_rainfall(daily_precip_mm: &[f64]) -> f64 {
    daily_precip_mm
        .iter()
        .copied()
        .filter(|p| is_observed(*p))
        .map(|p| p.max(0.0))
        .sum::<f64>()
        .round()
}

pub fn average_humidity(daily_humidity_pct: &[f64]) -> Option<f64> {
    mean(daily_humidity_pct).map(f64::round)
}

/// Average of the first `days` values, treating missing days as dry.
pub fn recent_daily_precipitation(daily_precip_mm: &[f64], days: usize) -> f64 {
    if days == 0 {
        return 0.0;
    }
    let sum: f64 = daily_precip_mm
        .iter()
        .take(days)
        .filter(|p| p.is_finite() && **p > 0.0)
        .sum();
    sum / days as f64
}

fn mean(values: &[f64]) -> Option<f64> {
    let observed: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| is_observed(*v))
        .collect();
    if observed.is_empty() {
        None
    } else {
        Some(observed.iter().sum::<f64>() / observed.len() as f64)
    }
}

/// Phosphorus (mg/kg) from the soil-type baseline plus organic matter.
pub fn estimate_phosphorus(soil_type: SoilType, organic_carbon_pct: f64) -> f64 {
    soil_nutrient_baseline(soil_type).phosphorus + organic_carbon_pct * 15.0
}

/// Potassium (mg/kg); northern soils carry an extra 50.
pub fn estimate_potassium(soil_type: SoilType, lat: f64) -> f64 {
    let bonus = if lat > 25.0 { 50.0 } else { 0.0 };
    soil_nutrient_baseline(soil_type).potassium + bonus
}

pub fn estimate_soil_moisture(lat: f64, lon: f64) -> f64 {
    let moisture = 25 + coastal_moisture_bonus(lat, lon) + monsoon_moisture_bonus(lat);
    f64::from(moisture.min(90))
}

/// Fertility tier from measured pH, organic carbon (%) and nitrogen (mg/kg).
///
/// Each input contributes up to 40/30/30 points; 80+ is High, 60+ Medium.
pub fn fertility_from_measurements(
    ph: f64,
    organic_carbon_pct: f64,
    nitrogen_mg_kg: f64,
) -> Fertility {
    let ph_points = if (6.0..=7.5).contains(&ph) {
        40
    } else if (5.5..=8.0).contains(&ph) {
        25
    } else {
        10
    };

    let carbon_points = if organic_carbon_pct > 1.0 {
        30
    } else if organic_carbon_pct > 0.5 {
        20
    } else {
        10
    };

    let nitrogen_points = if nitrogen_mg_kg > 300.0 {
        30
    } else if nitrogen_mg_kg > 200.0 {
        20
    } else {
        10
    };

    match ph_points + carbon_points + nitrogen_points {
        score if score >= 80 => Fertility::High,
        score if score >= 60 => Fertility::Medium,
        _ => Fertility::Low,
    }
}
