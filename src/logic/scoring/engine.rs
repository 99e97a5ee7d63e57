use super::{
    climate::ClimateScore, regional_fit::RegionalFitScore, seasonal::SeasonalScore,
    soil::SoilScore, ScoreComponent, ScoreKind, ScoringContext,
};
use crate::error::Result;
use crate::models::{
    AgriculturalInputRecord, PredictionResult, RiskLevel, SoilType, Suitability,
};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

pub const DEFAULT_DATA_QUALITY: u8 = 95;

const MIN_YIELD_PCT: f64 = 60.0;
const MAX_YIELD_PCT: f64 = 120.0;
const MIN_CONFIDENCE: f64 = 75.0;
const MAX_CONFIDENCE: f64 = 98.0;

/// Number of regional crops recommended when no target crop is given.
const DEFAULT_CROP_COUNT: usize = 3;

/// Rainfall (mm/year) below which irrigation is flagged as required.
const LOW_RAINFALL_MM: f64 = 800.0;

pub struct PredictionEngine {
    data_quality: u8,
    components: Vec<Box<dyn ScoreComponent>>,
}

impl PredictionEngine {
    pub fn new() -> Self {
        let components: Vec<Box<dyn ScoreComponent>> = vec![
            Box::new(SoilScore),
            Box::new(ClimateScore),
            Box::new(RegionalFitScore),
            Box::new(SeasonalScore),
        ];

        Self {
            data_quality: DEFAULT_DATA_QUALITY,
            components,
        }
    }

    pub fn with_data_quality(mut self, data_quality: u8) -> Self {
        self.data_quality = data_quality.min(100);
        self
    }

    pub fn data_quality(&self) -> u8 {
        self.data_quality
    }

    pub fn list_components(&self) -> Vec<(ScoreKind, &'static str)> {
        self.components.iter().map(|c| (c.kind(), c.name())).collect()
    }

    /// Target crop when one is given, otherwise the region's leading crops.
    pub fn select_crops(record: &AgriculturalInputRecord) -> Vec<String> {
        match record.target_crop.as_deref().map(str::trim) {
            Some(target) if !target.is_empty() => vec![title_case(target)],
            _ => record
                .regional
                .common_crops
                .iter()
                .take(DEFAULT_CROP_COUNT)
                .cloned()
                .collect(),
        }
    }

    /// Score a record. Never fails; out-of-range inputs still yield bounded output.
    pub fn predict(&self, record: &AgriculturalInputRecord, today: NaiveDate) -> PredictionResult {
        let crops = Self::select_crops(record);
        let ctx = ScoringContext {
            record,
            crops: &crops,
            month: today.month(),
        };

        let mut product = 1.0;
        let mut soil_score = 1.0;
        let mut climate_score = 1.0;
        let mut yield_factors = Vec::new();
        let mut risk_factors = Vec::new();

        for component in &self.components {
            let score = component.score(&ctx);
            debug!(component = component.name(), factor = score.factor, "Scored");

            match component.kind() {
                ScoreKind::Soil => soil_score = score.factor,
                ScoreKind::Climate => climate_score = score.factor,
                ScoreKind::Regional | ScoreKind::Seasonal => {}
            }

            product *= score.factor;
            yield_factors.extend(score.notes);
            risk_factors.extend(score.risks);
        }

        let yield_pct = bounded_percent(100.0 * product, MIN_YIELD_PCT, MAX_YIELD_PCT);
        let confidence = bounded_percent(
            f64::from(self.data_quality) * 0.85
                + suitability_bonus(soil_score, 10.0, 5.0)
                + suitability_bonus(climate_score, 8.0, 3.0),
            MIN_CONFIDENCE,
            MAX_CONFIDENCE,
        );

        let result = PredictionResult {
            crops: crops.join(", "),
            yield_pct,
            yield_factors,
            season_text: record.regional.crop_season.planting_window().to_string(),
            irrigation_text: irrigation_text(record),
            data_quality: self.data_quality,
            confidence,
            risk_level: RiskLevel::from_factor_count(risk_factors.len()),
            soil_suitability: Suitability::from_score(soil_score),
            climate_match: Suitability::from_score(climate_score),
            risk_factors,
        };

        debug!(
            crops = %result.crops,
            yield_pct = result.yield_pct,
            confidence = result.confidence,
            risk = %result.risk_level,
            "Prediction complete"
        );
        result
    }

    /// Validate the record first, then score it.
    pub fn predict_checked(
        &self,
        record: &AgriculturalInputRecord,
        today: NaiveDate,
    ) -> Result<PredictionResult> {
        record.validate()?;
        Ok(self.predict(record, today))
    }
}

impl Default for PredictionEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn title_case(crop: &str) -> String {
    let crop = crop.replace('_', " ");
    let mut chars = crop.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn suitability_bonus(score: f64, excellent: f64, good: f64) -> f64 {
    match Suitability::from_score(score) {
        Suitability::Excellent => excellent,
        Suitability::Good => good,
        Suitability::Moderate => 0.0,
    }
}

/// Round and clamp; non-finite values collapse to the lower bound.
fn bounded_percent(value: f64, min: f64, max: f64) -> u8 {
    if !value.is_finite() {
        return min as u8;
    }
    value.round().clamp(min, max) as u8
}

fn irrigation_text(record: &AgriculturalInputRecord) -> String {
    let mut text = format!("{} (Regional Standard)", record.regional.irrigation_type);
    if record.weather.annual_rainfall_mm < LOW_RAINFALL_MM {
        text.push_str(" - Additional irrigation required");
    }
    if record.soil.soil_type == SoilType::Sandy {
        text.push_str(" - Frequent light watering needed");
    }
    text
}
