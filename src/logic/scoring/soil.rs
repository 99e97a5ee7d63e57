use super::{ComponentScore, ScoreComponent, ScoreKind, ScoringContext};
use crate::models::{DataPoint, SoilSample};

const OPTIMAL_PH: f64 = 6.5;

/// Reference NPK levels (mg/kg) that score exactly 1.0.
const REFERENCE_NITROGEN: f64 = 350.0;
const REFERENCE_PHOSPHORUS: f64 = 80.0;
const REFERENCE_POTASSIUM: f64 = 300.0;

/// Soil suitability: pH balance x nutrient profile x fertility tier.
///
/// - pH factor falls 8% per unit away from 6.5, floored at 0.7
/// - NPK factor is the mean of each nutrient against its reference, bounded to [0.7, 1.25]
/// - Fertility tier multiplies by 1.15 / 1.0 / 0.9
pub struct SoilScore;

impl SoilScore {
    pub fn ph_factor(ph: f64) -> f64 {
        (1.0 - (ph - OPTIMAL_PH).abs() * 0.08).max(0.7)
    }

    pub fn npk_factor(soil: &SoilSample) -> f64 {
        let mean = (soil.nitrogen_mg_kg / REFERENCE_NITROGEN
            + soil.phosphorus_mg_kg / REFERENCE_PHOSPHORUS
            + soil.potassium_mg_kg / REFERENCE_POTASSIUM)
            / 3.0;
        mean.clamp(0.7, 1.25)
    }
}

impl ScoreComponent for SoilScore {
    fn kind(&self) -> ScoreKind {
        ScoreKind::Soil
    }

    fn name(&self) -> &'static str {
        "Soil Suitability"
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> ComponentScore {
        let soil = &ctx.record.soil;
        let mut score = ComponentScore::neutral();

        let ph = Self::ph_factor(soil.ph);
        score.scale(ph);
        score.note(DataPoint::percent("pH Balance", ph));

        let npk = Self::npk_factor(soil);
        score.scale(npk);
        score.note(DataPoint::percent("Nutrient Profile", npk));

        score.scale(soil.fertility.multiplier());
        score
    }
}
