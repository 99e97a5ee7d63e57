use super::{ComponentScore, ScoreComponent, ScoreKind, ScoringContext};
use crate::models::DataPoint;

const CROP_MATCH_BONUS: f64 = 1.1;

/// Rewards crops already grown in the region, then applies market access.
pub struct RegionalFitScore;

impl RegionalFitScore {
    /// Case-insensitive substring match of any recommended crop against any common crop.
    pub fn crop_matches(crops: &[String], common_crops: &[String]) -> bool {
        let common: Vec<String> = common_crops.iter().map(|c| c.to_lowercase()).collect();
        crops.iter().any(|crop| {
            let crop = crop.to_lowercase();
            common.iter().any(|c| c.contains(&crop))
        })
    }
}

impl ScoreComponent for RegionalFitScore {
    fn kind(&self) -> ScoreKind {
        ScoreKind::Regional
    }

    fn name(&self) -> &'static str {
        "Regional Fit"
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> ComponentScore {
        let regional = &ctx.record.regional;
        let mut score = ComponentScore::neutral();

        if Self::crop_matches(ctx.crops, &regional.common_crops) {
            score.scale(CROP_MATCH_BONUS);
            score.note(DataPoint::percent("Regional Crop Match", CROP_MATCH_BONUS));
        }

        score.scale(regional.market_access.multiplier());
        score
    }
}
