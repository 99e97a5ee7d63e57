use super::{ComponentScore, ScoreComponent, ScoreKind, ScoringContext};
use crate::logic::season::in_sowing_window;

/// 10% bonus when the prediction month falls inside the region's sowing window.
pub struct SeasonalScore;

impl ScoreComponent for SeasonalScore {
    fn kind(&self) -> ScoreKind {
        ScoreKind::Seasonal
    }

    fn name(&self) -> &'static str {
        "Seasonal Timing"
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> ComponentScore {
        let mut score = ComponentScore::neutral();
        if in_sowing_window(ctx.record.regional.crop_season, ctx.month) {
            score.scale(1.1);
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::scoring::engine::tests::sample_record;
    use crate::models::Season;

    fn factor(season: Season, month: u32) -> f64 {
        let mut record = sample_record();
        record.regional.crop_season = season;
        let crops: Vec<String> = Vec::new();
        let ctx = ScoringContext {
            record: &record,
            crops: &crops,
            month,
        };
        SeasonalScore.score(&ctx).factor
    }

    #[test]
    fn in_window_bonus() {
        assert!((factor(Season::Kharif, 7) - 1.1).abs() < 1e-9);
        assert!((factor(Season::Rabi, 12) - 1.1).abs() < 1e-9);
        assert!((factor(Season::Rabi, 2) - 1.1).abs() < 1e-9);
        assert!((factor(Season::Zaid, 5) - 1.1).abs() < 1e-9);
    }

    #[test]
    fn out_of_window_is_neutral() {
        assert_eq!(factor(Season::Kharif, 1), 1.0);
        assert_eq!(factor(Season::Rabi, 7), 1.0);
        assert_eq!(factor(Season::Zaid, 9), 1.0);
    }
}
