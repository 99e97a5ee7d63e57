use super::{ComponentScore, ScoreComponent, ScoreKind, ScoringContext};
use crate::models::{DataPoint, RiskFactor};

/// Climate suitability from temperature, humidity, rainfall and sunlight.
///
/// Also the only component that raises risk factors.
pub struct ClimateScore;

impl ScoreComponent for ClimateScore {
    fn kind(&self) -> ScoreKind {
        ScoreKind::Climate
    }

    fn name(&self) -> &'static str {
        "Climate Suitability"
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> ComponentScore {
        let weather = &ctx.record.weather;
        let mut score = ComponentScore::neutral();

        let temp = weather.temperature_c;
        if (20.0..=30.0).contains(&temp) {
            score.scale(1.15);
        } else if temp < 15.0 || temp > 35.0 {
            score.scale(0.85);
            score.risk(RiskFactor::TemperatureStress);
        }

        let humidity = weather.humidity_pct;
        if (50.0..=75.0).contains(&humidity) {
            score.scale(1.1);
        } else if humidity > 90.0 {
            score.risk(RiskFactor::HighHumidity);
        }

        let rainfall = weather.annual_rainfall_mm;
        if (800.0..=1500.0).contains(&rainfall) {
            score.scale(1.2);
        } else if rainfall < 600.0 {
            score.scale(0.8);
            score.risk(RiskFactor::WaterStress);
        } else if rainfall > 2000.0 {
            score.risk(RiskFactor::ExcessWater);
        }

        if (6.0..=9.0).contains(&weather.sunlight_hours) {
            score.scale(1.05);
        }

        score.note(DataPoint::percent(self.name(), score.factor));
        score
    }
}
