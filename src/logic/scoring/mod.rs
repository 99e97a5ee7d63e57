pub mod climate;
pub mod engine;
pub mod regional_fit;
pub mod seasonal;
pub mod soil;

pub use engine::PredictionEngine;

use crate::models::{AgriculturalInputRecord, DataPoint, RiskFactor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    Soil,
    Climate,
    Regional,
    Seasonal,
}

/// Inputs shared by every score component for one prediction.
pub struct ScoringContext<'a> {
    pub record: &'a AgriculturalInputRecord,
    /// Crops being recommended, already title-cased.
    pub crops: &'a [String],
    /// Calendar month (1-12) the prediction is made in.
    pub month: u32,
}

/// Multiplicative yield factor produced by one component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentScore {
    pub factor: f64,
    pub risks: Vec<RiskFactor>,
    pub notes: Vec<DataPoint>,
}

impl ComponentScore {
    pub fn neutral() -> Self {
        Self {
            factor: 1.0,
            risks: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn scale(&mut self, multiplier: f64) {
        self.factor *= multiplier;
    }

    pub fn risk(&mut self, risk: RiskFactor) {
        self.risks.push(risk);
    }

    pub fn note(&mut self, note: DataPoint) {
        self.notes.push(note);
    }
}

/// One independent part of the weighted yield model
pub trait ScoreComponent: Send + Sync {
    fn kind(&self) -> ScoreKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    fn score(&self, ctx: &ScoringContext<'_>) -> ComponentScore;
}
