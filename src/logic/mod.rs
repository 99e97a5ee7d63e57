pub mod assembly;
pub mod calculations;
pub mod fallback;
pub mod geo;
pub mod regional;
pub mod scoring;
pub mod season;

pub use assembly::{Assembly, RecordAssembler, SourceStatus};
pub use scoring::PredictionEngine;
