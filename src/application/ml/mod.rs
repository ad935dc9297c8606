pub mod predictor;
pub mod smartcore_predictor;

pub use predictor::ScorePredictor;
pub use smartcore_predictor::SmartCorePredictor;
