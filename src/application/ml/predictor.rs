use crate::domain::errors::PredictionError;

/// Interface over one trained model.
///
/// Implementations are loaded once at startup and shared read-only across
/// requests; `predict` must be reentrant and keep no per-call state.
pub trait ScorePredictor: Send + Sync {
    /// Maps a fixed-order feature vector to a single score.
    fn predict(&self, features: &[f64]) -> Result<f64, PredictionError>;

    /// Model name, used in logs and error messages.
    fn name(&self) -> &str;
}
