use std::sync::Arc;

use crate::application::ml::ScorePredictor;
use crate::application::simulation::{self, YEAR_SCORE_THRESHOLD};
use crate::domain::errors::PredictionError;
use crate::domain::forms::RawForm;
use crate::domain::labels::SuccessLabel;
use crate::domain::ml::feature_registry;
use crate::domain::profile::StartupProfile;
use tracing::info;

/// Label plus the raw model score it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuccessOutlook {
    pub label: SuccessLabel,
    pub score: f64,
}

/// The three trained models behind the forecast operations.
///
/// Stateless across requests; models are shared read-only and safe for
/// concurrent callers.
pub struct ForecastService {
    success_model: Arc<dyn ScorePredictor>,
    funding_model: Arc<dyn ScorePredictor>,
    year_model: Arc<dyn ScorePredictor>,
}

impl ForecastService {
    pub fn new(
        success_model: Arc<dyn ScorePredictor>,
        funding_model: Arc<dyn ScorePredictor>,
        year_model: Arc<dyn ScorePredictor>,
    ) -> Self {
        Self {
            success_model,
            funding_model,
            year_model,
        }
    }

    /// Scores the startup described by the form and labels the result.
    pub fn predict_success(&self, form: &RawForm) -> Result<SuccessOutlook, PredictionError> {
        let features = feature_registry::success_features(form);
        let score = self.success_model.predict(&features)?;
        let label = SuccessLabel::from_score(score);
        info!("Success outlook: {} (score {:.4})", label, score);
        Ok(SuccessOutlook { label, score })
    }

    /// Predicts the expected funding amount for the described round.
    pub fn predict_funding(&self, form: &RawForm) -> Result<f64, PredictionError> {
        let features = feature_registry::funding_features(form);
        self.funding_model.predict(&features)
    }

    /// Simulates growth across the horizon and returns the first year the
    /// year model scores at or above the success threshold, if any.
    pub fn predict_success_year(&self, form: &RawForm) -> Result<Option<i32>, PredictionError> {
        let profile = StartupProfile::from_form(form);
        simulation::find_success_year(&profile, self.year_model.as_ref(), YEAR_SCORE_THRESHOLD)
    }
}
