use std::env;
use std::path::PathBuf;

/// Locations of the three trained model artifacts.
///
/// Simulation constants (epoch, growth rates, thresholds) are fixed in
/// `application::simulation` and deliberately not configurable here.
#[derive(Debug, Clone)]
pub struct Config {
    pub success_model_path: PathBuf,
    pub funding_model_path: PathBuf,
    pub year_model_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let success_model_path = env::var("SUCCESS_MODEL_PATH")
            .unwrap_or_else(|_| "models/success_model.json".to_string())
            .into();

        let funding_model_path = env::var("FUNDING_MODEL_PATH")
            .unwrap_or_else(|_| "models/funding_model.json".to_string())
            .into();

        let year_model_path = env::var("YEAR_MODEL_PATH")
            .unwrap_or_else(|_| "models/year_model.json".to_string())
            .into();

        Self {
            success_model_path,
            funding_model_path,
            year_model_path,
        }
    }
}
