use super::predictor::ScorePredictor;
use crate::domain::errors::PredictionError;
use anyhow::{Context, Result};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Random-forest regressor deserialized from a serde_json artifact.
#[derive(Debug)]
pub struct SmartCorePredictor {
    model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
    name: String,
}

impl SmartCorePredictor {
    /// Loads the artifact eagerly. A missing or corrupt artifact is a startup
    /// failure; prediction never runs against a partially loaded model.
    pub fn load(name: &str, path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open {} model at {:?}", name, path))?;
        let model = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to deserialize {} model at {:?}", name, path))?;
        info!("Loaded {} model from {:?}", name, path);
        Ok(Self {
            model,
            name: name.to_string(),
        })
    }
}

impl ScorePredictor for SmartCorePredictor {
    fn predict(&self, features: &[f64]) -> Result<f64, PredictionError> {
        let matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()]).map_err(|e| {
            PredictionError::InvalidInput {
                model: self.name.clone(),
                reason: e.to_string(),
            }
        })?;

        let predictions =
            self.model
                .predict(&matrix)
                .map_err(|e| PredictionError::InferenceFailed {
                    model: self.name.clone(),
                    reason: e.to_string(),
                })?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| PredictionError::EmptyOutput {
                model: self.name.clone(),
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
