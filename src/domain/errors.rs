use thiserror::Error;

/// Errors crossing the predictor contract. Malformed form fields never reach
/// here (they normalize to defaults in the encoders), and an exhausted
/// simulation horizon is a valid outcome, not an error.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Failed to build input matrix for {model} model: {reason}")]
    InvalidInput { model: String, reason: String },

    #[error("Inference failed for {model} model: {reason}")]
    InferenceFailed { model: String, reason: String },

    #[error("{model} model returned no prediction")]
    EmptyOutput { model: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_error_formatting() {
        let err = PredictionError::InferenceFailed {
            model: "success".to_string(),
            reason: "shape mismatch".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("success"));
        assert!(msg.contains("shape mismatch"));
    }
}
