// Predictor adapters over the trained artifacts
pub mod ml;

// Growth projection and horizon search
pub mod simulation;

// The operations exposed to the outer request layer
pub mod forecast_service;
