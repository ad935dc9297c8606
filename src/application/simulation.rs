use crate::application::ml::ScorePredictor;
use crate::domain::errors::PredictionError;
use crate::domain::profile::StartupProfile;
use tracing::debug;

/// First simulated year; projections measure elapsed time from here.
pub const SIMULATION_EPOCH_YEAR: i32 = 2025;

/// Last simulated year, inclusive. The horizon is a closed 11-year span.
pub const HORIZON_END_YEAR: i32 = 2035;

/// Assumed annual compounding growth of raised funding.
pub const FUNDING_GROWTH_RATE: f64 = 1.2;

/// Assumed annual compounding growth of headcount.
pub const HEADCOUNT_GROWTH_RATE: f64 = 1.15;

/// Year model score at or above which a simulated year counts as a success.
pub const YEAR_SCORE_THRESHOLD: f64 = 0.210;

/// Projects the profile to `target_year` under fixed-rate compounding growth
/// and encodes it in the year model's column order
/// `[funding, employee_log, sector, city_encoded, state_encoded]`.
/// Categorical attributes are treated as time-invariant.
pub fn project_year_features(profile: &StartupProfile, target_year: i32) -> Vec<f64> {
    let years_elapsed = target_year - SIMULATION_EPOCH_YEAR;
    let funding = profile.funding * FUNDING_GROWTH_RATE.powi(years_elapsed);
    let employees = f64::from(profile.employee_count) * HEADCOUNT_GROWTH_RATE.powi(years_elapsed);
    vec![
        funding,
        employees.ln_1p(),
        f64::from(profile.sector),
        f64::from(profile.city_encoded),
        f64::from(profile.state_encoded),
    ]
}

/// Scans the horizon in ascending order and returns the first year whose
/// projected score clears `threshold`, stopping at the first hit.
///
/// `Ok(None)` means no year within the horizon qualifies; that is a valid
/// outcome, not an error. Model failures propagate to the caller untouched.
pub fn find_success_year(
    profile: &StartupProfile,
    year_model: &dyn ScorePredictor,
    threshold: f64,
) -> Result<Option<i32>, PredictionError> {
    for year in SIMULATION_EPOCH_YEAR..=HORIZON_END_YEAR {
        let features = project_year_features(profile, year);
        let score = year_model.predict(&features)?;
        debug!("Simulated year {}: score {:.4}", year, score);
        if score >= threshold {
            return Ok(Some(year));
        }
    }
    Ok(None)
}
