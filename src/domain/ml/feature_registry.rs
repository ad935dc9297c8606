use crate::domain::forms::{RawForm, safe_code, safe_float};

/// Column order of the success model input.
/// This order MUST match exactly the order the model was trained with.
/// Any change here is a breaking change for the trained artifacts.
pub const SUCCESS_FEATURES: &[&str] = &[
    "sector",
    "stage",
    "funding_round",
    "funding_log",
    "city_encoded",
    "state_encoded",
];

/// Column order of the funding model input. Funding is raw here while the
/// success vector log-compresses it; the two models were trained
/// independently and the asymmetry is part of their contracts.
pub const FUNDING_FEATURES: &[&str] = &[
    "year",
    "sector",
    "stage",
    "funding",
    "funding_round",
    "employee_log",
    "investors_log",
    "city_encoded",
    "state_encoded",
];

/// Column order of the year model input, produced by the growth projector.
pub const YEAR_FEATURES: &[&str] = &[
    "funding",
    "employee_log",
    "sector",
    "city_encoded",
    "state_encoded",
];

/// Encodes the raw form into the success model's 6-column vector.
/// Funding is ln(1+x) compressed to match the training inputs.
pub fn success_features(form: &RawForm) -> Vec<f64> {
    vec![
        safe_code(form.get("sector")),
        safe_code(form.get("stage")),
        safe_code(form.get("funding_round")),
        safe_float(form.get("funding_range")).ln_1p(),
        safe_code(form.get("district")),
        safe_code(form.get("state")),
    ]
}

/// Encodes the raw form into the funding model's 9-column vector.
/// Headcount and investor count are ln(1+x) compressed; funding is not.
pub fn funding_features(form: &RawForm) -> Vec<f64> {
    vec![
        safe_float(form.get("year")),
        safe_code(form.get("sector")),
        safe_code(form.get("stage")),
        safe_float(form.get("funding_range")),
        safe_code(form.get("funding_round")),
        safe_float(form.get("employee_count")).ln_1p(),
        safe_float(form.get("investor_count")).ln_1p(),
        safe_code(form.get("district")),
        safe_code(form.get("state")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> RawForm {
        [
            ("sector", "3"),
            ("stage", "2"),
            ("funding_round", "1"),
            ("funding_range", "500000"),
            ("employee_count", "25"),
            ("investor_count", "4"),
            ("year", "2025"),
            ("district", "12"),
            ("state", "5"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_success_vector_length_and_order() {
        let vec = success_features(&sample_form());
        assert_eq!(vec.len(), SUCCESS_FEATURES.len());
        assert_eq!(vec[0], 3.0); // sector
        assert_eq!(vec[3], 500000.0_f64.ln_1p()); // funding_log
        assert_eq!(vec[5], 5.0); // state_encoded
    }

    #[test]
    fn test_funding_vector_length_and_order() {
        let vec = funding_features(&sample_form());
        assert_eq!(vec.len(), FUNDING_FEATURES.len());
        assert_eq!(vec[0], 2025.0); // year
        // Raw funding, no log compression in this vector
        assert_eq!(vec[3], 500000.0);
        assert_eq!(vec[5], 25.0_f64.ln_1p()); // employee_log
        assert_eq!(vec[6], 4.0_f64.ln_1p()); // investors_log
    }

    #[test]
    fn test_empty_form_encodes_to_zeros() {
        let form = RawForm::new();
        // ln(1+0) = 0, so every column defaults to 0.0
        assert!(success_features(&form).iter().all(|v| *v == 0.0));
        assert!(funding_features(&form).iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let form = sample_form();
        assert_eq!(success_features(&form), success_features(&form));
        assert_eq!(funding_features(&form), funding_features(&form));
    }

    #[test]
    fn test_malformed_fields_default_without_error() {
        let form: RawForm = [("funding_range", "a lot"), ("sector", "")]
            .into_iter()
            .collect();
        let vec = success_features(&form);
        assert_eq!(vec[0], 0.0);
        assert_eq!(vec[3], 0.0);
    }
}
