use serde::{Deserialize, Serialize};

use super::forms::{RawForm, safe_code, safe_float};

/// Attributes describing one startup. Built fresh from each inbound form and
/// immutable afterwards; nothing here outlives the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupProfile {
    pub funding: f64,
    pub employee_count: u32,
    pub sector: i32,
    pub city_encoded: i32,
    pub state_encoded: i32,
}

impl StartupProfile {
    /// Field names match the inbound form: `district` carries the city code,
    /// `state` the state code. Headcount clamps at zero.
    pub fn from_form(form: &RawForm) -> Self {
        Self {
            funding: safe_float(form.get("funding_range")),
            employee_count: safe_code(form.get("employee_count")).max(0.0) as u32,
            sector: safe_code(form.get("sector")) as i32,
            city_encoded: safe_code(form.get("district")) as i32,
            state_encoded: safe_code(form.get("state")) as i32,
        }
    }
}
