use std::collections::HashMap;

/// Raw key-value user input as handed over by the outer request layer.
/// Values stay strings until a feature encoder extracts them.
#[derive(Debug, Clone, Default)]
pub struct RawForm {
    fields: HashMap<String, String>,
}

impl RawForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Best-effort float parse. Missing or non-numeric input resolves to 0.0
/// instead of failing the request.
pub fn safe_float(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Categorical codes arrive as free-form text; coerce by truncating a
/// best-effort float parse.
pub fn safe_code(value: Option<&str>) -> f64 {
    safe_float(value).trunc()
}
