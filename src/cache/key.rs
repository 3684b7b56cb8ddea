use crate::dto::Scenario;
use rustc_hash::FxHasher;
use serde_json::Map;
use serde_json::Value;
use std::hash::Hasher;

/// Deterministic store key for a solve request.
///
/// The request is rendered as JSON with object keys sorted and every
/// number printed with four fixed decimals, then hashed, so payloads that
/// differ only in field order or float noise share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub const PREFIX: &'static str = "gto_strategy";
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn canonical(value: &Value) -> Value {
        match value {
            Value::Number(n) => Value::String(format!("{:.4}", n.as_f64().unwrap_or_default())),
            Value::Array(items) => Value::Array(items.iter().map(Self::canonical).collect()),
            Value::Object(fields) => {
                let mut keys = fields.keys().collect::<Vec<&String>>();
                keys.sort();
                Value::Object(
                    keys.into_iter()
                        .map(|k| (k.clone(), Self::canonical(&fields[k.as_str()])))
                        .collect::<Map<String, Value>>(),
                )
            }
            other => other.clone(),
        }
    }
}

impl From<(&Scenario, usize)> for CacheKey {
    fn from((scenario, iterations): (&Scenario, usize)) -> Self {
        let payload = serde_json::json!({
            "decision_state": scenario,
            "iterations": iterations,
        });
        let text = Self::canonical(&payload).to_string();
        let mut hasher = FxHasher::default();
        hasher.write(text.as_bytes());
        Self(format!("{}:{:016x}", Self::PREFIX, hasher.finish()))
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
