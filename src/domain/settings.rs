use serde::{Deserialize, Serialize};

/// Display preferences. The currency code drives formatting only, never
/// conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "USD".into()
}

#[cfg(test)]
mod tests {
    use super::Settings;

    #[test]
    fn partial_blob_merges_with_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.currency, "USD");
    }
}
