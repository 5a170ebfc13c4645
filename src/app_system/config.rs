/// Runtime knobs for [`super::RestaurantSystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Mailbox capacity of every actor
    pub buffer_size: usize,
    /// Load the demo menu, gallery and tables at startup
    pub seed_demo_data: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            seed_demo_data: true,
        }
    }
}

impl SystemConfig {
    /// Reads `RESERVATION_BUFFER_SIZE` and `RESERVATION_SEED_DATA`, falling back to defaults
    /// for anything missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            buffer_size: lookup("RESERVATION_BUFFER_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|size: &usize| *size > 0)
                .unwrap_or(defaults.buffer_size),
            seed_demo_data: lookup("RESERVATION_SEED_DATA")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_demo_data),
        }
    }

    /// Empty stores, for callers that load their own data.
    pub fn without_seed(mut self) -> Self {
        self.seed_demo_data = false;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> SystemConfig {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        SystemConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]), SystemConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = config_from(&[("RESERVATION_BUFFER_SIZE", "8"), ("RESERVATION_SEED_DATA", "false")]);
        assert_eq!(config, SystemConfig { buffer_size: 8, seed_demo_data: false });
    }

    #[test]
    fn test_garbage_falls_back() {
        let config = config_from(&[("RESERVATION_BUFFER_SIZE", "0"), ("RESERVATION_SEED_DATA", "maybe")]);
        assert_eq!(config, SystemConfig::default());
    }
}
