use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub business_rules: BusinessRules,
    pub search: SearchConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    pub tax_rate: f64,
    pub service_fee: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

/// Knobs for the mock collaborators: how slow they pretend to be and how
/// often they synthesize a transient failure.
#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    pub read_latency_ms: u64,
    pub write_latency_ms: u64,
    #[serde(default)]
    pub jitter_ms: u64,
    /// 0.0..=1.0; 0 disables fault injection.
    #[serde(default)]
    pub failure_rate: f64,
}

fn default_page_size() -> u32 {
    12
}

fn default_suggestion_limit() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            business_rules: BusinessRules {
                tax_rate: 0.12,
                service_fee: 25.0,
            },
            search: SearchConfig {
                page_size: default_page_size(),
                suggestion_limit: default_suggestion_limit(),
            },
            simulation: SimulationConfig {
                read_latency_ms: 300,
                write_latency_ms: 400,
                jitter_ms: 100,
                failure_rate: 0.0,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific overrides are optional.
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // E.g. `STAYFINDER__SIMULATION__FAILURE_RATE=0.2`.
            .add_source(config::Environment::with_prefix("STAYFINDER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_observed_business_rules() {
        let config = Config::default();
        assert_eq!(config.business_rules.tax_rate, 0.12);
        assert_eq!(config.business_rules.service_fee, 25.0);
        assert_eq!(config.search.page_size, 12);
        assert_eq!(config.simulation.failure_rate, 0.0);
    }
}
