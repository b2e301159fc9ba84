use rand::Rng;
use std::time::Duration;

use stayfinder_core::{CoreResult, ServiceError};

use crate::app_config::SimulationConfig;

/// Pretend-network behavior shared by the mock collaborators: a base delay
/// per operation class with random jitter, and an optional transient-fault
/// rate for exercising retry paths.
#[derive(Debug, Clone)]
pub struct Simulation {
    read_latency: Duration,
    write_latency: Duration,
    jitter: Duration,
    failure_rate: f64,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            read_latency: Duration::from_millis(config.read_latency_ms),
            write_latency: Duration::from_millis(config.write_latency_ms),
            jitter: Duration::from_millis(config.jitter_ms),
            failure_rate: config.failure_rate.clamp(0.0, 1.0),
        }
    }

    /// No delay, no faults. For tests.
    pub fn instant() -> Self {
        Self {
            read_latency: Duration::ZERO,
            write_latency: Duration::ZERO,
            jitter: Duration::ZERO,
            failure_rate: 0.0,
        }
    }

    /// Always fails with a transient error. For tests of retry handling.
    pub fn always_failing() -> Self {
        Self {
            failure_rate: 1.0,
            ..Self::instant()
        }
    }

    pub async fn read(&self, operation: &str) -> CoreResult<()> {
        self.simulate(self.read_latency, operation).await
    }

    pub async fn write(&self, operation: &str) -> CoreResult<()> {
        self.simulate(self.write_latency, operation).await
    }

    async fn simulate(&self, base: Duration, operation: &str) -> CoreResult<()> {
        let delay = base + self.sample_jitter();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if self.failure_rate > 0.0 && rand::thread_rng().gen::<f64>() < self.failure_rate {
            tracing::warn!(operation, "injecting transient failure");
            return Err(ServiceError::Transient(format!(
                "{operation} failed, please retry"
            )));
        }

        tracing::debug!(operation, delay_ms = delay.as_millis() as u64, "simulated call");
        Ok(())
    }

    fn sample_jitter(&self) -> Duration {
        if self.jitter.is_zero() {
            return Duration::ZERO;
        }
        let max = self.jitter.as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(0..=max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn instant_profile_never_fails() {
        let sim = Simulation::instant();
        for _ in 0..50 {
            sim.read("list").await.unwrap();
            sim.write("create").await.unwrap();
        }
    }

    #[tokio::test]
    async fn saturated_failure_rate_always_fails_transiently() {
        let sim = Simulation::always_failing();
        let err = sim.read("list").await.unwrap_err();
        assert!(err.is_retryable());
    }
}
