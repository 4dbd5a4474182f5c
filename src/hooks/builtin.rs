//! Hooks padrão do Memorec.
//!
//! - `LoggingHook`: Registra avaliações no log
//! - `MetricsHook`: Coleta métricas de avaliação

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::types::errors::EvalError;
use crate::types::outcome::Outcome;
use crate::MemorecResult;

use super::{Hook, HookContext, HookEvent};

// ═══════════════════════════════════════════════════════════════════════════
// LoggingHook
// ═══════════════════════════════════════════════════════════════════════════

/// Hook que registra avaliações no log.
///
/// Executado após cada avaliação (post_evaluate).
#[derive(Debug, Default)]
pub struct LoggingHook;

impl LoggingHook {
    /// Cria um novo LoggingHook.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Hook for LoggingHook {
    fn name(&self) -> &str {
        "logging"
    }

    fn event(&self) -> HookEvent {
        HookEvent::PostEvaluate
    }

    async fn execute(&self, context: &HookContext<'_>) -> MemorecResult<()> {
        if let HookContext::PostEvaluate { problem, result } = context {
            match result {
                Ok(outcome) => {
                    tracing::info!(
                        problem = %problem,
                        outcome = %outcome,
                        "Evaluation completed"
                    );
                }
                Err(error) => {
                    tracing::warn!(
                        problem = %problem,
                        error_kind = error.kind_name(),
                        error = %error,
                        "Evaluation failed"
                    );
                }
            }
        }

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// MetricsHook
// ═══════════════════════════════════════════════════════════════════════════

/// Hook que coleta métricas de avaliação.
#[derive(Debug, Default)]
pub struct MetricsHook {
    evaluations: AtomicU64,
    successes: AtomicU64,
    not_found: AtomicU64,
    invalid_input: AtomicU64,
    depth_exceeded: AtomicU64,
    overflow: AtomicU64,
}

impl MetricsHook {
    /// Cria um novo MetricsHook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retorna o total de avaliações.
    pub fn total_evaluations(&self) -> u64 {
        self.evaluations.load(Ordering::Relaxed)
    }

    /// Retorna o total de sucessos (inclui `NotFound`).
    pub fn total_successes(&self) -> u64 {
        self.successes.load(Ordering::Relaxed)
    }

    /// Retorna o total de falhas.
    pub fn total_failures(&self) -> u64 {
        self.invalid_input.load(Ordering::Relaxed)
            + self.depth_exceeded.load(Ordering::Relaxed)
            + self.overflow.load(Ordering::Relaxed)
    }

    /// Retorna a taxa de sucesso (sucessos / total).
    pub fn success_rate(&self) -> f64 {
        let total = self.total_evaluations();
        if total == 0 {
            0.0
        } else {
            self.total_successes() as f64 / total as f64
        }
    }

    /// Retorna as métricas em formato estruturado.
    pub fn metrics(&self) -> Metrics {
        Metrics {
            total_evaluations: self.total_evaluations(),
            successes: self.total_successes(),
            not_found: self.not_found.load(Ordering::Relaxed),
            invalid_input: self.invalid_input.load(Ordering::Relaxed),
            depth_exceeded: self.depth_exceeded.load(Ordering::Relaxed),
            overflow: self.overflow.load(Ordering::Relaxed),
            success_rate: self.success_rate(),
        }
    }
}

/// Métricas coletadas pelo MetricsHook.
#[derive(Debug, Clone)]
pub struct Metrics {
    pub total_evaluations: u64,
    pub successes: u64,
    pub not_found: u64,
    pub invalid_input: u64,
    pub depth_exceeded: u64,
    pub overflow: u64,
    pub success_rate: f64,
}

#[async_trait]
impl Hook for MetricsHook {
    fn name(&self) -> &str {
        "metrics"
    }

    fn event(&self) -> HookEvent {
        HookEvent::PostEvaluate
    }

    async fn execute(&self, context: &HookContext<'_>) -> MemorecResult<()> {
        if let HookContext::PostEvaluate { result, .. } = context {
            self.evaluations.fetch_add(1, Ordering::Relaxed);

            let counter = match result {
                Ok(Outcome::NotFound) => {
                    self.not_found.fetch_add(1, Ordering::Relaxed);
                    &self.successes
                }
                Ok(_) => &self.successes,
                Err(EvalError::InvalidInput { .. }) => &self.invalid_input,
                Err(EvalError::DepthExceeded { .. }) => &self.depth_exceeded,
                Err(EvalError::Overflow { .. }) => &self.overflow,
            };
            counter.fetch_add(1, Ordering::Relaxed);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::errors::EvalResult;
    use crate::types::problem::{Problem, ProblemKind};

    async fn post(hook: &impl Hook, result: EvalResult) {
        let problem = Problem::factorial(5);
        let context = HookContext::PostEvaluate {
            problem: &problem,
            result: &result,
        };
        hook.execute(&context).await.unwrap();
    }

    #[test]
    fn test_logging_hook_name() {
        let hook = LoggingHook::new();
        assert_eq!(hook.name(), "logging");
        assert_eq!(hook.event(), HookEvent::PostEvaluate);
    }

    #[tokio::test]
    async fn test_logging_hook_execute() {
        let hook = LoggingHook::new();
        post(&hook, Ok(Outcome::Value(120))).await;
        post(
            &hook,
            Err(EvalError::InvalidInput {
                kind: ProblemKind::Factorial,
                n: -1,
            }),
        )
        .await;
    }

    #[test]
    fn test_metrics_hook_name() {
        let hook = MetricsHook::new();
        assert_eq!(hook.name(), "metrics");
        assert_eq!(hook.event(), HookEvent::PostEvaluate);
    }

    #[tokio::test]
    async fn test_metrics_hook_counts() {
        let hook = MetricsHook::new();

        post(&hook, Ok(Outcome::Value(120))).await;
        post(&hook, Ok(Outcome::Found(3))).await;
        post(&hook, Ok(Outcome::NotFound)).await;
        post(
            &hook,
            Err(EvalError::DepthExceeded {
                kind: ProblemKind::Factorial,
                max_depth: 1,
            }),
        )
        .await;

        let metrics = hook.metrics();
        assert_eq!(metrics.total_evaluations, 4);
        assert_eq!(metrics.successes, 3);
        assert_eq!(metrics.not_found, 1);
        assert_eq!(metrics.depth_exceeded, 1);
        assert_eq!(metrics.invalid_input, 0);
        assert_eq!(hook.total_failures(), 1);
        assert!((metrics.success_rate - 0.75).abs() < 0.01);
    }

    #[test]
    fn test_metrics_hook_empty() {
        let hook = MetricsHook::new();

        assert_eq!(hook.total_evaluations(), 0);
        assert_eq!(hook.success_rate(), 0.0);
    }
}
