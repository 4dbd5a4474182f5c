//! Avaliador compartilhado entre tarefas.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::hooks::HookSystem;
use crate::types::errors::EvalResult;
use crate::types::problem::Problem;

use super::engine::{EvaluatorStats, RecursiveEvaluator};

/// Avaliador compartilhado.
///
/// Clones compartilham a mesma tabela de memoização. O lock é mantido
/// durante toda a avaliação, cobrindo as sequências de leitura e inserção
/// na tabela. Hooks rodam fora do lock.
#[derive(Clone)]
pub struct SharedEvaluator {
    inner: Arc<Mutex<RecursiveEvaluator>>,
    hooks: Arc<HookSystem>,
}

impl SharedEvaluator {
    /// Cria um avaliador compartilhado sem hooks.
    pub fn new(evaluator: RecursiveEvaluator) -> Self {
        Self::with_hooks(evaluator, HookSystem::new())
    }

    /// Cria um avaliador compartilhado com hooks.
    pub fn with_hooks(evaluator: RecursiveEvaluator, hooks: HookSystem) -> Self {
        Self {
            inner: Arc::new(Mutex::new(evaluator)),
            hooks: Arc::new(hooks),
        }
    }

    /// Avalia um problema.
    pub async fn evaluate(&self, problem: &Problem, max_depth: usize) -> EvalResult {
        self.hooks.run_pre_evaluate(problem, max_depth).await;

        let result = {
            let mut evaluator = self.inner.lock().await;
            evaluator.evaluate(problem, max_depth)
        };

        self.hooks.run_post_evaluate(problem, &result).await;
        result
    }

    /// Retorna estatísticas do avaliador.
    pub async fn stats(&self) -> EvaluatorStats {
        self.inner.lock().await.stats()
    }
}
