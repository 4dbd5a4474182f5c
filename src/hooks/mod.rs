//! Sistema de hooks do Memorec.
//!
//! Hooks observam o fluxo de avaliação em pontos específicos:
//!
//! - `pre_evaluate`: Antes de avaliar um problema
//! - `post_evaluate`: Após a avaliação, com sucesso ou erro
//! - `on_error`: Quando a avaliação falha
//!
//! Hooks apenas observam: não alteram o resultado da avaliação.

mod builtin;

pub use builtin::{LoggingHook, Metrics, MetricsHook};

use async_trait::async_trait;

use crate::types::errors::{EvalError, EvalResult};
use crate::types::problem::Problem;
use crate::MemorecResult;

// ═══════════════════════════════════════════════════════════════════════════
// Tipos de eventos
// ═══════════════════════════════════════════════════════════════════════════

/// Evento que dispara um hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    /// Antes de iniciar avaliação.
    PreEvaluate,

    /// Após avaliação completa.
    PostEvaluate,

    /// Quando a avaliação falha.
    OnError,
}

impl std::fmt::Display for HookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HookEvent::PreEvaluate => write!(f, "pre_evaluate"),
            HookEvent::PostEvaluate => write!(f, "post_evaluate"),
            HookEvent::OnError => write!(f, "on_error"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Contexto de hooks
// ═══════════════════════════════════════════════════════════════════════════

/// Contexto passado para hooks.
pub enum HookContext<'a> {
    /// Contexto para pre_evaluate.
    PreEvaluate {
        /// Problema a avaliar.
        problem: &'a Problem,
        /// Limite de profundidade.
        max_depth: usize,
    },

    /// Contexto para post_evaluate.
    PostEvaluate {
        /// Problema avaliado.
        problem: &'a Problem,
        /// Resultado da avaliação.
        result: &'a EvalResult,
    },

    /// Contexto para on_error.
    OnError {
        /// Problema avaliado.
        problem: &'a Problem,
        /// Erro retornado.
        error: &'a EvalError,
    },
}

impl<'a> HookContext<'a> {
    /// Retorna o evento correspondente ao contexto.
    pub fn event(&self) -> HookEvent {
        match self {
            HookContext::PreEvaluate { .. } => HookEvent::PreEvaluate,
            HookContext::PostEvaluate { .. } => HookEvent::PostEvaluate,
            HookContext::OnError { .. } => HookEvent::OnError,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Hook
// ═══════════════════════════════════════════════════════════════════════════

/// Trait para hooks customizáveis.
#[async_trait]
pub trait Hook: Send + Sync {
    /// Nome do hook.
    fn name(&self) -> &str;

    /// Evento que dispara este hook.
    fn event(&self) -> HookEvent;

    /// Executa o hook.
    async fn execute(&self, context: &HookContext<'_>) -> MemorecResult<()>;
}

/// Permite registrar um hook e manter uma referência para lê-lo depois
/// (ex.: métricas).
#[async_trait]
impl<H: Hook + ?Sized> Hook for std::sync::Arc<H> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn event(&self) -> HookEvent {
        (**self).event()
    }

    async fn execute(&self, context: &HookContext<'_>) -> MemorecResult<()> {
        (**self).execute(context).await
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Sistema de hooks
// ═══════════════════════════════════════════════════════════════════════════

/// Gerenciador de hooks.
pub struct HookSystem {
    pre_evaluate: Vec<Box<dyn Hook>>,
    post_evaluate: Vec<Box<dyn Hook>>,
    on_error: Vec<Box<dyn Hook>>,
}

impl HookSystem {
    /// Cria um novo sistema de hooks vazio.
    pub fn new() -> Self {
        Self {
            pre_evaluate: Vec::new(),
            post_evaluate: Vec::new(),
            on_error: Vec::new(),
        }
    }

    /// Cria um sistema com hooks padrão (logging).
    pub fn with_defaults() -> Self {
        let mut system = Self::new();
        system.register(Box::new(LoggingHook));
        system
    }

    /// Registra um hook.
    pub fn register(&mut self, hook: Box<dyn Hook>) {
        let event = hook.event();
        tracing::debug!(
            hook_name = hook.name(),
            event = %event,
            "Registering hook"
        );

        match event {
            HookEvent::PreEvaluate => self.pre_evaluate.push(hook),
            HookEvent::PostEvaluate => self.post_evaluate.push(hook),
            HookEvent::OnError => self.on_error.push(hook),
        }
    }

    /// Executa hooks de pre_evaluate.
    pub async fn run_pre_evaluate(&self, problem: &Problem, max_depth: usize) {
        let context = HookContext::PreEvaluate { problem, max_depth };
        Self::run_all(&self.pre_evaluate, &context).await;
    }

    /// Executa hooks de post_evaluate e, se houve erro, os de on_error.
    pub async fn run_post_evaluate(&self, problem: &Problem, result: &EvalResult) {
        let context = HookContext::PostEvaluate { problem, result };
        Self::run_all(&self.post_evaluate, &context).await;

        if let Err(error) = result {
            let context = HookContext::OnError { problem, error };
            Self::run_all(&self.on_error, &context).await;
        }
    }

    /// Falhas de hooks são registradas e ignoradas.
    async fn run_all(hooks: &[Box<dyn Hook>], context: &HookContext<'_>) {
        for hook in hooks {
            if let Err(e) = hook.execute(context).await {
                tracing::warn!(
                    hook_name = hook.name(),
                    event = %context.event(),
                    error = %e,
                    "Hook failed"
                );
            }
        }
    }

    /// Retorna o número total de hooks registrados.
    pub fn count(&self) -> usize {
        self.pre_evaluate.len() + self.post_evaluate.len() + self.on_error.len()
    }

    /// Retorna o número de hooks para um evento específico.
    pub fn count_for_event(&self, event: HookEvent) -> usize {
        match event {
            HookEvent::PreEvaluate => self.pre_evaluate.len(),
            HookEvent::PostEvaluate => self.post_evaluate.len(),
            HookEvent::OnError => self.on_error.len(),
        }
    }
}

impl Default for HookSystem {
    fn default() -> Self {
        Self::new()
    }
}
