//! Resultados de avaliação.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::{EvalError, EvalResult};
use super::problem::Problem;

/// Valor de sucesso de uma avaliação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Valor numérico (fatorial, Fibonacci).
    Value(u128),
    /// Índice onde o alvo foi encontrado.
    Found(usize),
    /// Alvo ausente da sequência. Resultado normal, não é erro.
    NotFound,
}

impl Outcome {
    /// Retorna o valor numérico, se houver.
    pub fn as_value(&self) -> Option<u128> {
        match self {
            Outcome::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Retorna o índice encontrado, se houver.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Outcome::Found(i) => Some(*i),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Value(v) => write!(f, "{}", v),
            Outcome::Found(i) => write!(f, "found at index {}", i),
            Outcome::NotFound => write!(f, "not found"),
        }
    }
}

/// Erro como aparece num relatório serializado.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportedError {
    /// Tipo do erro (invalid_input, depth_exceeded, overflow).
    pub kind: String,

    /// Mensagem legível.
    pub message: String,

    /// Código de saída associado.
    pub exit_code: i32,
}

impl From<&EvalError> for ReportedError {
    fn from(error: &EvalError) -> Self {
        Self {
            kind: error.kind_name().to_string(),
            message: error.to_string(),
            exit_code: error.exit_code(),
        }
    }
}

/// Relatório de uma avaliação, usado pela CLI e pelo modo batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    /// ID único do relatório.
    pub request_id: String,

    /// Problema avaliado.
    pub problem: Problem,

    /// Profundidade máxima usada.
    pub max_depth: usize,

    /// Resultado em caso de sucesso.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,

    /// Erro em caso de falha.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportedError>,

    /// Tempo gasto em microssegundos.
    pub elapsed_micros: u64,

    /// Timestamp da avaliação.
    pub timestamp: DateTime<Utc>,
}

impl EvalReport {
    /// Monta um relatório a partir do resultado da avaliação.
    pub fn new(problem: Problem, max_depth: usize, result: &EvalResult, elapsed: Duration) -> Self {
        let (outcome, error) = match result {
            Ok(outcome) => (Some(*outcome), None),
            Err(e) => (None, Some(ReportedError::from(e))),
        };

        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            problem,
            max_depth,
            outcome,
            error,
            elapsed_micros: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            timestamp: Utc::now(),
        }
    }

    /// Verifica se a avaliação teve sucesso.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Código de saída correspondente (0 em caso de sucesso).
    pub fn exit_code(&self) -> i32 {
        self.error.as_ref().map_or(0, |e| e.exit_code)
    }
}

impl std::fmt::Display for EvalReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.outcome, &self.error) {
            (Some(outcome), _) => write!(f, "{} = {}", self.problem, outcome),
            (None, Some(error)) => write!(f, "{}: error: {}", self.problem, error.message),
            (None, None) => write!(f, "{}: no result", self.problem),
        }
    }
}
