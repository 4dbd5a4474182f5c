//! Problemas que o avaliador sabe resolver.

use serde::{Deserialize, Serialize};

/// Problema a ser avaliado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    /// `n!`
    Factorial { n: i64 },

    /// n-ésimo número de Fibonacci.
    Fibonacci { n: i64 },

    /// Busca binária de `target` em `sequence`.
    ///
    /// A sequência deve estar ordenada de forma crescente. Isso é
    /// responsabilidade do chamador e não é verificado; com uma sequência
    /// desordenada o resultado não é definido.
    BinarySearch { sequence: Vec<i64>, target: i64 },
}

impl Problem {
    /// Cria um problema de fatorial.
    pub fn factorial(n: i64) -> Self {
        Self::Factorial { n }
    }

    /// Cria um problema de Fibonacci.
    pub fn fibonacci(n: i64) -> Self {
        Self::Fibonacci { n }
    }

    /// Cria um problema de busca binária.
    pub fn binary_search(sequence: impl Into<Vec<i64>>, target: i64) -> Self {
        Self::BinarySearch {
            sequence: sequence.into(),
            target,
        }
    }

    /// Retorna o tipo do problema.
    pub fn kind(&self) -> ProblemKind {
        match self {
            Problem::Factorial { .. } => ProblemKind::Factorial,
            Problem::Fibonacci { .. } => ProblemKind::Fibonacci,
            Problem::BinarySearch { .. } => ProblemKind::BinarySearch,
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::Factorial { n } => write!(f, "factorial({})", n),
            Problem::Fibonacci { n } => write!(f, "fibonacci({})", n),
            Problem::BinarySearch { sequence, target } => {
                write!(f, "binary_search({}, len={})", target, sequence.len())
            }
        }
    }
}

/// Tipo de problema.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    Factorial,
    Fibonacci,
    BinarySearch,
}

impl std::fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemKind::Factorial => write!(f, "factorial"),
            ProblemKind::Fibonacci => write!(f, "fibonacci"),
            ProblemKind::BinarySearch => write!(f, "binary_search"),
        }
    }
}
