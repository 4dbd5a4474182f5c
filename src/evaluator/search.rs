//! Busca binária recursiva com limite de profundidade.

use std::cmp::Ordering;

use crate::types::errors::{EvalError, EvalResult};
use crate::types::outcome::Outcome;
use crate::types::problem::ProblemKind;

use super::engine::depth_exceeded;

/// Resultado de uma busca com a altura da recursão usada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchTrace {
    pub outcome: Outcome,
    pub height: usize,
}

impl SearchTrace {
    fn leaf(outcome: Outcome) -> Self {
        Self { outcome, height: 0 }
    }

    fn deeper(self) -> Self {
        Self {
            outcome: self.outcome,
            height: self.height + 1,
        }
    }
}

/// Busca `target` em `sequence`, que deve estar ordenada de forma crescente.
///
/// Funciona para qualquer `T: Ord`. A ordenação não é verificada; com uma
/// sequência desordenada o resultado não é definido. Sem memoização; use
/// [`RecursiveEvaluator`](super::RecursiveEvaluator) para isso.
pub fn binary_search<T: Ord>(sequence: &[T], target: &T, max_depth: usize) -> EvalResult {
    let mut calls = 0;
    search_range(sequence, target, 0, sequence.len(), 0, max_depth, &mut calls)
        .map(|trace| trace.outcome)
}

/// Busca no intervalo semiaberto `[left, right)`.
pub(crate) fn search_range<T: Ord>(
    sequence: &[T],
    target: &T,
    left: usize,
    right: usize,
    depth: usize,
    max_depth: usize,
    calls: &mut u64,
) -> Result<SearchTrace, EvalError> {
    if depth > max_depth {
        return Err(depth_exceeded(ProblemKind::BinarySearch, depth, max_depth));
    }
    *calls += 1;

    if left >= right {
        return Ok(SearchTrace::leaf(Outcome::NotFound));
    }

    // Forma aditiva: (left + right) / 2 pode estourar
    let mid = left + (right - left) / 2;
    tracing::trace!(left, right, mid, depth, "binary_search frame");

    match sequence[mid].cmp(target) {
        Ordering::Equal => Ok(SearchTrace::leaf(Outcome::Found(mid))),
        Ordering::Less => {
            search_range(sequence, target, mid + 1, right, depth + 1, max_depth, calls)
                .map(SearchTrace::deeper)
        }
        Ordering::Greater => {
            search_range(sequence, target, left, mid, depth + 1, max_depth, calls)
                .map(SearchTrace::deeper)
        }
    }
}
