//! Motor do avaliador recursivo.
//!
//! As recorrências rodam num trampolim: uma pilha explícita de frames em
//! vez da pilha nativa. A profundidade de cada frame é contada como na
//! recursão ingênua, então o limite de profundidade vira um erro tipado e
//! nunca um stack overflow, mesmo com limites muito altos.

use crate::memo::{MemoEntry, MemoKey, MemoStats, MemoTable};
use crate::types::config::EvaluatorConfig;
use crate::types::errors::{EvalError, EvalResult};
use crate::types::outcome::Outcome;
use crate::types::problem::{Problem, ProblemKind};

use super::recurrence::{Factorial, Fibonacci, Recurrence};
use super::search::search_range;

/// Estatísticas do avaliador.
#[derive(Debug, Clone, Default)]
pub struct EvaluatorStats {
    /// Frames recursivos efetivamente executados (acertos na tabela não contam).
    pub calls: u64,

    /// Estatísticas da tabela de memoização.
    pub memo: MemoStats,
}

/// Frame do trampolim.
enum Frame {
    /// Resolve `n` na profundidade indicada (consulta a tabela primeiro).
    Visit { n: u64, depth: usize },
    /// Combina os resultados dos `arity` subproblemas de `n`.
    Combine { n: u64, arity: usize },
}

/// Resultado parcial na pilha de valores.
struct Partial {
    value: u128,
    height: usize,
}

/// Avaliador recursivo com memoização e limite de profundidade.
///
/// A profundidade é sempre medida na árvore de chamadas da recursão
/// ingênua: um acerto na tabela é cobrado pela altura da subárvore que
/// evitou. Assim o mesmo problema dá sempre o mesmo resultado, não importa
/// o que já foi memoizado.
pub struct RecursiveEvaluator {
    memo: MemoTable,
    memoize: bool,
    calls: u64,
}

impl RecursiveEvaluator {
    /// Cria um avaliador com memoização habilitada.
    pub fn new() -> Self {
        Self {
            memo: MemoTable::new(),
            memoize: true,
            calls: 0,
        }
    }

    /// Cria um avaliador a partir da configuração.
    pub fn from_config(config: &EvaluatorConfig) -> Self {
        Self::new().with_memoization(config.memoize)
    }

    /// Habilita ou desabilita a memoização.
    pub fn with_memoization(mut self, enabled: bool) -> Self {
        self.memoize = enabled;
        self
    }

    /// Verifica se a memoização está habilitada.
    pub fn is_memoizing(&self) -> bool {
        self.memoize
    }

    /// Avalia um problema com o limite de profundidade dado.
    ///
    /// A chamada raiz está na profundidade 0; uma chamada numa profundidade
    /// maior que `max_depth` falha com [`EvalError::DepthExceeded`].
    pub fn evaluate(&mut self, problem: &Problem, max_depth: usize) -> EvalResult {
        tracing::debug!(%problem, max_depth, "Evaluating");

        let result = match problem {
            Problem::Factorial { n } => self.run_recurrence(&Factorial, *n, max_depth),
            Problem::Fibonacci { n } => self.run_recurrence(&Fibonacci, *n, max_depth),
            Problem::BinarySearch { sequence, target } => {
                self.run_search(sequence, *target, max_depth)
            }
        };

        tracing::debug!(%problem, ?result, calls = self.calls, "Evaluation finished");
        result
    }

    /// Total de frames executados desde a criação.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Retorna estatísticas do avaliador.
    pub fn stats(&self) -> EvaluatorStats {
        EvaluatorStats {
            calls: self.calls,
            memo: self.memo.stats(),
        }
    }

    fn run_recurrence(&mut self, rec: &dyn Recurrence, n: i64, max_depth: usize) -> EvalResult {
        let kind = rec.kind();
        let root = u64::try_from(n).map_err(|_| EvalError::InvalidInput { kind, n })?;

        // A descida mais funda visita todos os níveis antes de qualquer
        // Combine, então profundidade e overflow se decidem antes de empilhar.
        let height = rec.height(root);
        if height > u64::try_from(max_depth).unwrap_or(u64::MAX) {
            let depth = usize::try_from(height).unwrap_or(usize::MAX);
            return Err(depth_exceeded(kind, depth, max_depth));
        }
        if let Some(limit) = rec.overflows_from() {
            if root >= limit {
                tracing::debug!(%kind, n = root, limit, "Result does not fit in u128");
                return Err(EvalError::Overflow { kind, n: limit });
            }
        }

        // Pilha limitada pela altura: no máximo `arity` frames por nível
        let mut frames = vec![Frame::Visit { n: root, depth: 0 }];
        let mut partials: Vec<Partial> = Vec::new();

        while let Some(frame) = frames.pop() {
            match frame {
                Frame::Visit { n, depth } => {
                    let key = MemoKey::recurrence(kind, n);

                    if let Some((value, height)) = self.lookup(&key) {
                        if depth + height > max_depth {
                            return Err(depth_exceeded(kind, depth + height, max_depth));
                        }
                        partials.push(Partial { value, height });
                        continue;
                    }

                    if depth > max_depth {
                        return Err(depth_exceeded(kind, depth, max_depth));
                    }
                    self.calls += 1;
                    tracing::trace!(%kind, n, depth, "frame");

                    if let Some(value) = rec.base(n) {
                        self.record(key, Outcome::Value(value), 0);
                        partials.push(Partial { value, height: 0 });
                        continue;
                    }

                    let children = rec.subproblems(n);
                    frames.push(Frame::Combine {
                        n,
                        arity: children.len(),
                    });
                    for child in children.into_iter().rev() {
                        frames.push(Frame::Visit {
                            n: child,
                            depth: depth + 1,
                        });
                    }
                }
                Frame::Combine { n, arity } => {
                    let parts = partials.split_off(partials.len() - arity);
                    let values: Vec<u128> = parts.iter().map(|p| p.value).collect();
                    let height = 1 + parts.iter().map(|p| p.height).max().unwrap_or(0);

                    let value = rec
                        .combine(n, &values)
                        .ok_or(EvalError::Overflow { kind, n })?;

                    self.record(MemoKey::recurrence(kind, n), Outcome::Value(value), height);
                    partials.push(Partial { value, height });
                }
            }
        }

        let root = partials
            .pop()
            .expect("trampoline leaves exactly one result");
        Ok(Outcome::Value(root.value))
    }

    fn run_search(&mut self, sequence: &[i64], target: i64, max_depth: usize) -> EvalResult {
        let key = MemoKey::search(sequence, target);

        if self.memoize {
            if let Some(entry) = self.memo.get(&key) {
                if entry.height > max_depth {
                    return Err(depth_exceeded(
                        ProblemKind::BinarySearch,
                        entry.height,
                        max_depth,
                    ));
                }
                return Ok(entry.outcome);
            }
        }

        let trace = search_range(
            sequence,
            &target,
            0,
            sequence.len(),
            0,
            max_depth,
            &mut self.calls,
        )?;

        self.record(key, trace.outcome, trace.height);
        Ok(trace.outcome)
    }

    /// Consulta a tabela para uma recorrência: `(valor, altura)`.
    fn lookup(&mut self, key: &MemoKey) -> Option<(u128, usize)> {
        if !self.memoize {
            return None;
        }

        let entry = self.memo.get(key)?;
        let value = entry.outcome.as_value()?;
        tracing::trace!(?key, value = %value, "memo hit");
        Some((value, entry.height))
    }

    fn record(&mut self, key: MemoKey, outcome: Outcome, height: usize) {
        if self.memoize {
            self.memo.insert(key, MemoEntry::new(outcome, height));
        }
    }
}

impl Default for RecursiveEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Monta o erro de profundidade e registra o aviso.
pub(crate) fn depth_exceeded(kind: ProblemKind, depth: usize, max_depth: usize) -> EvalError {
    tracing::warn!(
        %kind,
        depth,
        max_depth,
        "Maximum recursion depth exceeded"
    );
    EvalError::DepthExceeded { kind, max_depth }
}
