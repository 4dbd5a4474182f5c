//! Avaliador recursivo do Memorec.
//!
//! Resolve fatorial, Fibonacci e busca binária com os mesmos resultados da
//! recursão ingênua, usando uma tabela de memoização para subproblemas
//! repetidos e um limite explícito de profundidade.
//!
//! ## Exemplo
//!
//! ```rust
//! use memorec::evaluator::RecursiveEvaluator;
//! use memorec::types::outcome::Outcome;
//! use memorec::types::problem::Problem;
//!
//! let mut evaluator = RecursiveEvaluator::new();
//! let result = evaluator.evaluate(&Problem::fibonacci(10), 1000);
//! assert_eq!(result, Ok(Outcome::Value(55)));
//! ```

mod engine;
mod recurrence;
mod search;
mod shared;

pub use engine::{EvaluatorStats, RecursiveEvaluator};
pub use recurrence::{Factorial, Fibonacci, Recurrence};
pub use search::binary_search;
pub use shared::SharedEvaluator;
