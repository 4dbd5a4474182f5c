//! # Memorec
//!
//! Avaliador recursivo com memoização e limite de profundidade.
//!
//! Resolve fatorial, Fibonacci e busca binária com os mesmos resultados da
//! recursão ingênua. Subproblemas repetidos são servidos por uma tabela de
//! memoização, e recursão além do limite configurado vira um erro tipado
//! em vez de um stack overflow.
//!
//! ## Módulos
//!
//! - [`evaluator`] - Avaliador recursivo e versão compartilhada
//! - [`memo`] - Tabela de memoização
//! - [`hooks`] - Sistema de hooks para observar avaliações
//! - [`types`] - Tipos compartilhados
//! - `cli` - Interface de linha de comando (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod evaluator;
pub mod hooks;
pub mod memo;
pub mod types;

pub use evaluator::{RecursiveEvaluator, SharedEvaluator};
pub use types::config::Config;
pub use types::errors::{EvalError, EvalResult, MemorecError, MemorecResult};
pub use types::outcome::Outcome;
pub use types::problem::Problem;
