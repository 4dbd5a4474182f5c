//! Tabela de memoização do avaliador.
//!
//! Guarda resultados de subproblemas já calculados, indexados por tipo de
//! problema e chave normalizada. As entradas são escritas uma única vez e
//! nunca invalidadas enquanto o avaliador dono da tabela existir.

mod table;

pub use table::{MemoEntry, MemoKey, MemoStats, MemoTable};
