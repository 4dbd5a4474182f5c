//! Tabela de memoização.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use lru::LruCache;
use sha2::{Digest, Sha256};

use crate::types::outcome::Outcome;
use crate::types::problem::ProblemKind;

/// Chave da tabela: tipo de problema + chave normalizada.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemoKey {
    /// Recorrência indexada por `n` (fatorial, Fibonacci).
    Recurrence(ProblemKind, u64),

    /// Busca binária indexada pelo digest da sequência e do alvo.
    Search(String),
}

impl MemoKey {
    /// Chave para uma recorrência.
    pub fn recurrence(kind: ProblemKind, n: u64) -> Self {
        Self::Recurrence(kind, n)
    }

    /// Chave para uma busca binária.
    ///
    /// A chave é um hash SHA256 da forma normalizada: tamanho da sequência,
    /// valores em little-endian e o alvo.
    pub fn search(sequence: &[i64], target: i64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((sequence.len() as u64).to_le_bytes());
        for value in sequence {
            hasher.update(value.to_le_bytes());
        }
        hasher.update(target.to_le_bytes());

        Self::Search(hex::encode(hasher.finalize()))
    }
}

/// Entrada memoizada.
#[derive(Debug, Clone)]
pub struct MemoEntry {
    /// Resultado calculado.
    pub outcome: Outcome,

    /// Profundidade que a recursão ingênua abaixo desta entrada precisa.
    pub height: usize,

    /// Momento em que foi gravada.
    pub recorded_at: DateTime<Utc>,
}

impl MemoEntry {
    /// Cria uma nova entrada.
    pub fn new(outcome: Outcome, height: usize) -> Self {
        Self {
            outcome,
            height,
            recorded_at: Utc::now(),
        }
    }
}

/// Estatísticas da tabela.
#[derive(Debug, Clone, Default)]
pub struct MemoStats {
    /// Número atual de entradas.
    pub size: usize,

    /// Número de acertos.
    pub hits: u64,

    /// Número de falhas.
    pub misses: u64,
}

impl MemoStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Tabela de memoização write-once.
///
/// Sem limite de capacidade: nada é despejado enquanto a tabela existir.
pub struct MemoTable {
    entries: LruCache<MemoKey, MemoEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoTable {
    /// Cria uma tabela vazia.
    pub fn new() -> Self {
        Self {
            entries: LruCache::unbounded(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Busca uma entrada.
    pub fn get(&mut self, key: &MemoKey) -> Option<&MemoEntry> {
        match self.entries.get(key) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insere uma entrada.
    ///
    /// Retorna `false` se a chave já existia; a entrada original é mantida.
    pub fn insert(&mut self, key: MemoKey, entry: MemoEntry) -> bool {
        if self.entries.contains(&key) {
            tracing::trace!(?key, "Memo entry already present, keeping original");
            return false;
        }

        tracing::trace!(?key, outcome = %entry.outcome, height = entry.height, "Memo insert");
        self.entries.put(key, entry);
        true
    }

    /// Verifica se a chave está presente, sem contar acerto ou falha.
    pub fn contains(&self, key: &MemoKey) -> bool {
        self.entries.contains(key)
    }

    /// Número de entradas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Verifica se a tabela está vazia.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retorna estatísticas da tabela.
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            size: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for MemoTable {
    fn default() -> Self {
        Self::new()
    }
}
