//! Tipos compartilhados do Memorec.

pub mod config;
pub mod errors;
pub mod outcome;
pub mod problem;
