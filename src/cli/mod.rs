//! Interface de linha de comando do Memorec.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Memorec - avaliador recursivo com memoização e limite de profundidade.
#[derive(Parser, Debug)]
#[command(name = "memorec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "memorec.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Imprime resultados em JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calcula n!.
    Factorial {
        /// Valor de n.
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Profundidade máxima de recursão (padrão: config).
        #[arg(short = 'd', long)]
        max_depth: Option<usize>,
    },

    /// Calcula o n-ésimo número de Fibonacci.
    Fibonacci {
        /// Valor de n.
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Profundidade máxima de recursão (padrão: config).
        #[arg(short = 'd', long)]
        max_depth: Option<usize>,
    },

    /// Busca binária de um alvo numa sequência ordenada.
    Search {
        /// Valor procurado.
        #[arg(allow_negative_numbers = true)]
        target: i64,

        /// Sequência em ordem crescente.
        #[arg(allow_negative_numbers = true, num_args = 0..)]
        values: Vec<i64>,

        /// Profundidade máxima de recursão (padrão: config).
        #[arg(short = 'd', long)]
        max_depth: Option<usize>,
    },

    /// Avalia um arquivo JSON com uma lista de problemas.
    Batch {
        /// Arquivo de entrada.
        input: PathBuf,
    },

    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Mostra versão.
    Version,
}
