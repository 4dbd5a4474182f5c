//! Tipos de erro do Memorec.

use thiserror::Error;

use super::problem::ProblemKind;

/// Tipo de resultado padrão do Memorec.
pub type MemorecResult<T> = Result<T, MemorecError>;

/// Resultado de uma avaliação: valor de sucesso ou erro estruturado.
pub type EvalResult = Result<super::outcome::Outcome, EvalError>;

/// Falhas de avaliação reportadas ao chamador.
///
/// `NotFound` da busca binária não aparece aqui: é um resultado normal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Entrada inválida para {kind}: n = {n} (deve ser >= 0)")]
    InvalidInput { kind: ProblemKind, n: i64 },

    #[error("Profundidade máxima de recursão ({max_depth}) excedida em {kind}")]
    DepthExceeded { kind: ProblemKind, max_depth: usize },

    #[error("Overflow ao calcular {kind}({n}): resultado não cabe em u128")]
    Overflow { kind: ProblemKind, n: u64 },
}

impl EvalError {
    /// Código de saída do processo associado ao tipo de erro.
    pub fn exit_code(&self) -> i32 {
        match self {
            EvalError::InvalidInput { .. } => 3,
            EvalError::DepthExceeded { .. } => 4,
            EvalError::Overflow { .. } => 5,
        }
    }

    /// Nome curto do tipo de erro (usado em relatórios e métricas).
    pub fn kind_name(&self) -> &'static str {
        match self {
            EvalError::InvalidInput { .. } => "invalid_input",
            EvalError::DepthExceeded { .. } => "depth_exceeded",
            EvalError::Overflow { .. } => "overflow",
        }
    }
}

/// Erros possíveis no Memorec.
#[derive(Error, Debug)]
pub enum MemorecError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl MemorecError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Código de saída do processo.
    ///
    /// Erros de avaliação usam o código do seu tipo; todo o resto sai com 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            MemorecError::Eval(e) => e.exit_code(),
            _ => 1,
        }
    }
}
