//! Implementação dos comandos CLI do Memorec.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::evaluator::{RecursiveEvaluator, SharedEvaluator};
use crate::hooks::{HookSystem, MetricsHook};
use crate::types::config::{Config, DEFAULT_CONFIG_FILE};
use crate::types::errors::EvalError;
use crate::types::outcome::EvalReport;
use crate::types::problem::Problem;
use crate::{MemorecError, MemorecResult};

/// Entrada de um arquivo batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Problema a avaliar.
    pub problem: Problem,

    /// Profundidade máxima (padrão: config).
    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn build_evaluator(config: &Config, hooks: HookSystem) -> SharedEvaluator {
    SharedEvaluator::with_hooks(RecursiveEvaluator::from_config(&config.evaluator), hooks)
}

fn print_report(report: &EvalReport, json: bool) -> MemorecResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Avalia um único problema e imprime o resultado.
///
/// Erros de avaliação são impressos como resultado e também retornados,
/// para que o processo saia com o código do tipo de erro.
pub async fn evaluate(
    problem: Problem,
    max_depth: Option<usize>,
    json: bool,
    config: &Config,
) -> MemorecResult<()> {
    let max_depth = max_depth.unwrap_or(config.evaluator.max_depth);
    let evaluator = build_evaluator(config, HookSystem::with_defaults());

    let start = Instant::now();
    let result = evaluator.evaluate(&problem, max_depth).await;
    let report = EvalReport::new(problem, max_depth, &result, start.elapsed());

    print_report(&report, json)?;

    result.map(|_| ()).map_err(MemorecError::from)
}

/// Avalia um arquivo JSON com vários problemas.
///
/// Os problemas rodam em tarefas concorrentes que compartilham uma única
/// tabela de memoização. Os relatórios saem na ordem do arquivo.
pub async fn batch(input: &Path, json: bool, config: &Config) -> MemorecResult<()> {
    let content = std::fs::read_to_string(input)?;
    let entries: Vec<BatchEntry> = serde_json::from_str(&content)?;

    tracing::info!(count = entries.len(), input = %input.display(), "Running batch");

    let metrics = Arc::new(MetricsHook::new());
    let mut hooks = HookSystem::with_defaults();
    hooks.register(Box::new(metrics.clone()));
    let evaluator = build_evaluator(config, hooks);

    let mut handles = Vec::with_capacity(entries.len());
    for entry in entries {
        let evaluator = evaluator.clone();
        let max_depth = entry.max_depth.unwrap_or(config.evaluator.max_depth);

        handles.push(tokio::spawn(async move {
            let start = Instant::now();
            let result = evaluator.evaluate(&entry.problem, max_depth).await;
            let report = EvalReport::new(entry.problem, max_depth, &result, start.elapsed());
            (report, result)
        }));
    }

    let mut reports = Vec::with_capacity(handles.len());
    let mut worst: Option<EvalError> = None;

    for handle in handles {
        let (report, result) = handle
            .await
            .map_err(|e| MemorecError::other(format!("Tarefa de avaliação falhou: {}", e)))?;

        if let Err(error) = result {
            if worst.as_ref().map_or(true, |w| error.exit_code() > w.exit_code()) {
                worst = Some(error);
            }
        }
        reports.push(report);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report);
        }

        let summary = metrics.metrics();
        let stats = evaluator.stats().await;
        println!();
        println!(
            "{} problemas: {} ok, {} com erro ({} chamadas, {} entradas memoizadas)",
            summary.total_evaluations,
            summary.successes,
            summary.total_evaluations - summary.successes,
            stats.calls,
            stats.memo.size
        );
    }

    match worst {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Inicializa configuração no diretório especificado.
pub async fn init(path: Option<PathBuf>) -> MemorecResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join(DEFAULT_CONFIG_FILE);

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    Config::default_config().save(&config_path)?;

    println!("Memorec initialized successfully!");
    println!("Configuration created at: {}", config_path.display());

    Ok(())
}

/// Mostra versão.
pub fn version() {
    println!("memorec {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Avaliador recursivo com memoização e limite de profundidade");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_version() {
        // Apenas verifica que não causa panic
        version();
    }

    #[tokio::test]
    async fn test_evaluate_success() {
        let config = Config::default_config();
        let result = evaluate(Problem::factorial(5), None, false, &config).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_evaluate_not_found_is_success() {
        let config = Config::default_config();
        let problem = Problem::binary_search(vec![1, 3, 5, 7, 9, 11], 4);
        assert!(evaluate(problem, None, true, &config).await.is_ok());
    }

    #[tokio::test]
    async fn test_evaluate_error_exit_code() {
        let config = Config::default_config();
        let err = evaluate(Problem::factorial(100_000), Some(1000), false, &config)
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[tokio::test]
    async fn test_batch_reports_worst_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("problems.json");
        std::fs::write(
            &input,
            r#"[
                {"problem": {"kind": "factorial", "n": 5}},
                {"problem": {"kind": "factorial", "n": -1}},
                {"problem": {"kind": "fibonacci", "n": 50}, "max_depth": 5}
            ]"#,
        )
        .unwrap();

        let config = Config::default_config();
        let err = batch(&input, false, &config).await.unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[tokio::test]
    async fn test_batch_invalid_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.json");
        std::fs::write(&input, "[{").unwrap();

        let config = Config::default_config();
        let err = batch(&input, false, &config).await.unwrap_err();
        assert!(matches!(err, MemorecError::Json(_)));
    }

    #[tokio::test]
    async fn test_init_creates_config() {
        let dir = tempdir().unwrap();
        init(Some(dir.path().to_path_buf())).await.unwrap();

        let config = Config::load(dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config.evaluator.max_depth, 1000);
    }
}
