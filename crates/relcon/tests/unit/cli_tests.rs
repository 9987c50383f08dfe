//! CLI parsing and command tests

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use relcon::cli::{BulkArgs, Cli, Commands, execute, run};
use relcon::domain::{EmbeddingProviderKind, StorageBackendKind};
use relcon::infrastructure::{AppConfig, RelconContext};

fn items_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"type":"post","id":"b","fields":["Second post"]}}"#).unwrap();
    writeln!(file, r#"{{"type":"post","id":"a","fields":["First post"]}}"#).unwrap();
    writeln!(file, r#"{{"type":"event","id":"e","fields":["Launch party"]}}"#).unwrap();
    writeln!(file, r#"{{"type":"post","id":"blank","fields":["<br/>"]}}"#).unwrap();
    file
}

async fn context() -> RelconContext {
    let mut config = AppConfig::default();
    config.embedding.provider = EmbeddingProviderKind::Null;
    config.embedding.dimensions = 8;
    config.storage.backend = StorageBackendKind::Memory;
    config.similarity.candidate_types = vec!["post".to_string(), "event".to_string()];
    RelconContext::build(config).await.unwrap()
}

async fn run_command(context: &RelconContext, args: &[&str]) -> String {
    let cli = Cli::try_parse_from(std::iter::once("relcon").chain(args.iter().copied()))
        .expect("valid arguments");
    let mut out = Vec::new();
    execute(cli.command, context, cli.json, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_parses_rebuild_arguments() {
    let cli = Cli::try_parse_from([
        "relcon", "rebuild", "post", "--force", "--chunk", "25", "--queue", "--input", "items.jsonl",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Commands::Rebuild {
            bulk: BulkArgs {
                content_type: Some("post".to_string()),
                force: true,
                chunk: 25,
                input: "items.jsonl".into(),
            },
            queue: true,
        }
    );
}

#[test]
fn test_bulk_defaults() {
    let cli = Cli::try_parse_from(["relcon", "embeddings", "-i", "items.jsonl"]).unwrap();
    match cli.command {
        Commands::Embeddings(bulk) => {
            assert_eq!(bulk.content_type, None);
            assert!(!bulk.force);
            assert_eq!(bulk.chunk, 100);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_bulk_requires_input() {
    assert!(Cli::try_parse_from(["relcon", "rebuild"]).is_err());
}

#[test]
fn test_search_accepts_repeated_types() {
    let cli = Cli::try_parse_from([
        "relcon", "search", "rust", "--type", "post", "--type", "event", "--limit", "3",
    ])
    .unwrap();
    assert_eq!(
        cli.command,
        Commands::Search {
            query: "rust".to_string(),
            types: vec!["post".to_string(), "event".to_string()],
            limit: 3,
        }
    );
}

#[tokio::test]
async fn test_embeddings_skip_existing_unless_forced() {
    let file = items_file();
    let input = file.path().to_str().unwrap();
    let context = context().await;

    let first = run_command(&context, &["embeddings", "--input", input]).await;
    assert!(first.contains("processed: 3"), "{first}");
    assert!(first.contains("skipped: 1"), "{first}");

    let second = run_command(&context, &["embeddings", "--input", input]).await;
    assert!(second.contains("processed: 0"), "{second}");
    assert!(second.contains("skipped: 4"), "{second}");

    let forced = run_command(&context, &["embeddings", "post", "--force", "--input", input]).await;
    assert!(forced.contains("processed: 2"), "{forced}");
}

#[tokio::test]
async fn test_rebuild_through_queue_reports_queue_stats() {
    let file = items_file();
    let input = file.path().to_str().unwrap();
    let context = context().await;

    let output = run_command(&context, &["--json", "rebuild", "--queue", "--input", input]).await;
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["report"]["processed"], 4);
    assert_eq!(value["queue"]["succeeded"], 4);
    assert_eq!(value["queue"]["failed"], 0);
}

#[tokio::test]
async fn test_search_lists_hits() {
    let file = items_file();
    let input = file.path().to_str().unwrap();
    let context = context().await;
    run_command(&context, &["rebuild", "--input", input]).await;

    let output = run_command(&context, &["search", "anything", "--type", "post"]).await;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec!["0.0000\tpost:a", "0.0000\tpost:b"]);
}

#[tokio::test]
async fn test_stats_and_related() {
    let file = items_file();
    let input = file.path().to_str().unwrap();
    let context = context().await;
    run_command(&context, &["rebuild", "--input", input]).await;

    let stats = run_command(&context, &["stats"]).await;
    assert!(stats.contains("embeddings: 3"), "{stats}");

    let related = run_command(&context, &["related", "post", "a"]).await;
    assert!(related.is_empty());
}

#[tokio::test]
async fn test_providers_lists_registry() {
    let context = context().await;
    let output = run_command(&context, &["providers"]).await;
    for name in ["null", "ollama", "openai"] {
        assert!(output.lines().any(|l| l.starts_with(name)), "{output}");
    }
}

#[tokio::test]
async fn test_missing_config_file_exits_with_config_code() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let cli = Cli::try_parse_from([
        "relcon",
        "--config",
        missing.to_str().unwrap(),
        "stats",
    ])
    .unwrap();

    assert_eq!(run(cli).await, ExitCode::from(2));
}
