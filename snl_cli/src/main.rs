use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use shared_event_bus::{EventPublisher, FileEventPublisher, PipelineEvent};
use shared_logging::{JsonLogger, LogLevel, LogRecord};
use snlgen_actors::{verify, Domain};
use snlgen_generator::MockGenerator;
use snlgen_pipeline::{process, GapPolicy, PipelineConfig, SubmissionRecord};
use snlgen_storage::{aggregate_statistics, FileStore, SubmissionStore};
use tokio::runtime::Runtime;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "snl", version, about = "Requirements-to-SNL processing pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Processes a requirement submission into a scored case study.
    Process(ProcessArgs),
    /// Shows a stored case study by id.
    Show {
        id: Uuid,
        #[arg(long, default_value = "snl_data/records")]
        store_dir: PathBuf,
    },
    /// Lists most recent case studies.
    List {
        /// Number of entries to display.
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long, default_value = "snl_data/records")]
        store_dir: PathBuf,
    },
    /// Prints aggregate statistics over all stored case studies.
    Stats {
        #[arg(long, default_value = "snl_data/records")]
        store_dir: PathBuf,
    },
    /// Checks a stored case study's actors against diagram sources.
    Verify {
        id: Uuid,
        /// Diagram files (PlantUML/Mermaid-style class or actor declarations).
        diagrams: Vec<PathBuf>,
        #[arg(long, default_value = "snl_data/records")]
        store_dir: PathBuf,
    },
}

#[derive(Parser, Debug)]
struct ProcessArgs {
    /// File holding the requirement text.
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,
    /// Requirement text given inline.
    #[arg(long)]
    text: Option<String>,
    #[arg(long, default_value = "untitled case study")]
    title: String,
    /// Domain override (library, booking, monitoring, home_automation).
    #[arg(long)]
    domain: Option<String>,
    /// Clarification passed to the candidate generator on a retry.
    #[arg(long)]
    feedback: Option<String>,
    /// Pipeline configuration file (JSON).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Record unmatched sentences instead of dropping them.
    #[arg(long)]
    flag_gaps: bool,
    #[arg(long, default_value = "snl_data/records")]
    store_dir: PathBuf,
    #[arg(long, default_value = "snl_data/logs/pipeline.log.jsonl")]
    log_file: PathBuf,
    #[arg(long)]
    event_log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Process(args) => handle_process(args),
        Commands::Show { id, store_dir } => {
            let store = FileStore::new(store_dir);
            match store.load(id)? {
                Some(stored) => {
                    let record = SubmissionRecord::from_stored(&stored)?;
                    println!("{}", serde_json::to_string_pretty(&record)?);
                }
                None => println!("case study {id} not found"),
            }
            Ok(())
        }
        Commands::List { limit, store_dir } => {
            let store = FileStore::new(store_dir);
            for summary in store.list(limit)? {
                println!("{} | {} | {}", summary.id, summary.created_at, summary.title);
            }
            Ok(())
        }
        Commands::Stats { store_dir } => {
            let store = FileStore::new(store_dir);
            let stats = aggregate_statistics(&store.load_all()?);
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
        Commands::Verify {
            id,
            diagrams,
            store_dir,
        } => handle_verify(id, &diagrams, &store_dir),
    }
}

fn handle_process(args: ProcessArgs) -> Result<()> {
    let text = read_submission(&args)?;
    let config = build_config(&args)?;

    let logger = JsonLogger::new(&args.log_file)?;
    let event_sink = match args.event_log.as_ref() {
        Some(path) => Some(FileEventPublisher::new(path)?),
        None => None,
    };
    let runtime = Runtime::new()?;

    logger.log(
        &LogRecord::new("cli.process", LogLevel::Info, "submission received")
            .with_field("title", json!(args.title))
            .with_field("chars", json!(text.chars().count())),
    )?;

    let generator = MockGenerator;
    let result = runtime.block_on(process(
        &text,
        &args.title,
        &generator,
        args.feedback.as_deref(),
        &config,
    ));

    match result {
        Ok(record) => {
            let store = FileStore::new(&args.store_dir);
            let id = store.save(&record.to_stored()?)?;
            for warning in &record.warnings {
                logger.warn("cli.process", warning)?;
            }
            logger.log(
                &LogRecord::new("cli.process", LogLevel::Info, "submission processed")
                    .with_field("id", json!(id))
                    .with_field("domain", json!(record.domain.label()))
                    .with_field("accuracy", json!(record.comparison.metrics.accuracy)),
            )?;
            publish(
                &runtime,
                event_sink.as_ref(),
                "submission.processed",
                json!({
                    "id": id,
                    "title": record.title,
                    "domain": record.domain.label(),
                    "accuracy": record.comparison.metrics.accuracy,
                }),
            )?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "id": id,
                    "title": record.title,
                    "domain": record.domain.label(),
                    "actors": record.actors,
                    "rupp_statements": record.rupp.statement_texts(),
                    "flagged_sentences": record.rupp.flagged,
                    "ai_statements": record.ai.statements,
                    "metrics": record.comparison.metrics,
                    "quality": record.comparison.summary.quality_assessment,
                    "recommendations": record.comparison.summary.recommendations,
                    "warnings": record.warnings,
                }))?
            );
            Ok(())
        }
        Err(err) => {
            logger.log(
                &LogRecord::new("cli.process", LogLevel::Error, "submission rejected")
                    .with_field("error", json!(err.to_string())),
            )?;
            publish(
                &runtime,
                event_sink.as_ref(),
                "submission.failed",
                json!({ "title": args.title, "error": err.to_string() }),
            )?;
            Err(err.into())
        }
    }
}

fn handle_verify(id: Uuid, diagrams: &[PathBuf], store_dir: &Path) -> Result<()> {
    anyhow::ensure!(!diagrams.is_empty(), "at least one diagram file is required");
    let store = FileStore::new(store_dir);
    let stored = store
        .load(id)?
        .with_context(|| format!("case study {id} not found"))?;
    let record = SubmissionRecord::from_stored(&stored)?;

    let mut contents = Vec::new();
    for path in diagrams {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading diagram {}", path.display()))?;
        contents.push(content);
    }
    let sources: Vec<&str> = contents.iter().map(String::as_str).collect();
    let actor_names: Vec<String> = record.actors.iter().map(|a| a.name.clone()).collect();
    let verification = verify(&actor_names, &sources);
    println!("{}", serde_json::to_string_pretty(&verification)?);
    Ok(())
}

fn read_submission(args: &ProcessArgs) -> Result<String> {
    match (&args.file, &args.text) {
        (Some(path), _) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        (None, Some(text)) => Ok(text.clone()),
        (None, None) => anyhow::bail!("either --file or --text is required"),
    }
}

fn build_config(args: &ProcessArgs) -> Result<PipelineConfig> {
    let mut config = match args.config.as_ref() {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&data).context("parsing pipeline config")?
        }
        None => PipelineConfig::default(),
    };
    if let Some(hint) = args.domain.as_deref() {
        let domain = Domain::parse(hint)
            .with_context(|| format!("unknown domain '{hint}'"))?;
        config.domain_hint = Some(domain);
    }
    if args.flag_gaps {
        config.gap_policy = GapPolicy::Flag;
    }
    Ok(config)
}

fn publish(
    runtime: &Runtime,
    sink: Option<&FileEventPublisher>,
    kind: &str,
    payload: serde_json::Value,
) -> Result<()> {
    if let Some(sink) = sink {
        let event = PipelineEvent::new("snl", kind, payload);
        runtime.block_on(sink.publish(event))?;
    }
    Ok(())
}
