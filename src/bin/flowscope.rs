use clap::{Parser, Subcommand};
use flowscope::config::loader::{load_config_from_yaml, load_script_from_yaml};
use flowscope::config::{ReviewConfig, SourceConfig};
use flowscope::model::Locale;
use flowscope::provider::Pagination;
use flowscope::session::{ReviewSession, UiCommand};
use flowscope::view::columns::selection_banner;
use flowscope::view::{FlowColumn, ViewSnapshot};
use std::path::PathBuf;
use anyhow::{Result, bail};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the review config YAML file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Serve data from a fixture YAML file instead of the configured source
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Override the configured locale (en, zh)
    #[arg(long, global = true, value_parser = parse_locale)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of tasks
    Tasks {
        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Select a task and print its flows
    Review {
        #[arg(long, short)]
        task: String,

        /// Flow rows to expand after loading
        #[arg(long, short)]
        expand: Vec<String>,

        /// Print the view snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a YAML list of UI commands, printing the view after each one
    Replay {
        #[arg(long, short)]
        script: PathBuf,
    },
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    match s {
        "en" => Ok(Locale::En),
        "zh" => Ok(Locale::Zh),
        other => Err(format!("unknown locale `{}` (expected en or zh)", other)),
    }
}

fn resolve_config(cli: &Cli) -> Result<ReviewConfig> {
    let mut config = match (&cli.config, &cli.fixture) {
        (Some(path), _) => load_config_from_yaml(path)?,
        (None, Some(path)) => ReviewConfig {
            locale: Locale::default(),
            page_size: 20,
            source: SourceConfig::Fixture { path: path.clone() },
        },
        (None, None) => bail!("either --config or --fixture is required"),
    };
    if let (Some(_), Some(path)) = (&cli.config, &cli.fixture) {
        config.source = SourceConfig::Fixture { path: path.clone() };
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    Ok(config)
}

fn print_snapshot(snapshot: &ViewSnapshot, locale: Locale) {
    println!("{}", selection_banner(snapshot.selected.as_deref(), locale));
    match snapshot.phase {
        "noSelection" => return,
        "loading" => println!("(loading)"),
        "failed" => println!("error: {}", snapshot.error.as_deref().unwrap_or_default()),
        _ => {}
    }
    if snapshot.phase != "loaded" {
        return;
    }
    let header: Vec<&str> = FlowColumn::ALL.iter().map(|c| c.title(locale)).collect();
    println!("  {}", header.join("\t"));
    for flow in &snapshot.flows {
        let marker = if snapshot.expanded.contains(&flow.flow_id) { "-" } else { "+" };
        let cells: Vec<String> = FlowColumn::ALL.iter().map(|c| c.cell(flow, locale)).collect();
        println!("{} {}", marker, cells.join("\t"));
        if marker == "-" {
            println!("    issuer={} cn={} validity={}", flow.issuer, flow.common_name, flow.validity);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let locale = config.locale;

    let providers = config.source.build()?;
    let mut session = ReviewSession::new(providers.tasks, providers.flows);
    info!(session_id = %session.id(), "Review session started");

    match cli.command {
        Commands::Tasks { page, page_size } => {
            let pagination = Pagination::new(page, page_size.unwrap_or(config.page_size));
            let view_columns = session.view().columns();
            let task_page = session.load_tasks(pagination).await;
            if !task_page.success {
                bail!("task listing failed");
            }
            let header: Vec<&str> = view_columns.iter().map(|c| c.title(locale)).collect();
            println!("{}", header.join("\t"));
            for task in &task_page.data {
                let cells: Vec<String> = view_columns.iter().map(|c| c.cell(task, locale)).collect();
                println!("{}", cells.join("\t"));
            }
            println!("({} of {} tasks)", task_page.data.len(), task_page.total);
        }

        Commands::Review { task, expand, json } => {
            session.select(&task);
            session.settle().await;
            for flow_id in &expand {
                if !session.toggle_row(flow_id) {
                    info!(flow_id = %flow_id, "Flow not in the loaded set, not expanded");
                }
            }
            let snapshot = session.view().snapshot();
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print_snapshot(&snapshot, locale);
            }
        }

        Commands::Replay { script } => {
            let commands = load_script_from_yaml(&script)?;
            info!("Replaying {} commands", commands.len());
            for command in commands {
                println!("> {:?}", command);
                let wait = !matches!(command, UiCommand::Toggle { .. });
                session.dispatch(command);
                if wait {
                    session.settle().await;
                }
                print_snapshot(&session.view().snapshot(), locale);
            }
        }
    }

    Ok(())
}
