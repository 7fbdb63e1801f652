//! Codex Player - command-line composition root.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codex_domain::{CharacterBuild, CharacterId, CompletionTracker, DraftSnapshot};
use codex_player::application::{DraftService, WizardSession};
use codex_player::infrastructure::console::{completion_line, pool_lines, validation_lines};
use codex_player::infrastructure::{
    spawn_autosave, wizard_input, ConsoleRenderSink, FileStorage, HttpApprovalClient,
    PlayerConfig, Reply, SystemClock, WizardCommand,
};
use codex_player::ports::outbound::{ClockPort, PoolSummary};
use codex_shared::CatalogCategory;

const USAGE: &str = "Usage: codex-player <command>

Commands:
  catalog                          Fetch and print the trait catalogs
  check <build.json>               Validate a saved build
  submit <build.json> [--edit ID]  Validate and submit a build
  edit <ID>                        Fetch a character for resubmission as a build file
  wizard [build.json]              Build interactively from stdin, with draft restore and autosave";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays clean for build files
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codex_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = PlayerConfig::from_env();
    tracing::debug!(api_url = %config.api_url, storage = ?config.storage_path, "Configuration loaded");

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let args: Vec<String> = std::env::args().skip(1).collect();
    let interactive = args.first().map(String::as_str) == Some("wizard");
    let drafts = DraftService::new(
        Arc::new(FileStorage::open(&config.storage_path)),
        clock.clone(),
    );
    let session = WizardSession::new(
        Arc::new(HttpApprovalClient::from_config(&config)),
        Arc::new(ConsoleRenderSink::new(interactive, interactive)),
        drafts,
    );

    match args.first().map(String::as_str) {
        Some("catalog") => catalog(session).await,
        Some("check") => {
            let path = args.get(1).context(USAGE)?;
            check(&read_build(Path::new(path))?)
        }
        Some("submit") => {
            let path = args.get(1).context(USAGE)?;
            let editing = parse_edit_flag(&args[2..])?;
            let build = read_build(Path::new(path))?;
            submit(session.with_build(build).with_editing(editing)).await
        }
        Some("edit") => {
            let id: CharacterId = args.get(1).context(USAGE)?.parse()?;
            edit(session, id, clock.as_ref()).await
        }
        Some("wizard") => {
            let build = args.get(1).map(|p| read_build(Path::new(p))).transpose()?;
            wizard(session, build, config.autosave_interval).await
        }
        Some(cmd) => anyhow::bail!("Unknown command: {cmd}\n\n{USAGE}"),
        None => anyhow::bail!("{USAGE}"),
    }
}

async fn catalog(mut session: WizardSession) -> anyhow::Result<ExitCode> {
    session.load_catalog().await?;
    for category in CatalogCategory::ALL {
        println!("== {} ==", category);
        for descriptor in session.catalog().get(category) {
            let hint = match descriptor.qualifier() {
                Some(codex_domain::Qualifier::Instance) => " [instance]",
                Some(codex_domain::Qualifier::Specialty) => " [specialty]",
                None => "",
            };
            println!("  {}{}", descriptor.name, hint);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn check(build: &CharacterBuild) -> anyhow::Result<ExitCode> {
    let result = build.validate();
    for line in pool_lines(&PoolSummary::resolve(&build.pools())) {
        println!("{}", line);
    }
    for line in validation_lines(&result) {
        println!("{}", line);
    }
    for message in result.messages() {
        println!("- {}", message);
    }
    println!(
        "Steps: {}",
        completion_line(&CompletionTracker::progress(&result, build.bio()))
    );

    if result.is_valid() {
        println!("Build is valid");
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

async fn submit(mut session: WizardSession) -> anyhow::Result<ExitCode> {
    print!("{}", session.review());
    match session.submit().await {
        Ok(ack) => {
            if let Some(message) = ack.message {
                println!("{}", message);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_blocked() => {
            check(session.build())?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

async fn edit(
    mut session: WizardSession,
    id: CharacterId,
    clock: &dyn ClockPort,
) -> anyhow::Result<ExitCode> {
    session.load_for_edit(id).await?;
    let snapshot = DraftSnapshot::capture(session.build(), clock.now());
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(ExitCode::SUCCESS)
}

async fn wizard(
    mut session: WizardSession,
    build: Option<CharacterBuild>,
    autosave: std::time::Duration,
) -> anyhow::Result<ExitCode> {
    match build {
        Some(build) => session = session.with_build(build),
        None => {
            session.offer_draft();
        }
    }
    // The wizard stays usable without a catalog; the failure was already reported
    if session.load_catalog().await.is_err() {
        tracing::warn!("Continuing without the trait catalog");
    }
    session.refresh();
    println!("{}", wizard_input::HELP);

    let session = Arc::new(Mutex::new(session));
    let autosaver = spawn_autosave(session.clone(), autosave);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut submitted = false;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match WizardCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        let mut guard = session.lock().await;
        match wizard_input::apply(&mut guard, command).await {
            Ok(Reply::Continue) => {}
            Ok(Reply::Print(text)) => println!("{}", text),
            Ok(Reply::Quit) => break,
            Ok(Reply::Submitted) => {
                submitted = true;
                break;
            }
            Err(e) if e.is_blocked() => {
                for line in validation_lines(&guard.build().validate()) {
                    println!("{}", line);
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    autosaver.abort();
    if !submitted {
        session.lock().await.save_draft();
    }
    Ok(ExitCode::SUCCESS)
}

fn read_build(path: &Path) -> anyhow::Result<CharacterBuild> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading build file {}", path.display()))?;
    let snapshot: DraftSnapshot = serde_json::from_str(&json)
        .with_context(|| format!("parsing build file {}", path.display()))?;
    let (build, skipped) = snapshot.restore();
    for name in skipped {
        tracing::warn!(name = %name, "Skipping unknown trait in build file");
    }
    Ok(build)
}

fn parse_edit_flag(rest: &[String]) -> anyhow::Result<Option<CharacterId>> {
    match rest {
        [] => Ok(None),
        [flag, id] if flag == "--edit" => Ok(Some(id.parse()?)),
        _ => anyhow::bail!("{USAGE}"),
    }
}
