//! SkillUp assistant binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Install the tracing subscriber
//! 3. Load and check the course catalog
//! 4. Build the intent router and chat orchestrator
//! 5. Answer one question, or run an interactive session on stdin

mod cli;

use std::io::{self, BufRead, Write};

use clap::Parser;
use skillup_chat::{
    Action, ChatError, ChatOrchestrator, Classifier, CourseHit, IntentRouter, Response,
};
use skillup_core::config::SkillUpConfig;
use skillup_core::Catalog;

use cli::CliArgs;

fn load_catalog(
    args: &CliArgs,
    config: &SkillUpConfig,
) -> Result<Catalog, Box<dyn std::error::Error>> {
    let catalog = match args.resolve_catalog_path(config.catalog.path.as_deref()) {
        Some(path) => Catalog::load(&path)?,
        None => {
            tracing::info!("Using built-in catalog");
            Catalog::builtin()
        }
    };
    Ok(catalog.checked(config.assistant.strict_catalog)?)
}

fn describe(action: &Action) -> String {
    match action {
        Action::OpenCourse { name } => format!("open course: {}", name),
        Action::StartCourse { name } => format!("start course: {}", name),
        Action::OpenView { target } => format!("open view: {:?}", target),
    }
}

fn print_response(out: &mut impl Write, response: &Response, json: bool) -> io::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(response).map_err(io::Error::other)?;
        writeln!(out, "{}", rendered)?;
        return Ok(());
    }
    writeln!(out, "{}", response.text)?;
    for action in &response.actions {
        writeln!(out, "  -> {}", describe(action))?;
    }
    Ok(())
}

fn print_hits(out: &mut impl Write, hits: &[CourseHit], json: bool) -> io::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(hits).map_err(io::Error::other)?;
        writeln!(out, "{}", rendered)?;
        return Ok(());
    }
    if hits.is_empty() {
        writeln!(out, "Sonuç bulunamadı.")?;
    }
    for hit in hits {
        writeln!(out, "{} {}: {}", hit.icon, hit.name, hit.snippet)?;
    }
    Ok(())
}

/// Answer one message. Blank input is a silent no-op.
fn answer<C: Classifier>(
    orchestrator: &ChatOrchestrator<C>,
    message: &str,
    args: &CliArgs,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match orchestrator.handle_message(message, args.authenticated) {
        Ok(response) => print_response(out, &response, args.json)?,
        Err(ChatError::EmptyMessage) => {}
        Err(e @ ChatError::MessageTooLong(_)) => eprintln!("{}", e),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read first so its log level can seed the subscriber.
    let config_file = args.resolve_config_path();
    let config = SkillUpConfig::load_or_default(&config_file);
    let log_level = args.resolve_log_level(&config.general.log_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting SkillUp assistant v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    let catalog = load_catalog(&args, &config)?;
    tracing::info!(
        courses = catalog.courses.len(),
        goal_plans = catalog.goal_plans.len(),
        "Catalog ready"
    );

    let router = IntentRouter::new(&catalog, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(term) = args.find.as_deref() {
        let hits = router.course_search().filter(term);
        print_hits(&mut out, &hits, args.json)?;
        return Ok(());
    }

    let orchestrator = ChatOrchestrator::new(router, config.assistant.clone());

    if let Some(query) = args.one_shot_query() {
        return answer(&orchestrator, &query, &args, &mut out);
    }

    writeln!(out, "SkillUp Asistan hazır. Çıkmak için /quit yazın.")?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim() == "/quit" {
            break;
        }
        answer(&orchestrator, &line, &args, &mut out)?;
        out.flush()?;
    }

    tracing::info!("Session ended");
    Ok(())
}
