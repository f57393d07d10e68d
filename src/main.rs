use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use sku_selector::adapters::JsonLinesDispatch;
use sku_selector::cli::{parse_args, version_line, CliCommand, PreviewArgs, Scenario, USAGE};
use sku_selector::ui::{render_selector, HitAreaRegistry};

/// Environment variable holding the log filter (e.g. `sku_selector=debug`).
const LOG_ENV: &str = "SKU_SELECTOR_LOG";

/// Logs go to stderr so the rendered preview on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn run_preview(args: PreviewArgs) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    let mut session = scenario.into_session()?;

    let ctx = args.layout();
    let mut registry = HitAreaRegistry::new();
    for line in render_selector(&mut session, &ctx, &mut registry) {
        println!("{}", line);
    }
    tracing::info!(
        "Rendered {} variations with {} hit areas at {}x{}",
        session.variations().len(),
        registry.len(),
        ctx.width,
        ctx.height
    );

    if let Some(sku_id) = args.sku_id.as_deref() {
        println!();
        let mut sink = JsonLinesDispatch::new(std::io::stdout().lock());
        session.sync_external_sku(Some(sku_id), &mut sink)?;
        let written = sink.written();
        sink.finish()?;
        tracing::info!("Dispatched {} intents for sku {}", written, sku_id);
    }
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    match parse_args(std::env::args()) {
        CliCommand::Version => println!("{}", version_line()),
        CliCommand::Help => println!("{}", USAGE),
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
        CliCommand::Preview(args) => run_preview(args)?,
    }
    Ok(())
}
