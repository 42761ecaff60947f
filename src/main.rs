use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, OpenOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use termfolio::core::config::{self, CliOverrides, DeferredLog};
use termfolio::core::content::ContentStore;
use termfolio::core::tab::Tab;
use termfolio::tui;

#[derive(Parser)]
#[command(name = "termfolio", about = "A portfolio you browse from your terminal")]
struct Args {
    /// Portfolio TOML file (defaults to the built-in sample)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<LevelFilter>,

    /// Print one tab (or all of them) as plain text and exit
    #[arg(long, value_enum)]
    plain: Option<Option<Tab>>,

    /// Line width for --plain
    #[arg(long, default_value_t = 80)]
    width: u16,
}

/// Append to the log file so concurrent sessions don't truncate each other.
fn init_logging(path: &Path, level: LevelFilter) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        let _ = fs::create_dir_all(parent);
    }
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The log file is part of the config, so startup records wait for it.
    let mut startup_log = DeferredLog::new();
    let file_config = config::load_config(&mut startup_log).unwrap_or_else(|e| {
        startup_log.push(log::Level::Warn, format!("Ignoring config file: {e}"));
        config::TermfolioConfig::default()
    });
    let cli = CliOverrides {
        content: args.content.clone(),
        log_file: args.log_file.clone(),
        log_level: args.log_level,
    };
    let resolved = config::resolve(&file_config, &cli, &mut startup_log);

    init_logging(&resolved.log_file, resolved.log_level);
    startup_log.replay();

    let store = match &resolved.content_file {
        Some(path) => match ContentStore::load(path) {
            Ok(store) => store,
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                eprintln!("termfolio: {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => ContentStore::builtin(),
    };

    if let Some(tab) = args.plain {
        print!("{}", tui::render_plain(&store, tab, args.width));
        return Ok(());
    }

    if !std::io::stdout().is_terminal() || !std::io::stdin().is_terminal() {
        log::warn!("Refusing to start without a terminal");
        eprintln!(
            "termfolio: no terminal attached. Connect with `ssh -t`, or use --plain for text output."
        );
        std::process::exit(1);
    }

    log::info!("termfolio starting with {:?}", resolved.content_file);
    tui::run(Arc::new(store), &resolved).await
}
