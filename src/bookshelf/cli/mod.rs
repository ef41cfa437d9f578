//! Terminal wiring for the catalog: flags, config, logging, and the menu loop.

mod setup;

use bookshelf::api::{BookshelfApi, SavePolicy};
use bookshelf::config::ShelfConfig;
use bookshelf::error::{Result, ShelfError};
use bookshelf::menu::console::StdConsole;
use bookshelf::menu::MenuHost;
use bookshelf::screens::{show_messages, AppContext, RootMenu};
use clap::Parser;
use directories::ProjectDirs;
use setup::Cli;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(&cli)?;
    let mut config = ShelfConfig::load(&data_dir)?;
    if let Some(size) = cli.page_size {
        config.page_size = usize::try_from(size).unwrap_or(usize::MAX);
    }
    if cli.save_on_exit {
        config.save_policy = SavePolicy::OnExit;
    }
    let data_path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_path(&data_dir));
    debug!(data_dir = %data_dir.display(), data_path = %data_path.display(), ?config, "starting");

    let (api, warnings) = BookshelfApi::open(&data_path, config.save_policy);
    let context = AppContext::new(api).with_page_size(config.page_size);
    let mut host = MenuHost::new(context, StdConsole::new());
    show_messages(&mut host, &warnings)?;

    let outcome = match host.run(Some(Box::new(RootMenu::new()))) {
        Err(ShelfError::InputClosed) => {
            info!("input closed, shutting down");
            Ok(())
        }
        other => other,
    };

    // The catalog is saved however the loop ended.
    let saved = host.context().api.persist();
    match outcome {
        Ok(()) => show_messages(&mut host, &saved?.messages),
        Err(e) => {
            match saved {
                Ok(_) => info!("catalog saved before exiting on error"),
                Err(save_err) => error!(error = %save_err, "could not save the catalog"),
            }
            Err(e)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Config("could not determine a data directory".into()))
}
