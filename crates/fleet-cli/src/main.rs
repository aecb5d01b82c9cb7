//! Fleet CLI - keep track of vehicles, their papers and their due dates
//!
//! This is the command-line interface for Fleet. It provides a user-friendly
//! interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod form;
mod helpers;
mod output;
mod preferences;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fleet_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{catalog, documents, init, misc, prefs, vehicles};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);

        let error_msg = format!("{:#}", e);
        let (message, hint) = split_error_hint(&error_msg);

        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Split an explicit "Hint:" line off the message, or suggest one for
/// common failures.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    if let Some(idx) = error.find("\nHint:") {
        return (&error[..idx], Some(error[idx + 1..].trim().to_string()));
    }

    let error_lower = error.to_lowercase();

    if error_lower.contains("failed to open database") {
        return (
            error,
            Some("Hint: Check --db, FLEET_DB or run `fleet init`.".to_string()),
        );
    }
    if error_lower.contains("interactive") && error_lower.contains("tty") {
        return (
            error,
            Some("Hint: Pass the values as flags together with --no-input.".to_string()),
        );
    }

    (error, None)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            vehicles::handle_add(ctx, args)?;
        }
        Some(Commands::Edit(args)) => {
            vehicles::handle_edit(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            vehicles::handle_list(ctx, args)?;
        }
        Some(Commands::Search(args)) => {
            vehicles::handle_search(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            vehicles::handle_show(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            vehicles::handle_delete(ctx, args)?;
        }
        Some(Commands::Attach(args)) => {
            documents::handle_attach(ctx, args)?;
        }
        Some(Commands::Detach(args)) => {
            documents::handle_detach(ctx, args)?;
        }
        Some(Commands::Docs(args)) => {
            documents::handle_docs(ctx, args)?;
        }
        Some(Commands::Catalog(args)) => {
            catalog::handle_catalog(args)?;
        }
        Some(Commands::Prefs(args)) => {
            prefs::handle_prefs(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args.shell)?;
        }
        None => {
            println!("Fleet v{}", VERSION);
            println!("\nQuickstart:");
            println!("  fleet init");
            println!("  fleet add --plate XEP-4096 --brand Toyota --model Corolla");
            println!("  fleet list");
            println!("  fleet search corolla");
            println!("  fleet show XEP-4096");
            println!("\nRun `fleet --help` for full usage.");
        }
    }

    Ok(())
}
