mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::env;
use std::process;
use tracing_subscriber::{EnvFilter, fmt};

use maillink::clipboard::{self, CopyOutcome};
use maillink::compose::is_valid_email_list;
use maillink::config::Config;
use maillink::link::{self, LinkKind};
use maillink::locale::{Locale, Message};

fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let locale = resolve_locale(&cli, &config);

    let kind = match cli.command {
        Some(Commands::Mailto) => LinkKind::Mailto,
        Some(Commands::Gmail) => LinkKind::Gmail,
        None => config.service,
    };

    let values = cli.fields.field_values()?;

    // The builders serialize whatever they are given; gating on address
    // syntax happens here, before any action runs.
    if !is_valid_email_list(&values.to)
        || (!values.cc.is_empty() && !is_valid_email_list(&values.cc))
        || (!values.bcc.is_empty() && !is_valid_email_list(&values.bcc))
    {
        eprintln!("{}", locale.text(Message::InvalidAddressList));
        process::exit(1);
    }

    let link = link::build(kind, &values);
    println!("{link}");

    if cli.fields.copy {
        match clipboard::write(link.as_str()) {
            CopyOutcome::Succeeded => {
                let copied = match kind {
                    LinkKind::Mailto => Message::CopiedMailto,
                    LinkKind::Gmail => Message::CopiedGmail,
                };
                eprintln!("{}", locale.text(copied));
            }
            CopyOutcome::Failed => {
                eprintln!("{}", locale.text(Message::CopyFailed));
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Locale priority: --lang flag, then config, then the host environment.
fn resolve_locale(cli: &Cli, config: &Config) -> Locale {
    if let Some(tag) = &cli.lang {
        return Locale::detect(Some(tag));
    }
    if let Some(language) = config.language {
        return language;
    }
    Locale::detect(env::var("LANG").ok().as_deref())
}
