use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use url::Url;

use maillink::compose::FieldValues;

#[derive(Parser, Debug)]
#[command(name = "maillink")]
#[command(about = "Build mailto and Gmail compose links from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub fields: ComposeArgs,

    /// UI language tag (e.g. 'he' or 'en'); overrides config and environment
    #[arg(short, long, global = true)]
    pub lang: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a mailto: link
    Mailto,
    /// Build a Gmail web-compose link
    Gmail,
}

#[derive(Args, Debug, Clone)]
pub struct ComposeArgs {
    /// Recipient address list (comma or space separated)
    #[arg(short, long, global = true)]
    pub to: Option<String>,

    /// CC address list
    #[arg(long, global = true)]
    pub cc: Option<String>,

    /// BCC address list
    #[arg(long, global = true)]
    pub bcc: Option<String>,

    /// Subject line
    #[arg(short, long, global = true)]
    pub subject: Option<String>,

    /// Message body
    #[arg(short, long, global = true)]
    pub body: Option<String>,

    /// Prefill fields from the query string of a page URL
    #[arg(long, global = true, value_name = "URL")]
    pub from_url: Option<String>,

    /// Copy the generated link to the clipboard
    #[arg(short, long, global = true)]
    pub copy: bool,
}

impl ComposeArgs {
    /// Resolve the final field values: query-string prefill first, then
    /// explicit flags on top.
    pub fn field_values(&self) -> Result<FieldValues> {
        let mut values = match &self.from_url {
            Some(raw) => {
                let url = Url::parse(raw).with_context(|| format!("Invalid URL: {raw}"))?;
                FieldValues::from_query(url.query().unwrap_or(""))
            }
            None => FieldValues::default(),
        };

        if let Some(to) = &self.to {
            values.to = to.trim().to_string();
        }
        if let Some(cc) = &self.cc {
            values.cc = cc.trim().to_string();
        }
        if let Some(bcc) = &self.bcc {
            values.bcc = bcc.trim().to_string();
        }
        if let Some(subject) = &self.subject {
            values.subject = subject.trim().to_string();
        }
        if let Some(body) = &self.body {
            values.body = body.trim().to_string();
        }

        Ok(values)
    }
}
