mod keys;

use anyhow::Context;
use clap::{Parser, Subcommand};
use identcase::{
    batch::translate_lines, detect_identifier_casing, style::Style, translate,
    write_cased_identifier,
};
use serde_json::Value;
use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "idcase", version, about = "detect and translate identifier casing styles")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// print the detected style of each identifier
    Detect {
        #[arg(required = true)]
        identifiers: Vec<String>,
    },

    /// translate each identifier into the target style
    Translate {
        #[command(flatten)]
        target: Target,

        #[arg(required = true)]
        identifiers: Vec<String>,
    },

    /// translate stdin to stdout, one identifier per line
    Stream {
        #[command(flatten)]
        target: Target,
    },

    /// translate the keys of a json object
    Keys {
        #[command(flatten)]
        target: Target,

        /// also translate the keys of nested objects
        #[arg(long)]
        deep: bool,

        /// json filepath (stdin when absent)
        filepath: Option<PathBuf>,
    },

    /// list the named styles
    Styles,
}

#[derive(clap::Args, Debug)]
struct Target {
    /// target casing style (pascal, camel, kebab, snake, cobol, macro, lower, upper, train, spreadsheet)
    #[arg(short = 't', long = "to", env("IDCASE_STYLE"))]
    style: Style,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env(/* RUST_LOG env var sets logging level */))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Detect { identifiers } => {
            for identifier in identifiers {
                let style = detect_identifier_casing(&identifier)
                    .with_context(|| format!("failed to detect the casing of {:?}", identifier))?;
                writeln!(stdout, "{}\t{}", identifier, style)?;
            }
        }
        Command::Translate { target, identifiers } => {
            for identifier in identifiers {
                writeln!(stdout, "{}", translate(&identifier, target.style)?)?;
            }
        }
        Command::Stream { target } => {
            let count = translate_lines(io::stdin().lock(), &mut stdout, target.style)?;
            tracing::info!(count, "done");
        }
        Command::Keys {
            target,
            deep,
            filepath,
        } => {
            let json: Value = match filepath {
                Some(filepath) => {
                    let file = File::open(&filepath)
                        .with_context(|| format!("failed to open {}", filepath.display()))?;
                    serde_json::from_reader(BufReader::new(file))
                        .with_context(|| format!("invalid json in {}", filepath.display()))?
                }
                None => serde_json::from_reader(io::stdin().lock())
                    .context("invalid json on stdin")?,
            };

            let json = keys::translate_json_keys(json, target.style, deep)?;
            serde_json::to_writer_pretty(&mut stdout, &json)?;
            writeln!(stdout)?;
        }
        Command::Styles => {
            for style in Style::NAMED {
                write!(stdout, "{:<12}", style.to_string())?;
                write_cased_identifier(&mut stdout, style, "ThisIsATest")?;
                writeln!(stdout)?;
            }
        }
    }

    Ok(())
}
