use std::io::{self, LineWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use jaspace::{Profile, process::Process, profile::preset};
use std::borrow::Cow;
use thiserror::Error;
use tracing_subscriber::{Layer, layer::SubscriberExt};

/// Remove meaningless whitespace from Japanese text.
///
/// Whitespace between two Japanese characters is deleted and runs of
/// whitespace are collapsed to one space; spaces next to Latin words, digits
/// or line edges are kept.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {
    /// Files to read. Reads standard input when none are given.
    files: Vec<PathBuf>,

    /// Print the inputs that would change instead of normalized text. Exits
    /// with status 1 if any would.
    #[arg(long)]
    check: bool,

    /// Normalize each line on its own and keep line breaks.
    #[arg(long)]
    per_line: bool,

    /// Only remove whitespace between Japanese characters; leave other runs
    /// of whitespace untouched.
    #[arg(long)]
    join_only: bool,

    /// Log filter, e.g. `info` or `jaspace=debug`.
    #[arg(long, env = "JASPACE_LOG", default_value = "warn")]
    log_filter: String,
}

#[derive(Debug, Error)]
enum InputError {
    #[error("could not read `{path}`")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("`{path}` is not valid UTF-8")]
    NotUtf8 { path: String },
}

#[derive(Debug)]
struct Input {
    name: String,
    text: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    setup_logs(&args.log_filter)?;

    let inputs = read_inputs(&args.files)?;
    let mut out = io::stdout().lock();
    let changed = if args.join_only {
        run(&preset::join_only(), &inputs, &args, &mut out)?
    } else {
        run(&preset::japanese_spacing(), &inputs, &args, &mut out)?
    };

    if args.check && changed > 0 {
        tracing::info!(changed, "inputs need normalization");
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

fn setup_logs(log_filter: &str) -> anyhow::Result<()> {
    let filter: tracing_subscriber::filter::Targets =
        log_filter.parse().context("invalid --log-filter")?;

    let subscriber = tracing_subscriber::registry().with(
        tracing_subscriber::fmt::layer()
            .with_writer(|| LineWriter::new(std::io::stderr()))
            .with_filter(filter),
    );
    tracing::subscriber::set_global_default(subscriber).context("could not setup logging")?;

    Ok(())
}

fn read_inputs(files: &[PathBuf]) -> anyhow::Result<Vec<Input>> {
    if files.is_empty() {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .map_err(|source| InputError::Read {
                path: "<stdin>".to_owned(),
                source,
            })?;
        return Ok(vec![decode("<stdin>", bytes)?]);
    }

    files
        .iter()
        .map(|path| -> anyhow::Result<Input> {
            let bytes = std::fs::read(path).map_err(|source| InputError::Read {
                path: display(path),
                source,
            })?;
            Ok(decode(&display(path), bytes)?)
        })
        .collect()
}

fn decode(name: &str, bytes: Vec<u8>) -> Result<Input, InputError> {
    let text = String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 {
        path: name.to_owned(),
    })?;
    Ok(Input {
        name: name.to_owned(),
        text,
    })
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Normalize every input with `profile` into `out`; returns how many inputs
/// changed.
fn run<P: Process>(
    profile: &Profile<P>,
    inputs: &[Input],
    args: &Args,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut changed = 0;

    for input in inputs {
        let needs = if args.per_line {
            lines(&input.text).any(|(body, _)| profile.needs_run(body))
        } else {
            profile.needs_run(&input.text)
        };
        tracing::debug!(
            input = %input.name,
            bytes = input.text.len(),
            changed = needs,
            profile = profile.name(),
            "checked input"
        );
        if needs {
            changed += 1;
        }

        if args.check {
            if needs {
                writeln!(out, "{}", input.name).context("could not write to stdout")?;
            }
            continue;
        }

        if args.per_line {
            for (body, terminator) in lines(&input.text) {
                let normalized = profile.run(Cow::Borrowed(body));
                out.write_all(normalized.as_bytes())
                    .and_then(|()| out.write_all(terminator.as_bytes()))
                    .context("could not write to stdout")?;
            }
        } else {
            let normalized = profile.run(Cow::Borrowed(input.text.as_str()));
            out.write_all(normalized.as_bytes())
                .context("could not write to stdout")?;
        }
    }

    out.flush().context("could not write to stdout")?;
    Ok(changed)
}

/// Split `text` into `(body, terminator)` pairs, where the terminator is
/// `"\n"`, `"\r\n"` or empty for a final unterminated line.
fn lines(text: &str) -> impl Iterator<Item = (&str, &str)> {
    text.split_inclusive('\n').map(|line| {
        let body_len = if line.ends_with("\r\n") {
            line.len() - 2
        } else if line.ends_with('\n') {
            line.len() - 1
        } else {
            line.len()
        };
        line.split_at(body_len)
    })
}
