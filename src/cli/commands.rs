//! Command implementations for the CLI

use crate::{
    cli::{Args, Command},
    config::{resolve_format_options, resolve_format_options_in, resolve_format_options_with},
    core::PrettierrcLocator,
    utils::{
        FileSystemUtils,
        env::{EnvSource, ShellRenderer, to_environment_map},
    },
};
use anyhow::Context;
use serde::Serialize;
use std::{io::Write, path::Path};
use tracing::{debug, instrument};

/// Execute the command selected by `args`, writing results to `out`
#[instrument(skip(args, env, out))]
pub async fn execute_command<S, W>(args: &Args, env: &S, out: &mut W) -> anyhow::Result<()>
where
    S: EnvSource + ?Sized,
    W: Write,
{
    match &args.command {
        None => write_json(out, &args.options, false),
        Some(Command::Options {
            dir,
            stop_dir,
            compact,
        }) => {
            execute_options_command(dir.as_deref(), stop_dir.as_deref(), *compact, out).await
        }
        Some(Command::Env {
            names,
            shell,
            no_export,
            annotate,
        }) => {
            let renderer = shell.then_some((!*no_export, *annotate));
            execute_env_command(names, renderer, env, out)
        }
    }
}

/// Execute the options command
async fn execute_options_command<W: Write>(
    dir: Option<&Path>,
    stop_dir: Option<&Path>,
    compact: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let options = match (dir, stop_dir) {
        (None, None) => resolve_format_options().await,
        (Some(dir), None) => resolve_format_options_in(dir).await,
        (dir, Some(stop_dir)) => {
            let start = match dir {
                Some(dir) => dir.to_path_buf(),
                None => FileSystemUtils::new()
                    .current_dir()
                    .context("Failed to determine working directory")?,
            };
            let locator = PrettierrcLocator::new().with_stop_dir(stop_dir);
            resolve_format_options_with(locator, start).await
        }
    };

    write_json(out, &options, compact)
}

/// Execute the env command.
///
/// `shell` carries `(export, annotate)` when shell output was requested.
fn execute_env_command<S, W>(
    names: &[String],
    shell: Option<(bool, bool)>,
    env: &S,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: EnvSource + ?Sized,
    W: Write,
{
    let map = to_environment_map(names, env);

    let Some((export, annotate)) = shell else {
        return write_json(out, &map, false);
    };

    let renderer = ShellRenderer::new(export)
        .context("Failed to create shell renderer")?
        .with_annotation(annotate);
    out.write_all(renderer.render(&map).as_bytes())
        .context("Failed to write shell assignments")?;
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    compact: bool,
) -> anyhow::Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("Failed to serialize output")?;

    debug!("Writing {} bytes of JSON", rendered.len());
    writeln!(out, "{rendered}").context("Failed to write output")?;
    Ok(())
}
