mod cli;
mod error;
mod outline;
mod paths;
mod showcase;

use std::fs::{self, File};
use std::io::Write;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};
use trellis::{CommitReport, Mount, Theme};
use uidom::{to_markup, MarkupOptions};

use crate::cli::{Cli, KeyPress};
use crate::error::DemoError;
use crate::outline::Outline;
use crate::showcase::Showcase;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    init_logging(cli.log_level.into())?;

    let presses = cli
        .keys
        .iter()
        .map(|key| key.parse())
        .collect::<Result<Vec<KeyPress>, _>>()?;

    let theme = load_theme(cli)?;
    let showcase = Showcase::new(&theme);
    let mut mount = Mount::new(theme);

    let mut diagnostics = Vec::new();
    let first = mount.render(showcase.root());
    log_report("initial", &first);
    diagnostics.extend(first.diagnostics);

    if cli.hover {
        showcase.hover();
    }
    for press in presses {
        showcase.dispatch(press);
    }

    let second = mount.render(showcase.root());
    log_report("after input", &second);
    diagnostics.extend(second.diagnostics);

    let Some(tree) = mount.tree() else {
        return Ok(());
    };

    let output = if cli.markup {
        to_markup(
            tree,
            MarkupOptions {
                include_ids: true,
                ..MarkupOptions::default()
            },
        )
    } else {
        Outline::new(mount.theme())
            .color(!cli.no_color)
            .focused(mount.focus().focused())
            .render(tree)
    };

    std::io::stdout().lock().write_all(output.as_bytes())?;

    for diagnostic in diagnostics {
        eprintln!("warning: {diagnostic}");
    }
    Ok(())
}

/// Log to `latest.log` in the cache directory, archiving the previous run.
fn init_logging(level: LevelFilter) -> Result<(), DemoError> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let Some(path) = paths::log_file() else {
        return Ok(());
    };

    paths::rotate_logs();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| DemoError::Log {
            path: path.clone(),
            source,
        })?;
    }
    let file = File::create(&path).map_err(|source| DemoError::Log {
        path: path.clone(),
        source,
    })?;

    WriteLogger::init(level, Config::default(), file)?;
    log::info!("[demo] logging to {}", path.display());
    Ok(())
}

fn load_theme(cli: &Cli) -> Result<Theme, DemoError> {
    let path = cli
        .theme
        .clone()
        .or_else(|| paths::default_theme_file().filter(|path| path.exists()));

    let mut theme = match path {
        Some(path) => Theme::load(path)?,
        None => Theme::default(),
    };
    if cli.dense {
        theme.components.list.is_dense = Some(true);
    }
    Ok(theme)
}

fn log_report(pass: &str, report: &CommitReport) {
    log::debug!(
        "[demo] {pass} render: {} effects run, {} focus attempts",
        report.effects_run,
        report.focus_attempts
    );
}
