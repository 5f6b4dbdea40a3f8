//! Command-line arguments and the scripted key format.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;
use uidom::{Key, Modifiers};

use crate::error::DemoError;

#[derive(Debug, Parser)]
#[command(
    name = "trellis-demo",
    version,
    about = "Render the trellis component showcase and replay key presses against it"
)]
pub struct Cli {
    /// Theme file with component defaults (JSON). Falls back to
    /// `theme.json` in the config directory when present.
    #[arg(long)]
    pub theme: Option<PathBuf>,

    /// Force dense rendering for the whole list.
    #[arg(long)]
    pub dense: bool,

    /// Open the help tooltip as if the pointer rested on it.
    #[arg(long)]
    pub hover: bool,

    /// Keys to replay, comma separated, e.g. `select:down,select:enter`.
    #[arg(long, value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Print the tree as markup instead of an outline.
    #[arg(long)]
    pub markup: bool,

    #[arg(long = "no-color")]
    pub no_color: bool,

    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Debug)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Widget a scripted key is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Checkbox,
    Select,
    Menu,
    Popover,
    Tooltip,
}

impl FromStr for Target {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checkbox" => Ok(Self::Checkbox),
            "select" => Ok(Self::Select),
            "menu" => Ok(Self::Menu),
            "popover" => Ok(Self::Popover),
            "tooltip" => Ok(Self::Tooltip),
            other => Err(DemoError::Target(other.to_string())),
        }
    }
}

/// One scripted key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub target: Target,
    pub key: Key,
    pub mods: Modifiers,
}

impl FromStr for KeyPress {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, name) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| DemoError::Key(s.to_string()))?;

        let (mods, name) = match name.strip_prefix("shift+") {
            Some(rest) => (Modifiers::shift(), rest),
            None => (Modifiers::new(), name),
        };

        Ok(Self {
            target: target.parse()?,
            key: parse_key(name).ok_or_else(|| DemoError::Key(s.to_string()))?,
            mods,
        })
    }
}

fn parse_key(name: &str) -> Option<Key> {
    let key = match name {
        "down" => Key::Down,
        "up" => Key::Up,
        "left" => Key::Left,
        "right" => Key::Right,
        "enter" => Key::Enter,
        "space" => Key::Char(' '),
        "esc" | "escape" => Key::Escape,
        "tab" => Key::Tab,
        "backtab" => Key::BackTab,
        "home" => Key::Home,
        "end" => Key::End,
        "pgup" => Key::PageUp,
        "pgdown" => Key::PageDown,
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => return None,
            }
        }
    };
    Some(key)
}
