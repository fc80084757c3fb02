use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use codespan_reporting::term::termcolor::ColorChoice;
use kempe_backend::{AllocError, Method};

/// assign registers to variables by coloring their interference graph.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// The coloring method, `greedy` or `backtracking`.
    #[arg(short, long, default_value = "greedy", value_parser = parse_method)]
    pub method: Method,

    /// Only print the allocation and the summary.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub quiet: bool,

    /// When to color the output.
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,

    /// A liveness file: the register count on the first line, then the live
    /// variables of one program point per line.
    #[arg(required = true)]
    pub path: PathBuf,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// Apply this choice to the `console` styling of the report.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => {
                console::set_colors_enabled(true);
                console::set_colors_enabled_stderr(true);
            }
            Self::Never => {
                console::set_colors_enabled(false);
                console::set_colors_enabled_stderr(false);
            }
        }
    }
}

impl From<ColorWhen> for ColorChoice {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorChoice::Auto,
            ColorWhen::Always => ColorChoice::Always,
            ColorWhen::Never => ColorChoice::Never,
        }
    }
}

fn parse_method(name: &str) -> Result<Method, AllocError> {
    name.to_lowercase().parse()
}
