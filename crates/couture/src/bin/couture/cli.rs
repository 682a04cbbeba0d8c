//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use couture::Component;

/// Preview the class strings of the Golden Air UI kit
#[derive(Parser, Debug)]
#[command(name = "couture")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log variant fallbacks to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the merged class string of a component
    ///
    /// Examples:
    ///   couture classes button --set variant=outline --set size=sm
    ///   couture classes badge -s variant=tag --class "px-4 normal-case"
    ///   couture classes card -s hover=glow --strict
    Classes {
        /// Component name (button, badge, card, input, icon)
        component: Component,

        /// Variant selection as AXIS=VALUE; an empty value unsets the axis
        #[arg(short, long = "set", value_name = "AXIS=VALUE", value_parser = parse_assignment)]
        set: Vec<Assignment>,

        /// Caller classes merged last
        #[arg(short, long, value_name = "CLASSES")]
        class: Option<String>,

        /// Fail on unknown axes or values instead of using defaults
        #[arg(long)]
        strict: bool,
    },

    /// List the variant axes of a component
    Axes {
        /// Component name (button, badge, card, input, icon)
        component: Component,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the classes of every variant value of every component
    Showcase,
}

/// One `--set AXIS=VALUE` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub axis: String,
    /// `None` for `AXIS=`, which unsets the axis.
    pub value: Option<String>,
}

pub fn parse_assignment(arg: &str) -> Result<Assignment, String> {
    let (axis, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected AXIS=VALUE, got '{arg}'"))?;
    let axis = axis.trim();
    if axis.is_empty() {
        return Err(format!("missing axis name in '{arg}'"));
    }
    let value = value.trim();
    Ok(Assignment {
        axis: axis.to_string(),
        value: (!value.is_empty()).then(|| value.to_string()),
    })
}
