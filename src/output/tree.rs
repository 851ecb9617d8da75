//! Tree formatter for module trees
//!
//! `TreeFormatter` renders a `ModuleTree` with the usual `├──`/`└──`
//! connectors, either into a plain string or to stdout with colors.

use std::io::{self, Write};

use serde_json::Value;
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::{ModuleNode, ModuleTree};

use super::config::OutputConfig;

/// Formatter for console tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the tree as plain text, rooted at `root_name`.
    pub fn format(&self, root_name: &str, tree: &ModuleTree) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail
        let _ = self.write_tree(&mut out, root_name, tree);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    pub fn print(&self, root_name: &str, tree: &ModuleTree) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_tree(&mut stdout, root_name, tree)
    }

    fn write_tree<W: WriteColor>(
        &self,
        out: &mut W,
        root_name: &str,
        tree: &ModuleTree,
    ) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", root_name)?;
        out.reset()?;
        writeln!(out)?;

        self.write_children(out, tree, "")?;

        let (dirs, modules) = tree.counts();
        writeln!(out)?;
        writeln!(
            out,
            "{} {}, {} {}",
            dirs,
            if dirs == 1 { "directory" } else { "directories" },
            modules,
            if modules == 1 { "module" } else { "modules" }
        )?;
        Ok(())
    }

    fn write_children<W: WriteColor>(
        &self,
        out: &mut W,
        tree: &ModuleTree,
        prefix: &str,
    ) -> io::Result<()> {
        let count = tree.len();
        for (i, (name, node)) in tree.iter().enumerate() {
            let is_last = i + 1 == count;
            let connector = if is_last { "└── " } else { "├── " };
            write!(out, "{}{}", prefix, connector)?;

            match node {
                ModuleNode::Dir(subtree) => {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                    write!(out, "{}", name)?;
                    out.reset()?;
                    writeln!(out)?;
                    let child_prefix = if is_last {
                        format!("{}    ", prefix)
                    } else {
                        format!("{}│   ", prefix)
                    };
                    self.write_children(out, subtree, &child_prefix)?;
                }
                ModuleNode::Module(value) => {
                    write!(out, "{}", name)?;
                    if self.config.show_values {
                        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                        write!(out, "  {}", summarize_value(value, self.config.summary_width))?;
                        out.reset()?;
                    }
                    writeln!(out)?;
                }
            }
        }
        Ok(())
    }
}

/// One-line description of a value: `{3 keys}`, `[2 items]`, or the scalar itself.
pub fn summarize_value(value: &Value, width: Option<usize>) -> String {
    let summary = match value {
        Value::Object(map) => match map.len() {
            1 => "{1 key}".to_string(),
            n => format!("{{{} keys}}", n),
        },
        Value::Array(items) => match items.len() {
            1 => "[1 item]".to_string(),
            n => format!("[{} items]", n),
        },
        scalar => scalar.to_string(),
    };

    match width {
        Some(max) if max > 0 && summary.chars().count() > max => {
            let mut truncated: String = summary.chars().take(max.saturating_sub(1)).collect();
            truncated.push('…');
            truncated
        }
        _ => summary,
    }
}
