//! Output Rendering
//!
//! Renders export results as human-readable text or JSON. Renderers write to
//! any `io::Write` so the binary passes stdout and tests pass a buffer.

use std::io::{self, Write};

use crate::application::{ExportOutcome, ExportPlan};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    warn: &'static str,
    write: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            warn: "!",
            write: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            warn: "[!]",
            write: "->",
        }
    }
}

/// Trait for rendering export results
pub trait ExportRenderer {
    fn render_outcome(&self, outcome: &ExportOutcome, out: &mut dyn Write) -> io::Result<()>;

    fn render_plan(&self, plan: &ExportPlan, out: &mut dyn Write) -> io::Result<()>;
}

/// Text renderer for export results
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }
}

impl ExportRenderer for TextRenderer {
    fn render_outcome(&self, outcome: &ExportOutcome, out: &mut dyn Write) -> io::Result<()> {
        let icons = self.icons();

        writeln!(out, "{} Export Complete", icons.check)?;
        writeln!(out)?;
        writeln!(out, "  Package: {}", outcome.package_path.display())?;
        writeln!(
            out,
            "  {} entries, {} API assemblies",
            outcome.entry_count(),
            outcome.staged.len()
        )?;
        if outcome.settings_changed {
            writeln!(out, "  Settings updated")?;
        }

        if self.verbose > 0 {
            writeln!(out)?;
            for entry in &outcome.entries {
                writeln!(
                    out,
                    "    {} {} ({})",
                    icons.write,
                    entry.path().display(),
                    entry.category()
                )?;
            }
        }

        if !outcome.cleanup.is_clean() {
            writeln!(out)?;
            writeln!(
                out,
                "  Cleanup failures ({}):",
                outcome.cleanup.failures.len()
            )?;
            for failure in &outcome.cleanup.failures {
                writeln!(
                    out,
                    "    {} {}: {}",
                    icons.warn,
                    failure.path.display(),
                    failure.message
                )?;
            }
        }
        Ok(())
    }

    fn render_plan(&self, plan: &ExportPlan, out: &mut dyn Write) -> io::Result<()> {
        let icons = self.icons();

        writeln!(out, "Package: {}", plan.package_path.display())?;
        writeln!(out)?;
        writeln!(out, "  Manifest ({}):", plan.entries.len())?;
        for entry in &plan.entries {
            writeln!(
                out,
                "    {} {} ({})",
                icons.write,
                entry.path().display(),
                entry.category()
            )?;
        }

        writeln!(out)?;
        writeln!(out, "  API assemblies ({}):", plan.assemblies.len())?;
        for assembly in &plan.assemblies {
            writeln!(
                out,
                "    {} {} {}",
                assembly.identifier,
                icons.write,
                assembly.source.display()
            )?;
        }
        Ok(())
    }
}

/// JSON renderer for export results
pub struct JsonRenderer;

impl ExportRenderer for JsonRenderer {
    fn render_outcome(&self, outcome: &ExportOutcome, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", outcome.to_json())
    }

    fn render_plan(&self, plan: &ExportPlan, out: &mut dyn Write) -> io::Result<()> {
        let json = serde_json::json!({
            "event": "manifest",
            "plan": plan,
        });
        writeln!(out, "{}", json)
    }
}

/// Renderer for the requested format
pub fn renderer(format: OutputFormat, verbose: u8) -> Box<dyn ExportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer {
            unicode: true,
            verbose,
        }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
