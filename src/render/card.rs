//! Terminal composition of the summary card and the error placeholder

use core::fmt::Write;

use owo_colors::{OwoColorize, Style};

use crate::card::rollout::RankedVersionEntry;
use crate::card::types::CardData;
use crate::fetch::error::FetchError;
use crate::render::format::abbreviate;
use crate::render::sparkline::sparkline;

/// Columns available to a rollout row's bar plus its trailing label
const ROLLOUT_TRACK: usize = 40;

/// Accent color token, cosmetic only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Accent {
    #[default]
    Blue,
    Green,
    Yellow,
    Red,
    Magenta,
    Cyan,
}

impl Accent {
    fn style(self) -> Style {
        match self {
            Self::Blue => Style::new().blue(),
            Self::Green => Style::new().green(),
            Self::Yellow => Style::new().yellow(),
            Self::Red => Style::new().red(),
            Self::Magenta => Style::new().magenta(),
            Self::Cyan => Style::new().cyan(),
        }
    }
}

/// Presentation knobs supplied by the caller
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub accent: Accent,
    pub use_colors: bool,
}

impl RenderOptions {
    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_colors {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn accented(&self, text: &str) -> String {
        self.paint(text, self.accent.style())
    }
}

/// Renders the populated summary card.
pub fn render_card(
    repo: &str,
    target_version: &str,
    data: &CardData,
    rollout: &[RankedVersionEntry],
    options: &RenderOptions,
) -> String {
    let mut out = String::new();
    write_card(&mut out, repo, target_version, data, rollout, options)
        .expect("writing to String cannot fail");
    out
}

/// Renders the placeholder shown when aggregation failed.
pub fn render_error(package_name: &str, error: &FetchError, options: &RenderOptions) -> String {
    let mut out = String::new();
    write_error(&mut out, package_name, error, options).expect("writing to String cannot fail");
    out
}

fn write_card<W: Write>(
    writer: &mut W,
    repo: &str,
    target_version: &str,
    data: &CardData,
    rollout: &[RankedVersionEntry],
    options: &RenderOptions,
) -> core::fmt::Result {
    let stats = &data.stats;
    let metadata = &data.metadata;

    let mut badges = vec![
        format!("★ {}", abbreviate(metadata.stars as i64)),
        format!("↓ {}", abbreviate(stats.all_time_downloads)),
    ];
    if !target_version.is_empty() {
        badges.push(format!("⌂ {}", target_version));
    }
    if let Some(license) = &metadata.license {
        // Only the first token is the canonical license id ("MIT License" -> "MIT")
        if let Some(token) = license.split_whitespace().next() {
            badges.push(format!("§ {}", token));
        }
    }

    writeln!(
        writer,
        "{}  {}",
        options.paint(repo, Style::new().bold()),
        badges.join("  ")
    )?;
    writeln!(writer, "{}", metadata.url)?;
    if let Some(description) = &metadata.description {
        writeln!(writer)?;
        writeln!(writer, "{}", description)?;
    }

    writeln!(writer)?;
    writeln!(writer, "  $ pnpm add {}", options.accented(&stats.name))?;
    writeln!(writer, "  $ yarn add {}", options.accented(&stats.name))?;
    writeln!(writer, "  $ npm install {}", options.accented(&stats.name))?;

    if !rollout.is_empty() {
        writeln!(writer)?;
        let version_width = rollout
            .iter()
            .map(|e| e.version.len())
            .max()
            .unwrap_or(0)
            .max(8);

        writeln!(
            writer,
            "{:<width$} {:>track$}",
            "Version rollout",
            "last week",
            width = version_width,
            track = ROLLOUT_TRACK
        )?;
        for entry in rollout {
            write_rollout_row(writer, entry, version_width, options)?;
        }
    }

    if !stats.last_30_days.is_empty() {
        writeln!(writer)?;
        writeln!(
            writer,
            "{} last 30 days",
            options.accented(&sparkline(&stats.last_30_days))
        )?;
    }

    writeln!(
        writer,
        "updated {}",
        stats.updated_at.format("%Y-%m-%d")
    )?;

    Ok(())
}

fn write_rollout_row<W: Write>(
    writer: &mut W,
    entry: &RankedVersionEntry,
    version_width: usize,
    options: &RenderOptions,
) -> core::fmt::Result {
    let version = if entry.is_current {
        options.paint(&entry.version, options.accent.style().bold())
    } else {
        entry.version.clone()
    };
    // Painted text carries invisible escape codes, so pad manually
    let padding = version_width.saturating_sub(entry.version.len());

    let bar = "█".repeat(entry.bar_width(ROLLOUT_TRACK));
    let label = format!(
        "{} ({:.0}%)",
        options.accented(&abbreviate(entry.count)),
        entry.percentage
    );

    writeln!(
        writer,
        "{}{} {} {}",
        version,
        " ".repeat(padding),
        options.accented(&bar),
        label
    )
}

fn write_error<W: Write>(
    writer: &mut W,
    package_name: &str,
    error: &FetchError,
    options: &RenderOptions,
) -> core::fmt::Result {
    writeln!(writer, "Error displaying package {}", package_name)?;
    writeln!(
        writer,
        "{}",
        options.paint(&error.to_string(), Style::new().red())
    )
}
