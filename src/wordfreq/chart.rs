//! Rendering surface for the ranked word list.
//!
//! The pipeline hands (word, count) pairs to a [`ChartRenderer`] and
//! does not care what gets drawn. Ships a terminal bar chart and a
//! JSON printer.

use crate::error::Result;
use crate::wordfreq::ranker::RankedEntry;

/// A surface that accepts labeled numeric series.
pub trait ChartRenderer {
    fn render(&self, title: &str, entries: &[RankedEntry]) -> Result<()>;
}

/// Horizontal bar chart drawn with block characters, scaled so the
/// highest count fills the configured width.
pub struct TerminalChart {
    width: usize,
}

impl Default for TerminalChart {
    fn default() -> Self {
        Self { width: 40 }
    }
}

impl TerminalChart {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }

    fn chart_lines(&self, entries: &[RankedEntry]) -> Vec<String> {
        let max_count = entries.iter().map(|e| e.count).max().unwrap_or(0);
        if max_count == 0 {
            return Vec::new();
        }
        let label_width = entries.iter().map(|e| e.word.len()).max().unwrap_or(0);

        entries
            .iter()
            .map(|entry| {
                let bar = (entry.count * self.width as u64 / max_count).max(1) as usize;
                format!(
                    "{:<label_width$}  {} {}",
                    entry.word,
                    "█".repeat(bar),
                    entry.count
                )
            })
            .collect()
    }
}

impl ChartRenderer for TerminalChart {
    fn render(&self, title: &str, entries: &[RankedEntry]) -> Result<()> {
        if entries.is_empty() {
            println!("No words counted.");
            return Ok(());
        }
        println!("{title}");
        for line in self.chart_lines(entries) {
            println!("{line}");
        }
        Ok(())
    }
}

/// Prints the entries as a JSON array of `{word, count}` objects.
pub struct JsonChart;

impl ChartRenderer for JsonChart {
    fn render(&self, _title: &str, entries: &[RankedEntry]) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(entries)?);
        Ok(())
    }
}
