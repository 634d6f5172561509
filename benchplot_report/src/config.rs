// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Report configuration.

use std::path::{Path, PathBuf};

use benchplot_charts::FigureStyle;

/// Where the report reads from, where it writes to, and how figures look.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// The results file.
    pub input: PathBuf,
    /// Directory receiving one SVG per chart.
    pub output_dir: PathBuf,
    /// Field separator of the results file.
    pub delimiter: u8,
    /// Figure styling shared by every chart.
    pub style: FigureStyle,
}

impl Default for ReportConfig {
    /// Reads `../performance_test/res.csv` (`;`-separated) and writes into `assets/`.
    fn default() -> Self {
        Self {
            input: PathBuf::from("../performance_test/res.csv"),
            output_dir: PathBuf::from("assets"),
            delimiter: b';',
            style: FigureStyle::default(),
        }
    }
}

impl ReportConfig {
    /// Sets the results file.
    pub fn with_input(mut self, input: impl AsRef<Path>) -> Self {
        self.input = input.as_ref().to_owned();
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = output_dir.as_ref().to_owned();
        self
    }

    /// Sets the field separator.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the figure style.
    pub fn with_style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_benchmark_harness_output() {
        let config = ReportConfig::default();
        assert_eq!(config.input, Path::new("../performance_test/res.csv"));
        assert_eq!(config.output_dir, Path::new("assets"));
        assert_eq!(config.delimiter, b';');
    }

    #[test]
    fn builders_replace_single_fields() {
        let config = ReportConfig::default()
            .with_output_dir("/tmp/out")
            .with_delimiter(b',');
        assert_eq!(config.output_dir, Path::new("/tmp/out"));
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.input, ReportConfig::default().input);
    }
}
