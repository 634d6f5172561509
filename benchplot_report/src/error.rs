// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while producing the report.

use std::io;
use std::path::PathBuf;

use benchplot_frame::FrameError;
use thiserror::Error;

/// Any failure that aborts the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The results file could not be opened or parsed.
    #[error("failed to read results from `{}`", path.display())]
    Csv {
        /// The results file.
        path: PathBuf,
        /// Underlying reader error.
        #[source]
        source: csv::Error,
    },
    /// The results file parsed but does not form a valid table.
    #[error("results in `{}` do not form a table", path.display())]
    Schema {
        /// The results file.
        path: PathBuf,
        /// What was wrong with the table.
        #[source]
        source: FrameError,
    },
    /// A chart's data could not be grouped or reshaped.
    #[error("cannot prepare chart `{chart}`")]
    Chart {
        /// Logical chart name.
        chart: &'static str,
        /// What went wrong in the reshape.
        #[source]
        source: FrameError,
    },
    /// An output file or directory could not be written.
    #[error("failed to write `{}`", path.display())]
    Io {
        /// The path being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl ReportError {
    /// Wraps a reshape failure with the name of the chart it belongs to.
    pub fn chart(chart: &'static str) -> impl FnOnce(FrameError) -> Self {
        move |source| Self::Chart { chart, source }
    }
}
