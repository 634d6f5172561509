// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed list of charts in the report.
//!
//! Charts are data: adding a figure means adding a [`ChartSpec`] to [`CHARTS`].

/// Column whose value names the chart a results row belongs to.
pub const DISCRIMINANT: &str = "figure_name";

/// Column holding the scatter x value (or the series name for box groups).
pub const SERIES_LABEL: &str = "series_name";

/// Y axis title shared by every chart.
pub const Y_LABEL: &str = "Time for 10000 Iterations (s)";

/// One panel of a multi-panel box plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelSpec {
    /// Discriminant value selecting the panel's rows.
    pub group: &'static str,
    /// Panel title.
    pub title: &'static str,
}

/// How a chart's rows are reshaped and drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// Log-log scatter of one group melted by [`SERIES_LABEL`].
    Scatter {
        /// Discriminant value selecting the rows.
        group: &'static str,
        /// X axis title.
        x_label: &'static str,
    },
    /// Box plot of one group, one box per series.
    Box {
        /// Discriminant value selecting the rows.
        group: &'static str,
    },
    /// Side-by-side box plots, one panel per group.
    BoxPanels {
        /// Panels, left to right.
        panels: &'static [PanelSpec],
    },
}

/// One chart of the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartSpec {
    /// Logical name; also the output file stem.
    pub name: &'static str,
    /// Figure title.
    pub title: &'static str,
    /// Y axis title.
    pub y_label: &'static str,
    /// Reshape and drawing.
    pub kind: ChartKind,
}

impl ChartSpec {
    /// Discriminant values this chart reads, in panel order.
    pub fn groups(&self) -> Vec<&'static str> {
        match self.kind {
            ChartKind::Scatter { group, .. } | ChartKind::Box { group } => vec![group],
            ChartKind::BoxPanels { panels } => panels.iter().map(|p| p.group).collect(),
        }
    }
}

const INSTRUMENTATION_PANELS: &[PanelSpec] = &[
    PanelSpec {
        group: "instrumentation_no",
        title: "No Instrumentation",
    },
    PanelSpec {
        group: "instrumentation_GNU",
        title: "GNU",
    },
    PanelSpec {
        group: "instrumentation_uutils",
        title: "uutils",
    },
];

/// Every chart in the report, in rendering order.
pub static CHARTS: &[ChartSpec] = &[
    ChartSpec {
        name: "file_write",
        title: "Time to Write a File Across Sizes",
        y_label: Y_LABEL,
        kind: ChartKind::Scatter {
            group: "file_write",
            x_label: "File Size (Bytes)",
        },
    },
    ChartSpec {
        name: "dynamic_file_stdin",
        title: "Runtime of base64 Across Input File Sizes",
        y_label: Y_LABEL,
        kind: ChartKind::Scatter {
            group: "dynamic_file_stdin",
            x_label: "Input File Size (Bytes)",
        },
    },
    ChartSpec {
        name: "shmem",
        title: "Time to Use a Shared Memory Segment Across Sizes",
        y_label: Y_LABEL,
        kind: ChartKind::Scatter {
            group: "simple_shmem_persist_fill_check",
            x_label: "Shared Memory Size (Bytes)",
        },
    },
    ChartSpec {
        name: "stdin_types",
        title: "Performance of stdin Options",
        y_label: Y_LABEL,
        kind: ChartKind::Box {
            group: "stdin_types",
        },
    },
    ChartSpec {
        name: "preloads",
        title: "Performance of LD_PRELOAD Options",
        y_label: Y_LABEL,
        kind: ChartKind::Box { group: "preloads" },
    },
    ChartSpec {
        name: "instrumentation",
        title: "Performance of Coverage Instrumentation",
        y_label: Y_LABEL,
        kind: ChartKind::BoxPanels {
            panels: INSTRUMENTATION_PANELS,
        },
    },
];
