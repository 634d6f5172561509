// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing reshaped chart data to files.

use std::fs;
use std::path::{Path, PathBuf};

use benchplot_charts::{BoxPanel, Figure, FigureLabels, FigureStyle, box_figure, scatter_figure};
use benchplot_frame::{DistributionSet, PointSet};
use tracing::info;

use crate::chart_spec::{ChartKind, ChartSpec};
use crate::error::ReportError;

/// One reshaped panel of a multi-panel box plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    /// Panel title.
    pub title: &'static str,
    /// Distributions drawn in the panel.
    pub distributions: DistributionSet,
}

/// Draws one chart per call.
///
/// Each call receives fully reshaped data; implementations only draw and write.
pub trait Renderer {
    /// Draws a log-log scatter plot.
    fn scatter(&mut self, spec: &ChartSpec, points: &PointSet) -> Result<(), ReportError>;

    /// Draws a single-panel box plot.
    fn boxplot(
        &mut self,
        spec: &ChartSpec,
        distributions: &DistributionSet,
    ) -> Result<(), ReportError>;

    /// Draws side-by-side box plots; only the first panel carries the y axis title.
    fn boxplot_panels(&mut self, spec: &ChartSpec, panels: &[Panel]) -> Result<(), ReportError>;
}

/// Writes each chart as `<output_dir>/<name>.svg`.
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    output_dir: PathBuf,
    style: FigureStyle,
}

impl SvgRenderer {
    /// Creates a renderer writing into `output_dir`, which is created on first write.
    pub fn new(output_dir: impl AsRef<Path>, style: FigureStyle) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_owned(),
            style,
        }
    }

    /// Returns the file a chart is written to.
    pub fn path_for(&self, spec: &ChartSpec) -> PathBuf {
        self.output_dir.join(format!("{}.svg", spec.name))
    }

    fn labels(spec: &ChartSpec) -> FigureLabels {
        let labels = FigureLabels::new(spec.title, spec.y_label);
        match spec.kind {
            ChartKind::Scatter { x_label, .. } => labels.with_x_label(x_label),
            ChartKind::Box { .. } | ChartKind::BoxPanels { .. } => labels,
        }
    }

    fn write(&self, spec: &ChartSpec, figure: &Figure) -> Result<(), ReportError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ReportError::Io {
            path: self.output_dir.clone(),
            source,
        })?;
        let path = self.path_for(spec);
        fs::write(&path, figure.to_svg_string()).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        info!(chart = spec.name, path = %path.display(), "wrote chart");
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn scatter(&mut self, spec: &ChartSpec, points: &PointSet) -> Result<(), ReportError> {
        let figure = scatter_figure(&self.style, &Self::labels(spec), points);
        self.write(spec, &figure)
    }

    fn boxplot(
        &mut self,
        spec: &ChartSpec,
        distributions: &DistributionSet,
    ) -> Result<(), ReportError> {
        let panel = BoxPanel {
            title: None,
            distributions,
        };
        let figure = box_figure(&self.style, &Self::labels(spec), &[panel]);
        self.write(spec, &figure)
    }

    fn boxplot_panels(&mut self, spec: &ChartSpec, panels: &[Panel]) -> Result<(), ReportError> {
        let panels: Vec<BoxPanel<'_>> = panels
            .iter()
            .map(|p| BoxPanel {
                title: Some(p.title),
                distributions: &p.distributions,
            })
            .collect();
        let figure = box_figure(&self.style, &Self::labels(spec), &panels);
        self.write(spec, &figure)
    }
}
