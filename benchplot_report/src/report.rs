// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The report driver: load, group, reshape every chart, then render.
//!
//! Reshaping happens for all charts before the first one is drawn, so a bad row anywhere in
//! the results aborts the run without leaving a partial set of figures behind.

use benchplot_frame::{
    DistributionSet, FrameError, GroupedTable, PointSet, SchemaError, group, to_distributions,
    to_distributions_many, to_points, transpose,
};
use tracing::{debug, info, warn};

use crate::chart_spec::{ChartKind, ChartSpec, DISCRIMINANT, SERIES_LABEL};
use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::loader::load_table;
use crate::render::{Panel, Renderer};

/// Reshaped data for one chart.
#[derive(Clone, Debug, PartialEq)]
pub enum PreparedData {
    /// Scatter points.
    Scatter(PointSet),
    /// One box per distribution.
    Box(DistributionSet),
    /// One set of boxes per panel.
    BoxPanels(Vec<Panel>),
}

/// A chart paired with its reshaped data.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedChart {
    /// The chart.
    pub spec: &'static ChartSpec,
    /// Its data.
    pub data: PreparedData,
}

impl PreparedChart {
    /// Hands the chart to `renderer`.
    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<(), ReportError> {
        match &self.data {
            PreparedData::Scatter(points) => renderer.scatter(self.spec, points),
            PreparedData::Box(distributions) => renderer.boxplot(self.spec, distributions),
            PreparedData::BoxPanels(panels) => renderer.boxplot_panels(self.spec, panels),
        }
    }
}

/// Reshapes every chart in `charts` from the grouped results.
///
/// Stops at the first chart whose group is missing or whose cells do not coerce.
pub fn prepare(
    groups: &GroupedTable,
    charts: &'static [ChartSpec],
) -> Result<Vec<PreparedChart>, ReportError> {
    charts
        .iter()
        .map(|spec| {
            let data = prepare_one(groups, spec).map_err(ReportError::chart(spec.name))?;
            Ok(PreparedChart { spec, data })
        })
        .collect()
}

fn prepare_one(groups: &GroupedTable, spec: &ChartSpec) -> Result<PreparedData, FrameError> {
    match spec.kind {
        ChartKind::Scatter { group, .. } => {
            let points = to_points(groups.require(group)?, SERIES_LABEL)?;
            debug!(chart = spec.name, points = points.len(), "melted scatter");
            Ok(PreparedData::Scatter(points))
        }
        ChartKind::Box { group } => {
            let set = to_distributions(&transpose(groups.require(group)?))?;
            warn_empty(spec, &set);
            debug!(chart = spec.name, boxes = set.len(), "reshaped box plot");
            Ok(PreparedData::Box(set))
        }
        ChartKind::BoxPanels { panels } => {
            let transposed = panels
                .iter()
                .map(|p| Ok(transpose(groups.require(p.group)?)))
                .collect::<Result<Vec<_>, SchemaError>>()?;
            let tables: Vec<_> = transposed.iter().collect();
            let sets = to_distributions_many(&tables)?;
            let panels = panels
                .iter()
                .zip(sets)
                .map(|(p, distributions)| {
                    warn_empty(spec, &distributions);
                    Panel {
                        title: p.title,
                        distributions,
                    }
                })
                .collect::<Vec<_>>();
            debug!(chart = spec.name, panels = panels.len(), "reshaped box panels");
            Ok(PreparedData::BoxPanels(panels))
        }
    }
}

fn warn_empty(spec: &ChartSpec, set: &DistributionSet) {
    for d in set.iter().filter(|d| d.values.is_empty()) {
        warn!(chart = spec.name, series = %d.name, "series has no observations");
    }
}

/// Runs the whole report and returns the number of charts rendered.
pub fn run(
    config: &ReportConfig,
    charts: &'static [ChartSpec],
    renderer: &mut dyn Renderer,
) -> Result<usize, ReportError> {
    let table = load_table(&config.input, config.delimiter)?;
    let groups = group(&table, DISCRIMINANT).map_err(|source| ReportError::Schema {
        path: config.input.clone(),
        source,
    })?;
    debug!(groups = groups.len(), "grouped results");

    let prepared = prepare(&groups, charts)?;
    for chart in &prepared {
        chart.render(renderer)?;
    }
    info!(charts = prepared.len(), "report complete");
    Ok(prepared.len())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use benchplot_frame::{Column, Table, TypeCoercionError};

    use super::*;
    use crate::chart_spec::CHARTS;
    use crate::render::SvgRenderer;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<(&'static str, &'static str)>,
    }

    impl Renderer for RecordingRenderer {
        fn scatter(&mut self, spec: &ChartSpec, _: &PointSet) -> Result<(), ReportError> {
            self.calls.push(("scatter", spec.name));
            Ok(())
        }

        fn boxplot(&mut self, spec: &ChartSpec, _: &DistributionSet) -> Result<(), ReportError> {
            self.calls.push(("box", spec.name));
            Ok(())
        }

        fn boxplot_panels(&mut self, spec: &ChartSpec, _: &[Panel]) -> Result<(), ReportError> {
            self.calls.push(("panels", spec.name));
            Ok(())
        }
    }

    const GROUPS: [&str; 8] = [
        "file_write",
        "dynamic_file_stdin",
        "simple_shmem_persist_fill_check",
        "stdin_types",
        "preloads",
        "instrumentation_no",
        "instrumentation_GNU",
        "instrumentation_uutils",
    ];

    /// Two rows per group; scatter groups get integer labels, box groups get names.
    fn results_csv() -> String {
        let mut csv = String::from("figure_name;series_name;v1;v2\n");
        for (i, group) in GROUPS.iter().enumerate() {
            if i < 3 {
                csv.push_str(&format!("{group};64;0.5;0.6\n{group};128;0.9;\n"));
            } else {
                csv.push_str(&format!("{group};fast;1.0;1.2\n{group};slow;2.0;2.4\n"));
            }
        }
        csv
    }

    fn results_table(first_label: &str) -> Table {
        let mut figure = Vec::new();
        let mut series = Vec::new();
        for (i, group) in GROUPS.iter().enumerate() {
            let labels = if i < 3 { ["64", "128"] } else { ["fast", "slow"] };
            for label in labels {
                figure.push(Some(group.to_string()));
                series.push(Some(label.to_string()));
            }
        }
        series[0] = Some(first_label.to_owned());
        let values = (0..figure.len()).map(|i| Some(i as f64 + 0.5));
        Table::new(vec![
            Column::str("figure_name", figure),
            Column::str("series_name", series),
            Column::float("v1", values),
        ])
        .unwrap()
    }

    #[test]
    fn every_chart_is_prepared_in_order() {
        let table = results_table("64");
        let groups = group(&table, DISCRIMINANT).unwrap();
        let prepared = prepare(&groups, CHARTS).unwrap();

        let mut renderer = RecordingRenderer::default();
        for chart in &prepared {
            chart.render(&mut renderer).unwrap();
        }
        assert_eq!(
            renderer.calls,
            [
                ("scatter", "file_write"),
                ("scatter", "dynamic_file_stdin"),
                ("scatter", "shmem"),
                ("box", "stdin_types"),
                ("box", "preloads"),
                ("panels", "instrumentation"),
            ]
        );

        match &prepared[3].data {
            PreparedData::Box(set) => {
                assert_eq!(set.names().collect::<Vec<_>>(), ["fast", "slow"]);
            }
            other => panic!("expected a box plot, got {other:?}"),
        }
        match &prepared[5].data {
            PreparedData::BoxPanels(panels) => {
                let titles: Vec<_> = panels.iter().map(|p| p.title).collect();
                assert_eq!(titles, ["No Instrumentation", "GNU", "uutils"]);
            }
            other => panic!("expected box panels, got {other:?}"),
        }
    }

    #[test]
    fn bad_label_aborts_before_any_render() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("res.csv");
        fs::write(&input, results_csv().replacen("file_write;64", "file_write;abc", 1)).unwrap();

        let config = ReportConfig::default().with_input(&input);
        let mut renderer = RecordingRenderer::default();
        let err = run(&config, CHARTS, &mut renderer).unwrap_err();

        match err {
            ReportError::Chart {
                chart,
                source: FrameError::TypeCoercion(TypeCoercionError { ref column, .. }),
            } => {
                assert_eq!(chart, "file_write");
                assert_eq!(column, "series_name");
            }
            other => panic!("expected a chart error, got {other:?}"),
        }
        assert!(renderer.calls.is_empty(), "rendered {:?}", renderer.calls);
    }

    #[test]
    fn missing_group_names_the_chart() {
        let table = results_table("64");
        let groups = group(&table, DISCRIMINANT).unwrap();
        static ABSENT: &[ChartSpec] = &[ChartSpec {
            name: "shmem",
            title: "Shared memory",
            y_label: "",
            kind: ChartKind::Box { group: "absent" },
        }];

        let err = prepare(&groups, ABSENT).unwrap_err();
        assert!(
            matches!(
                err,
                ReportError::Chart {
                    chart: "shmem",
                    source: FrameError::Schema(SchemaError::MissingGroup { .. })
                }
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn missing_discriminant_column_is_a_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("res.csv");
        fs::write(&input, "series_name;v1\n1;0.5\n").unwrap();

        let config = ReportConfig::default().with_input(&input);
        let err = run(&config, CHARTS, &mut RecordingRenderer::default()).unwrap_err();
        assert!(matches!(err, ReportError::Schema { .. }), "{err:?}");
    }

    #[test]
    fn writes_one_svg_per_chart() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("res.csv");
        fs::write(&input, results_csv()).unwrap();
        let out = dir.path().join("assets");

        let config = ReportConfig::default()
            .with_input(&input)
            .with_output_dir(&out);
        let style = config.style.clone().with_dpi(40.0);
        let mut renderer = SvgRenderer::new(&config.output_dir, style);
        let count = run(&config, CHARTS, &mut renderer).unwrap();

        assert_eq!(count, CHARTS.len());
        for chart in CHARTS {
            let svg = fs::read_to_string(renderer.path_for(chart)).unwrap();
            assert!(svg.starts_with("<svg"), "{} is not an SVG", chart.name);
            assert!(svg.contains(chart.title), "{} lacks its title", chart.name);
        }
    }
}
