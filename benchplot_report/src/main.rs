// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the benchmark report with the default configuration.

use anyhow::Context;
use benchplot_report::{CHARTS, ReportConfig, SvgRenderer, run};
use tracing::{Level, info};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = ReportConfig::default();
    let mut renderer = SvgRenderer::new(&config.output_dir, config.style.clone());
    let count = run(&config, CHARTS, &mut renderer).context("benchmark report failed")?;
    info!(charts = count, output = %config.output_dir.display(), "done");
    Ok(())
}
