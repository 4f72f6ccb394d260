//! Command implementations; `main` only parses arguments and dispatches.

use anyhow::{bail, Context, Result};
use limites::api::{self, SweepRow};
use limites::chart;
use limites::course::{render_site, Route};
use limites::epsdelta::{compute, SampleSet, Tolerance};
use limites::visualizer::{format_value, Readout, Visualizer};
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::provenance::{write_sidecar, Payload};

#[derive(Serialize)]
struct DeltaReport<'a> {
    epsilon: f64,
    delta: f64,
    display: String,
    readout: &'a Readout,
    upper: f64,
    lower: f64,
}

/// Table formats chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(TableFormat::Csv),
            Some("parquet") => Ok(TableFormat::Parquet),
            other => bail!(
                "unsupported table extension {:?} for {} (use .csv or .parquet)",
                other,
                path.display()
            ),
        }
    }
}

pub fn tolerance(epsilon: f64) -> Result<Tolerance> {
    Tolerance::new(epsilon).with_context(|| format!("invalid --epsilon {epsilon}"))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Readout lines, or the full view as JSON.
pub fn delta_text(epsilon: f64, as_json: bool) -> Result<String> {
    let mut vis = Visualizer::mount();
    let view = vis.set(tolerance(epsilon)?);
    let readout = vis.readout();
    if as_json {
        let report = DeltaReport {
            epsilon: view.epsilon,
            delta: view.delta,
            display: format_value(view.delta.abs()),
            readout: &readout,
            upper: view.samples.upper[0],
            lower: view.samples.lower[0],
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(format!("{}\n{}", readout.epsilon_label, readout.delta_label))
}

pub fn figure(epsilon: f64, out: &Path, tag: Option<String>) -> Result<PathBuf> {
    tracing::info!(epsilon, out = %out.display(), "figure");
    let frame = api::frame(epsilon).with_context(|| format!("building chart for ε={epsilon}"))?;
    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&frame.chart)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(
        out,
        Payload::new(
            json!({"command": "figure", "epsilon": frame.epsilon, "delta": frame.delta}),
            tag,
        ),
    )
}

pub fn samples_frame(samples: &SampleSet) -> Result<DataFrame> {
    Ok(df!(
        "x" => samples.x.as_slice(),
        "f" => samples.curve.as_slice(),
        "upper" => samples.upper.as_slice(),
        "lower" => samples.lower.as_slice(),
    )?)
}

pub fn sweep_frame(rows: &[SweepRow]) -> Result<DataFrame> {
    let col = |f: fn(&SweepRow) -> f64| rows.iter().map(f).collect::<Vec<f64>>();
    Ok(df!(
        "epsilon" => col(|r| r.epsilon),
        "delta" => col(|r| r.delta),
        "two_sided_delta" => col(|r| r.two_sided_delta),
        "gap" => col(|r| r.gap),
        "display" => rows.iter().map(|r| r.display.as_str()).collect::<Vec<_>>(),
    )?)
}

pub fn write_table(df: &mut DataFrame, out: &Path) -> Result<()> {
    let format = TableFormat::from_path(out)?;
    ensure_parent(out)?;
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match format {
        TableFormat::Csv => CsvWriter::new(file)
            .include_header(true)
            .finish(df)
            .with_context(|| format!("writing {}", out.display()))?,
        TableFormat::Parquet => {
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
    }
    tracing::info!(rows = df.height(), cols = df.width(), out = %out.display(), "table");
    Ok(())
}

pub fn samples(epsilon: f64, out: &Path, tag: Option<String>) -> Result<PathBuf> {
    tracing::info!(epsilon, out = %out.display(), "samples");
    let view = compute(tolerance(epsilon)?);
    let mut df = samples_frame(&view.samples)?;
    write_table(&mut df, out)?;
    write_sidecar(
        out,
        Payload::new(
            json!({"command": "samples", "epsilon": view.epsilon, "rows": df.height()}),
            tag,
        ),
    )
}

pub fn sweep(from: f64, to: f64, out: &Path, tag: Option<String>) -> Result<PathBuf> {
    tracing::info!(from, to, out = %out.display(), "sweep");
    if from > to {
        bail!("--from {from} is greater than --to {to}");
    }
    let rows = api::sweep(from, to).with_context(|| format!("sweeping [{from}, {to}]"))?;
    let widest = rows.iter().map(|r| r.gap.abs()).fold(0.0, f64::max);
    tracing::info!(rows = rows.len(), max_gap = widest, "sweep_done");
    let mut df = sweep_frame(&rows)?;
    write_table(&mut df, out)?;
    write_sidecar(
        out,
        Payload::new(
            json!({"command": "sweep", "from": from, "to": to, "rows": rows.len()}),
            tag,
        ),
    )
}

/// Write every page under `out`; returns the written files in sidebar order.
pub fn site(out: &Path, tag: Option<String>) -> Result<Vec<PathBuf>> {
    tracing::info!(out = %out.display(), "site");
    let pages = render_site(chart::init()).context("rendering course pages")?;
    let mut written = Vec::with_capacity(pages.len());
    for (route, html) in pages {
        let path = out.join(route.output_file());
        ensure_parent(&path)?;
        fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(route = route.path(), file = %path.display(), "page");
        written.push(path);
    }
    let index = out.join(Route::Home.output_file());
    let routes: Vec<_> = Route::ALL.iter().map(|r| r.path()).collect();
    write_sidecar(
        &index,
        Payload::new(json!({"command": "site", "routes": routes}), tag),
    )?;
    Ok(written)
}
