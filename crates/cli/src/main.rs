use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use skybound::prelude::*;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod source;
mod summary;

use source::{CachedSource, FileSource, CDS_BOUNDARIES_URL, DEFAULT_CACHE_DIR};

const BOUNDARIES_FILENAME: &str = "boundaries.json";

#[derive(Parser)]
#[command(name = "skybound", version)]
#[command(about = "Constellation boundary geometry builder")]
struct Cmd {
    /// Debug-level logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Densify, precess, and write boundary polygons as JSON
    Build(BuildArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Local boundary file; skips the download cache
    #[arg(long, conflicts_with = "refresh")]
    input: Option<PathBuf>,
    #[arg(long, default_value = CDS_BOUNDARIES_URL)]
    url: String,
    #[arg(long, default_value = DEFAULT_CACHE_DIR)]
    cache_dir: PathBuf,
    /// Download again even if the cache file exists
    #[arg(long)]
    refresh: bool,
    #[arg(long, alias = "output", default_value = "web")]
    out: PathBuf,
    /// Interpolated points per edge
    #[arg(long, default_value = "10")]
    steps: NonZeroUsize,
    /// Squared edge length (h² + deg²) above which an edge is not interpolated
    #[arg(long, default_value_t = DensifyCfg::DEFAULT_GAP_THRESHOLD_SQ)]
    gap_sq: f64,
    /// Keep FK4 B1875 coordinates
    #[arg(long)]
    no_precession: bool,
    /// Process constellations on the rayon pool
    #[arg(long)]
    parallel: bool,
    /// Per-constellation summary table (.csv or .parquet)
    #[arg(long)]
    summary: Option<PathBuf>,
}

/// Parameters recorded in the provenance sidecar.
#[derive(Serialize)]
struct RunParams {
    steps: usize,
    gap_threshold_sq: f64,
    precession: bool,
    parallel: bool,
    decimals: u32,
    frame: String,
}

impl BuildArgs {
    fn pipeline_cfg(&self) -> PipelineCfg {
        PipelineCfg {
            densify: DensifyCfg {
                steps: self.steps,
                gap_threshold_sq: self.gap_sq,
            },
            transform: TransformCfg {
                precession: if self.no_precession {
                    Precession::Disabled
                } else {
                    Precession::Enabled
                },
                ..TransformCfg::default()
            },
            parallel: self.parallel,
            ..PipelineCfg::default()
        }
    }

    fn source(&self) -> Box<dyn BoundarySource> {
        match &self.input {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(CachedSource::new(&self.cache_dir, &self.url).refresh(self.refresh)),
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Build(args) => build(&args).map(|_| ()),
        Action::Report => report(),
    }
}

fn build(args: &BuildArgs) -> Result<PathBuf> {
    tracing::debug!(?args, "build");
    let pipeline = BoundaryPipeline::new(args.pipeline_cfg())?;
    let source = args.source();
    let output = pipeline
        .run_source(source.as_ref())
        .with_context(|| format!("building boundaries from {}", source.describe()))?;
    if output.polygons.is_empty() {
        tracing::warn!("no boundary polygons parsed; writing empty output");
    }

    let out_path = write_boundaries(&args.out, &output)?;
    let cfg = pipeline.cfg();
    let params = RunParams {
        steps: cfg.densify.steps.get(),
        gap_threshold_sq: cfg.densify.gap_threshold_sq,
        precession: !args.no_precession,
        parallel: cfg.parallel,
        decimals: cfg.decimals,
        frame: output.frame.label(),
    };
    let payload = provenance::Payload::new(serde_json::to_value(&params)?)
        .with_input(source.describe())
        .with_output(&output);
    let prov_path = provenance::write_sidecar(&out_path, payload)?;
    tracing::debug!(path = %prov_path.display(), "provenance written");

    if let Some(path) = &args.summary {
        summary::write_summary(&output, path)?;
    }
    tracing::info!(
        path = %out_path.display(),
        polygons = output.polygons.len(),
        vertices = output.total_vertices(),
        degraded = output.frame.is_degraded(),
        "boundaries written"
    );
    Ok(out_path)
}

fn write_boundaries(out_dir: &Path, output: &BoundaryOutput) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output dir {}", out_dir.display()))?;
    let out_path = out_dir.join(BOUNDARIES_FILENAME);
    std::fs::write(&out_path, serde_json::to_vec_pretty(&output.polygons)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    Ok(out_path)
}

fn report() -> Result<()> {
    let defaults = PipelineCfg::default();
    let obj = serde_json::json!({
        "tool": "skybound",
        "version": skybound::VERSION,
        "code_rev": provenance::current_git_rev(),
        "params": {
            "steps": defaults.densify.steps.get(),
            "gap_threshold_sq": defaults.densify.gap_threshold_sq,
            "equinox": defaults.transform.equinox,
            "decimals": defaults.decimals,
            "source": CDS_BOUNDARIES_URL
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
