//! `evac-prep`: precompute hazard and travel-time inputs for evacuation
//! planning.
//!
//! Usage:
//!   evac-prep risk    --scenario scenario.json --out-dir out/
//!   evac-prep tau     --network road_network.json --scenario scenario.json --out-dir out/
//!   evac-prep apsp    --graph graph.txt --out-dir out/
//!   evac-prep project --scenario scenario.json --out-dir out/
//!
//! Log verbosity follows `RUST_LOG`; `--verbose` sets the default to DEBUG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ep_apsp::{DistanceMatrix, RowMax, load_graph};
use ep_core::GeoCenter;
use ep_network::{DijkstraRouter, RepairPolicy, TravelTimeBuilder, load_network_spec};
use ep_output::{ArrayTextWriter, ArtifactWriter, CsvWriter, projection_rows};
use ep_risk::{Scenario, load_scenario};

#[derive(Parser, Debug)]
#[command(name = "evac-prep", version, about = "Risk fields and travel-time matrices for evacuation planning")]
struct Args {
    /// Debug-level logging unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Time-indexed risk matrix for every cell of a scenario
    Risk {
        #[arg(short, long)]
        scenario: PathBuf,
        #[arg(short, long, default_value = "out")]
        out_dir: PathBuf,
        /// Write CSV tables instead of nested-array text
        #[arg(long)]
        csv: bool,
    },

    /// Travel-time matrices between processing nodes of a road network
    Tau {
        #[arg(short, long)]
        network: PathBuf,
        /// Take the step length from this scenario's settings
        #[arg(short, long, required_unless_present = "step_secs")]
        scenario: Option<PathBuf>,
        /// Step length in seconds
        #[arg(long, conflicts_with = "scenario")]
        step_secs: Option<f64>,
        #[arg(short, long, default_value = "out")]
        out_dir: PathBuf,
        #[arg(long)]
        csv: bool,
        /// Skip penalty-arc repair; unreachable pairs are written as -1
        #[arg(long)]
        no_repair: bool,
    },

    /// All-pairs shortest distances over an undirected weighted graph file
    Apsp {
        #[arg(short, long)]
        graph: PathBuf,
        #[arg(short, long, default_value = "out")]
        out_dir: PathBuf,
        #[arg(long)]
        csv: bool,
    },

    /// Latitude/longitude of every cell and the hazard origin
    Project {
        #[arg(short, long)]
        scenario: PathBuf,
        #[arg(short, long, default_value = "out")]
        out_dir: PathBuf,
        /// Map centre latitude; overrides the scenario's geo_center
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
}


fn main() -> Result<()> {
    let args = Args::parse();

    let default = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Risk { scenario, out_dir, csv } => run_risk(&scenario, &out_dir, csv),
        Command::Tau { network, scenario, step_secs, out_dir, csv, no_repair } => {
            let step = match (scenario, step_secs) {
                (Some(path), _) => read_scenario(&path)?.settings.step_duration_s,
                (None, Some(s)) => positive_step(s)?,
                (None, None) => bail!("either --scenario or --step-secs is required"),
            };
            let policy = if no_repair { RepairPolicy::None } else { RepairPolicy::default() };
            run_tau(&network, step, policy, &out_dir, csv)
        }
        Command::Apsp { graph, out_dir, csv } => run_apsp(&graph, &out_dir, csv),
        Command::Project { scenario, out_dir, lat, lon } => {
            let center = lat.zip(lon).map(|(lat, lon)| GeoCenter::new(lat, lon));
            run_project(&scenario, center, &out_dir)
        }
    }
}

/// A usable step length: finite and > 0.
fn positive_step(secs: f64) -> Result<f64> {
    if !(secs.is_finite() && secs > 0.0) {
        bail!("--step-secs must be finite and > 0, got {secs}");
    }
    Ok(secs)
}

fn read_scenario(path: &Path) -> Result<Scenario> {
    load_scenario(path).with_context(|| format!("loading scenario {}", path.display()))
}

fn open_writer(out_dir: &Path, csv: bool) -> Result<Box<dyn ArtifactWriter>> {
    let w: Box<dyn ArtifactWriter> = if csv {
        Box::new(CsvWriter::new(out_dir)?)
    } else {
        Box::new(ArrayTextWriter::new(out_dir)?)
    };
    Ok(w)
}

fn run_risk(scenario: &Path, out_dir: &Path, csv: bool) -> Result<()> {
    let sc = read_scenario(scenario)?;
    info!(
        cells = sc.cells.len(),
        steps = sc.settings.n_steps,
        hazard = %sc.hazard.pos,
        "computing risk field"
    );
    let risk = sc.risk_matrix();

    let mut w = open_writer(out_dir, csv)?;
    w.write_risk(&risk)
        .with_context(|| format!("writing risk matrix to {}", out_dir.display()))?;
    w.finish()?;
    info!(out_dir = %out_dir.display(), "risk matrix written");
    Ok(())
}

fn run_tau(
    network: &Path,
    step_duration_s: f64,
    policy: RepairPolicy,
    out_dir: &Path,
    csv: bool,
) -> Result<()> {
    let spec = load_network_spec(network)
        .with_context(|| format!("loading road network {}", network.display()))?;
    let net = spec
        .build(step_duration_s)
        .with_context(|| format!("building road network {}", network.display()))?;
    info!(nodes = net.node_count(), edges = net.edge_count(), step_duration_s, "road network built");

    let tt = TravelTimeBuilder::new(&net, DijkstraRouter)
        .policy(policy)
        .compute(&spec.processing_nodes, &spec.resource_ids())
        .with_context(|| format!("computing travel times for {}", network.display()))?;
    if tt.unreachable_count() > 0 {
        warn!(pairs = tt.unreachable_count(), "unreachable pairs written as -1");
    }

    let mut w = open_writer(out_dir, csv)?;
    w.write_travel_times(&tt)
        .with_context(|| format!("writing travel times to {}", out_dir.display()))?;
    w.finish()?;
    info!(out_dir = %out_dir.display(), "travel times written");
    Ok(())
}

fn run_apsp(graph: &Path, out_dir: &Path, csv: bool) -> Result<()> {
    let g = load_graph(graph).with_context(|| format!("loading graph {}", graph.display()))?;
    let d = DistanceMatrix::compute(&g);

    for (label, m) in d.labels().iter().zip(d.row_maxima()) {
        if m == RowMax::NoFiniteNeighbors {
            warn!(node = %label, "no finite distance to any other node");
        }
    }

    let mut w = open_writer(out_dir, csv)?;
    w.write_distances(&d)
        .with_context(|| format!("writing distances to {}", out_dir.display()))?;
    w.finish()?;
    info!(nodes = d.len(), out_dir = %out_dir.display(), "distances written");
    Ok(())
}

fn run_project(scenario: &Path, center: Option<GeoCenter>, out_dir: &Path) -> Result<()> {
    let sc = read_scenario(scenario)?;
    let Some(center) = center.or(sc.settings.geo_center) else {
        bail!(
            "{} has no setting.geo_center; pass --lat and --lon",
            scenario.display()
        );
    };

    let rows = projection_rows(&sc.cells, &sc.hazard, &sc.settings, center);
    let mut w = CsvWriter::new(out_dir)?;
    w.write_projection(&rows)
        .with_context(|| format!("writing projection to {}", out_dir.display()))?;
    w.finish()?;
    info!(rows = rows.len(), out_dir = %out_dir.display(), "projection written");
    Ok(())
}
