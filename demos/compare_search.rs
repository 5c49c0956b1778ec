//! Generates random graphs and compares breadth-first and depth-first search
//! between two random nodes of each.
//!
//! Usage:
//!   cargo run --example compare_search
//!   cargo run --example compare_search -- --seed 7 --dot-dir out
//!   dot -Tsvg -O out/trial-1.dot

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use graph_search::{
    Result, Trial, TrialConfig, dot::write_dot, run_trials, tracing_support::init_tracing,
};

/// Compare BFS and DFS on randomly generated graphs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of nodes in each graph
    #[arg(long, default_value_t = 20)]
    nodes: usize,

    /// Number of edges in each graph
    #[arg(long, default_value_t = 40)]
    edges: usize,

    /// Number of graphs to generate
    #[arg(long, default_value_t = 3)]
    trials: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Directory to write one DOT file per trial into (three graphs each)
    #[arg(long)]
    dot_dir: Option<PathBuf>,

    /// Log debug-level search details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> TrialConfig {
        TrialConfig {
            node_count: self.nodes,
            edge_count: self.edges,
            trials: self.trials,
            seed: self.seed,
        }
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    if let Err(err) = run(&args) {
        eprintln!("compare_search: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let trials = run_trials(&args.config())?;
    if let Some(dir) = &args.dot_dir {
        fs::create_dir_all(dir)?;
    }

    for trial in &trials {
        println!("========== Graph {} ==========", trial.number);
        print!("{}", trial.comparison.display(&trial.graph));
        if let Some(dir) = &args.dot_dir {
            let path = write_trial_dot(dir, trial)?;
            println!("Wrote {}", path.display());
        }
        println!("====================================\n");
    }
    Ok(())
}

fn write_trial_dot(dir: &std::path::Path, trial: &Trial) -> Result<PathBuf> {
    let path = dir.join(format!("trial-{}.dot", trial.number));
    let mut writer = BufWriter::new(File::create(&path)?);
    let comparison = &trial.comparison;
    write_dot(
        &trial.graph,
        comparison.bfs.path.as_ref(),
        comparison.dfs.path.as_ref(),
        &comparison.title(),
        &mut writer,
    )?;
    writer.flush()?;
    Ok(path)
}
