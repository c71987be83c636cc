//! Generates a graph from one of the models, prints its edge list and then its degree,
//! clustering coefficient and closeness centrality distributions.
//!
//! ```text
//! cargo run --example models -- --seed 7 ws 20 4 0.1
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::{rngs::SmallRng, SeedableRng};
use randnet::generators::{ErdosRenyi, Model, ScaleFree, WattsStrogatz};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "models", about = "Generate a random graph and print its statistics.")]
struct Cli {
    /// Seed for the random source, drawn from the OS when omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    model: ModelArgs,
}

#[derive(Debug, Subcommand)]
enum ModelArgs {
    /// Erdős–Rényi G(n, p).
    Er { nodes: usize, probability: f64 },
    /// Watts–Strogatz ring lattice with rewiring.
    Ws {
        nodes: usize,
        mean_degree: usize,
        rewiring_probability: f64,
    },
    /// Preferential attachment.
    Sf { nodes: usize, disparity: usize },
}

impl From<ModelArgs> for Model {
    fn from(args: ModelArgs) -> Self {
        match args {
            ModelArgs::Er { nodes, probability } => ErdosRenyi::new(nodes, probability).into(),
            ModelArgs::Ws {
                nodes,
                mean_degree,
                rewiring_probability,
            } => WattsStrogatz::new(nodes, mean_degree, rewiring_probability).into(),
            ModelArgs::Sf { nodes, disparity } => ScaleFree::new(nodes, disparity).into(),
        }
    }
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let model = Model::from(cli.model);
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let graph = match model.generate(&mut rng) {
        Ok(graph) => graph,
        Err(err) => {
            error!(%err, model = %model.kind(), "failed to generate graph");
            return ExitCode::FAILURE;
        }
    };

    info!(
        model = %model.kind(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph generated"
    );

    println!("{graph}");
    println!("# degree\n{}", graph.degree_distribution());
    println!(
        "# clustering coefficient\n{}",
        graph.clustering_coefficient_distribution()
    );
    println!(
        "# closeness centrality\n{}",
        graph.closeness_centrality_distribution()
    );

    ExitCode::SUCCESS
}
