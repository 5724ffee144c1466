use std::path::PathBuf;

use clap::Parser;
use incidence_paths::{
    generate::{generate, GenerateConfig, GenerateMode},
    graphs::incidence::write_incidence_file,
};
use rand::{rngs::StdRng, SeedableRng};

/// Generates a random weighted graph and writes it as an incidence-matrix
/// file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path where the graph file will be written
    #[arg(short, long)]
    output: PathBuf,

    /// Number of vertices
    #[arg(short = 'v', long)]
    number_of_vertices: u32,

    /// Requested number of edges; capped at the number of distinct vertex
    /// pairs
    #[arg(short = 'e', long)]
    number_of_edges: u32,

    /// Connectivity constraint on the generated graph
    #[arg(short, long, value_enum, default_value = "unconstrained")]
    mode: GenerateMode,

    /// Smallest edge weight
    #[arg(long, default_value = "1")]
    min_weight: u32,

    /// Largest edge weight
    #[arg(long, default_value = "20")]
    max_weight: u32,

    /// Seed for reproducible generation
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    if let Err(error) = run(&args) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = GenerateConfig {
        number_of_vertices: args.number_of_vertices,
        number_of_edges: args.number_of_edges,
        min_weight: args.min_weight,
        max_weight: args.max_weight,
    };

    let edges = generate(&config, args.mode, &mut rng)?;
    write_incidence_file(&args.output, args.number_of_vertices, &edges)?;

    println!(
        "Generated graph with {} vertices and {} edges",
        args.number_of_vertices,
        edges.len()
    );
    println!("Wrote {}", args.output.display());

    Ok(())
}
