use std::path::PathBuf;

use clap::Parser;
use incidence_paths::{
    graphs::{incidence::read_incidence_file, vec_vec_graph::VecVecGraph, Vertex},
    search::dijkstra::dijkstra_single_pair,
};
use itertools::Itertools;

/// Loads an incidence-matrix graph file and prints the shortest-path
/// distance between two vertices, or UNREACHABLE when no path exists.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file in incidence-matrix format
    #[arg(short, long)]
    graph: PathBuf,

    /// Source vertex
    #[arg(short, long)]
    source: Vertex,

    /// Target vertex
    #[arg(short, long)]
    target: Vertex,

    /// Also print the route itself
    #[arg(short, long)]
    path: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(error) = run(&args) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let (number_of_vertices, edges) = read_incidence_file(&args.graph)?;
    let graph = VecVecGraph::from_edges(number_of_vertices, &edges);

    match dijkstra_single_pair(&graph, args.source, args.target)? {
        Some(path) => {
            println!("{}", path.distance);
            if args.path {
                println!("{}", path.vertices.iter().join(" -> "));
            }
        }
        None => println!("UNREACHABLE"),
    }

    Ok(())
}
