use std::{fs::File, io::BufWriter, path::PathBuf};

use clap::Parser;
use incidence_paths::{
    graphs::{incidence::read_incidence_file, vec_vec_graph::VecVecGraph},
    search::{dijkstra::dijkstra_single_pair, path::ShortestPathTestCase},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generates random source/target pairs with reference distances for the
/// graph at `graph`, for validating an external shortest-path solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file in incidence-matrix format
    #[arg(short, long)]
    graph: PathBuf,

    /// Path where the test cases will be saved
    #[arg(short, long)]
    test_cases: PathBuf,

    /// Number of tests to be generated
    #[arg(short, long, default_value = "1000")]
    number_of_tests: u32,

    /// Seed for reproducible pair selection
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
    let (number_of_vertices, edges) = read_incidence_file(&args.graph)?;
    if number_of_vertices < 2 {
        return Err("graph needs at least two vertices for source != target pairs".into());
    }
    let graph = VecVecGraph::from_edges(number_of_vertices, &edges);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut test_cases = Vec::with_capacity(args.number_of_tests as usize);
    for _ in 0..args.number_of_tests {
        // Guarantee that source != target.
        let source = rng.gen_range(0..number_of_vertices);
        let mut target = rng.gen_range(0..number_of_vertices - 1);
        if target >= source {
            target += 1;
        }

        let path = dijkstra_single_pair(&graph, source, target)?;
        test_cases.push(ShortestPathTestCase {
            source,
            target,
            distance: path.map(|path| path.distance),
        });
    }

    let mut writer = BufWriter::new(File::create(&args.test_cases)?);
    serde_json::to_writer(&mut writer, &test_cases)?;

    println!(
        "Wrote {} test cases to {}",
        test_cases.len(),
        args.test_cases.display()
    );

    Ok(())
}
