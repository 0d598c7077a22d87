use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use shortest_paths::{
    graph::algo::floyd_warshall::negative_cycle_vertices, parse::parse_graph,
    report::distance_table, Algorithm, Graph, DEFAULT_CAPACITY,
};
use tracing::{debug, info};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Graph file to read, asked for on stdin when missing
    input: Option<PathBuf>,

    /// Which all-pairs algorithm to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::All)]
    algorithm: AlgorithmArg,

    /// Maximum number of vertices the graph may have
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    All,
    Dijkstra,
    BellmanFord,
    FloydWarshall,
}

impl AlgorithmArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmArg::All => Algorithm::ALL.to_vec(),
            AlgorithmArg::Dijkstra => vec![Algorithm::Dijkstra],
            AlgorithmArg::BellmanFord => vec![Algorithm::BellmanFord],
            AlgorithmArg::FloydWarshall => vec![Algorithm::FloydWarshall],
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .init();

    let (path, file) = match cli.input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            (path, file)
        }
        None => prompt_for_file()?,
    };

    let graph = parse_graph(BufReader::new(file), cli.capacity)
        .with_context(|| format!("failed to read graph from {}", path.display()))?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    for algorithm in cli.algorithm.algorithms() {
        run(&graph, algorithm)?;
    }

    Ok(())
}

/// time one all-pairs computation and print its table
fn run(graph: &Graph, algorithm: Algorithm) -> anyhow::Result<()> {
    let begin = Instant::now();
    let result = algorithm.all_pairs(graph);
    let elapsed = begin.elapsed();
    debug!(%algorithm, ?elapsed, "all-pairs computation finished");

    let distances = match result {
        Ok(distances) => distances,
        Err(err) => bail!("{err}, shortest paths could not be found with {algorithm}"),
    };

    println!(
        "It took {:.3} ms to compute shortest paths with {algorithm} as follows:\n",
        elapsed.as_secs_f64() * 1000.0
    );
    println!("{}\n", distance_table(graph, &distances));

    if algorithm == Algorithm::FloydWarshall {
        let negative = negative_cycle_vertices(&distances);
        if !negative.is_empty() {
            let names: Vec<&str> = negative.iter().filter_map(|&i| graph.name(i)).collect();
            println!(
                "Caveat: negative-weight cycles pass through {}, \
                 the distances above are not shortest paths.\n",
                names.join(", ")
            );
        }
    }

    Ok(())
}

/// keep asking for a file name until one can be opened
fn prompt_for_file() -> anyhow::Result<(PathBuf, File)> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter the file name: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("no file name given");
        };
        let path = PathBuf::from(line?.trim());

        match File::open(&path) {
            Ok(file) => {
                println!("<File open successful>");
                return Ok((path, file));
            }
            Err(err) => eprintln!("File open failed: {err}"),
        }
    }
}
