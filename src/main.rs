use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use algo_lab::graph::{build_triangle_graph, describe_edge};
use algo_lab::input::{parse_edge, parse_label, parse_value, parse_value_list};
use algo_lab::sample::{populate_graph, populate_tree, random_graph_edges, random_tree_values};
use algo_lab::{BinarySearchTree, Graph, ShortestPaths};

#[derive(Parser, Debug)]
#[command(name = "algo-lab", about = "Step-by-step BST and Dijkstra walkthroughs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a binary search tree and search it.
    Bst(BstArgs),
    /// Build a weighted undirected graph and run Dijkstra on it.
    Dijkstra(DijkstraArgs),
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// Load random sample data first.
    #[arg(long)]
    random: bool,

    /// Seed for `--random`, for repeatable sample data.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

impl SampleArgs {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Args, Debug)]
struct BstArgs {
    /// Comma-separated values to insert, in order.
    #[arg(long, value_name = "VALUES")]
    insert: Option<String>,

    /// Values to search for after inserting.
    #[arg(long, value_name = "VALUE")]
    search: Vec<String>,

    #[command(flatten)]
    sample: SampleArgs,
}

#[derive(Args, Debug)]
struct DijkstraArgs {
    /// Edge as FROM-TO:WEIGHT. Repeatable.
    #[arg(long = "edge", value_name = "EDGE")]
    edges: Vec<String>,

    /// Start node. Defaults to the first node in label order.
    #[arg(long)]
    start: Option<String>,

    #[command(flatten)]
    sample: SampleArgs,
}

fn main() -> Result<()> {
    // RUST_LOG=debug surfaces the engines' structured events.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(true).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Bst(args) => run_bst(&args),
        Command::Dijkstra(args) => run_dijkstra(&args),
    }
}

fn run_bst(args: &BstArgs) -> Result<()> {
    let mut tree = BinarySearchTree::new();
    let mut insert_traces = Vec::new();

    if args.sample.random {
        let values = random_tree_values(&mut args.sample.rng());
        info!(?values, "loading random tree");
        insert_traces.push(populate_tree(&mut tree, &values));
    }

    if let Some(raw) = &args.insert {
        let values = parse_value_list(raw).context("invalid --insert list")?;
        for v in values {
            insert_traces.push(tree.insert(v));
        }
    }

    let mut searches = Vec::new();
    for raw in &args.search {
        let value = parse_value(raw).context("invalid --search value")?;
        searches.push((value, tree.search(value)));
    }

    let structure = tree.structure();

    if args.sample.json {
        let out = json!({
            "inserts": insert_traces,
            "searches": searches
                .iter()
                .map(|(value, result)| json!({ "value": value, "result": result }))
                .collect::<Vec<_>>(),
            "in_order": tree.in_order(),
            "structure": structure,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for trace in &insert_traces {
        for line in trace {
            println!("{}", line);
        }
        println!();
    }

    println!("=== Tree ===");
    for line in &structure {
        println!("{}", line);
    }

    for (value, result) in &searches {
        println!();
        println!(
            "=== Search {}: {} ===",
            value,
            if result.found { "found" } else { "not found" }
        );
        for line in &result.trace {
            println!("{}", line);
        }
    }

    Ok(())
}

fn run_dijkstra(args: &DijkstraArgs) -> Result<()> {
    let mut graph = Graph::new();

    if args.sample.random {
        let edges = random_graph_edges(&mut args.sample.rng());
        populate_graph(&mut graph, &edges);
    }

    for raw in &args.edges {
        let (from, to, weight) = parse_edge(raw).with_context(|| format!("invalid --edge {:?}", raw))?;
        graph.add_edge(&from, &to, weight);
    }

    if graph.is_empty() {
        info!("no edges given, using the walkthrough graph");
        graph = build_triangle_graph();
    }

    let start = match &args.start {
        Some(raw) => parse_label(raw).context("invalid --start label")?,
        None => match graph.nodes().into_iter().next() {
            Some(first) => first,
            None => bail!("graph has no nodes"),
        },
    };
    if !graph.contains(&start) {
        bail!("start node {} is not in the graph (nodes: {})", start, graph.nodes().join(", "));
    }

    let result = graph.run_shortest_paths(&start);

    if args.sample.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "=== Graph: {} edges, {} nodes ===",
        graph.edge_count(),
        graph.node_count()
    );
    for edge in graph.edges() {
        println!("{}", describe_edge(&edge.from, &edge.to, edge.weight));
    }
    println!();
    print_steps(&result);

    Ok(())
}

fn print_steps(result: &ShortestPaths) {
    let total = result.steps.len();
    for (idx, step) in result.steps.iter().enumerate() {
        println!("--- Step {} of {} (step {}) ---", idx + 1, total, step.step);
        println!("{}", step.description);
        println!("  current:   {}", step.current);
        println!("  distances: {}", step.snapshot());
        println!("  visited:   [{}]", step.visited.join(", "));
    }

    println!();
    println!("=== Shortest distances from {} ===", result.start);
    for (label, distance) in &result.distances {
        println!("{}: {}", label, distance);
    }
}
