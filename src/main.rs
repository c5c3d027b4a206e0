use clap::Parser;
use log::{info, warn};
use maxflow::max_flow::io::GraphSpec;
use maxflow::max_flow::mocks::mock_reference_network;
use maxflow::max_flow::utils::draw_with_flow;
use maxflow::max_flow::{max_flow, FlowEdge, MaxFlow, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "maxflow", about = "Maximum flow by the Edmonds-Karp algorithm")]
struct Cli {
    /// JSON graph file. The built-in 7-node reference network is used if omitted.
    #[arg(long)]
    graph: Option<PathBuf>,
    /// Source node, overriding the one in the graph file.
    #[arg(long)]
    source: Option<usize>,
    /// Sink node, overriding the one in the graph file.
    #[arg(long)]
    sink: Option<usize>,
    /// Print the network with its flow in Graphviz dot.
    #[arg(long)]
    dot: bool,
    /// Print the minimum cut.
    #[arg(long)]
    cut: bool,
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const REFERENCE_MAX_FLOW: u32 = 5;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.graph {
        Some(path) => {
            info!("loading {}", path.display());
            let spec = GraphSpec::from_path(path)?;
            let graph = spec.to_network()?;
            let source = cli.source.or(spec.source).unwrap_or(0);
            let sink = cli
                .sink
                .or(spec.sink)
                .unwrap_or_else(|| spec.node_count.saturating_sub(1));
            let mf = max_flow(&graph, NodeIndex::new(source), NodeIndex::new(sink))?;
            println!("max flow from {} to {} is {}", source, sink, mf.value);
            report(cli, &graph, &mf);
        }
        None => {
            let graph = mock_reference_network();
            let source = cli.source.unwrap_or(0);
            let sink = cli.sink.unwrap_or(6);
            let mf = max_flow(&graph, NodeIndex::new(source), NodeIndex::new(sink))?;
            if (source, sink) == (0, 6) && mf.value == REFERENCE_MAX_FLOW {
                println!("Found max flow of {} correctly", mf.value);
            } else {
                if (source, sink) == (0, 6) {
                    warn!("expected max flow {} but found {}", REFERENCE_MAX_FLOW, mf.value);
                }
                println!("max flow from {} to {} is {}", source, sink, mf.value);
            }
            report(cli, &graph, &mf);
        }
    }
    Ok(())
}

fn report<N, E: FlowEdge>(cli: &Cli, graph: &DiGraph<N, E>, mf: &MaxFlow<E::Rate>) {
    if cli.cut {
        let side: Vec<usize> = mf.min_cut.source_side.iter().map(|v| v.index()).collect();
        println!("min cut source side {:?} capacity {}", side, mf.min_cut.capacity);
        for &e in mf.min_cut.edges.iter() {
            if let Some((v, w)) = graph.edge_endpoints(e) {
                println!("  {} -> {} [{}]", v.index(), w.index(), graph[e].capacity());
            }
        }
    }
    if cli.dot {
        println!("{}", draw_with_flow(graph, &mf.flow));
    }
}
