use std::time::Instant;

use clap::Parser;
use log::info;

use digraph_zdd::config::ZddConfig;
use digraph_zdd::graphset::Session;
use digraph_zdd::universe::{Edge, Universe, Vertex};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of grid rows.
    #[arg(value_name = "INT", default_value = "3")]
    rows: u32,

    /// Number of grid columns.
    #[arg(value_name = "INT", default_value = "3")]
    cols: u32,

    /// Number of heaviest cycles to print.
    #[clap(long, value_name = "INT", default_value = "3")]
    top: usize,

    /// Seed for the random samples.
    #[clap(long, value_name = "INT")]
    seed: Option<u64>,

    /// Write the cycle family to this file.
    #[clap(long, value_name = "PATH")]
    dump: Option<String>,

    /// Disable garbage collection.
    #[clap(long)]
    no_gc: bool,
}

/// Both directions of every grid edge, row by row.
fn grid(rows: u32, cols: u32) -> Vec<Edge> {
    let id = |r: u32, c: u32| -> Vertex { r * cols + c + 1 };
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let v = id(r, c);
            if c + 1 < cols {
                let w = id(r, c + 1);
                edges.push(Edge::weighted(v, w, (c + 1) as f64));
                edges.push(Edge::weighted(w, v, (c + 1) as f64));
            }
            if r + 1 < rows {
                let w = id(r + 1, c);
                edges.push(Edge::weighted(v, w, (r + 1) as f64));
                edges.push(Edge::weighted(w, v, (r + 1) as f64));
            }
        }
    }
    edges
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    let universe = Universe::new(grid(args.rows, args.cols))?;
    info!(
        "Grid {}x{}: {} vertices, {} edges",
        args.rows,
        args.cols,
        universe.vertices().len(),
        universe.len()
    );

    let config = ZddConfig::default().with_gc(!args.no_gc);
    let session = Session::with_config(universe, config);

    let time = Instant::now();
    let cycles = session.directed_cycles();
    println!(
        "{} directed cycles ({} nodes) in {:.3}s",
        cycles.len(),
        cycles.size(),
        time.elapsed().as_secs_f64()
    );

    let time = Instant::now();
    let ham = session.directed_hamiltonian_cycles();
    println!(
        "{} Hamiltonian cycles ({} nodes) in {:.3}s",
        ham.len(),
        ham.size(),
        time.elapsed().as_secs_f64()
    );

    println!("Heaviest cycles:");
    let mut heaviest = cycles.max_iter(None)?;
    for _ in 0..args.top {
        let Some((cycle, weight)) = heaviest.next_weighted() else {
            break;
        };
        println!("  {:>6.1}  {:?}", weight, cycle);
    }

    println!("Random cycles:");
    for cycle in cycles.rand_iter(args.seed).take(args.top) {
        println!("  {:?}", cycle);
    }

    if let Some(path) = &args.dump {
        cycles.save(path)?;
        info!("Saved cycles to '{}'", path);
    }

    let (hits, misses) = session.manager().cache_stats();
    info!("Operation cache: {} hits, {} misses", hits, misses);
    println!("manager = {:?}", session.manager());
    println!("\nAll done in {:.3}s", time_total.elapsed().as_secs_f64());

    Ok(())
}
