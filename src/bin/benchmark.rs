use std::{
    error::Error,
    path::PathBuf,
    time::{Duration, Instant},
};

use clap::Parser;
use highway_paths::{load_road_map, utility::get_progressbar, Dijkstra, Metric, VertexId};
use indicatif::ParallelProgressIterator;
use itertools::Itertools;
use log::info;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use rayon::prelude::*;

/// Times single source searches from random cities for both metrics.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// City file with `name,x,y` lines
    #[arg(short, long)]
    cities: PathBuf,

    /// Highway file with `from,to,distance,hours,minutes` lines
    #[arg(short = 'w', long)]
    highways: PathBuf,

    /// Number of searches per metric
    #[arg(short, long, default_value_t = 100)]
    queries: u32,

    /// Seed for choosing the sources
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::init();

    let road_map = load_road_map(&args.cities, &args.highways)?;
    if road_map.number_of_vertices() == 0 {
        return Err("the road map has no cities".into());
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let vertices = road_map.vertices().collect_vec();
    let sources: Vec<VertexId> = (0..args.queries)
        .filter_map(|_| vertices.choose(&mut rng).copied())
        .collect();

    let dijkstra = Dijkstra::new(&road_map);
    for metric in [Metric::Distance, Metric::Time] {
        info!("Running {} searches using {:?}", sources.len(), metric);
        let pb = get_progressbar(&format!("{:?}", metric), sources.len() as u64);

        // every search owns its working state, only the road map is shared
        let durations = sources
            .par_iter()
            .progress_with(pb)
            .map(|&source| {
                let start = Instant::now();
                let tree = dijkstra.shortest_paths_by(source, metric)?;
                let duration = start.elapsed();
                Ok((duration, tree.reachable_vertices().count()))
            })
            .collect::<Result<Vec<_>, highway_paths::SearchError>>()?;

        let total: Duration = durations.iter().map(|(duration, _)| *duration).sum();
        let average = total / durations.len().max(1) as u32;
        let reached =
            durations.iter().map(|(_, reached)| *reached).sum::<usize>() / durations.len().max(1);
        println!(
            "{:?}: average search duration {:?}, on average {} cities reached",
            metric, average, reached
        );
    }

    Ok(())
}
