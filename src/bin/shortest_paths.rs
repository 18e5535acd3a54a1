use std::{error::Error, path::PathBuf};

use clap::Parser;
use highway_paths::{
    load_road_map,
    utility::{describe_distance, describe_route, describe_travel_time},
    Dijkstra, Metric, RoadMap, ShortestPathTree, VertexId,
};
use itertools::Itertools;
use log::info;
use serde::Serialize;

/// Prints shortest paths from a source city, either to every city or to a
/// single destination.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// City file with `name,x,y` lines
    #[arg(short, long)]
    cities: PathBuf,

    /// Highway file with `from,to,distance,hours,minutes` lines
    #[arg(short = 'w', long)]
    highways: PathBuf,

    /// Name of the source city
    #[arg(short, long)]
    source: String,

    /// Name of the destination city
    #[arg(short, long)]
    target: Option<String>,

    /// Edge weight used for the search
    #[arg(short, long, value_enum, default_value_t = Metric::Distance)]
    metric: Metric,

    /// Print JSON instead of sentences
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TreeEntry<'a> {
    city: &'a str,
    weight: f64,
    predecessor: Option<&'a str>,
}

#[derive(Serialize)]
struct RouteOutput<'a> {
    metric: Metric,
    source: &'a str,
    target: &'a str,
    weight: Option<f64>,
    cities: Vec<&'a str>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::init();

    let road_map = load_road_map(&args.cities, &args.highways)?;
    let source = find_city(&road_map, &args.source)?;

    info!("Searching from {} using {:?}", args.source, args.metric);
    let tree = Dijkstra::new(&road_map).shortest_paths_by(source, args.metric)?;

    match &args.target {
        Some(target) => {
            let target = find_city(&road_map, target)?;
            print_route(&road_map, &tree, target, args.metric, args.json)?
        }
        None => print_tree(&road_map, &tree, args.metric, args.json)?,
    }

    Ok(())
}

fn find_city(road_map: &RoadMap, name: &str) -> Result<VertexId, Box<dyn Error>> {
    road_map
        .vertex_by_name(name)
        .ok_or_else(|| format!("no city named {:?}", name).into())
}

fn print_route(
    road_map: &RoadMap,
    tree: &ShortestPathTree,
    target: VertexId,
    metric: Metric,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let path = tree.path(target);
    let cities: Vec<&str> = match &path {
        Some(path) => path
            .vertices
            .iter()
            .map(|&vertex| road_map.city(vertex).map(|city| city.name()))
            .collect::<Result<_, _>>()?,
        None => Vec::new(),
    };

    if json {
        let output = RouteOutput {
            metric,
            source: road_map.city(tree.source())?.name(),
            target: road_map.city(target)?.name(),
            weight: path.as_ref().map(|path| path.weight),
            cities,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", describe_route(road_map, tree, target, metric)?);
        if !cities.is_empty() {
            println!("{}", cities.iter().join(" -> "));
        }
    }
    Ok(())
}

fn print_tree(
    road_map: &RoadMap,
    tree: &ShortestPathTree,
    metric: Metric,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut entries = Vec::new();
    for vertex in road_map.vertices() {
        let predecessor = match tree.predecessor(vertex) {
            Some(predecessor) => Some(road_map.city(predecessor)?.name()),
            None => None,
        };
        entries.push(TreeEntry {
            city: road_map.city(vertex)?.name(),
            weight: tree.weight(vertex),
            predecessor,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "Shortest paths from {} using {:?} ({})",
        road_map.city(tree.source())?.name(),
        metric,
        metric.unit()
    );
    for entry in entries
        .iter()
        .sorted_by(|a, b| a.weight.total_cmp(&b.weight))
    {
        let weight = if !entry.weight.is_finite() {
            "unreachable".to_string()
        } else {
            match metric {
                Metric::Distance => describe_distance(entry.weight),
                Metric::Time => describe_travel_time(entry.weight),
            }
        };
        match entry.predecessor {
            Some(predecessor) => println!("  {}: {} via {}", entry.city, weight, predecessor),
            None => println!("  {}: {}", entry.city, weight),
        }
    }
    Ok(())
}
