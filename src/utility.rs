use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error::GraphError,
    graphs::{road_map::RoadMap, VertexId},
    search::{metric::Metric, path::ShortestPathTree},
};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    let style = ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} eta: {eta_precise}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    let style = ProgressStyle::with_template(" {spinner} {msg} {elapsed}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

/// Formats a distance in miles, cut (not rounded) to two decimals.
pub fn describe_distance(miles: f64) -> String {
    let truncated = (miles * 100.0 + 1e-9).trunc() / 100.0;
    format!("{:.2} miles", truncated)
}

/// Formats a travel time given in hours as "H hours and M minutes".
pub fn describe_travel_time(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as u64;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
    format!(
        "{} {} and {} {}",
        hours,
        if hours == 1 { "hour" } else { "hours" },
        minutes,
        if minutes == 1 { "minute" } else { "minutes" }
    )
}

/// One sentence describing the shortest route from the tree's source to
/// `target`.
pub fn describe_route(
    road_map: &RoadMap,
    tree: &ShortestPathTree,
    target: VertexId,
    metric: Metric,
) -> Result<String, GraphError> {
    let source_name = road_map.city(tree.source())?.name();
    let target_name = road_map.city(target)?.name();

    let Some(path) = tree.path(target) else {
        return Ok(format!("No path from {} to {}.", source_name, target_name));
    };

    let sentence = match metric {
        Metric::Distance => format!(
            "Shortest path from {} to {} using DISTANCE. Length: {}.",
            source_name,
            target_name,
            describe_distance(path.weight)
        ),
        Metric::Time => format!(
            "Shortest path from {} to {} using TIME. Travel time: {}.",
            source_name,
            target_name,
            describe_travel_time(path.weight)
        ),
    };
    Ok(sentence)
}
