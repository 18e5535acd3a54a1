use log::debug;

use super::{collections::dijkstra_data::DijkstraData, metric::Metric, path::ShortestPathTree};
use crate::{
    error::{GraphError, SearchError},
    graphs::{highway::Highway, road_map::RoadMap, VertexId},
};

/// Shortest path search over a borrowed road map.
///
/// The road map is only read, so any number of searches may share it. Every
/// query builds its own working state.
pub struct Dijkstra<'a> {
    pub road_map: &'a RoadMap,
}

impl<'a> Dijkstra<'a> {
    pub fn new(road_map: &'a RoadMap) -> Self {
        Dijkstra { road_map }
    }

    pub fn shortest_paths<F>(
        &self,
        source: VertexId,
        weight_of: F,
    ) -> Result<ShortestPathTree, SearchError>
    where
        F: Fn(&Highway) -> f64,
    {
        single_source(self.road_map, source, weight_of)
    }

    pub fn shortest_paths_by(
        &self,
        source: VertexId,
        metric: Metric,
    ) -> Result<ShortestPathTree, SearchError> {
        single_source(self.road_map, source, |highway| metric.weight_of(highway))
    }
}

/// Computes a shortest path tree from `source` to every vertex of `road_map`.
/// Edge weights are given by `weight_of` and must be non-negative.
pub fn single_source<F>(
    road_map: &RoadMap,
    source: VertexId,
    weight_of: F,
) -> Result<ShortestPathTree, SearchError>
where
    F: Fn(&Highway) -> f64,
{
    if !road_map.contains_vertex(source) {
        return Err(GraphError::UnknownVertex(source).into());
    }

    let mut data = DijkstraData::new(road_map, source);
    let mut number_of_relaxations = 0;

    while !data.is_empty() {
        let (tail_weight, tail) = data.pop()?;
        if tail_weight.is_infinite() {
            // only unreachable vertices are left
            continue;
        }

        for (edge, head) in road_map.out_edges(tail)? {
            if data.is_finalized(head) {
                continue;
            }
            let edge_weight = weight_of(road_map.highway(edge)?);
            if data.update(tail, head, edge_weight)? {
                number_of_relaxations += 1;
            }
        }
    }

    debug!(
        "Search from {} finished after {} relaxations",
        source, number_of_relaxations
    );

    Ok(data.into_tree())
}
