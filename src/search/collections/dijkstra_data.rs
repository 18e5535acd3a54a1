use super::adaptable_heap::{AdaptableHeap, Locator};
use crate::{
    error::QueueError,
    graphs::{road_map::RoadMap, VertexId},
    search::path::ShortestPathTree,
};

/// Working state of one Dijkstra run. Created for a single query and consumed
/// into a [`ShortestPathTree`] when the run is finished.
pub struct DijkstraData {
    source: VertexId,
    weights: Vec<f64>,
    predecessors: Vec<Option<VertexId>>,
    // live queue entry of every vertex that is not finalized yet
    locators: Vec<Option<Locator>>,
    queue: AdaptableHeap<f64, VertexId>,
}

impl DijkstraData {
    /// Puts every vertex of `road_map` into the queue, the source with weight
    /// zero and all others with infinite weight.
    pub fn new(road_map: &RoadMap, source: VertexId) -> DijkstraData {
        let number_of_vertices = road_map.number_of_vertices() as usize;
        let mut data = DijkstraData {
            source,
            weights: vec![f64::INFINITY; number_of_vertices],
            predecessors: vec![None; number_of_vertices],
            locators: Vec::with_capacity(number_of_vertices),
            queue: AdaptableHeap::with_capacity(number_of_vertices),
        };
        data.weights[source as usize] = 0.0;

        for vertex in road_map.vertices() {
            let locator = data.queue.insert(data.weights[vertex as usize], vertex);
            data.locators.push(Some(locator));
        }

        data
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Finalizes and returns the vertex with the smallest tentative weight.
    pub fn pop(&mut self) -> Result<(f64, VertexId), QueueError> {
        let (weight, vertex) = self.queue.pop_min()?;
        self.locators[vertex as usize] = None;
        Ok((weight, vertex))
    }

    pub fn is_finalized(&self, vertex: VertexId) -> bool {
        self.locators[vertex as usize].is_none()
    }

    pub fn weight(&self, vertex: VertexId) -> f64 {
        self.weights[vertex as usize]
    }

    /// Relaxes the edge from `tail` to `head`. Returns whether `head` got a
    /// shorter path.
    pub fn update(
        &mut self,
        tail: VertexId,
        head: VertexId,
        edge_weight: f64,
    ) -> Result<bool, QueueError> {
        let Some(locator) = self.locators[head as usize] else {
            return Ok(false);
        };

        let alternative_weight = self.weights[tail as usize] + edge_weight;
        if alternative_weight < self.weights[head as usize] {
            self.weights[head as usize] = alternative_weight;
            self.predecessors[head as usize] = Some(tail);
            self.queue.decrease_key(locator, alternative_weight)?;
            return Ok(true);
        }

        Ok(false)
    }

    pub fn into_tree(self) -> ShortestPathTree {
        ShortestPathTree::new(self.source, self.weights, self.predecessors)
    }
}
