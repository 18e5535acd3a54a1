use std::collections::hash_map::{
    Entry::{Occupied, Vacant},
    Iter,
};

use ahash::{HashMap, HashMapExt};

use super::{
    city::{City, Point},
    highway::Highway,
    EdgeId, VertexId,
};
use crate::error::GraphError;

/// An undirected highway between two cities.
#[derive(Clone, Debug)]
struct HighwayEntry {
    endpoints: (VertexId, VertexId),
    highway: Highway,
}

/// Undirected adjacency map graph with cities at the vertices and highways at
/// the edges.
///
/// Every vertex owns a map from its neighbors to the connecting edge, so
/// looking up the edge between two vertices is a single hash lookup and every
/// edge is reachable from both of its endpoints.
#[derive(Clone, Debug)]
pub struct RoadMap {
    cities: Vec<City>,
    highways: Vec<HighwayEntry>,
    out_edges: Vec<HashMap<VertexId, EdgeId>>,
    city_ids: HashMap<String, VertexId>,
}

impl Default for RoadMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the `(edge, opposite vertex)` pairs incident to a vertex.
pub struct OutEdges<'a> {
    neighbor_iterator: Iter<'a, VertexId, EdgeId>,
}

impl<'a> Iterator for OutEdges<'a> {
    type Item = (EdgeId, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        let (&opposite, &edge) = self.neighbor_iterator.next()?;
        Some((edge, opposite))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.neighbor_iterator.size_hint()
    }
}

impl<'a> ExactSizeIterator for OutEdges<'a> {
    fn len(&self) -> usize {
        self.neighbor_iterator.len()
    }
}

impl RoadMap {
    pub fn new() -> Self {
        RoadMap {
            cities: Vec::new(),
            highways: Vec::new(),
            out_edges: Vec::new(),
            city_ids: HashMap::new(),
        }
    }

    /// Adds a city and returns its vertex. City names identify a city to the
    /// outside world, so a second city with the same name is rejected.
    pub fn insert_vertex(&mut self, city: City) -> Result<VertexId, GraphError> {
        let vertex = self.cities.len() as VertexId;
        match self.city_ids.entry(city.name().to_string()) {
            Occupied(_) => return Err(GraphError::DuplicateVertex(city.name().to_string())),
            Vacant(entry) => {
                entry.insert(vertex);
            }
        }
        self.cities.push(city);
        self.out_edges.push(HashMap::new());
        Ok(vertex)
    }

    /// Connects `u` and `v` by `highway`. The edge is registered at both
    /// endpoints.
    pub fn insert_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        highway: Highway,
    ) -> Result<EdgeId, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if self.out_edges[u as usize].contains_key(&v) {
            return Err(GraphError::DuplicateEdge(u, v));
        }

        let edge = self.highways.len() as EdgeId;
        self.highways.push(HighwayEntry {
            endpoints: (u, v),
            highway,
        });
        self.out_edges[u as usize].insert(v, edge);
        self.out_edges[v as usize].insert(u, edge);
        Ok(edge)
    }

    /// All edges incident to `vertex` together with the vertex on their other
    /// end. The order is arbitrary but fixed for an unmodified map.
    pub fn out_edges(&self, vertex: VertexId) -> Result<OutEdges<'_>, GraphError> {
        let neighbors = self
            .out_edges
            .get(vertex as usize)
            .ok_or(GraphError::UnknownVertex(vertex))?;
        Ok(OutEdges {
            neighbor_iterator: neighbors.iter(),
        })
    }

    pub fn edge_between(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.out_edges.get(u as usize)?.get(&v).copied()
    }

    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + Clone {
        0..self.cities.len() as VertexId
    }

    pub fn edges(&self) -> impl ExactSizeIterator<Item = EdgeId> + Clone {
        0..self.highways.len() as EdgeId
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        (vertex as usize) < self.cities.len()
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.cities.len() as u32
    }

    pub fn number_of_edges(&self) -> u32 {
        self.highways.len() as u32
    }

    pub fn degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        Ok(self.out_edges(vertex)?.len())
    }

    pub fn city(&self, vertex: VertexId) -> Result<&City, GraphError> {
        self.cities
            .get(vertex as usize)
            .ok_or(GraphError::UnknownVertex(vertex))
    }

    pub fn highway(&self, edge: EdgeId) -> Result<&Highway, GraphError> {
        self.highway_entry(edge).map(|entry| &entry.highway)
    }

    pub fn endpoints(&self, edge: EdgeId) -> Result<(VertexId, VertexId), GraphError> {
        self.highway_entry(edge).map(|entry| entry.endpoints)
    }

    /// The endpoint of `edge` that is not `vertex`.
    pub fn opposite(&self, vertex: VertexId, edge: EdgeId) -> Result<VertexId, GraphError> {
        let (u, v) = self.endpoints(edge)?;
        if vertex == u {
            Ok(v)
        } else if vertex == v {
            Ok(u)
        } else {
            Err(GraphError::UnknownVertex(vertex))
        }
    }

    pub fn vertex_by_name(&self, name: &str) -> Option<VertexId> {
        self.city_ids.get(name).copied()
    }

    /// Returns the city closest to `point` among those within `tolerance`
    /// pixels of it.
    pub fn city_at(&self, point: &Point, tolerance: f64) -> Option<VertexId> {
        self.cities
            .iter()
            .enumerate()
            .map(|(vertex, city)| (vertex as VertexId, city.location().distance(point)))
            .filter(|&(_, distance)| distance <= tolerance)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(vertex, _)| vertex)
    }

    fn highway_entry(&self, edge: EdgeId) -> Result<&HighwayEntry, GraphError> {
        self.highways
            .get(edge as usize)
            .ok_or(GraphError::UnknownEdge(edge))
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if !self.contains_vertex(vertex) {
            return Err(GraphError::UnknownVertex(vertex));
        }
        Ok(())
    }
}
