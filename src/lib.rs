pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

pub use error::{GraphError, LoadError, QueueError, SearchError};
pub use graphs::{
    city::{City, Point, CLICK_TOLERANCE},
    highway::Highway,
    loader::load_road_map,
    road_map::RoadMap,
    EdgeId, VertexId,
};
pub use search::{
    dijkstra::{single_source, Dijkstra},
    metric::Metric,
    path::{Path, ShortestPathTree},
};
