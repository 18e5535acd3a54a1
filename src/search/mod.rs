pub mod collections;
pub mod dijkstra;
pub mod metric;
pub mod path;
