pub mod city;
pub mod highway;
pub mod loader;
pub mod road_map;

/// Handle of a city inside a [`road_map::RoadMap`].
pub type VertexId = u32;
/// Handle of a highway inside a [`road_map::RoadMap`].
pub type EdgeId = u32;
