pub mod adaptable_heap;
pub mod dijkstra_data;
