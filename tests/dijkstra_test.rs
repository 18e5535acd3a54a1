use highway_paths::{
    single_source, City, Dijkstra, Highway, Metric, RoadMap, ShortestPathTree, VertexId,
};
use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

const EPSILON: f64 = 1e-9;

/// A(0,0), B(3,0), C(3,4) and the isolated D(10,10).
fn get_small_road_map() -> (RoadMap, [VertexId; 4]) {
    let mut road_map = RoadMap::new();
    let a = road_map.insert_vertex(City::new("A", 0, 0)).unwrap();
    let b = road_map.insert_vertex(City::new("B", 3, 0)).unwrap();
    let c = road_map.insert_vertex(City::new("C", 3, 4)).unwrap();
    let d = road_map.insert_vertex(City::new("D", 10, 10)).unwrap();
    road_map
        .insert_edge(a, b, Highway::new(3.0, 0.0, 6.0))
        .unwrap();
    road_map
        .insert_edge(b, c, Highway::new(4.0, 0.0, 8.0))
        .unwrap();
    road_map
        .insert_edge(a, c, Highway::new(10.0, 0.0, 20.0))
        .unwrap();
    (road_map, [a, b, c, d])
}

fn get_random_road_map(rng: &mut StdRng) -> RoadMap {
    let number_of_vertices = rng.gen_range(1..40);
    let mut road_map = RoadMap::new();
    for vertex in 0..number_of_vertices {
        let city = City::new(
            format!("city {}", vertex),
            rng.gen_range(0..500),
            rng.gen_range(0..500),
        );
        road_map.insert_vertex(city).unwrap();
    }

    let edge_probability = rng.gen_range(0.02..0.3);
    for (u, v) in road_map.vertices().tuple_combinations().collect_vec() {
        if rng.gen_bool(edge_probability) {
            let highway = Highway::new(
                rng.gen_range(0.0..200.0),
                rng.gen_range(0..4) as f64,
                rng.gen_range(0..60) as f64,
            );
            road_map.insert_edge(u, v, highway).unwrap();
        }
    }
    road_map
}

/// All pairs shortest path weights by Floyd-Warshall.
fn floyd_warshall(road_map: &RoadMap, metric: Metric) -> Vec<Vec<f64>> {
    let n = road_map.number_of_vertices() as usize;
    let mut weights = vec![vec![f64::INFINITY; n]; n];
    for vertex in 0..n {
        weights[vertex][vertex] = 0.0;
    }
    for edge in road_map.edges() {
        let (u, v) = road_map.endpoints(edge).unwrap();
        let weight = metric.weight_of(road_map.highway(edge).unwrap());
        weights[u as usize][v as usize] = weight;
        weights[v as usize][u as usize] = weight;
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let alternative = weights[i][k] + weights[k][j];
                if alternative < weights[i][j] {
                    weights[i][j] = alternative;
                }
            }
        }
    }
    weights
}

/// Checks that every tree edge is a highway and that the weights add up.
fn assert_consistent_predecessors(road_map: &RoadMap, tree: &ShortestPathTree, metric: Metric) {
    for vertex in road_map.vertices() {
        match tree.predecessor(vertex) {
            Some(predecessor) => {
                let edge = road_map.edge_between(predecessor, vertex).unwrap();
                let weight = metric.weight_of(road_map.highway(edge).unwrap());
                assert_eq!(tree.weight(vertex), tree.weight(predecessor) + weight);
            }
            None => assert!(vertex == tree.source() || !tree.is_reachable(vertex)),
        }
    }
}

#[test]
fn small_road_map_by_distance() {
    let (road_map, [a, b, c, d]) = get_small_road_map();
    let tree = Dijkstra::new(&road_map)
        .shortest_paths_by(a, Metric::Distance)
        .unwrap();

    assert_eq!(tree.weight(a), 0.0);
    assert_eq!(tree.weight(b), 3.0);
    assert_eq!(tree.weight(c), 7.0);
    assert_eq!(tree.predecessor(a), None);
    assert_eq!(tree.predecessor(b), Some(a));
    assert_eq!(tree.predecessor(c), Some(b));

    let path = tree.path(c).unwrap();
    assert_eq!(path.vertices, vec![a, b, c]);
    assert_eq!(path.weight, 7.0);

    assert_eq!(tree.weight(d), f64::INFINITY);
    assert_eq!(tree.predecessor(d), None);
    assert_eq!(tree.path(d), None);
}

#[test]
fn small_road_map_by_time() {
    let (road_map, [a, b, c, _]) = get_small_road_map();
    let tree = Dijkstra::new(&road_map)
        .shortest_paths_by(a, Metric::Time)
        .unwrap();

    assert_eq!(tree.predecessor(b), Some(a));
    assert_eq!(tree.predecessor(c), Some(b));
    assert!((tree.weight(b) - 0.1).abs() < EPSILON);
    assert!((tree.weight(c) - 14.0 / 60.0).abs() < EPSILON);
}

#[test]
fn injected_weight_function() {
    let (road_map, [a, b, c, _]) = get_small_road_map();
    // every highway counts as one hop
    let tree = single_source(&road_map, a, |_| 1.0).unwrap();

    assert_eq!(tree.weight(b), 1.0);
    assert_eq!(tree.weight(c), 1.0);
    assert_eq!(tree.predecessor(c), Some(a));
}

#[test]
fn switching_metric_changes_the_tree() {
    // the direct highway is longer but much faster
    let mut road_map = RoadMap::new();
    let a = road_map.insert_vertex(City::new("A", 0, 0)).unwrap();
    let b = road_map.insert_vertex(City::new("B", 5, 5)).unwrap();
    let c = road_map.insert_vertex(City::new("C", 10, 0)).unwrap();
    road_map
        .insert_edge(a, b, Highway::new(10.0, 1.0, 0.0))
        .unwrap();
    road_map
        .insert_edge(b, c, Highway::new(10.0, 1.0, 0.0))
        .unwrap();
    road_map
        .insert_edge(a, c, Highway::new(25.0, 0.0, 30.0))
        .unwrap();

    let dijkstra = Dijkstra::new(&road_map);
    let by_distance = dijkstra.shortest_paths_by(a, Metric::Distance).unwrap();
    let by_time = dijkstra.shortest_paths_by(a, Metric::Time).unwrap();

    assert_eq!(by_distance.predecessor(c), Some(b));
    assert_eq!(by_distance.weight(c), 20.0);
    assert_eq!(by_time.predecessor(c), Some(a));
    assert_eq!(by_time.weight(c), 0.5);

    assert_consistent_predecessors(&road_map, &by_distance, Metric::Distance);
    assert_consistent_predecessors(&road_map, &by_time, Metric::Time);
}

#[test]
fn repeated_searches_are_identical() {
    let mut rng = StdRng::seed_from_u64(3);
    let road_map = get_random_road_map(&mut rng);
    let dijkstra = Dijkstra::new(&road_map);

    for source in road_map.vertices() {
        let first = dijkstra.shortest_paths_by(source, Metric::Time).unwrap();
        let second = dijkstra.shortest_paths_by(source, Metric::Time).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn random_road_maps_match_floyd_warshall() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..25 {
        let road_map = get_random_road_map(&mut rng);
        let dijkstra = Dijkstra::new(&road_map);

        for metric in [Metric::Distance, Metric::Time] {
            let expected = floyd_warshall(&road_map, metric);

            for source in road_map.vertices() {
                let tree = dijkstra.shortest_paths_by(source, metric).unwrap();
                assert_eq!(tree.source(), source);

                for target in road_map.vertices() {
                    let expected = expected[source as usize][target as usize];
                    let actual = tree.weight(target);
                    if expected.is_infinite() {
                        assert_eq!(actual, f64::INFINITY);
                        assert_eq!(tree.predecessor(target), None);
                        assert_eq!(tree.path(target), None);
                    } else {
                        assert!(
                            (expected - actual).abs() < EPSILON,
                            "{} -> {}: expected {}, got {}",
                            source,
                            target,
                            expected,
                            actual
                        );
                        let path = tree.path(target).unwrap();
                        assert_eq!(path.vertices.first(), Some(&source));
                        assert_eq!(path.vertices.last(), Some(&target));
                    }
                }

                assert_consistent_predecessors(&road_map, &tree, metric);
            }
        }
    }
}

#[test]
fn tree_edges_connect_reachable_vertices() {
    let (road_map, [a, b, c, d]) = get_small_road_map();
    let tree = single_source(&road_map, a, Highway::distance).unwrap();

    let edges = tree.tree_edges().sorted().collect_vec();
    assert_eq!(edges, vec![(b, a), (c, b)]);

    let reachable = tree.reachable_vertices().collect_vec();
    assert_eq!(reachable, vec![a, b, c]);
    assert!(!tree.is_reachable(d));
}

#[test]
fn isolated_source() {
    let (road_map, [a, b, c, d]) = get_small_road_map();
    let tree = single_source(&road_map, d, Highway::travel_time).unwrap();

    assert_eq!(tree.weight(d), 0.0);
    for vertex in [a, b, c] {
        assert_eq!(tree.weight(vertex), f64::INFINITY);
        assert_eq!(tree.predecessor(vertex), None);
    }
    assert_eq!(tree.tree_edges().count(), 0);
}

#[test]
fn several_unreachable_components() {
    // {A, B, C} around the source, {E, F, G} and {H, I} on their own
    let mut road_map = RoadMap::new();
    let vertices = ["A", "B", "C", "E", "F", "G", "H", "I"]
        .iter()
        .enumerate()
        .map(|(x, name)| {
            road_map
                .insert_vertex(City::new(*name, x as i32, 0))
                .unwrap()
        })
        .collect_vec();
    let [a, b, c, e, f, g, h, i] = vertices[..] else {
        unreachable!()
    };
    let highways = [
        (a, b, 1.0),
        (b, c, 2.0),
        (e, f, 1.0),
        (f, g, 1.0),
        (e, g, 5.0),
        (h, i, 3.0),
    ];
    for (u, v, distance) in highways {
        road_map
            .insert_edge(u, v, Highway::new(distance, 0.0, distance))
            .unwrap();
    }

    let tree = single_source(&road_map, a, Highway::distance).unwrap();

    assert_eq!(tree.weight(c), 3.0);
    assert_eq!(tree.path(c).unwrap().vertices, vec![a, b, c]);
    for vertex in [e, f, g, h, i] {
        assert_eq!(tree.weight(vertex), f64::INFINITY);
        assert_eq!(tree.predecessor(vertex), None);
        assert_eq!(tree.path(vertex), None);
    }
    assert_eq!(tree.reachable_vertices().collect_vec(), vec![a, b, c]);
    assert_eq!(tree.tree_edges().count(), 2);

    // from inside the other component the picture flips
    let tree = single_source(&road_map, g, Highway::distance).unwrap();
    assert_eq!(tree.weight(e), 2.0);
    assert_eq!(tree.predecessor(e), Some(f));
    assert_eq!(tree.reachable_vertices().collect_vec(), vec![e, f, g]);
}

#[test]
fn unreachable_weights_serialize_as_null() {
    let (road_map, [a, b, c, d]) = get_small_road_map();
    let tree = single_source(&road_map, a, Highway::distance).unwrap();

    assert_eq!(tree.weights(), &[0.0, 3.0, 7.0, f64::INFINITY]);
    assert_eq!(tree.predecessors(), &[None, Some(a), Some(b), None]);
    assert_eq!(
        serde_json::to_string(&tree).unwrap(),
        format!(
            r#"{{"source":{},"weights":[0.0,3.0,7.0,null],"predecessors":[null,{},{},null]}}"#,
            a, a, b
        )
    );

    let json = serde_json::to_value(tree.path(c).unwrap()).unwrap();
    assert_eq!(json["vertices"], serde_json::json!([a, b, c]));
    assert_eq!(json["weight"], serde_json::json!(7.0));
    assert!(tree.path(d).is_none());
}

#[test]
fn parallel_searches_share_the_road_map() {
    let mut rng = StdRng::seed_from_u64(11);
    let road_map = get_random_road_map(&mut rng);
    let dijkstra = Dijkstra::new(&road_map);
    let sources = road_map.vertices().collect_vec();

    let sequential: Vec<ShortestPathTree> = sources
        .iter()
        .map(|&source| dijkstra.shortest_paths_by(source, Metric::Distance).unwrap())
        .collect();
    let parallel: Vec<ShortestPathTree> = sources
        .par_iter()
        .map(|&source| dijkstra.shortest_paths_by(source, Metric::Distance).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
}
