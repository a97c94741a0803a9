//! Integration tests for the vector visibility graph library.

use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::BTreeMap;
use std::io::Write;
use vector_visibility_graph::{
    data::{segment_beats, BeatClass, SeriesLoader},
    graph::{gml, AdjacencyList, Direction, Edge, GraphMetrics, VisibilityGraphBuilder},
    Error, SampleMatrix,
};

/// Random positive series, so no anchor has a zero norm
fn random_series(seed: u64, dims: usize, len: usize) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..dims)
        .map(|_| (0..len).map(|_| rng.gen_range(0.1..10.0)).collect())
        .collect()
}

fn as_map(graph: &AdjacencyList) -> BTreeMap<usize, Vec<usize>> {
    graph.clone().into_map()
}

fn map(entries: &[(usize, &[usize])]) -> BTreeMap<usize, Vec<usize>> {
    entries.iter().map(|(k, v)| (*k, v.to_vec())).collect()
}

#[test]
fn test_spike_has_highest_degree() {
    let spike = vec![1.0, 1.0, 1.0, 1.0, 10.0, 1.0, 1.0, 1.0, 1.0, 1.0];
    let graph = VisibilityGraphBuilder::undirected()
        .build_from_series(&[&spike, &spike])
        .unwrap();

    for t in 0..9 {
        assert!(graph.has_edge(t, t + 1));
        assert!(graph.has_edge(t + 1, t));
    }

    let metrics = GraphMetrics::new(&graph);
    let degrees = metrics.degrees();
    assert_eq!(degrees[4], 9);
    assert!(degrees[4] > degrees[3] && degrees[4] > degrees[5]);
    assert_eq!(metrics.detect_hubs(1), vec![(4, 9)]);
}

#[test]
fn test_two_series_examples() {
    let series = vec![
        vec![8.0, 2.0, 13.0, 11.0, 7.0],
        vec![5.0, 1.5, 13.0, 9.5, 6.0],
    ];

    let directed = VisibilityGraphBuilder::directed()
        .build_from_series(&series)
        .unwrap();
    assert_eq!(
        as_map(&directed),
        map(&[(0, &[1, 2]), (1, &[2]), (2, &[3]), (3, &[4])])
    );
    // Node 2 sees back to node 0
    assert!(directed.has_edge(0, 2));

    let undirected = VisibilityGraphBuilder::undirected()
        .build_from_series(&series)
        .unwrap();
    assert_eq!(
        as_map(&undirected),
        map(&[
            (0, &[1, 2]),
            (1, &[0, 2]),
            (2, &[0, 1, 3]),
            (3, &[2, 4]),
            (4, &[3]),
        ])
    );
}

#[test]
fn test_single_series_graph() {
    let graph = VisibilityGraphBuilder::directed()
        .build_from_series(&[vec![5.5, 4.3, 1.0, 7.8, 2.7, 1.2, 3.6, 2.2, 7.1]])
        .unwrap();

    assert_eq!(
        as_map(&graph),
        map(&[
            (0, &[1, 3]),
            (1, &[2, 3]),
            (2, &[3]),
            (3, &[4, 5, 6, 7, 8]),
            (4, &[5, 6, 8]),
            (5, &[6]),
            (6, &[7, 8]),
            (7, &[8]),
        ])
    );
}

#[test]
fn test_long_range_visibility() {
    let graph = VisibilityGraphBuilder::directed()
        .build_from_series(&[vec![3.0, 1.0, 2.0, 0.5, 4.0], vec![1.0, 2.0, 2.0, 1.0, 3.0]])
        .unwrap();

    assert_eq!(
        as_map(&graph),
        map(&[(0, &[1, 2, 4]), (1, &[2, 4]), (2, &[3, 4]), (3, &[4])])
    );
}

#[test]
fn test_minimum_size() {
    let directed = VisibilityGraphBuilder::directed()
        .build_from_series(&[vec![1.0, 2.0]])
        .unwrap();
    assert_eq!(as_map(&directed), map(&[(0, &[1])]));

    let undirected = VisibilityGraphBuilder::undirected()
        .build_from_series(&[vec![1.0, 2.0]])
        .unwrap();
    assert_eq!(as_map(&undirected), map(&[(0, &[1]), (1, &[0])]));
}

#[test]
fn test_invalid_inputs() {
    let builder = VisibilityGraphBuilder::undirected();
    let empty: Vec<Vec<f64>> = Vec::new();

    assert!(matches!(builder.build_from_series(&empty), Err(Error::InvalidInput(_))));
    assert!(matches!(
        builder.build_from_series(&[vec![1.0]]),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        builder.build_from_series(&[vec![1.0, 2.0, 3.0], vec![1.0, 2.0]]),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        builder.build_from_series(&[vec![1.0, f64::INFINITY, 3.0]]),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_zero_anchor_is_reported() {
    let result = VisibilityGraphBuilder::directed()
        .build_from_series(&[vec![0.0, 1.0, 2.0, 1.0], vec![0.0, 3.0, 1.0, 2.0]]);

    match result {
        Err(Error::DegenerateAnchor { index, norm }) => {
            assert_eq!(index, 0);
            assert_eq!(norm, 0.0);
        }
        other => panic!("expected a degenerate anchor, got {:?}", other),
    }

    // The same zero sample as the last node never acts as an anchor
    let graph = VisibilityGraphBuilder::directed()
        .build_from_series(&[vec![1.0, 2.0, 1.0, 0.0], vec![3.0, 1.0, 2.0, 0.0]])
        .unwrap();
    assert!(graph.has_edge(2, 3));
}

#[test]
fn test_structural_properties_on_random_input() {
    for seed in 0..5 {
        let series = random_series(seed, 3, 40);
        let samples = SampleMatrix::from_series(&series).unwrap();

        let directed = VisibilityGraphBuilder::directed().build(&samples).unwrap();
        let undirected = VisibilityGraphBuilder::undirected().build(&samples).unwrap();

        for t in 0..samples.len() - 1 {
            assert!(directed.has_edge(t, t + 1));
            assert!(undirected.has_edge(t, t + 1) && undirected.has_edge(t + 1, t));
        }

        // Forward edges only, ascending per anchor
        for (node, neighbors) in directed.iter() {
            assert!(neighbors.iter().all(|&n| n > node));
            assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
        }

        // Undirected = directed plus every reversed edge
        assert_eq!(undirected.edge_count(), 2 * directed.edge_count());
        for edge in undirected.edges() {
            assert!(undirected.has_edge(edge.to, edge.from));
            let forward = if edge.is_forward() {
                edge
            } else {
                Edge::new(edge.to, edge.from)
            };
            assert!(directed.has_edge(forward.from, forward.to));
        }
    }
}

#[test]
fn test_appending_samples_keeps_existing_pairs() {
    let series = random_series(7, 2, 30);
    let prefix: Vec<Vec<f64>> = series.iter().map(|s| s[..20].to_vec()).collect();

    let short = VisibilityGraphBuilder::directed()
        .build_from_series(&prefix)
        .unwrap();
    let long = VisibilityGraphBuilder::directed()
        .build_from_series(&series)
        .unwrap();

    for ta in 0..20 {
        let kept: Vec<usize> = long
            .neighbors(ta)
            .iter()
            .copied()
            .filter(|&tb| tb < 20)
            .collect();
        assert_eq!(kept, short.neighbors(ta));
    }
}

#[test]
fn test_deterministic_and_parallel_identical() {
    let series = random_series(11, 4, 60);

    let first = VisibilityGraphBuilder::undirected()
        .build_from_series(&series)
        .unwrap();
    let second = VisibilityGraphBuilder::undirected()
        .build_from_series(&series)
        .unwrap();
    let parallel = VisibilityGraphBuilder::undirected()
        .with_parallel(true)
        .build_from_series(&series)
        .unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(first, parallel);
}

#[test]
fn test_json_round_trip_of_adjacency() {
    let graph = VisibilityGraphBuilder::undirected()
        .build_from_series(&random_series(3, 2, 12))
        .unwrap();

    let json = serde_json::to_string(&graph).unwrap();
    let parsed: AdjacencyList = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, graph);
}

#[test]
fn test_csv_to_gml_pipeline() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "time,a,b").unwrap();
    for (t, (a, b)) in [8.0, 2.0, 13.0, 11.0, 7.0]
        .iter()
        .zip([5.0, 1.5, 13.0, 9.5, 6.0].iter())
        .enumerate()
    {
        writeln!(file, "{},{},{}", t, a, b).unwrap();
    }
    file.flush().unwrap();

    let columns = vec!["a".to_string(), "b".to_string()];
    let series = SeriesLoader::load(file.path(), Some(&columns)).unwrap();
    let samples = series.to_samples().unwrap();
    let graph = VisibilityGraphBuilder::directed().build(&samples).unwrap();

    assert_eq!(graph.edge_count(), 5);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.gml");
    gml::write_gml(&path, &graph, Direction::Directed).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("edge [").count(), 5);
    assert_eq!(text.matches("node [").count(), 5);
}

#[test]
fn test_beats_to_dataset() {
    let len = 2_000;
    let lead_ii: Vec<f64> = (0..len).map(|i| 1.0 + (i as f64 * 0.3).sin().abs()).collect();
    let lead_v1: Vec<f64> = (0..len).map(|i| 0.5 + (i as f64 * 0.7).cos().abs()).collect();
    let annotations = vec![
        (100, 'N'),
        (400, 'V'),
        (700, 'A'),
        (1_000, 'N'),
        (1_300, 'Q'),
        (1_990, 'N'),
    ];

    let beats = segment_beats(
        &[lead_ii.as_slice(), lead_v1.as_slice()],
        &annotations,
        20,
        30,
    )
    .unwrap();
    assert_eq!(beats.len(), 4);

    let dataset = beats
        .to_dataset(&VisibilityGraphBuilder::undirected())
        .unwrap();

    assert_eq!(dataset.len(), 4);
    let labels: Vec<usize> = dataset.properties().iter().map(|p| p.label).collect();
    assert_eq!(
        labels,
        vec![
            BeatClass::Normal.label(),
            BeatClass::Normal.label(),
            BeatClass::Supraventricular.label(),
            BeatClass::Ventricular.label(),
        ]
    );
    assert!(dataset.properties().iter().all(|p| p.num_nodes == 50));

    // Each graph holds at least its 49 time-neighbour pairs in both directions
    for graph_id in 0..dataset.len() {
        assert!(dataset.graph_edges(graph_id).count() >= 98);
    }

    let metrics_input = beats.get(BeatClass::Ventricular)[0].to_samples().unwrap();
    let graph = VisibilityGraphBuilder::undirected()
        .build(&metrics_input)
        .unwrap();
    let metrics = GraphMetrics::new(&graph);
    assert_eq!(metrics.connected_components(), 1);
    assert_relative_eq!(
        metrics.average_degree(),
        graph.edge_count() as f64 / 50.0,
        epsilon = 1e-12
    );
}
