//! Unit tests for ep-apsp.

#[cfg(test)]
mod helpers {
    use crate::WeightedGraph;

    /// A - B (1), B - C (2)
    pub fn abc() -> WeightedGraph {
        let mut g = WeightedGraph::new(["A", "B", "C"]).unwrap();
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "C", 2.0).unwrap();
        g
    }
}

// ── Floyd–Warshall ────────────────────────────────────────────────────────────

#[cfg(test)]
mod floyd {
    use crate::{DistanceMatrix, RowMax, WeightedGraph};

    #[test]
    fn three_node_path() {
        let d = DistanceMatrix::compute(&super::helpers::abc());
        assert_eq!(d.between("A", "C"), Some(3.0));
        assert_eq!(d.between("C", "A"), Some(3.0));
        assert_eq!(d.between("A", "A"), Some(0.0));
        assert_eq!(d.row_max(0), RowMax::Finite(3.0));
        assert_eq!(d.row_max(1), RowMax::Finite(2.0));
        assert_eq!(d.between("A", "Z"), None);
    }

    #[test]
    fn shortcut_through_intermediate() {
        let mut g = WeightedGraph::new(["A", "B", "C"]).unwrap();
        g.add_edge("A", "C", 10.0).unwrap();
        g.add_edge("A", "B", 2.0).unwrap();
        g.add_edge("B", "C", 3.0).unwrap();
        let d = DistanceMatrix::compute(&g);
        assert_eq!(d.get(0, 2), 5.0);
    }

    #[test]
    fn duplicate_edge_keeps_lighter() {
        let mut g = WeightedGraph::new(["A", "B"]).unwrap();
        g.add_edge("A", "B", 4.0).unwrap();
        g.add_edge("B", "A", 1.5).unwrap();
        g.add_edge("A", "B", 9.0).unwrap();
        let d = DistanceMatrix::compute(&g);
        assert_eq!(d.get(0, 1), 1.5);
        assert_eq!(d.get(1, 0), 1.5);
    }

    #[test]
    fn isolated_node_has_no_finite_neighbors() {
        let mut g = WeightedGraph::new(["A", "B", "Z"]).unwrap();
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("Z", "Z", 3.0).unwrap();
        let d = DistanceMatrix::compute(&g);
        assert_eq!(d.get(2, 2), 0.0);
        assert_eq!(d.get(0, 2), f64::INFINITY);
        assert_eq!(d.row_max(2), RowMax::NoFiniteNeighbors);
        assert_eq!(d.row_maxima(), vec![RowMax::Finite(1.0), RowMax::Finite(1.0), RowMax::NoFiniteNeighbors]);
    }

    #[test]
    fn empty_graph() {
        let g = WeightedGraph::new(Vec::<String>::new()).unwrap();
        let d = DistanceMatrix::compute(&g);
        assert!(d.is_empty());
        assert_eq!(d.rows().count(), 0);
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use crate::{ApspError, WeightedGraph};

    #[test]
    fn duplicate_label_rejected() {
        assert!(matches!(
            WeightedGraph::new(["A", "B", "A"]),
            Err(ApspError::DuplicateNode(s)) if s == "A"
        ));
    }

    #[test]
    fn unknown_endpoint_and_bad_weight() {
        let mut g = WeightedGraph::new(["A", "B"]).unwrap();
        assert!(matches!(g.add_edge("A", "Q", 1.0), Err(ApspError::UnknownNode(s)) if s == "Q"));
        assert!(matches!(g.add_edge("A", "B", -1.0), Err(ApspError::InvalidWeight { .. })));
        assert!(matches!(g.add_edge("A", "B", f64::NAN), Err(ApspError::InvalidWeight { .. })));
        assert!(g.edges().is_empty());
    }
}

// ── File parsing ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod parse {
    use std::io::Cursor;

    use crate::{ApspError, DistanceMatrix, parse_graph};

    fn line_of(err: ApspError) -> usize {
        match err {
            ApspError::Parse { line, .. } => line,
            other => panic!("expected a parse error, got {other}"),
        }
    }

    #[test]
    fn parses_header_and_edges() {
        let text = "A, B ,C\nA B 1\n\nB C 2.5\n";
        let g = parse_graph(Cursor::new(text)).unwrap();
        assert_eq!(g.labels(), &["A", "B", "C"]);
        assert_eq!(g.edges(), &[(0, 1, 1.0), (1, 2, 2.5)]);
        let d = DistanceMatrix::compute(&g);
        assert_eq!(d.between("A", "C"), Some(3.5));
    }

    #[test]
    fn empty_file() {
        assert_eq!(line_of(parse_graph(Cursor::new("")).unwrap_err()), 1);
    }

    #[test]
    fn empty_label() {
        assert_eq!(line_of(parse_graph(Cursor::new("A,,B\n")).unwrap_err()), 1);
    }

    #[test]
    fn wrong_field_count() {
        let err = parse_graph(Cursor::new("A,B\nA B 1\nA B\n")).unwrap_err();
        assert_eq!(line_of(err), 3);
    }

    #[test]
    fn non_numeric_weight() {
        let err = parse_graph(Cursor::new("A,B\nA B far\n")).unwrap_err();
        assert_eq!(line_of(err), 2);
    }

    #[test]
    fn unknown_node_reported_with_line() {
        let err = parse_graph(Cursor::new("A,B\n\nA C 1\n")).unwrap_err();
        assert_eq!(line_of(err), 3);
    }
}

// ── Randomised properties ─────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{DistanceMatrix, WeightedGraph};

    fn random_graph(rng: &mut SmallRng, n: usize, edges: usize) -> WeightedGraph {
        let labels: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
        let mut g = WeightedGraph::new(labels.clone()).unwrap();
        for _ in 0..edges {
            let u = &labels[rng.gen_range(0..n)];
            let v = &labels[rng.gen_range(0..n)];
            g.add_edge(u, v, rng.gen_range(1..20) as f64).unwrap();
        }
        g
    }

    /// Bellman–Ford reference from a single source.
    fn reference(g: &WeightedGraph, src: usize) -> Vec<f64> {
        let mut d = vec![f64::INFINITY; g.node_count()];
        d[src] = 0.0;
        for _ in 0..g.node_count() {
            for &(i, j, w) in g.edges() {
                if d[i] + w < d[j] { d[j] = d[i] + w; }
                if d[j] + w < d[i] { d[i] = d[j] + w; }
            }
        }
        d
    }

    #[test]
    fn symmetric_triangle_and_matches_reference() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..25 {
            let n = rng.gen_range(1..10);
            let e = rng.gen_range(0..(2 * n));
            let g = random_graph(&mut rng, n, e);
            let d = DistanceMatrix::compute(&g);

            for i in 0..n {
                assert_eq!(d.row(i), reference(&g, i).as_slice());
                for j in 0..n {
                    assert_eq!(d.get(i, j), d.get(j, i));
                    for k in 0..n {
                        assert!(d.get(i, j) <= d.get(i, k) + d.get(k, j));
                    }
                }
            }
        }
    }
}
