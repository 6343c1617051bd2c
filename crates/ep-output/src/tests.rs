//! Writer tests for ep-output.
//!
//! Every test writes into a fresh temporary directory and reads the files
//! back as text.

#[cfg(test)]
mod helpers {
    use std::path::Path;

    use tempfile::TempDir;

    use ep_apsp::{DistanceMatrix, parse_graph};
    use ep_core::ResourceId;
    use ep_network::{CategoryTable, DijkstraRouter, RoadNetwork, RoadSegment, TravelTimeBuilder, TravelTimes};
    use ep_risk::Scenario;

    pub const SCENARIO_JSON: &str = r#"{
        "cells": [
            { "cell_number": 1, "x_coord": 0, "y_coord": 0, "type": "road" },
            { "cell_number": 2, "x_coord": 1, "y_coord": 0, "type": "shelter" },
            { "cell_number": 3, "x_coord": 4, "y_coord": 0, "type": "source" }
        ],
        "disaster": {
            "x_coord": 0, "y_coord": 0, "velocity_in_kmh": 36,
            "direction": "+x", "radius_in_meters": 100
        },
        "setting": {
            "unit_length_in_meters": 10, "time_step_length_in_secs": 1,
            "n_time_steps": 5, "geo_center": { "lat": 41.0, "lon": 29.0 }
        }
    }"#;

    pub fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    pub fn read(dir: &Path, name: &str) -> String {
        std::fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("{name}: {e}"))
    }

    pub fn scenario() -> Scenario {
        Scenario::from_reader(SCENARIO_JSON.as_bytes()).unwrap()
    }

    /// 1 ⇄ 2 → 3, arterial (2 steps each); 3 → 1 gets a penalty arc.
    pub fn travel_times() -> TravelTimes {
        let segs = [
            RoadSegment::new(1, 2, "arterial"),
            RoadSegment::new(2, 1, "arterial"),
            RoadSegment::new(2, 3, "arterial"),
        ];
        let net = RoadNetwork::from_segments(&segs, &CategoryTable::standard(), 1.0).unwrap();
        TravelTimeBuilder::new(&net, DijkstraRouter)
            .compute(&[1, 2, 3], &[ResourceId(7)])
            .unwrap()
    }

    /// A –1– B –2.5– C, D isolated.
    pub fn distances() -> DistanceMatrix {
        let g = parse_graph("A,B,C,D\nA B 1\nB C 2.5\n".as_bytes()).unwrap();
        DistanceMatrix::compute(&g)
    }
}

// ── Array text backend ────────────────────────────────────────────────────────

#[cfg(test)]
mod array_tests {
    use super::helpers::{distances, read, scenario, tmp, travel_times};
    use crate::{ArrayTextWriter, ArtifactWriter, format_distance};

    #[test]
    fn distance_formatting() {
        assert_eq!(format_distance(0.0), "0");
        assert_eq!(format_distance(3.0), "3");
        assert_eq!(format_distance(3.5), "3.5");
        assert_eq!(format_distance(f64::INFINITY), "inf");
    }

    #[test]
    fn risk_matrix_layout() {
        let dir = tmp();
        let mut w = ArrayTextWriter::new(dir.path()).unwrap();
        w.write_risk(&scenario().risk_matrix()).unwrap();
        w.finish().unwrap();

        let text = read(dir.path(), "risk_matrix.txt");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, [
            "[[1.0000, 0.9900, 0.9600, 0.9100, 0.8400],",
            "[0.0000, 0.0000, 0.0000, 0.0000, 0.0000],",
            "[0.8400, 0.9100, 0.9600, 0.9900, 1.0000]]",
        ]);
    }

    #[test]
    fn tau_and_tau_max_arrays() {
        let dir = tmp();
        let mut w = ArrayTextWriter::new(dir.path()).unwrap();
        w.write_travel_times(&travel_times()).unwrap();

        assert_eq!(
            read(dir.path(), "tau.txt"),
            "[[[0, 2, 4], [2, 0, 2], [1000, 1002, 0]]]"
        );
        assert_eq!(read(dir.path(), "tau_max.txt"), "[[4, 2, 1002]]");
    }

    #[test]
    fn distances_and_row_max() {
        let dir = tmp();
        let mut w = ArrayTextWriter::new(dir.path()).unwrap();
        w.write_distances(&distances()).unwrap();

        assert_eq!(
            read(dir.path(), "distances.txt"),
            "[[0, 1, 3.5, inf],\n[1, 0, 2.5, inf],\n[3.5, 2.5, 0, inf],\n[inf, inf, inf, 0]]"
        );
        assert_eq!(read(dir.path(), "row_max.txt"), "3.5\n2.5\n3.5\nnone\n");
    }

    #[test]
    fn only_written_artifacts_exist() {
        let dir = tmp();
        let mut w = ArrayTextWriter::new(dir.path()).unwrap();
        w.write_distances(&distances()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        assert!(!dir.path().join("risk_matrix.txt").exists());
        assert!(!dir.path().join("tau.txt").exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let mut w = ArrayTextWriter::new(&nested).unwrap();
        w.write_travel_times(&travel_times()).unwrap();
        assert!(nested.join("tau_max.txt").exists());
    }
}

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::helpers::{distances, read, scenario, tmp, travel_times};
    use crate::{ArtifactWriter, CsvWriter, projection_rows, tau_max_rows, tau_rows};

    #[test]
    fn tau_rows_follow_matrix_order() {
        let tt = travel_times();
        let rows = tau_rows(&tt);
        assert_eq!(rows.len(), 9);
        assert_eq!((rows[2].from, rows[2].to, rows[2].steps), (1, 3, 4));
        assert_eq!((rows[6].from, rows[6].to, rows[6].steps), (3, 1, 1000));
        assert!(rows.iter().all(|r| r.resource == 7));

        let maxes: Vec<i64> = tau_max_rows(&tt).iter().map(|r| r.max_steps).collect();
        assert_eq!(maxes, [4, 2, 1002]);
    }

    #[test]
    fn tau_csv_files() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_travel_times(&travel_times()).unwrap();
        w.finish().unwrap();

        let tau = read(dir.path(), "tau.csv");
        let lines: Vec<&str> = tau.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "resource,from,to,steps");
        assert_eq!(lines[2], "7,1,2,2");
        assert_eq!(lines[9], "7,3,3,0");

        let tau_max = read(dir.path(), "tau_max.csv");
        assert_eq!(tau_max, "resource,node,max_steps\n7,1,4\n7,2,2\n7,3,1002\n");
    }

    #[test]
    fn risk_csv_has_step_columns() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_risk(&scenario().risk_matrix()).unwrap();
        w.finish().unwrap();

        let text = read(dir.path(), "risk.csv");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "cell_index,t0,t1,t2,t3,t4");
        assert_eq!(lines[1], "0,1.0000,0.9900,0.9600,0.9100,0.8400");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn distances_csv_uses_inf() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_distances(&distances()).unwrap();
        w.finish().unwrap();

        let text = read(dir.path(), "distances.csv");
        assert!(text.starts_with("from,to,distance\n"));
        assert!(text.contains("A,C,3.5\n"));
        assert!(text.contains("D,A,inf\n"));
        assert_eq!(text.lines().count(), 17);
    }

    #[test]
    fn row_max_csv_marks_isolated_node() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_distances(&distances()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            read(dir.path(), "row_max.csv"),
            "node,max_distance\nA,3.5\nB,2.5\nC,3.5\nD,none\n"
        );
    }

    #[test]
    fn projection_includes_hazard_origin() {
        let sc = scenario();
        let center = sc.settings.geo_center.unwrap();
        let rows = projection_rows(&sc.cells, &sc.hazard, &sc.settings, center);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2].x_m, 40.0);
        assert_eq!(rows[3].label, "hazard");

        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_projection(&rows).unwrap();
        w.finish().unwrap();

        let text = read(dir.path(), "projection.csv");
        assert_eq!(text.lines().count(), 5);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "label,kind,x_m,y_m,lat,lon");
        assert!(lines[2].starts_with("2,shelter,10.000,0.000,41.000000,"));
        assert_eq!(lines[4], "hazard,hazard,0.000,0.000,41.000000,29.000000");
    }
}
