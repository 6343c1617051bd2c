//! Undirected weighted graph and its text file format.
//!
//! # File format
//!
//! ```text
//! A,B,C
//! A B 1
//! B C 2.5
//! ```
//!
//! The first line lists every node label, comma separated, in matrix order.
//! Each following line is one undirected edge `u v weight`, whitespace
//! separated.  Blank lines are skipped; anything else that does not parse is
//! fatal and reported with its 1-based line number.

use std::io::BufRead;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::{ApspError, ApspResult};

/// Ordered node labels plus undirected edges `(i, j, weight)` by index.
#[derive(Clone, Debug, Default)]
pub struct WeightedGraph {
    labels: Vec<String>,
    index:  FxHashMap<String, usize>,
    edges:  Vec<(usize, usize, f64)>,
}

impl WeightedGraph {
    /// Create a graph with the given nodes and no edges.
    pub fn new<I, S>(labels: I) -> ApspResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut g = Self::default();
        for label in labels {
            let label = label.into();
            if g.index.contains_key(&label) {
                return Err(ApspError::DuplicateNode(label));
            }
            g.index.insert(label.clone(), g.labels.len());
            g.labels.push(label);
        }
        Ok(g)
    }

    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) -> ApspResult<()> {
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(ApspError::InvalidWeight { u: u.to_owned(), v: v.to_owned(), weight });
        }
        let i = self.index_of(u)?;
        let j = self.index_of(v)?;
        self.edges.push((i, j, weight));
        Ok(())
    }

    pub fn index_of(&self, label: &str) -> ApspResult<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| ApspError::UnknownNode(label.to_owned()))
    }

    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn node_count(&self) -> usize { self.labels.len() }
    pub fn edges(&self) -> &[(usize, usize, f64)] { &self.edges }
}

/// Parse the text format from any buffered reader.
pub fn parse_graph<R: BufRead>(reader: R) -> ApspResult<WeightedGraph> {
    let mut lines = reader.lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => line?,
        None => return Err(parse_err(1, "empty file: expected a node list")),
    };
    let labels: Vec<&str> = header.split(',').map(str::trim).collect();
    if let Some(pos) = labels.iter().position(|l| l.is_empty()) {
        return Err(parse_err(1, format!("empty node label at position {}", pos + 1)));
    }
    let mut graph = WeightedGraph::new(labels.iter().copied())
        .map_err(|e| parse_err(1, e.to_string()))?;

    for (i, line) in lines {
        let line_no = i + 1;
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [u, v, w] => {
                let weight: f64 = w
                    .parse()
                    .map_err(|_| parse_err(line_no, format!("weight {w:?} is not a number")))?;
                graph
                    .add_edge(u, v, weight)
                    .map_err(|e| parse_err(line_no, e.to_string()))?;
            }
            _ => {
                return Err(parse_err(
                    line_no,
                    format!("expected `node1 node2 weight`, got {} field(s)", fields.len()),
                ));
            }
        }
    }

    Ok(graph)
}

/// Load a graph file.
pub fn load_graph(path: &Path) -> ApspResult<WeightedGraph> {
    let file = std::fs::File::open(path)?;
    parse_graph(std::io::BufReader::new(file))
}

fn parse_err(line: usize, reason: impl Into<String>) -> ApspError {
    ApspError::Parse { line, reason: reason.into() }
}
