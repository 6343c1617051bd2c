//! Nested-array text backend.
//!
//! Every matrix is rendered as a literal bracketed array, one inner bracket
//! per row, rows separated by `,\n`:
//!
//! ```text
//! [[1.0000, 0.7500, 0.0000],
//! [0.0000, 0.0000, 0.0000]]
//! ```
//!
//! Risk values use four decimals.  Distances print integral values without
//! decimals, others in their shortest round-trip form, and `inf` when
//! unreachable.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use ep_apsp::{DistanceMatrix, RowMax};
use ep_network::TravelTimes;
use ep_risk::RiskMatrix;

use crate::OutputResult;
use crate::writer::ArtifactWriter;

/// Render one distance value.
pub fn format_distance(d: f64) -> String {
    if d.is_infinite() {
        "inf".to_owned()
    } else if d.fract() == 0.0 && d.abs() < 1e15 {
        format!("{}", d as i64)
    } else {
        format!("{d}")
    }
}

/// `[a, b, c]`
fn bracket<I: IntoIterator<Item = String>>(items: I) -> String {
    let parts: Vec<String> = items.into_iter().collect();
    format!("[{}]", parts.join(", "))
}

/// `[row,\nrow]` from already-rendered rows.
fn write_rows<W: Write>(w: &mut W, rows: &[String]) -> std::io::Result<()> {
    w.write_all(b"[")?;
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            w.write_all(b",\n")?;
        }
        w.write_all(row.as_bytes())?;
    }
    w.write_all(b"]")
}

/// Writes nested-array text artifacts into one directory.
pub struct ArrayTextWriter {
    dir: PathBuf,
}

impl ArrayTextWriter {
    /// Create `dir` if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf() })
    }

    fn create(&self, name: &str) -> OutputResult<BufWriter<File>> {
        let path = self.dir.join(name);
        debug!(path = %path.display(), "writing artifact");
        Ok(BufWriter::new(File::create(path)?))
    }
}

impl ArtifactWriter for ArrayTextWriter {
    fn write_risk(&mut self, risk: &RiskMatrix) -> OutputResult<()> {
        let rows: Vec<String> = risk
            .rows()
            .map(|r| bracket(r.iter().map(|v| format!("{v:.4}"))))
            .collect();
        let mut w = self.create("risk_matrix.txt")?;
        write_rows(&mut w, &rows)?;
        w.flush()?;
        Ok(())
    }

    fn write_travel_times(&mut self, tt: &TravelTimes) -> OutputResult<()> {
        let n = tt.n_nodes();

        let tau: Vec<String> = (0..tt.n_resources())
            .map(|r| {
                let inner: Vec<String> = (0..n)
                    .map(|i| bracket(tt.tau_row(r, i).iter().map(i64::to_string)))
                    .collect();
                format!("[{}]", inner.join(", "))
            })
            .collect();
        let mut w = self.create("tau.txt")?;
        write_rows(&mut w, &tau)?;
        w.flush()?;

        let tau_max: Vec<String> = (0..tt.n_resources())
            .map(|r| bracket(tt.tau_max_row(r).iter().map(i64::to_string)))
            .collect();
        let mut w = self.create("tau_max.txt")?;
        write_rows(&mut w, &tau_max)?;
        w.flush()?;
        Ok(())
    }

    fn write_distances(&mut self, d: &DistanceMatrix) -> OutputResult<()> {
        let rows: Vec<String> = d
            .rows()
            .map(|r| bracket(r.iter().map(|&v| format_distance(v))))
            .collect();
        let mut w = self.create("distances.txt")?;
        write_rows(&mut w, &rows)?;
        w.flush()?;

        let mut w = self.create("row_max.txt")?;
        for m in d.row_maxima() {
            match m {
                RowMax::Finite(v)          => writeln!(w, "{}", format_distance(v))?,
                RowMax::NoFiniteNeighbors  => writeln!(w, "none")?,
            }
        }
        w.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        // Each artifact is flushed and closed as it is written.
        Ok(())
    }
}
