//! CSV output backend.
//!
//! Long-format tables, one row per matrix entry, for spreadsheet and
//! dataframe consumers:
//!
//! - `risk.csv`: `cell_index,t0,t1,...`
//! - `tau.csv`: `resource,from,to,steps`
//! - `tau_max.csv`: `resource,node,max_steps`
//! - `distances.csv`: `from,to,distance`
//! - `row_max.csv`: `node,max_distance` (`none` when a node reaches no other)
//! - `projection.csv`: `label,kind,x_m,y_m,lat,lon`

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use ep_apsp::{DistanceMatrix, RowMax};
use ep_network::TravelTimes;
use ep_risk::RiskMatrix;

use crate::array::format_distance;
use crate::row::{ProjectionRow, tau_max_rows, tau_rows};
use crate::writer::ArtifactWriter;
use crate::OutputResult;

/// Writes artifacts as CSV files into one directory.
pub struct CsvWriter {
    dir:  PathBuf,
    open: Vec<Writer<File>>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf(), open: Vec::new(), finished: false })
    }

    fn create(&mut self, name: &str) -> OutputResult<&mut Writer<File>> {
        self.finished = false;
        self.open.push(Writer::from_path(self.dir.join(name))?);
        let last = self.open.len() - 1;
        Ok(&mut self.open[last])
    }

    /// Write the map projection of a scenario (see [`crate::projection_rows`]).
    pub fn write_projection(&mut self, rows: &[ProjectionRow]) -> OutputResult<()> {
        let w = self.create("projection.csv")?;
        w.write_record(["label", "kind", "x_m", "y_m", "lat", "lon"])?;
        for r in rows {
            w.write_record(&[
                r.label.clone(),
                r.kind.clone(),
                format!("{:.3}", r.x_m),
                format!("{:.3}", r.y_m),
                format!("{:.6}", r.geo.lat),
                format!("{:.6}", r.geo.lon),
            ])?;
        }
        Ok(())
    }
}

impl ArtifactWriter for CsvWriter {
    fn write_risk(&mut self, risk: &RiskMatrix) -> OutputResult<()> {
        let n_steps = risk.n_steps();
        let w = self.create("risk.csv")?;

        let mut header = vec!["cell_index".to_owned()];
        header.extend((0..n_steps).map(|t| format!("t{t}")));
        w.write_record(&header)?;

        for (i, row) in risk.rows().enumerate() {
            let mut rec = vec![i.to_string()];
            rec.extend(row.iter().map(|v| format!("{v:.4}")));
            w.write_record(&rec)?;
        }
        Ok(())
    }

    fn write_travel_times(&mut self, tt: &TravelTimes) -> OutputResult<()> {
        let tau = tau_rows(tt);
        let tau_max = tau_max_rows(tt);

        let w = self.create("tau.csv")?;
        w.write_record(["resource", "from", "to", "steps"])?;
        for r in &tau {
            w.write_record(&[
                r.resource.to_string(),
                r.from.to_string(),
                r.to.to_string(),
                r.steps.to_string(),
            ])?;
        }

        let w = self.create("tau_max.csv")?;
        w.write_record(["resource", "node", "max_steps"])?;
        for r in &tau_max {
            w.write_record(&[r.resource.to_string(), r.node.to_string(), r.max_steps.to_string()])?;
        }
        Ok(())
    }

    fn write_distances(&mut self, d: &DistanceMatrix) -> OutputResult<()> {
        let labels = d.labels();
        let w = self.create("distances.csv")?;
        w.write_record(["from", "to", "distance"])?;
        for (i, a) in labels.iter().enumerate() {
            for (j, b) in labels.iter().enumerate() {
                let dist = format_distance(d.get(i, j));
                w.write_record([a.as_str(), b.as_str(), dist.as_str()])?;
            }
        }

        let w = self.create("row_max.csv")?;
        w.write_record(["node", "max_distance"])?;
        for (label, m) in labels.iter().zip(d.row_maxima()) {
            let max = match m {
                RowMax::Finite(v)         => format_distance(v),
                RowMax::NoFiniteNeighbors => "none".to_owned(),
            };
            w.write_record([label.as_str(), max.as_str()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        for w in &mut self.open {
            w.flush()?;
        }
        Ok(())
    }
}
