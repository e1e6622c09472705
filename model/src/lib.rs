#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod ids;
mod sim;
mod trajectory;

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use self::ids::{IDMapping, TrajectoryID};
pub use self::sim::SimRecord;
pub use self::trajectory::{Point, Trajectory, POINT_INTERVAL_MS};

/// The raw identifier column of a simulation log. Rows sharing one name form one trajectory.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct ObjectName(String);

/// The converted dataset, shaped for the hot routes viewer.
#[derive(Serialize)]
pub struct HotRoutes {
    #[serde(rename = "pointsList")]
    pub points: Vec<Point>,
    #[serde(rename = "trajsList")]
    pub trajectories: Vec<Trajectory>,
    /// Always 0; the viewer's time slider starts here
    #[serde(rename = "minTimeStamp")]
    pub min_timestamp: f64,
    #[serde(rename = "maxTimeStamp")]
    pub max_timestamp: f64,
}

impl HotRoutes {
    /// Reads a simulation log and converts it in one pass.
    pub fn import(path: &str) -> Result<Self> {
        let rows = sim::load(path)?;
        info!("Converting {} rows from {}", rows.len(), path);
        Ok(Self::from_records(rows))
    }

    pub fn from_records(rows: Vec<SimRecord>) -> Self {
        trajectory::convert(rows)
    }

    /// Writes the document to out_dir (creating it if needed), named after the input file.
    pub fn save(&self, input_path: &str, out_dir: &str) -> Result<PathBuf> {
        let base = match Path::new(input_path).file_stem().and_then(|x| x.to_str()) {
            Some(x) => x,
            None => bail!("Can't derive an output name from {}", input_path),
        };
        fs_err::create_dir_all(out_dir)?;
        let out_path = Path::new(out_dir).join(format!("sim_{}.json", base));
        serde_json::to_writer(fs_err::File::create(&out_path)?, self)?;
        info!(
            "Wrote {} points and {} trajectories to {}",
            self.points.len(),
            self.trajectories.len(),
            out_path.display()
        );
        Ok(out_path)
    }
}
