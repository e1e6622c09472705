use std::io::Read;

use anyhow::Result;
use serde::Deserialize;

use crate::ObjectName;

/// One row of a traffic simulation export. Column names are the simulator's literal headers.
/// Every field is kept as raw text; numeric conversion happens in the accessors, where junk
/// values turn into NaN instead of failing the whole file.
#[derive(Clone, Debug, Deserialize)]
pub struct SimRecord {
    pub id: ObjectName,
    #[serde(rename = "#time")]
    pub time: String,
    #[serde(rename = "lastX[pixel]")]
    pub last_x: String,
    #[serde(rename = "lastY[pixel]")]
    pub last_y: String,
}

impl SimRecord {
    pub fn object_name(&self) -> &ObjectName {
        &self.id
    }

    /// The identifier coerced to a number, NaN if it isn't one. The output format carries
    /// numeric trajectory ids; grouping still uses the raw text.
    pub fn traj_id(&self) -> f64 {
        parse_number(&self.id.0)
    }

    /// Sample index on the simulation clock, 100ms apart
    pub fn time_index(&self) -> f64 {
        parse_number(&self.time)
    }

    pub fn x(&self) -> f64 {
        parse_number(&self.last_x)
    }

    pub fn y(&self) -> f64 {
        parse_number(&self.last_y)
    }
}

fn parse_number(x: &str) -> f64 {
    x.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Reads the whole log into memory. A structurally broken row (wrong field count, bad
/// quoting) fails the load; bad numbers don't.
pub fn load(path: &str) -> Result<Vec<SimRecord>> {
    load_records(fs_err::File::open(path)?)
}

fn load_records<R: Read>(reader: R) -> Result<Vec<SimRecord>> {
    let mut rows = Vec::new();
    for rec in csv::Reader::from_reader(reader).deserialize() {
        let rec: SimRecord = rec?;
        rows.push(rec);
    }
    Ok(rows)
}
