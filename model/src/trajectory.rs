use serde::Serialize;

use crate::ids::IDMapping;
use crate::{HotRoutes, SimRecord};

/// Milliseconds between two consecutive samples; the #time column counts in these units.
pub const POINT_INTERVAL_MS: f64 = 100.0;

/// One position sample, linked to its neighbors on the same trajectory. The serialized field
/// names are the hot routes wire format.
#[derive(Clone, Debug, Serialize)]
pub struct Point {
    /// Numeric form of the object identifier
    #[serde(rename = "t")]
    pub traj_id: f64,
    /// Position of the row in the input, 0-based
    #[serde(rename = "p")]
    pub id: usize,
    /// Milliseconds
    #[serde(rename = "s")]
    pub timestamp: f64,
    /// Pixels
    #[serde(rename = "c")]
    pub coords: [f64; 2],
    /// Previous point on the same trajectory, -1 for the first
    #[serde(rename = "a")]
    pub prev: i64,
    /// Next point on the same trajectory, -1 for the last. Filled in retroactively once the
    /// successor shows up.
    #[serde(rename = "n")]
    pub next: i64,
    /// Pixels per millisecond; always 0 for the first point of a trajectory
    #[serde(rename = "v")]
    pub speed: f64,
    /// Euclidean distance to the next point, absent for the last one
    #[serde(rename = "d", skip_serializing_if = "Option::is_none")]
    pub dist_to_next: Option<f64>,
}

/// Per-trajectory summary.
#[derive(Clone, Debug, Serialize)]
pub struct Trajectory {
    #[serde(rename = "t")]
    pub traj_id: f64,
    /// Index of the trajectory's first point
    #[serde(rename = "p")]
    pub first_point: usize,
    /// [first timestamp, last-seen timestamp]
    #[serde(rename = "i")]
    pub interval: [f64; 2],
    /// Mean of the instantaneous speeds, the first point's 0 included
    #[serde(rename = "v")]
    pub avg_speed: f64,
}

// What we track per trajectory while the pass runs
struct TrajRecord {
    first_point: usize,
    interval: [f64; 2],
    n_points: usize,
    sum_speed: f64,
    // The most recent point, so the next one can link back to it
    last_point: usize,
}

/// The single conversion pass: every row becomes a Point in input order, rows sharing an
/// identifier get chained together, and one Trajectory summary is emitted per identifier in
/// first-encounter order.
pub(crate) fn convert(rows: Vec<SimRecord>) -> HotRoutes {
    let mut points: Vec<Point> = Vec::with_capacity(rows.len());
    let mut records: Vec<TrajRecord> = Vec::new();
    let mut ids = IDMapping::new();
    let mut max_timestamp = 0.0;

    for (idx, rec) in rows.iter().enumerate() {
        let timestamp = rec.time_index() * POINT_INTERVAL_MS;
        max_timestamp = f64::max(max_timestamp, timestamp);

        let mut point = Point {
            traj_id: rec.traj_id(),
            id: idx,
            timestamp,
            coords: [rec.x(), rec.y()],
            prev: -1,
            next: -1,
            speed: 0.0,
            dist_to_next: None,
        };

        let slot = match ids.get(rec.object_name()) {
            Some(slot) => {
                let prev = &mut points[records[slot.0].last_point];
                point.prev = prev.id as i64;
                prev.next = point.id as i64;

                let d = dist(prev.coords, point.coords);
                prev.dist_to_next = Some(d);
                // Deliberately unguarded: equal timestamps give an infinite or NaN speed
                point.speed = d / (point.timestamp - prev.timestamp);
                slot
            }
            None => {
                let slot = ids.insert_idempotent(rec.object_name());
                records.push(TrajRecord {
                    first_point: idx,
                    interval: [timestamp, timestamp],
                    n_points: 0,
                    sum_speed: 0.0,
                    last_point: idx,
                });
                slot
            }
        };

        let record = &mut records[slot.0];
        record.last_point = idx;
        record.n_points += 1;
        record.sum_speed += point.speed;
        record.interval[1] = timestamp;

        points.push(point);
    }

    // records is already in first-encounter order; TrajectoryID(i) indexes it
    let trajectories = records
        .iter()
        .map(|record| Trajectory {
            traj_id: points[record.first_point].traj_id,
            first_point: record.first_point,
            interval: record.interval,
            avg_speed: record.sum_speed / (record.n_points as f64),
        })
        .collect();

    HotRoutes {
        points,
        trajectories,
        min_timestamp: 0.0,
        max_timestamp,
    }
}

fn dist(from: [f64; 2], to: [f64; 2]) -> f64 {
    (to[0] - from[0]).hypot(to[1] - from[1])
}
