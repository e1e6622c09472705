use std::collections::BTreeMap;

use crate::ObjectName;

/// Cheap dense id for one trajectory, assigned in first-encounter order. It doubles as an
/// index into any Vec of per-trajectory state, so iterating such a Vec recovers the order
/// trajectories first appeared in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrajectoryID(pub usize);

pub struct IDMapping {
    orig_to_cheap: BTreeMap<ObjectName, TrajectoryID>,
}

impl IDMapping {
    pub fn new() -> Self {
        Self {
            orig_to_cheap: BTreeMap::new(),
        }
    }

    pub fn get(&self, orig: &ObjectName) -> Option<TrajectoryID> {
        self.orig_to_cheap.get(orig).copied()
    }

    pub fn insert_idempotent(&mut self, orig: &ObjectName) -> TrajectoryID {
        match self.orig_to_cheap.get(orig) {
            Some(x) => *x,
            None => {
                let v = TrajectoryID(self.orig_to_cheap.len());
                self.orig_to_cheap.insert(orig.clone(), v);
                v
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(x: &str) -> ObjectName {
        ObjectName(x.to_string())
    }

    #[test]
    fn assigns_dense_ids_by_first_encounter() {
        let mut ids = IDMapping::new();
        assert_eq!(ids.insert_idempotent(&name("zebra")), TrajectoryID(0));
        assert_eq!(ids.insert_idempotent(&name("apple")), TrajectoryID(1));
        // Repeats hand back the id already assigned
        assert_eq!(ids.insert_idempotent(&name("zebra")), TrajectoryID(0));
        assert_eq!(ids.get(&name("apple")), Some(TrajectoryID(1)));
        assert_eq!(ids.get(&name("mango")), None);
    }
}
