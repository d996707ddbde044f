pub mod activity;

pub use activity::Activity;

use std::collections::BTreeMap;

/// Activity name to record; the shape of the whole directory on the wire.
pub type ActivityMap = BTreeMap<String, Activity>;
