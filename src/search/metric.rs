use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::graphs::highway::Highway;

/// Which highway attribute is used as edge weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Distance in miles.
    Distance,
    /// Travel time in hours.
    Time,
}

impl Metric {
    pub fn weight_of(self, highway: &Highway) -> f64 {
        match self {
            Metric::Distance => highway.distance(),
            Metric::Time => highway.travel_time(),
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Distance => "miles",
            Metric::Time => "hours",
        }
    }
}
