use serde::{Deserialize, Serialize};

/// A highway, the element stored at every edge of a road map.
///
/// Distance is given in miles, travel time as hours plus minutes. Both are
/// expected to be non-negative; nothing here checks it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Highway {
    distance: f64,
    hours: f64,
    minutes: f64,
}

impl Highway {
    pub fn new(distance: f64, hours: f64, minutes: f64) -> Highway {
        Highway {
            distance,
            hours,
            minutes,
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    /// Total travel time in hours.
    pub fn travel_time(&self) -> f64 {
        self.hours + self.minutes / 60.0
    }
}
