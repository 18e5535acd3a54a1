use serde::{Deserialize, Serialize};

/// Mouse click tolerance in pixels.
pub const CLICK_TOLERANCE: f64 = 8.0;

/// A position on the map image, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx.hypot(dy)
    }
}

/// A city, the element stored at every vertex of a road map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    name: String,
    location: Point,
}

impl City {
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> City {
        City {
            name: name.into(),
            location: Point::new(x, y),
        }
    }

    pub fn at(name: impl Into<String>, location: Point) -> City {
        City {
            name: name.into(),
            location,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Point {
        self.location
    }

    /// Returns true if `point` lies within `tolerance` pixels of the city.
    pub fn is_near(&self, point: &Point, tolerance: f64) -> bool {
        self.location.distance(point) <= tolerance
    }
}
