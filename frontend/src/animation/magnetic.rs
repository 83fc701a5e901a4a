use crate::animation::style::Mutation;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Viewport-relative bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub fn css(&self) -> String {
        format!("translate({}px, {}px)", self.dx, self.dy)
    }
}

/// Pulls elements towards the pointer when it comes close.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticField {
    pub capture_radius: f64,
    pub max_displacement: f64,
}

impl MagneticField {
    /// `None` means the pointer is out of reach and the element keeps
    /// whatever transform it had.
    pub fn displacement(&self, pointer: Point, center: Point) -> Option<Offset> {
        let distance = center.distance_to(pointer);
        if distance >= self.capture_radius {
            return None;
        }
        let angle = (pointer.y - center.y).atan2(pointer.x - center.x);
        let force = (self.capture_radius - distance) / self.capture_radius;
        Some(Offset {
            dx: angle.cos() * force * self.max_displacement,
            dy: angle.sin() * force * self.max_displacement,
        })
    }
}

/// Pins the custom cursor under the pointer.
pub fn cursor_position(pointer: Point) -> [Mutation; 2] {
    [
        Mutation::style("left", format!("{}px", pointer.x)),
        Mutation::style("top", format!("{}px", pointer.y)),
    ]
}

#[cfg(test)]
impl Offset {
    pub fn magnitude(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}
