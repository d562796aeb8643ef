//! Axis-aligned rectangles and border-gap measurement.
//!
//! Rectangles are expressed in full-image pixel coordinates. Detectors that
//! work on a crop re-base their result with [`Rect::translated`] before
//! returning it.

use imageproc::point::Point;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle `(x, y, width, height)` in pixels.
///
/// Serialized as a `[x, y, w, h]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// `true` when the rectangle has positive extent on both axes.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Shift the origin by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Whether `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Intersection with an image of the given size, or `None` if empty.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<Rect> {
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = self.right().min(width as i32);
        let y1 = self.bottom().min(height as i32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
    }

    /// Smallest upright rectangle containing every point.
    ///
    /// Extents count pixels inclusively, so a single point yields a 1x1
    /// rectangle. Returns `None` for an empty slice.
    pub fn bounding(points: &[Point<i32>]) -> Option<Rect> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Rect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    }
}

impl From<[i32; 4]> for Rect {
    fn from(v: [i32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rect> for [i32; 4] {
    fn from(r: Rect) -> Self {
        [r.x, r.y, r.width, r.height]
    }
}

/// Distance in pixels from each outer edge to the matching inner edge.
///
/// Values can be negative when the inner rectangle pokes outside the outer
/// one; they are carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BorderGaps {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl BorderGaps {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// `true` if any side is negative (inner rectangle escapes the outer one).
    pub fn has_negative(&self) -> bool {
        self.left < 0.0 || self.right < 0.0 || self.top < 0.0 || self.bottom < 0.0
    }
}

/// Border thickness on each side between the outer and inner rectangles.
pub fn measure_gaps(outer: &Rect, inner: &Rect) -> BorderGaps {
    BorderGaps {
        left: f64::from(inner.x - outer.x),
        right: f64::from(outer.right() - inner.right()),
        top: f64::from(inner.y - outer.y),
        bottom: f64::from(outer.bottom() - inner.bottom()),
    }
}
