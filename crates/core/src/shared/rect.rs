use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Axis-aligned box in frame pixel coordinates.
///
/// Fields are private: every `Rect` goes through [`Rect::new`], so a value
/// with negative width or height cannot exist. Deserialization is validated
/// the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRect", into = "RawRect")]
pub struct Rect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[derive(Serialize, Deserialize)]
struct RawRect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl TryFrom<RawRect> for Rect {
    type Error = GeometryError;

    fn try_from(raw: RawRect) -> Result<Self, Self::Error> {
        Rect::new(raw.x, raw.y, raw.width, raw.height)
    }
}

impl From<Rect> for RawRect {
    fn from(r: Rect) -> Self {
        RawRect {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, GeometryError> {
        if width < 0 || height < 0 {
            return Err(GeometryError::InvalidArgument(format!(
                "rectangle at ({x}, {y}) has negative extent {width}x{height}"
            )));
        }
        if x.checked_add(width).is_none() || y.checked_add(height).is_none() {
            return Err(GeometryError::InvalidArgument(format!(
                "rectangle at ({x}, {y}) with extent {width}x{height} exceeds the coordinate range"
            )));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Builds the rectangle spanning `top_left` (inclusive) to
    /// `bottom_right` (exclusive).
    pub fn from_corners(
        top_left: (i32, i32),
        bottom_right: (i32, i32),
    ) -> Result<Self, GeometryError> {
        let extent = |from: i32, to: i32| {
            to.checked_sub(from).ok_or_else(|| {
                GeometryError::InvalidArgument(format!("corner span {from}..{to} is out of range"))
            })
        };
        Self::new(
            top_left.0,
            top_left.1,
            extent(top_left.0, bottom_right.0)?,
            extent(top_left.1, bottom_right.1)?,
        )
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn top_left(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn bottom_right(&self) -> (i32, i32) {
        (self.right(), self.bottom())
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Closed containment: both corners of `self` lie inside `outer`,
    /// boundary included.
    pub fn is_within(&self, outer: &Rect) -> bool {
        self.x >= outer.x
            && self.y >= outer.y
            && self.right() <= outer.right()
            && self.bottom() <= outer.bottom()
    }

    /// Overlap of two rectangles, or `None` when they share no pixel.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x2 <= x1 || y2 <= y1 {
            return None;
        }
        Some(Rect {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        })
    }
}

/// True iff `inner` lies entirely inside `outer`, boundary-inclusive.
pub fn contains(inner: &Rect, outer: &Rect) -> bool {
    inner.is_within(outer)
}

/// Smallest rectangle covering every input.
///
/// Empty input is rejected rather than producing a degenerate box; callers
/// decide what "no rectangles" means for them.
pub fn bounding_box(rects: &[Rect]) -> Result<Rect, GeometryError> {
    let (first, rest) = rects.split_first().ok_or_else(|| {
        GeometryError::InvalidArgument("bounding box of an empty rectangle set".to_string())
    })?;

    let (mut left, mut top) = first.top_left();
    let (mut right, mut bottom) = first.bottom_right();
    for r in rest {
        left = left.min(r.x);
        top = top.min(r.y);
        right = right.max(r.right());
        bottom = bottom.max(r.bottom());
    }

    Rect::from_corners((left, top), (right, bottom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(x, y, w, h).unwrap()
    }

    // ── Construction ────────────────────────────────────────────────

    #[test]
    fn test_corners() {
        let r = rect(10, 20, 30, 40);
        assert_eq!(r.top_left(), (10, 20));
        assert_eq!(r.bottom_right(), (40, 60));
        assert_eq!(r.area(), 1200);
    }

    #[rstest]
    #[case::negative_width(0, 0, -1, 10)]
    #[case::negative_height(0, 0, 10, -1)]
    #[case::both_negative(5, 5, -3, -3)]
    fn test_negative_extent_rejected(
        #[case] x: i32,
        #[case] y: i32,
        #[case] w: i32,
        #[case] h: i32,
    ) {
        let err = Rect::new(x, y, w, h).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }

    #[rstest]
    #[case::right_edge_overflows(i32::MAX - 5, 0, 10, 10)]
    #[case::bottom_edge_overflows(0, i32::MAX - 5, 10, 10)]
    #[case::both_overflow(i32::MAX, i32::MAX, 1, 1)]
    fn test_extent_past_coordinate_range_rejected(
        #[case] x: i32,
        #[case] y: i32,
        #[case] w: i32,
        #[case] h: i32,
    ) {
        let err = Rect::new(x, y, w, h).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }

    #[test]
    fn test_extent_reaching_coordinate_limit_is_valid() {
        let r = rect(i32::MAX - 10, 0, 10, 10);
        assert_eq!(r.right(), i32::MAX);
        assert!(contains(&r, &r));
    }

    #[test]
    fn test_from_corners_out_of_range_rejected() {
        assert!(Rect::from_corners((i32::MIN, 0), (i32::MAX, 10)).is_err());
    }

    #[test]
    fn test_deserialize_rejects_overflowing_extent() {
        let json = format!(r#"{{"x":{},"y":0,"width":10,"height":10}}"#, i32::MAX - 5);
        assert!(serde_json::from_str::<Rect>(&json).is_err());
    }

    #[test]
    fn test_zero_extent_is_valid() {
        let r = rect(3, 3, 0, 0);
        assert!(r.is_empty());
    }

    #[test]
    fn test_deserialize_validates_extent() {
        let ok: Rect = serde_json::from_str(r#"{"x":1,"y":2,"width":3,"height":4}"#).unwrap();
        assert_eq!(ok, rect(1, 2, 3, 4));

        let bad = serde_json::from_str::<Rect>(r#"{"x":1,"y":2,"width":-3,"height":4}"#);
        assert!(bad.is_err());
    }

    // ── Containment ─────────────────────────────────────────────────

    #[rstest]
    #[case::origin(rect(0, 0, 10, 10))]
    #[case::offset(rect(-5, 7, 3, 9))]
    #[case::degenerate(rect(4, 4, 0, 0))]
    fn test_contains_is_reflexive(#[case] r: Rect) {
        assert!(contains(&r, &r));
    }

    #[test]
    fn test_contains_boundary_inclusive() {
        let outer = rect(0, 0, 100, 100);
        assert!(contains(&rect(0, 0, 100, 50), &outer));
        assert!(contains(&rect(90, 90, 10, 10), &outer));
    }

    #[rstest]
    #[case::past_right(rect(95, 10, 10, 10))]
    #[case::past_bottom(rect(10, 95, 10, 10))]
    #[case::left_of(rect(-1, 10, 10, 10))]
    #[case::above(rect(10, -1, 10, 10))]
    #[case::larger(rect(-10, -10, 200, 200))]
    fn test_contains_rejects_overhang(#[case] inner: Rect) {
        assert!(!contains(&inner, &rect(0, 0, 100, 100)));
    }

    #[test]
    fn test_contains_is_not_symmetric() {
        let small = rect(10, 10, 5, 5);
        let big = rect(0, 0, 50, 50);
        assert!(contains(&small, &big));
        assert!(!contains(&big, &small));
    }

    // ── Bounding box ────────────────────────────────────────────────

    #[test]
    fn test_bounding_box_two_eyes() {
        let eyes = [rect(10, 10, 20, 20), rect(60, 10, 20, 20)];
        let bb = bounding_box(&eyes).unwrap();
        assert_eq!(bb.top_left(), (10, 10));
        assert_eq!(bb.bottom_right(), (80, 30));
        assert_eq!(bb, rect(10, 10, 70, 20));
    }

    #[test]
    fn test_bounding_box_single_is_identity() {
        let r = rect(3, 4, 5, 6);
        assert_eq!(bounding_box(&[r]).unwrap(), r);
    }

    #[test]
    fn test_bounding_box_empty_fails() {
        let err = bounding_box(&[]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }

    #[test]
    fn test_bounding_box_contains_inputs_and_is_minimal() {
        let rects = [
            rect(5, 40, 10, 10),
            rect(-3, 12, 4, 60),
            rect(20, 0, 1, 1),
            rect(7, 7, 30, 2),
        ];
        let bb = bounding_box(&rects).unwrap();
        for r in &rects {
            assert!(contains(r, &bb));
        }
        // Each edge is touched by some input, so no smaller box covers them all.
        assert!(rects.iter().any(|r| r.x() == bb.x()));
        assert!(rects.iter().any(|r| r.y() == bb.y()));
        assert!(rects.iter().any(|r| r.right() == bb.right()));
        assert!(rects.iter().any(|r| r.bottom() == bb.bottom()));
    }

    #[test]
    fn test_bounding_box_order_independent() {
        let a = [rect(0, 0, 5, 5), rect(50, 60, 5, 5)];
        let b = [a[1], a[0]];
        assert_eq!(bounding_box(&a).unwrap(), bounding_box(&b).unwrap());
    }

    // ── Intersection ────────────────────────────────────────────────

    #[test]
    fn test_intersection_partial_overlap() {
        let a = rect(0, 0, 100, 100);
        let b = rect(50, 80, 100, 100);
        assert_eq!(a.intersection(&b), Some(rect(50, 80, 50, 20)));
    }

    #[test]
    fn test_intersection_touching_edges_is_none() {
        let a = rect(0, 0, 50, 50);
        let b = rect(50, 0, 50, 50);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_intersection_contained() {
        let outer = rect(0, 0, 100, 100);
        let inner = rect(25, 25, 10, 10);
        assert_eq!(outer.intersection(&inner), Some(inner));
    }
}
