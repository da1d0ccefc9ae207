#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis aligned rectangle in surface coordinates.
///
/// Position and size are signed and never validated: a rectangle may start off
/// surface, and a zero or negative size simply covers no pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Horizontal extent
    pub width: i32,
    /// Vertical extent
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top left corner and size
    #[inline(always)]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its edges, the right and bottom edges are exclusive
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }

    /// Left edge, inclusive
    #[inline(always)]
    pub fn left(&self) -> i32 {
        self.x
    }
    /// Top edge, inclusive
    #[inline(always)]
    pub fn top(&self) -> i32 {
        self.y
    }
    /// Right edge, exclusive
    #[inline(always)]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }
    /// Bottom edge, exclusive
    #[inline(always)]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether this rectangle covers no area
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the point lies inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    /// The overlapping part of two rectangles.
    ///
    /// Disjoint or empty inputs give an empty rectangle.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if self.is_empty() || other.is_empty() || right <= left || bottom <= top {
            return Rect::new(left, top, 0, 0);
        }
        Rect::from_edges(left, top, right, bottom)
    }

    /// Whether the two rectangles share any area
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Cut `cutter` out of this rectangle.
    ///
    /// Returns at most four non-overlapping rectangles which together cover exactly
    /// the part of `self` outside `cutter`. Pieces are produced left, top, right,
    /// bottom. If the two don't overlap the result is `self` unchanged.
    pub fn split(&self, cutter: &Rect) -> Vec<Rect> {
        if !self.overlaps(cutter) {
            return if self.is_empty() { Vec::new() } else { vec![*self] };
        }
        let mut pieces = Vec::with_capacity(4);
        let (mut left, mut top, mut right, bottom) =
            (self.left(), self.top(), self.right(), self.bottom());
        if cutter.left() > left {
            pieces.push(Rect::from_edges(left, top, cutter.left(), bottom));
            left = cutter.left();
        }
        if cutter.top() > top {
            pieces.push(Rect::from_edges(left, top, right, cutter.top()));
            top = cutter.top();
        }
        if cutter.right() < right {
            pieces.push(Rect::from_edges(cutter.right(), top, right, bottom));
            right = cutter.right();
        }
        if cutter.bottom() < bottom {
            pieces.push(Rect::from_edges(left, cutter.bottom(), right, bottom));
        }
        pieces
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    /// Convert from an `(x, y, width, height)` tuple
    #[inline(always)]
    fn from((x, y, width, height): (i32, i32, i32, i32)) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<Rect> for (i32, i32, i32, i32) {
    #[inline(always)]
    fn from(rect: Rect) -> Self {
        (rect.x, rect.y, rect.width, rect.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (10, 20, 40, 60));
        assert_eq!(Rect::from_edges(10, 20, 40, 60), r);
    }

    #[test]
    fn edges_saturate() {
        let r = Rect::new(i32::MAX - 1, 0, 100, 1);
        assert_eq!(r.right(), i32::MAX);
    }

    #[test]
    fn empty() {
        assert!(Rect::new(0, 0, 0, 10).is_empty());
        assert!(Rect::new(0, 0, 10, 0).is_empty());
        assert!(Rect::new(0, 0, -5, 10).is_empty());
        assert!(!Rect::new(-5, -5, 1, 1).is_empty());
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0, 0, 2, 2);
        assert!(r.contains(0, 0));
        assert!(r.contains(1, 1));
        assert!(!r.contains(2, 1));
        assert!(!r.contains(-1, 0));
    }

    #[test]
    fn intersection_overlapping() {
        let a = Rect::new(10, 10, 300, 200);
        let b = Rect::new(100, 150, 400, 400);
        assert_eq!(a.intersection(&b), Rect::new(100, 150, 210, 60));
        assert_eq!(b.intersection(&a), a.intersection(&b));
    }

    #[test]
    fn intersection_clips_to_bounds() {
        let bounds = Rect::new(0, 0, 1024, 768);
        let r = Rect::new(200, 100, 200, 700);
        assert_eq!(r.intersection(&bounds), Rect::new(200, 100, 200, 668));
        let r = Rect::new(-50, -50, 100, 100);
        assert_eq!(r.intersection(&bounds), Rect::new(0, 0, 50, 50));
    }

    fn area(rects: &[Rect]) -> i64 {
        rects.iter().map(|r| r.width as i64 * r.height as i64).sum()
    }

    #[test]
    fn split_around_a_hole() {
        let subject = Rect::new(0, 0, 10, 10);
        let pieces = subject.split(&Rect::new(3, 3, 4, 4));
        assert_eq!(
            pieces,
            vec![
                Rect::new(0, 0, 3, 10),
                Rect::new(3, 0, 7, 3),
                Rect::new(7, 3, 3, 7),
                Rect::new(3, 7, 4, 3),
            ]
        );
        assert_eq!(area(&pieces), 100 - 16);
    }

    #[test]
    fn split_pieces_cover_the_rest_exactly() {
        let subject = Rect::new(10, 10, 300, 200);
        let cutter = Rect::new(100, 150, 400, 400);
        let pieces = subject.split(&cutter);
        assert_eq!(
            area(&pieces),
            area(&[subject]) - area(&[subject.intersection(&cutter)])
        );
        for (i, a) in pieces.iter().enumerate() {
            assert!(!a.overlaps(&cutter));
            assert!(pieces[i + 1..].iter().all(|b| !a.overlaps(b)));
        }
    }

    #[test]
    fn split_without_overlap_keeps_subject() {
        let subject = Rect::new(0, 0, 5, 5);
        assert_eq!(subject.split(&Rect::new(5, 0, 5, 5)), vec![subject]);
        assert!(subject.split(&Rect::new(-1, -1, 10, 10)).is_empty());
        assert!(Rect::new(0, 0, 0, 5).split(&subject).is_empty());
    }

    #[test]
    fn intersection_disjoint_is_empty() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersection(&Rect::new(10, 0, 10, 10)).is_empty());
        assert!(a.intersection(&Rect::new(50, 50, 10, 10)).is_empty());
        assert!(a.intersection(&Rect::new(2, 2, -3, 4)).is_empty());
    }
}
