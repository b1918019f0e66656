#![forbid(unsafe_code)]

//! Property tests for cell-space geometry.

use marquee_core::geometry::{Position, Rect};
use proptest::prelude::*;

fn arb_rect() -> impl Strategy<Value = Rect> {
    (0u16..200, 0u16..200, 0u16..64, 0u16..64)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn intersection_is_commutative(a in arb_rect(), b in arb_rect()) {
        prop_assert_eq!(a.intersection(b), b.intersection(a));
    }

    #[test]
    fn intersection_is_contained_in_both(a in arb_rect(), b in arb_rect()) {
        let i = a.intersection(b);
        if !i.is_empty() {
            prop_assert!(i.left() >= a.left() && i.right() <= a.right());
            prop_assert!(i.left() >= b.left() && i.right() <= b.right());
            prop_assert!(i.top() >= a.top() && i.bottom() <= a.bottom());
            prop_assert!(i.top() >= b.top() && i.bottom() <= b.bottom());
        }
    }

    #[test]
    fn contained_points_survive_intersection(a in arb_rect(), b in arb_rect(), x in 0u16..255, y in 0u16..255) {
        let p = Position::new(x, y);
        let both = a.contains(p) && b.contains(p);
        prop_assert_eq!(both, a.intersection(b).contains(p));
    }
}
