use std::ops::*;
use static_assertions::assert_eq_size;

use crate::extent::{Extent2, Extent3};
use crate::numeric::*;
use crate::point::{Point2, Point3};
use crate::vec::{Vec2, Vec3};

macro_rules! region_impl {
    (
        $docs:meta;
        $iden:ident, $prefix:literal,
        $point:ident, $extent:ident, $vec:ident,
        $elem_cnt:literal,
        $($pcomp:ident => $raw_p:ident),+;
        $($ecomp:ident => $raw_e:ident),+
    ) => {
        #[$docs]
        #[derive(Clone, Copy, PartialEq, Debug)]
        #[repr(C)]
        pub struct $iden<T: Numeric> {
            pub p: $point<T>,
            pub e: $extent<T>,
        }

        impl<T: Numeric> $iden<T> {
            /// The unit box at the origin
            pub const UNIT: Self = Self {
                p: $point { $($pcomp: T::ZERO),+ },
                e: $extent { $($ecomp: T::ONE),+ },
            };

            /// An effectively unbounded box centred near the midpoint of the
            /// numeric range
            pub const MAX: Self = Self {
                p: $point { $($pcomp: T::HALF_MIN),+ },
                e: $extent { $($ecomp: T::MAX),+ },
            };

            #[doc = concat!("Create a new ", stringify!($iden), " from a base corner and a size.")]
            #[inline]
            #[must_use]
            pub fn new(p: $point<T>, e: $extent<T>) -> Self {
                debug_assert!(e.is_valid());
                Self { p, e }
            }

            /// Create the smallest region spanning 2 points
            #[must_use]
            pub fn from_points(a: $point<T>, b: $point<T>) -> Self {
                let base = a.min(b);
                let diff = a.max(b) - base;
                Self { p: base, e: $extent::new($(diff.$raw_p),+) }
            }

            //--------------------------------------------------------------

            /// Get the base corner
            #[inline(always)]
            #[must_use]
            pub fn base(self) -> $point<T> {
                self.p
            }

            /// Get the corner opposite the base
            #[inline]
            #[must_use]
            pub fn away(self) -> $point<T> {
                self.p + self.e.as_vec()
            }

            /// Get the centre
            #[must_use]
            pub fn centre(self) -> $point<T> {
                let two = T::ONE + T::ONE;
                self.p + self.e.as_vec() / two
            }

            $(
                #[doc = concat!("Raw positional access to the base's `", stringify!($pcomp), "` component.")]
                #[inline(always)]
                #[must_use]
                pub fn $raw_p(self) -> T {
                    self.p.$pcomp
                }
            )+

            $(
                #[doc = concat!("Raw positional access to the extent's `", stringify!($ecomp), "` component.")]
                #[inline(always)]
                #[must_use]
                pub fn $raw_e(self) -> T {
                    self.e.$ecomp
                }
            )+

            //--------------------------------------------------------------

            /// Calculate the enclosed area
            #[must_use]
            pub fn area(self) -> T {
                self.e.area()
            }

            /// Calculate the length of the diagonal
            #[must_use]
            pub fn diameter(self) -> T {
                self.e.diameter()
            }

            /// Check if the region encloses nothing
            #[must_use]
            pub fn empty(self) -> bool {
                $(self.e.$ecomp == T::ZERO)||+
            }

            //--------------------------------------------------------------

            /// Check if a point lies within the region, inclusive of the
            /// boundary on every side
            #[must_use]
            pub fn includes(self, p: $point<T>) -> bool {
                p.cmp_ge(self.p).all() && p.cmp_le(self.away()).all()
            }

            /// Check if a point lies within the region, exclusive of the
            /// boundary; a point on an edge is not contained
            #[must_use]
            pub fn contains(self, p: $point<T>) -> bool {
                p.cmp_gt(self.p).all() && p.cmp_lt(self.away()).all()
            }

            /// Check if 2 regions overlap; regions sharing only an edge do not
            /// intersect
            #[must_use]
            pub fn intersects(self, other: Self) -> bool {
                self.p.cmp_lt(other.away()).all() && other.p.cmp_lt(self.away()).all()
            }

            /// Get the overlap of 2 regions.
            ///
            /// Disjoint inputs produce a degenerate region with a zero extent
            /// along the separating axes; callers have to check `empty`.
            #[must_use]
            pub fn intersection(self, other: Self) -> Self {
                let base = self.p.max(other.p);
                let away = self.away().min(other.away()).max(base);
                let diff = away - base;
                Self { p: base, e: $extent::new($(diff.$raw_p),+) }
            }

            //--------------------------------------------------------------

            /// Clamp a point into the region in place
            pub fn constrain(self, p: &mut $point<T>) {
                *p = self.constrained(*p);
            }

            /// Get a point clamped into the region
            #[must_use]
            pub fn constrained(self, p: $point<T>) -> $point<T> {
                p.clamp(self.p, self.away())
            }

            //--------------------------------------------------------------

            /// Get the region grown symmetrically by a margin on every side
            #[must_use]
            pub fn expanded(self, margin: T) -> Self {
                self.expanded_by($vec::set(margin))
            }

            /// Get the region grown by a per-axis margin on every side
            #[must_use]
            pub fn expanded_by(self, margin: $vec<T>) -> Self {
                let two = T::ONE + T::ONE;
                let e = self.e + margin * two;
                debug_assert!(e.is_valid());
                Self { p: self.p - margin, e }
            }

            /// Grow the region symmetrically in place
            pub fn expand(&mut self, margin: T) {
                *self = self.expanded(margin);
            }

            /// Get the region shrunk symmetrically by a margin on every side
            #[must_use]
            pub fn inset(self, margin: T) -> Self {
                let two = T::ONE + T::ONE;
                let e = self.e - margin * two;
                debug_assert!(e.is_valid());
                Self { p: self.p + $vec::set(margin), e }
            }

            /// Get the region with a different size, keeping the base corner
            #[must_use]
            pub fn resized(self, e: $extent<T>) -> Self {
                Self::new(self.p, e)
            }

            /// Get the region moved so its centre lands on `centre`
            #[must_use]
            pub fn recentred(self, centre: $point<T>) -> Self {
                let two = T::ONE + T::ONE;
                Self { p: centre - self.e.as_vec() / two, e: self.e }
            }
        }

        //--------------------------------------------------------------

        impl<T: Numeric> Add<$vec<T>> for $iden<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: $vec<T>) -> Self {
                Self { p: self.p + rhs, e: self.e }
            }
        }

        impl<T: Numeric> Sub<$vec<T>> for $iden<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: $vec<T>) -> Self {
                Self { p: self.p - rhs, e: self.e }
            }
        }

        impl<T: Numeric> ApproxEq<T> for $iden<T> {
            const EPSILON: T = <T as ApproxEq>::EPSILON;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                self.p.is_close_to(rhs.p, epsilon) && self.e.is_close_to(rhs.e, epsilon)
            }
        }

        impl<T: Numeric + std::fmt::Display> std::fmt::Display for $iden<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "({}, {})"), self.p, self.e)
            }
        }
    };
}

region_impl! {
    doc = "An axis-aligned 2D box, a base corner plus a size";
    Region2, "region2",
    Point2, Extent2, Vec2,
    4,
    x => x, y => y;
    w => w, h => h
}

region_impl! {
    doc = "An axis-aligned 3D box, a base corner plus a size";
    Region3, "region3",
    Point3, Extent3, Vec3,
    6,
    x => x, y => y, z => z;
    w => w, h => h, d => d
}

assert_eq_size!(Region2<f32>, [f32; 4]);
assert_eq_size!(Region3<u8>, [u8; 6]);

#[cfg(test)]
mod tests {
    use super::*;

    fn r(px: i32, py: i32, w: i32, h: i32) -> Region2<i32> {
        Region2::new(Point2::new(px, py), Extent2::new(w, h))
    }

    #[test]
    fn accessors() {
        let reg = r(1, 2, 10, 20);
        assert_eq!(reg.base(), Point2::new(1, 2));
        assert_eq!(reg.away(), Point2::new(11, 22));
        assert_eq!(reg.centre(), Point2::new(6, 12));
        assert_eq!((reg.x(), reg.y(), reg.w(), reg.h()), (1, 2, 10, 20));
        assert_eq!(reg.area(), 200);
    }

    #[test]
    fn includes_is_inclusive_contains_is_not() {
        let reg = r(0, 0, 10, 10);

        // the four corners
        for p in [
            Point2::new(0, 0),
            Point2::new(10, 0),
            Point2::new(0, 10),
            Point2::new(10, 10),
        ] {
            assert!(reg.includes(p), "corner {p} must be included");
            assert!(!reg.contains(p), "corner {p} must not be contained");
        }

        assert!(reg.includes(Point2::new(5, 5)));
        assert!(reg.contains(Point2::new(5, 5)));
        assert!(!reg.includes(Point2::new(11, 11)));
        assert!(!reg.contains(Point2::new(11, 11)));
    }

    #[test]
    fn intersects_excludes_touching_edges() {
        let a = r(0, 0, 10, 10);
        assert!(a.intersects(r(5, 5, 10, 10)));
        assert!(!a.intersects(r(10, 0, 10, 10)));
        assert!(!a.intersects(r(20, 20, 5, 5)));
        assert!(a.intersects(a));
    }

    #[test]
    fn intersection_overlapping() {
        let a = r(0, 0, 10, 10);
        let b = r(5, 5, 10, 10);
        let i = a.intersection(b);
        assert_eq!(i, r(5, 5, 5, 5));
        assert!(!i.empty());
    }

    #[test]
    fn intersection_disjoint_is_degenerate() {
        let a = r(0, 0, 10, 10);
        let b = r(20, 0, 5, 5);
        let i = a.intersection(b);
        assert!(i.empty());
        assert_eq!(i.e.w, 0);
    }

    #[test]
    fn constrain_clamps() {
        let reg = r(0, 0, 10, 10);
        assert_eq!(reg.constrained(Point2::new(15, -3)), Point2::new(10, 0));
        assert_eq!(reg.constrained(Point2::new(4, 5)), Point2::new(4, 5));

        let mut p = Point2::new(-1, 99);
        reg.constrain(&mut p);
        assert_eq!(p, Point2::new(0, 10));
    }

    #[test]
    fn expand_and_inset_are_inverses() {
        let reg = r(2, 2, 6, 6);
        let grown = reg.expanded(2);
        assert_eq!(grown, r(0, 0, 10, 10));
        assert_eq!(grown.inset(2), reg);

        let by = reg.expanded_by(Vec2::new(1, 2));
        assert_eq!(by, r(1, 0, 8, 10));
    }

    #[test]
    fn translation() {
        let reg = r(0, 0, 4, 4);
        assert_eq!(reg + Vec2::new(3, 1), r(3, 1, 4, 4));
        assert_eq!(reg - Vec2::new(1, 1), r(-1, -1, 4, 4));
    }

    #[test]
    fn resize_recentre() {
        let reg = r(0, 0, 4, 4);
        assert_eq!(reg.resized(Extent2::new(2, 2)), r(0, 0, 2, 2));
        assert_eq!(reg.recentred(Point2::new(10, 10)), r(8, 8, 4, 4));
    }

    #[test]
    fn consts() {
        let unit = Region2::<i32>::UNIT;
        assert_eq!(unit, r(0, 0, 1, 1));

        let max = Region2::<u8>::MAX;
        assert_eq!(max.p, Point2::new(0, 0));
        assert_eq!(max.e, Extent2::new(255, 255));
        assert!(max.includes(Point2::new(200, 17)));

        let max = Region2::<i8>::MAX;
        assert_eq!(max.p, Point2::new(-64, -64));
        assert!(max.includes(Point2::new(-60, 63)));
    }

    #[test]
    fn region3_queries() {
        let reg = Region3::new(Point3::new(0, 0, 0), Extent3::new(4, 4, 4));
        assert!(reg.includes(Point3::new(4, 4, 4)));
        assert!(!reg.contains(Point3::new(4, 4, 4)));
        assert_eq!(reg.area(), 64);
        assert_eq!(reg.d(), 4);
    }

    #[test]
    fn display() {
        assert_eq!(r(1, 2, 3, 4).to_string(), "region2(point2(1, 2), extent2(3, 4))");
    }
}
