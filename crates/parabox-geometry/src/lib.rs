pub use truck_geometry::base::{Point2, Point3, Vector2, Vector3};

pub mod curves {
    pub use truck_geometry::nurbs::{BSplineCurve, KnotVec};
    pub use truck_geometry::specifieds::Line;
}

pub mod surfaces {
    pub use truck_geometry::nurbs::BSplineSurface;
    pub use truck_geometry::specifieds::Plane;
}

pub mod profiles {
    use truck_geometry::base::Point2;

    const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    /// Axis-aligned rectangle centered on the origin.
    #[derive(Clone, Copy, Debug)]
    pub struct RectangleProfile {
        pub width: f64,
        pub depth: f64,
    }

    impl RectangleProfile {
        pub fn corners(&self) -> [Point2; 4] {
            let hw = 0.5 * self.width;
            let hd = 0.5 * self.depth;
            [
                Point2::new(-hw, -hd),
                Point2::new(hw, -hd),
                Point2::new(hw, hd),
                Point2::new(-hw, hd),
            ]
        }
    }

    /// One piece of a closed 2D outline, walked counter-clockwise.
    #[derive(Clone, Copy, Debug)]
    pub enum OutlineSegment {
        Line { start: Point2, end: Point2 },
        Arc { start: Point2, end: Point2, transit: Point2 },
    }

    impl OutlineSegment {
        pub fn start(&self) -> Point2 {
            match self {
                OutlineSegment::Line { start, .. } | OutlineSegment::Arc { start, .. } => *start,
            }
        }

        pub fn end(&self) -> Point2 {
            match self {
                OutlineSegment::Line { end, .. } | OutlineSegment::Arc { end, .. } => *end,
            }
        }
    }

    /// Rectangle centered on the origin whose corners are replaced by
    /// constant-radius quarter circles. Geometric validity (the radius being
    /// strictly smaller than half of the shorter side) is enforced by callers.
    #[derive(Clone, Copy, Debug)]
    pub struct RoundedRectangleProfile {
        pub width: f64,
        pub depth: f64,
        pub corner_radius: f64,
    }

    impl RoundedRectangleProfile {
        /// Closed counter-clockwise outline: four straight sides alternating
        /// with four corner arcs, starting at the left end of the bottom side.
        /// Each arc's transit point sits at 45 degrees on its corner circle.
        pub fn outline(&self) -> [OutlineSegment; 8] {
            let hw = 0.5 * self.width;
            let hd = 0.5 * self.depth;
            let r = self.corner_radius;
            let t = r * FRAC_1_SQRT_2;

            let arc = |cx: f64, cy: f64, start: Point2, end: Point2, dx: f64, dy: f64| {
                OutlineSegment::Arc {
                    start,
                    end,
                    transit: Point2::new(cx + t * dx, cy + t * dy),
                }
            };

            [
                OutlineSegment::Line {
                    start: Point2::new(-hw + r, -hd),
                    end: Point2::new(hw - r, -hd),
                },
                arc(
                    hw - r,
                    -hd + r,
                    Point2::new(hw - r, -hd),
                    Point2::new(hw, -hd + r),
                    1.0,
                    -1.0,
                ),
                OutlineSegment::Line {
                    start: Point2::new(hw, -hd + r),
                    end: Point2::new(hw, hd - r),
                },
                arc(
                    hw - r,
                    hd - r,
                    Point2::new(hw, hd - r),
                    Point2::new(hw - r, hd),
                    1.0,
                    1.0,
                ),
                OutlineSegment::Line {
                    start: Point2::new(hw - r, hd),
                    end: Point2::new(-hw + r, hd),
                },
                arc(
                    -hw + r,
                    hd - r,
                    Point2::new(-hw + r, hd),
                    Point2::new(-hw, hd - r),
                    -1.0,
                    1.0,
                ),
                OutlineSegment::Line {
                    start: Point2::new(-hw, hd - r),
                    end: Point2::new(-hw, -hd + r),
                },
                arc(
                    -hw + r,
                    -hd + r,
                    Point2::new(-hw, -hd + r),
                    Point2::new(-hw + r, -hd),
                    -1.0,
                    -1.0,
                ),
            ]
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn rounded_outline_is_closed() {
            let profile = RoundedRectangleProfile {
                width: 30.0,
                depth: 20.0,
                corner_radius: 2.0,
            };
            let outline = profile.outline();
            for (i, segment) in outline.iter().enumerate() {
                let next = outline[(i + 1) % outline.len()];
                let gap = segment.end() - next.start();
                assert!(gap.x.abs() < 1.0e-12 && gap.y.abs() < 1.0e-12);
            }
        }

        #[test]
        fn arc_transits_lie_on_corner_circles() {
            let profile = RoundedRectangleProfile {
                width: 30.0,
                depth: 20.0,
                corner_radius: 2.0,
            };
            for segment in profile.outline() {
                if let OutlineSegment::Arc { transit, .. } = segment {
                    // Corner centers sit at (±13, ±8); the transit must be at
                    // radius distance from the nearest one.
                    let cx = 13.0_f64.copysign(transit.x);
                    let cy = 8.0_f64.copysign(transit.y);
                    let d = ((transit.x - cx).powi(2) + (transit.y - cy).powi(2)).sqrt();
                    assert!((d - 2.0).abs() < 1.0e-12);
                }
            }
        }
    }
}
