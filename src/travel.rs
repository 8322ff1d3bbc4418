//! The snake-shaped travel path and the emoji traveler that rides it.
//!
//! The path lives in a 0–100 viewBox stretched over the travel section and
//! only ever moves downwards, so x can be looked up from y. Arc length is
//! precomputed once into a lookup table; scrolling only does binary searches.

use crate::events::EventId;
use crate::geo::Point;
use crate::lerp;
use std::fmt::Write as _;

/// Points per cubic segment when flattening the curve.
const FLATTEN_STEPS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

fn cubic_at(p0: Point, seg: &CubicSegment, t: f64) -> Point {
    let mt = 1.0 - t;
    let (a, b, c, d) = (mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t);
    Point::new(
        a * p0.x + b * seg.c1.x + c * seg.c2.x + d * seg.end.x,
        a * p0.y + b * seg.c1.y + c * seg.c2.y + d * seg.end.y,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnakePath {
    pub start: Point,
    pub segments: Vec<CubicSegment>,
}

impl SnakePath {
    /// A path through `waypoints`, with vertical tangents at each bend.
    ///
    /// Control points sit halfway down each leg, which keeps y monotonic as
    /// long as the waypoints descend.
    pub fn through(waypoints: &[Point]) -> Self {
        let start = waypoints.first().copied().unwrap_or(Point::new(50.0, 0.0));
        let segments = waypoints
            .windows(2)
            .map(|w| {
                let (a, b) = (w[0], w[1]);
                let mid_y = (a.y + b.y) / 2.0;
                CubicSegment {
                    c1: Point::new(a.x, mid_y),
                    c2: Point::new(b.x, mid_y),
                    end: b,
                }
            })
            .collect();
        Self { start, segments }
    }

    /// The zig-zag drawn down the travel section.
    pub fn wedding_route() -> Self {
        Self::through(&[
            Point::new(50.0, 0.0),
            Point::new(80.0, 12.0),
            Point::new(20.0, 30.0),
            Point::new(80.0, 48.0),
            Point::new(20.0, 66.0),
            Point::new(80.0, 84.0),
            Point::new(50.0, 100.0),
        ])
    }

    /// SVG path data.
    pub fn svg_d(&self) -> String {
        let mut d = format!("M{},{}", self.start.x, self.start.y);
        for s in &self.segments {
            let _ = write!(
                d,
                " C{},{} {},{} {},{}",
                s.c1.x, s.c1.y, s.c2.x, s.c2.y, s.end.x, s.end.y
            );
        }
        d
    }

    /// Dense polyline approximation of the curve.
    fn flatten(&self) -> Vec<Point> {
        let mut pts = vec![self.start];
        let mut p0 = self.start;
        for seg in &self.segments {
            pts.extend(
                (1..=FLATTEN_STEPS).map(|i| cubic_at(p0, seg, i as f64 / FLATTEN_STEPS as f64)),
            );
            p0 = seg.end;
        }
        pts
    }
}

/// Points evenly spaced by arc length along a [`SnakePath`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathLut {
    points: Vec<Point>,
}

impl PathLut {
    /// Sample `steps + 1` points at equal arc-length intervals.
    pub fn build(path: &SnakePath, steps: usize) -> Self {
        let poly = path.flatten();
        if poly.len() < 2 || steps == 0 {
            return Self { points: poly };
        }

        let mut cumulative = Vec::with_capacity(poly.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for w in poly.windows(2) {
            total += (w[1].x - w[0].x).hypot(w[1].y - w[0].y);
            cumulative.push(total);
        }

        let points = (0..=steps)
            .map(|i| {
                let target = total * i as f64 / steps as f64;
                // First vertex whose cumulative length reaches the target.
                let hi = cumulative.partition_point(|&len| len < target).min(poly.len() - 1);
                if hi == 0 {
                    return poly[0];
                }
                let lo = hi - 1;
                let span = cumulative[hi] - cumulative[lo];
                let t = if span > 0.0 { (target - cumulative[lo]) / span } else { 0.0 };
                Point::new(lerp(poly[lo].x, poly[hi].x, t), lerp(poly[lo].y, poly[hi].y, t))
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// x on the path at height `y`, interpolated between neighbouring
    /// samples. An empty table answers the horizontal center.
    pub fn x_at_y(&self, y: f64) -> f64 {
        let lut = &self.points;
        let (first, last) = match (lut.first(), lut.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 50.0,
        };
        if y <= first.y {
            return first.x;
        }
        if y >= last.y {
            return last.x;
        }
        let lo = lut.partition_point(|p| p.y < y).min(lut.len() - 1);
        if lo > 0 {
            let (a, b) = (lut[lo - 1], lut[lo]);
            let dy = b.y - a.y;
            if dy > 0.0 {
                return lerp(a.x, b.x, (y - a.y) / dy);
            }
        }
        lut[lo].x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelIcon {
    Plane,
    Walk,
    Party,
    Wedding,
}

impl TravelIcon {
    pub fn emoji(self) -> &'static str {
        match self {
            TravelIcon::Plane => "✈️",
            TravelIcon::Walk => "🚶",
            TravelIcon::Party => "🎉",
            TravelIcon::Wedding => "💍",
        }
    }
}

/// A point on the route where the traveler changes icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelStop {
    pub id: &'static str,
    pub progress: f64,
    pub icon: TravelIcon,
    /// Event opened when the stop is clicked, if any.
    pub event: Option<EventId>,
}

pub const STOPS: [TravelStop; 6] = [
    TravelStop {
        id: "paris-departure",
        progress: 0.0,
        icon: TravelIcon::Plane,
        event: Some(EventId::Mairie),
    },
    TravelStop {
        id: "tel-aviv",
        progress: 0.18,
        icon: TravelIcon::Walk,
        event: None,
    },
    TravelStop {
        id: "welcome-dinner",
        progress: 0.35,
        icon: TravelIcon::Walk,
        event: Some(EventId::WelcomeDinner),
    },
    TravelStop {
        id: "beach-party",
        progress: 0.52,
        icon: TravelIcon::Party,
        event: Some(EventId::BeachParty),
    },
    TravelStop {
        id: "wedding",
        progress: 0.68,
        icon: TravelIcon::Wedding,
        event: Some(EventId::WeddingCeremony),
    },
    TravelStop {
        id: "return",
        progress: 0.88,
        icon: TravelIcon::Plane,
        event: None,
    },
];

/// Icon of the last stop reached at `progress`.
pub fn icon_for_progress(progress: f64) -> TravelIcon {
    STOPS
        .iter()
        .take_while(|stop| progress >= stop.progress)
        .last()
        .map(|stop| stop.icon)
        .unwrap_or(STOPS[0].icon)
}

/// Vertical position (percent of the section) of the viewport's center at
/// scroll `progress`. Before the section is measured, progress maps
/// straight onto the path.
pub fn progress_to_y(progress: f64, section_height: f64, viewport_height: f64) -> f64 {
    let progress = crate::clamp_unit(progress);
    if section_height <= 0.0 {
        return progress * 100.0;
    }
    let center = progress * (section_height - viewport_height) + viewport_height / 2.0;
    (center / section_height * 100.0).clamp(0.0, 100.0)
}

/// Traveler position as percentages of the section's width and height.
///
/// The traveler follows the viewport's vertical center.
pub fn traveler_position(
    progress: f64,
    section_height: f64,
    viewport_height: f64,
    lut: &PathLut,
) -> Point {
    let y = progress_to_y(progress, section_height, viewport_height);
    Point::new(lut.x_at_y(y), y)
}

/// Where each stop sits on the path: the spot the traveler occupies when
/// scroll progress reaches the stop.
pub fn stop_positions(
    section_height: f64,
    viewport_height: f64,
    lut: &PathLut,
) -> Vec<(TravelStop, Point)> {
    STOPS
        .iter()
        .map(|stop| {
            let at = traveler_position(stop.progress, section_height, viewport_height, lut);
            (*stop, at)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lut() -> PathLut {
        PathLut::build(&SnakePath::wedding_route(), 200)
    }

    #[test]
    fn lut_has_steps_plus_one_points() {
        let lut = lut();
        assert_eq!(lut.points().len(), 201);
        let first = lut.points()[0];
        let last = *lut.points().last().unwrap();
        assert_eq!(first, Point::new(50.0, 0.0));
        assert!((last.x - 50.0).abs() < 1e-6 && (last.y - 100.0).abs() < 1e-6);
    }

    #[test]
    fn lut_is_sorted_by_y() {
        let lut = lut();
        for w in lut.points().windows(2) {
            assert!(w[1].y >= w[0].y);
        }
    }

    #[test]
    fn lut_points_are_evenly_spaced() {
        let lut = lut();
        let gaps: Vec<f64> = lut
            .points()
            .windows(2)
            .map(|w| (w[1].x - w[0].x).hypot(w[1].y - w[0].y))
            .collect();
        let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
        for g in gaps {
            assert!((g - mean).abs() < mean * 0.05, "gap {g} vs mean {mean}");
        }
    }

    #[test]
    fn x_at_y_follows_the_waypoints() {
        let lut = lut();
        assert!((lut.x_at_y(0.0) - 50.0).abs() < 1e-6);
        assert!((lut.x_at_y(12.0) - 80.0).abs() < 0.5);
        assert!((lut.x_at_y(30.0) - 20.0).abs() < 0.5);
        assert!((lut.x_at_y(100.0) - 50.0).abs() < 1e-6);
        // Beyond the end clamps to the last sample.
        assert!((lut.x_at_y(150.0) - 50.0).abs() < 1e-6);
    }

    #[test]
    fn empty_lut_answers_center() {
        assert_eq!(PathLut::default().x_at_y(42.0), 50.0);
    }

    #[test]
    fn svg_d_starts_with_move_and_has_one_curve_per_leg() {
        let d = SnakePath::wedding_route().svg_d();
        assert!(d.starts_with("M50,0"));
        assert_eq!(d.matches(" C").count(), 6);
    }

    #[test]
    fn icons_switch_at_thresholds() {
        assert_eq!(icon_for_progress(0.0), TravelIcon::Plane);
        assert_eq!(icon_for_progress(0.17), TravelIcon::Plane);
        assert_eq!(icon_for_progress(0.18), TravelIcon::Walk);
        assert_eq!(icon_for_progress(0.52), TravelIcon::Party);
        assert_eq!(icon_for_progress(0.7), TravelIcon::Wedding);
        assert_eq!(icon_for_progress(0.95), TravelIcon::Plane);
        assert_eq!(icon_for_progress(-1.0), TravelIcon::Plane);
    }

    #[test]
    fn traveler_tracks_viewport_center() {
        let lut = lut();
        // 4000px section, 1000px viewport.
        let start = traveler_position(0.0, 4000.0, 1000.0, &lut);
        assert!((start.y - 12.5).abs() < 1e-9);
        let end = traveler_position(1.0, 4000.0, 1000.0, &lut);
        assert!((end.y - 87.5).abs() < 1e-9);
        let unmeasured = traveler_position(0.5, 0.0, 1000.0, &lut);
        assert_eq!(unmeasured, Point::new(lut.x_at_y(50.0), 50.0));
    }

    #[test]
    fn stops_sit_where_the_traveler_passes() {
        let lut = lut();
        let stops = stop_positions(4000.0, 1000.0, &lut);
        assert_eq!(stops.len(), STOPS.len());
        for (stop, at) in stops {
            let traveler = traveler_position(stop.progress, 4000.0, 1000.0, &lut);
            assert!((at.y - traveler.y).abs() < 1e-9, "{}", stop.id);
            assert!((at.x - traveler.x).abs() < 1e-9, "{}", stop.id);
        }
        // The departure stop is reachable: it sits at the traveler's start.
        let (_, departure) = stop_positions(4000.0, 1000.0, &lut)[0];
        assert!((departure.y - 12.5).abs() < 1e-9);
    }
}
