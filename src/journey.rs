//! Scroll-driven camera keyframes for the globe.
//!
//! A [`Journey`] is an ordered list of [`Keyframe`]s. Scroll progress in
//! `[0, 1]` is mapped onto the list: the bounding pair is chosen with
//! `floor((N - 1) * p)`, positions, scale and route progress are interpolated
//! linearly, and the highlighted marker is taken from whichever keyframe is
//! closer.

use crate::events::{EventId, LonLat};
use crate::{clamp_unit, lerp};

/// Camera state at one scroll checkpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// [longitude, latitude] facing the viewer.
    pub center: LonLat,
    /// Projection scale; larger is closer.
    pub scale: f64,
    pub highlight: Option<EventId>,
    /// Share of the route drawn, 0 (none) to 1 (full).
    pub route_progress: f64,
}

impl Keyframe {
    pub const fn new(
        center: LonLat,
        scale: f64,
        highlight: Option<EventId>,
        route_progress: f64,
    ) -> Self {
        Self { center, scale, highlight, route_progress }
    }

    fn is_finite(&self) -> bool {
        self.center.iter().all(|v| v.is_finite())
            && self.scale.is_finite()
            && self.route_progress.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JourneyError {
    #[error("a journey needs at least one keyframe")]
    Empty,
    #[error("keyframe {0} has a non-finite value")]
    NonFinite(usize),
    #[error("keyframe {index} has a non-positive scale ({scale})")]
    InvalidScale { index: usize, scale: f64 },
}

/// Interpolated camera for a given scroll progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub center: LonLat,
    pub scale: f64,
    pub highlight: Option<EventId>,
    pub route_progress: f64,
    /// Index of the first keyframe of the bounding pair.
    pub beat_index: usize,
    /// Position between the pair, in `[0, 1]`.
    pub beat_progress: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    keyframes: Vec<Keyframe>,
}

impl Journey {
    pub fn new(keyframes: Vec<Keyframe>) -> Result<Self, JourneyError> {
        if keyframes.is_empty() {
            return Err(JourneyError::Empty);
        }
        for (index, kf) in keyframes.iter().enumerate() {
            if !kf.is_finite() {
                return Err(JourneyError::NonFinite(index));
            }
            if kf.scale <= 0.0 {
                return Err(JourneyError::InvalidScale { index, scale: kf.scale });
            }
        }
        Ok(Self { keyframes })
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Camera state at scroll progress `p`. Out-of-range and NaN inputs are
    /// clamped.
    pub fn sample(&self, p: f64) -> CameraState {
        let p = clamp_unit(p);
        let n = self.keyframes.len();
        if n == 1 {
            let kf = self.keyframes[0];
            return CameraState {
                center: kf.center,
                scale: kf.scale,
                highlight: kf.highlight,
                route_progress: kf.route_progress,
                beat_index: 0,
                beat_progress: 0.0,
            };
        }

        let beats = (n - 1) as f64;
        let raw = p * beats;
        let beat_index = (raw.floor() as usize).min(n - 2);
        let t = raw - beat_index as f64;

        let a = &self.keyframes[beat_index];
        let b = &self.keyframes[beat_index + 1];

        CameraState {
            center: [lerp(a.center[0], b.center[0], t), lerp(a.center[1], b.center[1], t)],
            scale: lerp(a.scale, b.scale, t),
            highlight: if t < 0.5 { a.highlight } else { b.highlight },
            route_progress: lerp(a.route_progress, b.route_progress, t),
            beat_index,
            beat_progress: t,
        }
    }
}

/// Leg progress this close to a waypoint counts as reaching it.
const LEG_SNAP_EPS: f64 = 1e-9;

/// Route points drawn so far.
///
/// Completed legs are included whole; the current leg ends at an interpolated
/// point. Progress 0 yields only the starting point.
pub fn partial_route(coords: &[LonLat], progress: f64) -> Vec<LonLat> {
    if coords.len() < 2 {
        return coords.to_vec();
    }
    let progress = clamp_unit(progress);
    let legs = coords.len() - 1;
    let current = progress * legs as f64;
    let leg_index = (current.floor() as usize).min(legs - 1);
    let leg_progress = current - leg_index as f64;

    let mut out: Vec<LonLat> = coords[..=leg_index].to_vec();
    let (a, b) = (coords[leg_index], coords[leg_index + 1]);
    if leg_progress >= 1.0 - LEG_SNAP_EPS {
        // Land exactly on the waypoint so the line meets its marker.
        out.push(b);
    } else if leg_progress > LEG_SNAP_EPS {
        out.push([lerp(a[0], b[0], leg_progress), lerp(a[1], b[1], leg_progress)]);
    }
    out
}

/// Zoom used when a single event fills the view.
pub const EVENT_ZOOM: f64 = 4000.0;
/// Coastal Israel view between events.
pub const COAST_ZOOM: f64 = 2000.0;
/// Mediterranean overview.
pub const OVERVIEW_ZOOM: f64 = 300.0;

/// Route progress with the line ending on the Welcome Dinner marker.
pub const ROUTE_AT_TEL_AVIV: f64 = 1.0 / 3.0;
/// Route progress with the line ending on the Beach Party marker.
pub const ROUTE_AT_HERZLIYA: f64 = 2.0 / 3.0;

/// The wedding itinerary: zoom on each event, hold, pull back, travel.
pub fn default_journey() -> Journey {
    use EventId::*;
    let keyframes = vec![
        // Mairie: zoom, hold, pull back to the Mediterranean
        Keyframe::new([2.2567, 48.8966], EVENT_ZOOM, Some(Mairie), 0.0),
        Keyframe::new([2.2567, 48.8966], EVENT_ZOOM, Some(Mairie), 0.0),
        Keyframe::new([18.0, 40.0], OVERVIEW_ZOOM, None, 0.0),
        // Fly to Tel Aviv
        Keyframe::new([34.77, 32.06], OVERVIEW_ZOOM, None, ROUTE_AT_TEL_AVIV),
        Keyframe::new([34.7659, 32.0606], EVENT_ZOOM, Some(WelcomeDinner), ROUTE_AT_TEL_AVIV),
        Keyframe::new([34.7659, 32.0606], EVENT_ZOOM, Some(WelcomeDinner), ROUTE_AT_TEL_AVIV),
        Keyframe::new([34.77, 32.10], COAST_ZOOM, None, ROUTE_AT_TEL_AVIV),
        // North to Herzliya
        Keyframe::new([34.79, 32.16], COAST_ZOOM, None, ROUTE_AT_HERZLIYA),
        Keyframe::new([34.7875, 32.1629], EVENT_ZOOM, Some(BeachParty), ROUTE_AT_HERZLIYA),
        Keyframe::new([34.7875, 32.1629], EVENT_ZOOM, Some(BeachParty), ROUTE_AT_HERZLIYA),
        Keyframe::new([34.75, 32.03], COAST_ZOOM, None, ROUTE_AT_HERZLIYA),
        // South to Beit Hanan
        Keyframe::new([34.73, 31.91], COAST_ZOOM, None, 1.0),
        Keyframe::new([34.7307, 31.9056], EVENT_ZOOM, Some(WeddingCeremony), 1.0),
        Keyframe::new([34.7307, 31.9056], EVENT_ZOOM, Some(WeddingCeremony), 1.0),
    ];
    Journey { keyframes }
}

/// Marker appearance at a given zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub font_size: f64,
    pub stroke_width: f64,
    pub font_weight: u16,
    /// Label offset from the marker center.
    pub label_dx: f64,
}

impl MarkerStyle {
    pub fn for_scale(scale: f64, highlighted: bool) -> Self {
        let base_radius = (scale / 200.0).clamp(5.0, 10.0);
        let base_font = (scale / 150.0).clamp(11.0, 16.0);
        let (radius, font_size) = if highlighted {
            (base_radius * 1.5, base_font * 1.15)
        } else {
            (base_radius, base_font)
        };
        Self {
            radius,
            font_size,
            stroke_width: if highlighted { 3.0 } else { 2.0 },
            font_weight: if highlighted { 600 } else { 500 },
            label_dx: radius + 6.0,
        }
    }

    /// Radius while the pointer hovers an unhighlighted marker.
    pub fn hover_radius(scale: f64) -> f64 {
        (scale / 150.0).clamp(4.0, 8.0) * 1.4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{event_by_id, route_coordinates};

    fn kf(lon: f64, scale: f64, highlight: Option<EventId>, route: f64) -> Keyframe {
        Keyframe::new([lon, 0.0], scale, highlight, route)
    }

    fn three() -> Journey {
        Journey::new(vec![
            kf(0.0, 100.0, Some(EventId::Mairie), 0.0),
            kf(10.0, 200.0, None, 0.5),
            kf(20.0, 400.0, Some(EventId::BeachParty), 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_empty_and_bad_keyframes() {
        assert_eq!(Journey::new(vec![]), Err(JourneyError::Empty));
        assert_eq!(
            Journey::new(vec![kf(f64::NAN, 1.0, None, 0.0)]),
            Err(JourneyError::NonFinite(0))
        );
        assert!(matches!(
            Journey::new(vec![kf(0.0, 1.0, None, 0.0), kf(0.0, 0.0, None, 0.0)]),
            Err(JourneyError::InvalidScale { index: 1, .. })
        ));
    }

    #[test]
    fn endpoints_match_keyframes() {
        let j = three();
        let start = j.sample(0.0);
        assert_eq!(start.center, [0.0, 0.0]);
        assert_eq!(start.scale, 100.0);
        assert_eq!(start.highlight, Some(EventId::Mairie));
        assert_eq!(start.beat_index, 0);

        let end = j.sample(1.0);
        assert_eq!(end.center, [20.0, 0.0]);
        assert_eq!(end.scale, 400.0);
        assert_eq!(end.highlight, Some(EventId::BeachParty));
        assert_eq!(end.route_progress, 1.0);
        // Last beat index is clamped to N - 2.
        assert_eq!(end.beat_index, 1);
        assert_eq!(end.beat_progress, 1.0);
    }

    #[test]
    fn interpolates_linearly_inside_a_beat() {
        let j = three();
        let s = j.sample(0.25);
        assert_eq!(s.beat_index, 0);
        assert!((s.beat_progress - 0.5).abs() < 1e-12);
        assert!((s.center[0] - 5.0).abs() < 1e-12);
        assert!((s.scale - 150.0).abs() < 1e-12);
        assert!((s.route_progress - 0.25).abs() < 1e-12);
    }

    #[test]
    fn highlight_comes_from_the_closer_keyframe() {
        let j = three();
        assert_eq!(j.sample(0.2).highlight, Some(EventId::Mairie));
        assert_eq!(j.sample(0.3).highlight, None);
        assert_eq!(j.sample(0.7).highlight, None);
        assert_eq!(j.sample(0.8).highlight, Some(EventId::BeachParty));
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let j = three();
        assert_eq!(j.sample(-1.0), j.sample(0.0));
        assert_eq!(j.sample(3.0), j.sample(1.0));
        assert_eq!(j.sample(f64::NAN), j.sample(0.0));
    }

    #[test]
    fn sampling_is_idempotent() {
        let j = default_journey();
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            assert_eq!(j.sample(p), j.sample(p));
        }
    }

    #[test]
    fn continuous_between_samples() {
        let j = default_journey();
        let mut prev = j.sample(0.0);
        for i in 1..=10_000 {
            let cur = j.sample(i as f64 / 10_000.0);
            assert!((cur.scale - prev.scale).abs() < 5.0);
            assert!((cur.center[0] - prev.center[0]).abs() < 0.05);
            assert!((cur.route_progress - prev.route_progress).abs() < 0.01);
            prev = cur;
        }
    }

    #[test]
    fn single_keyframe_is_constant() {
        let j = Journey::new(vec![kf(3.0, 50.0, Some(EventId::Mairie), 0.2)]).unwrap();
        for p in [0.0, 0.5, 1.0] {
            let s = j.sample(p);
            assert_eq!(s.center, [3.0, 0.0]);
            assert_eq!(s.highlight, Some(EventId::Mairie));
        }
    }

    #[test]
    fn default_journey_shape() {
        let j = default_journey();
        assert_eq!(j.keyframes().len(), 14);
        assert_eq!(j.sample(0.0).highlight, Some(EventId::Mairie));
        assert_eq!(j.sample(1.0).highlight, Some(EventId::WeddingCeremony));
        // Route progress never goes backwards.
        for pair in j.keyframes().windows(2) {
            assert!(pair[1].route_progress >= pair[0].route_progress);
        }
        assert!(Journey::new(j.keyframes().to_vec()).is_ok());
    }

    #[test]
    fn partial_route_progression() {
        let coords = [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [20.0, 10.0]];
        assert_eq!(partial_route(&coords, 0.0), vec![[0.0, 0.0]]);
        assert_eq!(partial_route(&coords, 1.0), coords.to_vec());

        let half_first_leg = partial_route(&coords, 1.0 / 6.0);
        assert_eq!(half_first_leg.len(), 2);
        assert!((half_first_leg[1][0] - 5.0).abs() < 1e-9);

        let into_second = partial_route(&coords, 0.5);
        assert_eq!(into_second.len(), 3);
        assert!((into_second[2][1] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn route_ends_on_the_marker_during_each_hold() {
        let j = default_journey();
        let route = route_coordinates();
        let beats = (j.keyframes().len() - 1) as f64;
        // Middle of the hold beat on each event after Paris.
        for (beat, id) in [
            (4.5, EventId::WelcomeDinner),
            (8.5, EventId::BeachParty),
            (12.5, EventId::WeddingCeremony),
        ] {
            let cam = j.sample(beat / beats);
            assert_eq!(cam.highlight, Some(id));
            let drawn = partial_route(&route, cam.route_progress);
            assert_eq!(drawn.last(), Some(&event_by_id(id).coordinates), "{id}");
        }
    }

    #[test]
    fn partial_route_snaps_to_waypoints() {
        let coords = [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]];
        let almost = partial_route(&coords, 0.5 - 1e-12);
        assert_eq!(almost, vec![[0.0, 0.0], [10.0, 0.0]]);
        let just_past = partial_route(&coords, 1e-12);
        assert_eq!(just_past, vec![[0.0, 0.0]]);
    }

    #[test]
    fn partial_route_short_inputs() {
        assert!(partial_route(&[], 0.5).is_empty());
        assert_eq!(partial_route(&[[1.0, 2.0]], 0.5), vec![[1.0, 2.0]]);
    }

    #[test]
    fn marker_style_scales_with_zoom() {
        let far = MarkerStyle::for_scale(300.0, false);
        assert_eq!(far.radius, 5.0);
        assert_eq!(far.font_size, 11.0);
        let near = MarkerStyle::for_scale(4000.0, true);
        assert_eq!(near.radius, 15.0);
        assert!((near.font_size - 16.0 * 1.15).abs() < 1e-9);
        assert_eq!(near.font_weight, 600);
        assert_eq!(near.label_dx, 21.0);
        assert_eq!(MarkerStyle::hover_radius(4000.0), 8.0 * 1.4);
    }
}
