//! Spherical geometry and the two map projections used by the journey view.
//!
//! Coordinates are `[longitude, latitude]` in degrees. Projected points are in
//! SVG user units with y growing downwards.

use crate::events::LonLat;
use std::f64::consts::FRAC_PI_2;
use std::fmt::Write as _;

/// Max angular step (degrees) between consecutive points after densifying.
const DENSIFY_STEP_DEG: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A map projection from the sphere to the SVG plane.
pub trait Projection {
    /// Project a point, or `None` if it is clipped (e.g. far side of a globe).
    fn project(&self, p: LonLat) -> Option<Point>;

    /// Project a point, moving clipped points onto the clip boundary.
    /// Used to close polygon rings that cross the horizon.
    fn project_to_limb(&self, p: LonLat) -> Point;
}

/// Orthographic (globe) projection with a 90° clip angle.
///
/// `center` is the point facing the viewer; `translate` is where it lands on
/// screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthographic {
    pub center: LonLat,
    pub scale: f64,
    pub translate: Point,
}

impl Orthographic {
    pub fn new(center: LonLat, scale: f64, translate: Point) -> Self {
        Self { center, scale, translate }
    }

    /// Unit-sphere plane coordinates and the cosine of the angular distance
    /// from the center.
    fn raw(&self, p: LonLat) -> (f64, f64, f64) {
        let (lam, phi) = (p[0].to_radians(), p[1].to_radians());
        let (lam0, phi0) = (self.center[0].to_radians(), self.center[1].to_radians());
        let dl = lam - lam0;
        let cos_c = phi0.sin() * phi.sin() + phi0.cos() * phi.cos() * dl.cos();
        let x = phi.cos() * dl.sin();
        let y = phi0.cos() * phi.sin() - phi0.sin() * phi.cos() * dl.cos();
        (x, y, cos_c)
    }

    fn to_screen(&self, x: f64, y: f64) -> Point {
        Point::new(self.translate.x + self.scale * x, self.translate.y - self.scale * y)
    }

    pub fn is_visible(&self, p: LonLat) -> bool {
        geo_distance(p, self.center) < FRAC_PI_2
    }
}

impl Projection for Orthographic {
    fn project(&self, p: LonLat) -> Option<Point> {
        let (x, y, cos_c) = self.raw(p);
        if cos_c < 0.0 {
            return None;
        }
        Some(self.to_screen(x, y))
    }

    fn project_to_limb(&self, p: LonLat) -> Point {
        let (x, y, cos_c) = self.raw(p);
        if cos_c >= 0.0 {
            return self.to_screen(x, y);
        }
        let len = x.hypot(y);
        if len < 1e-12 {
            // Antipode of the center: any limb point works.
            return self.to_screen(0.0, 1.0);
        }
        self.to_screen(x / len, y / len)
    }
}

/// Natural Earth projection, used for the flat reduced-motion map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NaturalEarth {
    pub center: LonLat,
    pub scale: f64,
    pub translate: Point,
}

impl NaturalEarth {
    pub fn new(center: LonLat, scale: f64, translate: Point) -> Self {
        Self { center, scale, translate }
    }

    fn raw(lam: f64, phi: f64) -> (f64, f64) {
        let phi2 = phi * phi;
        let phi4 = phi2 * phi2;
        let x = lam
            * (0.8707 - 0.131979 * phi2
                + phi4 * (-0.013791 + phi4 * (0.003971 * phi2 - 0.001529 * phi4)));
        let y = phi
            * (1.007226
                + phi2 * (0.015085 + phi4 * (-0.044475 + 0.028874 * phi2 - 0.005916 * phi4)));
        (x, y)
    }
}

impl Projection for NaturalEarth {
    fn project(&self, p: LonLat) -> Option<Point> {
        Some(self.project_to_limb(p))
    }

    fn project_to_limb(&self, p: LonLat) -> Point {
        let (x, y) = Self::raw(p[0].to_radians(), p[1].to_radians());
        let (cx, cy) = Self::raw(self.center[0].to_radians(), self.center[1].to_radians());
        Point::new(
            self.translate.x + self.scale * (x - cx),
            self.translate.y - self.scale * (y - cy),
        )
    }
}

/// Great-circle angle between two points, in radians (haversine form).
pub fn geo_distance(a: LonLat, b: LonLat) -> f64 {
    let (lam_a, phi_a) = (a[0].to_radians(), a[1].to_radians());
    let (lam_b, phi_b) = (b[0].to_radians(), b[1].to_radians());
    let s_phi = ((phi_b - phi_a) / 2.0).sin();
    let s_lam = ((lam_b - lam_a) / 2.0).sin();
    let h = s_phi * s_phi + phi_a.cos() * phi_b.cos() * s_lam * s_lam;
    2.0 * h.sqrt().min(1.0).asin()
}

/// Point at fraction `t` along the great circle from `a` to `b`.
pub fn interpolate_great_circle(a: LonLat, b: LonLat, t: f64) -> LonLat {
    let d = geo_distance(a, b);
    if d < 1e-12 {
        return a;
    }
    let k = d.sin();
    if k.abs() < 1e-12 {
        // Antipodal: the great circle is undefined, fall back to planar.
        return [crate::lerp(a[0], b[0], t), crate::lerp(a[1], b[1], t)];
    }
    let wa = ((1.0 - t) * d).sin() / k;
    let wb = (t * d).sin() / k;
    let (lam_a, phi_a) = (a[0].to_radians(), a[1].to_radians());
    let (lam_b, phi_b) = (b[0].to_radians(), b[1].to_radians());
    let x = wa * phi_a.cos() * lam_a.cos() + wb * phi_b.cos() * lam_b.cos();
    let y = wa * phi_a.cos() * lam_a.sin() + wb * phi_b.cos() * lam_b.sin();
    let z = wa * phi_a.sin() + wb * phi_b.sin();
    [y.atan2(x).to_degrees(), z.atan2(x.hypot(y)).to_degrees()]
}

/// Insert great-circle points so no segment spans more than a couple of
/// degrees.
pub fn densify(coords: &[LonLat]) -> Vec<LonLat> {
    let mut out = Vec::with_capacity(coords.len());
    for pair in coords.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let steps = (geo_distance(a, b).to_degrees() / DENSIFY_STEP_DEG).ceil().max(1.0) as usize;
        out.push(a);
        out.extend((1..steps).map(|i| interpolate_great_circle(a, b, i as f64 / steps as f64)));
    }
    if let Some(&last) = coords.last() {
        out.push(last);
    }
    out
}

/// Meridians and parallels, as line strings.
///
/// Parallels run every `step` degrees within ±80°. Meridians run every
/// `step` degrees to ±80°, except multiples of 90° which reach the poles.
pub fn graticule(step: u32, precision: f64) -> Vec<Vec<LonLat>> {
    let step = step.max(1) as i32;
    let samples = |from: f64, to: f64| -> Vec<f64> {
        let n = ((to - from) / precision).ceil().max(1.0) as usize;
        (0..=n).map(|i| from + (to - from) * i as f64 / n as f64).collect()
    };

    let mut lines = Vec::new();
    for lon in (-180..180).step_by(step as usize) {
        let extent = if lon % 90 == 0 { 90.0 } else { 80.0 };
        lines.push(
            samples(-extent, extent)
                .into_iter()
                .map(|lat| [lon as f64, lat])
                .collect(),
        );
    }
    for lat in (-80..=80).filter(|lat| lat % step == 0) {
        lines.push(
            samples(-180.0, 180.0)
                .into_iter()
                .map(|lon| [lon, lat as f64])
                .collect(),
        );
    }
    lines
}

fn push_point(d: &mut String, cmd: char, p: Point) {
    let _ = write!(d, "{}{:.1},{:.1}", cmd, p.x, p.y);
}

/// SVG path data for a line string. Clipped points break the line.
pub fn line_path<P: Projection>(proj: &P, coords: &[LonLat]) -> String {
    let mut d = String::new();
    let mut run: Vec<Point> = Vec::new();
    let flush = |run: &mut Vec<Point>, d: &mut String| {
        if run.len() >= 2 {
            push_point(d, 'M', run[0]);
            for &p in &run[1..] {
                push_point(d, 'L', p);
            }
        }
        run.clear();
    };
    for &c in coords {
        match proj.project(c) {
            Some(p) => run.push(p),
            None => flush(&mut run, &mut d),
        }
    }
    flush(&mut run, &mut d);
    d
}

/// SVG path data for a polygon (outer ring plus holes).
///
/// Rings with no visible vertex are dropped; partially visible rings are
/// closed along the clip boundary.
pub fn polygon_path<P: Projection>(proj: &P, rings: &[Vec<LonLat>]) -> String {
    let mut d = String::new();
    for ring in rings {
        if ring.len() < 3 || !ring.iter().any(|&c| proj.project(c).is_some()) {
            continue;
        }
        for (i, &c) in ring.iter().enumerate() {
            push_point(&mut d, if i == 0 { 'M' } else { 'L' }, proj.project_to_limb(c));
        }
        d.push('Z');
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn globe(center: LonLat) -> Orthographic {
        Orthographic::new(center, 100.0, Point::new(400.0, 400.0))
    }

    #[test]
    fn center_projects_to_translate() {
        let proj = globe([34.77, 32.06]);
        let p = proj.project([34.77, 32.06]).unwrap();
        assert!((p.x - 400.0).abs() < EPS);
        assert!((p.y - 400.0).abs() < EPS);
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let proj = globe([0.0, 0.0]);
        let north = proj.project([0.0, 30.0]).unwrap();
        let east = proj.project([30.0, 0.0]).unwrap();
        assert!(north.y < 400.0);
        assert!((north.x - 400.0).abs() < EPS);
        assert!(east.x > 400.0);
        assert!((east.x - 450.0).abs() < EPS); // sin(30°) * 100
    }

    #[test]
    fn far_hemisphere_is_clipped() {
        let proj = globe([0.0, 0.0]);
        assert!(proj.project([180.0, 0.0]).is_none());
        assert!(proj.project([120.0, 10.0]).is_none());
        assert!(!proj.is_visible([120.0, 10.0]));
        assert!(proj.is_visible([80.0, 0.0]));
    }

    #[test]
    fn limb_projection_lands_on_the_horizon() {
        let proj = globe([0.0, 0.0]);
        let p = proj.project_to_limb([120.0, 0.0]);
        let r = (p.x - 400.0).hypot(p.y - 400.0);
        assert!((r - 100.0).abs() < EPS);
        assert!(p.x > 400.0);
    }

    #[test]
    fn distance_paris_tel_aviv() {
        let d = geo_distance([2.3522, 48.8566], [34.7818, 32.0853]);
        let km = d * 6371.0;
        assert!((km - 3280.0).abs() < 40.0, "got {km}");
        assert_eq!(geo_distance([10.0, 10.0], [10.0, 10.0]), 0.0);
    }

    #[test]
    fn great_circle_interpolation_endpoints_and_midpoint() {
        let a = [0.0, 0.0];
        let b = [90.0, 0.0];
        let start = interpolate_great_circle(a, b, 0.0);
        let end = interpolate_great_circle(a, b, 1.0);
        let mid = interpolate_great_circle(a, b, 0.5);
        assert!((start[0] - 0.0).abs() < EPS && (start[1]).abs() < EPS);
        assert!((end[0] - 90.0).abs() < EPS && (end[1]).abs() < EPS);
        assert!((mid[0] - 45.0).abs() < EPS && (mid[1]).abs() < EPS);
    }

    #[test]
    fn densify_bounds_segment_length() {
        let pts = densify(&[[2.35, 48.86], [34.77, 32.06]]);
        assert!(pts.len() > 10);
        assert_eq!(pts.first(), Some(&[2.35, 48.86]));
        assert_eq!(pts.last(), Some(&[34.77, 32.06]));
        for pair in pts.windows(2) {
            assert!(geo_distance(pair[0], pair[1]).to_degrees() <= DENSIFY_STEP_DEG + EPS);
        }
    }

    #[test]
    fn graticule_has_expected_lines() {
        let lines = graticule(10, 2.5);
        // 36 meridians + 17 parallels (-80..=80)
        assert_eq!(lines.len(), 36 + 17);
        let prime = &lines[18];
        assert_eq!(prime[0], [0.0, -90.0]);
        assert_eq!(*prime.last().unwrap(), [0.0, 90.0]);
        let ten_east = &lines[19];
        assert_eq!(ten_east[0], [10.0, -80.0]);
    }

    #[test]
    fn line_path_breaks_at_clipped_points() {
        let proj = globe([0.0, 0.0]);
        let d = line_path(
            &proj,
            &[[0.0, 0.0], [10.0, 0.0], [170.0, 0.0], [20.0, 5.0], [30.0, 5.0]],
        );
        assert_eq!(d.matches('M').count(), 2);
        assert!(d.starts_with("M400.0,400.0L"));
    }

    #[test]
    fn line_path_single_visible_point_draws_nothing() {
        let proj = globe([0.0, 0.0]);
        assert_eq!(line_path(&proj, &[[0.0, 0.0]]), "");
    }

    #[test]
    fn polygon_path_skips_hidden_rings() {
        let proj = globe([0.0, 0.0]);
        let front = vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 0.0]];
        let back = vec![[170.0, 0.0], [175.0, 0.0], [175.0, 5.0], [170.0, 0.0]];
        let d = polygon_path(&proj, &[front, back]);
        assert_eq!(d.matches('M').count(), 1);
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn natural_earth_centers_on_translate() {
        let proj = NaturalEarth::new([20.0, 38.0], 650.0, Point::new(450.0, 250.0));
        let p = proj.project([20.0, 38.0]).unwrap();
        assert!((p.x - 450.0).abs() < EPS);
        assert!((p.y - 250.0).abs() < EPS);
        let paris = proj.project([2.35, 48.86]).unwrap();
        let tel_aviv = proj.project([34.77, 32.06]).unwrap();
        assert!(paris.x < tel_aviv.x);
        assert!(paris.y < tel_aviv.y);
    }
}
