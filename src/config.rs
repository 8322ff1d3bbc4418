//! Application-level configuration constants.

// RSVP backend
/// Apps Script web-app URL, baked in at build time via `RSVP_ENDPOINT_URL`.
pub const RSVP_ENDPOINT: &str = match option_env!("RSVP_ENDPOINT_URL") {
    Some(url) => url,
    None => RSVP_ENDPOINT_PLACEHOLDER,
};
pub const RSVP_ENDPOINT_PLACEHOLDER: &str = "PASTE_YOUR_GAS_URL_HERE";
pub const RSVP_TIMEOUT_MS: u32 = 10_000;

/// The endpoint, unless the build left the placeholder in place.
pub fn rsvp_endpoint() -> Option<&'static str> {
    let url = RSVP_ENDPOINT.trim();
    if url.is_empty() || url == RSVP_ENDPOINT_PLACEHOLDER || !url.starts_with("https://") {
        None
    } else {
        Some(url)
    }
}

// UI Behavior
pub const COUNTDOWN_REFRESH_MS: u32 = 60 * 60 * 1000;
pub const LANG_ANNOUNCE_CLEAR_MS: u32 = 3_000;
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Globe
pub const GLOBE_SIZE: f64 = 800.0;
pub const GRATICULE_STEP_DEG: u32 = 10;
pub const GRATICULE_PRECISION_DEG: f64 = 2.5;

// Static fallback map
pub const MAP_WIDTH: f64 = 900.0;
pub const MAP_HEIGHT: f64 = 500.0;
pub const STATIC_MAP_CENTER: [f64; 2] = [20.0, 38.0];
pub const STATIC_MAP_SCALE: f64 = 650.0;

// Travel section
pub const LUT_STEPS: usize = 200;

// Palette
pub const OCEAN_COLOR: &str = "#EDE5D4";
pub const LAND_COLOR: &str = "#F5ECD7";
pub const LAND_STROKE: &str = "rgba(107, 124, 69, 0.3)";
pub const GRATICULE_STROKE: &str = "rgba(107, 124, 69, 0.08)";
pub const ROUTE_COLOR: &str = "#C1513A";
pub const MARKER_FILL: &str = "#E8B84B";
pub const MARKER_STROKE: &str = "#C1513A";
pub const MARKER_ACTIVE_FILL: &str = "#C1513A";
pub const MARKER_ACTIVE_STROKE: &str = "#E8B84B";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_endpoint_is_not_configured() {
        if RSVP_ENDPOINT == RSVP_ENDPOINT_PLACEHOLDER {
            assert_eq!(rsvp_endpoint(), None);
        }
    }
}
