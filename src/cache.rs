//! Thread-local cache for projected land outlines.
//!
//! Projecting every land ring is the most expensive part of a globe frame,
//! and scrolling back and forth revisits the same camera positions. Paths are
//! stored keyed by a quantized camera so nearby frames share one entry.
//!
//! # Cache Key Structure
//! - `lon`, `lat`: Camera center in hundredths of a degree
//! - `scale`: Projection scale rounded to the nearest unit
//!
//! # Cache Value Structure
//! - `Rc<Vec<String>>`: One SVG path per land feature, in data order

use sitemariage::geo::{polygon_path, Orthographic, Point};
use sitemariage::land::LandFeature;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Cache key: (lon × 100, lat × 100, scale)
pub type CacheKey = (i32, i32, u32);

/// Cache value: projected path per feature
pub type CacheValue = Rc<Vec<String>>;

/// Entries kept before the store is flushed.
pub const CACHE_CAPACITY: usize = 512;

thread_local! {
    /// Global cache that survives component lifetimes.
    pub static CACHE_STORE: RefCell<HashMap<CacheKey, CacheValue>> =
        RefCell::new(HashMap::with_capacity(CACHE_CAPACITY));
}

pub fn cache_key(center: [f64; 2], scale: f64) -> CacheKey {
    (
        (center[0] * 100.0).round() as i32,
        (center[1] * 100.0).round() as i32,
        scale.round().max(0.0) as u32,
    )
}

/// Land paths for the orthographic camera at `center`/`scale`, projected on
/// first request.
pub fn land_paths(
    features: &[LandFeature],
    center: [f64; 2],
    scale: f64,
    translate: Point,
) -> CacheValue {
    let key = cache_key(center, scale);
    if let Some(hit) = CACHE_STORE.with(|c| c.borrow().get(&key).cloned()) {
        return hit;
    }

    // Project from the quantized camera so every frame sharing the key draws
    // the same outline.
    let proj = Orthographic::new(
        [key.0 as f64 / 100.0, key.1 as f64 / 100.0],
        key.2 as f64,
        translate,
    );
    let paths: Vec<String> = features
        .iter()
        .map(|f| {
            f.polygons
                .iter()
                .map(|rings| polygon_path(&proj, rings))
                .collect::<String>()
        })
        .collect();
    let value = Rc::new(paths);

    CACHE_STORE.with(|c| {
        let mut store = c.borrow_mut();
        if store.len() >= CACHE_CAPACITY {
            log::debug!("land path cache full ({} entries), flushing", store.len());
            store.clear();
        }
        store.insert(key, value.clone());
    });
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_cameras_share_a_key() {
        assert_eq!(cache_key([34.781, 32.081], 4000.2), cache_key([34.7809, 32.0812], 3999.8));
        assert_ne!(cache_key([34.78, 32.08], 4000.0), cache_key([34.79, 32.08], 4000.0));
    }

    #[test]
    fn second_lookup_hits_the_cache() {
        let features = sitemariage::land::land().unwrap();
        let t = Point::new(400.0, 400.0);
        let a = land_paths(features, [20.0, 38.0], 300.0, t);
        let b = land_paths(features, [20.0, 38.0], 300.0, t);
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(a.len(), features.len());
        // Europe faces the camera, so the mainland is drawn.
        assert!(a[0].starts_with('M'));
    }
}
