// Falling star parameters and the bookkeeping for stars awaiting removal.

use crate::constants::*;
use fnv::FnvHashMap;
use rand::Rng;

/// Randomized look of one star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarParams {
    pub size_px: f64,
    pub duration_s: f64,
    pub left_pct: f64,
    pub top_pct: f64,
}

impl StarParams {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: STAR_BASE_SIZE_PX + rng.gen_range(0.0..STAR_SIZE_JITTER_PX),
            duration_s: STAR_BASE_DURATION_S + rng.gen_range(0.0..STAR_DURATION_JITTER_S),
            left_pct: rng.gen_range(0.0..STAR_LEFT_MAX_PCT),
            top_pct: rng.gen_range(0.0..STAR_TOP_MAX_PCT),
        }
    }

    /// Inline style properties as `(name, value)` pairs.
    pub fn style(&self) -> [(&'static str, String); 4] {
        [
            ("left", format!("{}%", self.left_pct)),
            ("top", format!("{}%", self.top_pct)),
            ("font-size", format!("{}px", self.size_px)),
            ("animation-duration", format!("{}s", self.duration_s)),
        ]
    }
}

/// Identifier handed out per spawned star.
pub type StarId = u64;

/// Stars that are on screen and still waiting for their removal timer.
///
/// The spawner inserts each star with whatever handle it needs to cancel the
/// timer; the timer callback takes it back out. Anything still present at
/// teardown is drained and cancelled.
#[derive(Debug)]
pub struct PendingStars<T> {
    next_id: StarId,
    live: FnvHashMap<StarId, T>,
}

impl<T> Default for PendingStars<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            live: FnvHashMap::default(),
        }
    }
}

impl<T> PendingStars<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve an id for a star about to be created.
    pub fn reserve(&mut self) -> StarId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, id: StarId, entry: T) {
        self.live.insert(id, entry);
    }

    /// Remove a star whose timer fired. `None` if it was already cancelled.
    pub fn take(&mut self, id: StarId) -> Option<T> {
        self.live.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Empty the registry, yielding every star still on screen.
    pub fn drain(&mut self) -> Vec<(StarId, T)> {
        self.live.drain().collect()
    }
}

/// Spawn period vs lifetime gives the steady-state number of stars on screen.
pub const fn steady_state_stars() -> i32 {
    STAR_LIFETIME_MS / STAR_SPAWN_INTERVAL_MS
}
