//! Viewport intersection observation
//!
//! `ViewportObserver` plays the role of the host's intersection watcher: it
//! tracks target regions against the current viewport and reports an
//! [`IntersectionEntry`] when a target is first attached and whenever its
//! visible fraction crosses the target's threshold.

use crate::reveal::DEFAULT_THRESHOLD;
use crate::scheduler::RevealId;
use clubsite_core::Rect;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

/// Errors raised when attaching a watcher
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObserveError {
    #[error("intersection observation is not supported by this host")]
    Unsupported,
}

/// A visibility report for one target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub id: RevealId,
    /// Visible fraction of the target (0.0 to 1.0)
    pub ratio: f32,
}

/// Bring a threshold into 0.0..=1.0; non-finite values use the default
pub fn normalize_threshold(threshold: f32) -> f32 {
    if threshold.is_finite() {
        threshold.clamp(0.0, 1.0)
    } else {
        DEFAULT_THRESHOLD
    }
}

/// Whether `fraction` counts as "entered" for `threshold`.
///
/// A zero threshold means any visible pixel counts. Out-of-range thresholds
/// are normalized first, so a fully visible region always qualifies.
pub fn meets_threshold(fraction: f32, threshold: f32) -> bool {
    let threshold = normalize_threshold(threshold);
    if threshold <= 0.0 {
        fraction > 0.0
    } else {
        fraction >= threshold
    }
}

#[derive(Clone, Debug)]
struct Target {
    rect: Rect,
    threshold: f32,
    last_ratio: f32,
}

/// Tracks regions against a scrolling viewport
#[derive(Debug)]
pub struct ViewportObserver {
    viewport: Rect,
    supported: bool,
    targets: FxHashMap<RevealId, Target>,
}

impl ViewportObserver {
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            supported: true,
            targets: FxHashMap::default(),
        }
    }

    /// An observer for a host without intersection support
    pub fn unsupported() -> Self {
        Self {
            viewport: Rect::default(),
            supported: false,
            targets: FxHashMap::default(),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Start watching a region. Returns the initial entry, as hosts deliver
    /// one report as soon as a watcher is attached.
    pub fn observe(
        &mut self,
        id: RevealId,
        rect: Rect,
        threshold: f32,
    ) -> Result<IntersectionEntry, ObserveError> {
        if !self.supported {
            return Err(ObserveError::Unsupported);
        }

        let ratio = rect.visible_fraction(&self.viewport);
        self.targets.insert(
            id,
            Target {
                rect,
                threshold,
                last_ratio: ratio,
            },
        );
        Ok(IntersectionEntry { id, ratio })
    }

    /// Stop watching a region. Safe to call more than once.
    pub fn unobserve(&mut self, id: RevealId) -> bool {
        self.targets.remove(&id).is_some()
    }

    pub fn is_observing(&self, id: RevealId) -> bool {
        self.targets.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Move or resize a watched region (after a layout change)
    pub fn update_target(&mut self, id: RevealId, rect: Rect) -> Option<IntersectionEntry> {
        let viewport = self.viewport;
        let target = self.targets.get_mut(&id)?;
        target.rect = rect;
        Self::check(id, target, &viewport)
    }

    /// Replace the viewport and collect threshold crossings
    pub fn set_viewport(&mut self, viewport: Rect) -> SmallVec<[IntersectionEntry; 8]> {
        self.viewport = viewport;
        let mut entries = SmallVec::new();
        for (id, target) in self.targets.iter_mut() {
            if let Some(entry) = Self::check(*id, target, &viewport) {
                entries.push(entry);
            }
        }
        entries
    }

    /// Scroll the viewport vertically to `y`, keeping its size
    pub fn scroll_to(&mut self, y: f32) -> SmallVec<[IntersectionEntry; 8]> {
        let viewport = Rect { y, ..self.viewport };
        self.set_viewport(viewport)
    }

    fn check(id: RevealId, target: &mut Target, viewport: &Rect) -> Option<IntersectionEntry> {
        let ratio = target.rect.visible_fraction(viewport);
        let was_in = meets_threshold(target.last_ratio, target.threshold);
        let is_in = meets_threshold(ratio, target.threshold);
        target.last_ratio = ratio;

        (was_in != is_in).then_some(IntersectionEntry { id, ratio })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<RevealId> {
        let mut map: SlotMap<RevealId, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn test_initial_entry_on_observe() {
        let id = ids(1)[0];
        let mut observer = ViewportObserver::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let entry = observer
            .observe(id, Rect::new(0.0, 50.0, 100.0, 100.0), 0.1)
            .unwrap();
        assert_eq!(entry.id, id);
        assert!((entry.ratio - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_reports_only_threshold_crossings() {
        let id = ids(1)[0];
        let mut observer = ViewportObserver::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        observer
            .observe(id, Rect::new(0.0, 200.0, 100.0, 100.0), 0.5)
            .unwrap();

        // 20% visible: still below threshold
        assert!(observer.scroll_to(120.0).is_empty());
        // 60% visible: crossing in
        let entries = observer.scroll_to(160.0);
        assert_eq!(entries.len(), 1);
        assert!((entries[0].ratio - 0.6).abs() < 1e-5);
        // 100% visible: no new crossing
        assert!(observer.scroll_to(200.0).is_empty());
        // back out: crossing out
        assert_eq!(observer.scroll_to(0.0).len(), 1);
    }

    #[test]
    fn test_unobserve_is_idempotent() {
        let id = ids(1)[0];
        let mut observer = ViewportObserver::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        observer.observe(id, Rect::new(0.0, 0.0, 10.0, 10.0), 0.1).unwrap();
        assert!(observer.unobserve(id));
        assert!(!observer.unobserve(id));
        assert!(observer.is_empty());
    }

    #[test]
    fn test_unsupported_host_rejects_observe() {
        let id = ids(1)[0];
        let mut observer = ViewportObserver::unsupported();
        assert_eq!(
            observer.observe(id, Rect::new(0.0, 0.0, 10.0, 10.0), 0.1),
            Err(ObserveError::Unsupported)
        );
    }

    #[test]
    fn test_zero_threshold_needs_some_overlap() {
        assert!(!meets_threshold(0.0, 0.0));
        assert!(meets_threshold(0.01, 0.0));
        assert!(meets_threshold(0.5, 0.5));
        assert!(!meets_threshold(0.49, 0.5));
    }

    #[test]
    fn test_out_of_range_thresholds_still_admit_full_view() {
        for threshold in [f32::NAN, f32::INFINITY, 1.5] {
            assert!(meets_threshold(1.0, threshold), "{threshold}");
        }
        assert!(meets_threshold(0.5, -3.0));
        assert!(!meets_threshold(0.05, f32::NAN));
        assert!(meets_threshold(0.1, f32::NAN));
    }
}
