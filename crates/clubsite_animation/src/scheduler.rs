//! Reveal scheduler
//!
//! Owns every mounted reveal binding, routes viewport changes through the
//! observer, and advances in-flight transitions each frame.

use crate::keyframe::KeyframeProperties;
use crate::observer::{IntersectionEntry, ViewportObserver};
use crate::reveal::{RevealBinding, RevealConfig, RevealPhase};
use clubsite_core::Rect;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to a mounted reveal region
    pub struct RevealId;
}

/// Drives all reveal bindings on a page
pub struct RevealScheduler {
    bindings: SlotMap<RevealId, RevealBinding>,
    observer: ViewportObserver,
}

impl RevealScheduler {
    pub fn new(viewport: Rect) -> Self {
        Self::with_observer(ViewportObserver::new(viewport))
    }

    pub fn with_observer(observer: ViewportObserver) -> Self {
        Self {
            bindings: SlotMap::with_key(),
            observer,
        }
    }

    /// Mount a region and start watching it.
    ///
    /// If the host cannot observe intersections the region is revealed
    /// immediately so that content is never left hidden.
    pub fn mount(&mut self, rect: Rect, config: RevealConfig) -> RevealId {
        let id = self.bindings.insert(RevealBinding::new(config));

        match self.observer.observe(id, rect, config.threshold) {
            Ok(entry) => {
                self.deliver(entry);
            }
            Err(err) => {
                tracing::warn!("{err}; revealing region immediately");
                if let Some(binding) = self.bindings.get_mut(id) {
                    binding.force_enter();
                }
            }
        }

        id
    }

    /// Unmount a region. Its watcher is detached whether or not it fired.
    pub fn unmount(&mut self, id: RevealId) -> Option<RevealBinding> {
        self.observer.unobserve(id);
        self.bindings.remove(id)
    }

    /// Move a mounted region (after a layout change)
    pub fn relayout(&mut self, id: RevealId, rect: Rect) -> bool {
        match self.observer.update_target(id, rect) {
            Some(entry) => self.deliver(entry),
            None => false,
        }
    }

    /// Replace the viewport. Returns the regions that started entering.
    pub fn set_viewport(&mut self, viewport: Rect) -> SmallVec<[RevealId; 4]> {
        let entries = self.observer.set_viewport(viewport);
        self.deliver_all(entries)
    }

    /// Scroll vertically to `y`. Returns the regions that started entering.
    pub fn scroll_to(&mut self, y: f32) -> SmallVec<[RevealId; 4]> {
        let entries = self.observer.scroll_to(y);
        self.deliver_all(entries)
    }

    /// Advance all transitions by `dt` seconds. Returns the regions that
    /// finished revealing during this frame.
    pub fn tick(&mut self, dt: f32) -> SmallVec<[RevealId; 4]> {
        let mut finished = SmallVec::new();
        for (id, binding) in self.bindings.iter_mut() {
            if binding.tick(dt) {
                finished.push(id);
            }
        }
        finished
    }

    pub fn binding(&self, id: RevealId) -> Option<&RevealBinding> {
        self.bindings.get(id)
    }

    pub fn phase(&self, id: RevealId) -> Option<RevealPhase> {
        self.bindings.get(id).map(|b| b.phase())
    }

    pub fn properties(&self, id: RevealId) -> Option<KeyframeProperties> {
        self.bindings.get(id).map(|b| b.properties())
    }

    /// Check if any reveal is mid-transition
    pub fn is_animating(&self) -> bool {
        self.bindings
            .iter()
            .any(|(_, b)| b.phase() == RevealPhase::Entering)
    }

    /// Number of regions still waiting on their watcher
    pub fn watched_count(&self) -> usize {
        self.observer.len()
    }

    pub fn is_watching(&self, id: RevealId) -> bool {
        self.observer.is_observing(id)
    }

    pub fn viewport(&self) -> Rect {
        self.observer.viewport()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RevealId, &RevealBinding)> {
        self.bindings.iter()
    }

    fn deliver_all(
        &mut self,
        entries: SmallVec<[IntersectionEntry; 8]>,
    ) -> SmallVec<[RevealId; 4]> {
        let mut entered = SmallVec::new();
        for entry in entries {
            if self.deliver(entry) {
                entered.push(entry.id);
            }
        }
        entered
    }

    /// Hand an entry to its binding; detach the watcher once it has fired
    fn deliver(&mut self, entry: IntersectionEntry) -> bool {
        let Some(binding) = self.bindings.get_mut(entry.id) else {
            self.observer.unobserve(entry.id);
            return false;
        };

        if binding.observe(entry.ratio) {
            self.observer.unobserve(entry.id);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::RevealPreset;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    #[test]
    fn test_region_in_view_at_mount_enters_immediately() {
        let mut scheduler = RevealScheduler::new(viewport());
        let id = scheduler.mount(Rect::new(0.0, 100.0, 400.0, 200.0), RevealConfig::default());
        assert_eq!(scheduler.phase(id), Some(RevealPhase::Entering));
        assert!(!scheduler.is_watching(id));
    }

    #[test]
    fn test_watcher_detached_after_first_entry() {
        let mut scheduler = RevealScheduler::new(viewport());
        let id = scheduler.mount(Rect::new(0.0, 2000.0, 400.0, 200.0), RevealConfig::default());
        assert!(scheduler.is_watching(id));

        let entered = scheduler.scroll_to(1500.0);
        assert_eq!(entered.as_slice(), &[id]);
        assert_eq!(scheduler.watched_count(), 0);
    }

    #[test]
    fn test_unmount_detaches_watcher() {
        let mut scheduler = RevealScheduler::new(viewport());
        let id = scheduler.mount(Rect::new(0.0, 2000.0, 400.0, 200.0), RevealConfig::default());
        assert!(scheduler.unmount(id).is_some());
        assert_eq!(scheduler.watched_count(), 0);
        assert!(scheduler.unmount(id).is_none());
        assert!(scheduler.scroll_to(1800.0).is_empty());
    }

    #[test]
    fn test_unsupported_host_fails_open() {
        let mut scheduler = RevealScheduler::with_observer(ViewportObserver::unsupported());
        let id = scheduler.mount(
            Rect::new(0.0, 5000.0, 10.0, 10.0),
            RevealConfig::new(RevealPreset::Fade),
        );
        assert_eq!(scheduler.phase(id), Some(RevealPhase::Entering));

        for _ in 0..60 {
            scheduler.tick(1.0 / 60.0);
        }
        assert_eq!(scheduler.phase(id), Some(RevealPhase::Visible));
    }

    #[test]
    fn test_tick_reports_finished_regions() {
        let mut scheduler = RevealScheduler::new(viewport());
        let id = scheduler.mount(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            RevealConfig::new(RevealPreset::Zoom).duration(0.2),
        );
        assert!(scheduler.is_animating());

        let finished: Vec<RevealId> = (0..30).flat_map(|_| scheduler.tick(1.0 / 60.0)).collect();
        assert_eq!(finished, vec![id]);
        assert!(!scheduler.is_animating());
    }

    #[test]
    fn test_relayout_into_view_enters_once() {
        let mut scheduler = RevealScheduler::new(viewport());
        let below = Rect::new(0.0, 1200.0, 400.0, 200.0);
        let id = scheduler.mount(below, RevealConfig::default());
        assert_eq!(scheduler.phase(id), Some(RevealPhase::Hidden));

        // Content above collapsed; the region now sits inside the viewport
        let moved = below.offset_y(-900.0);
        assert!(scheduler.relayout(id, moved));
        assert_eq!(scheduler.phase(id), Some(RevealPhase::Entering));
        assert!(!scheduler.is_watching(id));

        assert!(!scheduler.relayout(id, below));
        assert!(!scheduler.relayout(id, moved));
        assert!(scheduler.set_viewport(viewport()).is_empty());
    }

    #[test]
    fn test_invalid_threshold_does_not_hide_visible_region() {
        let mut scheduler = RevealScheduler::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let region = Rect::new(25.0, 25.0, 50.0, 50.0);

        let nan = scheduler.mount(region, RevealConfig::default().threshold(f32::NAN));
        let raw = scheduler.mount(
            region,
            RevealConfig {
                threshold: 1.5,
                ..RevealConfig::default()
            },
        );
        assert_eq!(scheduler.phase(nan), Some(RevealPhase::Entering));
        assert_eq!(scheduler.phase(raw), Some(RevealPhase::Entering));
    }
}
