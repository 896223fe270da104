//! Integration tests for scroll-triggered reveals
//!
//! These tests drive the scheduler the way a page does: mount regions laid
//! out down a page, scroll the viewport, and tick frames.

use clubsite_animation::{
    RevealConfig, RevealPhase, RevealPreset, RevealScheduler, StaggerConfig,
};
use clubsite_core::Rect;
use pretty_assertions::assert_eq;

const FRAME: f32 = 1.0 / 60.0;

fn run(scheduler: &mut RevealScheduler, seconds: f32) {
    let frames = (seconds / FRAME).ceil() as usize;
    for _ in 0..frames {
        scheduler.tick(FRAME);
    }
}

/// Scrolling a revealed region out and back in leaves it visible
#[test]
fn test_scroll_out_and_back_does_not_retrigger() {
    let mut scheduler = RevealScheduler::new(Rect::new(0.0, 0.0, 1280.0, 720.0));
    let hero = scheduler.mount(
        Rect::new(0.0, 1000.0, 1280.0, 400.0),
        RevealConfig::new(RevealPreset::FadeUp),
    );

    assert_eq!(scheduler.scroll_to(900.0).len(), 1);
    run(&mut scheduler, 2.0);
    assert_eq!(scheduler.phase(hero), Some(RevealPhase::Visible));

    for y in [0.0, 900.0, 0.0, 1200.0, 0.0] {
        assert!(scheduler.scroll_to(y).is_empty());
        run(&mut scheduler, 0.2);
        assert_eq!(scheduler.phase(hero), Some(RevealPhase::Visible));
        assert_eq!(scheduler.properties(hero), Some(RevealPreset::FadeUp.visible()));
    }
}

/// A region crossing 20%, 40%, then 60% visibility with a 0.5 threshold
/// enters exactly once, on the third step
#[test]
fn test_threshold_sequence_fires_on_third_observation() {
    let mut scheduler = RevealScheduler::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    let id = scheduler.mount(
        Rect::new(0.0, 200.0, 100.0, 100.0),
        RevealConfig::default().threshold(0.5),
    );

    let fired: Vec<usize> = [120.0, 140.0, 160.0, 180.0, 200.0]
        .iter()
        .map(|y| scheduler.scroll_to(*y).len())
        .collect();

    assert_eq!(fired, vec![0, 0, 1, 0, 0]);
    assert_eq!(scheduler.phase(id), Some(RevealPhase::Entering));
}

/// Each item of a staggered list starts `0.1 * index` seconds after entry
#[test]
fn test_staggered_list_reveals_in_order() {
    let mut scheduler = RevealScheduler::new(Rect::new(0.0, 0.0, 1280.0, 720.0));
    let stagger = StaggerConfig::default();
    let total = 6;

    let ids: Vec<_> = (0..total)
        .map(|k| {
            let config = stagger.apply(RevealConfig::new(RevealPreset::Fade), k, total);
            assert!((config.delay - 0.1 * k as f32).abs() < 1e-6);
            scheduler.mount(Rect::new(k as f32 * 200.0, 2000.0, 180.0, 240.0), config)
        })
        .collect();

    // The whole row enters together
    assert_eq!(scheduler.scroll_to(1600.0).len(), total);

    // After 0.25s only the first three items have started fading in
    run(&mut scheduler, 0.25);
    let started: Vec<bool> = ids
        .iter()
        .map(|id| scheduler.properties(*id).unwrap().resolved_opacity() > 0.0)
        .collect();
    assert_eq!(started, vec![true, true, true, false, false, false]);

    run(&mut scheduler, 1.5);
    assert!(ids
        .iter()
        .all(|id| scheduler.phase(*id) == Some(RevealPhase::Visible)));
}

/// Unknown preset names render with the fade-up states
#[test]
fn test_unknown_preset_renders_as_fade_up() {
    let mut scheduler = RevealScheduler::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    let id = scheduler.mount(Rect::new(0.0, 900.0, 100.0, 100.0), RevealConfig::named("spin"));

    assert_eq!(scheduler.properties(id), Some(RevealPreset::FadeUp.hidden()));
    scheduler.scroll_to(500.0);
    run(&mut scheduler, 3.0);
    assert_eq!(scheduler.properties(id), Some(RevealPreset::FadeUp.visible()));
}

/// Remounting (a new route) gives a fresh latch
#[test]
fn test_remount_gets_fresh_latch() {
    let mut scheduler = RevealScheduler::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    let region = Rect::new(0.0, 100.0, 100.0, 100.0);

    let first = scheduler.mount(region, RevealConfig::default());
    run(&mut scheduler, 3.0);
    assert_eq!(scheduler.phase(first), Some(RevealPhase::Visible));
    scheduler.unmount(first);

    scheduler.scroll_to(2000.0);
    let second = scheduler.mount(region, RevealConfig::default());
    assert_eq!(scheduler.phase(second), Some(RevealPhase::Hidden));
    assert_eq!(scheduler.scroll_to(0.0).as_slice(), &[second]);
}
