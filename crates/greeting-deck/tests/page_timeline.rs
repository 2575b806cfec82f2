//! End-to-end page behavior on the virtual clock.

use greeting_deck::{
    strip_width, Deck, PageSession, PlayTrigger, PlaybackOutcome, PlaybackState, ScrollDirection,
    TrackId, SPARKLE_COUNT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const VIEWPORT: f64 = 1280.0;

fn mount(seed: u64) -> PageSession {
    PageSession::mount(Deck::birthday(), VIEWPORT, true, &mut StdRng::seed_from_u64(seed))
}

// ----------------------------------------------------------------------------
// Timers
// ----------------------------------------------------------------------------

#[test]
fn test_overlay_appears_at_one_second() {
    for seed in 0..5 {
        let mut page = mount(seed);
        page.advance(999);
        assert!(!page.state().overlay.is_visible());

        page.advance(1);
        assert!(page.state().overlay.is_visible());
    }
}

#[test]
fn test_dismissed_overlay_never_returns() {
    let mut page = mount(0);
    page.advance(1500);
    page.dismiss_overlay();

    page.advance(60_000);
    assert!(!page.state().overlay.is_visible());
}

#[test]
fn test_highlight_index_counts_ticks_modulo_deck() {
    let mut page = mount(0);
    for k in 0..12u64 {
        assert_eq!(page.state().highlight.current(), (k % 5) as usize);
        page.advance(3000);
    }
}

#[test]
fn test_idle_for_three_seconds() {
    let mut page = mount(0);
    page.advance(3000);

    let state = page.state();
    assert_eq!(state.highlight.current(), 1);
    assert!(state.overlay.is_visible());
    assert!(state.carousel.offset() > 0.0);
    assert_eq!(state.carousel.offset(), 100.0);
}

// ----------------------------------------------------------------------------
// Carousel
// ----------------------------------------------------------------------------

#[test]
fn test_hovering_freezes_auto_scroll() {
    let mut page = mount(0);
    page.advance(300);
    let frozen = page.state().carousel.offset();

    page.set_hovering(true);
    page.advance(120_000);
    assert_eq!(page.state().carousel.offset(), frozen);

    page.set_hovering(false);
    page.advance(30);
    assert_eq!(page.state().carousel.offset(), frozen + 1.0);
}

#[test]
fn test_auto_scroll_wraps_to_zero() {
    let mut page = mount(0);
    let max = page.state().carousel.max_offset();
    let ticks_to_end = max as u64;

    page.advance((ticks_to_end - 1) * 30);
    assert_eq!(page.state().carousel.offset(), max - 1.0);

    page.advance(30);
    assert_eq!(page.state().carousel.offset(), 0.0);

    page.advance(30);
    assert_eq!(page.state().carousel.offset(), 1.0);
}

// ----------------------------------------------------------------------------
// Audio
// ----------------------------------------------------------------------------

#[test]
fn test_clicking_a_copy_plays_the_original_track() {
    let mut page = mount(0);
    page.click_card(12);

    let last = page.play_requests().last().unwrap();
    assert_eq!(last.trigger, PlayTrigger::CardClick);
    assert_eq!(last.track.path, "happybirthday3.mp3");
    assert_eq!(page.state().audio.bound_track(), Some(TrackId(3)));
}

#[test]
fn test_autoplay_targets_first_track() {
    let page = mount(0);
    let first = &page.play_requests()[0];
    assert_eq!(first.trigger, PlayTrigger::Autoplay);
    assert_eq!(first.track.id, TrackId(1));
}

#[test]
fn test_manual_scroll_while_hovering() {
    let mut page = mount(0);
    page.set_hovering(true);
    page.scroll(ScrollDirection::Right);
    page.scroll(ScrollDirection::Right);
    page.advance(500);
    assert!((page.state().carousel.offset() - 800.0).abs() < 1e-9);

    page.scroll(ScrollDirection::Left);
    page.advance(500);
    assert!((page.state().carousel.offset() - 400.0).abs() < 1e-9);
}

// ----------------------------------------------------------------------------
// Lifecycle
// ----------------------------------------------------------------------------

#[test]
fn test_sparkle_field_is_fixed_per_mount() {
    let mut page = mount(11);
    let field = page.state().sparkles.clone();
    assert_eq!(field.len(), SPARKLE_COUNT);
    assert!(field
        .iter()
        .all(|s| (0.0..100.0).contains(&s.left_pct) && (0.0..100.0).contains(&s.top_pct)));

    page.advance(30_000);
    assert_eq!(page.state().sparkles, field);
}

#[test]
fn test_clicks_after_unmount_are_ignored() {
    let mut page = mount(0);
    page.unmount();
    page.click_card(3);
    assert_eq!(page.play_requests().len(), 1);
    assert!(!page.is_mounted());
}

#[test]
fn test_widened_window_moves_wrap_point() {
    let mut page = mount(0);
    let old_max = page.state().carousel.max_offset();
    page.advance(300);

    page.resize(VIEWPORT + 640.0);
    let real_max = old_max - 640.0;
    let ticks = real_max as u64 - 10;
    for _ in 0..ticks - 1 {
        page.advance(30);
        assert!(page.state().carousel.offset() <= real_max);
    }

    page.advance(60);
    assert_eq!(page.state().carousel.max_offset(), real_max);
    assert_eq!(page.state().carousel.offset(), 1.0);
}

#[test]
fn test_narrowed_window_extends_travel() {
    let mut page = mount(0);
    page.resize(VIEWPORT - 280.0);
    page.advance(30);

    let max = page.state().carousel.max_offset();
    assert_eq!(max, strip_width(5) - (VIEWPORT - 280.0));
    page.advance((max as u64 - 2) * 30);
    assert_eq!(page.state().carousel.offset(), max - 1.0);
}

#[test]
fn test_preloaded_track_without_autoplay() {
    let page = PageSession::mount(Deck::birthday(), VIEWPORT, false, &mut StdRng::seed_from_u64(0));
    let first = &page.play_requests()[0];
    assert_eq!(first.trigger, PlayTrigger::Preload);
    assert_eq!(page.state().audio.bound_track(), Some(first.track.id));
}

#[test]
fn test_latest_click_owns_the_player() {
    let mut page = mount(0);
    page.click_card(0);
    page.click_card(1);

    let requests = page.play_requests();
    let (first, second) = (&requests[1], &requests[2]);
    let mut state = page.state().clone();
    assert!(state.audio.record(second, &PlaybackOutcome::Started));
    assert!(!state.audio.record(first, &PlaybackOutcome::Started));
    assert!(!state.audio.record(&requests[0], &PlaybackOutcome::Blocked("NotAllowedError".into())));
    assert_eq!(state.audio.bound_track(), Some(TrackId(2)));
    assert_eq!(state.audio.state(), PlaybackState::Playing);
}
