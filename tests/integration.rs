// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests: configuration, source fallback, and timer-driven
//! rotation working together the way a page-level consumer wires them.

use media_carousel::config::CarouselConfig;
use media_carousel::driver::CarouselDriver;
use media_carousel::source::HttpSource;
use media_carousel::{Carousel, MediaItem, MediaRecord, Phase, RotationInterval};
use std::time::Duration;
use tempfile::tempdir;

fn record(id: &str) -> MediaRecord {
    MediaRecord {
        id: id.to_string(),
        image_url: format!("https://example.com/{id}.jpg"),
        caption: None,
    }
}

/// Lets spawned timer tasks observe an advanced paused clock.
async fn advance(millis: u64) {
    tokio::time::advance(Duration::from_millis(millis)).await;
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

#[test]
fn config_file_drives_carousel_construction() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("reviews.toml");

    let config = CarouselConfig {
        interval_ms: Some(3_000),
        source_url: None,
        fallback_items: vec![record("r1"), record("r2"), record("r3")],
    };
    config.save_to_path(&path).expect("failed to save config");

    let loaded = CarouselConfig::load_from_path(&path).expect("failed to load config");
    let mut carousel = Carousel::with_items(loaded.fallback_items.clone(), loaded.interval());

    assert_eq!(carousel.interval(), RotationInterval::from_millis(3_000));
    assert_eq!(carousel.phase(), Phase::Rotating);
    carousel.tick();
    assert_eq!(carousel.active_item().map(MediaItem::key), Some("r2"));
}

#[tokio::test(start_paused = true)]
async fn fallback_then_fetched_list_without_a_visual_jump() {
    // The page mounts with the static fallback while the fetch is in flight.
    let mut driver = CarouselDriver::new(RotationInterval::from_millis(4_000));
    driver.initialize(vec![record("a"), record("b"), record("c")]);

    advance(4_000).await;
    assert_eq!(driver.active_key().as_deref(), Some("b"));

    // The fetch lands with the same leading items plus one more; the active
    // index survives because position 1 still names the same item.
    driver.replace_items(vec![record("a"), record("b"), record("c"), record("d")]);
    assert_eq!(driver.active_key().as_deref(), Some("b"));

    // The schedule restarted at the replace; three more periods wrap to "a".
    for _ in 0..3 {
        advance(4_000).await;
    }
    assert_eq!(driver.active_key().as_deref(), Some("a"));
}

#[tokio::test(start_paused = true)]
async fn shrinking_refetch_clamps_instead_of_going_dark() {
    let mut driver = CarouselDriver::new(RotationInterval::from_millis(3_000));
    driver.initialize(vec![
        record("g1"),
        record("g2"),
        record("g3"),
        record("g4"),
        record("g5"),
    ]);

    for _ in 0..3 {
        advance(3_000).await;
    }
    assert_eq!(driver.with(Carousel::active_index), Some(3));

    // A gallery re-fetch returns fewer images; the index must land in range.
    driver.replace_items(vec![record("g1"), record("g2")]);
    assert_eq!(driver.with(Carousel::active_index), Some(0));
    assert_eq!(driver.with(|c| c.phase()), Phase::Rotating);

    advance(3_000).await;
    assert_eq!(driver.active_key().as_deref(), Some("g2"));
}

#[tokio::test(start_paused = true)]
async fn unmount_mid_fetch_leaves_no_dangling_timer() {
    let mut driver: CarouselDriver<MediaRecord> =
        CarouselDriver::new(RotationInterval::from_millis(4_000));
    driver.initialize(vec![record("a"), record("b")]);

    advance(4_000).await;
    assert_eq!(driver.tick_count(), 1);

    // Navigation tears the view down while a refresh is still in flight.
    driver.dispose();
    driver.replace_items(vec![record("x"), record("y"), record("z")]);

    advance(400_000).await;
    assert_eq!(driver.tick_count(), 1);
    assert!(driver.with(|c| c.phase().is_disposed()));
    assert!(driver.with(Carousel::is_empty));
}

#[tokio::test]
async fn unreachable_endpoint_degrades_to_the_configured_fallback() {
    let source = HttpSource::new("http://127.0.0.1:9/api/gallery")
        .with_fallback(vec![record("f1"), record("f2")]);

    let items = source.fetch_or_fallback().await;
    let carousel = Carousel::with_items(items, RotationInterval::from_millis(5_000));

    assert_eq!(carousel.phase(), Phase::Rotating);
    assert_eq!(carousel.active_item().map(MediaItem::key), Some("f1"));
}

#[tokio::test(start_paused = true)]
async fn three_items_at_four_seconds_follow_the_advertised_timeline() {
    let mut driver = CarouselDriver::new(RotationInterval::from_millis(4_000));
    driver.initialize(vec![
        "a".to_string(),
        "b".to_string(),
        "c".to_string(),
    ]);

    assert_eq!(driver.active_key().as_deref(), Some("a"));
    advance(3_999).await;
    assert_eq!(driver.active_key().as_deref(), Some("a"));
    advance(1).await;
    assert_eq!(driver.active_key().as_deref(), Some("b"));
    advance(4_000).await;
    assert_eq!(driver.active_key().as_deref(), Some("c"));
    advance(4_000).await;
    assert_eq!(driver.active_key().as_deref(), Some("a"));
}
