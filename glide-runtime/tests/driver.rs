use std::time::Duration;

use glide_core::{
    Carousel, CarouselConfig, CarouselMessage, InteractionState,
};
use glide_runtime::CarouselDriver;
use tokio::time::{self, Instant};

fn five_cards() -> CarouselDriver {
    let carousel = Carousel::new(CarouselConfig::default())
        .with_container_width(632.0)
        .with_item_count(5);
    CarouselDriver::new(carousel, Duration::from_millis(16))
}

async fn fling(driver: &CarouselDriver) {
    driver.dispatch(CarouselMessage::PointerDown {
        x: 400.0,
        at: Instant::now().into_std(),
    });
    for x in [380.0, 360.0] {
        time::advance(Duration::from_millis(16)).await;
        driver.dispatch(CarouselMessage::PointerMove {
            x,
            at: Instant::now().into_std(),
        });
    }
    driver.dispatch(CarouselMessage::PointerUp);
}

#[tokio::test(start_paused = true)]
async fn snap_lands_on_target_and_releases_its_clock() {
    let driver = five_cards();
    let started = Instant::now();

    let snapshot = driver.dispatch(CarouselMessage::SnapTo(3));
    assert_eq!(snapshot.interaction_state, InteractionState::Snapping);
    assert_eq!(driver.active_tasks(), 1);

    let settled = driver.wait_until_idle().await;
    assert_eq!(settled.scroll_offset, 948.0);
    assert_eq!(settled.current_index, 3);
    assert_eq!(settled.indicators, vec![false, false, false, true, true]);
    assert_eq!(driver.active_tasks(), 0);

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(600), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(700), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn fling_decays_to_rest() {
    let driver = five_cards();
    fling(&driver).await;

    let released = driver.snapshot();
    assert_eq!(released.interaction_state, InteractionState::Momentum);
    assert_eq!(released.scroll_offset, 80.0);
    assert_eq!(driver.active_tasks(), 1);

    let settled = driver.wait_until_idle().await;
    assert!(settled.scroll_offset > released.scroll_offset + 350.0);
    assert!(settled.scroll_offset <= 948.0);
    assert_eq!(driver.active_tasks(), 0);
}

#[tokio::test(start_paused = true)]
async fn pointer_down_freezes_a_running_snap() {
    let driver = five_cards();
    driver.dispatch(CarouselMessage::SnapTo(3));
    time::sleep(Duration::from_millis(160)).await;

    let grabbed = driver.dispatch(CarouselMessage::PointerDown {
        x: 200.0,
        at: Instant::now().into_std(),
    });
    assert_eq!(grabbed.interaction_state, InteractionState::Dragging);
    assert!(grabbed.scroll_offset > 0.0 && grabbed.scroll_offset < 948.0);
    assert_eq!(driver.active_tasks(), 0);

    // Nothing from the cancelled clock may move the offset afterwards
    time::sleep(Duration::from_secs(1)).await;
    let later = driver.snapshot();
    assert_eq!(later.scroll_offset, grabbed.scroll_offset);
    assert_eq!(later.interaction_state, InteractionState::Dragging);
}

#[tokio::test(start_paused = true)]
async fn pointer_down_stops_momentum() {
    let driver = five_cards();
    fling(&driver).await;
    time::sleep(Duration::from_millis(100)).await;

    let grabbed = driver.dispatch(CarouselMessage::PointerDown {
        x: 10.0,
        at: Instant::now().into_std(),
    });
    assert_eq!(driver.active_tasks(), 0);

    time::sleep(Duration::from_secs(2)).await;
    assert_eq!(driver.snapshot().scroll_offset, grabbed.scroll_offset);
}

#[tokio::test(start_paused = true)]
async fn retargeted_snap_runs_a_single_clock() {
    let driver = five_cards();
    driver.dispatch(CarouselMessage::SnapTo(3));
    time::sleep(Duration::from_millis(100)).await;

    driver.dispatch(CarouselMessage::SnapTo(0));
    assert_eq!(driver.active_tasks(), 1);

    let settled = driver.wait_until_idle().await;
    assert_eq!(settled.scroll_offset, 0.0);
    assert_eq!(driver.active_tasks(), 0);
}

#[tokio::test(start_paused = true)]
async fn arrows_step_and_stop_at_the_ends() {
    let driver = five_cards();
    assert!(!driver.snapshot().can_scroll_prev);

    driver.dispatch(CarouselMessage::ScrollPrev);
    assert_eq!(driver.active_tasks(), 0);

    driver.dispatch(CarouselMessage::ScrollNext);
    let settled = driver.wait_until_idle().await;
    assert_eq!(settled.current_index, 1);
    assert_eq!(settled.scroll_offset, 316.0);
    assert!(settled.can_scroll_prev);
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_every_published_snapshot() {
    let driver = five_cards();
    let mut rx = driver.subscribe();

    driver.dispatch(CarouselMessage::ContainerResized(1264.0));
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().visible_count, 4);

    driver.dispatch(CarouselMessage::ItemsChanged(8));
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().indicators.len(), 8);
}

#[tokio::test(start_paused = true)]
async fn shutdown_aborts_running_tasks() {
    let driver = five_cards();
    driver.dispatch(CarouselMessage::SnapTo(2));
    assert_eq!(driver.active_tasks(), 1);

    driver.shutdown();
    assert_eq!(driver.active_tasks(), 0);

    let before = driver.snapshot().scroll_offset;
    time::sleep(Duration::from_secs(1)).await;
    assert_eq!(driver.snapshot().scroll_offset, before);
}

#[tokio::test(start_paused = true)]
async fn shutdown_mid_momentum_leaves_the_carousel_idle() {
    let driver = five_cards();
    fling(&driver).await;
    time::sleep(Duration::from_millis(48)).await;
    assert_eq!(
        driver.snapshot().interaction_state,
        InteractionState::Momentum
    );

    driver.shutdown();
    let halted = driver.snapshot();
    assert!(halted.is_idle());
    assert_eq!(driver.active_tasks(), 0);

    let settled =
        time::timeout(Duration::from_secs(1), driver.wait_until_idle())
            .await
            .expect("idle after shutdown");
    assert_eq!(settled.scroll_offset, halted.scroll_offset);
}

#[tokio::test(start_paused = true)]
async fn drag_after_snapping_to_the_last_card_stays_put() {
    let driver = five_cards();
    driver.dispatch(CarouselMessage::SnapTo(4));
    let settled = driver.wait_until_idle().await;
    assert_eq!(settled.scroll_offset, 1264.0);

    driver.dispatch(CarouselMessage::PointerDown {
        x: 200.0,
        at: Instant::now().into_std(),
    });
    time::advance(Duration::from_millis(16)).await;
    let moved = driver.dispatch(CarouselMessage::PointerMove {
        x: 200.0,
        at: Instant::now().into_std(),
    });
    assert_eq!(moved.scroll_offset, 1264.0);
}
