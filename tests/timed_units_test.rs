use folio_core::{Animated, Catalog, PortfolioConfig, RoleRotator, TypewriterRevealer};
use std::time::Duration;
use tokio::time::sleep;
use tokio_test::assert_ok;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[tokio::test(start_paused = true)]
async fn test_rotator_cycles_on_its_interval() {
    let mut rotator = assert_ok!(RoleRotator::new(["Developer", "Designer"], ms(3000)));
    rotator.start();
    assert!(rotator.is_running());
    assert_eq!(rotator.current(), "Developer");

    sleep(ms(3500)).await;
    assert_eq!(rotator.current(), "Designer");

    sleep(ms(3000)).await;
    assert_eq!(rotator.current(), "Developer");
}

#[tokio::test(start_paused = true)]
async fn test_rotator_stop_freezes_state() {
    let mut rotator = assert_ok!(RoleRotator::new(["Developer", "Designer", "Writer"], ms(1000)));
    rotator.start();

    sleep(ms(1500)).await;
    assert_eq!(rotator.current(), "Designer");

    rotator.stop();
    rotator.stop();
    assert!(!rotator.is_running());

    sleep(ms(60_000)).await;
    assert_eq!(rotator.current(), "Designer");
}

#[tokio::test(start_paused = true)]
async fn test_rotator_can_restart_after_stop() {
    let mut rotator = assert_ok!(RoleRotator::new(["Developer", "Designer"], ms(1000)));
    rotator.start();
    rotator.stop();

    rotator.start();
    assert!(rotator.is_running());
    sleep(ms(1500)).await;
    assert_eq!(rotator.current(), "Designer");
}

#[tokio::test(start_paused = true)]
async fn test_double_start_keeps_single_timer() {
    let mut rotator = assert_ok!(RoleRotator::new(["A", "B", "C"], ms(1000)));
    rotator.start();
    rotator.start();

    sleep(ms(1500)).await;
    assert_eq!(rotator.current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_typewriter_reveals_then_holds() {
    let mut typewriter = assert_ok!(TypewriterRevealer::new("Hi", ms(100)));
    typewriter.start();

    sleep(ms(50)).await;
    assert_eq!(typewriter.revealed(), "");

    sleep(ms(100)).await;
    assert_eq!(typewriter.revealed(), "H");

    sleep(ms(100)).await;
    assert_eq!(typewriter.revealed(), "Hi");
    assert!(typewriter.is_complete());

    sleep(ms(1000)).await;
    assert_eq!(typewriter.revealed(), "Hi");
    assert!(!typewriter.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_typewriter_reset_types_again() {
    let mut typewriter = assert_ok!(TypewriterRevealer::new("Hey", ms(100)));
    typewriter.start();
    sleep(ms(350)).await;
    assert!(typewriter.is_complete());

    typewriter.reset();
    assert_eq!(typewriter.revealed(), "");
    assert!(typewriter.is_running());

    sleep(ms(150)).await;
    assert_eq!(typewriter.revealed(), "H");
}

#[tokio::test(start_paused = true)]
async fn test_typewriter_reset_mid_reveal_restarts_cleanly() {
    let mut typewriter = assert_ok!(TypewriterRevealer::new("Hello", ms(100)));
    typewriter.start();
    sleep(ms(250)).await;
    assert_eq!(typewriter.revealed(), "He");

    typewriter.reset();
    sleep(ms(150)).await;
    assert_eq!(typewriter.revealed(), "H");
}

#[tokio::test(start_paused = true)]
async fn test_empty_typewriter_never_ticks() {
    let mut typewriter = assert_ok!(TypewriterRevealer::new("", ms(100)));
    typewriter.start();
    assert!(typewriter.is_complete());
    assert!(!typewriter.is_running());

    sleep(ms(1000)).await;
    assert_eq!(typewriter.revealed(), "");
}

#[tokio::test(start_paused = true)]
async fn test_hero_unmount_stops_both_timers() {
    let config = assert_ok!(PortfolioConfig::from_toml_str(
        r#"
        [profile]
        name = "Ada"
        headline = "Hello"
        roles = ["Developer", "Designer"]
        role_interval_ms = 1000
        typewriter_speed_ms = 100
        "#,
    ));
    let catalog = assert_ok!(Catalog::new(config));
    let mut hero = assert_ok!(catalog.hero());
    hero.mount();
    assert!(hero.is_animating());

    sleep(ms(1050)).await;
    let frame = hero.frame();
    assert_eq!(frame.role, "Designer");
    assert_eq!(frame.headline, "Hello");
    assert!(frame.headline_complete);

    hero.unmount();
    assert!(!hero.is_animating());
    sleep(ms(10_000)).await;
    assert_eq!(hero.frame(), frame);
}
