//! Behaviour of the configuration transitions, the render projection and the loop
use e_masonry::{apply, render, Action, App, AppConfig, Field, MasonryConfig, Transition};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn step(config: MasonryConfig, action: Action, rng: &mut StdRng) -> MasonryConfig {
    apply(config, action, rng).config().unwrap_or(config)
}

#[test]
fn test_random_decrement_sequences_respect_floors() {
    let mut rng = seeded(100);
    for _ in 0..50 {
        let mut config = MasonryConfig::randomize(&mut rng);
        for _ in 0..200 {
            let field = Field::ALL[rng.gen_range(0..Field::ALL.len())];
            let action = if rng.gen_bool(0.8) {
                Action::Decrement(field)
            } else {
                Action::Increment(field)
            };
            config = step(config, action, &mut rng);
            assert!(config.min_value >= 20);
            assert!(config.row_span >= 1);
            assert!(config.column_span >= 1);
        }
    }
}

#[test]
fn test_min_value_decrement_at_twenty_is_noop() {
    let mut rng = seeded(1);
    let config = MasonryConfig::default();
    assert_eq!(
        apply(config, Action::Decrement(Field::MinValue), &mut rng),
        Transition::Unchanged
    );
    let bumped = step(config, Action::Increment(Field::MinValue), &mut rng);
    assert_eq!(bumped.min_value, 21);
    assert_eq!(step(bumped, Action::Decrement(Field::MinValue), &mut rng).min_value, 20);
}

#[test]
fn test_reset_restores_defaults_from_anywhere() {
    let mut rng = seeded(2);
    for _ in 0..20 {
        let config = MasonryConfig::randomize(&mut rng);
        let reset = step(config, Action::Reset, &mut rng);
        assert_eq!(
            reset,
            MasonryConfig {
                show_numbers: true,
                row_span: 1,
                column_span: 1,
                tile_radius: 0,
                gap: 0,
                repeat: 12,
                looping: false,
                min_value: 20,
            }
        );
    }
}

#[test]
fn test_randomize_ranges_and_loop_off() {
    let mut rng = seeded(3);
    let mut counts = std::collections::HashSet::new();
    for _ in 0..500 {
        let config = step(MasonryConfig::default(), Action::Randomize, &mut rng);
        assert!(!config.looping);
        assert!((21..=120).contains(&config.min_value));
        assert!((5..=24).contains(&config.repeat));
        for value in [config.row_span, config.column_span, config.tile_radius, config.gap] {
            assert!((2..=21).contains(&value), "{}", value);
        }
        counts.insert(config.min_value);
    }
    // independent draws spread over the range
    assert!(counts.len() > 50);
}

#[test]
fn test_regenerate_changes_only_min_value() {
    let mut rng = seeded(4);
    for _ in 0..50 {
        let before = MasonryConfig::randomize(&mut rng);
        let after = step(before, Action::Regenerate, &mut rng);
        assert!((21..=120).contains(&after.min_value));
        assert_eq!(
            after,
            MasonryConfig {
                min_value: after.min_value,
                ..before
            }
        );
    }
}

#[test]
fn test_render_numbers_tiles_in_order() {
    let mut rng = seeded(5);
    let config = MasonryConfig {
        min_value: 64,
        ..MasonryConfig::default()
    };
    let render = render(&config, &mut rng);
    let labels: Vec<String> = render.tiles.iter().map(|t| t.text().to_string()).collect();
    let expected: Vec<String> = (1..=64).map(|i: u32| i.to_string()).collect();
    assert_eq!(labels, expected);
}

#[test]
fn test_same_configuration_renders_differently() {
    let mut rng = seeded(6);
    let config = MasonryConfig::default();
    let first = render(&config, &mut rng);
    let second = render(&config, &mut rng);
    assert_eq!(first.tiles.len(), second.tiles.len());
    assert_ne!(
        first.tiles.iter().map(|t| t.color).collect::<Vec<_>>(),
        second.tiles.iter().map(|t| t.color).collect::<Vec<_>>()
    );
}

#[test]
fn test_repeat_plus_three_times() {
    let mut app = App::with_rng(&AppConfig::default(), seeded(7));
    let now = Instant::now();
    for _ in 0..3 {
        assert!(app.dispatch(Action::Increment(Field::Repeat), now));
    }
    assert_eq!(app.config().repeat, 15);
    let template = app.current_render().template;
    assert_eq!(template.columns, 15);
    assert_eq!(
        template.declarations()[1].to_string(),
        "grid-template-columns: repeat(15, 1fr);"
    );
}

#[test]
fn test_loop_regenerates_until_switched_off() {
    let mut app = App::with_rng(&AppConfig::default(), seeded(8));
    let start = Instant::now();
    app.dispatch(Action::ToggleLoop, start);
    let frozen = *app.config();

    let mut seen = vec![frozen.min_value];
    let mut now = start;
    for _ in 0..5 {
        now += Duration::from_millis(1000);
        assert!(app.tick(now));
        let current = *app.config();
        assert!(current.looping);
        assert_eq!(
            current,
            MasonryConfig {
                min_value: current.min_value,
                ..frozen
            }
        );
        seen.push(current.min_value);
    }
    assert!(seen.windows(2).any(|w| w[0] != w[1]));

    // manual controls are ignored while looping
    assert!(!app.dispatch(Action::Randomize, now));
    assert!(!app.dispatch(Action::Increment(Field::Gap), now));

    app.dispatch(Action::ToggleLoop, now + Duration::from_millis(10));
    let fired = app.timer().fired();
    // at most one pending tick remains
    assert!(app.tick(now + Duration::from_millis(1000)));
    for i in 2..10 {
        assert!(!app.tick(now + Duration::from_millis(1000 * i)));
    }
    assert_eq!(app.timer().fired(), fired + 1);
    assert!(!app.config().looping);
}
