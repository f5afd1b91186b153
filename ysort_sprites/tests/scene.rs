use rand::{rngs::StdRng, SeedableRng};
use utilities::{TestRecords, SEED, SCREEN};
use ysort_orst::orst::benchmark::{run_solutions, BenchOptions, Outcome};
use ysort_orst::orst::{is_ordered, Order, Strategy};
use ysort_sprites::generate::{random_sprites, Bounds};
use ysort_sprites::scene::Scene;
use ysort_sprites::sprite::{Rectangle, Sprite, Vector2};

fn scene_with(strategy: Strategy) -> Scene {
    Scene::from_sprites(TestRecords::new().sprites, strategy, 1)
}

#[test]
fn every_strategy_orders_the_scene_by_bottom_edge() {
    for strategy in Strategy::ALL {
        let mut scene = scene_with(strategy);
        let before = scene.len();

        scene.sort();

        assert_eq!(scene.len(), before);
        assert!(is_ordered(scene.sprites(), Order::Ascending), "{strategy}");
    }
}

#[test]
fn sprites_stay_within_one_step_of_the_screen() {
    let mut scene = scene_with(Strategy::StableSort);

    for _ in 0..2_000 {
        scene.step(SCREEN);
    }

    for sprite in scene.sprites() {
        let Rectangle { width, height, .. } = sprite.source_rect;
        assert!(sprite.position.x >= -2.0);
        assert!(sprite.position.x + width <= SCREEN.width + 2.0);
        assert!(sprite.position.y >= -1.0);
        assert!(sprite.position.y + height <= SCREEN.height + 1.0);
    }
}

#[test]
fn clicks_add_sprites_that_get_sorted_in() {
    let mut scene = scene_with(Strategy::PriorityQueue);
    let before = scene.len();

    scene.spawn_at(Vector2::new(10.0, 0.0), SCREEN);
    scene.spawn_at(Vector2::new(10.0, 2_000.0), SCREEN);
    scene.sort();

    assert_eq!(scene.len(), before + 2);
    assert_eq!(scene.sprites()[0].position.y, 0.0);
    assert_eq!(scene.sprites()[scene.len() - 1].position.y, 2_000.0);
}

#[test]
fn sprite_above_the_top_turns_around() {
    let sprite = Sprite {
        position: Vector2::new(300.0, -1.0),
        source_rect: Rectangle::new(0.0, 0.0, 70.0, 110.0),
        horizontal_direction: true,
        vertical_direction: false,
    };
    let mut scene = Scene::from_sprites(vec![sprite], Strategy::Sort, 1);

    scene.step(Bounds::new(800.0, 600.0));
    assert!(scene.sprites()[0].vertical_direction);
}

#[test]
fn benchmark_times_every_strategy_on_sprites() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let sprites = random_sprites(&mut rng, SCREEN, 300);
    let options = BenchOptions {
        count_comparisons: true,
        ..Default::default()
    };

    let report = run_solutions(&sprites, &Strategy::ALL, &options).unwrap();

    assert_eq!(report.solutions.len(), Strategy::ALL.len());
    assert_eq!(report.memory_usage(), 300 * std::mem::size_of::<Sprite>());
    assert!(report.all_ordered());
    for solution in &report.solutions {
        match solution.outcome {
            Outcome::Timed { comparisons, .. } => assert!(comparisons.unwrap_or(0) > 0),
            Outcome::Skipped => panic!("{} was skipped", solution.strategy),
        }
    }
}
