use astro_raid::compute::init_world;
use astro_raid::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn status_clone_and_eq() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(GameStatus::GameOver.clone(), GameStatus::GameOver);
}

#[test]
fn bounds_mirror_entity_fields() {
    let p = Projectile { x: 1.0, y: 2.0, w: 4.0, h: 10.0, vy: -7.0, active: true };
    assert_eq!(p.bounds(), Aabb { x: 1.0, y: 2.0, w: 4.0, h: 10.0 });

    let e = Enemy {
        x: 5.0,
        y: 6.0,
        w: 30.0,
        h: 30.0,
        vy: 2.0,
        rotation: 0.5,
        rot_speed: 0.01,
        active: true,
    };
    assert_eq!(e.bounds(), Aabb { x: 5.0, y: 6.0, w: 30.0, h: 30.0 });

    let player = Player {
        x: 10.0,
        y: 20.0,
        w: 36.0,
        h: 48.0,
        speed: 4.2,
        cooldown: 0,
        alive: true,
    };
    assert_eq!(player.bounds(), Aabb { x: 10.0, y: 20.0, w: 36.0, h: 48.0 });
}

#[test]
fn world_clone_is_independent() {
    let mut rng = StdRng::seed_from_u64(7);
    let original = init_world(480.0, 640.0, &mut rng);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.enemies.acquire().active = true;
    cloned.layers[0].stars[0].y = 12.5;

    assert_eq!(original.score, 0);
    assert_eq!(original.enemies.active_count(), 0);
    assert_ne!(original.player.x, 99.0);
    assert_ne!(original.layers[0].stars[0].y, 12.5);
}
