//! Game-logic functions: the per-tick update step and everything it calls.
//!
//! All state lives in the [`World`] context passed in by the loop driver;
//! there are no globals. Side effects are limited to the injected RNG and
//! audio sink, so the whole simulation runs under a seeded RNG and a
//! recording sink in tests.

use rand::Rng;

use crate::audio::{AudioSink, Cue};
use crate::entities::{
    Aabb, Enemy, GameStatus, ParallaxLayer, Player, Projectile, Star, World,
};
use crate::input::InputSnapshot;
use crate::pool::Pool;

// ── Tuning constants (units per tick unless noted) ────────────────────────────

pub const PLAYER_W: f32 = 36.0;
pub const PLAYER_H: f32 = 48.0;
pub const PLAYER_SPEED: f32 = 4.2;
/// Distance from the bottom edge to the player's initial y.
pub const PLAYER_START_OFFSET: f32 = 80.0;
/// The player is clamped to stay this far inside every viewport edge.
pub const PLAYER_MARGIN: f32 = 4.0;
/// Ticks between shots.
pub const COOLDOWN_MAX: u32 = 12;

pub const PROJECTILE_W: f32 = 4.0;
pub const PROJECTILE_H: f32 = 10.0;
pub const PROJECTILE_SPEED: f32 = 7.0;
/// Random extra upward speed per shot, for visual variety.
pub const PROJECTILE_SPEED_JITTER: f32 = 1.5;
/// Gap between the ship's nose and a freshly fired projectile.
pub const PROJECTILE_MUZZLE_GAP: f32 = 4.0;

/// Ticks between enemy spawns.
pub const SPAWN_INTERVAL: u32 = 60;
pub const ENEMY_MIN_SIZE: f32 = 24.0;
pub const ENEMY_MAX_SIZE: f32 = 44.0;
pub const ENEMY_MIN_VY: f32 = 1.2;
pub const ENEMY_MAX_VY: f32 = 3.0;
/// Spin is drawn from `-ENEMY_MAX_SPIN..ENEMY_MAX_SPIN` rad/tick.
pub const ENEMY_MAX_SPIN: f32 = 0.03;
/// Enemies start this far above the top edge, beyond their own height.
pub const ENEMY_SPAWN_GAP: f32 = 10.0;
/// An enemy despawns once its top edge is this far below the bottom edge.
pub const ENEMY_DESPAWN_MARGIN: f32 = 50.0;

pub const SCORE_PER_KILL: u32 = 10;

pub const PROJECTILE_POOL_SEED: usize = 20;
pub const ENEMY_POOL_SEED: usize = 12;

/// Scroll speed per parallax layer, far to near.
pub const LAYER_SPEEDS: [f32; 3] = [0.2, 0.6, 1.2];
/// Star count per layer is `STAR_BASE_COUNT - layer * STAR_COUNT_STEP`:
/// nearer layers have fewer, larger stars.
pub const STAR_BASE_COUNT: usize = 60;
pub const STAR_COUNT_STEP: usize = 20;

// ── Pool factories ────────────────────────────────────────────────────────────

fn new_projectile() -> Projectile {
    Projectile {
        x: 0.0,
        y: 0.0,
        w: PROJECTILE_W,
        h: PROJECTILE_H,
        vy: -PROJECTILE_SPEED,
        active: false,
    }
}

fn new_enemy() -> Enemy {
    Enemy {
        x: 0.0,
        y: 0.0,
        w: ENEMY_MIN_SIZE,
        h: ENEMY_MIN_SIZE,
        vy: ENEMY_MIN_VY,
        rotation: 0.0,
        rot_speed: 0.0,
        active: false,
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game context for a logical viewport of `width` × `height`.
/// The RNG only seeds star positions; gameplay randomness flows through
/// `update`.
pub fn init_world(width: f32, height: f32, rng: &mut impl Rng) -> World {
    let mut world = World {
        player: Player {
            x: 0.0,
            y: 0.0,
            w: PLAYER_W,
            h: PLAYER_H,
            speed: PLAYER_SPEED,
            cooldown: 0,
            alive: true,
        },
        projectiles: Pool::new(new_projectile, PROJECTILE_POOL_SEED),
        enemies: Pool::new(new_enemy, ENEMY_POOL_SEED),
        layers: init_parallax(width, height, rng),
        score: 0,
        status: GameStatus::Playing,
        game_over_cue_sent: false,
        spawn_timer: 0,
        width,
        height,
    };
    reset(&mut world);
    world
}

fn init_parallax(width: f32, height: f32, rng: &mut impl Rng) -> Vec<ParallaxLayer> {
    LAYER_SPEEDS
        .iter()
        .enumerate()
        .map(|(i, &speed)| {
            let count = STAR_BASE_COUNT - i * STAR_COUNT_STEP;
            let stars = (0..count)
                .map(|_| Star {
                    x: rng.gen_range(0.0..width),
                    y: rng.gen_range(0.0..height),
                    size: rng.gen_range(0.0..(i as f32 + 1.0)) + 0.3,
                })
                .collect();
            ParallaxLayer { speed, stars }
        })
        .collect()
}

/// Restart: back to `Playing` with score 0, the player re-centered, every
/// pooled entity deactivated and the spawn timer cleared. Pools keep
/// whatever capacity they grew to.
pub fn reset(world: &mut World) {
    world.score = 0;
    world.status = GameStatus::Playing;
    world.game_over_cue_sent = false;
    world.player.alive = true;
    world.player.x = world.width / 2.0 - world.player.w / 2.0;
    world.player.y = world.height - PLAYER_START_OFFSET;
    world.player.cooldown = 0;
    world.projectiles.deactivate_all();
    world.enemies.deactivate_all();
    world.spawn_timer = 0;
}

// ── Geometry ─────────────────────────────────────────────────────────────────

/// AABB overlap with strict inequalities: boxes that merely touch along an
/// edge do not collide.
pub fn rects_intersect(a: &Aabb, b: &Aabb) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick. While game-over, the only effect is
/// making sure the game-over cue has been emitted; everything else freezes
/// until `reset`.
pub fn update(
    world: &mut World,
    input: &InputSnapshot,
    rng: &mut impl Rng,
    audio: &mut dyn AudioSink,
) {
    if world.status == GameStatus::GameOver {
        if !world.game_over_cue_sent {
            audio.play(Cue::GameOver);
            world.game_over_cue_sent = true;
        }
        return;
    }

    steer_player(world, input);

    if input.fire {
        fire_projectile(world, rng, audio);
    }
    if world.player.cooldown > 0 {
        world.player.cooldown -= 1;
    }

    advance_projectiles(world);

    world.spawn_timer += 1;
    if world.spawn_timer >= SPAWN_INTERVAL {
        world.spawn_timer = 0;
        spawn_enemy(world, rng);
    }

    advance_enemies(world);

    resolve_projectile_hits(world, audio);
    resolve_player_hit(world, audio);

    advance_parallax(world);
}

/// Velocity comes straight from the held-key flags; no smoothing. The
/// position is then clamped fully inside the viewport with a fixed margin.
fn steer_player(world: &mut World, input: &InputSnapshot) {
    let p = &mut world.player;
    if input.left {
        p.x -= p.speed;
    }
    if input.right {
        p.x += p.speed;
    }
    if input.up {
        p.y -= p.speed;
    }
    if input.down {
        p.y += p.speed;
    }
    p.x = p.x.clamp(PLAYER_MARGIN, world.width - p.w - PLAYER_MARGIN);
    p.y = p.y.clamp(PLAYER_MARGIN, world.height - p.h - PLAYER_MARGIN);
}

/// No-op while the cooldown is running. Otherwise acquires a projectile
/// slot, launches it from the ship's horizontal center just above the nose,
/// and re-arms the cooldown.
fn fire_projectile(world: &mut World, rng: &mut impl Rng, audio: &mut dyn AudioSink) {
    if world.player.cooldown > 0 {
        return;
    }
    let (px, py, pw) = (world.player.x, world.player.y, world.player.w);
    let p = world.projectiles.acquire();
    p.active = true;
    p.w = PROJECTILE_W;
    p.h = PROJECTILE_H;
    p.x = px + pw / 2.0 - p.w / 2.0;
    p.y = py - p.h - PROJECTILE_MUZZLE_GAP;
    p.vy = -(PROJECTILE_SPEED + rng.gen_range(0.0..PROJECTILE_SPEED_JITTER));
    world.player.cooldown = COOLDOWN_MAX;
    audio.play(Cue::Shot);
}

fn spawn_enemy(world: &mut World, rng: &mut impl Rng) {
    let width = world.width;
    let size = rng.gen_range(ENEMY_MIN_SIZE..ENEMY_MAX_SIZE);
    let e = world.enemies.acquire();
    e.active = true;
    e.w = size;
    e.h = size;
    e.x = rng.gen_range(0.0..(width - size));
    e.y = -size - ENEMY_SPAWN_GAP;
    e.vy = rng.gen_range(ENEMY_MIN_VY..ENEMY_MAX_VY);
    e.rotation = rng.gen_range(0.0..std::f32::consts::TAU);
    e.rot_speed = rng.gen_range(-ENEMY_MAX_SPIN..ENEMY_MAX_SPIN);
}

fn advance_projectiles(world: &mut World) {
    for p in world.projectiles.iter_mut() {
        if !p.active {
            continue;
        }
        p.y += p.vy;
        if p.y + p.h < 0.0 {
            p.active = false;
        }
    }
}

fn advance_enemies(world: &mut World) {
    let height = world.height;
    for e in world.enemies.iter_mut() {
        if !e.active {
            continue;
        }
        e.y += e.vy;
        e.rotation += e.rot_speed;
        if e.y > height + ENEMY_DESPAWN_MARGIN {
            e.active = false;
        }
    }
}

/// Projectile × enemy pass. First hit wins per projectile: both entities
/// deactivate immediately, the score bumps, and the enemy scan stops for
/// that projectile. An enemy destroyed here can no longer hit the player
/// later in the same tick.
fn resolve_projectile_hits(world: &mut World, audio: &mut dyn AudioSink) {
    let World {
        projectiles,
        enemies,
        score,
        ..
    } = world;

    for p in projectiles.iter_mut() {
        if !p.active {
            continue;
        }
        for e in enemies.iter_mut() {
            if !e.active {
                continue;
            }
            if rects_intersect(&p.bounds(), &e.bounds()) {
                p.active = false;
                e.active = false;
                *score += SCORE_PER_KILL;
                audio.play(Cue::Hit);
                break;
            }
        }
    }
}

/// Player × enemy pass: the first overlap ends the run.
fn resolve_player_hit(world: &mut World, audio: &mut dyn AudioSink) {
    let player_box = world.player.bounds();
    let hit = world
        .enemies
        .iter()
        .any(|e| e.active && rects_intersect(&player_box, &e.bounds()));
    if hit {
        world.status = GameStatus::GameOver;
        world.player.alive = false;
        audio.play(Cue::GameOver);
        world.game_over_cue_sent = true;
    }
}

/// Every star drifts down by its layer's speed and wraps to the top edge,
/// x unchanged, once it leaves the viewport.
fn advance_parallax(world: &mut World) {
    let height = world.height;
    for layer in &mut world.layers {
        for star in &mut layer.stars {
            star.y += layer.speed;
            if star.y > height {
                star.y = 0.0;
            }
        }
    }
}
