//! All game entity types — pure data plus their bounding boxes.
//!
//! Positions are `f32` logical-viewport units with a top-left origin.
//! Pooled entities carry an `active` flag; an inactive entity's other
//! fields are stale and must never be read by gameplay logic.

use crate::pool::{Pool, PoolSlot};

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Axis-aligned bounding box used for every collision test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

// ── Pooled entities ───────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Vertical speed in units per tick (negative = upward).
    pub vy: f32,
    pub active: bool,
}

impl Projectile {
    pub fn bounds(&self) -> Aabb {
        Aabb { x: self.x, y: self.y, w: self.w, h: self.h }
    }
}

impl PoolSlot for Projectile {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// A falling asteroid. Square, with a purely cosmetic spin.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Fall speed in units per tick (positive = downward).
    pub vy: f32,
    /// Current rotation about the enemy's own center, radians.
    pub rotation: f32,
    /// Radians added to `rotation` each tick.
    pub rot_speed: f32,
    pub active: bool,
}

impl Enemy {
    pub fn bounds(&self) -> Aabb {
        Aabb { x: self.x, y: self.y, w: self.w, h: self.h }
    }
}

impl PoolSlot for Enemy {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Units moved per tick while a direction is held.
    pub speed: f32,
    /// Ticks remaining until the next shot is allowed.
    pub cooldown: u32,
    pub alive: bool,
}

impl Player {
    pub fn bounds(&self) -> Aabb {
        Aabb { x: self.x, y: self.y, w: self.w, h: self.h }
    }
}

// ── Parallax background ───────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// One background layer: a fixed set of stars drifting at a shared speed.
/// Purely cosmetic; never consulted by gameplay logic.
#[derive(Clone, Debug)]
pub struct ParallaxLayer {
    /// Downward drift in units per tick.
    pub speed: f32,
    pub stars: Vec<Star>,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game context, owned by the loop driver and passed explicitly
/// to `update` and `render`. Pools are created once and only ever grow;
/// restart deactivates their slots instead of reallocating.
#[derive(Clone, Debug)]
pub struct World {
    pub player: Player,
    pub projectiles: Pool<Projectile>,
    pub enemies: Pool<Enemy>,
    pub layers: Vec<ParallaxLayer>,
    pub score: u32,
    pub status: GameStatus,
    /// Set once the game-over cue has been emitted for the current run,
    /// so repeated updates while game-over never retrigger it.
    pub game_over_cue_sent: bool,
    /// Ticks since the last enemy spawn.
    pub spawn_timer: u32,
    /// Logical viewport width, fixed at startup.
    pub width: f32,
    /// Logical viewport height, fixed at startup.
    pub height: f32,
}
