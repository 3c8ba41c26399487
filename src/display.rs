//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; this module only translates
//! state into terminal commands. The fixed logical viewport is scaled
//! onto whatever grid the terminal currently offers.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use astro_raid::entities::{Enemy, GameStatus, ParallaxLayer, Projectile, World};

// ── Colour palette ────────────────────────────────────────────────────────────

/// Far-to-near star layers get brighter.
const C_STAR_LAYERS: [Color; 3] = [Color::DarkGrey, Color::Grey, Color::White];
const C_PROJECTILE: Color = Color::Cyan;
const C_ENEMY: Color = Color::DarkYellow;
const C_PLAYER: Color = Color::Cyan;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// The enemy sprite cycles through these as its rotation advances — the
/// terminal stand-in for rotating a square about its center.
const SPIN_GLYPHS: [char; 4] = ['◆', '◈', '◇', '◈'];

// ── Logical-to-grid mapping ───────────────────────────────────────────────────

struct Grid {
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl Grid {
    fn new(cols: u16, rows: u16, world: &World) -> Grid {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Grid {
            cols,
            rows,
            sx: cols as f32 / world.width,
            sy: rows as f32 / world.height,
        }
    }

    fn col(&self, x: f32) -> u16 {
        ((x * self.sx) as i32).clamp(0, self.cols as i32 - 1) as u16
    }

    fn row(&self, y: f32) -> u16 {
        ((y * self.sy) as i32).clamp(0, self.rows as i32 - 1) as u16
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, world: &World) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let grid = Grid::new(cols, rows, world);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for (i, layer) in world.layers.iter().enumerate() {
        draw_layer(out, &grid, i, layer)?;
    }
    for p in world.projectiles.iter().filter(|p| p.active) {
        draw_projectile(out, &grid, p)?;
    }
    for e in world.enemies.iter().filter(|e| e.active) {
        draw_enemy(out, &grid, world, e)?;
    }

    if world.player.alive {
        draw_player(out, &grid, world)?;
    } else {
        draw_game_over(out, &grid, world)?;
    }

    draw_hud(out, world)?;
    draw_controls_hint(out, &grid)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, grid.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Parallax ──────────────────────────────────────────────────────────────────

fn draw_layer<W: Write>(
    out: &mut W,
    grid: &Grid,
    index: usize,
    layer: &ParallaxLayer,
) -> std::io::Result<()> {
    let color = C_STAR_LAYERS[index.min(C_STAR_LAYERS.len() - 1)];
    out.queue(style::SetForegroundColor(color))?;
    for star in &layer.stars {
        let glyph = if star.size < 1.0 {
            '·'
        } else if star.size < 2.0 {
            '•'
        } else {
            '✶'
        };
        out.queue(cursor::MoveTo(grid.col(star.x), grid.row(star.y)))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_projectile<W: Write>(
    out: &mut W,
    grid: &Grid,
    p: &Projectile,
) -> std::io::Result<()> {
    if p.y + p.h < 0.0 {
        return Ok(());
    }
    out.queue(cursor::MoveTo(grid.col(p.x + p.w / 2.0), grid.row(p.y)))?;
    out.queue(style::SetForegroundColor(C_PROJECTILE))?;
    out.queue(Print("║"))?;
    Ok(())
}

fn draw_enemy<W: Write>(
    out: &mut W,
    grid: &Grid,
    world: &World,
    e: &Enemy,
) -> std::io::Result<()> {
    // Visible portion of the box; enemies spawn above the top edge and
    // despawn well below the bottom one.
    let y0 = e.y.max(0.0);
    let y1 = (e.y + e.h).min(world.height);
    let x0 = e.x.max(0.0);
    let x1 = (e.x + e.w).min(world.width);
    if y1 <= y0 || x1 <= x0 {
        return Ok(());
    }

    let phase = e.rotation.rem_euclid(std::f32::consts::TAU) / std::f32::consts::TAU;
    let glyph = SPIN_GLYPHS[((phase * SPIN_GLYPHS.len() as f32) as usize) % SPIN_GLYPHS.len()];

    let left = grid.col(x0);
    let right = grid.col(x1);
    let span = (right - left + 1) as usize;
    let body: String = std::iter::repeat(glyph).take(span).collect();

    out.queue(style::SetForegroundColor(C_ENEMY))?;
    for row in grid.row(y0)..=grid.row(y1) {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print(&body))?;
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, grid: &Grid, world: &World) -> std::io::Result<()> {
    // 2-row sprite:
    //   ▲       ← nose
    //  /█\      ← fuselage + wings
    let p = &world.player;
    let nose_col = grid.col(p.x + p.w / 2.0);
    let nose_row = grid.row(p.y);

    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(nose_col, nose_row))?;
    out.queue(Print("▲"))?;

    let body_row = nose_row + 1;
    if body_row < grid.rows {
        out.queue(cursor::MoveTo(nose_col.saturating_sub(1), body_row))?;
        out.queue(Print("/█\\"))?;
    }
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, world: &World) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", world.score)))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, grid: &Grid) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, grid.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → ↑ ↓ / W A S D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, grid: &Grid, world: &World) -> std::io::Result<()> {
    debug_assert_eq!(world.status, GameStatus::GameOver);

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];
    let score_line = format!("Final Score: {:>6}", world.score);
    let hint = "R - Play Again  Q - Quit";

    let cx = grid.cols / 2;
    let total_rows = lines.len() as u16 + 2;
    let start_row = (grid.rows / 2).saturating_sub(total_rows / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let hint_row = score_row + 1;
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, hint_row))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
