/// Rendering layer: all terminal output lives here.
///
/// Each function receives a mutable writer and an immutable view of
/// the game state. No game logic is performed; this module only
/// translates logical coordinates into terminal commands. Rendering
/// the same state twice emits identical bytes.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::config::{SCREEN_H, SCREEN_W};
use crate::entities::{Enemy, GameState, GameStatus, Projectile};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_TITLE: Color = Color::Cyan;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::DarkYellow; // closest the base palette has to orange
const C_SHOT: Color = Color::Blue;
const C_HINT: Color = Color::DarkGrey;

// ── Logical → cell projection ─────────────────────────────────────────────────
//
// The playfield occupies columns 1..=cols-2 and rows 2..=rows-3:
// row 0 is the title bar, row 1 and row rows-2 the border, and the
// last row the controls hint.

fn cell_x(x: f32, cols: u16) -> u16 {
    let span = cols.saturating_sub(3).max(1) as f32;
    let t = (x / SCREEN_W).clamp(0.0, 1.0);
    1 + (t * span).round() as u16
}

fn cell_y(y: f32, rows: u16) -> u16 {
    let span = rows.saturating_sub(5).max(1) as f32;
    let t = (y / SCREEN_H).clamp(0.0, 1.0);
    2 + (t * span).round() as u16
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a cols × rows cell grid.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, cols, rows)?;
    draw_title(out, cols)?;

    for enemy in &state.formation.enemies {
        draw_enemy(out, enemy, cols, rows)?;
    }
    for shot in &state.player.shots {
        draw_shot(out, shot, cols, rows)?;
    }

    draw_player(out, state, cols, rows)?;
    draw_controls_hint(out, rows)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border & title ────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let w = cols as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row rows-2 — bottom bar
    out.queue(cursor::MoveTo(0, rows.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_title<W: Write>(out: &mut W, cols: u16) -> std::io::Result<()> {
    let title = "★  SPACE  INVADERS  ★";
    let cx = (cols / 2).saturating_sub(title.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(cx, 0))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //   ▲       ← apex row
    //  /|\      ← wings + fuselage
    let px = cell_x(state.player.x, cols);
    let py = cell_y(state.player.y, rows);
    out.queue(style::SetForegroundColor(C_PLAYER))?;

    out.queue(cursor::MoveTo(px, py))?;
    out.queue(Print("▲"))?;

    let wing_y = py + 1;
    if wing_y < rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(px.saturating_sub(1).max(1), wing_y))?;
        out.queue(Print("/|\\"))?;
    }

    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, cols: u16, rows: u16) -> std::io::Result<()> {
    // A 3-cell slab, the cell-grid rendition of the filled rectangle.
    let lx = cell_x(enemy.x, cols)
        .saturating_sub(1)
        .clamp(1, cols.saturating_sub(4).max(1));
    let y = cell_y(enemy.y, rows);
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    out.queue(cursor::MoveTo(lx, y))?;
    out.queue(Print("▓▓▓"))?;
    Ok(())
}

fn draw_shot<W: Write>(out: &mut W, shot: &Projectile, cols: u16, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(cell_x(shot.x, cols), cell_y(shot.y, rows)))?;
    out.queue(style::SetForegroundColor(C_SHOT))?;
    out.queue(Print("•"))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        ("Press any key to exit", Color::White),
    ];

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
