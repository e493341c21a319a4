//! Formation mode: the chain constraint is suspended and every body of a
//! snake arrives at its own assigned point, e.g. to spell out a word.

use sn_chain::SegmentedBody;
use sn_core::Vec2;
use sn_steer::arrive;

/// Glyph grid: 5 columns × 9 rows, `#` marks a point.
const GLYPH_COLS: usize = 5;
const GLYPH_ROWS: usize = 9;
/// Columns from one glyph's left edge to the next.
const ADVANCE: usize = GLYPH_COLS + 2;

fn glyph(c: char) -> Option<[&'static str; GLYPH_ROWS]> {
    let g = match c.to_ascii_uppercase() {
        'S' => [" ####", "#    ", "#    ", "#    ", " ### ", "    #", "    #", "    #", "#### "],
        'N' => ["#   #", "##  #", "##  #", "# # #", "# # #", "#  ##", "#  ##", "#   #", "#   #"],
        'A' => ["  #  ", " # # ", " # # ", "#   #", "#   #", "#####", "#   #", "#   #", "#   #"],
        'K' => ["#   #", "#  # ", "# #  ", "##   ", "#    ", "##   ", "# #  ", "#  # ", "#   #"],
        'E' => ["#####", "#    ", "#    ", "#    ", "#### ", "#    ", "#    ", "#    ", "#####"],
        _ => return None,
    };
    Some(g)
}

/// Points spelling `word`, centred on `center`, one grid cell = `pitch`.
///
/// Only the letters of "SNAKE" have glyphs; any other character leaves a
/// blank cell of the same width.  Points are ordered letter by letter, each
/// letter row by row.
pub fn word_points(word: &str, center: Vec2, pitch: f32) -> Vec<Vec2> {
    let letters = word.chars().count();
    if letters == 0 {
        return Vec::new();
    }

    let width = (letters * ADVANCE - (ADVANCE - GLYPH_COLS)) as f32;
    let origin = Vec2::new(
        center.x - (width - 1.0) * 0.5 * pitch,
        center.y - (GLYPH_ROWS as f32 - 1.0) * 0.5 * pitch,
    );

    let mut points = Vec::new();
    for (i, c) in word.chars().enumerate() {
        let Some(rows) = glyph(c) else { continue };
        for (r, row) in rows.iter().enumerate() {
            for (col, cell) in row.chars().enumerate() {
                if cell == '#' {
                    let x = (i * ADVANCE + col) as f32 * pitch;
                    points.push(origin + Vec2::new(x, r as f32 * pitch));
                }
            }
        }
    }
    points
}

/// One formation tick: body `i` arrives at `points[i]`, bodies beyond the
/// point list just coast.  Every body is integrated exactly once.
pub fn formation_step(chain: &mut SegmentedBody, points: &[Vec2], slowing_radius: f32) {
    for (i, body) in chain.bodies_mut().iter_mut().enumerate() {
        if let Some(&p) = points.get(i) {
            let f = arrive(body, p, slowing_radius);
            body.apply_force(f);
        }
        body.integrate();
    }
}
