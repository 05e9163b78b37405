//! Flood fill over a [`RasterBuffer`].

use std::collections::VecDeque;

use crate::color::{Color888, IntoColor888};
use crate::{RasterBuffer, Result};

/// Recolor the 4-connected region of the seed pixel's color.
///
/// Every pixel reachable from (`x`, `y`) through up/down/left/right steps
/// over pixels of exactly the seed's color is set to `color`. Returns the
/// number of pixels changed, 0 when the seed already has `color`.
///
/// Each cell is queued at most once, so the work and the queue are both
/// bounded by the raster area.
pub fn flood_fill(
    buffer: &mut RasterBuffer,
    x: usize,
    y: usize,
    color: impl IntoColor888,
) -> Result<usize> {
    let target: Color888 = buffer.get(x, y)?;
    let color = color.into_color888();
    if target == color {
        return Ok(0);
    }

    let width = buffer.width();
    let height = buffer.height();
    let pixels = buffer.pixels_mut();
    let mut queued = vec![false; pixels.len()];
    let mut queue = VecDeque::new();

    let seed = y * width + x;
    queued[seed] = true;
    queue.push_back(seed);

    let mut changed = 0;
    while let Some(i) = queue.pop_front() {
        if pixels[i] != target {
            continue;
        }
        pixels[i] = color;
        changed += 1;

        let (cx, cy) = (i % width, i / width);
        let neighbors = [
            (cx + 1 < width).then(|| i + 1),
            (cx > 0).then(|| i - 1),
            (cy + 1 < height).then(|| i + width),
            (cy > 0).then(|| i - width),
        ];
        for n in neighbors.into_iter().flatten() {
            if !queued[n] && pixels[n] == target {
                queued[n] = true;
                queue.push_back(n);
            }
        }
    }

    log::trace!("flood fill at ({x}, {y}) recolored {changed} pixels");
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::color::WHITE;
    use rgb::Rgb;

    const RED: Color888 = Rgb { r: 255, g: 0, b: 0 };
    const BLACK: Color888 = Rgb { r: 0, g: 0, b: 0 };

    /// Build a raster from rows of `#` (black) and `.` (white).
    fn raster(rows: &[&str]) -> RasterBuffer {
        let mut buf = RasterBuffer::new(rows[0].len(), rows.len()).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.bytes().enumerate() {
                if c == b'#' {
                    buf.set(x, y, BLACK).unwrap();
                }
            }
        }
        buf
    }

    fn render(buf: &RasterBuffer) -> Vec<String> {
        buf.rows()
            .map(|row| {
                row.iter()
                    .map(|&p| {
                        if p == BLACK {
                            '#'
                        } else if p == WHITE {
                            '.'
                        } else if p == RED {
                            'R'
                        } else {
                            '?'
                        }
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn same_color_is_noop() {
        let mut buf = RasterBuffer::new(3, 3).unwrap();
        assert_eq!(flood_fill(&mut buf, 1, 1, WHITE).unwrap(), 0);
        assert!(buf.pixels().iter().all(|&p| p == WHITE));
    }

    #[test]
    fn uniform_raster_recolors_everything() {
        let mut buf = RasterBuffer::new(17, 9).unwrap();
        assert_eq!(flood_fill(&mut buf, 16, 8, RED).unwrap(), 17 * 9);
        assert!(buf.pixels().iter().all(|&p| p == RED));
    }

    #[test]
    fn full_display_raster() {
        let mut buf = RasterBuffer::new(320, 240).unwrap();
        assert_eq!(flood_fill(&mut buf, 0, 0, RED).unwrap(), 320 * 240);
    }

    #[test]
    fn stops_at_boundaries() {
        let mut buf = raster(&[
            "..#..", //
            "..#..",
            "###..",
            ".....",
        ]);
        assert_eq!(flood_fill(&mut buf, 0, 0, RED).unwrap(), 4);
        assert_eq!(
            render(&buf),
            ["RR#..", "RR#..", "###..", "....."]
        );
    }

    #[test]
    fn does_not_cross_diagonals() {
        let mut buf = raster(&[
            ".#", //
            "#.",
        ]);
        assert_eq!(flood_fill(&mut buf, 0, 0, RED).unwrap(), 1);
        assert_eq!(render(&buf), ["R#", "#."]);
    }

    #[test]
    fn fills_winding_region() {
        let mut buf = raster(&[
            ".....", //
            "####.",
            ".....",
            ".####",
            ".....",
        ]);
        assert_eq!(flood_fill(&mut buf, 0, 0, RED).unwrap(), 17);
        assert_eq!(
            render(&buf),
            ["RRRRR", "####R", "RRRRR", "R####", "RRRRR"]
        );
    }

    #[test]
    fn fills_region_of_seed_color_only() {
        let mut buf = raster(&[
            "#.#", //
            "###",
            "..#",
        ]);
        assert_eq!(flood_fill(&mut buf, 2, 2, RED).unwrap(), 6);
        assert_eq!(render(&buf), ["R.R", "RRR", "..R"]);
    }

    #[test]
    fn seed_out_of_bounds() {
        let mut buf = RasterBuffer::new(2, 2).unwrap();
        assert!(matches!(
            flood_fill(&mut buf, 2, 0, RED),
            Err(Error::OutOfBounds { x: 2, .. })
        ));
        assert!(buf.pixels().iter().all(|&p| p == WHITE));
    }

    #[test]
    fn wide_color_is_clamped() {
        let mut buf = RasterBuffer::new(2, 1).unwrap();
        let changed = flood_fill(&mut buf, 0, 0, Rgb::<i32>::new(300, -1, 0)).unwrap();
        assert_eq!(changed, 2);
        assert_eq!(buf.get(1, 0).unwrap(), RED);
    }
}
