use std::collections::VecDeque;

use image::RgbaImage;

use crate::image::background::mask::BackgroundMask;

/// Clear alpha on every background pixel reachable from the image border.
///
/// Breadth-first over 4-neighbours. A pixel is marked visited the first time it
/// is considered, so each one enters the queue at most once. RGB channels are
/// left untouched. Returns the number of pixels cleared.
pub(super) fn apply_edge_connected_mask(output: &mut RgbaImage, mask: &BackgroundMask) -> usize {
    let width = mask.width;
    let height = mask.height;
    if width == 0 || height == 0 {
        return 0;
    }

    debug_assert_eq!(output.width(), width);
    debug_assert_eq!(output.height(), height);

    let mut visited = vec![false; width as usize * height as usize];
    let mut queue = VecDeque::with_capacity((width as usize + height as usize) * 2);

    for (x, y) in border_coords(width, height) {
        push(&mut queue, &mut visited, mask, width, x, y);
    }

    let mut cleared = 0;
    while let Some((x, y)) = queue.pop_front() {
        output.get_pixel_mut(x, y)[3] = 0;
        cleared += 1;

        if x > 0 {
            push(&mut queue, &mut visited, mask, width, x - 1, y);
        }
        if x + 1 < width {
            push(&mut queue, &mut visited, mask, width, x + 1, y);
        }
        if y > 0 {
            push(&mut queue, &mut visited, mask, width, x, y - 1);
        }
        if y + 1 < height {
            push(&mut queue, &mut visited, mask, width, x, y + 1);
        }
    }

    cleared
}

/// Every coordinate on the outer ring of a `width` x `height` grid.
///
/// Rows 0 and `height - 1` first, then the left and right columns without
/// their corners. A single row or column yields some coordinates twice.
fn border_coords(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let rows = (0..width).flat_map(move |x| [(x, 0), (x, height - 1)]);
    let cols = (1..height.saturating_sub(1)).flat_map(move |y| [(0, y), (width - 1, y)]);
    rows.chain(cols)
}

#[inline]
fn push(
    queue: &mut VecDeque<(u32, u32)>,
    visited: &mut [bool],
    mask: &BackgroundMask,
    width: u32,
    x: u32,
    y: u32,
) {
    let idx = pixel_index(width, x, y);
    if visited[idx] {
        return;
    }
    visited[idx] = true;
    if mask.is_background(idx) {
        queue.push_back((x, y));
    }
}

#[inline]
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use image::{Rgba, RgbaImage};

    use super::{apply_edge_connected_mask, border_coords};
    use crate::image::background::mask::BackgroundMask;

    fn mask_from(width: u32, height: u32, rows: &[&str]) -> BackgroundMask {
        let matches = rows
            .iter()
            .flat_map(|row| row.chars().map(|c| c == '.'))
            .collect::<Vec<_>>();
        assert_eq!(matches.len(), width as usize * height as usize);
        BackgroundMask {
            width,
            height,
            matches,
        }
    }

    fn alpha_map(img: &RgbaImage) -> Vec<String> {
        (0..img.height())
            .map(|y| {
                (0..img.width())
                    .map(|x| if img.get_pixel(x, y)[3] == 0 { '.' } else { '#' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn border_covers_every_ring_pixel() {
        let coords: HashSet<_> = border_coords(5, 4).collect();
        assert_eq!(coords.len(), 2 * 5 + 2 * (4 - 2));
        assert!(coords.contains(&(0, 0)));
        assert!(coords.contains(&(4, 3)));
        assert!(coords.contains(&(0, 2)));
        assert!(!coords.contains(&(2, 2)));
    }

    #[test]
    fn border_of_single_row_and_column() {
        let row: HashSet<_> = border_coords(4, 1).collect();
        assert_eq!(row.len(), 4);

        let col: HashSet<_> = border_coords(1, 3).collect();
        assert_eq!(col, HashSet::from([(0, 0), (0, 1), (0, 2)]));
    }

    #[test]
    fn fills_through_background_channel() {
        let mask = mask_from(5, 5, &["..###", "#.###", "#...#", "###.#", "###.#"]);
        let mut img = RgbaImage::from_pixel(5, 5, Rgba([1, 2, 3, 255]));

        let cleared = apply_edge_connected_mask(&mut img, &mask);

        assert_eq!(cleared, 8);
        assert_eq!(
            alpha_map(&img),
            expected(&["..###", "#.###", "#...#", "###.#", "###.#"])
        );
        // RGB is never touched.
        assert!(img.pixels().all(|p| p[0] == 1 && p[1] == 2 && p[2] == 3));
    }

    #[test]
    fn does_not_cross_diagonals() {
        let mask = mask_from(3, 3, &["###", "#.#", "##."]);
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));

        apply_edge_connected_mask(&mut img, &mask);

        assert_eq!(alpha_map(&img), expected(&["###", "###", "##."]));
    }

    #[test]
    fn keeps_enclosed_region() {
        let mask = mask_from(5, 5, &[".....", ".###.", ".#.#.", ".###.", "....."]);
        let mut img = RgbaImage::from_pixel(5, 5, Rgba([0, 0, 0, 200]));

        let cleared = apply_edge_connected_mask(&mut img, &mask);

        assert_eq!(cleared, 16);
        assert_eq!(img.get_pixel(2, 2)[3], 200);
        assert_eq!(img.get_pixel(1, 1)[3], 200);
    }

    #[test]
    fn no_background_on_border_changes_nothing() {
        let mask = mask_from(3, 3, &["###", "#.#", "###"]);
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
        let before = img.clone();

        assert_eq!(apply_edge_connected_mask(&mut img, &mask), 0);
        assert_eq!(img, before);
    }

    #[test]
    fn empty_image_is_noop() {
        let mask = BackgroundMask {
            width: 0,
            height: 0,
            matches: Vec::new(),
        };
        let mut img = RgbaImage::new(0, 0);
        assert_eq!(apply_edge_connected_mask(&mut img, &mask), 0);
    }

    fn expected(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }
}
