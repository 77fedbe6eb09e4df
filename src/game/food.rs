//! Food placement and consumption

use rand::Rng;

use super::state::{Position, Snake};

/// Pick a cell uniformly at random that is neither snake nor food.
///
/// Uses rejection sampling. Returns `None` only when the board has no free
/// cell left, which would otherwise make the sampling loop spin forever.
pub fn spawn_food<R: Rng>(
    rng: &mut R,
    width: usize,
    height: usize,
    snake: &Snake,
    food: &[Position],
) -> Option<Position> {
    let blocked = |pos: Position| snake.occupies(pos) || food.contains(&pos);

    if snake.len() + food.len() >= width * height {
        let any_free = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Position::new(x, y)))
            .any(|pos| !blocked(pos));
        if !any_free {
            return None;
        }
    }

    loop {
        let x = rng.gen_range(0..width) as i32;
        let y = rng.gen_range(0..height) as i32;
        let pos = Position::new(x, y);

        if !blocked(pos) {
            return Some(pos);
        }
    }
}

/// Remove every food cell equal to `eaten`, then add `replacement`.
///
/// With one eaten cell and one replacement the food count stays the same.
pub fn replace_eaten(food: &[Position], eaten: Position, replacement: Option<Position>) -> Vec<Position> {
    food.iter()
        .copied()
        .filter(|&pos| pos != eaten)
        .chain(replacement)
        .collect()
}
