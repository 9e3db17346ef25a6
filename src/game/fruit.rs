use super::grid::{CellState, Grid, Segment};
use log::debug;
use rand::Rng;

/// Pick a uniformly random cell of `grid` that is not part of the snake, mark
/// it as holding the fruit, and return it.
///
/// Cells are sampled until a free one turns up.  If the snake covers the
/// entire grid, `None` is returned without sampling.
pub(crate) fn place<R: Rng>(grid: &mut Grid, rng: &mut R) -> Option<Segment> {
    if !grid.has_vacancy() {
        return None;
    }
    let mut attempts = 0u32;
    let seg = loop {
        attempts = attempts.saturating_add(1);
        let seg = Segment::new(
            rng.random_range(0..grid.nrows()),
            rng.random_range(0..grid.ncols()),
        );
        if grid.get(seg) != CellState::SnakeBody {
            break seg;
        }
    };
    grid.set(seg, CellState::Fruit);
    debug!(
        "Placed fruit at ({}, {}) after {attempts} attempt(s)",
        seg.row, seg.col
    );
    Some(seg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn place_on_empty_grid() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut grid = Grid::new(20, 40);
        let seg = place(&mut grid, &mut rng).unwrap();
        assert!(seg.row < 20);
        assert!(seg.col < 40);
        assert_eq!(grid.get(seg), CellState::Fruit);
        assert_eq!(grid.count(CellState::Fruit), 1);
    }

    #[test]
    fn place_avoids_snake() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..50 {
            let mut grid = Grid::new(3, 3);
            for row in 0..3 {
                for col in 0..3 {
                    if (row, col) != (1, 2) {
                        grid.set(Segment::new(row, col), CellState::SnakeBody);
                    }
                }
            }
            assert_eq!(place(&mut grid, &mut rng), Some(Segment::new(1, 2)));
            assert_eq!(grid.get(Segment::new(1, 2)), CellState::Fruit);
            assert_eq!(grid.count(CellState::SnakeBody), 8);
        }
    }

    #[test]
    fn place_on_full_grid() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut grid = Grid::new(2, 3);
        for row in 0..2 {
            for col in 0..3 {
                grid.set(Segment::new(row, col), CellState::SnakeBody);
            }
        }
        let before = grid.clone();
        assert_eq!(place(&mut grid, &mut rng), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn placements_spread_over_grid() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let mut grid = Grid::new(2, 2);
            seen.insert(place(&mut grid, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 4);
    }
}
