use super::grid::Segment;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the cell one step from `seg` in this direction, or `None` if
    /// that would leave an `nrows`×`ncols` board.
    pub(crate) fn advance(self, seg: Segment, nrows: u16, ncols: u16) -> Option<Segment> {
        let Segment { mut row, mut col } = seg;
        match self {
            Direction::Up => row = row.checked_sub(1)?,
            Direction::Down => row = row.checked_add(1).filter(|&r| r < nrows)?,
            Direction::Left => col = col.checked_sub(1)?,
            Direction::Right => col = col.checked_add(1).filter(|&c| c < ncols)?,
        }
        Some(Segment { row, col })
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Segment::new(7, 2), Some(Segment::new(6, 2)))]
    #[case(Direction::Down, Segment::new(7, 2), Some(Segment::new(8, 2)))]
    #[case(Direction::Left, Segment::new(7, 2), Some(Segment::new(7, 1)))]
    #[case(Direction::Right, Segment::new(7, 2), Some(Segment::new(7, 3)))]
    #[case(Direction::Up, Segment::new(0, 2), None)]
    #[case(Direction::Down, Segment::new(14, 2), None)]
    #[case(Direction::Left, Segment::new(7, 0), None)]
    #[case(Direction::Right, Segment::new(7, 9), None)]
    #[case(Direction::Down, Segment::new(13, 9), Some(Segment::new(14, 9)))]
    #[case(Direction::Right, Segment::new(14, 8), Some(Segment::new(14, 9)))]
    fn test_advance(#[case] d: Direction, #[case] seg: Segment, #[case] r: Option<Segment>) {
        assert_eq!(d.advance(seg, 15, 10), r);
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down)]
    #[case(Direction::Down, Direction::Up)]
    #[case(Direction::Left, Direction::Right)]
    #[case(Direction::Right, Direction::Left)]
    fn test_reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
        assert_eq!(r.reverse(), d);
    }
}
