use super::direction::Direction;
use super::grid::Segment;
use std::collections::VecDeque;

/// The cells occupied by the snake, ordered from head to tail
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Body {
    segments: VecDeque<Segment>,
}

impl Body {
    /// Create a snake of `len` segments with its head at `head`, facing
    /// `direction`, with the rest of the body trailing straight behind it.
    ///
    /// Returns `None` if `len` is zero or the body would not fit between the
    /// head and the edge of an `nrows`×`ncols` board.
    pub(crate) fn new(
        head: Segment,
        direction: Direction,
        len: usize,
        nrows: u16,
        ncols: u16,
    ) -> Option<Body> {
        let behind = direction.reverse();
        let segments = std::iter::successors(Some(head), |&seg| behind.advance(seg, nrows, ncols))
            .take(len)
            .collect::<VecDeque<_>>();
        (len > 0 && segments.len() == len).then_some(Body { segments })
    }

    #[cfg(test)]
    pub(crate) fn from_segments<I: IntoIterator<Item = Segment>>(iter: I) -> Body {
        let segments = iter.into_iter().collect::<VecDeque<_>>();
        assert!(!segments.is_empty(), "a snake body needs at least one segment");
        Body { segments }
    }

    pub(crate) fn head(&self) -> Segment {
        self.segments[0]
    }

    pub(crate) fn tail(&self) -> Segment {
        self.segments[self.segments.len() - 1]
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Iterate over the segments from head to tail
    pub(crate) fn iter(&self) -> impl Iterator<Item = Segment> + '_ {
        self.segments.iter().copied()
    }

    pub(crate) fn prepend_head(&mut self, seg: Segment) {
        self.segments.push_front(seg);
    }

    /// Remove and return the tail segment.  The last remaining segment is
    /// never removed; `None` is returned instead.
    pub(crate) fn remove_tail(&mut self) -> Option<Segment> {
        if self.segments.len() > 1 {
            self.segments.pop_back()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        Direction::Down,
        Segment::new(10, 20),
        vec![Segment::new(10, 20), Segment::new(9, 20), Segment::new(8, 20)]
    )]
    #[case(
        Direction::Up,
        Segment::new(10, 20),
        vec![Segment::new(10, 20), Segment::new(11, 20), Segment::new(12, 20)]
    )]
    #[case(
        Direction::Right,
        Segment::new(4, 5),
        vec![Segment::new(4, 5), Segment::new(4, 4), Segment::new(4, 3)]
    )]
    #[case(
        Direction::Left,
        Segment::new(4, 5),
        vec![Segment::new(4, 5), Segment::new(4, 6), Segment::new(4, 7)]
    )]
    fn new_trails_behind_head(
        #[case] direction: Direction,
        #[case] head: Segment,
        #[case] expected: Vec<Segment>,
    ) {
        let body = Body::new(head, direction, 3, 20, 40).unwrap();
        assert_eq!(body.iter().collect::<Vec<_>>(), expected);
        assert_eq!(body.head(), head);
        assert_eq!(body.tail(), expected[2]);
    }

    #[test]
    fn new_does_not_fit() {
        assert_eq!(Body::new(Segment::new(1, 5), Direction::Down, 3, 20, 40), None);
        assert_eq!(Body::new(Segment::new(1, 5), Direction::Down, 0, 20, 40), None);
    }

    #[test]
    fn prepend_and_remove() {
        let mut body = Body::new(Segment::new(5, 5), Direction::Down, 3, 20, 40).unwrap();
        body.prepend_head(Segment::new(6, 5));
        assert_eq!(body.len(), 4);
        assert_eq!(body.head(), Segment::new(6, 5));
        assert_eq!(body.remove_tail(), Some(Segment::new(3, 5)));
        assert_eq!(body.tail(), Segment::new(4, 5));
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn remove_last_segment() {
        let mut body = Body::from_segments([Segment::new(2, 2), Segment::new(2, 3)]);
        assert_eq!(body.remove_tail(), Some(Segment::new(2, 3)));
        assert_eq!(body.remove_tail(), None);
        assert_eq!(body.len(), 1);
        assert_eq!(body.head(), Segment::new(2, 2));
        assert_eq!(body.tail(), Segment::new(2, 2));
    }
}
