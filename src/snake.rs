use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring position one cell away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Mutable snake state: the segment chain and its heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    grow: bool,
}

impl Snake {
    /// Creates a snake of `length` segments stacked on `start`.
    ///
    /// The stacked segments unroll one cell per movement step. The backing
    /// buffer is preallocated to `capacity` cells so growth never
    /// reallocates.
    #[must_use]
    pub fn new(start: Position, heading: Direction, length: usize, capacity: usize) -> Self {
        let mut body = VecDeque::with_capacity(capacity.max(length));
        body.extend(std::iter::repeat(start).take(length));

        Self {
            body,
            heading,
            grow: false,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            heading,
            grow: false,
        }
    }

    /// Applies `next` as the new heading unless it reverses the current one.
    ///
    /// Reversal requests are silently dropped. The latest accepted request
    /// is what the next [`advance`](Self::advance) reads.
    pub fn request_heading(&mut self, next: Direction) {
        if next == self.heading.opposite() {
            return;
        }

        self.heading = next;
    }

    /// Queues one segment of growth for the next movement step.
    pub fn grow_next(&mut self) {
        self.grow = true;
    }

    /// Moves the body one cell along the current heading.
    ///
    /// Pushing a new head and dropping the tail is the deque form of the
    /// tail-to-head shift; the tail is kept instead when growth is queued.
    pub fn advance(&mut self) {
        let next_head = self.head().step(self.heading);
        self.body.push_front(next_head);

        if !self.grow {
            let _ = self.body.pop_back();
        }
        self.grow = false;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if the head occupies the same cell as any other segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current heading.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn snake_moves_one_cell_per_step() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 1, 16);

        snake.advance();

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn accepted_heading_moves_head_one_cell_that_way() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 1, 16);

        snake.request_heading(Direction::Up);
        snake.advance();

        assert_eq!(snake.head(), Position { x: 5, y: 4 });
    }

    #[test]
    fn reversal_request_is_ignored() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 1, 16);

        snake.request_heading(Direction::Left);

        assert_eq!(snake.heading(), Direction::Right);

        snake.advance();
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
    }

    #[test]
    fn latest_accepted_request_wins() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 1, 16);

        snake.request_heading(Direction::Up);
        snake.request_heading(Direction::Down);
        snake.advance();

        assert_eq!(snake.head(), Position { x: 5, y: 6 });
    }

    #[test]
    fn growth_keeps_previous_tail() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 1, 16);

        snake.grow_next();
        snake.advance();
        assert_eq!(snake.len(), 2);

        // Growth applies to exactly one step.
        snake.advance();
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn stacked_start_unrolls_without_losing_segments() {
        let mut snake = Snake::new(Position { x: 0, y: 0 }, Direction::Right, 6, 64);

        for step in 1..=5 {
            snake.advance();
            assert_eq!(snake.len(), 6);
            assert_eq!(snake.head(), Position { x: step, y: 0 });
        }

        // Fully unrolled: six distinct cells in a row.
        let segments: Vec<Position> = snake.segments().copied().collect();
        for (offset, segment) in segments.iter().enumerate() {
            assert_eq!(*segment, Position {
                x: 5 - offset as i32,
                y: 0
            });
        }
    }

    #[test]
    fn head_overlap_detects_self_collision_only_past_the_head() {
        let coiled = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 2, y: 2 },
            ],
            Direction::Up,
        );
        assert!(coiled.head_overlaps_body());

        let straight = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 0, y: 2 },
            ],
            Direction::Right,
        );
        assert!(!straight.head_overlaps_body());
    }
}
