use std::collections::VecDeque;

use super::{action::Direction, grid::Cell};

/// Default first joint index that counts for self-collision.
pub const DEFAULT_TAIL_MIN_INDEX: usize = 6;

/// The snake in the game.
///
/// Joints are stored head first. A freshly created snake has every joint
/// stacked on the start cell; they spread out one move at a time as the
/// head advances. Growth is lazy: `grow` records outstanding joints and
/// each `move_forward` realizes one of them by keeping the tail in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    joints: VecDeque<Cell>,
    direction: Direction,
    step: i32,
    pending_growth: usize,
}

impl Snake {
    /// Create a snake of `length` joints all on `start`.
    ///
    /// `capacity` is a sizing hint for the joint buffer, normally the
    /// board's total cell count.
    pub fn new(
        start: Cell,
        direction: Direction,
        length: usize,
        step: i32,
        capacity: usize,
    ) -> Self {
        let length = length.max(1);
        let mut joints = VecDeque::with_capacity(capacity.max(length));
        joints.extend(std::iter::repeat_n(start, length));

        Self {
            joints,
            direction,
            step,
            pending_growth: 0,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Change direction unless it would reverse into the neck.
    /// Returns whether the change was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advance one step in the current direction
    pub fn move_forward(&mut self) {
        let new_head = self.head().stepped(self.direction, self.step);
        self.joints.push_front(new_head);

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.joints.pop_back();
        }
    }

    /// Schedule `joints` extra joints, realized over the next moves
    pub fn grow(&mut self, joints: usize) {
        self.pending_growth += joints;
    }

    pub fn head(&self) -> Cell {
        self.joints[0]
    }

    pub fn tail(&self) -> Cell {
        self.joints[self.joints.len() - 1]
    }

    /// Joint at `index`, head first
    pub fn joint(&self, index: usize) -> Option<Cell> {
        self.joints.get(index).copied()
    }

    /// All joints, head first
    pub fn joints(
        &self,
    ) -> impl DoubleEndedIterator<Item = Cell> + ExactSizeIterator + '_ {
        self.joints.iter().copied()
    }

    /// Number of joints currently on the board
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// Always false: a snake has at least its head
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Length once all outstanding growth has been realized
    pub fn target_len(&self) -> usize {
        self.joints.len() + self.pending_growth
    }

    pub fn pending_growth(&self) -> usize {
        self.pending_growth
    }

    /// True if the head sits on any joint at `tail_min_index` or beyond.
    ///
    /// Joints closer to the head are ignored, so a short snake can never
    /// bite itself.
    pub fn collides_with_self(&self, tail_min_index: usize) -> bool {
        let head = self.head();
        self.joints
            .iter()
            .skip(tail_min_index.max(1))
            .any(|&joint| joint == head)
    }
}
