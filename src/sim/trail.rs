//! Fingertip trail
//!
//! Bounded history of recent fingertip positions, oldest first. The same
//! points are drawn as the slash ribbon and tested for slices.

use std::collections::VecDeque;

use glam::Vec2;

#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a point, evicting the oldest past capacity
    pub fn push(&mut self, point: Vec2) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in insertion order
    pub fn points(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    /// Consecutive point pairs, oldest segment first
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.iter().zip(self.points.iter().skip(1)).map(|(a, b)| (*a, *b))
    }

    pub fn to_vec(&self) -> Vec<Vec2> {
        self.points.iter().copied().collect()
    }
}
