use super::round::Direction;

/// Narrows the candidate range by guessing its midpoint.
#[derive(Debug, Clone, Copy)]
pub struct Bisector {
    lower: i64,
    upper: i64,
}

impl Bisector {
    pub fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    /// `None` once feedback has ruled out every candidate.
    pub fn next_guess(&self) -> Option<i64> {
        (self.lower <= self.upper).then(|| self.lower + (self.upper - self.lower) / 2)
    }

    pub fn observe(&mut self, guess: i64, direction: Direction) {
        match direction {
            Direction::TooLow => self.lower = guess + 1,
            Direction::TooHigh => self.upper = guess - 1,
        }
    }
}
