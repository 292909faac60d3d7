use std::cmp::Ordering;

/// Direction of a rank movement.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Moved toward rank 1.
    Up,
    /// Moved away from rank 1.
    Down,
    /// Unchanged.
    Same,
}

/// Rank movement between two snapshots.
///
/// `amount` is zero exactly when `direction` is [`Direction::Same`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionChange {
    /// Direction.
    pub direction: Direction,
    /// Number of places moved.
    pub amount: u32,
}

impl PositionChange {
    /// No movement.
    pub const SAME: Self = Self {
        direction: Direction::Same,
        amount: 0,
    };

    /// Movement from `previous` to `current` rank.
    pub fn between(current: u32, previous: u32) -> Self {
        match previous.cmp(&current) {
            Ordering::Equal => Self::SAME,
            Ordering::Greater => Self {
                direction: Direction::Up,
                amount: previous - current,
            },
            Ordering::Less => Self {
                direction: Direction::Down,
                amount: current - previous,
            },
        }
    }

    /// Returns whether the rank changed.
    pub fn is_moved(&self) -> bool {
        self.direction != Direction::Same
    }

    /// Short indicator such as `▲2` or `▼1`; empty when unchanged.
    pub fn indicator(&self) -> String {
        match self.direction {
            Direction::Up => format!("▲{}", self.amount),
            Direction::Down => format!("▼{}", self.amount),
            Direction::Same => String::new(),
        }
    }
}

/// Movement from `previous` to `current` rank.
pub fn position_change(current: u32, previous: u32) -> PositionChange {
    PositionChange::between(current, previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_direction_and_amount() {
        assert_eq!(
            position_change(3, 5),
            PositionChange {
                direction: Direction::Up,
                amount: 2
            }
        );
        assert_eq!(
            position_change(5, 3),
            PositionChange {
                direction: Direction::Down,
                amount: 2
            }
        );
        assert_eq!(position_change(4, 4), PositionChange::SAME);
    }

    #[test]
    fn amount_is_zero_only_when_unchanged() {
        for current in 1..=12 {
            for previous in 1..=12 {
                let change = position_change(current, previous);
                assert_eq!(change.amount == 0, change.direction == Direction::Same);
                assert_eq!(change.amount, current.abs_diff(previous));
                assert_eq!(change.indicator().is_empty(), !change.is_moved());
            }
        }
    }
}
