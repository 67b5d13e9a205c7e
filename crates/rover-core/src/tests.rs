//! Unit tests for rover-core primitives.

#[cfg(test)]
mod ids {
    use crate::RoverId;

    #[test]
    fn index_roundtrip() {
        let id = RoverId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RoverId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordinal_is_one_based() {
        assert_eq!(RoverId(0).ordinal(), 1);
        assert_eq!(RoverId(6).ordinal(), 7);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(RoverId::INVALID.0, u32::MAX);
        assert_eq!(RoverId::default(), RoverId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(RoverId(7).to_string(), "RoverId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Axis, Cell, CoreError, Grid, Heading};

    #[test]
    fn corners_are_inside() {
        let grid = Grid::new(5, 5).unwrap();
        assert!(grid.contains(0, 0));
        assert!(grid.contains(5, 5));
        assert!(grid.contains(0, 5));
        assert!(grid.contains(5, 0));
    }

    #[test]
    fn outside_by_one_is_rejected() {
        let grid = Grid::new(5, 5).unwrap();
        assert!(!grid.contains(6, 0));
        assert!(!grid.contains(0, 6));
        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(0, -1));
    }

    #[test]
    fn non_positive_extents_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(CoreError::NonPositiveExtent { axis: Axis::X, value: 0 })
        );
        assert_eq!(
            Grid::new(5, -3),
            Err(CoreError::NonPositiveExtent { axis: Axis::Y, value: -3 })
        );
        // X is checked first when both are bad.
        assert_eq!(
            Grid::new(-1, -1),
            Err(CoreError::NonPositiveExtent { axis: Axis::X, value: -1 })
        );
    }

    #[test]
    fn step_deltas() {
        let origin = Cell::new(3, 3);
        assert_eq!(origin.step(Heading::North), Cell::new(3, 4));
        assert_eq!(origin.step(Heading::South), Cell::new(3, 2));
        assert_eq!(origin.step(Heading::East), Cell::new(4, 3));
        assert_eq!(origin.step(Heading::West), Cell::new(2, 3));
    }

    #[test]
    fn cell_display() {
        assert_eq!(Cell::new(1, 2).to_string(), "(1, 2)");
    }
}

#[cfg(test)]
mod heading {
    use crate::{CoreError, Heading, Turn};

    const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    #[test]
    fn right_is_clockwise_cycle() {
        assert_eq!(Heading::North.turned(Turn::Right), Heading::East);
        assert_eq!(Heading::East.turned(Turn::Right), Heading::South);
        assert_eq!(Heading::South.turned(Turn::Right), Heading::West);
        assert_eq!(Heading::West.turned(Turn::Right), Heading::North);
    }

    #[test]
    fn left_is_counter_clockwise_cycle() {
        assert_eq!(Heading::North.turned(Turn::Left), Heading::West);
        assert_eq!(Heading::West.turned(Turn::Left), Heading::South);
        assert_eq!(Heading::South.turned(Turn::Left), Heading::East);
        assert_eq!(Heading::East.turned(Turn::Left), Heading::North);
    }

    #[test]
    fn four_turns_are_identity() {
        for start in ALL {
            let mut h = start;
            for _ in 0..4 {
                h = h.turned(Turn::Right);
            }
            assert_eq!(h, start);
            for _ in 0..4 {
                h = h.turned(Turn::Left);
            }
            assert_eq!(h, start);
        }
    }

    #[test]
    fn left_then_right_cancels() {
        for start in ALL {
            assert_eq!(start.turned(Turn::Left).turned(Turn::Right), start);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Heading::from_char('n').unwrap(), Heading::North);
        assert_eq!(Heading::from_char('W').unwrap(), Heading::West);
        assert_eq!(Heading::from_char('q'), Err(CoreError::InvalidHeading('q')));
    }

    #[test]
    fn char_roundtrip() {
        for h in ALL {
            assert_eq!(Heading::from_char(h.as_char()).unwrap(), h);
            assert_eq!(h.to_string(), h.as_char().to_string());
        }
    }
}

#[cfg(test)]
mod instruction {
    use crate::{CoreError, Instruction};

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Instruction::from_char('l').unwrap(), Instruction::TurnLeft);
        assert_eq!(Instruction::from_char('R').unwrap(), Instruction::TurnRight);
        assert_eq!(Instruction::from_char('m').unwrap(), Instruction::Advance);
        assert_eq!(
            Instruction::from_char('x'),
            Err(CoreError::InvalidInstruction('x'))
        );
    }

    #[test]
    fn char_roundtrip() {
        for i in [Instruction::TurnLeft, Instruction::TurnRight, Instruction::Advance] {
            assert_eq!(Instruction::from_char(i.as_char()).unwrap(), i);
        }
    }
}
