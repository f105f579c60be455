//! Pointer interaction state.

use common::Point;

/// Press state of the pointer, advanced once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerInteraction {
    /// Went down since the previous frame.
    PressedThisFrame,
    /// Held down for more than one frame.
    Pressed,
    /// Went up since the previous frame.
    ReleasedThisFrame,
    #[default]
    Released,
}

impl PointerInteraction {
    /// State for the next frame given whether the pointer is down now.
    pub fn next(self, is_down: bool) -> Self {
        use PointerInteraction::*;
        match (self, is_down) {
            (PressedThisFrame | Pressed, true) => Pressed,
            (PressedThisFrame | Pressed, false) => ReleasedThisFrame,
            (ReleasedThisFrame | Released, true) => PressedThisFrame,
            (ReleasedThisFrame | Released, false) => Released,
        }
    }

    pub fn is_pressed(self) -> bool {
        matches!(self, PointerInteraction::PressedThisFrame | PointerInteraction::Pressed)
    }

    pub fn pressed_this_frame(self) -> bool {
        self == PointerInteraction::PressedThisFrame
    }

    pub fn released_this_frame(self) -> bool {
        self == PointerInteraction::ReleasedThisFrame
    }
}

/// Pointer position and press state for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerData {
    pub position: Point,
    pub state: PointerInteraction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PointerInteraction::*;

    #[test]
    fn test_transition_table() {
        let table = [
            (PressedThisFrame, true, Pressed),
            (PressedThisFrame, false, ReleasedThisFrame),
            (Pressed, true, Pressed),
            (Pressed, false, ReleasedThisFrame),
            (ReleasedThisFrame, true, PressedThisFrame),
            (ReleasedThisFrame, false, Released),
            (Released, true, PressedThisFrame),
            (Released, false, Released),
        ];
        for (from, is_down, to) in table {
            assert_eq!(from.next(is_down), to, "{:?} with is_down={}", from, is_down);
        }
    }

    #[test]
    fn test_held_pointer_stays_pressed() {
        let mut state = PointerInteraction::default().next(true);
        assert!(state.pressed_this_frame());
        for _ in 0..10 {
            state = state.next(true);
            assert_eq!(state, Pressed);
        }
    }

    #[test]
    fn test_click_cycle() {
        let states: Vec<_> = [true, true, false, false]
            .iter()
            .scan(Released, |state, &down| {
                *state = state.next(down);
                Some(*state)
            })
            .collect();
        assert_eq!(states, vec![PressedThisFrame, Pressed, ReleasedThisFrame, Released]);
        assert!(states[0].is_pressed() && states[1].is_pressed());
        assert!(states[2].released_this_frame());
        assert!(!states[3].is_pressed());
    }
}
