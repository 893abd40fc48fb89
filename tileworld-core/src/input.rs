// Handheld button events
//
// The editors react to six buttons: the D-pad plus A (confirm) and
// B (cancel). Hosts report which buttons are held once per frame and the
// `ButtonRepeater` turns that into discrete events:
//
//   frame 1 held          -> Pressed
//   frames 2..=delay      -> nothing
//   every `interval` after -> Repeated
//
// Releasing a button resets its timer, so the next hold starts with a
// fresh Pressed event.

use alloc::vec::Vec;

/// Number of buttons the editors listen to.
pub const NUM_BUTTONS: usize = 6;

/// Frames a button must be held before it starts repeating.
pub const DEFAULT_REPEAT_DELAY: u32 = 18;
/// Frames between repeats once repeating.
pub const DEFAULT_REPEAT_INTERVAL: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    A,
    B,
}

impl Button {
    /// All buttons, in the index order used by held-state arrays.
    pub const ALL: [Button; NUM_BUTTONS] = [
        Button::Left,
        Button::Right,
        Button::Up,
        Button::Down,
        Button::A,
        Button::B,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    Pressed,
    Repeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub button: Button,
    pub press: Press,
}

impl ButtonEvent {
    pub fn pressed(button: Button) -> Self {
        ButtonEvent { button, press: Press::Pressed }
    }

    pub fn repeated(button: Button) -> Self {
        ButtonEvent { button, press: Press::Repeated }
    }
}

/// Per-button hold timers that turn held states into button events.
pub struct ButtonRepeater {
    timers: [u32; NUM_BUTTONS],
    delay: u32,
    interval: u32,
}

impl ButtonRepeater {
    /// Create a repeater. `interval` is clamped to at least one frame.
    pub fn new(delay: u32, interval: u32) -> Self {
        Self {
            timers: [0; NUM_BUTTONS],
            delay,
            interval: interval.max(1),
        }
    }

    /// Advance one frame. `held[i]` is `true` while `Button::ALL[i]` is
    /// down. Returns the events that fire this frame, in button order.
    pub fn update(&mut self, held: [bool; NUM_BUTTONS]) -> Vec<ButtonEvent> {
        let mut events = Vec::new();
        for (i, &down) in held.iter().enumerate() {
            if !down {
                self.timers[i] = 0;
                continue;
            }
            self.timers[i] = self.timers[i].saturating_add(1);
            if let Some(press) = self.fire(self.timers[i]) {
                events.push(ButtonEvent { button: Button::ALL[i], press });
            }
        }
        events
    }

    fn fire(&self, t: u32) -> Option<Press> {
        if t == 1 {
            return Some(Press::Pressed);
        }
        if t <= self.delay {
            return None;
        }
        if (t - self.delay) % self.interval == 0 {
            Some(Press::Repeated)
        } else {
            None
        }
    }
}

impl Default for ButtonRepeater {
    fn default() -> Self {
        Self::new(DEFAULT_REPEAT_DELAY, DEFAULT_REPEAT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(button: Button) -> [bool; NUM_BUTTONS] {
        let mut held = [false; NUM_BUTTONS];
        held[Button::ALL.iter().position(|&b| b == button).unwrap()] = true;
        held
    }

    #[test]
    fn test_first_frame_fires_pressed() {
        let mut rep = ButtonRepeater::default();
        assert_eq!(rep.update(only(Button::A)), alloc::vec![ButtonEvent::pressed(Button::A)]);
        assert!(rep.update(only(Button::A)).is_empty());
    }

    #[test]
    fn test_repeat_after_delay_then_every_interval() {
        let mut rep = ButtonRepeater::new(3, 2);
        let fired: Vec<usize> = (1..=9)
            .filter_map(|frame| {
                let ev = rep.update(only(Button::Left));
                (!ev.is_empty()).then_some(frame)
            })
            .collect();
        // pressed on 1, repeats on 5, 7, 9
        assert_eq!(fired, alloc::vec![1, 5, 7, 9]);
    }

    #[test]
    fn test_release_resets_timer() {
        let mut rep = ButtonRepeater::new(2, 1);
        rep.update(only(Button::Up));
        rep.update(only(Button::Up));
        rep.update([false; NUM_BUTTONS]);
        assert_eq!(rep.update(only(Button::Up)), alloc::vec![ButtonEvent::pressed(Button::Up)]);
    }

    #[test]
    fn test_events_in_button_order() {
        let mut rep = ButtonRepeater::default();
        let ev = rep.update([true, false, false, true, false, true]);
        let buttons: Vec<Button> = ev.iter().map(|e| e.button).collect();
        assert_eq!(buttons, alloc::vec![Button::Left, Button::Down, Button::B]);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut rep = ButtonRepeater::new(0, 0);
        assert_eq!(rep.update(only(Button::B))[0].press, Press::Pressed);
        assert_eq!(rep.update(only(Button::B))[0].press, Press::Repeated);
    }
}
