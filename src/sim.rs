use crate::{
    device::{Board, Display, Feedback, Level, SerialLog, TextDisplay},
    serial::MemorySerial,
};

/// LED and buzzer state as the panel would show it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelFeedback {
    pub signal: bool,
    pub chirps: u32,
}

impl Feedback for PanelFeedback {
    fn set_signal(&mut self, on: bool) {
        self.signal = on;
    }

    fn chirp(&mut self) {
        self.chirps += 1;
    }
}

/// Virtual knob and button wired to a text display, panel lights and a
/// serial monitor.
#[derive(Debug, Clone)]
pub struct SimBoard {
    knob: i32,
    analog_max: i32,
    button: Level,
    pub display: TextDisplay,
    pub feedback: PanelFeedback,
    pub serial: MemorySerial,
}

impl SimBoard {
    pub fn new(analog_max: i32) -> Self {
        Self {
            knob: 0,
            analog_max: analog_max.max(1),
            button: Level::Low,
            display: TextDisplay::default(),
            feedback: PanelFeedback::default(),
            serial: MemorySerial::default(),
        }
    }

    pub fn knob(&self) -> i32 {
        self.knob
    }

    pub fn analog_max(&self) -> i32 {
        self.analog_max
    }

    pub fn set_knob(&mut self, value: i32) {
        self.knob = value.clamp(0, self.analog_max);
    }

    pub fn turn_knob(&mut self, delta: i32) {
        self.set_knob(self.knob.saturating_add(delta));
    }

    pub fn button(&self) -> Level {
        self.button
    }

    pub fn set_button(&mut self, level: Level) {
        self.button = level;
    }
}

impl Board for SimBoard {
    fn read_analog(&mut self) -> i32 {
        self.knob
    }

    fn read_button(&mut self) -> Level {
        self.button
    }

    fn display(&mut self) -> &mut dyn Display {
        &mut self.display
    }

    fn feedback(&mut self) -> &mut dyn Feedback {
        &mut self.feedback
    }

    fn serial(&mut self) -> &mut dyn SerialLog {
        &mut self.serial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knob_is_clamped() {
        let mut board = SimBoard::new(1023);
        board.turn_knob(-5);
        assert_eq!(board.knob(), 0);
        board.turn_knob(2000);
        assert_eq!(board.knob(), 1023);
        board.set_knob(i32::MIN);
        assert_eq!(board.knob(), 0);
        board.set_knob(512);
        assert_eq!(board.read_analog(), 512);
    }

    #[test]
    fn test_board_routes_to_parts() {
        let mut board = SimBoard::new(1023);
        board.set_button(Level::High);
        assert_eq!(board.read_button(), Level::High);

        board.feedback().set_signal(true);
        board.feedback().chirp();
        board.serial().line("hello");
        board.display().print("hi");

        assert!(board.feedback.signal);
        assert_eq!(board.feedback.chirps, 1);
        assert_eq!(board.serial.last(), Some("hello"));
        assert_eq!(board.display.row_text(0), "hi");
    }
}
