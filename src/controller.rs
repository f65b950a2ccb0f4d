use rand::rngs::StdRng;

use crate::{
    config::Config,
    device::{Board, ButtonLatch, Display, SerialLog, DISPLAY_COLS},
    draw::{DrawSession, Pick},
    game::{GameConfig, GameType, MAX_NUMBER_LIMIT},
    input_map::{knob_value, menu_index},
};

const PICK_ROW: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    MenuSelect,
    CustomMaxNumber,
    CustomGameSize { max_number: u8 },
    Drawing,
}

/// Polling state machine for the device: menu, optional custom entry, then
/// one draw per button release.
#[derive(Debug)]
pub struct Controller {
    phase: Phase,
    latch: ButtonLatch,
    analog_max: i32,
    quiet_polls: u32,
    quiet_remaining: u32,
    selection: usize,
    knob: u8,
    session: Option<DrawSession>,
    rng: StdRng,
}

impl Controller {
    pub fn new(analog_max: i32, quiet_polls: u32, rng: StdRng) -> Self {
        Self {
            phase: Phase::MenuSelect,
            latch: ButtonLatch::default(),
            analog_max,
            quiet_polls,
            quiet_remaining: 0,
            selection: 0,
            knob: 0,
            session: None,
            rng,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.analog_max, cfg.quiet_polls(), cfg.rng())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Highlighted menu entry.
    pub fn selection(&self) -> GameType {
        GameType::from_menu_index(self.selection).unwrap_or(GameType::PowerBall)
    }

    /// Value currently shown while entering custom parameters.
    pub fn knob(&self) -> u8 {
        self.knob
    }

    pub fn session(&self) -> Option<&DrawSession> {
        self.session.as_ref()
    }

    /// One pass of the control loop.
    pub fn poll<B: Board + ?Sized>(&mut self, board: &mut B) -> Option<Pick> {
        if self.quiet_remaining > 0 {
            // feedback pulse still running; the button is not read
            self.quiet_remaining -= 1;
            return None;
        }

        let level = board.read_button();
        self.latch.sample(level);
        let released = self.latch.released();

        let pick = match self.phase {
            Phase::MenuSelect => {
                let sample = board.read_analog();
                self.selection = menu_index(sample, self.analog_max, GameType::MENU.len());
                draw_menu(board.display(), self.selection);
                if released {
                    self.confirm(board);
                    self.choose_game(board);
                }
                None
            }
            Phase::CustomMaxNumber => {
                let sample = board.read_analog();
                self.knob = knob_value(sample, self.analog_max, MAX_NUMBER_LIMIT);
                show_value(board.display(), self.knob);
                if released {
                    self.confirm(board);
                    self.phase = Phase::CustomGameSize {
                        max_number: self.knob,
                    };
                    prompt(board.display(), "howMany in game?");
                }
                None
            }
            Phase::CustomGameSize { max_number } => {
                let sample = board.read_analog();
                self.knob = knob_value(sample, self.analog_max, max_number);
                show_value(board.display(), self.knob);
                if released {
                    self.confirm(board);
                    self.start_drawing(
                        board,
                        GameConfig {
                            game_type: GameType::Custom,
                            max_number,
                            game_size: self.knob,
                        },
                    );
                }
                None
            }
            Phase::Drawing => {
                if released {
                    self.draw(board)
                } else {
                    board.feedback().set_signal(false);
                    None
                }
            }
        };

        self.latch.update();
        pick
    }

    fn confirm<B: Board + ?Sized>(&mut self, board: &mut B) {
        board.feedback().chirp();
        self.quiet_remaining = self.quiet_polls;
    }

    fn choose_game<B: Board + ?Sized>(&mut self, board: &mut B) {
        match GameConfig::preset(self.selection()) {
            Some(config) => self.start_drawing(board, config),
            None => {
                self.phase = Phase::CustomMaxNumber;
                prompt(board.display(), "Max.Number?");
            }
        }
    }

    fn start_drawing<B: Board + ?Sized>(&mut self, board: &mut B, config: GameConfig) {
        announce_config(board.serial(), &config);
        prompt(board.display(), "Picks");
        self.session = Some(DrawSession::new(config));
        self.phase = Phase::Drawing;
    }

    fn draw<B: Board + ?Sized>(&mut self, board: &mut B) -> Option<Pick> {
        let pick = self.session.as_mut()?.draw(&mut self.rng)?;

        board.feedback().set_signal(true);
        let display = board.display();
        display.set_cursor(0, PICK_ROW);
        display.print(&" ".repeat(DISPLAY_COLS as usize));
        display.set_cursor(0, PICK_ROW);
        display.print(&pick.to_string());
        board.serial().line(&pick.to_string());

        self.quiet_remaining = self.quiet_polls;
        Some(pick)
    }
}

/// Serial header sent once the game is fixed.
pub fn announce_config(serial: &mut dyn SerialLog, config: &GameConfig) {
    serial.line(&format!("max Number: {}", config.max_number));
    serial.line(&format!("game Size: {}", config.game_size));
}

fn draw_menu(display: &mut dyn Display, selection: usize) {
    for (i, game) in GameType::MENU.iter().enumerate() {
        display.set_cursor(0, i as u16 * 2);
        display.set_inverse(i == selection);
        display.print(game.menu_label());
        display.set_inverse(false);
    }
}

/// Clear the screen and put an inverted title on the first row.
fn prompt(display: &mut dyn Display, title: &str) {
    display.clear();
    display.set_inverse(true);
    display.print(title);
    display.set_inverse(false);
    display.set_cursor(0, 1);
}

fn show_value(display: &mut dyn Display, value: u8) {
    display.set_cursor(0, PICK_ROW);
    display.print(&format!("{:>5}", value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Level;
    use crate::sim::SimBoard;
    use assert_matches::assert_matches;
    use rand::SeedableRng;

    fn controller(quiet_polls: u32) -> Controller {
        Controller::new(1023, quiet_polls, StdRng::seed_from_u64(99))
    }

    fn click(ctl: &mut Controller, board: &mut SimBoard) -> Option<Pick> {
        board.set_button(Level::High);
        let first = ctl.poll(board);
        board.set_button(Level::Low);
        first.or(ctl.poll(board))
    }

    #[test]
    fn test_menu_follows_knob_inverted() {
        let mut ctl = controller(0);
        let mut board = SimBoard::new(1023);

        board.set_knob(1023);
        ctl.poll(&mut board);
        assert_eq!(ctl.selection(), GameType::PowerBall);
        assert!(board.display.cell(0, 0).unwrap().inverse);

        board.set_knob(0);
        ctl.poll(&mut board);
        assert_eq!(ctl.selection(), GameType::Custom);
        assert!(!board.display.cell(0, 0).unwrap().inverse);
        assert!(board.display.cell(0, 6).unwrap().inverse);
        assert_eq!(board.display.row_text(6), "custom");
    }

    #[test]
    fn test_press_without_release_does_not_confirm() {
        let mut ctl = controller(0);
        let mut board = SimBoard::new(1023);
        board.set_button(Level::High);
        for _ in 0..5 {
            ctl.poll(&mut board);
        }
        assert_eq!(ctl.phase(), Phase::MenuSelect);
    }

    #[test]
    fn test_lotto_flow() {
        let mut ctl = controller(0);
        let mut board = SimBoard::new(1023);
        board.set_knob(300);
        click(&mut ctl, &mut board);

        assert_eq!(ctl.phase(), Phase::Drawing);
        assert_eq!(ctl.session().unwrap().config().game_type, GameType::Lotto);
        assert_eq!(board.feedback.chirps, 1);
        assert_eq!(
            board.serial.lines().collect::<Vec<_>>(),
            vec!["max Number: 45", "game Size: 6"]
        );
        assert_eq!(board.display.row_text(0), "Picks");

        let mut values = vec![];
        for _ in 0..6 {
            let pick = click(&mut ctl, &mut board).unwrap();
            assert!(board.feedback.signal);
            values.push(pick.value);
        }
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 6);

        let next = click(&mut ctl, &mut board).unwrap();
        assert!(next.first);
        assert_eq!(next.round, 2);
        assert_eq!(ctl.session().unwrap().state().pool.len(), 44);
        assert_eq!(board.display.row_text(PICK_ROW), next.to_string());
        assert_eq!(board.serial.last(), Some(next.to_string().as_str()));
    }

    #[test]
    fn test_idle_poll_turns_signal_off() {
        let mut ctl = controller(0);
        let mut board = SimBoard::new(1023);
        board.set_knob(1023);
        click(&mut ctl, &mut board);
        click(&mut ctl, &mut board).unwrap();
        assert!(board.feedback.signal);

        ctl.poll(&mut board);
        assert!(!board.feedback.signal);
    }

    #[test]
    fn test_custom_flow() {
        let mut ctl = controller(0);
        let mut board = SimBoard::new(1023);
        board.set_knob(0);
        click(&mut ctl, &mut board);
        assert_eq!(ctl.phase(), Phase::CustomMaxNumber);
        assert_eq!(board.display.row_text(0), "Max.Number?");

        // knob at zero is the top of the range
        click(&mut ctl, &mut board);
        assert_matches!(ctl.phase(), Phase::CustomGameSize { max_number: 45 });
        assert_eq!(board.display.row_text(0), "howMany in game?");

        board.set_knob(1023);
        click(&mut ctl, &mut board);
        assert_eq!(ctl.phase(), Phase::Drawing);
        let config = *ctl.session().unwrap().config();
        assert_eq!(config, GameConfig::custom(45, 1).unwrap());

        let pick = click(&mut ctl, &mut board).unwrap();
        assert!(pick.first && pick.last && !pick.powerball);
    }

    #[test]
    fn test_press_during_pulse_is_dropped() {
        let mut ctl = controller(2);
        let mut board = SimBoard::new(1023);
        board.set_knob(600);
        click(&mut ctl, &mut board);
        // let the confirmation chirp finish
        ctl.poll(&mut board);
        ctl.poll(&mut board);
        assert_eq!(ctl.quiet_remaining, 0);

        assert!(click(&mut ctl, &mut board).is_some());
        assert!(ctl.quiet_remaining > 0);
        // a whole press and release inside the pulse never reaches the latch
        assert!(click(&mut ctl, &mut board).is_none());
        assert_eq!(ctl.quiet_remaining, 0);
        assert_eq!(ctl.session().unwrap().state().picks_so_far, 1);

        assert!(click(&mut ctl, &mut board).is_some());
    }

    #[test]
    fn test_powerball_markers_on_serial() {
        let mut ctl = controller(0);
        let mut board = SimBoard::new(1023);
        board.set_knob(1023);
        click(&mut ctl, &mut board);

        let picks: Vec<Pick> = (0..8)
            .map(|_| click(&mut ctl, &mut board).unwrap())
            .collect();
        assert!(picks[7].powerball);
        let last_line = board.serial.last().unwrap();
        assert!(last_line.ends_with(".PB"));
        assert!(board.display.row_text(PICK_ROW).ends_with(".PB"));
    }
}
