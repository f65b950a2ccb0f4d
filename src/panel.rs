use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    config::Config,
    controller::Controller,
    device::Level,
    draw::Pick,
    error::LottoError,
    history::DrawHistory,
    runtime::DeviceEvent,
    sim::SimBoard,
};

/// Knob steps per PageUp/PageDown.
const COARSE_STEPS: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Continue,
    Redraw,
    Quit,
}

/// Keyboard front panel for the simulated device: arrow keys turn the knob,
/// space or enter press the button.
#[derive(Debug)]
pub struct Panel {
    pub board: SimBoard,
    pub controller: Controller,
    history: Option<DrawHistory>,
    pot_step: i32,
    pending_release: bool,
    last_pick: Option<Pick>,
}

impl Panel {
    pub fn new(cfg: &Config, controller: Controller, history: Option<DrawHistory>) -> Self {
        let board = SimBoard::new(cfg.analog_max);
        // a step wider than the whole knob travel is the same as an end key
        let pot_step = cfg.pot_step.clamp(1, board.analog_max());
        Self {
            board,
            controller,
            history,
            pot_step,
            pending_release: false,
            last_pick: None,
        }
    }

    pub fn last_pick(&self) -> Option<&Pick> {
        self.last_pick.as_ref()
    }

    pub fn handle(&mut self, event: &DeviceEvent) -> Result<PanelAction, LottoError> {
        match event {
            DeviceEvent::Tick => {
                if self.pending_release {
                    self.board.set_button(Level::Low);
                    self.pending_release = false;
                }
                self.poll()?;
                Ok(PanelAction::Redraw)
            }
            DeviceEvent::Resize => Ok(PanelAction::Redraw),
            DeviceEvent::Key(key) => self.on_key(*key),
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Result<PanelAction, LottoError> {
        let step = self.pot_step;
        match key.code {
            KeyCode::Esc => return Ok(PanelAction::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(PanelAction::Quit)
            }
            KeyCode::Up | KeyCode::Right => self.board.turn_knob(step),
            KeyCode::Down | KeyCode::Left => self.board.turn_knob(-step),
            KeyCode::PageUp => self.board.turn_knob(step.saturating_mul(COARSE_STEPS)),
            KeyCode::PageDown => self.board.turn_knob(-step.saturating_mul(COARSE_STEPS)),
            KeyCode::Home => self.board.set_knob(0),
            KeyCode::End => self.board.set_knob(self.board.analog_max()),
            KeyCode::Char(' ') | KeyCode::Enter => {
                // held down until the next tick
                self.board.set_button(Level::High);
                self.pending_release = true;
                self.poll()?;
            }
            _ => return Ok(PanelAction::Continue),
        }
        Ok(PanelAction::Redraw)
    }

    fn poll(&mut self) -> Result<(), LottoError> {
        if let Some(pick) = self.controller.poll(&mut self.board) {
            if let (Some(history), Some(session)) = (&self.history, self.controller.session()) {
                history.record(session.config(), &pick)?;
            }
            self.last_pick = Some(pick);
        }
        Ok(())
    }
}
