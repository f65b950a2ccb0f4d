use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// Events driving the simulator loop. `Tick` is one pass of the device's
/// polling loop.
#[derive(Clone, Debug)]
pub enum DeviceEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait DeviceEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<DeviceEvent, RecvTimeoutError>;
}

/// Terminal input read on a background thread.
pub struct CrosstermEventSource {
    rx: Receiver<DeviceEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let evt = match event::read() {
                // some terminals also report releases and repeats; the
                // button is pressed once per key press
                Ok(CtEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    Some(DeviceEvent::Key(key))
                }
                Ok(CtEvent::Resize(_, _)) => Some(DeviceEvent::Resize),
                Ok(_) => None,
                Err(_) => break,
            };
            if let Some(evt) = evt {
                if tx.send(evt).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<DeviceEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed polling interval
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms.max(1)))
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Channel-fed event source for tests
pub struct TestEventSource {
    rx: Receiver<DeviceEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<DeviceEvent>) -> Self {
        Self { rx }
    }
}

impl DeviceEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<DeviceEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Advances the simulator one event or tick at a time
pub struct Runner<E: DeviceEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: DeviceEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Blocks up to one tick interval; a quiet interval is a `Tick`.
    pub fn step(&self) -> DeviceEvent {
        match self.event_source.recv_timeout(self.ticker.interval()) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                DeviceEvent::Tick
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn step_returns_tick_on_timeout() {
        let (_tx, rx) = mpsc::channel();
        let runner = Runner::new(TestEventSource::new(rx), FixedTicker::from_millis(1));
        assert!(matches!(runner.step(), DeviceEvent::Tick));
    }

    #[test]
    fn step_passes_through_keys() {
        let (tx, rx) = mpsc::channel();
        tx.send(DeviceEvent::Key(KeyEvent::new(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
        )))
        .unwrap();
        let runner = Runner::new(TestEventSource::new(rx), FixedTicker::from_millis(10));

        match runner.step() {
            DeviceEvent::Key(key) => assert_eq!(key.code, KeyCode::Char(' ')),
            other => panic!("expected key event, got {:?}", other),
        }
    }

    #[test]
    fn disconnected_source_keeps_ticking() {
        let (tx, rx) = mpsc::channel::<DeviceEvent>();
        drop(tx);
        let runner = Runner::new(TestEventSource::new(rx), FixedTicker::from_millis(1));
        assert!(matches!(runner.step(), DeviceEvent::Tick));
        assert!(matches!(runner.step(), DeviceEvent::Tick));
    }

    #[test]
    fn zero_tick_is_clamped() {
        assert_eq!(
            FixedTicker::from_millis(0).interval(),
            Duration::from_millis(1)
        );
    }
}
