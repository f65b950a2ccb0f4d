use unicode_width::UnicodeWidthChar;

/// Digital pin level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Low,
    High,
}

/// Two-sample latch for button edges. `update` must run once per poll,
/// after whatever the current edge triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonLatch {
    previous: Level,
    current: Level,
}

impl ButtonLatch {
    pub fn sample(&mut self, level: Level) {
        self.current = level;
    }

    /// High on the previous poll, low on this one: the button was released.
    pub fn released(&self) -> bool {
        self.previous == Level::High && self.current == Level::Low
    }

    pub fn update(&mut self) {
        self.previous = self.current;
    }
}

pub trait Display {
    fn clear(&mut self);
    fn set_cursor(&mut self, col: u16, row: u16);
    /// Print at the cursor and advance it.
    fn print(&mut self, text: &str);
    fn set_inverse(&mut self, on: bool);
}

pub trait Feedback {
    /// LED and tone together, on while a pick is being announced.
    fn set_signal(&mut self, on: bool);
    /// Short confirmation beep.
    fn chirp(&mut self);
}

/// Line-oriented text output, like a UART at 9600 baud.
pub trait SerialLog {
    fn line(&mut self, text: &str);
}

/// Everything the controller touches on the device.
pub trait Board {
    fn read_analog(&mut self) -> i32;
    fn read_button(&mut self) -> Level;
    fn display(&mut self) -> &mut dyn Display;
    fn feedback(&mut self) -> &mut dyn Feedback;
    fn serial(&mut self) -> &mut dyn SerialLog;
}

/// 128x64 OLED with an 8x8 font.
pub const DISPLAY_COLS: u16 = 16;
pub const DISPLAY_ROWS: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub inverse: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            inverse: false,
        }
    }
}

/// Character-cell screen buffer. Text past the right edge is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDisplay {
    cells: Vec<Cell>,
    cols: u16,
    rows: u16,
    cursor: (u16, u16),
    inverse: bool,
}

impl TextDisplay {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cells: vec![Cell::default(); cols as usize * rows as usize],
            cols,
            rows,
            cursor: (0, 0),
            inverse: false,
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells
            .get(row as usize * self.cols as usize + col as usize)
            .copied()
    }

    pub fn row(&self, row: u16) -> &[Cell] {
        if row >= self.rows {
            return &[];
        }
        let start = row as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Row text with trailing blanks trimmed.
    pub fn row_text(&self, row: u16) -> String {
        let text: String = self.row(row).iter().map(|c| c.ch).collect();
        text.trim_end().to_string()
    }
}

impl Default for TextDisplay {
    fn default() -> Self {
        Self::new(DISPLAY_COLS, DISPLAY_ROWS)
    }
}

impl Display for TextDisplay {
    fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.cursor = (0, 0);
    }

    fn set_cursor(&mut self, col: u16, row: u16) {
        self.cursor = (col, row);
    }

    fn print(&mut self, text: &str) {
        let (mut col, row) = self.cursor;
        if row >= self.rows {
            return;
        }
        for ch in text.chars() {
            // one cell per glyph; wide and zero-width glyphs have no place here
            if ch.width() != Some(1) {
                continue;
            }
            if col < self.cols {
                let idx = row as usize * self.cols as usize + col as usize;
                self.cells[idx] = Cell {
                    ch,
                    inverse: self.inverse,
                };
            }
            col = col.saturating_add(1);
        }
        self.cursor = (col, row);
    }

    fn set_inverse(&mut self, on: bool) {
        self.inverse = on;
    }
}
