pub mod screen;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

use crate::{device::TextDisplay, panel::Panel, ui::screen::current_screen};

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

/// OLED contents as styled lines; inverse cells are drawn reversed.
pub fn display_lines(display: &TextDisplay) -> Vec<Line<'static>> {
    let lit = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let inverse = lit.add_modifier(Modifier::REVERSED);

    (0..display.rows())
        .map(|row| {
            let spans = display
                .row(row)
                .iter()
                .chunk_by(|cell| cell.inverse)
                .into_iter()
                .map(|(is_inverse, cells)| {
                    let text: String = cells.map(|c| c.ch).collect();
                    Span::styled(text, if is_inverse { inverse } else { lit })
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect()
}

impl Widget for &Panel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen = current_screen(self.controller.phase());
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(self.board.display.rows() + 2),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(self.board.display.cols() + 2),
                Constraint::Min(0),
            ])
            .split(rows[0]);

        Paragraph::new(display_lines(&self.board.display))
            .block(Block::default().borders(Borders::ALL).title("OLED"))
            .render(top[0], buf);

        let serial_height = top[1].height.saturating_sub(2) as usize;
        let serial_lines: Vec<Line> = self
            .board
            .serial
            .lines()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .take(serial_height)
            .rev()
            .map(|l| Line::from(l.to_string()))
            .collect();
        Paragraph::new(serial_lines)
            .block(Block::default().borders(Borders::ALL).title("Serial 9600"))
            .render(top[1], buf);

        let max = self.board.analog_max().max(1);
        let ratio = f64::from(self.board.knob()) / f64::from(max);
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Knob"))
            .gauge_style(Style::default().fg(Color::Yellow))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("{}/{}", self.board.knob(), max))
            .render(rows[1], buf);

        let led = if self.board.feedback.signal {
            Span::styled("● LED  ♪ tone", Style::default().fg(Color::Red).patch(bold_style))
        } else {
            Span::styled("○ LED    tone", dim_style)
        };
        let mut status = vec![
            Span::styled(screen.title(), bold_style),
            Span::raw("  "),
            led,
        ];
        if let Some(session) = self.controller.session() {
            let state = session.state();
            status.push(Span::raw(format!(
                "  round {} · {}/{} picked · {} left in pool",
                state.round,
                state.picks_so_far,
                session.config().game_size,
                state.pool.len()
            )));
        }
        Paragraph::new(Line::from(status))
            .wrap(Wrap { trim: true })
            .render(rows[2], buf);

        Paragraph::new(Span::styled(screen.help(), dim_style.add_modifier(Modifier::ITALIC)))
            .alignment(Alignment::Center)
            .render(rows[3], buf);
    }
}
