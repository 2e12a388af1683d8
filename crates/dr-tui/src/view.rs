//! The dice screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use dr_core::{DICE_PER_SET, Phase};

use crate::app::TuiApp;
use crate::faces::{DIE_HEIGHT, die_lines};

/// Dice per grid row.
const GRID_COLUMNS: usize = 3;

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_board(frame, app, chunks[0]);

    let status = Paragraph::new(format!(
        "{}  rolls:{}",
        app.status_hint(),
        app.roller.roll_count()
    ))
    .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[1]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}

fn draw_board(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let block = Block::default()
        .title(" Dice Roll ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = DICE_PER_SET / GRID_COLUMNS;
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(outcome_line(app.roller.phase()));
    lines.push(Line::from(""));

    let faces = app.roller.displayed_faces();
    let die_style = if app.roller.is_animating() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White).bold()
    };
    for row in faces.chunks(GRID_COLUMNS).take(rows) {
        let rendered: Vec<_> = row.iter().map(|&face| die_lines(face)).collect();
        for i in 0..DIE_HEIGHT {
            let spans: Vec<Span<'static>> = rendered
                .iter()
                .enumerate()
                .flat_map(|(col, die)| {
                    let gap = if col == 0 { "" } else { "  " };
                    [Span::raw(gap), Span::styled(die[i].clone(), die_style)]
                })
                .collect();
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "[ Roll Dice ]  press Space",
        Style::default().fg(Color::Green),
    )));

    // Vertically center the content when there is room.
    let height = lines.len() as u16;
    let top = inner.height.saturating_sub(height) / 2;
    let content = Rect {
        y: inner.y + top,
        height: inner.height - top,
        ..inner
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, content);
}

fn outcome_line(phase: Phase) -> Line<'static> {
    match phase {
        Phase::Idle => Line::from(""),
        Phase::Rolling => Line::from(Span::styled(
            "Rolling...",
            Style::default().fg(Color::DarkGray),
        )),
        Phase::Resolved(outcome) => Line::from(Span::styled(
            outcome.label(),
            Style::default().fg(Color::Green).bold(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use dr_core::RollerConfig;
    use ratatui::backend::TestBackend;

    fn render(app: &TuiApp) -> String {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn new_app() -> TuiApp {
        TuiApp::new(RollerConfig::default().with_seed(11)).unwrap()
    }

    #[test]
    fn idle_screen_has_grid_and_prompt() {
        let app = new_app();
        let screen = render(&app);
        assert!(screen.contains("Dice Roll"));
        assert!(screen.contains("Roll Dice"));
        assert_eq!(screen.matches('\u{250c}').count(), DICE_PER_SET + 1);
        assert!(!screen.contains("Rolling..."));
        assert!(app.roller.outcome().is_none());
    }

    #[test]
    fn startup_dice_are_named_after_delay() {
        let mut app = new_app();
        app.tick(Duration::from_millis(599));
        assert!(app.roller.outcome().is_none());
        app.tick(Duration::from_millis(1));
        let outcome = app.roller.outcome().unwrap();
        let screen = render(&app);
        assert!(screen.contains(outcome.label()));
        assert!(screen.contains("rolls:0"));
    }

    #[test]
    fn rolling_then_resolved_label() {
        let mut app = new_app();
        app.roller.roll();
        assert!(render(&app).contains("Rolling..."));

        app.tick(Duration::from_millis(600));
        let outcome = app.roller.outcome().unwrap();
        let screen = render(&app);
        assert!(screen.contains(outcome.label()));
        assert!(!screen.contains("Rolling..."));
        assert!(screen.contains("rolls:1"));
    }

    #[test]
    fn help_popup() {
        let mut app = new_app();
        app.show_help = true;
        assert!(render(&app).contains("Keyboard Shortcuts"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = new_app();
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
