//! Rendering for the demo terminal.
//!
//! The screen is a transcript area pinned to the bottom plus a one-line
//! input bar. When the simulator is idle the transcript's trailing prompt
//! line is not drawn from the buffer; the input bar is that prompt, live.
//! While a playback is busy the input bar dims and typed text just sits
//! there until the busy flag clears.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::term::TerminalSim;

use super::theme::Theme;

/// Transcript lines to draw, oldest first.
///
/// Idle: the trailing prompt-only line is skipped (the input bar stands in
/// for it). Busy: the buffer is drawn as-is, prompt transiently absent.
pub fn visible_transcript<'a>(sim: &'a TerminalSim) -> &'a [String] {
    let lines = sim.lines();
    if !sim.is_busy() && lines.last().map(String::as_str) == Some(sim.prompt()) {
        &lines[..lines.len() - 1]
    } else {
        lines
    }
}

/// Rows to scroll the transcript so its tail stays visible.
pub fn scroll_offset(line_count: usize, viewport_rows: u16) -> u16 {
    line_count.saturating_sub(viewport_rows as usize) as u16
}

/// Style one transcript line.
///
/// Echoed commands get an accented prompt span, "command not found" renders
/// in the error color, the banner is dimmed, everything else is plain text.
pub fn styled_line<'a>(line: &'a str, sim: &TerminalSim, theme: &Theme) -> Line<'a> {
    let echo_prefix = format!("{} ", sim.prompt());
    if let Some(rest) = line.strip_prefix(&echo_prefix) {
        return Line::from(vec![
            Span::styled(sim.prompt().to_string(), theme.accent_bold_style()),
            Span::raw(" "),
            Span::styled(rest, theme.text_style()),
        ]);
    }
    if line.ends_with(": command not found") {
        return Line::from(Span::styled(line, theme.error_style()));
    }
    if line == crate::term::BANNER {
        return Line::from(Span::styled(line, theme.secondary_style()));
    }
    Line::from(Span::styled(line, theme.text_style()))
}

/// Draw the whole demo screen.
pub fn draw(frame: &mut Frame, sim: &TerminalSim, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    draw_transcript(frame, chunks[0], sim, theme);
    draw_input_bar(frame, chunks[1], sim, theme);
}

fn draw_transcript(frame: &mut Frame, area: Rect, sim: &TerminalSim, theme: &Theme) {
    let shown = visible_transcript(sim);
    let lines: Vec<Line> = shown
        .iter()
        .map(|line| styled_line(line, sim, theme))
        .collect();
    let offset = scroll_offset(lines.len(), area.height);
    let paragraph = Paragraph::new(lines).scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

fn draw_input_bar(frame: &mut Frame, area: Rect, sim: &TerminalSim, theme: &Theme) {
    let busy = sim.is_busy();
    let prompt_style = if busy {
        theme.secondary_style()
    } else {
        theme.accent_bold_style()
    };
    let input_style = if busy {
        theme.secondary_style()
    } else {
        theme.text_style()
    };

    let bar = Line::from(vec![
        Span::styled(sim.prompt().to_string(), prompt_style),
        Span::raw(" "),
        Span::styled(sim.input().to_string(), input_style),
    ]);
    frame.render_widget(Paragraph::new(bar), area);

    if !busy {
        let x = sim.prompt().width() + 1 + sim.input().width();
        let x = (area.x as usize + x).min((area.x + area.width.saturating_sub(1)) as usize);
        frame.set_cursor_position((x as u16, area.y));
    }
}
