//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Status, Word};
use crate::output::formatters::{cursor_line, tile_rows};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // History and messages
            Constraint::Length(8), // Current guess
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_history(f, app, middle[0]);
    render_messages(f, app, middle[1]);

    match app.mode {
        InputMode::Feedback => render_editor(f, app, chunks[2]),
        InputMode::Rewind => render_rewind(f, app, chunks[2]),
        InputMode::Finished => {}
    }

    render_help(f, app, chunks[3]);
}

/// Tile colors for a verdict
#[must_use]
pub fn tile_style(status: Status) -> Style {
    match status {
        Status::Unknown => Style::default(),
        Status::NotPresent => Style::default().fg(Color::White).bg(Color::DarkGray),
        Status::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Status::Placed => Style::default().fg(Color::Black).bg(Color::Green),
    }
}

fn inline_spans<'a>(word: &Word, statuses: &[Status]) -> Vec<Span<'a>> {
    word.text()
        .chars()
        .zip(statuses)
        .map(|(letter, &status)| {
            Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                tile_style(status).add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

/// Three rows of big tiles plus the cursor marker
fn tile_lines<'a>(word: &Word, statuses: &[Status], cursor: usize) -> Vec<Line<'a>> {
    let mut rows: [Vec<Span<'a>>; 3] = Default::default();
    for (letter, &status) in word.text().chars().zip(statuses) {
        let style = tile_style(status).add_modifier(Modifier::BOLD);
        for (row, text) in rows.iter_mut().zip(tile_rows(letter)) {
            row.push(Span::styled(text, style));
        }
    }

    let marker = cursor_line(cursor, word.len());
    rows.into_iter()
        .map(Line::from)
        .chain(std::iter::once(Line::from(Span::styled(
            marker,
            Style::default().fg(Color::Cyan),
        ))))
        .collect()
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 REVERSE WORDLE - think of a word, I'll guess it")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let width = app.max_turns.to_string().len();
    let items: Vec<ListItem> = app
        .records
        .iter()
        .enumerate()
        .map(|(i, (guess, feedback))| {
            let mut spans = vec![Span::styled(
                format!("({:>width$}) ", i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(inline_spans(guess, feedback.statuses()));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(format!(" Guesses {}/{} ", app.records.len(), app.max_turns))
            .borders(Borders::ALL),
    );
    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_editor(f: &mut Frame, app: &App, area: Rect) {
    let Some(guess) = &app.guess else {
        return;
    };

    let mut content = vec![Line::from(Span::styled(
        app.headline.clone(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    content.extend(tile_lines(
        guess,
        app.editor.statuses(),
        app.editor.cursor(),
    ));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" Turn {} ", app.turn + 1))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_rewind(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(crate::output::flavor::REWIND_PROMPT),
        Line::from(Span::styled(
            format!("> {}", app.rewind_input),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let input = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Out of guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(input, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        InputMode::Feedback if app.editor.can_undo() => {
            "←→/AD/HL: Select | ↑↓/WS/KJ: Color | G/Y/X: Set | U: Undo | Enter: Submit | Q: Quit"
        }
        InputMode::Feedback => {
            "←→/AD/HL: Select | ↑↓/WS/KJ: Color | G/Y/X: Set | Enter: Submit | Q: Quit"
        }
        InputMode::Rewind => "Type a turn number or your word | Enter: Confirm | Esc: Give up",
        InputMode::Finished => "Press any key to exit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::session::Prompt;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn editor_shows_guess_and_history() {
        let salet = Word::new("salet").unwrap();
        let blank = Feedback::all(Status::NotPresent, 5);
        let mut app = App::new(6);
        app.records.push((Word::new("crane").unwrap(), blank.clone()));
        let prompt = Prompt {
            turn: 1,
            max_turns: 6,
            guess: &salet,
            initial: &blank,
            correcting: false,
            can_undo: true,
            rewinds: 0,
        };
        app.begin_guess(&prompt, "My second guess is 'salet', buddy.".into());

        let screen = screen(&app);
        assert!(screen.contains("My second guess is 'salet', buddy."));
        assert!(screen.contains(" C  R  A  N  E "));
        assert!(screen.contains("  S    A    L    E    T  "));
        assert!(screen.contains("U: Undo"));
    }

    #[test]
    fn rewind_shows_the_typed_input() {
        let mut app = App::new(6);
        app.begin_rewind();
        app.rewind_input.push_str("zesty");

        let screen = screen(&app);
        assert!(screen.contains("> zesty"));
        assert!(screen.contains("all out of guesses"));
    }

    #[test]
    fn tile_colors() {
        assert_eq!(tile_style(Status::Placed).bg, Some(Color::Green));
        assert_eq!(tile_style(Status::Present).bg, Some(Color::Yellow));
        assert_eq!(tile_style(Status::Unknown).bg, None);
    }
}
