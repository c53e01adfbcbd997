//! TUI application state and logic

use super::rendering;
use crate::commands::PlayConfig;
use crate::core::{Feedback, Status, Word};
use crate::output::flavor::{self, Flavor};
use crate::output::outcome_line;
use crate::session::{
    Collaborator, Outcome, Prompt, Reply, RewindReply, SessionController, SessionError,
};
use crate::solver::{StrategyFactory, rng_for};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    Rewind,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a key press asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Submit(Feedback),
    Undo,
    Quit,
}

/// Colors being picked for the current guess
#[derive(Debug, Clone, Default)]
pub struct FeedbackEditor {
    statuses: Vec<Status>,
    cursor: usize,
    can_undo: bool,
}

fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

impl FeedbackEditor {
    #[must_use]
    pub fn new(initial: &Feedback, can_undo: bool) -> Self {
        let statuses = initial
            .statuses()
            .iter()
            .map(|&s| if s == Status::Unknown { Status::NotPresent } else { s })
            .collect();
        Self {
            statuses,
            cursor: 0,
            can_undo,
        }
    }

    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.can_undo
    }

    /// Arrows, WASD or hjkl move and cycle; g/y/x set a color and advance
    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        if is_quit(key) {
            return EditorAction::Quit;
        }
        let len = self.statuses.len();
        if len == 0 {
            return EditorAction::None;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('a' | 'h') => {
                self.cursor = (self.cursor + len - 1) % len;
            }
            KeyCode::Right | KeyCode::Char('d' | 'l') => {
                self.cursor = (self.cursor + 1) % len;
            }
            KeyCode::Up | KeyCode::Char('w' | 'k') => {
                self.statuses[self.cursor] = self.statuses[self.cursor].next();
            }
            KeyCode::Down | KeyCode::Char('s' | 'j') => {
                self.statuses[self.cursor] = self.statuses[self.cursor].previous();
            }
            KeyCode::Char(c @ ('g' | 'y' | 'x' | '0' | '1' | '2')) => {
                if let Some(status) = Status::from_symbol(c) {
                    self.statuses[self.cursor] = status;
                    self.cursor = (self.cursor + 1) % len;
                }
            }
            KeyCode::Char('u') if self.can_undo => return EditorAction::Undo,
            KeyCode::Enter => return EditorAction::Submit(Feedback::new(self.statuses.clone())),
            _ => {}
        }
        EditorAction::None
    }
}

/// Application state
pub struct App {
    pub mode: InputMode,
    pub guess: Option<Word>,
    pub headline: String,
    pub editor: FeedbackEditor,
    /// Accepted guesses, kept in step with the session history
    pub records: Vec<(Word, Feedback)>,
    pub messages: Vec<Message>,
    pub rewind_input: String,
    pub turn: usize,
    pub max_turns: usize,
}

impl App {
    #[must_use]
    pub const fn new(max_turns: usize) -> Self {
        Self {
            mode: InputMode::Feedback,
            guess: None,
            headline: String::new(),
            editor: FeedbackEditor {
                statuses: Vec::new(),
                cursor: 0,
                can_undo: false,
            },
            records: Vec::new(),
            messages: Vec::new(),
            rewind_input: String::new(),
            turn: 0,
            max_turns,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
        // Keep only last 20 messages
        if self.messages.len() > 20 {
            self.messages.remove(0);
        }
    }

    /// Show a new prompt, dropping records the session has taken back
    pub fn begin_guess(&mut self, prompt: &Prompt<'_>, headline: String) {
        self.records.truncate(prompt.turn);
        self.mode = InputMode::Feedback;
        self.turn = prompt.turn;
        self.guess = Some(prompt.guess.clone());
        self.headline = headline;
        self.editor = FeedbackEditor::new(prompt.initial, prompt.can_undo);
    }

    pub fn begin_rewind(&mut self) {
        self.mode = InputMode::Rewind;
        self.guess = None;
        self.rewind_input.clear();
        self.add_message(flavor::OUT_OF_GUESSES, MessageStyle::Error);
    }

    /// Typing in rewind mode; returns the reply once Enter is pressed
    pub fn handle_rewind_key(&mut self, key: KeyEvent) -> Option<RewindReply> {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Some(RewindReply::Reveal(String::new()));
        }
        match key.code {
            KeyCode::Char(c) if !c.is_control() => self.rewind_input.push(c),
            KeyCode::Backspace => {
                self.rewind_input.pop();
            }
            KeyCode::Enter => {
                let input = self.rewind_input.trim().to_string();
                return Some(match input.parse::<usize>() {
                    Ok(turn) => RewindReply::Turn(turn),
                    Err(_) => RewindReply::Reveal(input),
                });
            }
            _ => {}
        }
        None
    }
}

/// Collaborator that asks through a full-screen terminal UI
pub struct TuiCollaborator<B: Backend> {
    terminal: Terminal<B>,
    app: App,
    flavor: Flavor,
    error: Option<io::Error>,
}

impl<B: Backend> TuiCollaborator<B> {
    pub const fn new(terminal: Terminal<B>, app: App, flavor: Flavor) -> Self {
        Self {
            terminal,
            app,
            flavor,
            error: None,
        }
    }

    /// Draw, then wait for the next key press; `None` after an I/O error
    fn next_key(&mut self) -> Option<KeyEvent> {
        if self.error.is_some() {
            return None;
        }
        let app = &self.app;
        if let Err(e) = self.terminal.draw(|f| rendering::ui(f, app)) {
            self.error = Some(e);
            return None;
        }
        loop {
            match event::read() {
                // Only process key press events (fixes Windows double-input bug)
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return Some(key),
                Ok(_) => {}
                Err(e) => {
                    self.error = Some(e);
                    return None;
                }
            }
        }
    }
}

impl<B: Backend> Collaborator for TuiCollaborator<B> {
    fn feedback(&mut self, prompt: &Prompt<'_>) -> Reply {
        let headline = if prompt.correcting {
            Flavor::correction_line(prompt.rewinds, prompt.turn, prompt.max_turns, prompt.guess.text())
        } else {
            self.flavor
                .guess_line(prompt.turn, prompt.max_turns, prompt.guess.text())
        };
        self.app.begin_guess(prompt, headline);

        loop {
            let Some(key) = self.next_key() else {
                return Reply::Quit;
            };
            match self.app.editor.handle_key(key) {
                EditorAction::None => {}
                EditorAction::Submit(feedback) => return Reply::Feedback(feedback),
                EditorAction::Undo => return Reply::Undo,
                EditorAction::Quit => return Reply::Quit,
            }
        }
    }

    fn rewind(&mut self, _history: &[(Word, Feedback)]) -> RewindReply {
        self.app.begin_rewind();
        loop {
            let Some(key) = self.next_key() else {
                return RewindReply::Reveal(String::new());
            };
            if let Some(reply) = self.app.handle_rewind_key(key) {
                return reply;
            }
        }
    }

    fn recorded(&mut self, turn: usize, guess: &Word, feedback: &Feedback) {
        self.app.records.truncate(turn);
        self.app.records.push((guess.clone(), feedback.clone()));
    }

    fn rejected(&mut self, error: &SessionError) {
        self.app.add_message(&error.to_string(), MessageStyle::Error);
    }

    fn finished(&mut self, outcome: &Outcome) {
        let style = if outcome.is_win() {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.app.mode = InputMode::Finished;
        self.app.guess = None;
        self.app.add_message(&outcome_line(outcome), style);
        self.app.add_message("Press any key to exit", MessageStyle::Info);
        // Any key leaves
        let _ = self.next_key();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if the session cannot replay its history.
pub fn run_tui(factory: &StrategyFactory<'_>, config: PlayConfig) -> Result<Outcome> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let flavor = Flavor::new(&mut rng_for(config.seed, None));
    let mut collaborator = TuiCollaborator::new(terminal, App::new(config.session.max_turns), flavor);
    let mut session = SessionController::new(config.session, || factory.build());
    let res = session.run(&mut collaborator);

    // Restore terminal
    disable_raw_mode()?;
    execute!(collaborator.terminal.backend_mut(), LeaveAlternateScreen)?;
    collaborator.terminal.show_cursor()?;

    if let Some(e) = collaborator.error.take() {
        return Err(e).context("Terminal I/O failed");
    }
    res.context("Session could not rebuild its history")
}

#[cfg(test)]
mod tests {
    use super::*;
    use Status::{NotPresent, Placed, Present};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn editor(can_undo: bool) -> FeedbackEditor {
        FeedbackEditor::new(&Feedback::all(NotPresent, 5), can_undo)
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut editor = editor(false);
        editor.handle_key(press(KeyCode::Left));
        assert_eq!(editor.cursor(), 4);
        editor.handle_key(press(KeyCode::Char('d')));
        assert_eq!(editor.cursor(), 0);
        editor.handle_key(press(KeyCode::Char('l')));
        assert_eq!(editor.cursor(), 1);
    }

    #[test]
    fn up_and_down_cycle_colors() {
        let mut editor = editor(false);
        editor.handle_key(press(KeyCode::Up));
        assert_eq!(editor.statuses()[0], Present);
        editor.handle_key(press(KeyCode::Char('w')));
        assert_eq!(editor.statuses()[0], Placed);
        editor.handle_key(press(KeyCode::Char('k')));
        assert_eq!(editor.statuses()[0], NotPresent);
        editor.handle_key(press(KeyCode::Char('s')));
        assert_eq!(editor.statuses()[0], Placed);
    }

    #[test]
    fn letter_shortcuts_set_and_advance() {
        let mut editor = editor(false);
        for c in ['g', 'y', 'x', '2', '1'] {
            editor.handle_key(press(KeyCode::Char(c)));
        }
        assert_eq!(
            editor.handle_key(press(KeyCode::Enter)),
            EditorAction::Submit(Feedback::new(vec![Placed, Present, NotPresent, Placed, Present]))
        );
    }

    #[test]
    fn undo_only_when_allowed() {
        assert_eq!(editor(false).handle_key(press(KeyCode::Char('u'))), EditorAction::None);
        assert_eq!(editor(true).handle_key(press(KeyCode::Char('u'))), EditorAction::Undo);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(editor(false).handle_key(press(KeyCode::Esc)), EditorAction::Quit);
        assert_eq!(editor(false).handle_key(press(KeyCode::Char('q'))), EditorAction::Quit);
        assert_eq!(
            editor(false).handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            EditorAction::Quit
        );
    }

    #[test]
    fn correction_starts_from_the_old_colors() {
        let old = Feedback::from_key("21000").unwrap();
        let editor = FeedbackEditor::new(&old, true);
        assert_eq!(editor.statuses(), old.statuses());
    }

    #[test]
    fn rewind_input() {
        let mut app = App::new(6);
        app.begin_rewind();
        assert_eq!(app.mode, InputMode::Rewind);

        for c in "12".chars() {
            assert_eq!(app.handle_rewind_key(press(KeyCode::Char(c))), None);
        }
        app.handle_rewind_key(press(KeyCode::Backspace));
        assert_eq!(
            app.handle_rewind_key(press(KeyCode::Enter)),
            Some(RewindReply::Turn(1))
        );

        app.begin_rewind();
        for c in "zesty".chars() {
            app.handle_rewind_key(press(KeyCode::Char(c)));
        }
        assert_eq!(
            app.handle_rewind_key(press(KeyCode::Enter)),
            Some(RewindReply::Reveal("zesty".into()))
        );
    }

    #[test]
    fn records_follow_the_prompt_turn() {
        let mut app = App::new(6);
        let salet = Word::new("salet").unwrap();
        let blank = Feedback::all(NotPresent, 5);
        app.records.push((salet.clone(), blank.clone()));
        app.records.push((salet.clone(), blank.clone()));

        let prompt = Prompt {
            turn: 1,
            max_turns: 6,
            guess: &salet,
            initial: &blank,
            correcting: true,
            can_undo: true,
            rewinds: 1,
        };
        app.begin_guess(&prompt, "again".into());

        assert_eq!(app.records.len(), 1);
        assert_eq!(app.turn, 1);
        assert!(app.editor.can_undo());
    }
}
