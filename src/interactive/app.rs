//! TUI application state and logic

use crate::core::{FeedbackCode, Word, WordleError};
use crate::solver::{GuessMetrics, GuessSelector, Session, SessionState, metrics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub pool: &'a [Word],
    pub answers: &'a [Word],
    pub session: Session<'a>,
    pub current_guess: Option<GuessInfo>,
    pub input_buffer: String,
    pub manual_word: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    selector: GuessSelector,
    /// Guess count already added to `stats` for this game
    recorded: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    /// Solved or out of candidates; waiting for new game, undo or quit
    Finished,
}

/// The guess feedback is being collected for
#[derive(Debug, Clone, Copy)]
pub struct GuessInfo {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// Picked by the selector rather than typed in
    pub suggested: bool,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index is the number of guesses, last slot collects anything longer
    pub guess_distribution: [usize; 8],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(pool: &'a [Word], answers: &'a [Word], selector: GuessSelector) -> Self {
        let mut app = Self {
            pool,
            answers,
            session: Session::new(pool, answers, selector.clone()),
            current_guess: None,
            input_buffer: String::new(),
            manual_word: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            selector,
            recorded: None,
        };
        app.add_message(
            "Welcome! Guesses minimize the expected number of remaining answers.",
            MessageStyle::Info,
        );
        app.add_message(
            "Type feedback as c/w/u (correct, wrong spot, unused) and press Enter.",
            MessageStyle::Info,
        );
        app.begin();
        app
    }

    fn begin(&mut self) {
        if let Err(e) = self.session.start() {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
        self.refresh();
    }

    /// Bring the suggestion and input mode in line with the session
    pub fn refresh(&mut self) {
        self.input_buffer.clear();
        match self.session.state() {
            SessionState::AwaitingGuess => {
                self.input_mode = InputMode::Feedback;
                self.compute_suggestion();
            }
            SessionState::Solved => self.finish_solved(),
            SessionState::Unsolvable => {
                self.input_mode = InputMode::Finished;
                self.current_guess = None;
                self.add_message(
                    "No candidates remain - feedback may be wrong. Ctrl+U to undo.",
                    MessageStyle::Error,
                );
            }
            _ => {}
        }
    }

    pub fn compute_suggestion(&mut self) {
        match self.session.suggest() {
            Ok(Some(word)) => {
                let word = *word;
                self.current_guess = Some(GuessInfo {
                    word,
                    metrics: metrics(&word, self.session.space()),
                    suggested: true,
                });
            }
            Ok(None) => {
                self.current_guess = None;
                self.add_message("No valid guesses remaining!", MessageStyle::Error);
            }
            Err(e) => {
                self.current_guess = None;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_solved(&mut self) {
        let Some(solution) = self.session.solution() else {
            return;
        };
        let mut guesses = self.session.history().len();
        if self
            .session
            .history()
            .last()
            .is_none_or(|turn| turn.guess != solution)
        {
            guesses += 1;
            self.add_message(
                &format!("Only {} remains - play it!", solution.text().to_uppercase()),
                MessageStyle::Success,
            );
        }

        self.stats.total_games += 1;
        self.stats.games_won += 1;
        self.stats.guess_distribution[guesses.min(7)] += 1;
        self.recorded = Some(guesses);
        self.current_guess = None;
        self.input_mode = InputMode::Finished;

        let celebration = match guesses {
            1 => "🎯 HOLE IN ONE! 🌟",
            2 => "🔥 Two guesses! 🔥",
            3 => "✨ Three guesses! ✨",
            4 => "👏 Four guesses! 👏",
            5 => "🎉 Five guesses! 🎉",
            6 => "😅 Got it in six! 😅",
            _ => "🎊 SOLVED! 🎊",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Submit the typed feedback for the current guess
    pub fn handle_feedback(&mut self, feedback: &str) {
        let Some(guess) = self.current_guess else {
            self.add_message("No guess to give feedback for", MessageStyle::Error);
            return;
        };
        let feedback = match FeedbackCode::parse(feedback) {
            Ok(code) => code,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        if let Err(e) = self.session.submit_guess(guess.word) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }
        match self.session.submit_feedback(feedback) {
            Ok(SessionState::AwaitingGuess) => {
                self.add_message(
                    &format!("{} candidates remaining", self.session.space().len()),
                    MessageStyle::Info,
                );
                self.refresh();
            }
            Ok(_) => self.refresh(),
            Err(e @ WordleError::ContradictoryFeedback(_)) => {
                // Drop the pending guess so it can be retried with other feedback
                self.session.undo();
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.session = Session::new(self.pool, self.answers, self.selector.clone());
        self.messages.clear();
        self.manual_word.clear();
        self.recorded = None;
        self.add_message("New game started!", MessageStyle::Info);
        self.begin();
    }

    pub fn undo_last(&mut self) {
        if self.session.undo() {
            if let Some(guesses) = self.recorded.take() {
                self.stats.total_games -= 1;
                self.stats.games_won -= 1;
                self.stats.guess_distribution[guesses.min(7)] -= 1;
            }
            self.add_message("Undone!", MessageStyle::Info);
            self.refresh();
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.space().len()
    }

    /// Replace the suggestion with the typed word
    pub fn use_manual_word(&mut self) {
        let word = match Word::new(&self.manual_word) {
            Ok(word) => word,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        if !self.pool.contains(&word) && !self.answers.contains(&word) {
            self.add_message(
                &format!("Word '{}' is not in the word list!", word.text().to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        let manual = metrics(&word, self.session.space());
        if let Some(suggested) = self.current_guess
            && suggested.suggested
            && suggested.metrics.expected_remaining < manual.expected_remaining
        {
            self.add_message(
                &format!(
                    "Note: {} expects {:.2} fewer candidates",
                    suggested.word.text().to_uppercase(),
                    manual.expected_remaining - suggested.metrics.expected_remaining
                ),
                MessageStyle::Info,
            );
        }

        self.current_guess = Some(GuessInfo {
            word,
            metrics: manual,
            suggested: false,
        });
        self.add_message(
            &format!(
                "Using: {} ({:.2} expected remaining)",
                word.text().to_uppercase(),
                manual.expected_remaining
            ),
            MessageStyle::Success,
        );
        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (key.code, ctrl) {
            (KeyCode::Char('c'), true) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Char('u'), true) => {
                self.undo_last();
                return;
            }
            (KeyCode::Char('n'), true) => {
                self.new_game();
                return;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => {
                    if self.candidates_count() > 0 {
                        self.input_mode = InputMode::ManualWord;
                        self.add_message("Enter your own word (5 letters)", MessageStyle::Info);
                    }
                }
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < 5 && "cwuCWU".contains(c) {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = std::mem::take(&mut self.input_buffer);
                    self.handle_feedback(&input);
                }
                _ => {}
            },
            InputMode::ManualWord => match key.code {
                KeyCode::Esc | KeyCode::Tab => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                }
                KeyCode::Char(c) => {
                    if self.manual_word.len() < 5 && c.is_ascii_alphabetic() {
                        self.manual_word.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.manual_word.pop();
                }
                KeyCode::Enter => self.use_manual_word(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            debug!("key {:?}", key.code);
            app.handle_key(key);
        }
    }
    Ok(())
}
