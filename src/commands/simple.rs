//! Simple interactive CLI mode
//!
//! Line-oriented solver without the TUI. Reads from any `BufRead` and writes to
//! any `Write`, so a whole game can be scripted.

use crate::core::Word;
use crate::solver::{GuessSelector, Session, SessionState, metrics};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidate lists this short are printed in full
const SHOW_CANDIDATES: usize = 10;

enum Reply {
    Exit,
    Undo,
    Text(String),
}

#[derive(PartialEq, Eq)]
enum Flow {
    Finished,
    Exit,
}

struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// End of input counts as `exit`
    fn ask(&mut self, prompt: &str) -> io::Result<Reply> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Reply::Exit);
        }
        let line = line.trim().to_lowercase();
        Ok(match line.as_str() {
            "exit" | "quit" => Reply::Exit,
            "undo" => Reply::Undo,
            _ => Reply::Text(line),
        })
    }
}

/// Run the simple interactive CLI mode
///
/// Each turn offers to skip the (possibly slow) suggestion, then asks for the
/// guess actually played, defaulting to the suggestion, and its `c/w/u`
/// feedback. `undo` takes back the last step, `exit` quits at any prompt.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    input: R,
    output: W,
    selector: &GuessSelector,
    pool: &[Word],
    answers: &[Word],
) -> io::Result<()> {
    let mut console = Console { input, output };

    writeln!(console.output, "\n{}", "Wordle Solver - Interactive Mode".bright_cyan().bold())?;
    writeln!(console.output, "Enter feedback as five letters, one per position:")?;
    writeln!(console.output, "  c = correct spot, w = wrong spot, u = unused")?;
    writeln!(console.output, "Type 'undo' to take back a step, 'exit' to quit.\n")?;

    loop {
        let mut session = Session::new(pool, answers, selector.clone());
        if let Err(e) = session.start() {
            writeln!(console.output, "{e}")?;
            return Ok(());
        }
        if play_game(&mut console, &mut session)? == Flow::Exit {
            return Ok(());
        }
        match console.ask("Play again? (y/N)")? {
            Reply::Text(answer) if answer.starts_with('y') => {
                writeln!(console.output, "\nNew game started!\n")?;
            }
            _ => return Ok(()),
        }
    }
}

fn play_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session<'_>,
) -> io::Result<Flow> {
    'turn: loop {
        match session.state() {
            SessionState::AwaitingGuess => {}
            SessionState::Solved => {
                report_solved(&mut console.output, session)?;
                return Ok(Flow::Finished);
            }
            SessionState::Unsolvable => {
                writeln!(
                    console.output,
                    "\n{}",
                    "No candidates remain! The feedback may be wrong.".red()
                )?;
                match console.ask("Type 'undo' to go back, anything else to give up")? {
                    Reply::Undo => {
                        session.undo();
                        continue 'turn;
                    }
                    Reply::Exit => return Ok(Flow::Exit),
                    Reply::Text(_) => return Ok(Flow::Finished),
                }
            }
            _ => return Ok(Flow::Finished),
        }

        let turn = session.history().len() + 1;
        let candidates = session.space().candidates();
        writeln!(console.output, "\n{}", "─".repeat(50).cyan())?;
        writeln!(console.output, "Turn {turn}: {} candidates remaining", candidates.len())?;
        if candidates.len() <= SHOW_CANDIDATES {
            let listed: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
            writeln!(console.output, "Candidates: {}", listed.join(", "))?;
        }

        let suggestion = match console.ask("Skip calc? (y/N)")? {
            Reply::Exit => return Ok(Flow::Exit),
            Reply::Undo => {
                undo(&mut console.output, session)?;
                continue 'turn;
            }
            Reply::Text(answer) if answer.starts_with('y') => None,
            Reply::Text(_) => match session.suggest() {
                Ok(suggestion) => suggestion.copied(),
                Err(e) => {
                    writeln!(console.output, "{e}")?;
                    return Ok(Flow::Finished);
                }
            },
        };

        if let Some(word) = suggestion {
            let m = metrics(&word, session.space());
            writeln!(console.output, "Suggested guess: {word}")?;
            writeln!(
                console.output,
                "  expected remaining {:.2}, worst case {}",
                m.expected_remaining, m.worst_case
            )?;
        }

        let prompt = suggestion.map_or_else(|| "Guess".to_string(), |w| format!("Guess [{w}]"));
        let guess = loop {
            match console.ask(&prompt)? {
                Reply::Exit => return Ok(Flow::Exit),
                Reply::Undo => {
                    undo(&mut console.output, session)?;
                    continue 'turn;
                }
                Reply::Text(text) if text.is_empty() => {
                    if let Some(word) = suggestion {
                        break word;
                    }
                    writeln!(console.output, "Enter a five-letter word.")?;
                }
                Reply::Text(text) => match Word::new(&text) {
                    Ok(word) => break word,
                    Err(e) => writeln!(console.output, "{e}")?,
                },
            }
        };

        if let Err(e) = session.submit_guess(guess) {
            writeln!(console.output, "{e}")?;
            return Ok(Flow::Finished);
        }

        loop {
            match console.ask("Feedback (c/w/u)")? {
                Reply::Exit => return Ok(Flow::Exit),
                Reply::Undo => {
                    session.undo();
                    continue 'turn;
                }
                Reply::Text(text) => match session.submit_feedback_str(&text) {
                    Ok(_) => continue 'turn,
                    Err(e) => writeln!(console.output, "{e}")?,
                },
            }
        }
    }
}

fn undo<W: Write>(output: &mut W, session: &mut Session<'_>) -> io::Result<()> {
    if session.undo() {
        writeln!(output, "Undone.")
    } else {
        writeln!(output, "Nothing to undo.")
    }
}

fn report_solved<W: Write>(output: &mut W, session: &Session<'_>) -> io::Result<()> {
    let Some(solution) = session.solution() else {
        return Ok(());
    };
    let played = session.history().len();

    if session.history().last().is_some_and(|turn| turn.guess == solution) {
        writeln!(output, "\nSolved: {solution} in {played} guesses")?;
    } else {
        writeln!(output, "\nThe answer must be: {solution} ({played} guesses so far)")?;
    }
    for turn in session.history() {
        writeln!(output, "  {} {}", turn.guess, turn.feedback.to_emoji())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn five() -> Vec<Word> {
        words_from_slice(&["crane", "slate", "trace", "grape", "place"])
    }

    fn play(script: &str) -> String {
        let words = five();
        let mut output = Vec::new();
        run_simple(
            Cursor::new(script),
            &mut output,
            &GuessSelector::new(),
            &words,
            &words,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn suggestion_is_default_guess() {
        let output = play("\n\nwccuc\nn\n");

        assert!(output.contains("Turn 1: 5 candidates remaining"));
        assert!(output.contains("Suggested guess: crane"));
        assert!(output.contains("Guess [crane]"));
        assert!(output.contains("The answer must be: trace (1 guesses so far)"));
    }

    #[test]
    fn bad_feedback_is_reprompted() {
        let output = play("y\nslate\nccccx\nuucuc\n\n\nuccuc\nexit\n");

        assert!(output.contains("invalid feedback 'ccccx'"));
        assert!(output.contains("Turn 2: 2 candidates remaining"));
        assert!(output.contains("Candidates: crane, grape"));
        assert!(output.contains("The answer must be: grape"));
    }

    #[test]
    fn bad_guess_is_reprompted() {
        let output = play("y\ncranes\nc4ane\ncrane\nccccc\nn\n");

        assert!(output.contains("'cranes' has 6 letters"));
        assert!(output.contains("must contain only the letters a-z"));
        assert!(output.contains("Solved: crane in 1 guesses"));
        assert!(output.contains("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn undo_recovers_from_unsolvable() {
        let output = play("y\nzzzzz\nwuuuu\nundo\nexit\n");

        assert!(output.contains("No candidates remain"));
        assert_eq!(output.matches("Turn 1: 5 candidates remaining").count(), 2);
    }

    #[test]
    fn exit_and_end_of_input_quit() {
        assert!(play("exit\n").contains("Interactive Mode"));
        assert!(play("").contains("Skip calc?"));
    }

    #[test]
    fn play_again_starts_fresh() {
        let output = play("y\ncrane\nccccc\ny\nexit\n");

        assert!(output.contains("New game started!"));
        assert_eq!(output.matches("Turn 1: 5 candidates remaining").count(), 2);
    }
}
