//! Line-based interactive quiz.
//!
//! Each prompt accepts `1`-`5`, `b` to revisit the previous question, or
//! `q` to quit without a result.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::config::QuizConfig;
use crate::core::{Error, LikertValue};
use crate::report::QuizReport;
use crate::session::{QuizSession, SessionState};

const SCALE_HINT: &str = "1 = strongly disagree ... 5 = strongly agree, b = back, q = quit";

enum Input {
    Answer(LikertValue),
    Back,
    Quit,
    Invalid(String),
}

fn parse_input(line: &str) -> Input {
    match line.trim() {
        "b" | "B" => Input::Back,
        "q" | "Q" => Input::Quit,
        other => match other.parse::<LikertValue>() {
            Ok(value) => Input::Answer(value),
            Err(e) => Input::Invalid(e.to_string()),
        },
    }
}

/// Drive `session` from `input` until it completes or the user quits.
///
/// Returns the final report, or `None` when the quiz was abandoned.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut QuizSession,
    config: &QuizConfig,
    plain: bool,
    mut input: R,
    output: &mut W,
) -> Result<Option<QuizReport>> {
    writeln!(output, "{}", SCALE_HINT)?;

    while let Some(question) = session.current_question() {
        let progress = session.progress();
        writeln!(
            output,
            "\n[{}/{}] {}",
            progress.position + 1,
            progress.total,
            question.text
        )?;
        if let Some(previous) = session.answer_for(question.id) {
            writeln!(output, "(previous answer: {})", previous.value)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_input(&line) {
            Input::Answer(value) => {
                if let Err(e) = session.submit_answer(value) {
                    report_recoverable(e, output)?;
                    continue;
                }
                session.advance()?;
                if session.state() != SessionState::Complete {
                    if let Some(provisional) =
                        session.provisional_result(config.provisional_threshold)
                    {
                        writeln!(
                            output,
                            "Leaning {} ({})",
                            provisional.top_category, provisional.confidence
                        )?;
                    }
                }
            }
            Input::Back => {
                if let Err(e) = session.go_back() {
                    report_recoverable(e, output)?;
                }
            }
            Input::Quit => return Ok(None),
            Input::Invalid(message) => writeln!(output, "{}", message)?,
        }
    }

    let result = session.final_result()?;
    let report = QuizReport::new(result, session.accumulator(), &config.normalizer());
    writeln!(output)?;
    write!(output, "{}", report.render_terminal(plain))?;
    Ok(Some(report))
}

// Show a recoverable error to the user; anything else ends the quiz.
fn report_recoverable<W: Write>(error: Error, output: &mut W) -> Result<()> {
    if !error.is_recoverable() {
        return Err(error.into());
    }
    writeln!(output, "{}", error)?;
    Ok(())
}

pub fn take_quiz(seed: Option<u64>, plain: bool, config: &QuizConfig) -> Result<()> {
    let mut config = config.clone();
    if seed.is_some() {
        config.seed = seed;
    }
    let bank = config.question_bank().context("Failed to load question bank")?;
    let mut session = QuizSession::start(&bank, &config)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    if run_interactive(&mut session, &config, plain, stdin.lock(), &mut stdout)?.is_none() {
        writeln!(stdout, "\nQuiz abandoned.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionBank;
    use std::io::Cursor;

    fn session() -> (QuizSession, QuizConfig) {
        let config = QuizConfig {
            seed: Some(11),
            ..QuizConfig::default()
        };
        let session = QuizSession::start(QuestionBank::standard(), &config).unwrap();
        (session, config)
    }

    #[test]
    fn test_complete_run_produces_report() {
        let (mut session, config) = session();
        let input = "3\n".repeat(32);
        let mut output = Vec::new();
        let report = run_interactive(&mut session, &config, true, Cursor::new(input), &mut output)
            .unwrap()
            .unwrap();
        assert_eq!(report.answered, 32);
        assert_eq!(report.confidence.value(), 0);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("[32/32]"));
        assert!(text.contains("Leaning"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (mut session, config) = session();
        let mut output = Vec::new();
        let result =
            run_interactive(&mut session, &config, true, Cursor::new("7\nabc\nq\n"), &mut output)
                .unwrap();
        assert!(result.is_none());
        assert_eq!(session.progress().answered, 0);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Invalid Likert value 7"));
    }

    #[test]
    fn test_back_revises_previous_answer() {
        let (mut session, config) = session();
        let mut output = Vec::new();
        run_interactive(&mut session, &config, true, Cursor::new("5\nb\n1\nq\n"), &mut output)
            .unwrap();
        assert_eq!(session.progress().answered, 1);
        let first = session.questions()[0].id;
        assert_eq!(session.answer_for(first).unwrap().value.value(), 1);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("(previous answer: 5)"));
    }

    #[test]
    fn test_back_at_first_question_is_reported() {
        let (mut session, config) = session();
        let mut output = Vec::new();
        run_interactive(&mut session, &config, true, Cursor::new("b\n2\nq\n"), &mut output)
            .unwrap();
        assert_eq!(session.progress().answered, 1);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Cannot go back while session is at the first question"));
    }

    #[test]
    fn test_fatal_errors_are_not_swallowed() {
        let mut output = Vec::new();
        assert!(report_recoverable(Error::StackTable("broken".into()), &mut output).is_err());
        assert!(output.is_empty());

        report_recoverable(Error::invalid_state("advance", "complete"), &mut output).unwrap();
        assert!(!output.is_empty());
    }

    #[test]
    fn test_eof_abandons() {
        let (mut session, config) = session();
        let mut output = Vec::new();
        let result =
            run_interactive(&mut session, &config, true, Cursor::new("4\n"), &mut output).unwrap();
        assert!(result.is_none());
    }
}
