//! Interactive question sequence that produces an [`AnswerSet`].
//!
//! The collector works over any `BufRead`/`Write` pair so the same code
//! drives a terminal session and scripted tests. A rejected answer is
//! reported and the same question is asked again; only end of input or a
//! broken stream ends collection early.

pub mod validation;

pub use validation::{is_valid_email, validate_description, validate_email, validate_title};

use crate::answers::{AnswerSet, License};
use crate::errors::{ReadmeError, Result};
use crate::formatting::OutputFormatter;
use crate::observability::set_current_question;
use std::collections::HashMap;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub type Validator = fn(&str) -> Result<()>;

#[derive(Debug, Clone, Copy)]
pub enum QuestionKind {
    /// Free text, optionally checked by a validator
    Input { validate: Option<Validator> },
    /// One license from a numbered list
    Select { choices: &'static [License] },
}

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub name: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
}

impl Question {
    const fn input(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::Input { validate: None },
        }
    }

    const fn validated(name: &'static str, message: &'static str, validate: Validator) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::Input {
                validate: Some(validate),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Choice(License),
}

/// The README questions in the order they are asked.
pub fn readme_questions() -> Vec<Question> {
    vec![
        Question::validated("title", "Project title:", validate_title),
        Question::validated("description", "Description:", validate_description),
        Question::input("installation", "Installation instructions:"),
        Question::input("usage", "Usage instructions:"),
        Question::input("contributing", "Contributing instructions:"),
        Question::input("test", "Testing instructions:"),
        Question {
            name: "license",
            message: "Choose a license:",
            kind: QuestionKind::Select {
                choices: &License::ALL,
            },
        },
        Question::input("username", "GitHub username of project creator:"),
        Question::validated("email", "Email of project creator:", validate_email),
    ]
}

/// Match a select answer against the choices: 1-based index or name,
/// case-insensitive. Empty picks the first choice.
pub fn parse_choice(input: &str, choices: &[License]) -> Result<License> {
    if input.is_empty() {
        return choices
            .first()
            .copied()
            .ok_or(ReadmeError::MissingAnswer("license"));
    }

    let by_index = input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| choices.get(i).copied());

    by_index
        .or_else(|| {
            choices
                .iter()
                .copied()
                .find(|license| license.as_str().eq_ignore_ascii_case(input))
        })
        .ok_or_else(|| ReadmeError::validation("license", "Please choose one of the listed options."))
}

pub struct PromptCollector<R, W> {
    input: R,
    output: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<R: BufRead, W: Write> PromptCollector<R, W> {
    pub fn new(input: R, output: W, formatter: Box<dyn OutputFormatter>) -> Self {
        Self {
            input,
            output,
            formatter,
        }
    }

    /// Ask every README question and assemble the answers.
    pub fn collect(&mut self) -> Result<AnswerSet> {
        self.collect_with(&readme_questions())
    }

    pub fn collect_with(&mut self, questions: &[Question]) -> Result<AnswerSet> {
        let mut answers = HashMap::with_capacity(questions.len());
        for question in questions {
            let _question = set_current_question(question.name);
            let answer = self.ask(question)?;
            debug!(question = question.name, "answer accepted");
            answers.insert(question.name, answer);
        }
        build_answer_set(answers)
    }

    /// Ask one question until it gets an acceptable answer.
    pub fn ask(&mut self, question: &Question) -> Result<Answer> {
        loop {
            self.write_prompt(question)?;
            let line = self.read_answer()?;

            let outcome = match question.kind {
                QuestionKind::Input { validate } => validate
                    .map_or(Ok(()), |check| check(&line))
                    .map(|()| Answer::Text(line)),
                QuestionKind::Select { choices } => parse_choice(&line, choices).map(Answer::Choice),
            };

            match outcome {
                Ok(answer) => return Ok(answer),
                Err(err) if err.is_recoverable() => self.report_rejection(question, &err)?,
                Err(err) => return Err(err),
            }
        }
    }

    fn report_rejection(&mut self, question: &Question, err: &ReadmeError) -> Result<()> {
        let message = err.user_message();
        warn!(question = question.name, %message, "answer rejected");
        let line = self.formatter.warning(&format!(">> {}", message));
        writeln!(self.output, "{}", line).map_err(stdout_error)
    }

    fn write_prompt(&mut self, question: &Question) -> Result<()> {
        let marker = self.formatter.info("?");
        let message = self.formatter.bold(question.message);

        if let QuestionKind::Select { choices } = question.kind {
            writeln!(self.output, "{} {}", marker, message).map_err(stdout_error)?;
            for (index, choice) in choices.iter().enumerate() {
                writeln!(self.output, "  {}) {}", index + 1, choice).map_err(stdout_error)?;
            }
            let hint = self.formatter.dim(&format!("[1-{}]", choices.len()));
            write!(self.output, "{} ", hint).map_err(stdout_error)?;
        } else {
            write!(self.output, "{} {} ", marker, message).map_err(stdout_error)?;
        }

        self.output.flush().map_err(stdout_error)
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| ReadmeError::io("<stdin>", e))?;
        if read == 0 {
            return Err(ReadmeError::Cancelled);
        }
        Ok(line.trim().to_string())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

fn stdout_error(e: std::io::Error) -> ReadmeError {
    ReadmeError::io("<stdout>", e)
}

/// Assemble the answers, refusing to invent a title, description or license
/// that was never asked for.
fn build_answer_set(mut answers: HashMap<&'static str, Answer>) -> Result<AnswerSet> {
    let mut text = |name: &str| match answers.remove(name) {
        Some(Answer::Text(value)) => value,
        _ => String::new(),
    };

    let title = required(text("title"), "title")?;
    let description = required(text("description"), "description")?;
    let installation = text("installation");
    let usage = text("usage");
    let contributing = text("contributing");
    let test = text("test");
    let username = text("username");
    let email = text("email");

    let license = match answers.remove("license") {
        Some(Answer::Choice(license)) => license,
        _ => return Err(ReadmeError::MissingAnswer("license")),
    };

    Ok(AnswerSet {
        title,
        description,
        installation,
        usage,
        contributing,
        test,
        license,
        username,
        email,
    })
}

fn required(value: String, field: &'static str) -> Result<String> {
    if value.is_empty() {
        Err(ReadmeError::MissingAnswer(field))
    } else {
        Ok(value)
    }
}
