//! Interactive answers to clarifying questions.
//!
//! Questions are written to stderr so stdout carries only the final prompt:
//!
//! ```text
//! ── Clarifying Questions (2) ──
//! Press Enter to leave a question blank.
//!
//! [1/2] Who is the intended audience?
//!       e.g. High school students
//! answer>
//! ```

use async_trait::async_trait;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use tokinfo_application::{AnswerError, AnswerSource};
use tokinfo_domain::ClarifyingQuestion;

type Reader = Box<dyn BufRead + Send>;
type Writer = Box<dyn Write + Send>;

/// Terminal-based [`AnswerSource`] reading one line per question.
///
/// End of input yields [`AnswerError::Closed`], which the use case treats
/// as "skip this question".
pub struct InteractiveAnswerSource {
    input: Mutex<Reader>,
    output: Mutex<Writer>,
}

impl InteractiveAnswerSource {
    /// Read from stdin, prompt on stderr
    pub fn new() -> Self {
        Self::with_io(Box::new(io::BufReader::new(io::stdin())), Box::new(io::stderr()))
    }

    pub fn with_io(input: Reader, output: Writer) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    fn display_question(
        &self,
        index: usize,
        total: usize,
        question: &ClarifyingQuestion,
    ) -> Result<(), AnswerError> {
        let mut out = self
            .output
            .lock()
            .map_err(|e| AnswerError::IoError(e.to_string()))?;

        let render = |out: &mut Writer| -> io::Result<()> {
            if index == 0 {
                writeln!(out)?;
                writeln!(
                    out,
                    "{}",
                    format!("── Clarifying Questions ({}) ──", total).cyan().bold()
                )?;
                writeln!(out, "{}", "Press Enter to leave a question blank.".dimmed())?;
            }
            writeln!(out)?;
            writeln!(
                out,
                "{} {}",
                format!("[{}/{}]", index + 1, total).yellow().bold(),
                question.question
            )?;
            if !question.example_answer.trim().is_empty() {
                writeln!(
                    out,
                    "      {}",
                    format!("e.g. {}", question.example_answer).dimmed()
                )?;
            }
            write!(out, "{} ", "answer>".magenta().bold())?;
            out.flush()
        };

        render(&mut *out)
            .map_err(|e| AnswerError::IoError(format!("Failed to write question: {}", e)))
    }

    fn read_line(&self) -> Result<String, AnswerError> {
        let mut input = self
            .input
            .lock()
            .map_err(|e| AnswerError::IoError(e.to_string()))?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| AnswerError::IoError(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            return Err(AnswerError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for InteractiveAnswerSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerSource for InteractiveAnswerSource {
    async fn answer(
        &self,
        index: usize,
        total: usize,
        question: &ClarifyingQuestion,
    ) -> Result<String, AnswerError> {
        self.display_question(index, total, question)?;
        self.read_line()
    }
}
