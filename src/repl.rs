use std::io::{BufRead, Write};

use serde_json::json;

use crate::errors::{EvalError, Result};
use crate::parser::ParseError;
use crate::{Evaluator, Value};

pub const PROMPT: &str = "lispy> ";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `3`, `3.500000`, `Error: Division by zero!`
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

pub fn render_value(value: &Value, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => value.to_string(),
        OutputFormat::Json => serde_json::to_string(value)?,
    })
}

pub fn render_parse_error(err: &ParseError, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => err.to_string(),
        OutputFormat::Json => json!({ "type": "parse_error", "value": err.to_string() }).to_string(),
    })
}

/// Line-at-a-time loop: read, evaluate, print. No editing, no history.
pub struct Session<'a> {
    evaluator: &'a Evaluator,
    format: OutputFormat,
    prompt: bool,
}

impl<'a> Session<'a> {
    pub fn new(evaluator: &'a Evaluator) -> Self {
        Self { evaluator, format: OutputFormat::Plain, prompt: true }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Render one line. Syntax errors are rendered too; `Ok(None)` for blank
    /// lines.
    pub fn line(&self, line: &str) -> Result<Option<String>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        match self.evaluator.eval(line) {
            Ok(value) => render_value(&value, self.format).map(Some),
            Err(EvalError::Parse(e)) => {
                tracing::debug!(line, error = %e, "parse failed");
                render_parse_error(&e, self.format).map(Some)
            }
            Err(e) => Err(e),
        }
    }

    /// Run until `input` is exhausted. Bytes that are not UTF-8 are replaced
    /// and end up as a parse error for that line only.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<()> {
        self.show_prompt(out)?;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.strip_suffix('\n').unwrap_or(&line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            if let Some(rendered) = self.line(line)? {
                writeln!(out, "{rendered}")?;
            }
            self.show_prompt(out)?;
        }
        if self.prompt {
            writeln!(out)?;
        }
        Ok(())
    }

    fn show_prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Context, UnaryMinus};
    use crate::expression::MAX_DEPTH;
    use pretty_assertions::assert_eq;

    fn run(session: &Session, input: &str) -> String {
        run_bytes(session, input.as_bytes())
    }

    fn run_bytes(session: &Session, input: &[u8]) -> String {
        let mut out = Vec::new();
        session.run(input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn invalid_utf8_line_does_not_end_session() {
        let ev = Evaluator::default();
        let session = Session::new(&ev).with_prompt(false);
        assert_eq!(
            run_bytes(&session, b"+ 1 2\n+ 1 \xff\n* 2 3\r\n"),
            "3\n<stdin>:1:5: error: expected number, '(' or end of input\n6\n"
        );
    }

    #[test]
    fn deeply_nested_line_is_a_parse_error() {
        let ev = Evaluator::default();
        let session = Session::new(&ev).with_prompt(false);
        let depth = 20_000;
        let line = format!("+ {}1{}", "(+ ".repeat(depth), ")".repeat(depth));
        let rendered = session.line(&line).unwrap().unwrap();
        assert!(rendered.ends_with("error: expression nested too deeply"), "{rendered}");

        let ok = format!("+ {}1{}", "(+ ".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(session.line(&ok).unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn quiet_session_prints_one_result_per_line() {
        let ev = Evaluator::default();
        let session = Session::new(&ev).with_prompt(false);
        let out = run(&session, "+ 1 2\n\n/ 10 0\n+ 1 2.5\n(+ 1\n");
        assert_eq!(
            out,
            "3\nError: Division by zero!\n3.500000\n<stdin>:1:1: error: expected one of '+', '-', '*', '/', '%'\n"
        );
    }

    #[test]
    fn prompts_before_every_line() {
        let ev = Evaluator::default();
        let session = Session::new(&ev);
        assert_eq!(run(&session, "* 2 3 4\n"), "lispy> 24\nlispy> \n");
        assert_eq!(run(&session, ""), "lispy> \n");
    }

    #[test]
    fn json_format() {
        let ev = Evaluator::new(Context::default().with_unary_minus(UnaryMinus::Negate));
        let session = Session::new(&ev).with_prompt(false).with_format(OutputFormat::Json);
        assert_eq!(
            run(&session, "- 5\n% 7 2.0\n+\n"),
            concat!(
                r#"{"type":"integer","value":-5}"#, "\n",
                r#"{"type":"error","value":"invalid_operator"}"#, "\n",
                r#"{"type":"parse_error","value":"<stdin>:1:2: error: expected number or '('"}"#, "\n",
            )
        );
    }
}
