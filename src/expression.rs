// src/expression.rs
use crate::parser::{ParseError, Parser};

/// Operator symbols the grammar accepts.
pub const OPERATORS: [char; 5] = ['+', '-', '*', '/', '%'];

/// Deepest parenthesized nesting `parse_expr` accepts. Keeps both the parser
/// and the evaluator's recursion within the stack of a default thread.
pub const MAX_DEPTH: usize = 256;

/// One parsed input line. Built fresh per line and only ever borrowed by the
/// evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// Exact source text of a number, e.g. `-12.5`.
    Literal(String),
    /// Operator symbol applied to one or more operands, left to right.
    Operation { op: String, operands: Vec<SyntaxNode> },
}

impl SyntaxNode {
    pub fn literal(text: impl Into<String>) -> Self {
        SyntaxNode::Literal(text.into())
    }

    pub fn operation(op: impl Into<String>, operands: Vec<SyntaxNode>) -> Self {
        SyntaxNode::Operation { op: op.into(), operands }
    }
}

/// Parse one line: a bare operator followed by one or more operands.
///
/// ```text
/// number   : /-?[0-9]+\.?[0-9]*/
/// operator : '+' | '-' | '*' | '/' | '%'
/// expr     : <number> | '(' <operator> <expr>+ ')'
/// line     : /^/ <operator> <expr>+ /$/
/// ```
pub fn parse_expr(input: &str) -> Result<SyntaxNode, ParseError> {
    let mut p = EParser::new(input);
    let node = p.parse_operation()?;
    p.skip_ws();
    if !p.eof() {
        return Err(p.parser.error("expected number, '(' or end of input"));
    }
    Ok(node)
}

struct EParser<'a> {
    parser: Parser<'a>,
    depth: usize,
}

impl<'a> EParser<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            parser: Parser::new(s),
            depth: 0,
        }
    }

    // <operator> <expr>+, without the surrounding parentheses
    fn parse_operation(&mut self) -> Result<SyntaxNode, ParseError> {
        self.skip_ws();
        let op = self
            .parser
            .one_of(&OPERATORS)
            .ok_or_else(|| self.parser.error("expected one of '+', '-', '*', '/', '%'"))?;
        let operands = self.parse_operands()?;
        Ok(SyntaxNode::Operation { op: op.to_string(), operands })
    }

    fn parse_operands(&mut self) -> Result<Vec<SyntaxNode>, ParseError> {
        let mut out = vec![self.parse_node()?];
        loop {
            self.skip_ws();
            if self.parser.at_number() || self.parser.peek_char() == Some('(') {
                out.push(self.parse_node()?);
            } else {
                break;
            }
        }
        Ok(out)
    }

    fn parse_node(&mut self) -> Result<SyntaxNode, ParseError> {
        self.skip_ws();
        if self.parser.at_number() {
            let text = self.parser.parse_number_literal()?;
            return Ok(SyntaxNode::literal(text));
        }
        if self.parser.peek_char() != Some('(') {
            return Err(self.parser.error("expected number or '('"));
        }
        if self.depth == MAX_DEPTH {
            return Err(self.parser.error("expression nested too deeply"));
        }
        self.parser.consume_char('(');
        self.depth += 1;
        let node = self.parse_operation()?;
        self.skip_ws();
        self.parser.expect(')')?;
        self.depth -= 1;
        Ok(node)
    }

    fn skip_ws(&mut self) {
        self.parser.skip_ws();
    }

    fn eof(&self) -> bool {
        self.parser.eof()
    }
}
