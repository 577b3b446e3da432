//! Cheap lexical bound on how deep a source's syntax tree can get.
//!
//! Parsing and every AST pass recurse once per nesting level, so a small
//! file such as `((((…1…))))` or `1+1+1+…` can exhaust the thread stack.
//! The scan runs before parsing and rejects such input. It tracks
//! bracket depth, plus the number of tokens in each unfinished expression.
//! A `;`, a `,` or a line break that ends a statement closes an expression.

/// Maximum number of open `(`, `[`, `{` and `${`
pub const MAX_BRACKET_DEPTH: usize = 256;

/// Maximum number of tokens across the unfinished expressions on the bracket stack
pub const MAX_EXPRESSION_TOKENS: usize = 4096;

/// Which limit a source exceeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestingLimit {
    Brackets,
    Expression,
}

impl NestingLimit {
    pub fn describe(self) -> String {
        match self {
            Self::Brackets => format!("brackets nested more than {MAX_BRACKET_DEPTH} levels deep"),
            Self::Expression => {
                format!("expression longer than {MAX_EXPRESSION_TOKENS} tokens without a break")
            }
        }
    }
}

/// Keywords after which a `/` starts a regular expression
const REGEX_KEYWORDS: &[&[u8]] = &[
    b"return", b"typeof", b"case", b"do", b"else", b"in", b"instanceof", b"new", b"void",
    b"delete", b"throw", b"yield", b"await", b"of",
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Last {
    Start,
    Operand,
    Operator,
    Keyword,
}

struct Frame {
    tokens: usize,
    /// Opened by `${` inside a template literal
    template: bool,
}

struct Scanner<'s> {
    bytes: &'s [u8],
    pos: usize,
    frames: Vec<Frame>,
    total: usize,
    last: Last,
}

/// Fails with the first limit `source_text` exceeds
pub fn check(source_text: &str) -> Result<(), NestingLimit> {
    Scanner {
        bytes: source_text.as_bytes(),
        pos: 0,
        frames: vec![Frame { tokens: 0, template: false }],
        total: 0,
        last: Last::Start,
    }
    .run()
}

impl Scanner<'_> {
    fn run(mut self) -> Result<(), NestingLimit> {
        while let Some(&byte) = self.bytes.get(self.pos) {
            match byte {
                b'\n' | b'\r' => {
                    self.pos += 1;
                    if self.last == Last::Operand && !self.continues_on_next_line() {
                        self.end_expression();
                    }
                }
                b' ' | b'\t' | 0x0B | 0x0C => self.pos += 1,
                b'/' if self.peek(1) == Some(b'/') => self.skip_line_comment(),
                b'/' if self.peek(1) == Some(b'*') => self.skip_block_comment(),
                b'/' if self.last != Last::Operand => {
                    self.skip_regex();
                    self.token(Last::Operand)?;
                }
                b'\'' | b'"' => {
                    self.skip_string(byte);
                    self.token(Last::Operand)?;
                }
                b'`' => {
                    self.pos += 1;
                    self.token(Last::Operand)?;
                    self.scan_template()?;
                }
                b'(' | b'[' | b'{' => {
                    self.pos += 1;
                    self.token(Last::Operator)?;
                    self.open(false)?;
                }
                b')' | b']' | b'}' => {
                    self.pos += 1;
                    if self.close() {
                        self.scan_template()?;
                    } else {
                        self.token(Last::Operand)?;
                    }
                }
                b';' | b',' => {
                    self.pos += 1;
                    self.end_expression();
                    self.last = Last::Operator;
                }
                b'0'..=b'9' => {
                    self.skip_word(true);
                    self.token(Last::Operand)?;
                }
                b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' | b'\\' | 0x80..=0xFF => {
                    let start = self.pos;
                    self.skip_word(false);
                    let kind = if REGEX_KEYWORDS.contains(&&self.bytes[start..self.pos]) {
                        Last::Keyword
                    } else {
                        Last::Operand
                    };
                    self.token(kind)?;
                }
                _ => {
                    self.pos += 1;
                    self.token(Last::Operator)?;
                }
            }
        }
        Ok(())
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn token(&mut self, last: Last) -> Result<(), NestingLimit> {
        self.last = last;
        if let Some(frame) = self.frames.last_mut() {
            frame.tokens += 1;
        }
        self.total += 1;
        if self.total > MAX_EXPRESSION_TOKENS {
            return Err(NestingLimit::Expression);
        }
        Ok(())
    }

    fn end_expression(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            self.total -= frame.tokens;
            frame.tokens = 0;
        }
    }

    fn open(&mut self, template: bool) -> Result<(), NestingLimit> {
        self.frames.push(Frame { tokens: 0, template });
        self.last = Last::Start;
        if self.frames.len() > MAX_BRACKET_DEPTH {
            return Err(NestingLimit::Brackets);
        }
        Ok(())
    }

    /// Pops a bracket level; `true` when it closed a template substitution
    fn close(&mut self) -> bool {
        if self.frames.len() == 1 {
            return false;
        }
        match self.frames.pop() {
            Some(frame) => {
                self.total -= frame.tokens;
                frame.template
            }
            None => false,
        }
    }

    /// A line starting with one of these continues the expression above it
    fn continues_on_next_line(&self) -> bool {
        let next = self.bytes[self.pos..]
            .iter()
            .find(|byte| !byte.is_ascii_whitespace());
        matches!(
            next,
            Some(
                b'+' | b'-' | b'*' | b'/' | b'%' | b'&' | b'|' | b'^' | b'?' | b':' | b'.' | b'='
                    | b'<' | b'>' | b',' | b'(' | b'['
            )
        )
    }

    fn skip_line_comment(&mut self) {
        while let Some(byte) = self.peek(0) {
            if byte == b'\n' || byte == b'\r' {
                return;
            }
            self.pos += 1;
        }
    }

    fn skip_block_comment(&mut self) {
        self.pos += 2;
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'*' && self.peek(1) == Some(b'/') {
                self.pos += 2;
                return;
            }
            self.pos += 1;
        }
    }

    fn skip_string(&mut self, quote: u8) {
        self.pos += 1;
        while let Some(byte) = self.peek(0) {
            self.pos += 1;
            match byte {
                b'\\' => self.pos += 1,
                b'\n' => return,
                _ if byte == quote => return,
                _ => {}
            }
        }
    }

    fn skip_regex(&mut self) {
        self.pos += 1;
        let mut in_class = false;
        while let Some(byte) = self.peek(0) {
            self.pos += 1;
            match byte {
                b'\\' => self.pos += 1,
                b'[' => in_class = true,
                b']' => in_class = false,
                b'/' if !in_class => break,
                b'\n' => return,
                _ => {}
            }
        }
        while self.peek(0).is_some_and(|byte| byte.is_ascii_alphabetic()) {
            self.pos += 1;
        }
    }

    /// Scan template text up to the closing backtick or the next `${`
    fn scan_template(&mut self) -> Result<(), NestingLimit> {
        while let Some(byte) = self.peek(0) {
            self.pos += 1;
            match byte {
                b'\\' => self.pos += 1,
                b'`' => {
                    self.last = Last::Operand;
                    return Ok(());
                }
                b'$' if self.peek(0) == Some(b'{') => {
                    self.pos += 1;
                    return self.open(true);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn skip_word(&mut self, number: bool) {
        while let Some(byte) = self.peek(0) {
            let continues = byte.is_ascii_alphanumeric()
                || matches!(byte, b'_' | b'$' | b'\\' | 0x80..=0xFF)
                || (number && byte == b'.');
            if !continues {
                return;
            }
            self.pos += 1;
        }
    }
}
