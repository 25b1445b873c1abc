//! Command line tokenizer
//!
//! Splits input into a program word and arguments. Single and double quotes
//! keep embedded spaces, quotes can appear mid-word (`foo"bar"baz`), and
//! backslash escapes work inside double quotes. That is the whole grammar:
//! there are no pipes, redirections or expansions here.

use std::iter::Peekable;
use std::str::Chars;

/// A parsed command invocation (program + arguments)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// Parse error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Blank or whitespace-only input
    EmptyCommand,
    /// Unterminated quoted string
    UnterminatedQuote(char),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCommand => write!(f, "empty command"),
            Self::UnterminatedQuote(c) => write!(f, "unterminated {} quote", c),
        }
    }
}

impl std::error::Error for ParseError {}

/// Tokenizer for command input
struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn next_word(&mut self) -> Result<Option<String>, ParseError> {
        self.skip_whitespace();

        if self.chars.peek().is_none() {
            return Ok(None);
        }

        let mut word = String::new();
        let mut quoted = false;

        while let Some(&c) = self.chars.peek() {
            match c {
                c if c.is_whitespace() => break,
                // Quotes can appear mid-word: foo"bar"baz
                '"' | '\'' => {
                    self.chars.next();
                    word.push_str(&self.read_quoted_content(c)?);
                    quoted = true;
                }
                _ => {
                    word.push(c);
                    self.chars.next();
                }
            }
        }

        if word.is_empty() && !quoted {
            Ok(None)
        } else {
            Ok(Some(word))
        }
    }

    fn read_quoted_content(&mut self, quote: char) -> Result<String, ParseError> {
        let mut content = String::new();

        loop {
            match self.chars.next() {
                Some(c) if c == quote => break,
                Some('\\') if quote == '"' => {
                    // Escape sequences only in double quotes
                    match self.chars.next() {
                        Some(escaped) => content.push(escaped),
                        None => return Err(ParseError::UnterminatedQuote(quote)),
                    }
                }
                Some(c) => content.push(c),
                None => return Err(ParseError::UnterminatedQuote(quote)),
            }
        }

        Ok(content)
    }
}

/// Split an input line into words.
pub fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
    let mut lexer = Lexer::new(input);
    let mut words = Vec::new();
    while let Some(word) = lexer.next_word()? {
        words.push(word);
    }
    Ok(words)
}

/// Parse a command line into an invocation.
pub fn parse(input: &str) -> Result<Invocation, ParseError> {
    let mut words = tokenize(input)?;
    if words.is_empty() {
        return Err(ParseError::EmptyCommand);
    }
    let program = words.remove(0);
    Ok(Invocation {
        program,
        args: words,
    })
}
