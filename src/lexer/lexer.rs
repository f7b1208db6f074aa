use std::rc::Rc;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

// Every pattern is anchored at the start of the remaining input. Order matters:
// `:=` before `:`, pixels and percentages before plain scalars.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//[^\\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("(?s)^/\\*.*?\\*/").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[0-9]+px").unwrap(), handler: pixel_handler },
        RegexPattern { regex: Regex::new("^[0-9]+%").unwrap(), handler: percentage_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: scalar_handler },
        RegexPattern { regex: Regex::new("^#[a-zA-Z0-9_-]+").unwrap(), handler: hash_handler },
        RegexPattern { regex: Regex::new("^\\.[a-zA-Z_][a-zA-Z0-9_-]*").unwrap(), handler: class_handler },
        RegexPattern { regex: Regex::new("^[A-Z][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[a-z][a-zA-Z0-9_-]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, ":=") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Span of the next `len` bytes of input.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn push_match(&mut self, regex: &Regex, kind: TokenKind) {
        let matched = match regex.find(self.remainder()) {
            Some(found) => found.as_str().to_string(),
            None => return,
        };

        let span = self.span_of(matched.len());
        self.advance_n(matched.len());
        self.push(MK_TOKEN!(kind, matched, span));
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).map_or(0, |found| found.end());
    lexer.advance_n(matched);
}

fn pixel_handler(lexer: &mut Lexer, regex: &Regex) {
    lexer.push_match(regex, TokenKind::Pixel);
}

fn percentage_handler(lexer: &mut Lexer, regex: &Regex) {
    lexer.push_match(regex, TokenKind::Percentage);
}

fn scalar_handler(lexer: &mut Lexer, regex: &Regex) {
    lexer.push_match(regex, TokenKind::Scalar);
}

fn class_handler(lexer: &mut Lexer, regex: &Regex) {
    lexer.push_match(regex, TokenKind::ClassSelector);
}

/// `#` followed by exactly six hex digits is a color, anything else an id.
fn hash_handler(lexer: &mut Lexer, regex: &Regex) {
    let is_color = regex.find(lexer.remainder()).is_some_and(|found| {
        let digits = &found.as_str()[1..];
        digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
    });

    let kind = if is_color { TokenKind::Color } else { TokenKind::IdSelector };
    lexer.push_match(regex, kind);
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = match regex.find(lexer.remainder()) {
        Some(found) => found.as_str().to_string(),
        None => return,
    };

    let kind = if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        *kind
    } else if value.starts_with(|c: char| c.is_ascii_uppercase()) {
        TokenKind::VariableIdent
    } else {
        TokenKind::Identifier
    };

    let span = lexer.span_of(value.len());
    lexer.advance_n(value.len());
    lexer.push(MK_TOKEN!(kind, value, span));
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                let token = lex.at().map(String::from).unwrap_or_default();
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, Position(lex.pos as u32, Rc::clone(&lex.file))));
            }
        }
    }

    debug!("Tokenized {} tokens from {}", lex.tokens.len(), lex.file);

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    Ok(lex.tokens)
}
