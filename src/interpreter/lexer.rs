use std::fmt;

use log::{debug, trace};
use logos::Logos;

use crate::error::ScanError;

/// Classifies a lexeme.
///
/// `TokenKind` is also the lexer: the `logos` attributes describe how each
/// kind is recognised. Whitespace, newlines and line comments are skipped,
/// and `Eof` is never produced by the lexer itself; [`scan`] appends it.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    StarStar,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,

    /// Variable names such as `x` or `loop_count`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// A double-quoted string literal. May span several lines.
    #[regex(r#""[^"]*""#, |lex| {
        lex.extras.line += count_newlines(lex.slice());
        TokenKind::String
    }, allow_greedy = true)]
    String,
    /// Number literals such as `42` or `3.14`. There is no exponent form and
    /// no leading sign.
    #[regex(r"[0-9]+")]
    #[regex(r"[0-9]+\.[0-9]+")]
    Number,

    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `for`
    #[token("for")]
    For,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// A quote that is never closed. Reported as a scan error, never emitted.
    #[regex(r#""[^"]*"#, |lex| {
        lex.extras.line += count_newlines(lex.slice());
        TokenKind::UnterminatedString
    }, allow_greedy = true)]
    UnterminatedString,
    /// `// line comments`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,

    /// End of input.
    Eof,
}

/// Extra state carried by the lexer.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The value carried by a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The parsed value of a `Number` token.
    Number(f64),
    /// The contents of a `String` token, without the quotes.
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

/// A classified lexeme together with its literal value and source line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The raw source text of the token. Empty for `Eof` and for placeholder
    /// tokens produced by parser error recovery.
    pub lexeme:  String,
    /// The literal value for `Number` and `String` tokens.
    pub literal: Option<Literal>,
    /// The line the token ended on.
    pub line:    usize,
}

impl Token {
    /// Builds a token without a literal value.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: None,
               line }
    }

    /// Builds the end-of-input marker.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               lexeme: String::new(),
               literal: None,
               line }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {literal}")?;
        }
        Ok(())
    }
}

/// Converts source text into tokens.
///
/// Scanning never fails. Unexpected characters and unterminated strings are
/// collected as [`ScanError`]s and skipped, and the returned token list always
/// ends with exactly one `Eof` token.
///
/// # Example
/// ```
/// use treelox::interpreter::lexer::{TokenKind, scan};
///
/// let (tokens, errors) = scan("1 + 2");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert!(errors.is_empty());
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::Eof]);
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<Token>, Vec<ScanError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        let slice = lexer.slice();

        match result {
            Ok(TokenKind::UnterminatedString) => {
                errors.push(ScanError::UnterminatedString { line });
            },
            Ok(kind) => {
                let token = Token { kind,
                                    lexeme: slice.to_string(),
                                    literal: literal_for(kind, slice),
                                    line };
                trace!("scanned {token}");
                tokens.push(token);
            },
            Err(()) => {
                errors.push(ScanError::UnexpectedCharacter { character: slice.to_string(),
                                                             line });
            },
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    debug!("scanned {} tokens with {} errors", tokens.len(), errors.len());

    (tokens, errors)
}

/// Extracts the literal value of `Number` and `String` lexemes.
fn literal_for(kind: TokenKind, slice: &str) -> Option<Literal> {
    match kind {
        TokenKind::Number => slice.parse().ok().map(Literal::Number),
        TokenKind::String => Some(Literal::Str(slice[1..slice.len() - 1].to_string())),
        _ => None,
    }
}

fn count_newlines(slice: &str) -> usize {
    slice.bytes().filter(|&b| b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).0.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn one_and_two_character_operators() {
        use TokenKind::*;
        assert_eq!(kinds("! != = == < <= > >= * ** /"),
                   [Bang, BangEqual, Equal, EqualEqual, Less, LessEqual, Greater, GreaterEqual,
                    Star, StarStar, Slash, Eof]);
    }

    #[test]
    fn keywords_and_identifiers() {
        use TokenKind::*;
        assert_eq!(kinds("var variable while _x print nil or orchid"),
                   [Var, Identifier, While, Identifier, Print, Nil, Or, Identifier, Eof]);
    }

    #[test]
    fn number_literals() {
        let (tokens, errors) = scan("12 3.25 7.");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].literal, Some(Literal::Number(12.0)));
        assert_eq!(tokens[1].literal, Some(Literal::Number(3.25)));
        assert_eq!(tokens[2].literal, Some(Literal::Number(7.0)));
        assert_eq!(tokens[3].kind, TokenKind::Dot);
    }

    #[test]
    fn number_lexemes_round_trip() {
        for source in ["0", "42", "3.14159", "0.5", "1000000.000001"] {
            let (tokens, _) = scan(source);
            let Some(Literal::Number(value)) = tokens[0].literal else {
                panic!("expected a number literal for {source}");
            };
            assert_eq!(tokens[0].lexeme.parse::<f64>().unwrap(), value);
        }
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(kinds("1 // one\n// whole line\n2"),
                   [TokenKind::Number, TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn multi_line_strings_count_lines() {
        let (tokens, errors) = scan("\"a\nb\" x");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].literal, Some(Literal::Str("a\nb".to_string())));
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn unterminated_string_is_reported_without_token() {
        let (tokens, errors) = scan("print \"oops\n");
        assert_eq!(errors, [ScanError::UnterminatedString { line: 2 }]);
        assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
                   [TokenKind::Print, TokenKind::Eof]);
    }

    #[test]
    fn unexpected_characters_are_skipped() {
        let (tokens, errors) = scan("1 # 2\n@");
        assert_eq!(errors,
                   [ScanError::UnexpectedCharacter { character: "#".to_string(),
                                                     line:      1, },
                    ScanError::UnexpectedCharacter { character: "@".to_string(),
                                                     line:      2, }]);
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn eof_carries_last_line() {
        let (tokens, _) = scan("a\n\nb\n");
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.line, 4);
        assert!(eof.lexeme.is_empty());
    }
}
