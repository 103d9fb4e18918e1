//! Comment- and string-aware character scanning
//!
//! Every structural question the parser asks (where is `:root`, where does a
//! declaration end, do the braces balance) is answered by walking
//! [`Scanner`] tokens and looking only at [`Region::Code`]. Braces, colons and
//! semicolons inside comments or string literals never count.

use std::iter::Peekable;
use std::ops::Range;
use std::str::CharIndices;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until},
    character::complete::multispace1,
    combinator::value,
    error::ParseError as NomParseError,
    multi::many0,
    sequence::delimited,
    IResult,
};

/// Which part of the stylesheet a character belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Code,
    Comment,
    Str,
}

/// A character with its byte offset and region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub offset: usize,
    pub ch: char,
    pub region: Region,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Normal,
    OpeningComment,
    Comment,
    ClosingComment,
    Str { quote: char, escaped: bool },
}

/// Single pass state machine over CSS text
pub struct Scanner<'a> {
    chars: Peekable<CharIndices<'a>>,
    base: usize,
    state: State,
}

impl<'a> Scanner<'a> {
    pub fn new(css: &'a str) -> Self {
        Self::starting_at(css, 0)
    }

    /// Scan `css[start..]` assuming `start` is outside any comment or string
    ///
    /// Offsets in the produced tokens are relative to `css`, not to `start`.
    pub fn starting_at(css: &'a str, start: usize) -> Self {
        let start = start.min(css.len());
        Self {
            chars: css[start..].char_indices().peekable(),
            base: start,
            state: State::Normal,
        }
    }

    fn next_is(&mut self, expected: char) -> bool {
        self.chars.peek().map(|&(_, c)| c) == Some(expected)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let (index, ch) = self.chars.next()?;

        let state = self.state;
        let region = match state {
            State::Normal => match ch {
                '/' if self.next_is('*') => {
                    self.state = State::OpeningComment;
                    Region::Comment
                }
                '"' | '\'' => {
                    self.state = State::Str {
                        quote: ch,
                        escaped: false,
                    };
                    Region::Str
                }
                _ => Region::Code,
            },
            State::OpeningComment => {
                self.state = State::Comment;
                Region::Comment
            }
            State::Comment => {
                if ch == '*' && self.next_is('/') {
                    self.state = State::ClosingComment;
                }
                Region::Comment
            }
            State::ClosingComment => {
                self.state = State::Normal;
                Region::Comment
            }
            State::Str { quote, escaped } => {
                if escaped {
                    self.state = State::Str {
                        quote,
                        escaped: false,
                    };
                    Region::Str
                } else if ch == '\\' {
                    self.state = State::Str {
                        quote,
                        escaped: true,
                    };
                    Region::Str
                } else if ch == '\n' {
                    // Unterminated string ends at the line break
                    self.state = State::Normal;
                    Region::Code
                } else {
                    if ch == quote {
                        self.state = State::Normal;
                    }
                    Region::Str
                }
            }
        };

        Some(Token {
            offset: self.base + index,
            ch,
            region,
        })
    }
}

fn code_tokens(scanner: Scanner<'_>) -> impl Iterator<Item = Token> + '_ {
    scanner.filter(|token| token.region == Region::Code)
}

/// Parse a block comment /* ... */
pub(crate) fn comment<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, &'a str, E> {
    delimited(tag("/*"), take_until("*/"), tag("*/"))(input)
}

/// Parse whitespace and comments
pub(crate) fn ws<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, (), E> {
    value((), many0(alt((value((), multispace1), value((), comment)))))(input)
}

/// Byte length of the leading whitespace and comments in `input`
pub(crate) fn trivia_len(input: &str) -> usize {
    match ws::<()>(input) {
        Ok((rest, ())) => input.len() - rest.len(),
        Err(_) => 0,
    }
}

/// Count of `{` and `}` outside comments and strings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BraceBalance {
    pub opening: usize,
    pub closing: usize,
    /// Offset of the first stray `}`, or else of the outermost unclosed `{`
    pub first_unmatched: Option<usize>,
}

impl BraceBalance {
    pub fn is_balanced(&self) -> bool {
        self.opening == self.closing
    }
}

pub fn brace_balance(css: &str) -> BraceBalance {
    let mut balance = BraceBalance::default();
    let mut open = Vec::new();
    let mut stray = None;

    for token in code_tokens(Scanner::new(css)) {
        match token.ch {
            '{' => {
                balance.opening += 1;
                open.push(token.offset);
            }
            '}' => {
                balance.closing += 1;
                if open.pop().is_none() && stray.is_none() {
                    stray = Some(token.offset);
                }
            }
            _ => {}
        }
    }

    balance.first_unmatched = stray.or_else(|| open.first().copied());
    balance
}

/// Location of a `:root { ... }` rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootBlock {
    /// Offset of the `:` of `:root`
    pub selector: usize,
    /// Byte range between the braces
    pub body: Range<usize>,
    /// False when the input ended before the matching `}`
    pub terminated: bool,
}

/// Find the first top-level `:root` rule
///
/// `:root` only counts outside comments and strings, at nesting depth zero,
/// followed by optional whitespace or comments and then `{`. Nested blocks in
/// the body do not end it. An unterminated rule runs to the end of the input.
pub fn find_root_block(css: &str) -> Option<RootBlock> {
    let mut depth = 0usize;
    for token in code_tokens(Scanner::new(css)) {
        match token.ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                if let Some(block) = root_block_at(css, token.offset) {
                    return Some(block);
                }
            }
            _ => {}
        }
    }
    None
}

fn root_block_at(css: &str, selector: usize) -> Option<RootBlock> {
    let after = css[selector..].strip_prefix(":root")?;
    if after.starts_with(|c: char| c.is_alphanumeric() || c == '-' || c == '_') {
        return None;
    }

    let open = selector + ":root".len() + trivia_len(after);
    if !css[open..].starts_with('{') {
        return None;
    }

    let body_start = open + 1;
    let mut depth = 0usize;
    for token in code_tokens(Scanner::starting_at(css, body_start)) {
        match token.ch {
            '{' => depth += 1,
            '}' if depth == 0 => {
                return Some(RootBlock {
                    selector,
                    body: body_start..token.offset,
                    terminated: true,
                });
            }
            '}' => depth -= 1,
            _ => {}
        }
    }

    Some(RootBlock {
        selector,
        body: body_start..css.len(),
        terminated: false,
    })
}

/// One declaration-sized slice of a rule body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub offset: usize,
    /// Contains a nested `{ ... }` block
    pub nested: bool,
}

/// Split `css[body]` at top-level semicolons
///
/// A nested block ends its segment at the closing brace. Blank segments
/// (whitespace or comments only) are dropped.
pub fn split_declarations(css: &str, body: Range<usize>) -> Vec<Segment<'_>> {
    let end = body.end.min(css.len());
    let bounded = &css[..end];

    let mut segments = Vec::new();
    let mut push = |range: Range<usize>, nested: bool| {
        let text = &bounded[range.clone()];
        if trivia_len(text) < text.len() {
            segments.push(Segment {
                text,
                offset: range.start,
                nested,
            });
        }
    };

    let mut start = body.start;
    let mut depth = 0usize;
    let mut nested = false;

    for token in code_tokens(Scanner::starting_at(bounded, body.start)) {
        match token.ch {
            '{' => {
                depth += 1;
                nested = true;
            }
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && nested {
                    push(start..token.offset + 1, true);
                    start = token.offset + 1;
                    nested = false;
                }
            }
            ';' if depth == 0 => {
                push(start..token.offset, nested);
                start = token.offset + 1;
                nested = false;
            }
            _ => {}
        }
    }

    if start < end {
        push(start..end, nested);
    }
    segments
}

/// Copy of `text` with comments removed and whitespace trimmed
pub fn strip_comments(text: &str) -> String {
    let kept: String = Scanner::new(text)
        .filter(|token| token.region != Region::Comment)
        .map(|token| token.ch)
        .collect();
    kept.trim().to_string()
}

/// First line that looks like a declaration without a terminating `;`
///
/// A line qualifies when it has a `:` inside a block and its last code
/// character is not one of `; { } , (`. Advisory only.
pub fn missing_semicolon_line(css: &str) -> Option<usize> {
    let suspicious = |has_colon: bool, last: Option<char>| {
        has_colon && !matches!(last, Some(';' | '{' | '}' | ',' | '('))
    };

    let mut depth = 0usize;
    let mut line = 1;
    let mut has_colon = false;
    let mut last = None;

    for token in Scanner::new(css) {
        if token.ch == '\n' {
            if suspicious(has_colon, last) {
                return Some(line);
            }
            line += 1;
            has_colon = false;
            last = None;
            continue;
        }
        if token.region != Region::Code || token.ch.is_whitespace() {
            continue;
        }
        match token.ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ':' if depth > 0 => has_colon = true,
            _ => {}
        }
        last = Some(token.ch);
    }

    suspicious(has_colon, last).then_some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body<'a>(css: &'a str, block: &RootBlock) -> &'a str {
        &css[block.body.clone()]
    }

    #[test]
    fn scanner_marks_comments_and_strings() {
        let css = "a/*{*/'}'b";
        let code: String = code_tokens(Scanner::new(css)).map(|t| t.ch).collect();
        assert_eq!(code, "ab");
    }

    #[test]
    fn comment_opener_is_not_reused_as_closer() {
        let css = "/*/ { */x";
        let code: String = code_tokens(Scanner::new(css)).map(|t| t.ch).collect();
        assert_eq!(code, "x");
    }

    #[test]
    fn escaped_quote_stays_in_string() {
        let css = r#""a\"{"}"#;
        let code: String = code_tokens(Scanner::new(css)).map(|t| t.ch).collect();
        assert_eq!(code, "}");
    }

    #[test]
    fn braces_in_strings_and_comments_do_not_count() {
        let balance = brace_balance("a { content: \"}}\"; /* { */ }");
        assert_eq!(balance.opening, 1);
        assert_eq!(balance.closing, 1);
        assert!(balance.is_balanced());
    }

    #[test]
    fn brace_mismatch_reports_location() {
        let css = "a { b { }";
        let balance = brace_balance(css);
        assert_eq!((balance.opening, balance.closing), (2, 1));
        assert_eq!(balance.first_unmatched, Some(2));

        let stray = brace_balance("a { } }");
        assert_eq!(stray.first_unmatched, Some(6));
    }

    #[test]
    fn finds_root_after_comment() {
        let css = "/* :root { --x: 1 } */ body { } :root /* c */ { --a: 1; }";
        let block = find_root_block(css).unwrap();
        assert_eq!(body(css, &block), " --a: 1; ");
        assert!(block.terminated);
    }

    #[test]
    fn root_body_spans_nested_blocks() {
        let css = ":root { --a: 1; @media print { x { y: z } } --b: 2; } p {}";
        let block = find_root_block(css).unwrap();
        assert_eq!(
            body(css, &block),
            " --a: 1; @media print { x { y: z } } --b: 2; "
        );
    }

    #[test]
    fn root_inside_another_rule_is_ignored() {
        assert_eq!(find_root_block("@media screen { :root { --a: 1; } }"), None);
        assert_eq!(find_root_block(":rooted { }"), None);
    }

    #[test]
    fn unterminated_root_runs_to_end() {
        let css = ":root { --a: 1;";
        let block = find_root_block(css).unwrap();
        assert!(!block.terminated);
        assert_eq!(body(css, &block), " --a: 1;");
    }

    #[test]
    fn split_keeps_nested_block_separate() {
        let css = "--a: 1; .x { b: c; } --c: 'x;y'; /* only a comment */";
        let segments = split_declarations(css, 0..css.len());
        let texts: Vec<_> = segments.iter().map(|s| s.text.trim()).collect();
        assert_eq!(texts, vec!["--a: 1", ".x { b: c; }", "--c: 'x;y'"]);
        assert!(segments[1].nested);
        assert!(!segments[2].nested);
        assert_eq!(segments[0].offset, 0);
    }

    #[test]
    fn strip_comments_keeps_strings() {
        assert_eq!(strip_comments(" #fff /* brand */ "), "#fff");
        assert_eq!(strip_comments("'/* not a comment */'"), "'/* not a comment */'");
    }

    #[test]
    fn semicolon_heuristic() {
        assert_eq!(missing_semicolon_line("a {\n  color: red;\n}"), None);
        assert_eq!(missing_semicolon_line("a {\n  color: red\n  b: c;\n}"), Some(2));
        assert_eq!(missing_semicolon_line("a:hover,\nb:focus {\n}"), None);
        assert_eq!(missing_semicolon_line("a { x: y; } /* c: d */"), None);
    }
}
