use winnow::combinator::{alt, delimited, repeat};
use winnow::token::{any, literal, none_of, take_while};
use winnow::{ModalResult, Parser};

/// A piece of a CLDR date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    /// Run of a pattern letter, e.g. `MMMM` is `Field { symbol: 'M', width: 4 }`
    Field { symbol: char, width: usize },
    /// Text copied to the output as-is
    Literal(String),
}

/// Parse a CLDR date pattern into tokens
///
/// ASCII letters are field symbols; text between single quotes is literal,
/// and `''` is an escaped quote.
///
/// # Examples
/// ```
/// use locale_format::parser::{parse_date_pattern, PatternToken};
///
/// let tokens = parse_date_pattern("d 'de' MMMM").unwrap();
/// assert_eq!(tokens[2], PatternToken::Literal("de".to_string()));
/// ```
pub fn parse_date_pattern(pattern: &str) -> Result<Vec<PatternToken>, String> {
    let tokens: Vec<PatternToken> = repeat(0.., pattern_token)
        .parse(pattern)
        .map_err(|e| format!("Parse error in date pattern '{pattern}': {e}"))?;

    // Merge adjacent literals so callers see one separator between fields
    let mut merged: Vec<PatternToken> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match (merged.last_mut(), token) {
            (Some(PatternToken::Literal(prev)), PatternToken::Literal(text)) => {
                prev.push_str(&text)
            }
            (_, token) => merged.push(token),
        }
    }

    Ok(merged)
}

fn pattern_token(input: &mut &str) -> ModalResult<PatternToken> {
    alt((field, escaped_quote, quoted_text, plain_text)).parse_next(input)
}

fn field(input: &mut &str) -> ModalResult<PatternToken> {
    let symbol = any
        .verify(|c: &char| c.is_ascii_alphabetic())
        .parse_next(input)?;
    let rest = take_while(0.., symbol).parse_next(input)?;
    Ok(PatternToken::Field {
        symbol,
        width: 1 + rest.len(),
    })
}

fn escaped_quote(input: &mut &str) -> ModalResult<PatternToken> {
    literal("''")
        .value(PatternToken::Literal("'".to_string()))
        .parse_next(input)
}

fn quoted_text(input: &mut &str) -> ModalResult<PatternToken> {
    let content = repeat(0.., alt((literal("''").value('\''), none_of(['\'']))))
        .map(|chars: Vec<char>| chars.into_iter().collect::<String>());

    delimited('\'', content, '\'')
        .map(PatternToken::Literal)
        .parse_next(input)
}

fn plain_text(input: &mut &str) -> ModalResult<PatternToken> {
    take_while(1.., |c: char| !c.is_ascii_alphabetic() && c != '\'')
        .map(|text: &str| PatternToken::Literal(text.to_string()))
        .parse_next(input)
}
