use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1, multispace0},
    combinator::{map, map_res, not, opt, peek, recognize, value},
    multi::{many0, separated_list0},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use crate::ast::{Expr, Value};

/// Deepest function-call nesting accepted before parsing fails.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parse one expression, allowing surrounding whitespace.
pub fn parse_expression(input: &str) -> IResult<&str, Expr> {
    parse_expression_at(input, 0)
}

fn parse_expression_at(input: &str, depth: usize) -> IResult<&str, Expr> {
    delimited(
        multispace0,
        alt((
            parse_raw_block,
            map(parse_param, Expr::Literal),
            map(parse_number, Expr::Literal),
            map(parse_quoted_string, |s| Expr::Literal(Value::String(s))),
            map(parse_double_quoted_string, |s| Expr::Literal(Value::String(s))),
            parse_keyword_literal,
            |i| parse_function_call(i, depth),
            map(parse_identifier, Expr::col),
        )),
        multispace0,
    )(input)
}

/// Parse an identifier (column name, optionally table-qualified).
pub fn parse_identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_' || c == '.'),
    ))(input)
}

/// Function call: name(arg1, arg2)
///
/// Fails hard with `ErrorKind::TooLarge` once calls nest deeper than
/// [`MAX_NESTING_DEPTH`].
fn parse_function_call(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, name) = parse_identifier(input)?;
    let (input, _) = preceded(multispace0, char('('))(input)?;
    if depth >= MAX_NESTING_DEPTH {
        return Err(nom::Err::Failure(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TooLarge,
        )));
    }
    let (input, args) =
        separated_list0(char(','), |i| parse_expression_at(i, depth + 1))(input)?;
    let (input, _) = preceded(multispace0, char(')'))(input)?;
    Ok((input, Expr::call(name, args)))
}

/// true / false / null, not followed by more identifier characters.
fn parse_keyword_literal(input: &str) -> IResult<&str, Expr> {
    let keyword = alt((
        value(Value::Bool(true), tag("true")),
        value(Value::Bool(false), tag("false")),
        value(Value::Null, tag("null")),
    ));
    map(
        terminated(
            keyword,
            not(peek(take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '('))),
        ),
        Expr::Literal,
    )(input)
}

/// Parameter: $1, $2, etc.
pub fn parse_param(input: &str) -> IResult<&str, Value> {
    map_res(preceded(char('$'), digit1), |n: &str| {
        n.parse::<usize>().map(Value::Param)
    })(input)
}

/// Parse a number (integer or float).
pub fn parse_number(input: &str) -> IResult<&str, Value> {
    let (input, num_str) = recognize(tuple((
        opt(char('-')),
        digit1,
        opt(pair(char('.'), digit1)),
    )))(input)?;

    let parsed = if num_str.contains('.') {
        num_str.parse::<f64>().ok().map(Value::Float)
    } else {
        num_str.parse::<i64>().ok().map(Value::Int)
    };
    match parsed {
        Some(v) => Ok((input, v)),
        None => Err(nom::Err::Error(nom::error::Error::new(
            num_str,
            nom::error::ErrorKind::Digit,
        ))),
    }
}

/// Parse a single-quoted string, with '' as an escaped quote.
pub fn parse_quoted_string(input: &str) -> IResult<&str, String> {
    let (input, parts) = delimited(
        char('\''),
        many0(alt((
            take_while1(|c| c != '\''),
            value("'", tag("''")),
        ))),
        char('\''),
    )(input)?;
    Ok((input, parts.concat()))
}

/// Parse a double-quoted string.
pub fn parse_double_quoted_string(input: &str) -> IResult<&str, String> {
    let (input, content) = delimited(char('"'), take_while(|c| c != '"'), char('"'))(input)?;
    Ok((input, content.to_string()))
}

/// Raw block: { ... } with balanced braces, emitted verbatim.
fn parse_raw_block(input: &str) -> IResult<&str, Expr> {
    let (rest, _) = char('{')(input)?;
    let mut depth = 1usize;
    for (i, c) in rest.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let body = rest[..i].trim();
                    return Ok((&rest[i + 1..], Expr::raw(body)));
                }
            }
            _ => {}
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::TakeUntil,
    )))
}
