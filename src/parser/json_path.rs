//! JSON path literals (`$.items[0]."odd key"`).
//!
//! Only the member/index subset shared by every supported database is
//! accepted; wildcards, filters and recursive descent are rejected.

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1, multispace0},
    combinator::{map, map_res},
    multi::many0,
    sequence::{delimited, preceded},
    IResult,
};

use crate::error::RenderError;

/// One step of a JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonPathSegment {
    /// `.key` or `."key"`
    Key(String),
    /// `[n]`
    Index(usize),
}

/// Parse a JSON path literal into its segments.
///
/// `$` alone yields no segments (the document root).
pub fn parse_json_path(path: &str) -> Result<Vec<JsonPathSegment>, RenderError> {
    let invalid = |reason: &str| RenderError::InvalidJsonPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    let body = path
        .trim()
        .strip_prefix('$')
        .ok_or_else(|| invalid("path must start with '$'"))?;

    match many0(parse_segment)(body) {
        Ok(("", segments)) => Ok(segments),
        Ok((rest, _)) if is_wildcard(rest) => Err(invalid("wildcards are not supported")),
        Ok((rest, _)) => Err(invalid(&format!("unexpected input at '{}'", rest))),
        Err(_) => Err(invalid("malformed path")),
    }
}

/// `.*` or `[*]` where the next segment should start.
fn is_wildcard(rest: &str) -> bool {
    rest.strip_prefix('.')
        .or_else(|| rest.strip_prefix('['))
        .is_some_and(|r| r.trim_start().starts_with('*'))
}

fn parse_segment(input: &str) -> IResult<&str, JsonPathSegment> {
    alt((parse_member, parse_index))(input)
}

fn parse_member(input: &str) -> IResult<&str, JsonPathSegment> {
    preceded(
        char('.'),
        alt((
            map(delimited(char('"'), take_while(|c| c != '"'), char('"')), |s: &str| {
                JsonPathSegment::Key(s.to_string())
            }),
            map(
                take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '$'),
                |s: &str| JsonPathSegment::Key(s.to_string()),
            ),
        )),
    )(input)
}

fn parse_index(input: &str) -> IResult<&str, JsonPathSegment> {
    delimited(
        char('['),
        delimited(
            multispace0,
            map_res(digit1, |n: &str| n.parse::<usize>().map(JsonPathSegment::Index)),
            multispace0,
        ),
        char(']'),
    )(input)
}

/// Render segments back to path text.
pub fn to_path_string(segments: &[JsonPathSegment]) -> String {
    let mut path = String::from("$");
    for segment in segments {
        match segment {
            JsonPathSegment::Key(key)
                if !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '_') =>
            {
                path.push('.');
                path.push_str(key);
            }
            JsonPathSegment::Key(key) => {
                path.push_str(".\"");
                path.push_str(key);
                path.push('"');
            }
            JsonPathSegment::Index(idx) => {
                path.push('[');
                path.push_str(&idx.to_string());
                path.push(']');
            }
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use JsonPathSegment::*;

    #[test]
    fn test_root() {
        assert!(parse_json_path("$").unwrap().is_empty());
    }

    #[test]
    fn test_members_and_indexes() {
        assert_eq!(
            parse_json_path("$.items[0].name").unwrap(),
            vec![Key("items".into()), Index(0), Key("name".into())]
        );
        assert_eq!(
            parse_json_path("$.\"odd key\"[ 12 ]").unwrap(),
            vec![Key("odd key".into()), Index(12)]
        );
    }

    #[test]
    fn test_rejects_wildcards_and_garbage() {
        assert!(matches!(
            parse_json_path("$.items[*]"),
            Err(RenderError::InvalidJsonPath { .. })
        ));
        assert_eq!(
            parse_json_path("$.*").unwrap_err(),
            RenderError::InvalidJsonPath {
                path: "$.*".to_string(),
                reason: "wildcards are not supported".to_string(),
            }
        );
        assert!(parse_json_path("items").is_err());
        assert!(parse_json_path("$.items[").is_err());
        assert!(parse_json_path("$..items").is_err());
    }

    #[test]
    fn test_quoted_key_may_contain_asterisk() {
        assert_eq!(parse_json_path("$.\"a*b\"").unwrap(), vec![Key("a*b".into())]);
        assert_eq!(
            to_path_string(&parse_json_path("$.\"a*b\"[1]").unwrap()),
            "$.\"a*b\"[1]"
        );
    }

    #[test]
    fn test_to_path_string() {
        let segments = parse_json_path("$.a.\"b c\"[3]").unwrap();
        assert_eq!(to_path_string(&segments), "$.a.\"b c\"[3]");
    }
}
