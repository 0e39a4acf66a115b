use crate::ast::*;
use crate::parser::parse_expr;

#[test]
fn test_json_array_append_call() {
    let expr = parse_expr("json_array_append(doc, '$.items', 42)").unwrap();
    assert_eq!(
        expr,
        Expr::call(
            "json_array_append",
            vec![Expr::col("doc"), Expr::string("$.items"), Expr::int(42)]
        )
    );
}

#[test]
fn test_nested_calls_and_qualified_columns() {
    let expr = parse_expr("json_array_append( coalesce(t.doc,'[]') , \"$.tags\", lower(name) )").unwrap();
    assert_eq!(
        expr,
        Expr::call(
            "json_array_append",
            vec![
                Expr::call("coalesce", vec![Expr::col("t.doc"), Expr::string("[]")]),
                Expr::string("$.tags"),
                Expr::call("lower", vec![Expr::col("name")]),
            ]
        )
    );
}

#[test]
fn test_empty_arg_list() {
    assert_eq!(parse_expr("json_array()").unwrap(), Expr::call("json_array", vec![]));
    assert_eq!(parse_expr("json_array( )").unwrap(), Expr::call("json_array", vec![]));
}

#[test]
fn test_trailing_input_rejected() {
    let err = parse_expr("doc extra").unwrap_err();
    assert_eq!(err.message, "unexpected trailing input");
    assert_eq!(err.remaining, "extra");
}

#[test]
fn test_unbalanced_call_rejected() {
    assert!(parse_expr("json_array(1, 2").is_err());
    assert!(parse_expr("").is_err());
}

#[test]
fn test_display_reparses() {
    let src = "json_array_append(t.doc, '$.a[0]', {now()})";
    let expr = parse_expr(src).unwrap();
    assert_eq!(parse_expr(&expr.to_string()).unwrap(), expr);
}

fn nested_lower(depth: usize) -> String {
    format!("{}doc{}", "lower(".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_nesting_up_to_limit_parses() {
    use crate::parser::tokens::MAX_NESTING_DEPTH;

    let mut expr = parse_expr(&nested_lower(MAX_NESTING_DEPTH)).unwrap();
    let mut depth = 0;
    while let Expr::Function { mut args, .. } = expr {
        depth += 1;
        expr = args.remove(0);
    }
    assert_eq!(depth, MAX_NESTING_DEPTH);
    assert_eq!(expr, Expr::col("doc"));
}

#[test]
fn test_nesting_past_limit_is_an_error() {
    use crate::parser::tokens::MAX_NESTING_DEPTH;

    let err = parse_expr(&nested_lower(MAX_NESTING_DEPTH + 1)).unwrap_err();
    assert_eq!(err.message, "function calls nested too deeply");

    // Far beyond the limit still fails cleanly instead of exhausting the stack
    let err = parse_expr(&nested_lower(5_000)).unwrap_err();
    assert_eq!(err.message, "function calls nested too deeply");
}
