//! json_array_append rendering across dialects.

use pretty_assertions::assert_eq;

use crate::ast::*;
use crate::error::RenderError;
use crate::parser::parse_expr;
use crate::transpiler::{Dialect, ToSql, ToSqlParameterized};

fn render(dialect: Dialect, src: &str) -> Result<String, RenderError> {
    parse_expr(src).unwrap().to_sql_with_dialect(dialect)
}

#[test]
fn test_mariadb_composition() {
    assert_eq!(
        render(Dialect::MariaDb, "json_array_append(doc, '$.items', 42)").unwrap(),
        "json_replace(doc,'$.items',json_merge(json_extract(doc,'$.items'),json_array(42)))"
    );
}

#[test]
fn test_mariadb_quotes_identifiers_and_nests() {
    assert_eq!(
        render(
            Dialect::MariaDb,
            "json_array_append(coalesce(o.Payload, '[]'), '$.tags', lower(name))"
        )
        .unwrap(),
        "json_replace(coalesce(o.`Payload`,'[]'),'$.tags',json_merge(json_extract(coalesce(o.`Payload`,'[]'),'$.tags'),json_array(lower(name))))"
    );
}

#[test]
fn test_mariadb_parameterized_binds_each_rendering() {
    let expr = parse_expr("json_array_append(doc, '$.items', 'x')").unwrap();
    let result = expr.to_sql_parameterized_with_dialect(Dialect::MariaDb).unwrap();
    assert_eq!(
        result.sql,
        "json_replace(doc,?,json_merge(json_extract(doc,?),json_array(?)))"
    );
    assert_eq!(
        result.params,
        vec![
            Value::from("$.items"),
            Value::from("$.items"),
            Value::from("x"),
        ]
    );
}

#[test]
fn test_mysql_native() {
    assert_eq!(
        render(Dialect::MySql, "json_array_append(doc, '$.items', true)").unwrap(),
        "json_array_append(doc,'$.items',true)"
    );
}

#[test]
fn test_postgres_text_array_path() {
    assert_eq!(
        render(Dialect::Postgres, "json_array_append(doc, '$.items[0].tags', 42)").unwrap(),
        "(select case when t.d#>t.p is null then t.d \
         when jsonb_typeof(t.d#>t.p)='array' then jsonb_insert(t.d,t.p||array['-1'],to_jsonb(cast(42 as bigint)),true) \
         else jsonb_set(t.d,t.p,jsonb_build_array(t.d#>t.p,to_jsonb(cast(42 as bigint)))) end \
         from (values((doc)::jsonb,array['items','0','tags']::text[])) t(d,p))"
    );
}

fn postgres_append(value: &str) -> String {
    format!(
        "(select case when t.d#>t.p is null then t.d \
         when jsonb_typeof(t.d#>t.p)='array' then jsonb_insert(t.d,t.p||array['-1'],{value},true) \
         else jsonb_set(t.d,t.p,jsonb_build_array(t.d#>t.p,{value})) end \
         from (values((doc)::jsonb,array['tags']::text[])) t(d,p))"
    )
}

#[test]
fn test_postgres_string_value_is_typed() {
    assert_eq!(
        render(Dialect::Postgres, "json_array_append(doc, '$.tags', 'x')").unwrap(),
        postgres_append("to_jsonb(cast('x' as text))")
    );
}

#[test]
fn test_postgres_value_casts_by_literal_kind() {
    let cases = [
        ("true", "to_jsonb(cast(true as boolean))"),
        ("1.5", "to_jsonb(cast(1.5 as double precision))"),
        ("$1", "to_jsonb(cast($1 as text))"),
        ("null", "'null'::jsonb"),
        ("lower(name)", "to_jsonb(lower(name))"),
    ];
    for (value, jsonb) in cases {
        let src = format!("json_array_append(doc, '$.tags', {})", value);
        assert_eq!(render(Dialect::Postgres, &src).unwrap(), postgres_append(jsonb), "{}", value);
    }
}

#[test]
fn test_postgres_parameterized_value_is_typed() {
    let expr = parse_expr("json_array_append(doc, '$.tags', 'x')").unwrap();
    let result = expr.to_sql_parameterized().unwrap();
    assert_eq!(
        result.sql,
        "(select case when t.d#>t.p is null then t.d \
         when jsonb_typeof(t.d#>t.p)='array' then jsonb_insert(t.d,t.p||array['-1'],to_jsonb(cast($1 as text)),true) \
         else jsonb_set(t.d,t.p,jsonb_build_array(t.d#>t.p,to_jsonb(cast($2 as text)))) end \
         from (values((doc)::jsonb,array['tags']::text[])) t(d,p))"
    );
    assert_eq!(result.params, vec![Value::from("x"), Value::from("x")]);
}

#[test]
fn test_postgres_raw_document_is_parenthesized() {
    let expr = Expr::call(
        "json_array_append",
        vec![Expr::raw("a || b"), Expr::string("$.tags"), Expr::int(1)],
    );
    let sql = expr.to_sql_with_dialect(Dialect::Postgres).unwrap();
    assert!(sql.contains("from (values((a || b)::jsonb,"), "{}", sql);
}

#[test]
fn test_postgres_requires_literal_path() {
    let err = render(Dialect::Postgres, "json_array_append(doc, path_col, 42)").unwrap_err();
    assert_eq!(
        err,
        RenderError::NonLiteralPath {
            function: "json_array_append".to_string(),
            dialect: Dialect::Postgres,
        }
    );
}

#[test]
fn test_postgres_rejects_wildcard_path() {
    let err = render(Dialect::Postgres, "json_array_append(doc, '$.items[*]', 1)").unwrap_err();
    assert!(matches!(err, RenderError::InvalidJsonPath { .. }));
}

#[test]
fn test_oracle_json_transform() {
    assert_eq!(
        render(Dialect::Oracle, "json_array_append(doc, '$.items', $1)").unwrap(),
        "json_transform(doc,append '$.items'=:1 create on missing)"
    );
    assert!(render(Dialect::Oracle, "json_array_append(doc, $2, 1)").is_err());
}

#[test]
fn test_oracle_string_and_parameterized_value() {
    assert_eq!(
        render(Dialect::Oracle, "json_array_append(doc, '$.tags', 'x')").unwrap(),
        "json_transform(doc,append '$.tags'='x' create on missing)"
    );
    let expr = parse_expr("json_array_append(doc, '$.tags', 'x')").unwrap();
    let result = expr.to_sql_parameterized_with_dialect(Dialect::Oracle).unwrap();
    assert_eq!(result.sql, "json_transform(doc,append '$.tags'=:1 create on missing)");
    assert_eq!(result.params, vec![Value::from("x")]);
}

#[test]
fn test_sqlserver_json_modify() {
    assert_eq!(
        render(Dialect::SqlServer, "json_array_append(Doc, '$.items', 'x')").unwrap(),
        "json_modify([Doc],'append $.items','x')"
    );
    assert_eq!(
        render(Dialect::SqlServer, "json_array_append(doc, $1, $2)").unwrap(),
        "json_modify(doc,concat('append ',@P1),@P2)"
    );
}

#[test]
fn test_sqlite_json_insert() {
    assert_eq!(
        render(Dialect::Sqlite, "json_array_append(doc, '$.items[ 2 ]', false)").unwrap(),
        "json_insert(doc,'$.items[2][#]',0)"
    );
    assert_eq!(
        render(Dialect::Sqlite, "json_array_append(doc, p, 1)").unwrap(),
        "json_insert(doc,(p)||'[#]',1)"
    );
}

#[test]
fn test_sqlite_string_and_parameterized_value() {
    assert_eq!(
        render(Dialect::Sqlite, "json_array_append(doc, '$.tags', 'x')").unwrap(),
        "json_insert(doc,'$.tags[#]','x')"
    );
    let expr = parse_expr("json_array_append(doc, '$.tags', 'x')").unwrap();
    let result = expr.to_sql_parameterized_with_dialect(Dialect::Sqlite).unwrap();
    assert_eq!(result.sql, "json_insert(doc,'$.tags[#]',?1)");
    assert_eq!(result.params, vec![Value::from("x")]);
}

#[test]
fn test_sqlite_raw_path_is_parenthesized() {
    let expr = Expr::call(
        "json_array_append",
        vec![Expr::col("doc"), Expr::raw("'$.' || k"), Expr::int(1)],
    );
    assert_eq!(
        expr.to_sql_with_dialect(Dialect::Sqlite).unwrap(),
        "json_insert(doc,('$.' || k)||'[#]',1)"
    );
}

#[test]
fn test_operand_errors_propagate_unchanged() {
    let err = render(Dialect::MariaDb, "json_array_append(nope(doc), '$.a', 1)").unwrap_err();
    assert_eq!(
        err,
        RenderError::UnknownFunction {
            name: "nope".to_string(),
            dialect: Dialect::MariaDb,
        }
    );
}
