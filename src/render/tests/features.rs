//! Expression node coverage: functions, placeholders, CASE, lists,
//! joins, subselects, the custom-function registry, mapping ingestion.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::prelude::*;

fn raw_renderer() -> Renderer {
    Renderer::new(Dialect::Generic).escaping(false)
}

fn render(expr: &Expr) -> Result<String> {
    raw_renderer().render_expr(expr, None, &HashMap::new())
}

#[test]
fn function_call_distinct_star() {
    let expr = func_distinct("COUNT", vec![star()]);
    assert_eq!(render(&expr).unwrap(), "COUNT(DISTINCT *)");
}

#[test]
fn function_call_without_arguments() {
    assert_eq!(render(&func("NOW", vec![])).unwrap(), "NOW()");
}

#[test]
fn function_call_joins_arguments_unparenthesized() {
    let expr = func("CONCAT", vec![col("first"), text(" "), col("last")]);
    assert_eq!(render(&expr).unwrap(), "CONCAT(first, ' ', last)");
}

#[test]
fn placeholder_without_times_passes_through() {
    assert_eq!(render(&placeholder(":name")).unwrap(), ":name");
}

#[test]
fn placeholder_times_expands_numbered() {
    let expr = placeholder_times("value", "rawKey", 3);
    assert_eq!(render(&expr).unwrap(), "value0, value1, value2");
}

#[test]
fn placeholder_times_bind_counts_override() {
    let expr = placeholder_times("value", "rawKey", 3);
    let binds = HashMap::from([("rawKey".to_string(), 2)]);
    let sql = raw_renderer().render_expr(&expr, None, &binds).unwrap();
    assert_eq!(sql, "value0, value1");
}

#[test]
fn in_list_expansion_through_select() {
    let def = SelectBuilder::from_table("robots")
        .column(star())
        .filter(binary(
            col("id"),
            "IN",
            parens(placeholder_times(":id", "id", 3)),
        ))
        .bind_count("id", 2)
        .build();
    assert_eq!(
        raw_renderer().select(&def).unwrap(),
        "SELECT * FROM robots WHERE id IN (:id0, :id1)"
    );
}

#[test]
fn binary_and_unary_operators() {
    let expr = binary(col("price"), "*", lit("2"));
    assert_eq!(render(&expr).unwrap(), "price * 2");

    assert_eq!(
        render(&unary_left(col("deleted_at"), "IS NULL")).unwrap(),
        "deleted_at IS NULL"
    );
    assert_eq!(
        render(&unary_right("NOT", parens(col("active")))).unwrap(),
        "NOT (active)"
    );
}

#[test]
fn unary_without_operands_is_an_error() {
    let expr = Expr::UnaryOp {
        op: "NOT".into(),
        left: None,
        right: None,
    };
    assert_eq!(render(&expr), Err(RenderError::InvalidUnaryOperand));
}

#[test]
fn list_default_and_suppressed_parentheses() {
    assert_eq!(render(&list(vec![lit("1"), lit("2")])).unwrap(), "(1, 2)");

    let expr = Expr::List {
        value: vec![lit("1"), lit("2")],
        separator: Some(" AND ".into()),
        parentheses: Some(false),
    };
    assert_eq!(render(&expr).unwrap(), "1 AND 2");
}

#[test]
fn empty_list_is_an_error() {
    assert_eq!(
        render(&list(vec![])),
        Err(RenderError::InvalidListExpression)
    );
}

#[test]
fn scalar_variants() {
    let raw = Expr::Scalar {
        value: ScalarValue::Raw("1".into()),
    };
    assert_eq!(render(&raw).unwrap(), "1");

    let column = Expr::Scalar {
        value: ScalarValue::Column(Box::new(ColumnSpec::Name("robots.id".into()))),
    };
    assert_eq!(render(&column).unwrap(), "robots.id");

    assert_eq!(render(&scalar(binary(lit("1"), "+", lit("2")))).unwrap(), "1 + 2");
}

#[test]
fn cast_and_convert() {
    assert_eq!(render(&cast(col("price"), "INT")).unwrap(), "CAST(price AS INT)");
    assert_eq!(
        render(&convert(col("name"), "utf8")).unwrap(),
        "CONVERT(name USING utf8)"
    );
}

#[test]
fn case_clause_order_is_preserved() {
    let expr = case(col("type"))
        .when(text("mechanical"), lit("1"))
        .when(text("virtual"), lit("2"))
        .otherwise(lit("0"))
        .build();
    assert_eq!(
        render(&expr).unwrap(),
        "CASE type WHEN 'mechanical' THEN 1 WHEN 'virtual' THEN 2 ELSE 0 END"
    );
}

#[test]
fn joins_render_per_join_keyword() {
    let def = SelectBuilder::from_table("robots")
        .column(star())
        .join(
            Some(JoinKind::Left),
            "parts",
            vec![binary(
                qualified("robots", "id"),
                "=",
                qualified("parts", "robot_id"),
            )],
        )
        .join(None, "vendors", vec![])
        .build();
    assert_eq!(
        raw_renderer().select(&def).unwrap(),
        "SELECT * FROM robots LEFT JOIN parts ON robots.id = parts.robot_id \
         JOIN vendors ON 1"
    );
}

#[test]
fn join_conditions_are_and_joined() {
    let def = SelectBuilder::from_table("robots")
        .column(star())
        .join(
            Some(JoinKind::Inner),
            "parts",
            vec![
                binary(qualified("robots", "id"), "=", qualified("parts", "robot_id")),
                binary(qualified("parts", "active"), "=", lit("1")),
            ],
        )
        .build();
    assert_eq!(
        raw_renderer().select(&def).unwrap(),
        "SELECT * FROM robots INNER JOIN parts ON robots.id = parts.robot_id AND parts.active = 1"
    );
}

#[test]
fn subselect_is_parenthesized() {
    let inner = SelectBuilder::from_table("parts")
        .column("robot_id")
        .filter(binary(col("active"), "=", lit("1")))
        .build();
    let def = SelectBuilder::from_table("robots")
        .column(star())
        .filter(binary(col("id"), "IN", subselect(inner)))
        .build();
    assert_eq!(
        raw_renderer().select(&def).unwrap(),
        "SELECT * FROM robots WHERE id IN (SELECT robot_id FROM parts WHERE active = 1)"
    );
}

#[test]
fn group_having_order() {
    let def = SelectBuilder::from_table("robots")
        .column("type")
        .column(func("COUNT", vec![star()]))
        .group_by(vec![col("type")])
        .having(binary(func("COUNT", vec![star()]), ">", lit("1")))
        .order_by(col("type"), Some(OrderDirection::Asc))
        .build();
    assert_eq!(
        raw_renderer().select(&def).unwrap(),
        "SELECT type, COUNT(*) FROM robots GROUP BY type HAVING COUNT(*) > 1 ORDER BY type ASC"
    );
}

#[test]
fn raw_where_group_and_order_fragments() {
    let def = Select {
        tables: vec!["robots".into()],
        columns: vec![star().into()],
        where_clause: Some(Predicate::Raw("type <> 'virtual'".into())),
        group: Some(GroupSpec::Raw("type".into())),
        order: Some(OrderSpec::Raw("type DESC".into())),
        ..Select::default()
    };
    assert_eq!(
        raw_renderer().select(&def).unwrap(),
        "SELECT * FROM robots WHERE type <> 'virtual' GROUP BY type ORDER BY type DESC"
    );
}

#[test]
fn empty_structured_group_by_is_an_error() {
    let def = SelectBuilder::from_table("robots")
        .column(star())
        .group_by(vec![])
        .build();
    assert_eq!(
        raw_renderer().select(&def),
        Err(RenderError::InvalidGroupByExpression)
    );
}

#[test]
fn for_update_clause() {
    let def = SelectBuilder::from_table("robots")
        .column(star())
        .for_update()
        .build();
    assert_eq!(
        raw_renderer().select(&def).unwrap(),
        "SELECT * FROM robots FOR UPDATE"
    );
}

#[test]
fn custom_function_takes_precedence() {
    let mut renderer = Renderer::new(Dialect::MySQL).escaping(false);
    renderer.register_custom_function(
        "MATCH_AGAINST",
        Box::new(|r: &Renderer, call: &FunctionCall, esc: Option<char>| {
            let binds = HashMap::new();
            let cols = call
                .arguments
                .iter()
                .map(|arg| r.render_expr(arg, esc, &binds))
                .collect::<Result<Vec<_>>>()?
                .join(", ");
            Ok(format!("MATCH({}) AGAINST (?)", cols))
        }),
    );
    let expr = func("MATCH_AGAINST", vec![col("title"), col("body")]);
    let sql = renderer.render_expr(&expr, None, &HashMap::new()).unwrap();
    assert_eq!(sql, "MATCH(title, body) AGAINST (?)");
    assert!(renderer.custom_functions().contains_key("MATCH_AGAINST"));
}

#[test]
fn custom_function_failures_propagate() {
    let mut renderer = Renderer::new(Dialect::Generic);
    renderer.register_custom_function(
        "NOW",
        Box::new(|_: &Renderer, call: &FunctionCall, _: Option<char>| {
            if call.arguments.is_empty() {
                Ok("NOW()".to_string())
            } else {
                Err(RenderError::custom_function("NOW", "takes no arguments"))
            }
        }),
    );
    let expr = func("NOW", vec![col("tz")]);
    assert_eq!(
        renderer.render_expr(&expr, None, &HashMap::new()),
        Err(RenderError::custom_function("NOW", "takes no arguments"))
    );
}

#[test]
fn definition_from_mapping_form() {
    let def = Select::from_json(json!({
        "tables": [{ "Name": "robots" }],
        "columns": [{ "Name": "id" }, { "Name": "name" }],
        "limit": { "Value": { "Number": 5 } },
    }))
    .unwrap();
    assert_eq!(
        raw_renderer().select(&def).unwrap(),
        "SELECT id, name FROM robots LIMIT 5"
    );
}
