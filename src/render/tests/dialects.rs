//! Per-dialect primitive overrides: quote chars, locking, savepoints.

use pretty_assertions::assert_eq;

use crate::prelude::*;

#[test]
fn quote_chars_per_dialect() {
    assert_eq!(
        Renderer::new(Dialect::Generic).escape("robots", None),
        "\"robots\""
    );
    assert_eq!(
        Renderer::new(Dialect::MySQL).escape("robots", None),
        "`robots`"
    );
    assert_eq!(
        Renderer::new(Dialect::Postgres).escape("robots", None),
        "\"robots\""
    );
    assert_eq!(
        Renderer::new(Dialect::SQLite).escape("robots", None),
        "\"robots\""
    );
}

#[test]
fn mysql_doubles_backticks() {
    assert_eq!(
        Renderer::new(Dialect::MySQL).escape("ro`bots", None),
        "`ro``bots`"
    );
}

#[test]
fn mysql_select_uses_backticks() {
    let def = SelectBuilder::from_table("robots")
        .columns(["id", "name"])
        .build();
    assert_eq!(
        Renderer::new(Dialect::MySQL).select(&def).unwrap(),
        "SELECT `id`, `name` FROM `robots`"
    );
}

#[test]
fn same_definition_across_dialects() {
    let def = SelectBuilder::from_table("robots")
        .column("id")
        .filter(binary(col("type"), "=", placeholder(":type")))
        .limit(5)
        .build();
    assert_eq!(
        Renderer::new(Dialect::MySQL).select(&def).unwrap(),
        "SELECT `id` FROM `robots` WHERE `type` = :type LIMIT 5"
    );
    assert_eq!(
        Renderer::new(Dialect::Postgres).select(&def).unwrap(),
        "SELECT \"id\" FROM \"robots\" WHERE \"type\" = :type LIMIT 5"
    );
}

#[test]
fn shared_lock_syntax_differs() {
    assert_eq!(
        Renderer::new(Dialect::MySQL).shared_lock("SELECT 1"),
        "SELECT 1 LOCK IN SHARE MODE"
    );
    assert_eq!(
        Renderer::new(Dialect::Postgres).shared_lock("SELECT 1"),
        "SELECT 1 FOR SHARE"
    );
}

#[test]
fn sqlite_has_no_locking_clauses() {
    let r = Renderer::new(Dialect::SQLite);
    assert_eq!(r.for_update("SELECT 1"), "SELECT 1");
    assert_eq!(r.shared_lock("SELECT 1"), "SELECT 1");

    let def = SelectBuilder::from_table("robots")
        .column(star())
        .for_update()
        .build();
    assert_eq!(r.select(&def).unwrap(), "SELECT * FROM \"robots\"");
}

#[test]
fn savepoint_statements() {
    let r = Renderer::new(Dialect::Generic);
    assert_eq!(r.savepoint("sp1"), "SAVEPOINT sp1");
    assert_eq!(r.release_savepoint("sp1"), "RELEASE SAVEPOINT sp1");
    assert_eq!(r.rollback_savepoint("sp1"), "ROLLBACK TO SAVEPOINT sp1");
}

#[test]
fn custom_generator_can_disable_quoting() {
    struct BareGenerator;
    impl SqlGenerator for BareGenerator {
        fn quote_char(&self) -> Option<char> {
            None
        }
    }
    let r = Renderer::with_generator(Box::new(BareGenerator));
    assert_eq!(r.escape("robots", None), "robots");
}
