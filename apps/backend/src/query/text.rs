use sea_orm::sea_query::{Expr, IntoColumnRef, SimpleExpr};

/// Escape LIKE wildcards so the needle is matched literally.
pub fn escape_like(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Case-insensitive substring match: `lower(col) LIKE lower('%needle%')`.
///
/// Both sides are folded by the database's own `lower()`, so column and
/// needle agree on every backend: Postgres folds Unicode, SQLite only ASCII.
pub fn contains_ci<C: IntoColumnRef>(col: C, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(needle));
    Expr::cust_with_exprs(
        "lower($1) LIKE lower($2) ESCAPE '\\'",
        [Expr::col(col).into(), Expr::val(pattern).into()],
    )
}
