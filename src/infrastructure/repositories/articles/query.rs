// src/infrastructure/repositories/articles/query.rs
//! SQL composition for article listings. Column names only ever come from
//! the constants and allow-listed enums in this module; every caller value
//! reaches Postgres as a bound parameter.
use crate::domain::article::{
    ArticleId, ArticlePredicate, ArticleStatus, PageRequest, SortField, SortSpec,
};
use sqlx::{Postgres, QueryBuilder};

pub(crate) const ARTICLE_COLUMNS: &str = "a.id, a.title, a.slug, a.summary, a.body, \
     a.featured_image, a.author_id, a.category_id, a.status, a.view_count, a.featured, \
     a.scheduled_at, a.published_at, a.created_at, a.updated_at";

/// Page query: `SELECT … WHERE … ORDER BY … LIMIT … OFFSET …`.
pub(crate) fn select_page(
    predicates: &[ArticlePredicate],
    sort: &SortSpec,
    page: PageRequest,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a"));
    push_where(&mut builder, predicates);
    push_order_by(&mut builder, sort);
    builder.push(" LIMIT ");
    builder.push_bind(page.limit());
    builder.push(" OFFSET ");
    builder.push_bind(page.offset());
    builder
}

/// Count query sharing the page query's WHERE clause.
pub(crate) fn select_count(predicates: &[ArticlePredicate]) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM articles a");
    push_where(&mut builder, predicates);
    builder
}

/// Published articles sharing a category or a tag with `id`. Rows come from
/// a single scan of `articles`, so an article matching both ways appears once.
pub(crate) fn select_related(id: ArticleId, limit: u32) -> QueryBuilder<'static, Postgres> {
    let id = i64::from(id);
    let mut builder = QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a"));
    builder.push(" WHERE a.id <> ");
    builder.push_bind(id);
    builder.push(" AND a.status = ");
    builder.push_bind(ArticleStatus::Published.as_str());
    builder.push(" AND (a.category_id = (SELECT src.category_id FROM articles src WHERE src.id = ");
    builder.push_bind(id);
    builder.push(
        ") OR EXISTS (SELECT 1 FROM article_tags mine \
         JOIN article_tags theirs ON theirs.tag_id = mine.tag_id \
         WHERE theirs.article_id = a.id AND mine.article_id = ",
    );
    builder.push_bind(id);
    builder.push("))");
    builder.push(" ORDER BY a.published_at DESC NULLS LAST, a.id DESC LIMIT ");
    builder.push_bind(i64::from(limit));
    builder
}

pub(crate) fn push_where(builder: &mut QueryBuilder<'_, Postgres>, predicates: &[ArticlePredicate]) {
    for (index, predicate) in predicates.iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        push_predicate(builder, predicate);
    }
}

fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, predicate: &ArticlePredicate) {
    match predicate {
        ArticlePredicate::CategoryEquals(id) => {
            builder.push("a.category_id = ");
            builder.push_bind(i64::from(*id));
        }
        ArticlePredicate::CategorySlug(slug) => {
            builder.push("a.category_id = (SELECT c.id FROM categories c WHERE c.slug = ");
            builder.push_bind(slug.clone());
            builder.push(")");
        }
        ArticlePredicate::AuthorEquals(id) => {
            builder.push("a.author_id = ");
            builder.push_bind(i64::from(*id));
        }
        ArticlePredicate::StatusEquals(status) => {
            builder.push("a.status = ");
            builder.push_bind(status.as_str());
        }
        ArticlePredicate::Featured(featured) => {
            builder.push("a.featured = ");
            builder.push_bind(*featured);
        }
        ArticlePredicate::PublishedFrom(from) => {
            builder.push("a.published_at >= ");
            builder.push_bind(*from);
        }
        ArticlePredicate::PublishedTo(to) => {
            builder.push("a.published_at <= ");
            builder.push_bind(*to);
        }
        ArticlePredicate::TextContains(text) => {
            let pattern = format!("%{}%", escape_like(text));
            builder.push("(a.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.body ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
        ArticlePredicate::TagSlug(slug) => {
            builder.push(
                "a.id IN (SELECT art.article_id FROM article_tags art \
                 JOIN tags t ON t.id = art.tag_id WHERE t.slug = ",
            );
            builder.push_bind(slug.clone());
            builder.push(")");
        }
        ArticlePredicate::TagIn(slugs) => {
            builder.push(
                "a.id IN (SELECT art.article_id FROM article_tags art \
                 JOIN tags t ON t.id = art.tag_id WHERE t.slug = ANY(",
            );
            builder.push_bind(slugs.clone());
            builder.push("))");
        }
    }
}

/// `ORDER BY` from the allow-listed keys, with `id DESC` as the final
/// tie-breaker so that offset pages never overlap.
pub(crate) fn push_order_by(builder: &mut QueryBuilder<'_, Postgres>, sort: &SortSpec) {
    builder.push(" ORDER BY ");
    for key in sort.keys() {
        builder.push("a.");
        builder.push(key.field.column());
        builder.push(" ");
        builder.push(key.direction.keyword());
        if key.field == SortField::PublishedAt {
            builder.push(" NULLS LAST");
        }
        builder.push(", ");
    }
    builder.push("a.id DESC");
}

/// Escapes `ILIKE` wildcards so search text matches literally.
pub(crate) fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
