use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_CATEGORY: &str = "articles_category_id_fkey";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_ARTICLE_STATUS_CHECK: &str = "articles_status_check";
const CNT_ARTICLE_TAG_ARTICLE: &str = "article_tags_article_id_fkey";
const CNT_ARTICLE_TAG_TAG: &str = "article_tags_tag_id_fkey";
const CNT_REVISION_ARTICLE: &str = "article_revisions_article_id_fkey";
const CNT_REVISION_EDITOR: &str = "article_revisions_editor_id_fkey";
const CNT_VIEW_ARTICLE: &str = "article_views_article_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                if let Some(mapped) = map_constraint(constraint) {
                    return mapped;
                }
            }

            if let Some(code) = db_err.code() {
                if let Some(mapped) = map_sqlstate(code.as_ref()) {
                    return mapped;
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> Option<DomainError> {
    let mapped = match constraint {
        CNT_ARTICLE_SLUG => DomainError::Conflict("slug already exists".into()),
        CNT_ARTICLE_CATEGORY => DomainError::NotFound("category not found".into()),
        CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
        CNT_ARTICLE_STATUS_CHECK => DomainError::Validation("invalid article status".into()),
        CNT_ARTICLE_TAG_ARTICLE | CNT_REVISION_ARTICLE | CNT_VIEW_ARTICLE => {
            DomainError::NotFound("article not found".into())
        }
        CNT_ARTICLE_TAG_TAG => DomainError::NotFound("tag not found".into()),
        CNT_REVISION_EDITOR => DomainError::NotFound("editor not found".into()),
        _ => return None,
    };
    Some(mapped)
}

fn map_sqlstate(code: &str) -> Option<DomainError> {
    match code {
        "23505" => Some(DomainError::Conflict("unique constraint violated".into())),
        "23503" => Some(DomainError::NotFound("referenced record not found".into())),
        "23514" => Some(DomainError::Validation("check constraint violated".into())),
        _ => None,
    }
}
