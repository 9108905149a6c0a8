// src/domain/article/sort.rs

/// Columns a listing may be ordered by. This enum is the whole allow-list:
/// anything a caller names that does not map onto a variant is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    PublishedAt,
    Title,
    ViewCount,
}

impl SortField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            "published_at" => Some(Self::PublishedAt),
            "title" => Some(Self::Title),
            "view_count" => Some(Self::ViewCount),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::PublishedAt => "published_at",
            Self::Title => "title",
            Self::ViewCount => "view_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Parsed `sort` parameter, e.g. `-published_at,title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            keys: vec![SortKey::desc(SortField::CreatedAt)],
        }
    }
}

impl SortSpec {
    /// Unknown names are skipped without error. A field named twice keeps
    /// its first position. An empty result falls back to newest first.
    pub fn parse(raw: &str) -> Self {
        let mut keys: Vec<SortKey> = Vec::new();

        for part in raw.split(',') {
            let part = part.trim();
            let (name, direction) = match part.strip_prefix('-') {
                Some(rest) => (rest.trim(), SortDirection::Desc),
                None => (part, SortDirection::Asc),
            };
            let Some(field) = SortField::from_name(name) else {
                continue;
            };
            if keys.iter().any(|key| key.field == field) {
                continue;
            }
            keys.push(SortKey { field, direction });
        }

        if keys.is_empty() {
            Self::default()
        } else {
            Self { keys }
        }
    }

    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }
}
