// src/repositories/game_query.rs
//
// Translates a SearchFilter into a parameterized SELECT over `games`.
//
// Predicates are appended as SQL fragments with numbered placeholders;
// the values travel separately as bound parameters. Column names and sort
// direction come only from closed enums.

use rusqlite::ToSql;

use crate::domain::{SearchFilter, SortDirection, SortField};

/// Column list shared by every query that materializes a `Game` row.
/// `SqliteGameRepository::row_to_game` reads these by position.
pub const GAME_COLUMNS: &str = "g.id, g.title, g.franchise, g.sequence_in_franchise, \
     g.release_date, g.platform, g.developer, g.publisher, g.status, \
     g.progress_percent, g.playtime_hours, g.rating, g.notes, g.cover_art_path, \
     g.created_at, g.updated_at";

pub struct GameQuery {
    conditions: Vec<String>,
    params: Vec<Box<dyn ToSql>>,
    order_by: String,
}

impl GameQuery {
    pub fn from_filter(filter: &SearchFilter) -> Self {
        let mut query = Self {
            conditions: Vec::new(),
            params: Vec::new(),
            order_by: order_clause(filter.sort_field(), filter.sort_direction()),
        };

        // matched as typed; only an all-whitespace query is ignored
        if let Some(text) = filter.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let p = query.bind(format!("%{}%", escape_like(&text.to_lowercase())));
            query.conditions.push(format!(
                "(fold(g.title) LIKE {p} ESCAPE '\\' OR fold(g.franchise) LIKE {p} ESCAPE '\\' \
                 OR fold(g.notes) LIKE {p} ESCAPE '\\')"
            ));
        }
        if let Some(status) = filter.status {
            let p = query.bind(status.as_str().to_string());
            query.conditions.push(format!("g.status = {p}"));
        }
        if let Some(platform) = non_blank(filter.platform.as_deref()) {
            let p = query.bind(platform.to_string());
            query.conditions.push(format!("g.platform = {p}"));
        }
        if let Some(franchise) = non_blank(filter.franchise.as_deref()) {
            let p = query.bind(franchise.to_string());
            query.conditions.push(format!("g.franchise = {p}"));
        }
        if let Some(genre) = non_blank(filter.genre.as_deref()) {
            let p = query.bind(genre.to_string());
            query.conditions.push(format!(
                "EXISTS (SELECT 1 FROM game_genres gg WHERE gg.game_id = g.id AND gg.genre = {p})"
            ));
        }
        if let Some(min_rating) = filter.min_rating {
            let p = query.bind(min_rating);
            query.conditions.push(format!("g.rating >= {p}"));
        }

        query
    }

    /// Full SELECT statement.
    pub fn sql(&self) -> String {
        let mut sql = format!("SELECT {} FROM games g", GAME_COLUMNS);
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        sql.push(' ');
        sql.push_str(&self.order_by);
        sql
    }

    pub fn params(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }

    /// Store a value and return its placeholder.
    fn bind<T: ToSql + 'static>(&mut self, value: T) -> String {
        self.params.push(Box::new(value));
        format!("?{}", self.params.len())
    }
}

/// NULLs go last in both directions; id breaks ties.
fn order_clause(field: SortField, direction: SortDirection) -> String {
    let (column, expr) = match field {
        SortField::Title => ("g.title", "g.title COLLATE NOCASE"),
        SortField::ReleaseDate => ("g.release_date", "g.release_date"),
        SortField::Rating => ("g.rating", "g.rating"),
        SortField::PlaytimeHours => ("g.playtime_hours", "g.playtime_hours"),
        SortField::ProgressPercent => ("g.progress_percent", "g.progress_percent"),
        SortField::UpdatedAt => ("g.updated_at", "g.updated_at"),
        SortField::SequenceInFranchise => ("g.sequence_in_franchise", "g.sequence_in_franchise"),
    };
    let dir = match direction {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
    };
    format!("ORDER BY ({column} IS NULL) ASC, {expr} {dir}, g.id ASC")
}

/// Make `%`, `_` and `\` match literally under `ESCAPE '\'`.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
