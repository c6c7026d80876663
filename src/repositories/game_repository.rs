// src/repositories/game_repository.rs
//
// Game persistence
//
// A game spans three tables (games, game_genres, game_screenshots).
// Writes touch all of them inside a single transaction and re-read the
// stored aggregate before committing, so callers always get back exactly
// what a later `get_by_id` would return.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::ConnectionPool;
use crate::domain::{Game, GameInput, GameStatus, SearchFilter};
use crate::error::{AppError, AppResult};
use crate::repositories::game_query::{GameQuery, GAME_COLUMNS};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[cfg_attr(test, mockall::automock)]
pub trait GameRepository: Send + Sync {
    fn insert(&self, input: &GameInput, now: DateTime<Utc>) -> AppResult<Game>;
    fn update(&self, id: i64, input: &GameInput, now: DateTime<Utc>) -> AppResult<Game>;
    fn delete(&self, id: i64) -> AppResult<()>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Game>>;
    fn search(&self, filter: &SearchFilter) -> AppResult<Vec<Game>>;
    fn list_all(&self) -> AppResult<Vec<Game>>;
    fn distinct_platforms(&self) -> AppResult<Vec<String>>;
    fn distinct_franchises(&self) -> AppResult<Vec<String>>;
    fn distinct_genres(&self) -> AppResult<Vec<String>>;
}

pub struct SqliteGameRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteGameRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map a `GAME_COLUMNS` row to a Game without its genres/screenshots.
    fn row_to_game(row: &Row) -> rusqlite::Result<Game> {
        let release_date: Option<String> = row.get(4)?;
        let release_date = release_date
            .map(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(|e| conversion_error(4, e)))
            .transpose()?;

        let status: String = row.get(8)?;
        let status = status
            .parse::<GameStatus>()
            .map_err(|e| conversion_error(8, e))?;

        let created_at = parse_timestamp(14, &row.get::<_, String>(14)?)?;
        let updated_at = parse_timestamp(15, &row.get::<_, String>(15)?)?;

        Ok(Game {
            id: row.get(0)?,
            title: row.get(1)?,
            franchise: row.get(2)?,
            sequence_in_franchise: row.get(3)?,
            release_date,
            platform: row.get(5)?,
            developer: row.get(6)?,
            publisher: row.get(7)?,
            status,
            progress_percent: row.get(9)?,
            playtime_hours: row.get(10)?,
            rating: row.get(11)?,
            notes: row.get(12)?,
            cover_art_path: row.get(13)?,
            screenshots: Vec::new(),
            genres: Vec::new(),
            created_at,
            updated_at,
        })
    }

    /// Run a distinct-value query returning one text column.
    fn distinct(&self, sql: &str) -> AppResult<Vec<String>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(sql)?;
        let values = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(values)
    }
}

impl GameRepository for SqliteGameRepository {
    fn insert(&self, input: &GameInput, now: DateTime<Utc>) -> AppResult<Game> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;
        let stamp = format_timestamp(now);

        tx.execute(
            "INSERT INTO games (
                title, franchise, sequence_in_franchise, release_date, platform,
                developer, publisher, status, progress_percent, playtime_hours,
                rating, notes, cover_art_path, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                input.title,
                input.franchise,
                input.sequence_in_franchise,
                input.release_date.map(|d| d.format(DATE_FORMAT).to_string()),
                input.platform,
                input.developer,
                input.publisher,
                input.status.as_str(),
                input.progress_percent,
                input.playtime_hours,
                input.rating,
                input.notes,
                input.cover_art_path,
                stamp,
                stamp,
            ],
        )?;

        let id = tx.last_insert_rowid();
        insert_screenshots(&tx, id, &input.screenshots)?;
        insert_genres(&tx, id, input.genres.iter().map(String::as_str))?;

        let game = fetch_game(&tx, id)?.ok_or_else(|| AppError::game_not_found(id))?;
        tx.commit()?;
        Ok(game)
    }

    fn update(&self, id: i64, input: &GameInput, now: DateTime<Utc>) -> AppResult<Game> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let rows_affected = tx.execute(
            "UPDATE games SET
                title = ?1, franchise = ?2, sequence_in_franchise = ?3, release_date = ?4,
                platform = ?5, developer = ?6, publisher = ?7, status = ?8,
                progress_percent = ?9, playtime_hours = ?10, rating = ?11, notes = ?12,
                cover_art_path = ?13, updated_at = ?14
             WHERE id = ?15",
            params![
                input.title,
                input.franchise,
                input.sequence_in_franchise,
                input.release_date.map(|d| d.format(DATE_FORMAT).to_string()),
                input.platform,
                input.developer,
                input.publisher,
                input.status.as_str(),
                input.progress_percent,
                input.playtime_hours,
                input.rating,
                input.notes,
                input.cover_art_path,
                format_timestamp(now),
                id,
            ],
        )?;

        if rows_affected == 0 {
            return Err(AppError::game_not_found(id));
        }

        tx.execute("DELETE FROM game_screenshots WHERE game_id = ?1", params![id])?;
        insert_screenshots(&tx, id, &input.screenshots)?;
        replace_genres(&tx, id, &input.genres)?;

        let game = fetch_game(&tx, id)?.ok_or_else(|| AppError::game_not_found(id))?;
        tx.commit()?;
        Ok(game)
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM game_genres WHERE game_id = ?1", params![id])?;
        tx.execute("DELETE FROM game_screenshots WHERE game_id = ?1", params![id])?;
        let rows_affected = tx.execute("DELETE FROM games WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::game_not_found(id));
        }

        tx.commit()?;
        Ok(())
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Game>> {
        let conn = self.pool.get()?;
        fetch_game(&conn, id)
    }

    fn search(&self, filter: &SearchFilter) -> AppResult<Vec<Game>> {
        let conn = self.pool.get()?;
        let query = GameQuery::from_filter(filter);

        let mut stmt = conn.prepare(&query.sql())?;
        let mut games = stmt
            .query_map(query.params().as_slice(), Self::row_to_game)?
            .collect::<Result<Vec<_>, _>>()?;

        for game in &mut games {
            hydrate(&conn, game)?;
        }

        Ok(games)
    }

    fn list_all(&self) -> AppResult<Vec<Game>> {
        self.search(&SearchFilter::default())
    }

    fn distinct_platforms(&self) -> AppResult<Vec<String>> {
        self.distinct(
            "SELECT DISTINCT platform FROM games
             ORDER BY platform COLLATE NOCASE, platform",
        )
    }

    fn distinct_franchises(&self) -> AppResult<Vec<String>> {
        self.distinct(
            "SELECT DISTINCT franchise FROM games
             WHERE franchise IS NOT NULL
             ORDER BY franchise COLLATE NOCASE, franchise",
        )
    }

    fn distinct_genres(&self) -> AppResult<Vec<String>> {
        self.distinct(
            "SELECT DISTINCT genre FROM game_genres
             ORDER BY genre COLLATE NOCASE, genre",
        )
    }
}

// ============================================================================
// Row helpers (shared by reads inside and outside transactions)
// ============================================================================

fn fetch_game(conn: &Connection, id: i64) -> AppResult<Option<Game>> {
    let sql = format!("SELECT {} FROM games g WHERE g.id = ?1", GAME_COLUMNS);
    let game = conn
        .query_row(&sql, params![id], SqliteGameRepository::row_to_game)
        .optional()?;

    match game {
        Some(mut game) => {
            hydrate(conn, &mut game)?;
            Ok(Some(game))
        }
        None => Ok(None),
    }
}

fn hydrate(conn: &Connection, game: &mut Game) -> AppResult<()> {
    game.screenshots = fetch_screenshots(conn, game.id)?;
    game.genres = fetch_genres(conn, game.id)?;
    Ok(())
}

fn fetch_screenshots(conn: &Connection, game_id: i64) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare_cached(
        "SELECT path FROM game_screenshots WHERE game_id = ?1 ORDER BY position",
    )?;
    let paths = stmt
        .query_map(params![game_id], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(paths)
}

fn fetch_genres(conn: &Connection, game_id: i64) -> AppResult<Vec<String>> {
    let mut stmt =
        conn.prepare_cached("SELECT genre FROM game_genres WHERE game_id = ?1 ORDER BY genre")?;
    let genres = stmt
        .query_map(params![game_id], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(genres)
}

fn insert_screenshots(conn: &Connection, game_id: i64, paths: &[String]) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO game_screenshots (game_id, position, path) VALUES (?1, ?2, ?3)",
    )?;
    for (position, path) in paths.iter().enumerate() {
        stmt.execute(params![game_id, position as i64, path])?;
    }
    Ok(())
}

fn insert_genres<'a>(
    conn: &Connection,
    game_id: i64,
    genres: impl IntoIterator<Item = &'a str>,
) -> AppResult<()> {
    let mut stmt =
        conn.prepare_cached("INSERT OR IGNORE INTO game_genres (game_id, genre) VALUES (?1, ?2)")?;
    for genre in genres {
        stmt.execute(params![game_id, genre])?;
    }
    Ok(())
}

/// Bring the stored genre set in line with `genres`: remove what is no
/// longer wanted, then add what is new.
fn replace_genres(conn: &Connection, game_id: i64, genres: &[String]) -> AppResult<()> {
    let current: BTreeSet<String> = fetch_genres(conn, game_id)?.into_iter().collect();
    let wanted: BTreeSet<&str> = genres.iter().map(String::as_str).collect();

    let mut remove =
        conn.prepare_cached("DELETE FROM game_genres WHERE game_id = ?1 AND genre = ?2")?;
    for stale in current.iter().filter(|g| !wanted.contains(g.as_str())) {
        remove.execute(params![game_id, stale])?;
    }

    insert_genres(
        conn,
        game_id,
        wanted.into_iter().filter(|g| !current.contains(*g)),
    )
}

/// Fixed-width RFC 3339 so that text order matches time order in SQL.
fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(column: usize, value: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(column, e))
}

fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortField;
    use crate::test_support::test_pool;
    use chrono::Duration;

    fn repo() -> (tempfile::TempDir, SqliteGameRepository) {
        let (dir, pool) = test_pool();
        (dir, SqliteGameRepository::new(pool))
    }

    fn input(title: &str, platform: &str) -> GameInput {
        GameInput::new(title, platform)
    }

    fn titles(games: &[Game]) -> Vec<&str> {
        games.iter().map(|g| g.title.as_str()).collect()
    }

    #[test]
    fn test_insert_then_get_returns_same_record() {
        let (_dir, repo) = repo();
        let mut new = input("Breath of the Wild", "Switch");
        new.franchise = Some("The Legend of Zelda".into());
        new.sequence_in_franchise = Some(19);
        new.release_date = NaiveDate::from_ymd_opt(2017, 3, 3);
        new.status = GameStatus::Completed;
        new.rating = Some(9.5);
        new.genres = vec!["Adventure".into(), "Open World".into()];
        new.screenshots = vec!["z.png".into(), "a.png".into()];

        let created = repo.insert(&new, Utc::now()).unwrap();
        assert!(created.id > 0);
        assert_eq!(created.created_at, created.updated_at);

        let fetched = repo.get_by_id(created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.screenshots, vec!["z.png", "a.png"]);
        assert_eq!(fetched.genres, vec!["Adventure", "Open World"]);
        assert_eq!(fetched.release_date, NaiveDate::from_ymd_opt(2017, 3, 3));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let (_dir, repo) = repo();
        let first = repo.insert(&input("A", "PC"), Utc::now()).unwrap();
        repo.delete(first.id).unwrap();
        let second = repo.insert(&input("B", "PC"), Utc::now()).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_update_replaces_everything() {
        let (_dir, repo) = repo();
        let created_at = Utc::now();
        let mut original = input("Hades", "PC");
        original.notes = Some("roguelike".into());
        original.genres = vec!["Action".into(), "Roguelike".into()];
        original.screenshots = vec!["1.png".into(), "2.png".into()];
        let created = repo.insert(&original, created_at).unwrap();

        let mut replacement = input("Hades", "Switch");
        replacement.genres = vec!["Roguelike".into(), "Indie".into()];
        replacement.screenshots = vec!["3.png".into()];
        let updated = repo
            .update(created.id, &replacement, created_at + Duration::seconds(5))
            .unwrap();

        assert_eq!(updated.platform, "Switch");
        assert_eq!(updated.notes, None);
        assert_eq!(updated.genres, vec!["Indie", "Roguelike"]);
        assert_eq!(updated.screenshots, vec!["3.png"]);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(repo.get_by_id(created.id).unwrap().unwrap(), updated);
    }

    #[test]
    fn test_update_missing_game_is_not_found() {
        let (_dir, repo) = repo();
        let err = repo.update(99, &input("Ghost", "PC"), Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_delete_removes_children_and_second_delete_fails() {
        let (_dir, repo) = repo();
        let mut new = input("Celeste", "PC");
        new.genres = vec!["Platformer".into()];
        new.screenshots = vec!["c.png".into()];
        let game = repo.insert(&new, Utc::now()).unwrap();

        repo.delete(game.id).unwrap();
        assert!(repo.get_by_id(game.id).unwrap().is_none());
        assert!(matches!(repo.delete(game.id), Err(AppError::NotFound(_))));

        let conn = repo.pool.get().unwrap();
        let orphans: i64 = conn
            .query_row(
                "SELECT (SELECT COUNT(*) FROM game_genres) + (SELECT COUNT(*) FROM game_screenshots)",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[test]
    fn test_failed_insert_leaves_nothing_behind() {
        let (_dir, repo) = repo();
        let mut bad = input("Broken", "PC");
        bad.rating = Some(42.0);
        bad.genres = vec!["RPG".into()];

        assert!(matches!(repo.insert(&bad, Utc::now()), Err(AppError::Database(_))));
        assert!(repo.list_all().unwrap().is_empty());
        assert!(repo.distinct_genres().unwrap().is_empty());
    }

    #[test]
    fn test_search_without_predicates_returns_everything_once() {
        let (_dir, repo) = repo();
        let now = Utc::now();
        for (i, title) in ["A", "B", "C"].iter().enumerate() {
            repo.insert(&input(title, "PC"), now + Duration::seconds(i as i64))
                .unwrap();
        }

        let games = repo.search(&SearchFilter::new()).unwrap();
        assert_eq!(titles(&games), vec!["C", "B", "A"]);
        assert_eq!(repo.list_all().unwrap(), games);
    }

    #[test]
    fn test_query_matches_title_franchise_or_notes() {
        let (_dir, repo) = repo();
        let now = Utc::now();
        repo.insert(&input("Zelda II", "NES"), now).unwrap();

        let mut by_franchise = input("Link's Awakening", "Game Boy");
        by_franchise.franchise = Some("The Legend of ZELDA".into());
        repo.insert(&by_franchise, now).unwrap();

        let mut by_notes = input("Okami", "PS2");
        by_notes.notes = Some("Feels like a zelda game".into());
        repo.insert(&by_notes, now).unwrap();

        repo.insert(&input("Metroid", "NES"), now).unwrap();

        let filter = SearchFilter::new()
            .with_query("zelda")
            .sorted_by(SortField::Title, true);
        let games = repo.search(&filter).unwrap();
        assert_eq!(titles(&games), vec!["Link's Awakening", "Okami", "Zelda II"]);
    }

    #[test]
    fn test_failed_update_keeps_stored_game() {
        let (_dir, repo) = repo();
        let mut original = input("Doom", "PC");
        original.rating = Some(8.0);
        original.genres = vec!["Action".into()];
        original.screenshots = vec!["doom.png".into()];
        let stored = repo.insert(&original, Utc::now()).unwrap();

        let mut bad = input("Doom Eternal", "PS5");
        bad.rating = Some(42.0);
        bad.genres = vec!["Shooter".into(), "Horror".into()];
        bad.screenshots = vec!["eternal.png".into()];
        let err = repo
            .update(stored.id, &bad, Utc::now() + Duration::seconds(1))
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));

        let after = repo.get_by_id(stored.id).unwrap().unwrap();
        assert_eq!(after, stored);
        assert_eq!(after.genres, vec!["Action"]);
        assert_eq!(repo.distinct_genres().unwrap(), vec!["Action"]);
    }

    #[test]
    fn test_query_keeps_surrounding_spaces() {
        let (_dir, repo) = repo();
        let now = Utc::now();
        repo.insert(&input("Mariokart", "N64"), now).unwrap();
        repo.insert(&input("Mario Bros", "NES"), now).unwrap();
        repo.insert(&input("Super Mario", "NES"), now).unwrap();

        let trailing = repo.search(&SearchFilter::new().with_query("Mario ")).unwrap();
        assert_eq!(titles(&trailing), vec!["Mario Bros"]);

        let leading = repo
            .search(&SearchFilter::new().with_query(" mario").sorted_by(SortField::Title, true))
            .unwrap();
        assert_eq!(titles(&leading), vec!["Super Mario"]);

        let blank = repo.search(&SearchFilter::new().with_query("   ")).unwrap();
        assert_eq!(blank.len(), 3);
    }

    #[test]
    fn test_query_folds_non_ascii_case() {
        let (_dir, repo) = repo();
        let now = Utc::now();
        repo.insert(&input("ÉLITE DANGEROUS", "PC"), now).unwrap();
        let mut notes = input("Ōkami", "PS2");
        notes.notes = Some("Über schön".into());
        repo.insert(&notes, now).unwrap();

        let elite = repo.search(&SearchFilter::new().with_query("élite")).unwrap();
        assert_eq!(titles(&elite), vec!["ÉLITE DANGEROUS"]);

        let okami = repo.search(&SearchFilter::new().with_query("ōKAMI")).unwrap();
        assert_eq!(titles(&okami), vec!["Ōkami"]);

        let by_notes = repo.search(&SearchFilter::new().with_query("ÜBER")).unwrap();
        assert_eq!(titles(&by_notes), vec!["Ōkami"]);
    }

    #[test]
    fn test_query_wildcards_match_literally() {
        let (_dir, repo) = repo();
        let now = Utc::now();
        repo.insert(&input("100% Orange Juice", "PC"), now).unwrap();
        repo.insert(&input("1000 Years", "PC"), now).unwrap();

        let games = repo.search(&SearchFilter::new().with_query("100%")).unwrap();
        assert_eq!(titles(&games), vec!["100% Orange Juice"]);

        let games = repo.search(&SearchFilter::new().with_query("_")).unwrap();
        assert!(games.is_empty());
    }

    #[test]
    fn test_combined_predicates() {
        let (_dir, repo) = repo();
        let now = Utc::now();
        let mut a = input("Mario Odyssey", "Switch");
        a.status = GameStatus::Completed;
        let mut b = input("Mario Galaxy", "Wii");
        b.status = GameStatus::Completed;
        let mut c = input("Mario Kart", "Switch");
        c.status = GameStatus::Playing;
        for g in [&a, &b, &c] {
            repo.insert(g, now).unwrap();
        }

        let filter = SearchFilter::new()
            .with_status(GameStatus::Completed)
            .with_platform("Switch");
        assert_eq!(titles(&repo.search(&filter).unwrap()), vec!["Mario Odyssey"]);
    }

    #[test]
    fn test_genre_franchise_and_min_rating_filters() {
        let (_dir, repo) = repo();
        let now = Utc::now();
        let mut a = input("Persona 5", "PS4");
        a.franchise = Some("Persona".into());
        a.genres = vec!["RPG".into()];
        a.rating = Some(9.0);
        let mut b = input("Persona 4", "PS2");
        b.franchise = Some("Persona".into());
        b.genres = vec!["RPG".into(), "Visual Novel".into()];
        b.rating = Some(7.5);
        let mut c = input("Persona Q", "3DS");
        c.franchise = Some("Persona Spin-offs".into());
        c.genres = vec!["Dungeon Crawler".into()];
        for g in [&a, &b, &c] {
            repo.insert(g, now).unwrap();
        }

        let by_genre = SearchFilter::new()
            .with_genre("Visual Novel")
            .sorted_by(SortField::Title, true);
        assert_eq!(titles(&repo.search(&by_genre).unwrap()), vec!["Persona 4"]);

        let by_franchise = SearchFilter::new()
            .with_franchise("Persona")
            .sorted_by(SortField::Title, true);
        assert_eq!(
            titles(&repo.search(&by_franchise).unwrap()),
            vec!["Persona 4", "Persona 5"]
        );

        let by_rating = SearchFilter::new().with_min_rating(8.0);
        assert_eq!(titles(&repo.search(&by_rating).unwrap()), vec!["Persona 5"]);
    }

    #[test]
    fn test_missing_sort_values_go_last_in_both_directions() {
        let (_dir, repo) = repo();
        let now = Utc::now();
        let mut rated_low = input("Low", "PC");
        rated_low.rating = Some(3.0);
        let unrated = input("Unrated", "PC");
        let mut rated_high = input("High", "PC");
        rated_high.rating = Some(8.0);
        for g in [&unrated, &rated_high, &rated_low] {
            repo.insert(g, now).unwrap();
        }

        let asc = repo
            .search(&SearchFilter::new().sorted_by(SortField::Rating, true))
            .unwrap();
        assert_eq!(titles(&asc), vec!["Low", "High", "Unrated"]);

        let desc = repo
            .search(&SearchFilter::new().sorted_by(SortField::Rating, false))
            .unwrap();
        assert_eq!(titles(&desc), vec!["High", "Low", "Unrated"]);
    }

    #[test]
    fn test_equal_sort_keys_fall_back_to_id() {
        let (_dir, repo) = repo();
        let now = Utc::now();
        let mut ids = Vec::new();
        for title in ["First", "Second", "Third"] {
            let mut g = input(title, "PC");
            g.rating = Some(5.0);
            ids.push(repo.insert(&g, now).unwrap().id);
        }

        for ascending in [true, false] {
            let games = repo
                .search(&SearchFilter::new().sorted_by(SortField::Rating, ascending))
                .unwrap();
            let found: Vec<i64> = games.iter().map(|g| g.id).collect();
            assert_eq!(found, ids);
        }
    }

    #[test]
    fn test_sort_by_sequence_in_franchise() {
        let (_dir, repo) = repo();
        let now = Utc::now();
        for (title, seq) in [("Dark Souls III", 3), ("Dark Souls", 1), ("Dark Souls II", 2)] {
            let mut g = input(title, "PC");
            g.franchise = Some("Dark Souls".into());
            g.sequence_in_franchise = Some(seq);
            repo.insert(&g, now).unwrap();
        }

        let filter = SearchFilter::new().sorted_by(SortField::SequenceInFranchise, true);
        assert_eq!(
            titles(&repo.search(&filter).unwrap()),
            vec!["Dark Souls", "Dark Souls II", "Dark Souls III"]
        );
    }

    #[test]
    fn test_distinct_values_are_sorted() {
        let (_dir, repo) = repo();
        let now = Utc::now();
        let mut a = input("A", "Switch");
        a.franchise = Some("Zelda".into());
        a.genres = vec!["rpg".into(), "Action".into()];
        let mut b = input("B", "pc");
        b.genres = vec!["Action".into()];
        let mut c = input("C", "Switch");
        c.franchise = Some("Metroid".into());
        for g in [&a, &b, &c] {
            repo.insert(g, now).unwrap();
        }

        assert_eq!(repo.distinct_platforms().unwrap(), vec!["pc", "Switch"]);
        assert_eq!(repo.distinct_franchises().unwrap(), vec!["Metroid", "Zelda"]);
        assert_eq!(repo.distinct_genres().unwrap(), vec!["Action", "rpg"]);
    }

    #[test]
    fn test_timestamps_are_fixed_width() {
        let ts = DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(ts), "2024-01-02T03:04:05.000000Z");
    }
}
