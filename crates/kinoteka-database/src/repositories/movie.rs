//! Movie repository implementation.

use sqlx::PgPool;

use kinoteka_core::error::{AppError, ErrorKind};
use kinoteka_core::result::AppResult;
use kinoteka_entity::movie::{MovieSort, MovieWithActors, NewMovie, UpdateMovie};

/// Columns and joins shared by every movie read query. Credited actor
/// names are aggregated into a text array, empty for an uncast movie.
const SELECT_WITH_ACTORS: &str = "SELECT m.id, m.title, m.description, m.release_date, m.rating, \
            COALESCE(array_agg(a.first_name || ' ' || a.last_name \
                               ORDER BY a.last_name, a.first_name) \
                     FILTER (WHERE a.id IS NOT NULL), '{}') AS actors \
     FROM movies m \
     LEFT JOIN movies_actors ma ON ma.movie_id = m.id \
     LEFT JOIN actors a ON a.id = ma.actor_id";

/// Identity lookup shared by the duplicate pre-check and the
/// constraint-violation path.
const FIND_DUPLICATE: &str = "SELECT id FROM movies \
     WHERE title = $1 AND description = $2 AND release_date = $3 AND rating = $4";

/// Repository for movie CRUD and query operations.
#[derive(Debug, Clone)]
pub struct MovieRepository {
    pool: PgPool,
}

impl MovieRepository {
    /// Create a new movie repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new movie and its actor links, returning the assigned
    /// identifier.
    ///
    /// A movie matching on title, description, release date and rating
    /// is a duplicate; the conflict message carries the existing
    /// identifier. The pre-check handles the common case, and the unique
    /// index catches identical creates racing past it. The row and its
    /// links are written in one transaction.
    pub async fn create(&self, data: &NewMovie) -> AppResult<i64> {
        let existing: Option<i64> = sqlx::query_scalar(FIND_DUPLICATE)
            .bind(&data.title)
            .bind(&data.description)
            .bind(data.release_date)
            .bind(data.rating)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check for existing movie", e)
            })?;

        if let Some(id) = existing {
            return Err(duplicate_movie(data, id));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let inserted = sqlx::query_scalar::<_, i64>(
            "INSERT INTO movies (title, description, release_date, rating) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.release_date)
        .bind(data.rating)
        .fetch_one(&mut *tx)
        .await;

        let id = match inserted {
            Ok(id) => id,
            // An identical create committed between the check and the
            // insert; re-read the winner and report it as the conflict.
            Err(sqlx::Error::Database(db_err))
                if db_err.constraint() == Some("movies_identity_key") =>
            {
                drop(tx);
                let id: i64 = sqlx::query_scalar(FIND_DUPLICATE)
                    .bind(&data.title)
                    .bind(&data.description)
                    .bind(data.release_date)
                    .bind(data.rating)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(
                            ErrorKind::Database,
                            "Failed to check for existing movie",
                            e,
                        )
                    })?;

                return Err(duplicate_movie(data, id));
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Database,
                    "Failed to create movie",
                    e,
                ));
            }
        };

        if !data.actor_ids.is_empty() {
            insert_actor_links(&mut tx, id, &data.actor_ids).await?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit movie create", e)
        })?;

        Ok(id)
    }

    /// List all movies with their aggregated actor names, in the given
    /// sort order.
    pub async fn find_all_with_actors(&self, sort: MovieSort) -> AppResult<Vec<MovieWithActors>> {
        let query = format!(
            "{SELECT_WITH_ACTORS} GROUP BY m.id ORDER BY {}",
            order_clause(sort)
        );
        sqlx::query_as::<_, MovieWithActors>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list movies", e))
    }

    /// Find a single movie with aggregated actor names.
    pub async fn find_with_actors(&self, id: i64) -> AppResult<Option<MovieWithActors>> {
        let query = format!("{SELECT_WITH_ACTORS} WHERE m.id = $1 GROUP BY m.id");
        sqlx::query_as::<_, MovieWithActors>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find movie", e))
    }

    /// Apply a partial update, returning whether a row was touched.
    ///
    /// When the patch carries `actor_ids`, the credited actor set is
    /// replaced wholesale inside the same transaction as the row update.
    pub async fn update(&self, id: i64, data: &UpdateMovie) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let result = sqlx::query(
            "UPDATE movies SET title = COALESCE($2, title), \
                               description = COALESCE($3, description), \
                               release_date = COALESCE($4, release_date), \
                               rating = COALESCE($5, rating) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.release_date)
        .bind(data.rating)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update movie", e))?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        if let Some(actor_ids) = &data.actor_ids {
            sqlx::query("DELETE FROM movies_actors WHERE movie_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to clear actor links", e)
                })?;

            if !actor_ids.is_empty() {
                insert_actor_links(&mut tx, id, actor_ids).await?;
            }
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit movie update", e)
        })?;

        Ok(true)
    }

    /// Delete a movie by ID. Actor links are removed in cascade.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete movie", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Search movies whose title contains the fragment,
    /// case-insensitively.
    pub async fn search_by_title(&self, fragment: &str) -> AppResult<Vec<MovieWithActors>> {
        let pattern = format!("%{fragment}%");
        let query = format!(
            "{SELECT_WITH_ACTORS} WHERE m.title ILIKE $1 \
             GROUP BY m.id ORDER BY m.rating DESC, m.id"
        );
        sqlx::query_as::<_, MovieWithActors>(&query)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search movies by title", e)
            })
    }

    /// Search movies credited to an actor whose full name contains the
    /// fragment, case-insensitively. The result rows still aggregate the
    /// complete cast, not just the matching actor.
    pub async fn search_by_actor(&self, fragment: &str) -> AppResult<Vec<MovieWithActors>> {
        let pattern = format!("%{fragment}%");
        let query = format!(
            "{SELECT_WITH_ACTORS} \
             WHERE m.id IN (SELECT ma2.movie_id FROM movies_actors ma2 \
                            JOIN actors a2 ON a2.id = ma2.actor_id \
                            WHERE (a2.first_name || ' ' || a2.last_name) ILIKE $1) \
             GROUP BY m.id ORDER BY m.rating DESC, m.id"
        );
        sqlx::query_as::<_, MovieWithActors>(&query)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search movies by actor", e)
            })
    }
}

/// Insert links for the given movie inside an open transaction.
async fn insert_actor_links(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    movie_id: i64,
    actor_ids: &[i64],
) -> AppResult<()> {
    sqlx::query(
        "INSERT INTO movies_actors (movie_id, actor_id) \
         SELECT $1, unnest($2::BIGINT[]) \
         ON CONFLICT DO NOTHING",
    )
    .bind(movie_id)
    .bind(actor_ids)
    .execute(&mut **tx)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to link actors", e))?;
    Ok(())
}

/// Conflict error for an already catalogued movie.
fn duplicate_movie(data: &NewMovie, id: i64) -> AppError {
    AppError::conflict(format!(
        "Movie '{}' already exists with id {id}",
        data.title
    ))
}

/// Map a sort order onto a fixed ORDER BY clause. Identifiers break
/// ties so listings are stable.
fn order_clause(sort: MovieSort) -> &'static str {
    match sort {
        MovieSort::Rating => "m.rating DESC, m.id",
        MovieSort::Title => "m.title ASC, m.id",
        MovieSort::Date => "m.release_date DESC, m.id",
    }
}
