//! Actor repository implementation.

use sqlx::PgPool;

use kinoteka_core::error::{AppError, ErrorKind};
use kinoteka_core::result::AppResult;
use kinoteka_entity::actor::{ActorWithMovies, NewActor, UpdateActor};

/// Columns and joins shared by every actor read query. Movie titles are
/// aggregated into a text array, empty when the actor has no credits.
const SELECT_WITH_MOVIES: &str = "SELECT a.id, a.first_name, a.last_name, a.gender, \
            a.date_of_birth, \
            COALESCE(array_agg(m.title ORDER BY m.title) \
                     FILTER (WHERE m.id IS NOT NULL), '{}') AS movies \
     FROM actors a \
     LEFT JOIN movies_actors ma ON ma.actor_id = a.id \
     LEFT JOIN movies m ON m.id = ma.movie_id";

/// Identity lookup shared by the duplicate pre-check and the
/// constraint-violation path.
const FIND_BY_NAME: &str = "SELECT id FROM actors WHERE first_name = $1 AND last_name = $2";

/// Repository for actor CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ActorRepository {
    pool: PgPool,
}

impl ActorRepository {
    /// Create a new actor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new actor, returning its assigned identifier.
    ///
    /// An actor with the same first and last name is a duplicate; the
    /// conflict message carries the existing identifier. The pre-check
    /// handles the common case, and the unique constraint catches
    /// identical creates racing past it.
    pub async fn create(&self, data: &NewActor) -> AppResult<i64> {
        let existing: Option<i64> = sqlx::query_scalar(FIND_BY_NAME)
            .bind(&data.first_name)
            .bind(&data.last_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check for existing actor", e)
            })?;

        if let Some(id) = existing {
            return Err(duplicate_actor(data, id));
        }

        let inserted = sqlx::query_scalar::<_, i64>(
            "INSERT INTO actors (first_name, last_name, gender, date_of_birth) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.gender)
        .bind(data.date_of_birth)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(id) => Ok(id),
            // An identical create committed between the check and the
            // insert; re-read the winner and report it as the conflict.
            Err(sqlx::Error::Database(db_err))
                if db_err.constraint() == Some("actors_name_key") =>
            {
                let id: i64 = sqlx::query_scalar(FIND_BY_NAME)
                    .bind(&data.first_name)
                    .bind(&data.last_name)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(
                            ErrorKind::Database,
                            "Failed to check for existing actor",
                            e,
                        )
                    })?;

                Err(duplicate_actor(data, id))
            }
            Err(e) => Err(AppError::with_source(
                ErrorKind::Database,
                "Failed to create actor",
                e,
            )),
        }
    }

    /// List all actors with their aggregated movie titles.
    pub async fn find_all_with_movies(&self) -> AppResult<Vec<ActorWithMovies>> {
        let query = format!("{SELECT_WITH_MOVIES} GROUP BY a.id ORDER BY a.id");
        sqlx::query_as::<_, ActorWithMovies>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list actors", e))
    }

    /// Find a single actor with aggregated movie titles.
    pub async fn find_with_movies(&self, id: i64) -> AppResult<Option<ActorWithMovies>> {
        let query = format!("{SELECT_WITH_MOVIES} WHERE a.id = $1 GROUP BY a.id");
        sqlx::query_as::<_, ActorWithMovies>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find actor", e))
    }

    /// Apply a partial update, returning whether a row was touched.
    pub async fn update(&self, id: i64, data: &UpdateActor) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE actors SET first_name = COALESCE($2, first_name), \
                               last_name = COALESCE($3, last_name), \
                               gender = COALESCE($4, gender), \
                               date_of_birth = COALESCE($5, date_of_birth) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.gender)
        .bind(data.date_of_birth)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update actor", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an actor by ID. Movie links are removed in cascade.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete actor", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Filter the given ids down to those that exist in the catalog.
    pub async fn find_existing_ids(&self, ids: &[i64]) -> AppResult<Vec<i64>> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM actors WHERE id = ANY($1) ORDER BY id")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check actor ids", e)
            })
    }
}

/// Conflict error for an already catalogued name pair.
fn duplicate_actor(data: &NewActor, id: i64) -> AppError {
    AppError::conflict(format!(
        "Actor '{} {}' already exists with id {id}",
        data.first_name, data.last_name
    ))
}
