use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::MovieQuery;
use kernel::interface::update::MovieModifier;
use kernel::prelude::entity::{Movie, MovieId, MovieTitle};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresMovieRepository;

#[async_trait::async_trait]
impl MovieQuery<PostgresTransaction> for PostgresMovieRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &MovieId,
    ) -> error_stack::Result<Option<Movie>, KernelError> {
        PgMovieInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl MovieModifier<PostgresTransaction> for PostgresMovieRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        movie: &Movie,
    ) -> error_stack::Result<(), KernelError> {
        PgMovieInternal::create(con, movie).await
    }
}

#[derive(sqlx::FromRow)]
struct MovieRow {
    id: Uuid,
    title: String,
}

impl From<MovieRow> for Movie {
    fn from(value: MovieRow) -> Self {
        Movie::new(MovieId::new(value.id), MovieTitle::new(value.title))
    }
}

pub(in crate::database) struct PgMovieInternal;

impl PgMovieInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &MovieId,
    ) -> error_stack::Result<Option<Movie>, KernelError> {
        let row = sqlx::query_as::<_, MovieRow>(
            // language=postgresql
            r#"
            SELECT id, title
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Movie::from))
    }

    async fn create(con: &mut PgConnection, movie: &Movie) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO movies (id, title)
            VALUES ($1, $2)
            "#,
        )
        .bind(movie.id().as_ref())
        .bind(movie.title().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::MovieQuery;
    use kernel::interface::update::MovieModifier;
    use kernel::prelude::entity::{Movie, MovieId, MovieTitle};
    use kernel::KernelError;

    use crate::database::postgres::{PostgresDatabase, PostgresMovieRepository};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let id = MovieId::new(uuid::Uuid::new_v4());
        let movie = Movie::new(id.clone(), MovieTitle::new("Blade Runner".to_string()));
        PostgresMovieRepository.create(&mut con, &movie).await?;

        let found = PostgresMovieRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(movie));
        Ok(())
    }
}
