use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::StockQuery;
use kernel::interface::update::StockModifier;
use kernel::prelude::entity::{MovieId, Stock, StockAvailability, StockId};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresStockRepository;

#[async_trait::async_trait]
impl StockQuery<PostgresTransaction> for PostgresStockRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &StockId,
    ) -> error_stack::Result<Option<Stock>, KernelError> {
        PgStockInternal::find_by_id(con, id).await
    }

    async fn find_by_movie_id(
        &self,
        con: &mut PostgresTransaction,
        movie_id: &MovieId,
    ) -> error_stack::Result<Vec<Stock>, KernelError> {
        PgStockInternal::find_by_movie_id(con, movie_id).await
    }
}

#[async_trait::async_trait]
impl StockModifier<PostgresTransaction> for PostgresStockRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        stock: &Stock,
    ) -> error_stack::Result<(), KernelError> {
        PgStockInternal::create(con, stock).await
    }

    async fn reserve(
        &self,
        con: &mut PostgresTransaction,
        id: &StockId,
    ) -> error_stack::Result<bool, KernelError> {
        PgStockInternal::reserve(con, id).await
    }

    async fn release(
        &self,
        con: &mut PostgresTransaction,
        id: &StockId,
    ) -> error_stack::Result<(), KernelError> {
        PgStockInternal::release(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct StockRow {
    id: Uuid,
    movie_id: Uuid,
    is_available: bool,
}

impl From<StockRow> for Stock {
    fn from(value: StockRow) -> Self {
        Stock::new(
            StockId::new(value.id),
            MovieId::new(value.movie_id),
            StockAvailability::new(value.is_available),
        )
    }
}

pub(in crate::database) struct PgStockInternal;

impl PgStockInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &StockId,
    ) -> error_stack::Result<Option<Stock>, KernelError> {
        let row = sqlx::query_as::<_, StockRow>(
            // language=postgresql
            r#"
            SELECT id, movie_id, is_available
            FROM stocks
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Stock::from))
    }

    async fn find_by_movie_id(
        con: &mut PgConnection,
        movie_id: &MovieId,
    ) -> error_stack::Result<Vec<Stock>, KernelError> {
        let rows = sqlx::query_as::<_, StockRow>(
            // language=postgresql
            r#"
            SELECT id, movie_id, is_available
            FROM stocks
            WHERE movie_id = $1
            "#,
        )
        .bind(movie_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Stock::from).collect())
    }

    async fn create(con: &mut PgConnection, stock: &Stock) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO stocks (id, movie_id, is_available)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(stock.id().as_ref())
        .bind(stock.movie_id().as_ref())
        .bind(stock.is_available().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    // Succeeds for exactly one caller when rents race on the same copy.
    async fn reserve(
        con: &mut PgConnection,
        id: &StockId,
    ) -> error_stack::Result<bool, KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE stocks
            SET is_available = FALSE
            WHERE id = $1 AND is_available = TRUE
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() == 1)
    }

    async fn release(con: &mut PgConnection, id: &StockId) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE stocks
            SET is_available = TRUE
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::StockQuery;
    use kernel::interface::update::{MovieModifier, StockModifier};
    use kernel::prelude::entity::{Movie, MovieId, MovieTitle, Stock, StockAvailability, StockId};
    use kernel::KernelError;

    use crate::database::postgres::{
        PostgresDatabase, PostgresMovieRepository, PostgresStockRepository,
    };

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let movie_id = MovieId::new(uuid::Uuid::new_v4());
        let movie = Movie::new(movie_id.clone(), MovieTitle::new("Alien".to_string()));
        PostgresMovieRepository.create(&mut con, &movie).await?;

        let stock_id = StockId::new(uuid::Uuid::new_v4());
        let stock = Stock::new(
            stock_id.clone(),
            movie_id.clone(),
            StockAvailability::new(true),
        );
        PostgresStockRepository.create(&mut con, &stock).await?;

        let reserved = PostgresStockRepository.reserve(&mut con, &stock_id).await?;
        assert!(reserved);

        // second take must lose
        let reserved = PostgresStockRepository.reserve(&mut con, &stock_id).await?;
        assert!(!reserved);

        PostgresStockRepository.release(&mut con, &stock_id).await?;
        let found = PostgresStockRepository.find_by_id(&mut con, &stock_id).await?;
        assert_eq!(found, Some(stock));

        let in_movie = PostgresStockRepository
            .find_by_movie_id(&mut con, &movie_id)
            .await?;
        assert_eq!(in_movie.len(), 1);
        Ok(())
    }
}
