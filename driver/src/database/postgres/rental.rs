use error_stack::Report;
use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::RentalQuery;
use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{
    CustomerId, Rental, RentalId, RentalStatus, RentedAt, ReturnedAt, StockId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresRentalRepository;

#[async_trait::async_trait]
impl RentalQuery<PostgresTransaction> for PostgresRentalRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        PgRentalInternal::find_by_id(con, id).await
    }

    async fn find_by_stock_id(
        &self,
        con: &mut PostgresTransaction,
        stock_id: &StockId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        PgRentalInternal::find_by_stock_id(con, stock_id).await
    }
}

#[async_trait::async_trait]
impl RentalModifier<PostgresTransaction> for PostgresRentalRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::create(con, rental).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::update(con, rental).await
    }
}

#[derive(sqlx::FromRow)]
struct RentalRow {
    id: Uuid,
    customer_id: Uuid,
    stock_id: Uuid,
    rented_at: OffsetDateTime,
    returned_at: Option<OffsetDateTime>,
    status: String,
}

impl TryFrom<RentalRow> for Rental {
    type Error = Report<KernelError>;

    fn try_from(value: RentalRow) -> Result<Self, Self::Error> {
        let status = match value.status.as_str() {
            "Borrowed" => RentalStatus::Borrowed,
            "Returned" => RentalStatus::Returned,
            other => {
                return Err(Report::new(KernelError::Internal)
                    .attach_printable(format!("unknown rental status {other:?} in store")))
            }
        };
        Ok(Rental::new(
            RentalId::new(value.id),
            CustomerId::new(value.customer_id),
            StockId::new(value.stock_id),
            RentedAt::new(value.rented_at),
            value.returned_at.map(ReturnedAt::new),
            status,
        ))
    }
}

pub(in crate::database) struct PgRentalInternal;

impl PgRentalInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        let row = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT id, customer_id, stock_id, rented_at, returned_at, status
            FROM rentals
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Rental::try_from).transpose()
    }

    async fn find_by_stock_id(
        con: &mut PgConnection,
        stock_id: &StockId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let rows = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT id, customer_id, stock_id, rented_at, returned_at, status
            FROM rentals
            WHERE stock_id = $1
            "#,
        )
        .bind(stock_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter()
            .map(Rental::try_from)
            .collect::<Result<Vec<Rental>, Report<KernelError>>>()
    }

    async fn create(
        con: &mut PgConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO rentals (id, customer_id, stock_id, rented_at, returned_at, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(rental.id().as_ref())
        .bind(rental.customer_id().as_ref())
        .bind(rental.stock_id().as_ref())
        .bind(rental.rented_at().as_ref())
        .bind(rental.returned_at().as_ref().map(|at| at.as_ref()))
        .bind(rental.status().as_str())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    // rented_at stays as written at creation; only the return marks move.
    async fn update(
        con: &mut PgConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE rentals
            SET returned_at = $2, status = $3
            WHERE id = $1
            "#,
        )
        .bind(rental.id().as_ref())
        .bind(rental.returned_at().as_ref().map(|at| at.as_ref()))
        .bind(rental.status().as_str())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
