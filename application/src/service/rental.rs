use error_stack::Report;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    CustomerQuery, DependOnCustomerQuery, DependOnMovieQuery, DependOnRentalQuery,
    DependOnStockQuery, MovieQuery, RentalQuery, StockQuery,
};
use kernel::interface::update::{
    DependOnRentalModifier, DependOnStockModifier, RentalModifier, StockModifier,
};
use kernel::prelude::entity::{CustomerId, MovieId, Rental, RentalId, RentedAt, ReturnedAt, StockId};
use kernel::KernelError;

use crate::transfer::{
    CreateRentalDto, GetRentalHistoryDto, RentalDto, RentalHistoryDto, ReturnRentalDto,
};

#[async_trait::async_trait]
pub trait RentService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCustomerQuery<Connection>
    + DependOnStockQuery<Connection>
    + DependOnStockModifier<Connection>
    + DependOnRentalModifier<Connection>
{
    async fn rent_stock(
        &self,
        dto: CreateRentalDto,
    ) -> error_stack::Result<RentalDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let customer_id = CustomerId::new(dto.customer_id);
        self.customer_query()
            .find_by_id(&mut connection, &customer_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("customer {} does not exist", dto.customer_id))
            })?;

        let stock_id = StockId::new(dto.stock_id);
        let stock = self
            .stock_query()
            .find_by_id(&mut connection, &stock_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("stock {} does not exist", dto.stock_id))
            })?;

        if !*stock.is_available().as_ref() {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable("selected stock is not available anymore"));
        }

        // Losing the compare-and-set means another rent claimed the copy
        // between the read above and here.
        let reserved = self
            .stock_modifier()
            .reserve(&mut connection, &stock_id)
            .await?;
        if !reserved {
            connection.roll_back().await?;
            return Err(Report::new(KernelError::Conflict)
                .attach_printable("selected stock is not available anymore"));
        }

        let rental = Rental::borrowed(
            RentalId::new(Uuid::new_v4()),
            customer_id,
            stock_id,
            RentedAt::new(OffsetDateTime::now_utc()),
        );
        self.rental_modifier()
            .create(&mut connection, &rental)
            .await?;

        connection.commit().await?;

        Ok(RentalDto::from(rental))
    }
}

impl<Connection: Transaction + Send, T> RentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnCustomerQuery<Connection>
        + DependOnStockQuery<Connection>
        + DependOnStockModifier<Connection>
        + DependOnRentalModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait ReturnService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnRentalModifier<Connection>
    + DependOnStockModifier<Connection>
{
    async fn return_rental(
        &self,
        dto: ReturnRentalDto,
    ) -> error_stack::Result<RentalDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rental_id = RentalId::new(dto.rental_id);
        let rental = self
            .rental_query()
            .find_by_id(&mut connection, &rental_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("rental {} does not exist", dto.rental_id))
            })?;

        // Returning twice is rejected rather than treated as a no-op: the
        // stock may already be held by a newer rental.
        if rental.is_returned() {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("rental {} is already returned", dto.rental_id)));
        }

        let rental = rental.into_returned(ReturnedAt::new(OffsetDateTime::now_utc()));
        self.rental_modifier()
            .update(&mut connection, &rental)
            .await?;
        self.stock_modifier()
            .release(&mut connection, rental.stock_id())
            .await?;

        connection.commit().await?;

        Ok(RentalDto::from(rental))
    }
}

impl<Connection: Transaction + Send, T> ReturnService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnRentalModifier<Connection>
        + DependOnStockModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait RentalHistoryService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnMovieQuery<Connection>
    + DependOnStockQuery<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnCustomerQuery<Connection>
{
    async fn rental_history(
        &self,
        dto: GetRentalHistoryDto,
    ) -> error_stack::Result<Vec<RentalHistoryDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let movie_id = MovieId::new(dto.movie_id);
        self.movie_query()
            .find_by_id(&mut connection, &movie_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("movie {} does not exist", dto.movie_id))
            })?;

        let stocks = self
            .stock_query()
            .find_by_movie_id(&mut connection, &movie_id)
            .await?;

        let mut history = Vec::new();
        for stock in &stocks {
            let rentals = self
                .rental_query()
                .find_by_stock_id(&mut connection, stock.id())
                .await?;
            for rental in rentals {
                let customer = self
                    .customer_query()
                    .find_name_by_id(&mut connection, rental.customer_id())
                    .await?
                    .ok_or_else(|| {
                        Report::new(KernelError::Internal)
                            .attach_printable("rental references a missing customer")
                    })?;
                history.push(RentalHistoryDto::new(rental, customer));
            }
        }

        // most recent rental first; stable for equal timestamps
        history.sort_by(|a, b| b.rented_at.cmp(&a.rented_at));

        Ok(history)
    }
}

impl<Connection: Transaction + Send, T> RentalHistoryService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnMovieQuery<Connection>
        + DependOnStockQuery<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnCustomerQuery<Connection>
{
}
