use std::ops::{Deref, DerefMut};

use error_stack::{Report, ResultExt};
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnCustomerQuery, DependOnMovieQuery, DependOnRentalQuery, DependOnStockQuery,
};
use kernel::interface::update::{
    DependOnCustomerModifier, DependOnMovieModifier, DependOnRentalModifier, DependOnStockModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{customer::*, movie::*, rental::*, stock::*};

mod customer;
mod movie;
mod rental;
mod stock;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        tracing::debug!("postgres connection pool initialized");
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> error_stack::Result<(), KernelError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .change_context_lazy(|| KernelError::Internal)?;
        Ok(())
    }
}

pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

#[async_trait::async_trait]
impl DatabaseConnection<PostgresTransaction> for PostgresDatabase {
    async fn transact(&self) -> error_stack::Result<PostgresTransaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl DependOnCustomerQuery<PostgresTransaction> for PostgresDatabase {
    type CustomerQuery = PostgresCustomerRepository;
    fn customer_query(&self) -> &Self::CustomerQuery {
        &PostgresCustomerRepository
    }
}

impl DependOnCustomerModifier<PostgresTransaction> for PostgresDatabase {
    type CustomerModifier = PostgresCustomerRepository;
    fn customer_modifier(&self) -> &Self::CustomerModifier {
        &PostgresCustomerRepository
    }
}

impl DependOnMovieQuery<PostgresTransaction> for PostgresDatabase {
    type MovieQuery = PostgresMovieRepository;
    fn movie_query(&self) -> &Self::MovieQuery {
        &PostgresMovieRepository
    }
}

impl DependOnMovieModifier<PostgresTransaction> for PostgresDatabase {
    type MovieModifier = PostgresMovieRepository;
    fn movie_modifier(&self) -> &Self::MovieModifier {
        &PostgresMovieRepository
    }
}

impl DependOnStockQuery<PostgresTransaction> for PostgresDatabase {
    type StockQuery = PostgresStockRepository;
    fn stock_query(&self) -> &Self::StockQuery {
        &PostgresStockRepository
    }
}

impl DependOnStockModifier<PostgresTransaction> for PostgresDatabase {
    type StockModifier = PostgresStockRepository;
    fn stock_modifier(&self) -> &Self::StockModifier {
        &PostgresStockRepository
    }
}

impl DependOnRentalQuery<PostgresTransaction> for PostgresDatabase {
    type RentalQuery = PostgresRentalRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &PostgresRentalRepository
    }
}

impl DependOnRentalModifier<PostgresTransaction> for PostgresDatabase {
    type RentalModifier = PostgresRentalRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &PostgresRentalRepository
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                Error::PoolTimedOut => KernelError::Timeout,
                Error::Database(e) if e.is_unique_violation() => KernelError::Conflict,
                _ => KernelError::Internal,
            };
            Report::from(error).change_context(context)
        })
    }
}
