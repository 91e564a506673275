use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::CustomerQuery;
use kernel::interface::update::CustomerModifier;
use kernel::prelude::entity::{Customer, CustomerId, CustomerName};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresCustomerRepository;

#[async_trait::async_trait]
impl CustomerQuery<PostgresTransaction> for PostgresCustomerRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        PgCustomerInternal::find_by_id(con, id).await
    }

    async fn find_name_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &CustomerId,
    ) -> error_stack::Result<Option<CustomerName>, KernelError> {
        PgCustomerInternal::find_name_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl CustomerModifier<PostgresTransaction> for PostgresCustomerRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        customer: &Customer,
    ) -> error_stack::Result<(), KernelError> {
        PgCustomerInternal::create(con, customer).await
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: Uuid,
    name: String,
}

impl From<CustomerRow> for Customer {
    fn from(value: CustomerRow) -> Self {
        Customer::new(CustomerId::new(value.id), CustomerName::new(value.name))
    }
}

pub(in crate::database) struct PgCustomerInternal;

impl PgCustomerInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Customer::from))
    }

    async fn find_name_by_id(
        con: &mut PgConnection,
        id: &CustomerId,
    ) -> error_stack::Result<Option<CustomerName>, KernelError> {
        let name = sqlx::query_scalar::<_, String>(
            // language=postgresql
            r#"
            SELECT name
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(name.map(CustomerName::new))
    }

    async fn create(
        con: &mut PgConnection,
        customer: &Customer,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO customers (id, name)
            VALUES ($1, $2)
            "#,
        )
        .bind(customer.id().as_ref())
        .bind(customer.name().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::CustomerQuery;
    use kernel::interface::update::CustomerModifier;
    use kernel::prelude::entity::{Customer, CustomerId, CustomerName};
    use kernel::KernelError;

    use crate::database::postgres::{PostgresCustomerRepository, PostgresDatabase};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let id = CustomerId::new(uuid::Uuid::new_v4());
        let customer = Customer::new(id.clone(), CustomerName::new("Max Renard".to_string()));
        PostgresCustomerRepository.create(&mut con, &customer).await?;

        let found = PostgresCustomerRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(customer.clone()));

        let name = PostgresCustomerRepository
            .find_name_by_id(&mut con, &id)
            .await?;
        assert_eq!(name, Some(CustomerName::new("Max Renard".to_string())));
        Ok(())
    }
}
