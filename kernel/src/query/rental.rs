use crate::database::Transaction;
use crate::entity::{Rental, RentalId, StockId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError>;

    async fn find_by_stock_id(
        &self,
        con: &mut Connection,
        stock_id: &StockId,
    ) -> error_stack::Result<Vec<Rental>, KernelError>;
}

pub trait DependOnRentalQuery<Connection: Transaction>: Sync + Send + 'static {
    type RentalQuery: RentalQuery<Connection>;
    fn rental_query(&self) -> &Self::RentalQuery;
}
