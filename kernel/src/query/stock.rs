use crate::database::Transaction;
use crate::entity::{MovieId, Stock, StockId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait StockQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &StockId,
    ) -> error_stack::Result<Option<Stock>, KernelError>;

    async fn find_by_movie_id(
        &self,
        con: &mut Connection,
        movie_id: &MovieId,
    ) -> error_stack::Result<Vec<Stock>, KernelError>;
}

pub trait DependOnStockQuery<Connection: Transaction>: Sync + Send + 'static {
    type StockQuery: StockQuery<Connection>;
    fn stock_query(&self) -> &Self::StockQuery;
}
