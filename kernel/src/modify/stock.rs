use crate::database::Transaction;
use crate::entity::{Stock, StockId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait StockModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        stock: &Stock,
    ) -> error_stack::Result<(), KernelError>;

    /// Compare-and-set available -> unavailable. `false` means the stock was
    /// already held by a concurrent rent.
    async fn reserve(
        &self,
        con: &mut Connection,
        id: &StockId,
    ) -> error_stack::Result<bool, KernelError>;

    async fn release(
        &self,
        con: &mut Connection,
        id: &StockId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnStockModifier<Connection: Transaction>: 'static + Sync + Send {
    type StockModifier: StockModifier<Connection>;
    fn stock_modifier(&self) -> &Self::StockModifier;
}
