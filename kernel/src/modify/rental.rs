use crate::database::Transaction;
use crate::entity::Rental;
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRentalModifier<Connection: Transaction>: 'static + Sync + Send {
    type RentalModifier: RentalModifier<Connection>;
    fn rental_modifier(&self) -> &Self::RentalModifier;
}
