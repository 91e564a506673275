use crate::database::Transaction;
use crate::entity::Movie;
use crate::KernelError;

#[async_trait::async_trait]
pub trait MovieModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        movie: &Movie,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnMovieModifier<Connection: Transaction>: 'static + Sync + Send {
    type MovieModifier: MovieModifier<Connection>;
    fn movie_modifier(&self) -> &Self::MovieModifier;
}
