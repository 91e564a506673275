mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::movie::request::{RentalHistoryRequest, Transformer};
use crate::route::movie::response::HistoryPresenter;
use application::service::RentalHistoryService;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;
use uuid::Uuid;

pub trait MovieRouter {
    fn route_movie(self) -> Self;
}

impl MovieRouter for Router<AppModule> {
    fn route_movie(self) -> Self {
        self.route(
            "/movies/:id/rentals",
            get(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, HistoryPresenter)
                        .intake(RentalHistoryRequest::new(id))
                        .handle(|dto| async move { handler.pgpool().rental_history(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
