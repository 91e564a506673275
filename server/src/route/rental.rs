mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::rental::request::{RentRequest, ReturnRequest, Transformer};
use crate::route::rental::response::{RentPresenter, ReturnPresenter};
use application::service::{RentService, ReturnService};
use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Json, Router};
use uuid::Uuid;

pub trait RentalRouter {
    fn route_rental(self) -> Self;
}

impl RentalRouter for Router<AppModule> {
    fn route_rental(self) -> Self {
        self.route(
            "/rentals",
            post(
                |State(handler): State<AppModule>, Json(req): Json<RentRequest>| async move {
                    Controller::new(Transformer, RentPresenter)
                        .intake(req)
                        .handle(|dto| async move { handler.pgpool().rent_stock(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/rentals/:id/return",
            post(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, ReturnPresenter)
                        .intake(ReturnRequest::new(id))
                        .handle(|dto| async move { handler.pgpool().return_rental(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
