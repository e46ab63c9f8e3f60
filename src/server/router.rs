use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        booking::*, employee::*, hostel::*, payment::*, room::*, student::*, transaction::*,
    },
    state::AppState,
};

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(info(
    title = "Hostel API",
    description = "Hostels, rooms, students, employees, bookings and payments"
))]
struct ApiDoc;

/// Builds every API route along with the OpenAPI document route.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(create_hostel))
        .routes(routes!(get_hostel_details))
        .routes(routes!(get_hostel_students))
        .routes(routes!(create_employee))
        .routes(routes!(get_employee))
        .routes(routes!(list_employees))
        .routes(routes!(create_room))
        .routes(routes!(get_vacant_rooms))
        .routes(routes!(create_student))
        .routes(routes!(create_booking))
        .routes(routes!(get_booking, update_booking))
        .routes(routes!(create_payment))
        .routes(routes!(get_payment))
        .routes(routes!(create_transaction))
        .routes(routes!(get_transaction))
        .split_for_parts();

    router.route(
        OPENAPI_PATH,
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}

/// Binds the state and the HTTP middleware to the API routes.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
