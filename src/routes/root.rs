use crate::repository::account_repository::InMemoryAccountRepository;
use crate::routes::signup;
use crate::state::signup_state::SignUpState;
use axum::routing::{get, IntoMakeService};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub fn app_router(signup_state: SignUpState) -> Router {
    let merged_router = Router::new()
        .merge(signup::routes().with_state(signup_state))
        .merge(Router::new().route("/health", get(|| async move { "Healthy..." })));

    Router::new()
        .nest("/api", merged_router)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

pub fn routes(
    account_repo: Arc<InMemoryAccountRepository>,
    bcrypt_cost: u32,
) -> IntoMakeService<Router> {
    app_router(SignUpState::new(&account_repo, bcrypt_cost)).into_make_service()
}
