use crate::{handler::signup_handler, state::signup_state::SignUpState};
use axum::{routing::post, Router};

pub fn routes() -> Router<SignUpState> {
    Router::new().route("/signup", post(signup_handler::signup))
}
