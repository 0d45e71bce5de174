use crate::error::ApiError;
use crate::queries;
use crate::response::UsersBody;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list(State(state): State<AppState>) -> Result<Json<UsersBody>, ApiError> {
    let users = queries::users::select_users(&state.pool).await?;
    Ok(Json(UsersBody { users }))
}
