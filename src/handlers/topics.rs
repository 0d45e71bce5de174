use crate::error::ApiError;
use crate::queries;
use crate::response::TopicsBody;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list(State(state): State<AppState>) -> Result<Json<TopicsBody>, ApiError> {
    let topics = queries::topics::select_topics(&state.pool).await?;
    Ok(Json(TopicsBody { topics }))
}
