use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;
use crate::views::board::BoardCard;
use crate::views::render;

#[derive(Template)]
#[template(path = "portal/index.html")]
struct PortalTemplate {
    cards: Vec<BoardCard>,
}

#[derive(Template)]
#[template(path = "portal/board.html")]
struct BoardTemplate {
    cards: Vec<BoardCard>,
}

pub async fn index(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let cards = load_cards(&state).await?;
    render(&PortalTemplate { cards })
}

pub async fn board_partial(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let cards = load_cards(&state).await?;
    render(&BoardTemplate { cards })
}

async fn load_cards(state: &SharedState) -> Result<Vec<BoardCard>, AppError> {
    let requests = db::service_requests::list(&state.pool, None)
        .await
        .map_err(AppError::store("Failed to fetch service requests"))?;
    Ok(requests.iter().map(BoardCard::from).collect())
}
