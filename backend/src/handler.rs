use crate::error::reject;
use crate::store::TodoStore;
use common::{
    calculate,
    messages::{AddTodoForm, DeleteResponse, IdRequest},
    CalcRequest, GameState,
};
use tracing::info;
use warp::{http::StatusCode, reply::json, Rejection, Reply};

type Result<T> = std::result::Result<T, Rejection>;

#[tracing::instrument]
pub async fn calculate_handler(form: CalcRequest) -> Result<impl Reply> {
    let result = calculate(&form).map_err(reject)?;
    info!("calculated {} {} {} = {}", form.num1, form.operation, form.num2, result);
    Ok(result)
}

#[tracing::instrument]
pub async fn move_handler(game: GameState) -> Result<impl Reply> {
    let next = game.play().map_err(reject)?;
    info!(game_over = next.game_over, winner = %next.winner, "{}", next.message);
    Ok(json(&next))
}

pub async fn new_game_handler() -> Result<impl Reply> {
    Ok(json(&GameState::new_game()))
}

pub async fn todos_handler(store: TodoStore) -> Result<impl Reply> {
    Ok(json(&store.items().await))
}

#[tracing::instrument(skip(store))]
pub async fn add_todo_handler(
    form: AddTodoForm,
    query: AddTodoForm,
    store: TodoStore,
) -> Result<impl Reply> {
    let todo = store.add(&form.title_or(query)).await.map_err(reject)?;
    info!("added todo {}", todo.id);
    Ok(json(&todo))
}

#[tracing::instrument(skip(store))]
pub async fn toggle_todo_handler(body: IdRequest, store: TodoStore) -> Result<impl Reply> {
    let todo = store.toggle(body.id).await.map_err(reject)?;
    Ok(json(&todo))
}

#[tracing::instrument(skip(store))]
pub async fn delete_todo_handler(body: IdRequest, store: TodoStore) -> Result<impl Reply> {
    store.remove(body.id).await.map_err(reject)?;
    info!("deleted todo {}", body.id);
    Ok(json(&DeleteResponse { success: true }))
}

pub async fn health_handler() -> Result<impl Reply> {
    Ok(StatusCode::OK)
}
