use crate::config::Config;
use crate::store::TodoStore;
use clap::Parser;
use std::convert::Infallible;
use tracing::info;
use warp::{
    http::{header, Method},
    Filter, Rejection, Reply,
};

mod config;
mod error;
mod handler;
mod store;
mod util;

// Form and JSON bodies are tiny; anything bigger is rejected
const MAX_BODY_BYTES: u64 = 16 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "server.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store = TodoStore::load(&config.data_dir).await?;
    info!("created todo store at {}", store.path().display());

    let addr = config.addr();
    let routes = routes(&config, store);

    info!("Starting server on http://{}", addr);
    println!("Starting server on http://{}", addr);
    println!("Navigate to http://localhost:{} to get started", addr.port());

    warp::serve(routes).run(addr).await;
    Ok(())
}

fn routes(
    config: &Config,
    store: TodoStore,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health_route = warp::path!("health").and_then(handler::health_handler);

    let pages = &config.pages_dir;
    let page_routes = warp::path::end()
        .and(warp::get())
        .and(warp::fs::file(pages.join("index.html")))
        .or(warp::path!("calculator")
            .and(warp::get())
            .and(warp::fs::file(pages.join("calculator.html"))))
        .or(warp::path!("tictactoe")
            .and(warp::get())
            .and(warp::fs::file(pages.join("tictactoe.html"))))
        .or(warp::path!("todolist")
            .and(warp::get())
            .and(warp::fs::file(pages.join("todolist.html"))));

    let static_route = warp::path("static").and(warp::fs::dir(config.static_dir.clone()));

    let calculator_route = warp::path!("calculator" / "calculate")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::form())
        .and_then(handler::calculate_handler);

    let tictactoe_routes = warp::path!("tictactoe" / "api" / "move")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and_then(handler::move_handler)
        .or(warp::path!("tictactoe" / "api" / "new-game")
            .and(warp::get().or(warp::post()).unify())
            .and_then(handler::new_game_handler));

    let todo_routes = warp::path!("todolist" / "api" / "todos")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handler::todos_handler)
        .or(warp::path!("todolist" / "api" / "add")
            .and(warp::post())
            .and(warp::body::content_length_limit(MAX_BODY_BYTES))
            .and(warp::body::form())
            .and(warp::query::<common::messages::AddTodoForm>())
            .and(with_store(store.clone()))
            .and_then(handler::add_todo_handler))
        .or(warp::path!("todolist" / "api" / "toggle")
            .and(warp::post())
            .and(warp::body::content_length_limit(MAX_BODY_BYTES))
            .and(warp::body::json())
            .and(with_store(store.clone()))
            .and_then(handler::toggle_todo_handler))
        .or(warp::path!("todolist" / "api" / "delete")
            .and(warp::post())
            .and(warp::body::content_length_limit(MAX_BODY_BYTES))
            .and(warp::body::json())
            .and(with_store(store))
            .and_then(handler::delete_todo_handler));

    health_route
        .or(page_routes)
        .or(static_route)
        .or(calculator_route)
        .or(tictactoe_routes)
        .or(todo_routes)
        .recover(error::handle_rejection)
        .with(
            warp::cors()
                .allow_credentials(true)
                .allow_methods(&[Method::OPTIONS, Method::GET, Method::POST])
                .allow_headers(vec![
                    header::CONTENT_TYPE,
                    header::ACCEPT,
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                ])
                .max_age(300)
                .allow_any_origin(),
        )
        .with(warp::trace::request())
}

fn with_store(store: TodoStore) -> impl Filter<Extract = (TodoStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}
