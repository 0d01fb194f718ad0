use db::DBService;

pub mod config;
pub mod error;
pub mod http;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub db: DBService,
}
