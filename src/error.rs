use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] figment::Error),

    #[error("leptos config error: {0}")]
    Leptos(#[from] leptos::config::errors::LeptosConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
