pub mod config;
pub mod error;
pub mod model;
pub mod providers;
pub mod schema;
pub mod server;

pub use crate::config::{AppConfig, ProviderConfig};
pub use crate::error::RequestError;
pub use crate::model::{ImageResult, Recipe, RecipeStep};
pub use crate::providers::{OpenAiProvider, RecipeProvider};
pub use crate::server::{router, AppState};
