use crate::config::ConfigError;
use crate::input::InputError;
use crate::model::StatsError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("{context}: {source}")]
    Stats {
        context: String,
        source: StatsError,
    },
    #[error("cannot write report {}: {source}", .path.display())]
    Output {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("no evaluation files ending with {ending:?} in {}", .dir.display())]
    NoEvalFiles {
        dir: std::path::PathBuf,
        ending: String,
    },
}

impl AppError {
    pub fn stats(context: impl Into<String>) -> impl FnOnce(StatsError) -> AppError {
        let context = context.into();
        move |source| AppError::Stats { context, source }
    }
}
