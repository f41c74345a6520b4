use dom::Id;
use ghost_text::GhostError;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no element matches {0:?}")]
    NoMatch(String),
    #[error("element {0:?} is not a text control")]
    NotATextControl(Id),
    #[error("element {0:?} is not a form")]
    NotAForm(Id),
    #[error("no element has focus")]
    NoFocus,
    #[error(transparent)]
    Ghost(#[from] GhostError),
    #[error("invalid options object: {0}")]
    Options(#[from] serde_json::Error),
    #[error("line {line}: {message}")]
    Script { line: usize, message: String },
}
