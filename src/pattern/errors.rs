use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("pattern must start with 's/'")]
    MissingPrefix,

    #[error("invalid pattern format. Expected: 's/old/new/'")]
    MissingSeparator,

    #[error("invalid search expression '{expression}': {source}")]
    InvalidRegex {
        expression: String,
        #[source]
        source: regex::Error,
    },
}
