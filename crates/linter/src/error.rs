use thiserror::Error;

/// Errors raised while configuring the engine or analyzing a file
#[derive(Debug, Error)]
pub enum LintError {
    #[error("{file_name}: Parsing error: {message}")]
    Parse { file_name: String, message: String },

    #[error("{file_name}: Parsing error: {reason}, too deep to analyze")]
    TooDeep { file_name: String, reason: String },

    #[error("environment key \"{0}\" is unknown")]
    UnknownEnvironment(String),

    #[error("failed to load plugin \"{0}\": no such plugin is registered")]
    UnknownPlugin(String),

    #[error("definition for rule \"{0}\" was not found")]
    UnknownRule(String),

    #[error("there was a problem loading formatter \"{0}\"")]
    UnknownFormatter(String),
}
