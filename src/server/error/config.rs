use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    MissingEnvVar(String),

    #[error("REPLY_ADDRESS_KEY is invalid: {0}")]
    InvalidReplyAddressKey(String),
}
