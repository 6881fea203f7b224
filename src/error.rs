// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),

    /// A row URL that does not parse as an absolute URL.
    InvalidUrl(String),

    /// The request could not be completed (connection, TLS, HTTP status).
    Transfer(String),

    /// The body stream failed while reading the downloaded bytes.
    Read(String),

    /// The downloaded bytes are not a usable image.
    Decode(DecodeError),
}

/// Reasons a downloaded payload cannot be shown as an image.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The decoder rejected the bytes.
    NotAnImage(String),

    /// The image decoded to zero width or height.
    EmptyImage { width: u32, height: u32 },
}

impl Error {
    /// Returns the i18n message key shown to the user for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::InvalidUrl(_) => "error-invalid-url",
            Error::Transfer(_) => "error-download-transfer",
            Error::Read(_) => "error-download-read",
            Error::Decode(_) => "error-download-decode",
        }
    }

    /// Raw cause attached to the error, for messages that embed it.
    pub fn detail(&self) -> Option<String> {
        match self {
            Error::Io(msg)
            | Error::Config(msg)
            | Error::InvalidUrl(msg)
            | Error::Transfer(msg)
            | Error::Read(msg) => Some(msg.clone()),
            Error::Decode(err) => Some(err.to_string()),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::NotAnImage(msg) => write!(f, "not an image: {}", msg),
            DecodeError::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({}x{})", width, height)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidUrl(e) => write!(f, "Invalid URL: {}", e),
            Error::Transfer(e) => write!(f, "Transfer Error: {}", e),
            Error::Read(e) => write!(f, "Read Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
