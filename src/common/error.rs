use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{method} {url} failed: {source}"))]
    RequestError {
        url: String,
        method: String,
        source: ureq::Error,
    },
    #[snafu(display("HTTP {status}: {message}"))]
    ResponseError { status: u16, message: String },
    #[snafu(display("reading error body: {source}"))]
    DecodeError { source: serde_json::Error },
    #[snafu(display("can only add or remove records; unrecognized: {mode}"))]
    ModeError { mode: String },
    #[snafu(display("record {name} has unsupported kind {kind}; only TXT challenges can be rotated"))]
    UnsupportedError { name: String, kind: String },
    #[snafu(display("{prefix}: {message}"))]
    ConfigError { prefix: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
