use snafu::Snafu;

pub type CustomResult<T> = Result<T, Error>;

/// Crate wide error type. Remote failures keep the underlying cause,
/// validation failures keep the message shown to the user.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("request to {url} failed: {source}"))]
    RequestError { url: String, source: reqwest::Error },

    #[snafu(display("remote call to {url} returned status {status}: {body}"))]
    RemoteApiError {
        url: String,
        status: u16,
        body: String,
    },

    #[snafu(display("could not decode remote response: {source}"))]
    DecodeError { source: reqwest::Error },

    #[snafu(display("missing environment variable {name}"))]
    MissingEnvError {
        name: String,
        source: std::env::VarError,
    },

    #[snafu(display("could not access the stored session token: {source}"))]
    TokenStorageError { source: std::io::Error },

    #[snafu(display("no user is currently logged in"))]
    NotLoggedInError,

    #[snafu(display("sign up did not return a session"))]
    SignUpFailedError,

    #[snafu(display("invalid email address: {email}"))]
    InvalidEmailError { email: String },

    #[snafu(display("Position {position} is already taken in this race"))]
    PositionTakenError { position: i32 },

    #[snafu(display("{message}"))]
    ValidationError { message: String },
}
