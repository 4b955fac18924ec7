//! Wire contract of the TAXA backend.
//!
//! Request and response shapes consumed over HTTP, plus the error taxonomy
//! the client decodes from rejected responses. The backend itself is an
//! external collaborator; nothing here implements it.

mod error;
mod model;

pub use error::{ApiError, FieldError};
pub use model::{
    AuthResponse, Credentials, DeletedData, IcoDetails, NewAccount, OnboardingUpdate,
};
