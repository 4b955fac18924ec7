//! Response decoding.
//!
//! The backend rejects requests with a JSON body whose `detail` field is
//! either a list of field errors (request validation) or a single message.
//! Both shapes are decoded explicitly; anything else becomes a bare
//! rejection with no server message, so callers fall back to their localized
//! generic string.

use serde::Deserialize;

use taxa_core::remote::{ApiError, FieldError};

pub(crate) fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Fields(Vec<FieldError>),
    Message(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Detail,
}

/// Decode a non-OK response body into the error taxonomy.
pub(crate) fn decode_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Detail::Fields(errors),
        }) => ApiError::Validation { errors },
        Ok(ErrorBody {
            detail: Detail::Message(message),
        }) => ApiError::Rejected {
            status,
            message: Some(message),
        },
        Err(_) => ApiError::Rejected {
            status,
            message: None,
        },
    }
}

/// Decode a JSON body on success, or the `detail` payload on a non-OK
/// status.
pub(crate) async fn decode_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response.json::<T>().await.map_err(transport)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(decode_error(status.as_u16(), &body))
    }
}

/// Status check for endpoints whose success body is irrelevant.
pub(crate) async fn decode_unit(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(decode_error(status.as_u16(), &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_becomes_a_rejection_with_message() {
        let err = decode_error(401, r#"{"detail": "Incorrect email or password"}"#);
        assert_eq!(err.server_message(), Some("Incorrect email or password"));
    }

    #[test]
    fn list_detail_becomes_a_validation_error() {
        let err = decode_error(
            422,
            r#"{"detail": [{"msg": "Password must be at least 6 characters long", "loc": ["body", "password"]}]}"#,
        );
        match &err {
            ApiError::Validation { errors } => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.server_message(),
            Some("Password must be at least 6 characters long")
        );
    }

    #[test]
    fn unparseable_body_becomes_a_bare_rejection() {
        let err = decode_error(502, "<html>Bad Gateway</html>");
        assert_eq!(err.server_message(), None);
        assert!(!err.is_transport());
    }
}
