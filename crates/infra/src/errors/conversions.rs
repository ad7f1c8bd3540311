//! Conversions from external infrastructure errors into client errors.

use keyring::Error as KeyringError;
use reqwest::Error as HttpError;
use smartpath_domain::ApiError;

use super::StorageError;

/// Error newtype that keeps third-party conversions on the infrastructure
/// side and can be converted back into the client error.
#[derive(Debug)]
pub struct InfraError(pub ApiError);

impl From<InfraError> for ApiError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ApiError> for InfraError {
    fn from(value: ApiError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ApiError */
/* -------------------------------------------------------------------------- */

fn classify_http_error(err: &HttpError) -> ApiError {
    if err.is_builder() {
        return ApiError::Config(format!("invalid HTTP request: {err}"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    if err.is_connect() {
        return ApiError::Network(format!("connection failed: {err}"));
    }

    if err.is_timeout() {
        return ApiError::Network("HTTP connection timed out".into());
    }

    if err.is_body() || err.is_decode() {
        return ApiError::Network(format!("failed to read response body: {err}"));
    }

    ApiError::Network(err.to_string())
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(classify_http_error(&value))
    }
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → StorageError */
/* -------------------------------------------------------------------------- */

impl From<KeyringError> for StorageError {
    fn from(value: KeyringError) -> Self {
        use KeyringError::*;

        let description = value.to_string();

        match value {
            NoEntry => StorageError::NotFound,
            BadEncoding(_) => {
                StorageError::Keychain("credential in keychain is not valid UTF-8".into())
            }
            TooLong(name, limit) => StorageError::Keychain(format!(
                "keychain attribute '{name}' exceeds platform limit ({limit})"
            )),
            Invalid(attr, reason) => {
                StorageError::Keychain(format!("keychain attribute '{attr}' is invalid: {reason}"))
            }
            PlatformFailure(err) => StorageError::Keychain(format!("platform error: {err}")),
            NoStorageAccess(err) => {
                StorageError::Keychain(format!("unable to access secure storage: {err}"))
            }
            _ => StorageError::Keychain(description),
        }
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → StorageError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        StorageError::Format(value.to_string())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use reqwest::Client;

    use super::*;

    #[test]
    fn keyring_no_entry_maps_to_not_found() {
        let mapped = StorageError::from(KeyringError::NoEntry);
        assert!(matches!(mapped, StorageError::NotFound));
    }

    #[test]
    fn malformed_json_maps_to_format_error() {
        let err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        match StorageError::from(err) {
            StorageError::Format(msg) => assert!(!msg.is_empty()),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn refused_connection_maps_to_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: ApiError = InfraError::from(error).into();
        match mapped {
            ApiError::Network(msg) => assert!(msg.contains("connection")),
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
