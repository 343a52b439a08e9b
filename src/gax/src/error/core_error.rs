// Copyright 2025 AWS Cloud Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// request may fail validation before it is sent, the transport may be unable
/// to create the necessary connection, the response may not be valid JSON, or
/// the service may return an error status.
///
/// Most applications just return or log the error. Applications that need to
/// interrogate the failure can use the predicates to determine the error
/// kind, the accessors to query common details, and the error
/// [source][std::error::Error::source] for deeper information.
///
/// # Example
/// ```
/// use aws_cloud_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_binding() => { println!("fix the request: {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use aws_cloud_gax::error::BindingError;
///     # Err(Error::binding(BindingError::missing("TableName", "DeleteItemInput")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing a request that could not be assembled.
    ///
    /// The generated clients validate their input messages when the operation
    /// is invoked, before any I/O takes place. A required field left unset,
    /// or an enumerated field holding an unknown value, results in this
    /// error.
    ///
    /// # Example
    /// ```
    /// use aws_cloud_gax::error::{BindingError, Error};
    /// let error = Error::binding(BindingError::missing("Key", "DeleteItemInput"));
    /// assert!(error.is_binding());
    /// ```
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// The request could not be assembled from the input message.
    ///
    /// This is always a client-side generated error, raised before the
    /// request is sent. It is never transient: the same input fails on every
    /// attempt. Use [as_inner][Error::as_inner] to recover the
    /// [BindingError][crate::error::BindingError] details.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// Creates an error representing a serialization problem.
    ///
    /// Applications should have no need to use this function outside of
    /// mocks.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a deserialization problem.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// The most common causes are bugs in the client library and (rarely)
    /// bugs in the service. Note that the request may have completed in the
    /// service even though the client could not interpret the response.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a failure to fetch authentication
    /// headers.
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// The client could not create the authentication headers for the
    /// request.
    ///
    /// No request was sent to the service: the credentials provider failed
    /// first.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Creates an error representing an I/O problem in the transport.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// The request could not be sent, or the response could not be received.
    ///
    /// The request may or may not have started, and it may or may not have
    /// completed in the service. If the request mutates any state in the
    /// service, it may or may not be safe to attempt it again.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// Creates an error representing a timeout.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed in time.
    ///
    /// This is always a client-side generated error. Deadlines are configured
    /// by the hosting application, not by this layer.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error from an unsuccessful HTTP response.
    ///
    /// # Example
    /// ```
    /// use aws_cloud_gax::error::Error;
    /// let error = Error::http(
    ///     400, http::HeaderMap::new(), bytes::Bytes::from_static(b"bad request"));
    /// assert_eq!(error.http_status_code(), Some(400));
    /// ```
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        Self {
            kind: ErrorKind::Http(Box::new(HttpDetails {
                status_code,
                headers,
                payload,
            })),
            source: None,
        }
    }

    /// The service returned an unsuccessful HTTP status code.
    pub fn is_http(&self) -> bool {
        matches!(self.kind, ErrorKind::Http(_))
    }

    /// The HTTP status code, if the error corresponds to an HTTP response.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http(d) => Some(d.status_code),
            _ => None,
        }
    }

    /// The headers of the HTTP response, if any.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Http(d) => Some(&d.headers),
            _ => None,
        }
    }

    /// The payload of the HTTP response, if any.
    ///
    /// AWS services typically return a JSON object describing the failure,
    /// with an `__type` member identifying the modeled error shape.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Http(d) => Some(&d.payload),
            _ => None,
        }
    }

    /// Downcasts the error source to the given type.
    ///
    /// # Example
    /// ```
    /// use aws_cloud_gax::error::{BindingError, Error};
    /// let error = Error::binding(BindingError::missing("Key", "DeleteItemInput"));
    /// let inner = error.as_inner::<BindingError>().expect("a BindingError");
    /// assert!(matches!(inner, BindingError::MissingRequiredParameter { .. }));
    /// ```
    pub fn as_inner<T: StdError + 'static>(&self) -> Option<&T> {
        self.source.as_ref().and_then(|e| e.downcast_ref::<T>())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot assemble the request from its input message: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => {
                write!(f, "cannot serialize the request body: {e}")
            }
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response body: {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers: {e}")
            }
            (ErrorKind::Io, Some(e)) => {
                write!(f, "the request could not be completed: {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded its deadline: {e}")
            }
            (ErrorKind::Http(d), _) => {
                write!(f, "the service returned HTTP status code {}", d.status_code)
            }
            (_, None) => write!(f, "the request failed"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn StdError))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Io,
    Timeout,
    Http(Box<HttpDetails>),
}

#[derive(Debug)]
struct HttpDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: bytes::Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BindingError;
    use http::HeaderValue;

    #[test]
    fn binding() {
        let source = BindingError::missing("TableName", "DeleteItemInput");
        let error = Error::binding(source);
        assert!(error.is_binding(), "{error:?}");
        assert!(!error.is_http(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        let inner = error.as_inner::<BindingError>().unwrap();
        assert_eq!(
            inner,
            &BindingError::missing("TableName", "DeleteItemInput")
        );
        let display = format!("{error}");
        assert!(display.contains("TableName"), "{display}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser("simulated problem");
        assert!(error.is_serialization(), "{error:?}");
        assert!(format!("{error}").contains("simulated problem"));
    }

    #[test]
    fn deserialization() {
        let error = Error::deser("simulated problem");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication("simulated problem");
        assert!(error.is_authentication(), "{error:?}");
    }

    #[test]
    fn io() {
        let error = Error::io("simulated problem");
        assert!(error.is_io(), "{error:?}");
        assert!(!error.is_timeout(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout("simulated timeout");
        assert!(error.is_timeout(), "{error:?}");
    }

    #[test]
    fn http() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        let payload = bytes::Bytes::from_static(br#"{"__type":"SerializationException"}"#);
        let error = Error::http(400, headers.clone(), payload.clone());
        assert!(error.is_http(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(400));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
        assert!(format!("{error}").contains("400"));
    }

    #[test]
    fn accessors_on_other_kinds() {
        let error = Error::io("simulated problem");
        assert_eq!(error.http_status_code(), None);
        assert_eq!(error.http_headers(), None);
        assert_eq!(error.http_payload(), None);
        assert!(error.as_inner::<BindingError>().is_none());
    }
}
