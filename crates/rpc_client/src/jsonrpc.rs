use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents JSON-RPC 2.0 success response.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Response<SuccessT> {
    /// A String specifying the version of the JSON-RPC protocol.
    #[serde(default)]
    pub jsonrpc: Version,
    /// Correlation id.
    ///
    /// It **MUST** be the same as the value of the id member in the Request
    /// Object. Nodes reporting an early error may leave it out.
    #[serde(default)]
    pub id: Option<Id>,
    /// Response data.
    #[serde(flatten)]
    pub data: ResponseData<SuccessT>,
}

/// Represents JSON-RPC 2.0 request.
#[derive(Clone, Debug, Serialize)]
pub struct Request<'method, ParamsT> {
    /// A String specifying the version of the JSON-RPC protocol.
    pub jsonrpc: Version,
    /// A String containing the name of the method to be invoked.
    pub method: &'method str,
    /// Positional parameters to use during the invocation of the method.
    pub params: ParamsT,
    /// Correlation id.
    pub id: Id,
}

/// Represents JSON-RPC request/response id.
///
/// An identifier established by the Client that MUST contain a String, Number,
/// or NULL value if included. If it is not included it is assumed to be a
/// notification. The value SHOULD normally not be Null and Numbers SHOULD NOT
/// contain fractional parts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// Numeric id
    Num(u64),
    /// String id
    Str(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(id) => write!(f, "{id}"),
            Id::Str(id) => write!(f, "{id}"),
        }
    }
}

/// Represents JSON-RPC protocol version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Version {
    /// Represents JSON-RPC 2.0 version.
    #[default]
    #[serde(rename = "2.0")]
    V2_0,
}

/// Represents the result of a JSON-RPC method invocation.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResponseData<SuccessT> {
    /// an error response
    Error {
        /// the error
        error: Error,
    },
    /// a success response
    Success {
        /// the result
        #[serde(
            deserialize_with = "deserialize_result",
            bound(deserialize = "SuccessT: Deserialize<'de>")
        )]
        result: SuccessT,
    },
}

/// Keeps `result` required when `SuccessT` is an `Option`. A `null` result
/// still decodes as `None`.
fn deserialize_result<'de, DeserializerT, SuccessT>(
    deserializer: DeserializerT,
) -> Result<SuccessT, DeserializerT::Error>
where
    DeserializerT: serde::Deserializer<'de>,
    SuccessT: Deserialize<'de>,
{
    SuccessT::deserialize(deserializer)
}

impl<SuccessT> ResponseData<SuccessT> {
    /// Returns a [`Result`] where `Success` is mapped to `Ok` and `Error` to
    /// `Err`.
    pub fn into_result(self) -> Result<SuccessT, Error> {
        match self {
            ResponseData::Success { result } => Ok(result),
            ResponseData::Error { error } => Err(error),
        }
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, thiserror::Error)]
#[error("The response reported error `{code}`: `{message}`. (optional data: {data:?})")]
pub struct Error {
    /// error code
    pub code: i64,
    /// error message
    pub message: String,
    /// optional data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
