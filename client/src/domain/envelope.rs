//! Response wrappers.

use serde::{Deserialize, Serialize};

/// The `{ data: T }` shape returned by every facade call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Response payload.
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wrap a payload.
    pub const fn new(data: T) -> Self {
        Self { data }
    }

    /// Unwrap the payload.
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// `{ "message": "..." }` acknowledgement returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Human-readable confirmation.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serialises_under_data_key() {
        let envelope = Envelope::new(vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&envelope).expect("encode"),
            serde_json::json!({ "data": [1, 2] })
        );
        assert_eq!(envelope.into_inner(), vec![1, 2]);
    }
}
