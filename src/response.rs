//! Batch responses.

use serde::{Deserialize, Serialize};

use crate::storage::Outcome;

/// Overall status of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Error,
}

/// The statement that aborted a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchFailure {
    /// 0-based index of the failing statement.
    pub statement: usize,
    pub message: String,
}

/// The response to one request.
///
/// On failure `results` holds the outcomes of the statements that ran before
/// the failing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub status: Status,
    pub results: Vec<Outcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<BatchFailure>,
}

impl BatchResponse {
    pub fn ok(results: Vec<Outcome>) -> Self {
        Self {
            status: Status::Ok,
            results,
            error: None,
        }
    }

    pub fn failed(results: Vec<Outcome>, statement: usize, message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            results,
            error: Some(BatchFailure {
                statement,
                message: message.into(),
            }),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let ok = BatchResponse::ok(vec![Outcome::message("Using database: shop")]);
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"status":"OK","results":["Using database: shop"]}"#
        );

        let failed = BatchResponse::failed(vec![], 0, "Database shop doesn't exist.");
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "ERROR");
        assert_eq!(json["error"]["statement"], 0);
        assert_eq!(json["error"]["message"], "Database shop doesn't exist.");
    }

    #[test]
    fn test_results_deserialize_back() {
        let json = r#"{"status":"OK","results":[{"affected":2},[{"id":"1","name":null}]]}"#;
        let response: BatchResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_ok());
        assert_eq!(response.results[0], Outcome::Affected { affected: 2 });
        assert_eq!(response.results[1].rows().unwrap()[0].get("name"), Some(&None));
    }
}
