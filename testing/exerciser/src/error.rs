//! Error taxonomy for task execution.
//!
//! Contract reverts are the one expected, recoverable failure: the driver
//! logs them and keeps going. Everything else (transport failures, bad
//! configuration, receipt timeouts) propagates and stops the run.

use alloy_primitives::B256;
use alloy_transport::{RpcError, TransportErrorKind};

/// A contract execution that aborted on chain.
///
/// Reverts surface in two places: the node rejects the transaction while
/// estimating gas (an "execution reverted" RPC error payload), or the
/// transaction is included and its receipt carries a failed status.
#[derive(Debug, thiserror::Error)]
pub enum RevertError {
    /// The node rejected the call or gas estimation with revert data.
    #[error("execution reverted: {message}")]
    Rejected {
        /// Error message reported by the node.
        message: String,
    },
    /// The transaction was included but its receipt status is failed.
    #[error("transaction {tx_hash} reverted on chain")]
    Confirmed {
        /// Hash of the reverted transaction.
        tx_hash: B256,
    },
}

impl RevertError {
    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected { message: message.into() }
    }

    pub(crate) fn confirmed(tx_hash: B256) -> Self {
        Self::Confirmed { tx_hash }
    }
}

/// Returns true if the error is a contract revert.
pub fn is_revert(err: &eyre::Report) -> bool {
    err.downcast_ref::<RevertError>().is_some()
}

/// Maps an RPC error into the task error taxonomy, pulling contract reverts
/// out of the error payload.
pub(crate) fn classify_rpc_error(err: RpcError<TransportErrorKind>) -> eyre::Report {
    if let RpcError::ErrorResp(payload) = &err {
        if payload.as_revert_data().is_some() || payload.message.contains("execution reverted") {
            return RevertError::rejected(payload.message.clone()).into();
        }
    }
    err.into()
}

#[cfg(test)]
mod tests {
    use alloy_json_rpc::ErrorPayload;

    use super::*;

    #[test]
    fn revert_payload_is_classified_as_revert() {
        let payload = ErrorPayload {
            code: 3,
            message: "execution reverted: ERC20: transfer amount exceeds balance".into(),
            data: None,
        };
        let err: RpcError<TransportErrorKind> = RpcError::ErrorResp(payload);

        let report = classify_rpc_error(err);
        assert!(is_revert(&report));
    }

    #[test]
    fn non_revert_payload_stays_fatal() {
        let payload = ErrorPayload { code: -32000, message: "nonce too low".into(), data: None };
        let err: RpcError<TransportErrorKind> = RpcError::ErrorResp(payload);

        let report = classify_rpc_error(err);
        assert!(!is_revert(&report));
    }

    #[test]
    fn revert_is_detected_through_added_context() {
        let report = eyre::Report::new(RevertError::confirmed(B256::ZERO));
        let wrapped = report.wrap_err("task transfer failed");
        assert!(is_revert(&wrapped));
    }

    #[test]
    fn plain_errors_are_not_reverts() {
        let report = eyre::eyre!("connection refused");
        assert!(!is_revert(&report));
    }
}
