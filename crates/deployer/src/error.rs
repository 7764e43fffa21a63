use {
    alloy::{
        network::{Ethereum, TransactionBuilderError},
        primitives::TxHash,
        signers::local::LocalSignerError,
        transports::{RpcError, TransportError},
    },
    std::time::Duration,
};

/// Everything that can take down a deployment run. None of these are
/// recovered internally: each one propagates to `main`, is reported with
/// full detail and terminates the process with a non-zero exit code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Problems detected before any network activity, e.g. a missing or
    /// unusable contract artifact.
    #[error("configuration error: {0:#}")]
    Configuration(#[source] anyhow::Error),

    #[error("invalid seed phrase or derivation path: {0}")]
    InvalidSeedPhrase(#[source] LocalSignerError),

    #[error("node endpoint unreachable: {0}")]
    EndpointUnreachable(#[source] TransportError),

    /// The identity could not produce a valid signature over the assembled
    /// transaction, e.g. because a required field was left unfilled.
    #[error("failed to sign the deployment transaction: {0}")]
    Signing(#[source] TransactionBuilderError<Ethereum>),

    /// The node refused what we sent it (gas estimation failure,
    /// insufficient balance) or the creation itself reverted.
    #[error("deployment rejected: {0}")]
    SubmissionRejected(String),

    #[error("deployment transaction {hash} was not confirmed within {timeout:?}")]
    ConfirmationTimeout { hash: TxHash, timeout: Duration },
}

/// Sorts node communication failures into the taxonomy: not being able to
/// reach the endpoint at all is distinct from the endpoint actively
/// refusing what it was sent.
pub(crate) fn classify(err: TransportError) -> Error {
    match err {
        err @ RpcError::Transport(_) => Error::EndpointUnreachable(err),
        err => Error::SubmissionRejected(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::{rpc::json_rpc::ErrorPayload, transports::TransportErrorKind},
    };

    #[test]
    fn transport_failures_mean_the_endpoint_is_unreachable() {
        let err = classify(TransportErrorKind::custom_str("connection refused"));
        assert!(matches!(err, Error::EndpointUnreachable(_)));
    }

    #[test]
    fn node_error_responses_mean_the_deployment_was_rejected() {
        let err = classify(RpcError::ErrorResp(ErrorPayload {
            code: -32000,
            message: "insufficient funds for gas * price + value".into(),
            data: None,
        }));
        match err {
            Error::SubmissionRejected(reason) => {
                assert!(reason.contains("insufficient funds"))
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }
}
