use {
    crate::{
        error::{Error, classify},
        identity::Identity,
    },
    alloy::{
        network::TransactionBuilder,
        primitives::{Address, Bytes, TxHash},
        providers::Provider,
        rpc::types::{TransactionReceipt, TransactionRequest},
    },
    contracts::Artifact,
    std::time::Duration,
};

/// Executes a single contract deployment: assembles the creation
/// transaction, signs and submits it, then blocks until the network reports
/// inclusion. Every step either succeeds in order or fails the whole run;
/// there is no retry.
pub struct Executor {
    identity: Identity,
    confirmation_timeout: Duration,
    poll_interval: Duration,
}

impl Executor {
    pub fn new(
        identity: Identity,
        confirmation_timeout: Duration,
        poll_interval: Duration,
    ) -> Self {
        Self {
            identity,
            confirmation_timeout,
            poll_interval,
        }
    }

    /// Deploys `artifact` and returns the address of the new contract once
    /// its creation transaction is confirmed.
    pub async fn deploy(&self, artifact: &Artifact) -> Result<Address, Error> {
        let from = self.identity.address();
        let (tx, nonce) = self.build(artifact.bytecode.clone()).await?;

        let envelope = tx
            .build(&self.identity.wallet())
            .await
            .map_err(Error::Signing)?;
        let pending = self
            .identity
            .provider()
            .send_tx_envelope(envelope)
            .await
            .map_err(classify)?;
        let hash = *pending.tx_hash();
        tracing::info!(%hash, %from, nonce, "deployment transaction submitted");

        let receipt = self.wait_for_inclusion(hash).await?;
        if !receipt.status() {
            return Err(Error::SubmissionRejected(format!(
                "deployment transaction {hash} reverted"
            )));
        }
        // Nodes report the created address on the receipt; the address
        // computable from sender and nonce is the fallback.
        Ok(receipt
            .contract_address
            .unwrap_or_else(|| from.create(nonce)))
    }

    /// Assembles the creation transaction: nonce, chain id, EIP-1559 fees
    /// and a gas estimate on top of the artifact's creation bytecode.
    /// The nonce is returned alongside the request because it also
    /// determines the created contract's fallback address.
    async fn build(&self, bytecode: Bytes) -> Result<(TransactionRequest, u64), Error> {
        let provider = self.identity.provider();
        let chain_id = provider.get_chain_id().await.map_err(classify)?;
        let nonce = provider
            .get_transaction_count(self.identity.address())
            .await
            .map_err(classify)?;
        let fees = provider.estimate_eip1559_fees().await.map_err(classify)?;

        let tx = deploy_request(bytecode, self.identity.address())
            .with_chain_id(chain_id)
            .with_nonce(nonce)
            .with_max_fee_per_gas(fees.max_fee_per_gas)
            .with_max_priority_fee_per_gas(fees.max_priority_fee_per_gas);
        let gas = provider.estimate_gas(tx.clone()).await.map_err(classify)?;
        tracing::debug!(chain_id, nonce, gas, "assembled deployment transaction");
        Ok((tx.with_gas_limit(gas), nonce))
    }

    /// Polls the node until the transaction is included in a block. The wait
    /// is bounded by the configured confirmation timeout.
    async fn wait_for_inclusion(&self, hash: TxHash) -> Result<TransactionReceipt, Error> {
        let provider = self.identity.provider();
        let poll = async {
            loop {
                match provider
                    .get_transaction_receipt(hash)
                    .await
                    .map_err(classify)?
                {
                    Some(receipt) => return Ok(receipt),
                    None => {
                        tracing::debug!(%hash, "deployment transaction pending");
                        tokio::time::sleep(self.poll_interval).await;
                    }
                }
            }
        };
        tokio::time::timeout(self.confirmation_timeout, poll)
            .await
            .map_err(|_| Error::ConfirmationTimeout {
                hash,
                timeout: self.confirmation_timeout,
            })?
    }
}

/// A contract creation request carrying `bytecode` as its payload. The one
/// contract this tool deploys takes no constructor arguments, so the input
/// is the creation bytecode as-is.
fn deploy_request(bytecode: Bytes, from: Address) -> TransactionRequest {
    TransactionRequest::default()
        .with_from(from)
        .with_deploy_code(bytecode)
}
