//! One-shot contract deployment orchestrator.
//!
//! Connects to a JSON-RPC node, derives the deployment account from a seed
//! phrase, deploys one compiled contract and waits until the network
//! confirms it. The sole durable output of a run is a single
//! `KEY=address` line on stdout, meant to be captured into a configuration
//! store. Each invocation deploys a fresh contract instance; there is no
//! deployment ledger and no idempotency.

pub mod arguments;
pub mod error;
pub mod executor;
pub mod identity;

use {
    alloy::primitives::Address,
    arguments::Arguments,
    error::Error,
    executor::Executor,
};

/// Runs one deployment end to end and returns the configuration line to
/// print on stdout.
pub async fn run(args: Arguments) -> Result<String, Error> {
    // Resolve the artifact before anything touches the network so that
    // configuration problems surface immediately.
    let artifact = contracts::Registry::new(&args.artifacts_path)
        .load(&args.contract_name)
        .map_err(Error::Configuration)?;

    let identity = identity::resolve(&args.node_url, &args.mnemonic, &args.derivation_path)?;
    tracing::info!(
        deployer = %identity.address(),
        contract = %args.contract_name,
        node = %args.node_url,
        "resolved deployment identity"
    );

    let executor = Executor::new(identity, args.confirmation_timeout, args.poll_interval);
    let address = executor.deploy(&artifact).await?;
    tracing::info!(%address, "deployment confirmed");

    Ok(output_line(&args.contract_name, address))
}

/// The one stdout artifact of a successful run, e.g.
/// `CONTRACTS_WITHDRAWAL_FINALIZER_ADDRESS=0x…` for the default contract.
pub fn output_line(contract_name: &str, address: Address) -> String {
    format!("CONTRACTS_{}_ADDRESS={address}", shouty_snake(contract_name))
}

/// `WithdrawalFinalizer` -> `WITHDRAWAL_FINALIZER`, matching the naming
/// convention of the configuration store the output line feeds into.
fn shouty_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}
