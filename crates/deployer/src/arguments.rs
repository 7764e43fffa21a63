use {clap::Parser, std::path::PathBuf, std::time::Duration, url::Url};

#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// The seed phrase the deployment account is derived from.
    #[clap(long, env)]
    pub mnemonic: String,

    /// Hierarchical derivation path selecting the deployment account within
    /// the seed phrase's key tree. The same phrase and path always yield the
    /// same account.
    #[clap(long, env, default_value = "m/44'/60'/0'/0/1")]
    pub derivation_path: String,

    /// Name of the contract to deploy.
    #[clap(long, env, default_value = "WithdrawalFinalizer")]
    pub contract_name: String,

    /// Directory holding the compiler output, one `<ContractName>.json` per
    /// contract.
    #[clap(long, env, default_value = "artifacts")]
    pub artifacts_path: PathBuf,

    /// How long to wait for the deployment transaction to be included in a
    /// block before giving up.
    #[clap(
        long,
        env,
        default_value = "5m",
        value_parser = humantime::parse_duration,
    )]
    pub confirmation_timeout: Duration,

    /// How often to ask the node whether the deployment transaction has been
    /// included.
    #[clap(
        long,
        env,
        default_value = "3s",
        value_parser = humantime::parse_duration,
    )]
    pub poll_interval: Duration,

    #[clap(long, env, default_value = "info")]
    pub log_filter: String,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(f, "mnemonic: SECRET")?;
        writeln!(f, "derivation_path: {}", self.derivation_path)?;
        writeln!(f, "contract_name: {}", self.contract_name)?;
        writeln!(f, "artifacts_path: {}", self.artifacts_path.display())?;
        writeln!(f, "confirmation_timeout: {:?}", self.confirmation_timeout)?;
        writeln!(f, "poll_interval: {:?}", self.poll_interval)?;
        writeln!(f, "log_filter: {}", self.log_filter)?;
        Ok(())
    }
}
