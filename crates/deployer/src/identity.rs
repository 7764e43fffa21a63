use {
    crate::error::Error,
    alloy::{
        network::EthereumWallet,
        primitives::Address,
        providers::{DynProvider, Provider, ProviderBuilder},
        rpc::client::ClientBuilder,
        signers::local::{MnemonicBuilder, PrivateKeySigner, coins_bip39::English},
    },
    url::Url,
};

/// A signing identity bound to a node endpoint: the account derived from the
/// operator's seed phrase plus the provider used to talk to the chain.
#[derive(Debug)]
pub struct Identity {
    provider: DynProvider,
    signer: PrivateKeySigner,
}

/// Derives the deployment account from `seed_phrase` at `derivation_path`
/// and binds it to the node at `node_url`.
///
/// Derivation is purely local; no network call happens here. The connection
/// is established lazily, so an unreachable endpoint only surfaces on first
/// use.
pub fn resolve(
    node_url: &Url,
    seed_phrase: &str,
    derivation_path: &str,
) -> Result<Identity, Error> {
    let signer = MnemonicBuilder::<English>::default()
        .phrase(seed_phrase)
        .derivation_path(derivation_path)
        .map_err(Error::InvalidSeedPhrase)?
        .build()
        .map_err(Error::InvalidSeedPhrase)?;
    Ok(Identity {
        provider: provider(node_url),
        signer,
    })
}

fn provider(url: &Url) -> DynProvider {
    let rpc = ClientBuilder::default().http(url.clone());
    ProviderBuilder::new().connect_client(rpc).erased()
}

impl Identity {
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Wallet for building and signing transactions from this account.
    pub fn wallet(&self) -> EthereumWallet {
        EthereumWallet::new(self.signer.clone())
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    #[cfg(test)]
    pub(crate) fn with_provider(self, provider: DynProvider) -> Self {
        Self {
            provider,
            signer: self.signer,
        }
    }
}
