use crate::models::{Chain, MarketplaceLinks};

/// Path segment OpenSea uses for a chain. Mainnet is spelled out, every
/// other chain uses its tag.
pub fn opensea_chain_segment(chain: Chain) -> &'static str {
    match chain {
        Chain::Eth => "ethereum",
        other => other.as_str(),
    }
}

/// Build marketplace deep links for a token. No network calls.
pub fn generate_marketplace_links(chain: Chain, contract_address: &str, token_id: &str) -> MarketplaceLinks {
    let mut links = MarketplaceLinks {
        opensea: Some(format!(
            "https://opensea.io/assets/{}/{}/{}",
            opensea_chain_segment(chain),
            contract_address,
            token_id
        )),
        ..Default::default()
    };

    // Blur and LooksRare only list Ethereum mainnet assets
    if chain.is_mainnet() {
        links.blur = Some(format!("https://blur.io/asset/{contract_address}/{token_id}"));
        links.looksrare = Some(format!(
            "https://looksrare.org/collections/{contract_address}/{token_id}"
        ));
    }

    links
}
