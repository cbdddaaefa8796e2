use crate::constants::ADDRESS_PREFIX;
use crate::constants::WEI_PER_ETH;

pub fn wei_to_eth(wei: u128) -> f64 {
    wei as f64 / WEI_PER_ETH
}

/// Keep only the first four characters of a credential for logs
pub fn mask_api_key(api_key: &str) -> String {
    let visible: String = api_key.chars().take(4).collect();
    format!("{}****", visible)
}

/// Short display form for chart labels, e.g. `0x1234...abcd`
pub fn shorten_address(address: &str) -> String {
    if !address.starts_with(ADDRESS_PREFIX) || address.len() <= 13 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}
