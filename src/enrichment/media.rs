pub const PLACEHOLDER_IMAGE: &str = "/placeholder-nft.png";
const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Rewrite `ipfs://` image URIs to the public HTTP gateway. Missing images
/// get the placeholder path.
pub fn resolve_image_url(url: Option<&str>) -> String {
    let url = match url.map(str::trim) {
        Some(u) if !u.is_empty() => u,
        _ => return PLACEHOLDER_IMAGE.into(),
    };

    match url.strip_prefix("ipfs://") {
        Some(rest) => format!("{IPFS_GATEWAY}{}", rest.trim_start_matches("ipfs/")),
        None => url.to_string(),
    }
}
