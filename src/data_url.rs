//! Self-describing `data:` URLs for compressed image bytes

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const CHARSET: &str = "utf-8";

/// Wrap already-compressed image bytes as a `data:image/...;base64,` URL
///
/// `fmt` is the image subtype, e.g. `png` or `jpeg`.
#[must_use]
pub fn data_url(data_comp: &[u8], fmt: &str) -> String {
    let payload = STANDARD.encode(data_comp);
    format!("data:image/{fmt};charset={CHARSET};base64,{payload}")
}
