use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the base64 encoded HMAC-SHA256 of `body`, the value LINE sends in
/// the `x-line-signature` header.
#[cfg(test)]
pub fn sign(channel_secret: &str, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(body);

    base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}

/// Checks a `x-line-signature` value against the raw request body.
pub fn verify_signature(channel_secret: &str, signature: &str, body: &[u8]) -> bool {
    let expected = match base64::engine::general_purpose::STANDARD.decode(signature.trim()) {
        Ok(s) => s,
        Err(_) => return false,
    };

    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(body);

    mac.verify_slice(&expected).is_ok()
}
