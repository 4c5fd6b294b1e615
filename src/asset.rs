use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use sha2::{Digest, Sha256};

use crate::BeachError;

/// Packed tile bytes as shipped in the base64 text asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedAsset {
    bytes: Vec<u8>,
}

impl PackedAsset {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Decode the base64 transport. Surrounding whitespace and line breaks
    /// are ignored.
    pub fn from_base64(text: &str) -> Result<Self, BeachError> {
        let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| BeachError::Asset(e.to_string()))?;
        Ok(Self { bytes })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BeachError> {
        let text = std::fs::read_to_string(path)?;
        let asset = Self::from_base64(&text)?;
        debug!(
            "loaded packed asset: {} bytes, sha256 {}",
            asset.bytes.len(),
            asset.fingerprint()
        );
        Ok(asset)
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// SHA-256 of the packed bytes, hex encoded.
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_with_line_breaks() {
        let asset = PackedAsset::from_base64("AQID\nBA==\n").unwrap();
        assert_eq!(asset.bytes(), &[1, 2, 3, 4]);
        assert_eq!(asset.to_base64(), "AQIDBA==");
    }

    #[test]
    fn bad_base64_is_an_asset_error() {
        assert!(matches!(
            PackedAsset::from_base64("not*base64"),
            Err(BeachError::Asset(_))
        ));
    }

    #[test]
    fn fingerprint_of_empty() {
        assert_eq!(
            PackedAsset::from_bytes(Vec::new()).fingerprint(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
