//! Typed route parameters.
//!
//! Wraps any serde type so it can travel inside a URL segment: serialized
//! with ciborium, then url-safe base64 encoded. The router only needs
//! `Display`, `FromStr` and `Default`.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(self, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE_NO_PAD.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamParseError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for UrlParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "Failed to decode base64: {}", err),
            Self::Cbor(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE_NO_PAD
            .decode(s.as_bytes())
            .map_err(UrlParamParseError::Base64)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))
            .map_err(UrlParamParseError::Cbor)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::document_descriptor::DocumentDescriptor;

    #[test]
    fn document_descriptor_round_trips() {
        let param = UrlParam(DocumentDescriptor::new("reports/q3.pdf", "Q3 Report"));
        let encoded = param.to_string();
        let parsed: UrlParam<DocumentDescriptor> = encoded.parse().unwrap();
        assert_eq!(parsed, param);
    }

    #[test]
    fn encoded_form_is_a_single_url_segment() {
        let param = UrlParam(DocumentDescriptor::new("a/b c.pdf", "title with spaces"));
        let encoded = param.to_string();
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains(' '));
    }

    #[test]
    fn garbage_fails_to_parse() {
        let result: Result<UrlParam<DocumentDescriptor>, _> = "%%%not-base64%%%".parse();
        assert!(result.is_err());
    }
}
