//! Provider identities and their fixed origins

use serde::{Deserialize, Serialize};
use std::fmt;

/// A placeholder-image provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Provider {
    /// placehold.co
    #[serde(rename = "placehold")]
    Placehold,
    /// picsum.photos
    #[serde(rename = "lorem-picsum")]
    LoremPicsum,
}

impl Provider {
    /// Every provider, in declaration order
    pub const ALL: [Provider; 2] = [Provider::Placehold, Provider::LoremPicsum];

    /// Wire name used in requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Placehold => "placehold",
            Provider::LoremPicsum => "lorem-picsum",
        }
    }

    /// Origin every URL for this provider starts with
    pub fn base_url(&self) -> &'static str {
        match self {
            Provider::Placehold => "https://placehold.co",
            Provider::LoremPicsum => "https://picsum.photos",
        }
    }

    /// Template used by the positional legacy entry point
    pub fn legacy_template(&self) -> &'static str {
        match self {
            Provider::Placehold => "{baseUrl}/{width}x{height}",
            Provider::LoremPicsum => "{baseUrl}/{width}/{height}",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
