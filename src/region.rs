//! Static region table mapping identifiers to CloudWatch endpoints

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const REGIONS: &[(&str, &str)] = &[
    ("us-east-1", "https://monitoring.us-east-1.amazonaws.com"),
    ("us-east-2", "https://monitoring.us-east-2.amazonaws.com"),
    ("us-west-1", "https://monitoring.us-west-1.amazonaws.com"),
    ("us-west-2", "https://monitoring.us-west-2.amazonaws.com"),
    ("us-gov-west-1", "https://monitoring.us-gov-west-1.amazonaws.com"),
    ("ca-central-1", "https://monitoring.ca-central-1.amazonaws.com"),
    ("sa-east-1", "https://monitoring.sa-east-1.amazonaws.com"),
    ("eu-west-1", "https://monitoring.eu-west-1.amazonaws.com"),
    ("eu-west-2", "https://monitoring.eu-west-2.amazonaws.com"),
    ("eu-west-3", "https://monitoring.eu-west-3.amazonaws.com"),
    ("eu-central-1", "https://monitoring.eu-central-1.amazonaws.com"),
    ("eu-north-1", "https://monitoring.eu-north-1.amazonaws.com"),
    ("ap-south-1", "https://monitoring.ap-south-1.amazonaws.com"),
    ("ap-southeast-1", "https://monitoring.ap-southeast-1.amazonaws.com"),
    ("ap-southeast-2", "https://monitoring.ap-southeast-2.amazonaws.com"),
    ("ap-northeast-1", "https://monitoring.ap-northeast-1.amazonaws.com"),
    ("ap-northeast-2", "https://monitoring.ap-northeast-2.amazonaws.com"),
    ("cn-north-1", "https://monitoring.cn-north-1.amazonaws.com.cn"),
];

/// A region and the CloudWatch endpoint serving it.
///
/// An unknown identifier resolves to the empty descriptor; the error only
/// shows up once a request is attempted against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub endpoint: String,
}

impl Region {
    pub fn resolve(id: &str) -> Region {
        REGIONS
            .iter()
            .find(|(name, _)| *name == id)
            .map(|(name, endpoint)| Region {
                name: name.to_string(),
                endpoint: endpoint.to_string(),
            })
            .unwrap_or_default()
    }

    pub fn is_resolved(&self) -> bool {
        !self.endpoint.is_empty()
    }
}

impl FromStr for Region {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Region::resolve(s))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.name)
    }
}
