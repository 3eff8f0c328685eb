use std::fmt::Display;
use std::str::FromStr;

use crate::RadbError;

/// Status token opening every server reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AdbRequestStatus {
    /// Request succeeded.
    Okay,
    /// Request failed; a length-prefixed message follows.
    Fail,
}

impl FromStr for AdbRequestStatus {
    type Err = RadbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OKAY" => Ok(Self::Okay),
            "FAIL" => Ok(Self::Fail),
            v => Err(RadbError::UnknownResponseType(v.to_string())),
        }
    }
}

impl Display for AdbRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Okay => write!(f, "OKAY"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_parse() {
        assert_eq!("OKAY".parse::<AdbRequestStatus>().unwrap(), AdbRequestStatus::Okay);
        assert_eq!("FAIL".parse::<AdbRequestStatus>().unwrap(), AdbRequestStatus::Fail);
    }

    #[test]
    fn unknown_token_is_an_error() {
        assert!("NOPE".parse::<AdbRequestStatus>().is_err());
        assert!("okay".parse::<AdbRequestStatus>().is_err());
    }
}
