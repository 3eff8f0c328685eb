use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{RadbError, Result};

lazy_static! {
    static ref FORWARDING_LINE: Regex =
        Regex::new("^(\\S+) (\\S+) (\\S+)$").expect("cannot build forwarding line regex");
}

/// One rule of a `list-forward` response.
///
/// A rule is an immutable snapshot of one listing line, not live state.
/// The `local`/`remote` assignment mirrors the column order the server uses
/// when listing: for reverse rules local takes the first endpoint column and
/// remote the second, for forward rules the columns are swapped. This matches
/// the listings observed against real servers but has not been verified
/// against every server version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortForwarding {
    serial: String,
    local: String,
    remote: String,
    reverse: bool,
}

impl PortForwarding {
    /// Parses one `<serial> <endpoint> <endpoint>` listing line.
    pub(crate) fn parse(line: &str, reverse: bool) -> Result<Self> {
        let captures = FORWARDING_LINE
            .captures(line)
            .ok_or_else(|| RadbError::ForwardingRuleParseError(line.to_string()))?;
        let (first, second) = (captures[2].to_string(), captures[3].to_string());
        let (local, remote) = if reverse {
            (first, second)
        } else {
            (second, first)
        };
        Ok(Self {
            serial: captures[1].to_string(),
            local,
            remote,
            reverse,
        })
    }

    /// Serial of the device owning the rule, as reported by the server.
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Endpoint on the side initiating connections.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Endpoint connections are relayed to.
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Whether this is a reverse (device-to-host) rule.
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }
}
