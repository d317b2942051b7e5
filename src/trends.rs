//! Decoding of Hooktheory Trends `nodes` responses.
//!
//! Only the body is handled here. Fetching it (`GET trends/nodes?cp=...`
//! with a bearer token) belongs to the caller.

use serde::{Deserialize, Serialize};

use crate::model::Chord;
use crate::{Result, compile};

/// One candidate next chord from a `trends/nodes` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendNode {
    /// Chord symbol, e.g. `"5/5"`.
    #[serde(rename = "chord_ID")]
    pub chord_id: String,
    /// Display form, e.g. `"V/V"`.
    #[serde(rename = "chord_HTML", default)]
    pub chord_html: String,
    /// Share of songs that continue with this chord.
    #[serde(default)]
    pub probability: f64,
    /// `cp` value of the progression ending in this chord.
    #[serde(default)]
    pub child_path: String,
}

impl TrendNode {
    /// Compile this node's chord ID.
    pub fn chord(&self) -> Result<Chord> {
        compile(&self.chord_id)
    }
}

/// Decode a `trends/nodes` response body.
pub fn decode_nodes(body: &[u8]) -> Result<Vec<TrendNode>> {
    let nodes: Vec<TrendNode> = serde_json::from_slice(body)?;
    tracing::debug!(nodes = nodes.len(), "decoded trend nodes");
    Ok(nodes)
}

/// Pick a node uniformly at random.
pub fn choose_node<'a>(nodes: &'a [TrendNode], rng: &mut fastrand::Rng) -> Option<&'a TrendNode> {
    if nodes.is_empty() {
        return None;
    }
    nodes.get(rng.usize(..nodes.len()))
}
