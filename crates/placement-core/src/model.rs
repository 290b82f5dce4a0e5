//! Solve-pass data model.
//!
//! Every type here crosses the wire as camelCase JSON: placement results
//! round-trip through the HTTP boundary when callers feed a previous
//! manifest's `items` back in as `existingPlacements`.

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundingBox, Position};

/// Real-world furniture measurements (e.g. inches).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// A piece of furniture to place. Immutable during a solve pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureItem {
    pub id: String,
    pub name: String,
    /// Free-text classification matched against anchor allow-lists.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Only affects the advisory `scale` of a placement, never its bounding box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

/// Width and height of the slot an anchor reserves, in percentage units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

/// A designated slot in the room where an item may be placed.
///
/// The engine treats the anchor list as a read-only arena: `occupied` is
/// caller-supplied pre-reservation, never flipped during a solve. In-batch
/// occupancy lives in the accumulating placed-items list instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anchor {
    pub id: String,
    pub name: String,
    pub position: Position,
    /// Default rotation in degrees, used unless the solve overrides it.
    pub rotation: f64,
    pub bounding_box: Footprint,
    /// Category strings fuzzy-matched against item category and name.
    pub allowed_categories: Vec<String>,
    #[serde(default)]
    pub occupied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupied_by: Option<String>,
}

/// Explicit caller override for one furniture item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRequest {
    pub furniture_item: FurnitureItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_anchor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_position: Option<Position>,
}

/// Uniform renderer scale, capped at 1.0 (items are never scaled up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

/// The placement computed for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementResult {
    pub furniture_id: String,
    /// Real anchor id, or `virtual_<itemId>` for raw-position requests.
    pub anchor_id: String,
    pub position: Position,
    pub rotation: f64,
    pub scale: Scale,
    pub bounding_box: BoundingBox,
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Aggregate outcome of one solve pass. Purely derived data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementManifest {
    pub items: Vec<PlacementResult>,
    pub collisions: Vec<String>,
    pub warnings: Vec<String>,
    /// False iff any collision was recorded; warnings never affect this.
    pub valid: bool,
    pub total_items: usize,
}

/// Full input to one solve pass; doubles as the HTTP request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementBatch {
    /// Items to place, processed strictly in this order.
    pub furniture_items: Vec<FurnitureItem>,
    pub anchors: Vec<Anchor>,
    /// Pre-seeded occupied space from earlier solves.
    #[serde(default)]
    pub existing_placements: Vec<PlacementResult>,
    /// Explicit overrides, keyed by furniture item id.
    #[serde(default)]
    pub placement_requests: Vec<PlacementRequest>,
    /// Reserved for future bounds logic; accepted and left unread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_dimensions: Option<serde_json::Value>,
}
