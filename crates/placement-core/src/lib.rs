pub mod catalog;
pub mod geometry;
pub mod manifest;
pub mod model;
pub mod placement;
pub mod selector;

pub use catalog::{CatalogEntry, CatalogError, FurnitureCatalog};
pub use geometry::{
    BoundingBox, DEFAULT_PADDING, Position, ROOM_CENTER, ROOM_MAX, ROOM_MIN, check_collision,
    facing_rotation,
};
pub use manifest::generate_manifest;
pub use model::{
    Anchor, Dimensions, Footprint, FurnitureItem, PlacementBatch, PlacementManifest,
    PlacementRequest, PlacementResult, Scale,
};
pub use placement::{UNIT_SCALE, VIRTUAL_ANCHOR_SIZE, calculate_placement, virtual_anchor};
pub use selector::{category_matches, find_best_anchor};
