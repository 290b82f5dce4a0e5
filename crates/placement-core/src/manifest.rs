use crate::geometry::{DEFAULT_PADDING, check_collision, facing_rotation};
use crate::model::{PlacementBatch, PlacementManifest, PlacementResult};
use crate::placement::{calculate_placement, virtual_anchor};
use crate::selector::find_best_anchor;

/// Runs one solve pass over an ordered batch of furniture items.
///
/// Items are processed strictly in input order and each one sees the
/// accumulated placements of everything before it (first-come-first-placed;
/// the running list starts pre-seeded with the batch's existing placements).
/// Per-item problems never abort the batch: unresolved items become
/// warnings, colliding items are kept in the manifest flagged invalid.
pub fn generate_manifest(batch: &PlacementBatch) -> PlacementManifest {
    let mut items: Vec<PlacementResult> = Vec::new();
    let mut collisions: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let mut placed: Vec<PlacementResult> = batch.existing_placements.clone();

    for item in &batch.furniture_items {
        let request = batch
            .placement_requests
            .iter()
            .find(|request| request.furniture_item.id == item.id);

        // Resolution precedence: explicit anchor id, then raw position,
        // then automatic selection.
        let mut placement = if let Some(anchor_id) =
            request.and_then(|request| request.target_anchor_id.as_deref())
        {
            match batch.anchors.iter().find(|anchor| anchor.id == anchor_id) {
                Some(anchor) => calculate_placement(item, anchor, None),
                None => {
                    warnings.push(format!("Anchor {anchor_id} not found for {}", item.name));
                    continue;
                }
            }
        } else if let Some(position) = request.and_then(|request| request.target_position) {
            let anchor = virtual_anchor(item, position);
            calculate_placement(item, &anchor, None)
        } else {
            match find_best_anchor(item, &batch.anchors, &placed) {
                Some(anchor) => {
                    let rotation = facing_rotation(anchor.position);
                    calculate_placement(item, anchor, Some(rotation))
                }
                None => {
                    warnings.push(format!(
                        "No suitable anchor found for {} ({})",
                        item.name, item.category
                    ));
                    continue;
                }
            }
        };

        if let Some(collider) = placed.iter().find(|existing| {
            check_collision(&placement.bounding_box, &existing.bounding_box, DEFAULT_PADDING)
        }) {
            collisions.push(format!(
                "{} collides with item at anchor {}",
                item.name, collider.anchor_id
            ));
            placement.valid = false;
            placement.reason = Some("Collision detected".to_string());
        }

        if !placement.bounding_box.in_bounds() {
            warnings.push(format!("{} may extend outside room boundaries", item.name));
        }

        items.push(placement.clone());
        placed.push(placement);
    }

    let valid = collisions.is_empty();
    let total_items = items.len();
    PlacementManifest {
        items,
        collisions,
        warnings,
        valid,
        total_items,
    }
}
