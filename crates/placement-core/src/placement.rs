use crate::geometry::{BoundingBox, Position};
use crate::model::{Anchor, Footprint, FurnitureItem, PlacementResult, Scale};

/// Fixed conversion between real-world furniture units and the percentage
/// coordinate space anchors live in. Deliberately independent of the actual
/// room dimensions (see `PlacementBatch::room_dimensions`).
pub const UNIT_SCALE: f64 = 10.0;

/// Edge length of the square footprint synthesized for raw-position requests.
pub const VIRTUAL_ANCHOR_SIZE: f64 = 15.0;

/// Computes the placement of `item` at `anchor`.
///
/// The position is the anchor's, verbatim; the rotation is `custom_rotation`
/// when supplied, else the anchor's default. The bounding box is always
/// anchor-sized — item dimensions only feed the advisory `scale`.
pub fn calculate_placement(
    item: &FurnitureItem,
    anchor: &Anchor,
    custom_rotation: Option<f64>,
) -> PlacementResult {
    let footprint = anchor.bounding_box;

    PlacementResult {
        furniture_id: item.id.clone(),
        anchor_id: anchor.id.clone(),
        position: anchor.position,
        rotation: custom_rotation.unwrap_or(anchor.rotation),
        scale: fit_scale(item, footprint),
        bounding_box: BoundingBox::from_center(anchor.position, footprint.width, footprint.height),
        valid: true,
        reason: None,
    }
}

/// Uniform scale fitting the item's real-world footprint into the anchor's,
/// capped at 1.0 so items are never scaled up.
fn fit_scale(item: &FurnitureItem, footprint: Footprint) -> Scale {
    let Some(dimensions) = &item.dimensions else {
        return Scale { x: 1.0, y: 1.0 };
    };

    let width_ratio = footprint.width / (dimensions.width * UNIT_SCALE);
    let height_ratio = footprint.height / (dimensions.depth * UNIT_SCALE);
    let fit_ratio = width_ratio.min(height_ratio).min(1.0);
    Scale {
        x: fit_ratio,
        y: fit_ratio,
    }
}

/// Synthesizes the throwaway anchor used for an explicit `targetPosition`
/// request: a 15x15 slot at the requested point, default rotation, allowing
/// exactly the item's own category.
pub fn virtual_anchor(item: &FurnitureItem, position: Position) -> Anchor {
    Anchor {
        id: format!("virtual_{}", item.id),
        name: format!("Virtual anchor for {}", item.name),
        position,
        rotation: 0.0,
        bounding_box: Footprint {
            width: VIRTUAL_ANCHOR_SIZE,
            height: VIRTUAL_ANCHOR_SIZE,
        },
        allowed_categories: vec![item.category.clone()],
        occupied: false,
        occupied_by: None,
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::Position;
    use crate::model::{Anchor, Dimensions, Footprint, FurnitureItem};

    use super::{VIRTUAL_ANCHOR_SIZE, calculate_placement, virtual_anchor};

    fn make_item(id: &str, dimensions: Option<Dimensions>) -> FurnitureItem {
        FurnitureItem {
            id: id.to_string(),
            name: "Sofa".to_string(),
            category: "Seating".to_string(),
            image_url: None,
            dimensions,
        }
    }

    fn make_anchor(id: &str, x: f64, y: f64, width: f64, height: f64) -> Anchor {
        Anchor {
            id: id.to_string(),
            name: id.to_string(),
            position: Position { x, y },
            rotation: 90.0,
            bounding_box: Footprint { width, height },
            allowed_categories: vec!["Seating".to_string()],
            occupied: false,
            occupied_by: None,
        }
    }

    fn assert_close(actual: f64, expected: f64, eps: f64) {
        assert!(
            (actual - expected).abs() <= eps,
            "expected {expected}, got {actual}, eps={eps}"
        );
    }

    #[test]
    fn position_is_copied_from_anchor() {
        let item = make_item("sofa-1", None);
        let anchor = make_anchor("wall-left", 10.0, 50.0, 20.0, 12.0);
        let placement = calculate_placement(&item, &anchor, None);

        assert_eq!(placement.furniture_id, "sofa-1");
        assert_eq!(placement.anchor_id, "wall-left");
        assert_close(placement.position.x, 10.0, 1e-12);
        assert_close(placement.position.y, 50.0, 1e-12);
        assert!(placement.valid);
        assert!(placement.reason.is_none());
    }

    #[test]
    fn rotation_defaults_to_anchor_and_respects_override() {
        let item = make_item("sofa-1", None);
        let anchor = make_anchor("wall-left", 10.0, 50.0, 20.0, 12.0);

        let default = calculate_placement(&item, &anchor, None);
        assert_close(default.rotation, 90.0, 1e-12);

        let overridden = calculate_placement(&item, &anchor, Some(135.0));
        assert_close(overridden.rotation, 135.0, 1e-12);
    }

    #[test]
    fn scale_fits_real_dimensions_into_anchor_footprint() {
        let item = make_item(
            "table-1",
            Some(Dimensions {
                width: 100.0,
                height: 10.0,
                depth: 50.0,
            }),
        );
        let anchor = make_anchor("center", 50.0, 50.0, 20.0, 20.0);
        let placement = calculate_placement(&item, &anchor, None);

        // widthRatio = 20/1000, heightRatio = 20/500, fit = min of both and 1.
        assert_close(placement.scale.x, 0.02, 1e-12);
        assert_close(placement.scale.y, 0.02, 1e-12);
    }

    #[test]
    fn scale_never_exceeds_one() {
        let item = make_item(
            "stool-1",
            Some(Dimensions {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            }),
        );
        let anchor = make_anchor("corner", 20.0, 20.0, 50.0, 50.0);
        let placement = calculate_placement(&item, &anchor, None);

        assert_close(placement.scale.x, 1.0, 1e-12);
        assert_close(placement.scale.y, 1.0, 1e-12);
    }

    #[test]
    fn missing_dimensions_default_scale_to_one() {
        let item = make_item("rug-1", None);
        let anchor = make_anchor("center", 50.0, 50.0, 20.0, 20.0);
        let placement = calculate_placement(&item, &anchor, None);

        assert_close(placement.scale.x, 1.0, 1e-12);
        assert_close(placement.scale.y, 1.0, 1e-12);
    }

    #[test]
    fn bounding_box_is_anchor_sized_not_item_sized() {
        let item = make_item(
            "sofa-1",
            Some(Dimensions {
                width: 500.0,
                height: 40.0,
                depth: 300.0,
            }),
        );
        let anchor = make_anchor("wall-left", 10.0, 50.0, 20.0, 12.0);
        let placement = calculate_placement(&item, &anchor, None);

        assert_close(placement.bounding_box.min_x, 0.0, 1e-12);
        assert_close(placement.bounding_box.max_x, 20.0, 1e-12);
        assert_close(placement.bounding_box.min_y, 44.0, 1e-12);
        assert_close(placement.bounding_box.max_y, 56.0, 1e-12);
    }

    #[test]
    fn virtual_anchor_reserves_fixed_slot_for_item_category() {
        let item = make_item("lamp-1", None);
        let anchor = virtual_anchor(&item, Position { x: 75.0, y: 25.0 });

        assert_eq!(anchor.id, "virtual_lamp-1");
        assert_close(anchor.position.x, 75.0, 1e-12);
        assert_close(anchor.position.y, 25.0, 1e-12);
        assert_close(anchor.rotation, 0.0, 1e-12);
        assert_close(anchor.bounding_box.width, VIRTUAL_ANCHOR_SIZE, 1e-12);
        assert_close(anchor.bounding_box.height, VIRTUAL_ANCHOR_SIZE, 1e-12);
        assert_eq!(anchor.allowed_categories, vec!["Seating".to_string()]);
        assert!(!anchor.occupied);
    }
}
