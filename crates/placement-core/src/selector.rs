use crate::geometry::{DEFAULT_PADDING, check_collision};
use crate::model::{Anchor, FurnitureItem, PlacementResult};
use crate::placement::calculate_placement;

/// Fuzzy category test: an anchor accepts an item when any allowed category
/// is a substring of the item's category, the item's category is a substring
/// of an allowed category, or the item's name contains an allowed category.
/// Case-insensitive on all three checks.
pub fn category_matches(item: &FurnitureItem, anchor: &Anchor) -> bool {
    let category = item.category.to_lowercase();
    let name = item.name.to_lowercase();

    anchor.allowed_categories.iter().any(|allowed| {
        let allowed = allowed.to_lowercase();
        category.contains(&allowed) || allowed.contains(&category) || name.contains(&allowed)
    })
}

/// Picks the best anchor for `item` given everything placed so far.
///
/// Anchors are discarded when pre-reserved (`occupied`), category-incompatible,
/// or when a trial placement there would collide with an existing placement.
/// Among survivors, an anchor whose allowed-category list appears literally in
/// the item's name wins; otherwise the first survivor in input order does.
/// `None` is a legitimate "no placement possible" outcome, not an error.
pub fn find_best_anchor<'a>(
    item: &FurnitureItem,
    anchors: &'a [Anchor],
    placed_items: &[PlacementResult],
) -> Option<&'a Anchor> {
    let candidates: Vec<&Anchor> = anchors
        .iter()
        .filter(|anchor| !anchor.occupied)
        .filter(|anchor| category_matches(item, anchor))
        .filter(|anchor| {
            let trial = calculate_placement(item, anchor, None);
            !placed_items.iter().any(|placed| {
                check_collision(&trial.bounding_box, &placed.bounding_box, DEFAULT_PADDING)
            })
        })
        .collect();

    let name = item.name.to_lowercase();
    candidates
        .iter()
        .find(|anchor| {
            anchor
                .allowed_categories
                .iter()
                .any(|allowed| name.contains(&allowed.to_lowercase()))
        })
        .or_else(|| candidates.first())
        .copied()
}
