//! Catch and out-of-bounds tests
//!
//! The catch test is an axis-aligned overlap between the item's bounding box
//! and the basket rectangle, not a true circle/rectangle test. Gameplay feel
//! depends on the approximation, so it is preserved as-is.

use super::state::{Basket, Item};

/// Check whether a falling item overlaps the basket
pub fn item_hits_basket(item: &Item, basket: &Basket) -> bool {
    item.pos.y + item.radius >= basket.y
        && item.pos.y - item.radius <= basket.y + basket.height
        && item.pos.x + item.radius >= basket.x
        && item.pos.x - item.radius <= basket.x + basket.width
}

/// True once the item's top edge has passed below the canvas bottom
pub fn item_below_floor(item: &Item, canvas_height: f32) -> bool {
    item.pos.y - item.radius > canvas_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ITEM_RADIUS;
    use crate::sim::state::ItemKind;
    use glam::Vec2;

    fn item_at(x: f32, y: f32) -> Item {
        Item {
            id: 1,
            pos: Vec2::new(x, y),
            radius: ITEM_RADIUS,
            speed: 3.0,
            kind: ItemKind::Fruit,
        }
    }

    fn basket() -> Basket {
        Basket {
            x: 200.0,
            y: 600.0,
            width: 80.0,
            height: 20.0,
            speed: 6.0,
        }
    }

    #[test]
    fn test_hit_dead_center() {
        let item = item_at(240.0, 610.0);
        assert!(item_hits_basket(&item, &basket()));
    }

    #[test]
    fn test_hit_on_vertical_edge() {
        // Item bottom exactly touching the basket top counts as a hit
        let item = item_at(240.0, 600.0 - ITEM_RADIUS);
        assert!(item_hits_basket(&item, &basket()));
        // One pixel higher misses
        let item = item_at(240.0, 600.0 - ITEM_RADIUS - 1.0);
        assert!(!item_hits_basket(&item, &basket()));
    }

    #[test]
    fn test_hit_on_horizontal_edge() {
        // Bounding box touching the basket's left edge counts, even though a
        // true circle test would miss here
        let item = item_at(200.0 - ITEM_RADIUS, 610.0);
        assert!(item_hits_basket(&item, &basket()));
        let item = item_at(200.0 - ITEM_RADIUS - 1.0, 610.0);
        assert!(!item_hits_basket(&item, &basket()));
    }

    #[test]
    fn test_miss_beside_basket() {
        let item = item_at(50.0, 610.0);
        assert!(!item_hits_basket(&item, &basket()));
        let item = item_at(400.0, 610.0);
        assert!(!item_hits_basket(&item, &basket()));
    }

    #[test]
    fn test_below_floor_is_strict() {
        let h = 640.0;
        // Top edge exactly at the bottom is still in play
        let item = item_at(100.0, h + ITEM_RADIUS);
        assert!(!item_below_floor(&item, h));
        let item = item_at(100.0, h + ITEM_RADIUS + 0.5);
        assert!(item_below_floor(&item, h));
    }
}
