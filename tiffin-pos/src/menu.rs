//! Menu grouping for the customer page
//!
//! The page renders one section per category, in the order categories
//! first appear in the catalog. Disabled dishes never reach the customer.

use shared::models::MenuItem;

/// Group active menu items by category, preserving catalog order
pub fn menu_by_category(items: &[MenuItem]) -> Vec<(String, Vec<&MenuItem>)> {
    let mut sections: Vec<(String, Vec<&MenuItem>)> = Vec::new();
    for item in items.iter().filter(|i| i.is_active) {
        match sections.iter_mut().find(|(name, _)| *name == item.category) {
            Some((_, section)) => section.push(item),
            None => sections.push((item.category.clone(), vec![item])),
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::VegMarker;

    fn item(id: i64, name: &str, category: &str, active: bool) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price: 100.0,
            description: String::new(),
            veg_marker: VegMarker::Veg,
            prep_time_minutes: 10,
            is_active: active,
        }
    }

    #[test]
    fn groups_preserve_first_seen_category_order() {
        let items = vec![
            item(1, "Biryani", "Mains", true),
            item(4, "Garlic Naan", "Breads", true),
            item(3, "Dal Makhani", "Mains", true),
            item(7, "Gulab Jamun", "Desserts", true),
        ];

        let sections = menu_by_category(&items);
        let names: Vec<&str> = sections.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(names, vec!["Mains", "Breads", "Desserts"]);
        assert_eq!(sections[0].1.len(), 2);
    }

    #[test]
    fn disabled_items_are_hidden() {
        let items = vec![
            item(1, "Biryani", "Mains", true),
            item(2, "Butter Chicken", "Mains", false),
        ];

        let sections = menu_by_category(&items);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].1.len(), 1);
        assert_eq!(sections[0].1[0].name, "Biryani");
    }
}
