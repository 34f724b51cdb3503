//! Cross-page selection state
//!
//! `Selection` remembers every artwork the user picked on any page or
//! filtered view. Operations scoped to the visible rows only ever touch
//! ids that are part of those rows.

use std::collections::{HashMap, HashSet};

use super::data::{Artwork, ArtworkId};

/// Every selected artwork, keyed by id, in the order it was first selected
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    records: HashMap<ArtworkId, Artwork>,
    /// Insertion order for the side panel
    order: Vec<ArtworkId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile a bulk select-all / deselect-all report against the visible rows.
    ///
    /// Every visible record whose id is in `checked` is inserted (or refreshed);
    /// every other visible record is removed. Records outside `visible` are
    /// left alone. Membership is decided per id, never by comparing counts.
    pub fn toggle_all(&mut self, visible: &[Artwork], checked: &HashSet<ArtworkId>) {
        for artwork in visible {
            if checked.contains(&artwork.id) {
                self.select_one(artwork.clone());
            } else {
                self.deselect_one(artwork.id);
            }
        }
    }

    /// Insert or overwrite `artwork` under its id.
    ///
    /// An id that is already selected keeps its position in the panel.
    pub fn select_one(&mut self, artwork: Artwork) {
        let id = artwork.id;
        if self.records.insert(id, artwork).is_none() {
            self.order.push(id);
        }
    }

    /// Remove `id` if present. Returns whether anything was removed.
    pub fn deselect_one(&mut self, id: ArtworkId) -> bool {
        if self.records.remove(&id).is_some() {
            self.order.retain(|&selected| selected != id);
            true
        } else {
            false
        }
    }

    pub fn clear_all(&mut self) {
        self.records.clear();
        self.order.clear();
    }

    /// The visible records that are selected, in `visible` order.
    pub fn visible_selections<'a>(&self, visible: &'a [Artwork]) -> Vec<&'a Artwork> {
        visible
            .iter()
            .filter(|artwork| self.records.contains_key(&artwork.id))
            .collect()
    }

    /// True when `visible` is non-empty and every record in it is selected
    pub fn covers(&self, visible: &[Artwork]) -> bool {
        !visible.is_empty() && visible.iter().all(|a| self.records.contains_key(&a.id))
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Selected artworks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Artwork> + '_ {
        self.order.iter().filter_map(|id| self.records.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn art(id: ArtworkId) -> Artwork {
        Artwork::new(id, &format!("Artwork {id}"))
    }

    fn page(ids: &[ArtworkId]) -> Vec<Artwork> {
        ids.iter().copied().map(art).collect()
    }

    fn ids(set: &[ArtworkId]) -> HashSet<ArtworkId> {
        set.iter().copied().collect()
    }

    fn selected_ids(selection: &Selection) -> Vec<ArtworkId> {
        selection.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_toggle_all_only_touches_visible_ids() {
        let mut selection = Selection::new();
        selection.select_one(art(1));
        selection.select_one(art(5));

        let visible = page(&[5, 6, 7]);
        selection.toggle_all(&visible, &ids(&[6, 7]));

        assert_eq!(selected_ids(&selection), vec![1, 6, 7]);
        assert!(!selection.contains(5));
    }

    #[test]
    fn test_toggle_all_matches_checked_subset_regardless_of_size() {
        let visible = page(&[10, 11, 12]);

        // A fully selected filtered view of 3 records
        let mut selection = Selection::new();
        selection.toggle_all(&visible, &ids(&[10, 11, 12]));
        let shown: Vec<_> = selection.visible_selections(&visible).iter().map(|a| a.id).collect();
        assert_eq!(shown, vec![10, 11, 12]);

        // A partial selection of the same size as some other view
        let wide = page(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        let mut selection = Selection::new();
        selection.toggle_all(&wide, &ids(&[2, 4, 6]));
        let shown: Vec<_> = selection.visible_selections(&wide).iter().map(|a| a.id).collect();
        assert_eq!(shown, vec![2, 4, 6]);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_toggle_all_with_empty_subset_deselects_visible_only() {
        let mut selection = Selection::new();
        selection.select_one(art(1));
        selection.select_one(art(2));
        selection.select_one(art(40));

        selection.toggle_all(&page(&[1, 2, 3]), &HashSet::new());

        assert_eq!(selected_ids(&selection), vec![40]);
    }

    #[test]
    fn test_toggle_all_ignores_checked_ids_outside_visible() {
        let mut selection = Selection::new();
        selection.toggle_all(&page(&[1, 2]), &ids(&[2, 99]));
        assert_eq!(selected_ids(&selection), vec![2]);
    }

    #[test]
    fn test_select_then_deselect_restores_prior_state() {
        let mut selection = Selection::new();
        selection.select_one(art(3));
        let before = selection.clone();

        selection.select_one(art(8));
        assert!(selection.deselect_one(8));

        assert_eq!(selection, before);
    }

    #[test]
    fn test_select_one_is_idempotent_and_keeps_position() {
        let mut selection = Selection::new();
        selection.select_one(art(1));
        selection.select_one(art(2));

        let mut renamed = art(1);
        renamed.title = Some("Renamed".to_string());
        selection.select_one(renamed);

        assert_eq!(selected_ids(&selection), vec![1, 2]);
        assert_eq!(selection.iter().next().unwrap().title.as_deref(), Some("Renamed"));
    }

    #[test]
    fn test_deselect_missing_id_is_noop() {
        let mut selection = Selection::new();
        selection.select_one(art(1));
        assert!(!selection.deselect_one(42));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_clear_all_empties_every_view() {
        let mut selection = Selection::new();
        selection.toggle_all(&page(&[1, 2, 3]), &ids(&[1, 2, 3]));
        selection.clear_all();

        assert!(selection.is_empty());
        assert!(selection.visible_selections(&page(&[1, 2, 3])).is_empty());
        assert_eq!(selection.iter().count(), 0);
    }

    #[test]
    fn test_selection_survives_page_change() {
        let mut selection = Selection::new();
        let page_one = page(&[5, 6, 7]);
        selection.select_one(page_one[2].clone());

        let page_two = page(&[13, 14, 15]);
        assert!(selection.visible_selections(&page_two).is_empty());
        assert_eq!(selection.len(), 1);
        assert!(selection.contains(7));
    }

    #[test]
    fn test_visible_selections_preserves_visible_order() {
        let mut selection = Selection::new();
        selection.select_one(art(3));
        selection.select_one(art(1));

        let visible = page(&[1, 2, 3]);
        let shown: Vec<_> = selection.visible_selections(&visible).iter().map(|a| a.id).collect();
        assert_eq!(shown, vec![1, 3]);
    }

    #[test]
    fn test_covers() {
        let mut selection = Selection::new();
        assert!(!selection.covers(&[]));

        let visible = page(&[1, 2]);
        selection.select_one(art(1));
        assert!(!selection.covers(&visible));
        selection.select_one(art(2));
        assert!(selection.covers(&visible));
    }

    fn titled(id: ArtworkId, prefix: &str) -> Artwork {
        Artwork::new(id, &format!("{prefix} {id}"))
    }

    fn title_of(selection: &Selection, id: ArtworkId) -> Option<String> {
        selection
            .iter()
            .find(|a| a.id == id)
            .and_then(|a| a.title.clone())
    }

    proptest! {
        #[test]
        fn prop_toggle_all_selects_exactly_checked_and_spares_hidden(
            prior in proptest::collection::btree_set(0u64..40, 0..16),
            visible_ids in proptest::collection::btree_set(0u64..40, 0..12),
            mask in proptest::collection::vec(any::<bool>(), 12),
        ) {
            let mut selection = Selection::new();
            for &id in &prior {
                selection.select_one(titled(id, "prior"));
            }

            let visible: Vec<Artwork> = visible_ids.iter().map(|&id| titled(id, "visible")).collect();
            let checked: HashSet<ArtworkId> = visible_ids
                .iter()
                .zip(&mask)
                .filter(|(_, keep)| **keep)
                .map(|(id, _)| *id)
                .collect();

            selection.toggle_all(&visible, &checked);

            let shown: Vec<ArtworkId> = selection.visible_selections(&visible).iter().map(|a| a.id).collect();
            let expected: Vec<ArtworkId> = visible_ids.iter().copied().filter(|id| checked.contains(id)).collect();
            prop_assert_eq!(shown, expected);

            for &id in prior.difference(&visible_ids) {
                prop_assert!(selection.contains(id));
                prop_assert_eq!(title_of(&selection, id), Some(format!("prior {id}")));
            }
            let hidden_or_checked = prior.difference(&visible_ids).count() + checked.len();
            prop_assert_eq!(selection.len(), hidden_or_checked);
        }

        #[test]
        fn prop_select_then_deselect_round_trips(
            prior in proptest::collection::btree_set(0u64..40, 0..16),
            fresh in 40u64..80,
        ) {
            let mut selection = Selection::new();
            for &id in &prior {
                selection.select_one(titled(id, "prior"));
            }
            let before = selection.clone();

            selection.select_one(titled(fresh, "fresh"));
            prop_assert!(selection.deselect_one(fresh));

            prop_assert_eq!(selection, before);
        }
    }
}
