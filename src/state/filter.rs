//! Client-side text filter over the loaded page
//!
//! Only narrows records that were already fetched; never queries the API.

use super::data::Artwork;

/// Build the visible rows for `query`.
///
/// A record matches when any of its searchable text fields contains the
/// query as a case-insensitive substring. A blank (empty or all-whitespace)
/// query keeps every record; any other query is matched as typed, spaces
/// included. Page order is preserved.
pub fn visible_records(records: &[Artwork], query: &str) -> Vec<Artwork> {
    if query.trim().is_empty() {
        return records.to_vec();
    }
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|artwork| matches(artwork, &needle))
        .cloned()
        .collect()
}

fn matches(artwork: &Artwork, needle: &str) -> bool {
    artwork
        .searchable_fields()
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Artwork> {
        vec![Artwork::new(1, "Sunset"), Artwork::new(2, "Lake")]
    }

    fn ids(records: &[Artwork]) -> Vec<u64> {
        records.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_case_insensitive_title_match() {
        assert_eq!(ids(&visible_records(&records(), "sun")), vec![1]);
        assert_eq!(ids(&visible_records(&records(), "LAKE")), vec![2]);
    }

    #[test]
    fn test_empty_query_keeps_page_order() {
        assert_eq!(ids(&visible_records(&records(), "")), vec![1, 2]);
        assert_eq!(ids(&visible_records(&records(), "   ")), vec![1, 2]);
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_query() {
        let page = vec![Artwork::new(1, "Lake Shore"), Artwork::new(2, "Lakeside")];

        assert_eq!(ids(&visible_records(&page, "lake ")), vec![1]);
        assert_eq!(ids(&visible_records(&page, " shore")), vec![1]);
        assert_eq!(ids(&visible_records(&page, "lake")), vec![1, 2]);
    }

    #[test]
    fn test_matches_any_text_field() {
        let mut by_artist = Artwork::new(3, "Untitled study");
        by_artist.artist_display = Some("Georgia O'Keeffe\nAmerican, 1887-1986".to_string());
        let mut by_origin = Artwork::new(4, "Bowl");
        by_origin.place_of_origin = Some("Kyoto".to_string());
        let mut by_inscription = Artwork::new(5, "Plate");
        by_inscription.inscriptions = Some("signed lower right: O'KEEFFE".to_string());

        let page = vec![by_artist, by_origin, by_inscription, Artwork::new(6, "Vase")];

        assert_eq!(ids(&visible_records(&page, "keeffe")), vec![3, 5]);
        assert_eq!(ids(&visible_records(&page, "kyoto")), vec![4]);
    }

    #[test]
    fn test_missing_fields_never_match() {
        let page = vec![Artwork {
            title: None,
            ..Artwork::new(7, "")
        }];
        assert!(visible_records(&page, "untitled").is_empty());
    }
}
