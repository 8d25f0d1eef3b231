//! Keyed partitioning of collections.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::photo::Photo;
use crate::types::AlbumId;

/// Photos partitioned by album, in the order albums were first seen.
pub type Albums = IndexMap<AlbumId, Vec<Photo>>;

/// Partition `items` by the key `key` extracts from each item.
///
/// Groups appear in the order their key was first encountered and each group
/// keeps the relative order of its items.
pub fn group_by_key<T, K, I, F>(items: I, mut key: F) -> IndexMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Group photos by their album ID.
pub fn group_by_album(photos: impl IntoIterator<Item = Photo>) -> Albums {
    group_by_key(photos, Photo::album_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::photo::create_photo;

    fn photo(id: i64, album_id: i64) -> Photo {
        create_photo(&json!({
            "id": id,
            "albumId": album_id,
            "title": format!("Photo {id}"),
            "url": "https://via.placeholder.com/600/abcdef",
            "thumbnailUrl": "https://via.placeholder.com/150/abcdef",
        }))
        .unwrap()
    }

    fn ids(photos: &[Photo]) -> Vec<i64> {
        photos.iter().map(Photo::id).collect()
    }

    #[test]
    fn groups_photos_by_album_preserving_order() {
        let albums = group_by_album(vec![photo(1, 5), photo(2, 6), photo(3, 5)]);

        assert_eq!(albums.len(), 2);
        assert_eq!(ids(&albums[&5]), vec![1, 3]);
        assert_eq!(ids(&albums[&6]), vec![2]);
    }

    #[test]
    fn keeps_first_seen_album_order() {
        let albums = group_by_album(vec![photo(1, 9), photo(2, 3), photo(3, 9), photo(4, 1)]);

        let keys: Vec<_> = albums.keys().copied().collect();
        assert_eq!(keys, vec![9, 3, 1]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_album(Vec::new()).is_empty());
    }

    #[test]
    fn groups_arbitrary_keys() {
        let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
        let groups = group_by_key(words, |word| word.chars().next());

        assert_eq!(groups[&Some('a')], vec!["apple", "avocado"]);
        assert_eq!(groups[&Some('b')], vec!["banana", "blueberry"]);
        assert_eq!(groups[&Some('c')], vec!["cherry"]);
    }

    #[test]
    fn groups_by_computed_key() {
        let groups = group_by_key(1..=6, |n| n % 2 == 0);
        assert_eq!(groups[&false], vec![1, 3, 5]);
        assert_eq!(groups[&true], vec![2, 4, 6]);
    }
}
