//! crates/semey_guide_core/src/catalog.rs
//!
//! The in-memory place catalog: a fixed seed list plus a bounded partition
//! of AI-discovered places, with category/text filtering on top.

use chrono::Utc;
use rand::Rng;

use crate::domain::{Place, PlaceCategory, RawChunk, Signal};

/// Upper bound on the discovered partition. Oldest discovered entries are
/// evicted first; seed entries are never evicted.
pub const DISCOVERED_CAP: usize = 15;

/// Reference coordinate for the city center (Semey, Kazakhstan).
pub const CITY_CENTER: (f64, f64) = (50.4165, 80.2450);

/// Jitter amplitude, in degrees per axis, of the approximate-placement
/// heuristic.
pub const JITTER_DEGREES: f64 = 0.02;

/// An ordered collection of places: discovered entries (newest first)
/// followed by the immutable seed sequence.
pub struct PlaceCatalog {
    seed: Vec<Place>,
    discovered: Vec<Place>,
}

impl PlaceCatalog {
    pub fn new(seed: Vec<Place>) -> Self {
        Self {
            seed,
            discovered: Vec::new(),
        }
    }

    /// Every place, discovered partition first.
    pub fn all(&self) -> Vec<Place> {
        let mut places = Vec::with_capacity(self.discovered.len() + self.seed.len());
        places.extend(self.discovered.iter().cloned());
        places.extend(self.seed.iter().cloned());
        places
    }

    pub fn discovered(&self) -> &[Place] {
        &self.discovered
    }

    /// Looks up a place by id, e.g. from a map-marker activation event.
    pub fn find(&self, id: &str) -> Option<Place> {
        self.discovered
            .iter()
            .chain(self.seed.iter())
            .find(|p| p.id == id)
            .cloned()
    }

    /// Filters the catalog without reordering it.
    ///
    /// A place is included iff it matches the category (or no category is
    /// given) AND the search text. The search is a case-insensitive
    /// substring test against the primary name, the Russian name when
    /// present, and each tag; an empty search matches everything.
    pub fn filter(&self, category: Option<PlaceCategory>, search: &str) -> Vec<Place> {
        let term = search.to_lowercase();
        self.all()
            .into_iter()
            .filter(|place| {
                let matches_category = category.map_or(true, |c| place.category == c);
                let matches_search = term.is_empty()
                    || place.name.to_lowercase().contains(&term)
                    || place
                        .name_ru
                        .as_ref()
                        .is_some_and(|n| n.to_lowercase().contains(&term))
                    || place.tags.iter().any(|t| t.to_lowercase().contains(&term));
                matches_category && matches_search
            })
            .collect()
    }

    /// Prepends a batch to the discovered partition, then truncates it to
    /// the newest [`DISCOVERED_CAP`] entries by insertion order.
    pub fn add_discovered(&mut self, places: Vec<Place>) {
        let mut partition = places;
        partition.append(&mut self.discovered);
        partition.truncate(DISCOVERED_CAP);
        self.discovered = partition;
    }
}

/// Maps raw discovery chunks into catalog places.
///
/// Chunks without a title carry nothing a view could render and are
/// skipped. None of the chunks carry a resolvable geocoordinate, so every
/// mapped place is positioned by the approximate-placement heuristic:
/// jittered around the city center, a placeholder rather than geocoding.
pub fn places_from_chunks(chunks: &[RawChunk], category: Option<PlaceCategory>) -> Vec<Place> {
    let stamp = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();

    chunks
        .iter()
        .enumerate()
        .filter_map(|(idx, chunk)| {
            let title = chunk.title.as_deref()?.trim();
            if title.is_empty() {
                return None;
            }
            let (lat, lng) = approximate_coordinate(&mut rng);
            Some(Place {
                id: format!("ai-{}-{}", idx, stamp),
                name: title.to_string(),
                name_ru: None,
                category: category.unwrap_or(PlaceCategory::Food),
                description: "Found live via community search.".to_string(),
                description_ru: None,
                lat,
                lng,
                tags: vec!["AI Discovery".to_string()],
                signals: vec![Signal::StudentFavorite],
                university_verified: false,
                address: title.to_string(),
                address_ru: None,
                link: chunk.link.clone(),
            })
        })
        .collect()
}

fn approximate_coordinate(rng: &mut impl Rng) -> (f64, f64) {
    let (lat, lng) = CITY_CENTER;
    (
        lat + rng.gen_range(-JITTER_DEGREES..=JITTER_DEGREES),
        lng + rng.gen_range(-JITTER_DEGREES..=JITTER_DEGREES),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_places;

    fn discovered_place(id: &str) -> Place {
        Place {
            id: id.to_string(),
            name: format!("Discovered {}", id),
            name_ru: None,
            category: PlaceCategory::Food,
            description: String::new(),
            description_ru: None,
            lat: CITY_CENTER.0,
            lng: CITY_CENTER.1,
            tags: vec!["AI Discovery".to_string()],
            signals: vec![Signal::StudentFavorite],
            university_verified: false,
            address: String::new(),
            address_ru: None,
            link: None,
        }
    }

    #[test]
    fn seed_places_are_always_present_exactly_once() {
        let mut catalog = PlaceCatalog::new(seed_places());
        let batch: Vec<Place> = (0..40)
            .map(|i| discovered_place(&format!("ai-{}", i)))
            .collect();
        catalog.add_discovered(batch);

        for seeded in seed_places() {
            let in_all = catalog.all().iter().filter(|p| p.id == seeded.id).count();
            let in_unfiltered = catalog.filter(None, "").iter().filter(|p| p.id == seeded.id).count();
            assert_eq!(in_all, 1);
            assert_eq!(in_unfiltered, 1);
        }
    }

    #[test]
    fn discovered_partition_is_a_bounded_fifo() {
        let mut catalog = PlaceCatalog::new(seed_places());
        let first: Vec<Place> = (0..10).map(|i| discovered_place(&format!("a{}", i))).collect();
        catalog.add_discovered(first.clone());

        let second: Vec<Place> = (0..10).map(|i| discovered_place(&format!("b{}", i))).collect();
        catalog.add_discovered(second.clone());

        assert_eq!(catalog.discovered().len(), DISCOVERED_CAP);

        // Newest first: the whole second batch, then the head of the first.
        let expected: Vec<String> = second
            .iter()
            .chain(first.iter())
            .take(DISCOVERED_CAP)
            .map(|p| p.id.clone())
            .collect();
        let actual: Vec<String> = catalog.discovered().iter().map(|p| p.id.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn category_filter_preserves_order() {
        let catalog = PlaceCatalog::new(seed_places());
        let food = catalog.filter(Some(PlaceCategory::Food), "");

        assert!(!food.is_empty());
        assert!(food.iter().all(|p| p.category == PlaceCategory::Food));

        let all_food_ids: Vec<String> = catalog
            .all()
            .into_iter()
            .filter(|p| p.category == PlaceCategory::Food)
            .map(|p| p.id)
            .collect();
        let filtered_ids: Vec<String> = food.iter().map(|p| p.id.clone()).collect();
        assert_eq!(filtered_ids, all_food_ids);
    }

    #[test]
    fn search_is_case_insensitive_over_names_and_tags() {
        let catalog = PlaceCatalog::new(seed_places());

        let hits = catalog.filter(None, "vostok");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Chaykhana \"Vostok\"");

        // Tag match: "24/7" only appears as a tag on the pharmacy.
        let by_tag = catalog.filter(None, "24/7");
        assert!(by_tag.iter().any(|p| p.name.starts_with("Pharmacy")));
    }

    #[test]
    fn chunks_without_titles_are_skipped() {
        let chunks = vec![
            RawChunk {
                title: Some("Dastarkhan Cafe".to_string()),
                link: Some("https://maps.example/dastarkhan".to_string()),
            },
            RawChunk::default(),
            RawChunk {
                title: Some("   ".to_string()),
                link: None,
            },
        ];

        let places = places_from_chunks(&chunks, Some(PlaceCategory::Hangout));
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Dastarkhan Cafe");
        assert_eq!(places[0].category, PlaceCategory::Hangout);
        assert_eq!(places[0].link.as_deref(), Some("https://maps.example/dastarkhan"));
        assert!(!places[0].university_verified);
    }

    #[test]
    fn approximate_placement_stays_within_jitter_bounds() {
        let places = places_from_chunks(
            &(0..50)
                .map(|i| RawChunk {
                    title: Some(format!("Place {}", i)),
                    link: None,
                })
                .collect::<Vec<_>>(),
            None,
        );

        for place in places {
            assert!((place.lat - CITY_CENTER.0).abs() <= JITTER_DEGREES);
            assert!((place.lng - CITY_CENTER.1).abs() <= JITTER_DEGREES);
            assert_eq!(place.category, PlaceCategory::Food);
        }
    }
}
