//! Real Kinshasa locations for test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. These sit on the drivable
//! network, so they also work against OSRM Congo-DRC data.

use route_ranker::point::Point;

/// A named location with coordinates and an optional photo URL.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub photo: &'static str,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name,
            lat,
            lng,
            photo: "",
        }
    }

    pub const fn with_photo(name: &'static str, lat: f64, lng: f64, photo: &'static str) -> Self {
        Self {
            name,
            lat,
            lng,
            photo,
        }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn point(&self) -> Point {
        if self.photo.is_empty() {
            Point::new(self.name, self.lat, self.lng)
        } else {
            Point::with_photo(self.name, self.lat, self.lng, self.photo)
        }
    }
}

// ============================================================================
// Fixed endpoints
// ============================================================================

pub const VICTOIRE: Location = Location::with_photo(
    "Rond-Point Victoire",
    -4.33787,
    15.30553,
    "https://upload.wikimedia.org/wikipedia/commons/0/0b/Place_des_artistes_Victoire_Kinshasa.jpg",
);

pub const GARE_CENTRALE: Location = Location::with_photo(
    "Gare Centrale",
    -4.30122,
    15.31827,
    "https://upload.wikimedia.org/wikipedia/commons/6/6b/Gare_central_de_Kinshasa.jpg",
);

// ============================================================================
// Central intermediate stops
// ============================================================================

pub const CENTRAL_STOPS: &[Location] = &[
    Location::new("Matonge", -4.34022, 15.31599),
    Location::new("Boulevard du 30 Juin", -4.301955, 15.31419),
    Location::new("Centre-ville", -4.30800, 15.31150),
];

// ============================================================================
// Outlying districts (for larger stop sets and animation paths)
// ============================================================================

pub const OUTER_DISTRICTS: &[Location] = &[
    Location::new("Stade des Martyrs", -4.3271, 15.3366),
    Location::new("Palais du Peuple", -4.3311, 15.3255),
    Location::new("Place de la Reconstruction", -4.3748, 15.3456),
    Location::new("Gare de Matete", -4.38845, 15.35275),
];

// ============================================================================
// Helpers
// ============================================================================

/// The three central stops as points, in fixture order.
pub fn default_stops() -> Vec<Point> {
    CENTRAL_STOPS.iter().map(Location::point).collect()
}

/// Up to seven distinct stops, central districts first.
pub fn many_stops(count: usize) -> Vec<Point> {
    CENTRAL_STOPS
        .iter()
        .chain(OUTER_DISTRICTS.iter())
        .take(count)
        .map(Location::point)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_kinshasa_area() {
        let mut all = vec![VICTOIRE, GARE_CENTRALE];
        all.extend_from_slice(CENTRAL_STOPS);
        all.extend_from_slice(OUTER_DISTRICTS);

        for loc in all {
            assert!(
                loc.lat > -4.40 && loc.lat < -4.25,
                "{} lat out of range: {}",
                loc.name,
                loc.lat
            );
            assert!(
                loc.lng > 15.25 && loc.lng < 15.38,
                "{} lng out of range: {}",
                loc.name,
                loc.lng
            );
        }
    }

    #[test]
    fn test_many_stops_are_distinct() {
        let stops = many_stops(7);
        assert_eq!(stops.len(), 7);
        for (i, a) in stops.iter().enumerate() {
            for b in stops.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
