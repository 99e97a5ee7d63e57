//! Coordinate-based geography for the Indian subcontinent.
//!
//! Region lookups are ordered rule tables evaluated top to bottom; the first
//! rule whose predicate matches wins, so table order is part of the contract.

use crate::models::{Drainage, SoilType};
use tracing::trace;

/// One row of an ordered region table.
pub struct GeoRule<T> {
    pub name: &'static str,
    pub applies: fn(f64, f64) -> bool,
    pub value: T,
}

impl<T: Copy> GeoRule<T> {
    pub fn matches(&self, lat: f64, lon: f64) -> bool {
        (self.applies)(lat, lon)
    }
}

fn first_match<T: Copy>(rules: &[GeoRule<T>], lat: f64, lon: f64, default: T) -> T {
    match rules.iter().find(|r| r.matches(lat, lon)) {
        Some(rule) => {
            trace!(rule = rule.name, lat, lon, "Region rule matched");
            rule.value
        }
        None => {
            trace!(lat, lon, "No region rule matched, using default");
            default
        }
    }
}

pub const SOIL_RULES: &[GeoRule<SoilType>] = &[
    GeoRule {
        name: "Northern hills",
        applies: |lat, _| lat > 30.0,
        value: SoilType::Alluvial,
    },
    GeoRule {
        name: "Punjab-Haryana plains",
        applies: |lat, lon| lat > 26.0 && lon < 77.0,
        value: SoilType::Alluvial,
    },
    GeoRule {
        name: "Deccan trap",
        applies: |lat, lon| lat > 20.0 && lat < 26.0 && lon > 74.0 && lon < 80.0,
        value: SoilType::Black,
    },
    GeoRule {
        name: "Southern peninsula",
        applies: |lat, lon| lat < 20.0 && lon > 76.0,
        value: SoilType::Red,
    },
    GeoRule {
        name: "Western coast",
        applies: |lat, lon| lat < 15.0 && lon < 76.0,
        value: SoilType::Laterite,
    },
    GeoRule {
        name: "Thar and Kutch",
        applies: |_, lon| lon < 74.0,
        value: SoilType::Sandy,
    },
];

pub const RAINFALL_RULES: &[GeoRule<f64>] = &[
    GeoRule {
        name: "Northern hills",
        applies: |lat, _| lat > 30.0,
        value: 1200.0,
    },
    GeoRule {
        name: "Punjab-Haryana plains",
        applies: |lat, lon| lat > 26.0 && lon < 77.0,
        value: 650.0,
    },
    GeoRule {
        name: "Maharashtra and Madhya Pradesh",
        applies: |lat, lon| lat > 20.0 && lat < 26.0 && lon > 74.0 && lon < 80.0,
        value: 1100.0,
    },
    GeoRule {
        name: "Rajasthan and Gujarat",
        applies: |lat, lon| lat > 20.0 && lat < 26.0 && lon < 74.0,
        value: 500.0,
    },
    GeoRule {
        name: "Eastern central India",
        applies: |lat, _| lat > 20.0 && lat < 26.0,
        value: 1300.0,
    },
    GeoRule {
        name: "Kerala and Karnataka coast",
        applies: |lat, lon| lat < 20.0 && lon < 76.0,
        value: 2500.0,
    },
    GeoRule {
        name: "Tamil Nadu and Andhra coast",
        applies: |lat, lon| lat < 20.0 && lon > 80.0,
        value: 900.0,
    },
    GeoRule {
        name: "Interior south",
        applies: |lat, _| lat < 20.0,
        value: 1400.0,
    },
];

const DEFAULT_RAINFALL_MM: f64 = 1000.0;

pub fn classify_soil_type(lat: f64, lon: f64) -> SoilType {
    first_match(SOIL_RULES, lat, lon, SoilType::Alluvial)
}

/// Long-run annual rainfall (mm) for the region, before any seasonal adjustment.
pub fn base_annual_rainfall(lat: f64, lon: f64) -> f64 {
    first_match(RAINFALL_RULES, lat, lon, DEFAULT_RAINFALL_MM)
}

/// Coastline proxy: +10 moisture points near the edges of the subcontinent.
pub fn coastal_moisture_bonus(lat: f64, lon: f64) -> i32 {
    if lon < 73.0 || lon > 92.0 || lat < 12.0 || lat > 35.0 {
        10
    } else {
        0
    }
}

pub fn monsoon_moisture_bonus(lat: f64) -> i32 {
    if lat > 20.0 && lat < 30.0 {
        15
    } else {
        5
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientBaseline {
    pub phosphorus: f64,
    pub potassium: f64,
}

pub fn soil_nutrient_baseline(soil_type: SoilType) -> NutrientBaseline {
    let (phosphorus, potassium) = match soil_type {
        SoilType::Alluvial => (60.0, 280.0),
        SoilType::Black => (80.0, 350.0),
        SoilType::Red => (40.0, 200.0),
        SoilType::Laterite => (25.0, 150.0),
        SoilType::Sandy => (20.0, 120.0),
        SoilType::Clay => (50.0, 250.0),
        SoilType::Loamy => (45.0, 220.0),
    };
    NutrientBaseline {
        phosphorus,
        potassium,
    }
}

pub fn drainage_for(soil_type: SoilType) -> Drainage {
    match soil_type {
        SoilType::Sandy => Drainage::Excellent,
        SoilType::Alluvial | SoilType::Red | SoilType::Laterite => Drainage::Good,
        SoilType::Black | SoilType::Loamy => Drainage::Moderate,
        SoilType::Clay => Drainage::Poor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_names_are_unique() {
        let mut soil: Vec<&str> = SOIL_RULES.iter().map(|r| r.name).collect();
        let mut rainfall: Vec<&str> = RAINFALL_RULES.iter().map(|r| r.name).collect();
        for names in [&mut soil, &mut rainfall] {
            let count = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), count);
            assert!(names.iter().all(|n| !n.is_empty()));
        }
    }

    #[test]
    fn soil_rules_in_order() {
        assert_eq!(classify_soil_type(31.0, 75.0), SoilType::Alluvial);
        assert_eq!(classify_soil_type(28.0, 76.0), SoilType::Alluvial);
        assert_eq!(classify_soil_type(22.0, 77.0), SoilType::Black);
        assert_eq!(classify_soil_type(13.0, 78.0), SoilType::Red);
        assert_eq!(classify_soil_type(10.0, 75.5), SoilType::Laterite);
        assert_eq!(classify_soil_type(24.0, 72.0), SoilType::Sandy);
        // Falls through every rule: lat 27, lon 80 (eastern UP)
        assert_eq!(classify_soil_type(27.0, 80.0), SoilType::Alluvial);
    }

    #[test]
    fn first_soil_match_wins() {
        // lat 10, lon 77 is south of 15N but east of the laterite band
        assert!(SOIL_RULES[3].matches(10.0, 77.0));
        assert!(!SOIL_RULES[4].matches(10.0, 77.0));
        assert_eq!(classify_soil_type(10.0, 77.0), SoilType::Red);

        // lat 12, lon 73 matches laterite and would match sandy below it
        assert_eq!(classify_soil_type(12.0, 73.0), SoilType::Laterite);
    }

    #[test]
    fn classify_is_total_over_the_globe() {
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut lon = -180.0;
            while lon <= 180.0 {
                let soil = classify_soil_type(lat, lon);
                assert!(matches!(
                    soil,
                    SoilType::Alluvial
                        | SoilType::Black
                        | SoilType::Red
                        | SoilType::Laterite
                        | SoilType::Sandy
                ));
                lon += 7.5;
            }
            lat += 2.5;
        }
    }

    #[test]
    fn rainfall_bands() {
        assert_eq!(base_annual_rainfall(32.0, 76.0), 1200.0);
        assert_eq!(base_annual_rainfall(28.0, 75.0), 650.0);
        assert_eq!(base_annual_rainfall(23.0, 77.0), 1100.0);
        assert_eq!(base_annual_rainfall(23.0, 72.0), 500.0);
        assert_eq!(base_annual_rainfall(23.0, 85.0), 1300.0);
        assert_eq!(base_annual_rainfall(10.0, 75.0), 2500.0);
        assert_eq!(base_annual_rainfall(13.0, 80.5), 900.0);
        assert_eq!(base_annual_rainfall(15.0, 78.0), 1400.0);
        assert_eq!(base_annual_rainfall(28.0, 80.0), 1000.0);
        // Band edges are exclusive: lat exactly 20 or 26 falls to the default
        assert_eq!(base_annual_rainfall(20.0, 77.0), 1000.0);
    }

    #[test]
    fn punjab_at_31n_is_in_the_northern_band() {
        // The northern rule precedes the Punjab-Haryana rule
        assert_eq!(base_annual_rainfall(31.0, 75.0), 1200.0);
        assert_eq!(drainage_for(classify_soil_type(31.0, 75.0)), Drainage::Good);
    }

    #[test]
    fn moisture_bonuses() {
        assert_eq!(coastal_moisture_bonus(19.0, 72.8), 10);
        assert_eq!(coastal_moisture_bonus(10.0, 77.0), 10);
        assert_eq!(coastal_moisture_bonus(36.0, 77.0), 10);
        assert_eq!(coastal_moisture_bonus(23.0, 80.0), 0);

        assert_eq!(monsoon_moisture_bonus(25.0), 15);
        assert_eq!(monsoon_moisture_bonus(20.0), 5);
        assert_eq!(monsoon_moisture_bonus(10.0), 5);
    }

    #[test]
    fn nutrient_baseline_table() {
        let b = soil_nutrient_baseline(SoilType::Black);
        assert_eq!((b.phosphorus, b.potassium), (80.0, 350.0));
        let l = soil_nutrient_baseline(SoilType::Loamy);
        assert_eq!((l.phosphorus, l.potassium), (45.0, 220.0));
    }

    #[test]
    fn drainage_table() {
        assert_eq!(drainage_for(SoilType::Sandy), Drainage::Excellent);
        assert_eq!(drainage_for(SoilType::Laterite), Drainage::Good);
        assert_eq!(drainage_for(SoilType::Black), Drainage::Moderate);
        assert_eq!(drainage_for(SoilType::Clay), Drainage::Poor);
        assert_eq!(drainage_for(SoilType::Loamy), Drainage::Moderate);
    }
}
