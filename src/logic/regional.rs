//! Regional agricultural profiles keyed by Indian state names.

use super::calculations::{average_humidity, average_temperature, total_rainfall};
use super::season::current_season;
use crate::error::{CropCastError, Result};
use crate::models::{ClimateSummary, CropIntensity, DataSource, MarketAccess, RegionalProfile};
use chrono::NaiveDate;
use tracing::debug;

/// Static census-style record for one group of states.
pub struct RegionGroup {
    pub keywords: &'static [&'static str],
    pub crops: [&'static str; 4],
    pub farm_size: &'static str,
    pub irrigation: &'static str,
    pub fertilizer: &'static str,
    pub zone: &'static str,
    pub intensity: CropIntensity,
    pub market: MarketAccess,
}

impl RegionGroup {
    pub fn matches(&self, lowercase_name: &str) -> bool {
        self.keywords.iter().any(|k| lowercase_name.contains(k))
    }

    fn to_profile(&self, today: NaiveDate) -> RegionalProfile {
        RegionalProfile {
            common_crops: self.crops.iter().map(|c| c.to_string()).collect(),
            avg_farm_size: self.farm_size.to_string(),
            irrigation_type: self.irrigation.to_string(),
            fertilizer_usage: self.fertilizer.to_string(),
            crop_season: current_season(today),
            agri_zone: self.zone.to_string(),
            crop_intensity: self.intensity,
            market_access: self.market,
            source: DataSource::RegionalCensus,
            climate: None,
        }
    }
}

/// Evaluated top to bottom; the first group with a matching keyword wins.
pub const REGION_GROUPS: &[RegionGroup] = &[
    RegionGroup {
        keywords: &["punjab", "haryana"],
        crops: ["Wheat", "Rice", "Cotton", "Sugarcane"],
        farm_size: "3.5 acres",
        irrigation: "Canal & Tube well",
        fertilizer: "120 kg/acre",
        zone: "North-Western Plains",
        intensity: CropIntensity::High,
        market: MarketAccess::Excellent,
    },
    RegionGroup {
        keywords: &["maharashtra"],
        crops: ["Cotton", "Sugarcane", "Soybean", "Wheat"],
        farm_size: "2.8 acres",
        irrigation: "Drip & Sprinkler",
        fertilizer: "95 kg/acre",
        zone: "Western Plateau",
        intensity: CropIntensity::High,
        market: MarketAccess::VeryGood,
    },
    RegionGroup {
        keywords: &["uttar pradesh"],
        crops: ["Wheat", "Rice", "Sugarcane", "Potato"],
        farm_size: "1.8 acres",
        irrigation: "Canal & Tube well",
        fertilizer: "110 kg/acre",
        zone: "Upper Gangetic Plains",
        intensity: CropIntensity::VeryHigh,
        market: MarketAccess::Good,
    },
    RegionGroup {
        keywords: &["bihar", "west bengal"],
        crops: ["Rice", "Wheat", "Jute", "Potato"],
        farm_size: "1.2 acres",
        irrigation: "Canal & River",
        fertilizer: "85 kg/acre",
        zone: "Lower Gangetic Plains",
        intensity: CropIntensity::High,
        market: MarketAccess::Moderate,
    },
    RegionGroup {
        keywords: &["karnataka", "andhra", "telangana"],
        crops: ["Rice", "Cotton", "Sugarcane", "Ragi"],
        farm_size: "2.2 acres",
        irrigation: "Tank & Bore well",
        fertilizer: "90 kg/acre",
        zone: "Southern Plateau",
        intensity: CropIntensity::Medium,
        market: MarketAccess::Good,
    },
    RegionGroup {
        keywords: &["tamil nadu", "kerala"],
        crops: ["Rice", "Coconut", "Spices", "Tea"],
        farm_size: "1.5 acres",
        irrigation: "Tank & River",
        fertilizer: "100 kg/acre",
        zone: "Southern Hills & Plains",
        intensity: CropIntensity::High,
        market: MarketAccess::VeryGood,
    },
    RegionGroup {
        keywords: &["gujarat", "rajasthan"],
        crops: ["Cotton", "Groundnut", "Wheat", "Millet"],
        farm_size: "3.0 acres",
        irrigation: "Drip & Tube well",
        fertilizer: "75 kg/acre",
        zone: "Western Arid Region",
        intensity: CropIntensity::Medium,
        market: MarketAccess::Good,
    },
];

pub const DEFAULT_REGION: RegionGroup = RegionGroup {
    keywords: &[],
    crops: ["Wheat", "Rice", "Pulses", "Oilseeds"],
    farm_size: "2.5 acres",
    irrigation: "Mixed sources",
    fertilizer: "90 kg/acre",
    zone: "Mixed Agricultural Zone",
    intensity: CropIntensity::Medium,
    market: MarketAccess::Moderate,
};

pub fn find_region_group(location_name: &str) -> Option<&'static RegionGroup> {
    let name = location_name.to_lowercase();
    REGION_GROUPS.iter().find(|g| g.matches(&name))
}

/// Profile for the first matching state group, or the mixed-zone default.
pub fn resolve_by_name(location_name: &str, today: NaiveDate) -> RegionalProfile {
    match find_region_group(location_name) {
        Some(group) => group.to_profile(today),
        None => {
            debug!(
                location = location_name,
                "No region group matched, using default profile"
            );
            DEFAULT_REGION.to_profile(today)
        }
    }
}

/// Like `resolve_by_name` but reports unmatched names instead of defaulting.
pub fn try_resolve_by_name(location_name: &str, today: NaiveDate) -> Result<RegionalProfile> {
    find_region_group(location_name)
        .map(|g| g.to_profile(today))
        .ok_or_else(|| CropCastError::UnresolvedLocation(location_name.to_string()))
}

fn crops(names: [&str; 4]) -> Vec<String> {
    names.iter().map(|c| c.to_string()).collect()
}

/// Override crops, irrigation and intensity for extreme climates.
///
/// Rainfall and temperature overrides are independent; a cold override can
/// replace the crop list chosen by a rainfall override.
pub fn refine_by_climate(
    mut profile: RegionalProfile,
    avg_temp_c: f64,
    total_rainfall_mm: f64,
) -> RegionalProfile {
    if total_rainfall_mm < 600.0 {
        profile.common_crops = crops(["Millet", "Sorghum", "Groundnut", "Cotton"]);
        profile.irrigation_type = "Drip & Sprinkler (Essential)".to_string();
    } else if total_rainfall_mm > 2000.0 {
        profile.common_crops = crops(["Rice", "Sugarcane", "Jute", "Tea"]);
        profile.irrigation_type = "Natural & Canal".to_string();
    }

    if avg_temp_c > 35.0 {
        profile.crop_intensity = CropIntensity::Low;
    } else if avg_temp_c < 15.0 {
        profile.common_crops = crops(["Wheat", "Barley", "Mustard", "Peas"]);
    }

    profile
}

/// Profile refined by a year of daily temperature, precipitation and humidity.
///
/// Fill days are skipped. Returns `None` when the temperature series has no
/// observed values.
pub fn resolve_from_climate(
    location_name: &str,
    daily_temp_c: &[f64],
    daily_precip_mm: &[f64],
    daily_humidity_pct: &[f64],
    today: NaiveDate,
) -> Option<RegionalProfile> {
    let climate = ClimateSummary {
        avg_temp_c: average_temperature(daily_temp_c)?,
        total_rainfall_mm: total_rainfall(daily_precip_mm),
        avg_humidity_pct: average_humidity(daily_humidity_pct),
    };

    let mut profile = refine_by_climate(
        resolve_by_name(location_name, today),
        climate.avg_temp_c,
        climate.total_rainfall_mm,
    );
    profile.source = DataSource::LiveRegional;
    profile.climate = Some(climate);
    Some(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    #[test]
    fn resolves_each_group() {
        let cases = [
            ("Ludhiana, Punjab", "North-Western Plains"),
            ("Karnal, Haryana", "North-Western Plains"),
            ("Pune, Maharashtra", "Western Plateau"),
            ("Lucknow, Uttar Pradesh", "Upper Gangetic Plains"),
            ("Patna, Bihar", "Lower Gangetic Plains"),
            ("Kolkata, West Bengal", "Lower Gangetic Plains"),
            ("Guntur, Andhra Pradesh", "Southern Plateau"),
            ("Warangal, Telangana", "Southern Plateau"),
            ("Madurai, Tamil Nadu", "Southern Hills & Plains"),
            ("Anand, Gujarat", "Western Arid Region"),
        ];
        for (name, zone) in cases {
            assert_eq!(resolve_by_name(name, today()).agri_zone, zone, "{}", name);
        }
    }

    #[test]
    fn resolution_is_case_insensitive() {
        let p = resolve_by_name("BATHINDA, PUNJAB", today());
        assert_eq!(p.common_crops, vec!["Wheat", "Rice", "Cotton", "Sugarcane"]);
        assert_eq!(p.market_access, MarketAccess::Excellent);
        assert_eq!(p.crop_season, Season::Kharif);
        assert_eq!(p.source, DataSource::RegionalCensus);
    }

    #[test]
    fn unmatched_name_uses_default() {
        let p = resolve_by_name("Guwahati, Assam", today());
        assert_eq!(p.agri_zone, "Mixed Agricultural Zone");
        assert_eq!(p.common_crops, vec!["Wheat", "Rice", "Pulses", "Oilseeds"]);
        assert_eq!(p.market_access, MarketAccess::Moderate);

        let err = try_resolve_by_name("Guwahati, Assam", today()).unwrap_err();
        assert!(matches!(err, CropCastError::UnresolvedLocation(_)));
        assert!(try_resolve_by_name("Shimla, Punjab", today()).is_ok());
    }

    #[test]
    fn first_matching_group_wins() {
        // "karnataka" and "kerala" both match; the plateau group is listed first
        let p = resolve_by_name("Karnataka Kerala border", today());
        assert_eq!(p.agri_zone, "Southern Plateau");
    }

    #[test]
    fn crop_season_follows_the_date() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(resolve_by_name("Punjab", jan).crop_season, Season::Rabi);
        let may = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        assert_eq!(resolve_by_name("Punjab", may).crop_season, Season::Zaid);
    }

    #[test]
    fn refine_dry_and_wet() {
        let base = resolve_by_name("Punjab", today());

        let dry = refine_by_climate(base.clone(), 28.0, 450.0);
        assert_eq!(dry.common_crops, vec!["Millet", "Sorghum", "Groundnut", "Cotton"]);
        assert_eq!(dry.irrigation_type, "Drip & Sprinkler (Essential)");
        assert_eq!(dry.crop_intensity, CropIntensity::High);

        let wet = refine_by_climate(base.clone(), 28.0, 2400.0);
        assert_eq!(wet.common_crops, vec!["Rice", "Sugarcane", "Jute", "Tea"]);
        assert_eq!(wet.irrigation_type, "Natural & Canal");

        let normal = refine_by_climate(base.clone(), 28.0, 1000.0);
        assert_eq!(normal, base);
    }

    #[test]
    fn refine_temperature_overrides() {
        let base = resolve_by_name("Rajasthan", today());
        let hot = refine_by_climate(base.clone(), 37.0, 300.0);
        assert_eq!(hot.crop_intensity, CropIntensity::Low);
        assert_eq!(hot.common_crops[0], "Millet");

        // Cold override applies after the dry override
        let cold = refine_by_climate(base, 12.0, 300.0);
        assert_eq!(cold.common_crops, vec!["Wheat", "Barley", "Mustard", "Peas"]);
        assert_eq!(cold.irrigation_type, "Drip & Sprinkler (Essential)");
    }

    #[test]
    fn refine_boundaries_are_exclusive() {
        let base = resolve_by_name("Bihar", today());
        let p = refine_by_climate(base.clone(), 35.0, 600.0);
        assert_eq!(p, base);
        let p = refine_by_climate(base.clone(), 15.0, 2000.0);
        assert_eq!(p, base);
    }

    #[test]
    fn climate_series_resolution() {
        let temps = [39.0; 365];
        let rain = [1.0; 365];
        let humidity = [30.0, 40.0];
        let p = resolve_from_climate("Jodhpur, Rajasthan", &temps, &rain, &humidity, today())
            .unwrap();
        assert_eq!(p.crop_intensity, CropIntensity::Low);
        assert_eq!(p.common_crops, vec!["Millet", "Sorghum", "Groundnut", "Cotton"]);
        assert_eq!(p.source, DataSource::LiveRegional);
        assert_eq!(
            p.climate,
            Some(ClimateSummary {
                avg_temp_c: 39.0,
                total_rainfall_mm: 365.0,
                avg_humidity_pct: Some(35.0),
            })
        );

        assert!(resolve_from_climate("Jodhpur", &[], &rain, &humidity, today()).is_none());
        assert!(resolve_by_name("Jodhpur", today()).climate.is_none());
    }

    #[test]
    fn climate_series_with_fill_days() {
        // Half a year observed, the rest not yet reported
        let mut temps = vec![30.0; 182];
        temps.extend(vec![-999.0; 183]);
        let mut rain = vec![5.0; 182];
        rain.extend(vec![-999.0; 183]);

        let p = resolve_from_climate("Nagpur, Maharashtra", &temps, &rain, &[], today()).unwrap();
        let climate = p.climate.unwrap();
        assert_eq!(climate.avg_temp_c, 30.0);
        assert_eq!(climate.total_rainfall_mm, 910.0);
        assert_eq!(climate.avg_humidity_pct, None);
        assert_eq!(p.common_crops, vec!["Cotton", "Sugarcane", "Soybean", "Wheat"]);
    }
}
