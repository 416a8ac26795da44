use crate::domain::model::{Registry, Volume};

pub const MILLIGRAMS_PER_GRAM: f64 = 1000.0;
pub const MILLILITERS_PER_TABLESPOON: f64 = 14.7868;

/// Volume of `mass_mg` milligrams of `substance`, or `None` if it is not in
/// the registry.
///
/// Densities of zero or below are not rejected; the result follows float
/// division (infinite or negative volumes).
pub fn volume_for(registry: &Registry, substance: &str, mass_mg: i64) -> Option<Volume> {
    let density = registry.density(substance)?;

    let mass_g = mass_mg as f64 / MILLIGRAMS_PER_GRAM;
    let milliliters = mass_g / density;
    let tablespoons = milliliters / MILLILITERS_PER_TABLESPOON;

    Some(Volume {
        milliliters,
        tablespoons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        vec![("salt".to_string(), 1.0), ("syrup".to_string(), 1400.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_one_gram_at_unit_density() {
        let volume = volume_for(&registry(), "salt", 1000).unwrap();
        assert_eq!(volume.milliliters, 1.0);
        assert!((volume.tablespoons - 1.0 / 14.7868).abs() < 1e-12);
        assert_eq!(format!("{:.2}", volume.tablespoons), "0.07");
    }

    #[test]
    fn test_dense_substance() {
        let volume = volume_for(&registry(), "syrup", 1400).unwrap();
        assert!((volume.milliliters - 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_missing_substance() {
        assert_eq!(volume_for(&registry(), "sugar", 250), None);
    }

    #[test]
    fn test_zero_density_does_not_panic() {
        let mut registry = registry();
        registry.insert("air", 0.0);
        let volume = volume_for(&registry, "air", 500).unwrap();
        assert!(volume.milliliters.is_infinite());
    }
}
