/// Density units accepted by the `add` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityUnit {
    GramsPerMilliliter,
    KilogramsPerLiter,
    OuncesPerFluidOunce,
    PoundsPerGallon,
}

impl DensityUnit {
    /// Scan order for the `add` parser. The first unit whose match key occurs
    /// in the density text wins, so this order must not change.
    pub const ALL: [DensityUnit; 4] = [
        DensityUnit::GramsPerMilliliter,
        DensityUnit::KilogramsPerLiter,
        DensityUnit::OuncesPerFluidOunce,
        DensityUnit::PoundsPerGallon,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            DensityUnit::GramsPerMilliliter => "g/mL",
            DensityUnit::KilogramsPerLiter => "kg/L",
            DensityUnit::OuncesPerFluidOunce => "oz/fl oz",
            DensityUnit::PoundsPerGallon => "lb/gal",
        }
    }

    /// Lowercased symbol with spaces and slashes removed.
    pub fn match_key(self) -> &'static str {
        match self {
            DensityUnit::GramsPerMilliliter => "gml",
            DensityUnit::KilogramsPerLiter => "kgl",
            DensityUnit::OuncesPerFluidOunce => "ozfloz",
            DensityUnit::PoundsPerGallon => "lbgal",
        }
    }

    /// Multiplier taking a value in this unit to g/mL.
    pub fn factor(self) -> f64 {
        match self {
            DensityUnit::GramsPerMilliliter => 1.0,
            DensityUnit::KilogramsPerLiter => 1000.0,
            DensityUnit::OuncesPerFluidOunce => 29.5735,
            DensityUnit::PoundsPerGallon => 119.826,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "g/ml" => Some(DensityUnit::GramsPerMilliliter),
            "kg/l" => Some(DensityUnit::KilogramsPerLiter),
            "oz/fl oz" | "oz/fluid oz" | "oz/fluid-oz" => Some(DensityUnit::OuncesPerFluidOunce),
            "lb/gal" => Some(DensityUnit::PoundsPerGallon),
            _ => None,
        }
    }

    pub fn to_grams_per_ml(self, value: f64) -> f64 {
        if self == DensityUnit::GramsPerMilliliter {
            value
        } else {
            value * self.factor()
        }
    }
}

impl std::fmt::Display for DensityUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Converts `value` expressed in `unit` to g/mL, or `None` for an unknown unit.
pub fn convert_density(value: f64, unit: &str) -> Option<f64> {
    DensityUnit::from_token(unit).map(|unit| unit.to_grams_per_ml(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_table() {
        assert_eq!(convert_density(2.0, "kg/L"), Some(2000.0));
        assert_eq!(convert_density(2.0, "g/mL"), Some(2.0));
        assert_eq!(convert_density(2.0, "oz/fl oz"), Some(2.0 * 29.5735));
        assert_eq!(convert_density(2.0, "oz/fluid oz"), Some(2.0 * 29.5735));
        assert_eq!(convert_density(2.0, "lb/gal"), Some(2.0 * 119.826));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(convert_density(1.5, "KG/l"), Some(1500.0));
        assert_eq!(convert_density(3.0, "G/ML"), Some(3.0));
        assert_eq!(convert_density(1.0, "LB/GAL"), Some(119.826));
    }

    #[test]
    fn test_linear_in_value() {
        for unit in DensityUnit::ALL {
            let one = convert_density(1.0, unit.symbol()).unwrap();
            for value in [0.0, 0.5, 3.0, 12.25] {
                assert_eq!(convert_density(value, unit.symbol()), Some(value * one));
            }
        }
    }

    #[test]
    fn test_unknown_unit_is_unsupported() {
        for value in [0.0, 1.0, -4.0, 1e9] {
            assert_eq!(convert_density(value, "unknown"), None);
        }
        assert_eq!(convert_density(5.0, "stone"), None);
        assert_eq!(convert_density(5.0, "gml"), None);
    }

    #[test]
    fn test_match_keys_are_normalized_symbols() {
        for unit in DensityUnit::ALL {
            let normalized: String = unit
                .symbol()
                .to_lowercase()
                .chars()
                .filter(|c| *c != ' ' && *c != '/')
                .collect();
            assert_eq!(unit.match_key(), normalized);
        }
    }
}
