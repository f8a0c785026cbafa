//! Vehicle types and the `(type, make) → models` lookup table.

use super::tables;
use crate::pools::{Pool, PoolError};
use std::collections::HashMap;
use std::fmt;

/// Vehicle type, drawn before make and model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Auto,
    Truck,
    Suv,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [Self::Auto, Self::Truck, Self::Suv];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Truck => "truck",
            Self::Suv => "suv",
        }
    }

    /// Multiplier applied to the base vehicle value.
    pub fn value_multiplier(&self) -> f32 {
        match self {
            Self::Auto => 2.0,
            Self::Truck => 3.0,
            Self::Suv => 4.0,
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Auto => 0,
            Self::Truck => 1,
            Self::Suv => 2,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model lists keyed by `(type, make)`, with a declared default make.
///
/// Combinations without a dedicated list fall back to the default make's list
/// for the same vehicle type.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    default_make: String,
    defaults: [Pool<String>; 3],
    entries: HashMap<(VehicleType, String), Pool<String>>,
}

impl ModelCatalog {
    /// Build a catalog. `entries` must hold a list for every vehicle type of
    /// `default_make`.
    pub fn new(
        default_make: impl Into<String>,
        entries: HashMap<(VehicleType, String), Pool<String>>,
    ) -> Result<Self, PoolError> {
        let default_make = default_make.into();
        let default_for = |vehicle_type: VehicleType| {
            entries
                .get(&(vehicle_type, default_make.clone()))
                .cloned()
                .ok_or_else(|| PoolError::MissingDefaultModels {
                    make: default_make.clone(),
                    vehicle_type: vehicle_type.to_string(),
                })
        };
        let defaults = [
            default_for(VehicleType::Auto)?,
            default_for(VehicleType::Truck)?,
            default_for(VehicleType::Suv)?,
        ];
        Ok(Self {
            default_make,
            defaults,
            entries,
        })
    }

    /// The Ford / GM / Chrysler catalog, defaulting to Ford.
    pub fn standard() -> Result<Self, PoolError> {
        let lists: [(VehicleType, &str, &[&str]); 9] = [
            (VehicleType::Auto, "Ford", &tables::FORD_AUTO_MODELS),
            (VehicleType::Truck, "Ford", &tables::FORD_TRUCK_MODELS),
            (VehicleType::Suv, "Ford", &tables::FORD_SUV_MODELS),
            (VehicleType::Auto, "GM", &tables::GM_AUTO_MODELS),
            (VehicleType::Truck, "GM", &tables::GM_TRUCK_MODELS),
            (VehicleType::Suv, "GM", &tables::GM_SUV_MODELS),
            (VehicleType::Auto, "Chrysler", &tables::CHRYSLER_AUTO_MODELS),
            (VehicleType::Truck, "Chrysler", &tables::CHRYSLER_TRUCK_MODELS),
            (VehicleType::Suv, "Chrysler", &tables::CHRYSLER_SUV_MODELS),
        ];

        let mut entries = HashMap::new();
        for (vehicle_type, make, models) in lists {
            let pool = Pool::of_strs(format!("models:{vehicle_type}:{make}"), models)?;
            entries.insert((vehicle_type, make.to_string()), pool);
        }
        Self::new("Ford", entries)
    }

    pub fn default_make(&self) -> &str {
        &self.default_make
    }

    /// Whether `(vehicle_type, make)` has a dedicated model list.
    pub fn is_declared(&self, vehicle_type: VehicleType, make: &str) -> bool {
        self.entries.contains_key(&(vehicle_type, make.to_string()))
    }

    /// Model list for `(vehicle_type, make)`, or the default make's list.
    pub fn models_for(&self, vehicle_type: VehicleType, make: &str) -> &Pool<String> {
        self.entries
            .get(&(vehicle_type, make.to_string()))
            .unwrap_or(&self.defaults[vehicle_type.index()])
    }
}
