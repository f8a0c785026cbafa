//! `vehicleinfo` array.
//!
//! Type is drawn first and make independently; the model comes from the
//! `(type, make)` list. `value` and `tax` are derived, not sampled.

use crate::reference::{ReferenceData, VehicleType};
use crate::sampler::Sampler;
use kvgen_core::FieldValue;
use rand::{CryptoRng, RngCore};
use std::collections::BTreeMap;

/// Value of an auto before the type multiplier.
pub const BASE_VALUE: f32 = 10371.59;

/// Tax owed per unit of value.
pub const TAX_RATE: f32 = 0.0273;

pub const MIN_VEHICLES: usize = 1;
pub const MAX_VEHICLES: usize = 3;

/// One generated vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub vehicle_type: VehicleType,
    pub make: String,
    pub model: String,
    pub class: String,
    pub color: String,
    pub value: f32,
    pub tax: f64,
    pub paid: bool,
}

impl Vehicle {
    pub fn generate<R: RngCore + CryptoRng>(sampler: &mut Sampler<R>, data: &ReferenceData) -> Self {
        let vehicle_type = *sampler.choose(&data.vehicle_types);
        let make = sampler.choose(&data.makes).clone();
        let class = sampler.choose(&data.classes).clone();
        let color = sampler.choose(&data.colors).clone();
        let model = sampler
            .choose(data.models.models_for(vehicle_type, &make))
            .clone();

        let value = vehicle_value(vehicle_type, sampler.sample_unit());
        let tax = vehicle_tax(value);
        let paid = sampler.sample_bool();

        Self {
            vehicle_type,
            make,
            model,
            class,
            color,
            value,
            tax,
            paid,
        }
    }

    pub fn into_value(self) -> FieldValue {
        let mut fields = BTreeMap::new();
        fields.insert(
            "type".to_string(),
            FieldValue::String(self.vehicle_type.as_str().to_string()),
        );
        fields.insert("make".to_string(), FieldValue::String(self.make));
        fields.insert("model".to_string(), FieldValue::String(self.model));
        fields.insert("class".to_string(), FieldValue::String(self.class));
        fields.insert("color".to_string(), FieldValue::String(self.color));
        fields.insert("value".to_string(), FieldValue::Float(self.value));
        fields.insert("tax".to_string(), FieldValue::Double(self.tax));
        fields.insert("paid".to_string(), FieldValue::Boolean(self.paid));
        FieldValue::Record(fields)
    }
}

/// `multiplier * BASE_VALUE + delta`, in single precision.
pub fn vehicle_value(vehicle_type: VehicleType, delta: f32) -> f32 {
    vehicle_type.value_multiplier() * BASE_VALUE + delta
}

/// `value * TAX_RATE` in single precision, widened.
pub fn vehicle_tax(value: f32) -> f64 {
    f64::from(value * TAX_RATE)
}

/// Between one and three vehicles.
pub fn vehicles<R: RngCore + CryptoRng>(sampler: &mut Sampler<R>, data: &ReferenceData) -> Vec<Vehicle> {
    let count = sampler.sample_range(MIN_VEHICLES, MAX_VEHICLES);
    (0..count).map(|_| Vehicle::generate(sampler, data)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_belongs_to_type_and_make() {
        let data = ReferenceData::standard().unwrap();
        let mut sampler = Sampler::seeded(42);
        for _ in 0..500 {
            let v = Vehicle::generate(&mut sampler, &data);
            assert!(data.models.models_for(v.vehicle_type, &v.make).contains(&v.model));
            assert!(data.classes.contains(&v.class));
            assert!(data.colors.contains(&v.color));
        }
    }

    #[test]
    fn test_value_and_tax_are_derived() {
        let data = ReferenceData::standard().unwrap();
        let mut sampler = Sampler::seeded(42);
        for _ in 0..500 {
            let v = Vehicle::generate(&mut sampler, &data);
            let base = v.vehicle_type.value_multiplier() * BASE_VALUE;
            let delta = v.value - base;
            assert!((0.0..=1.0).contains(&delta), "delta {delta} out of range");
            assert_eq!(v.tax, f64::from(v.value * TAX_RATE));
        }
    }

    #[test]
    fn test_value_formula() {
        assert_eq!(vehicle_value(VehicleType::Auto, 0.0), 2.0 * BASE_VALUE);
        assert_eq!(vehicle_value(VehicleType::Suv, 0.5), 4.0 * BASE_VALUE + 0.5);
        assert_eq!(vehicle_tax(1000.0), f64::from(1000.0_f32 * TAX_RATE));
    }

    #[test]
    fn test_vehicle_count_bounds() {
        let data = ReferenceData::standard().unwrap();
        let mut sampler = Sampler::seeded(42);
        for _ in 0..200 {
            let n = vehicles(&mut sampler, &data).len();
            assert!((MIN_VEHICLES..=MAX_VEHICLES).contains(&n));
        }
    }
}
