//! Polymorphism: overriding through a trait object, and the Rust answer to
//! overloading (two differently named methods).

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct BaseCar {
    pub brand: String,
    pub speed: u32,
}

impl BaseCar {
    pub fn new(brand: impl Into<String>, speed: u32) -> Self {
        Self {
            brand: brand.into(),
            speed,
        }
    }
}

impl Default for BaseCar {
    fn default() -> Self {
        Self::new("Generic", 0)
    }
}

/// Anything that can describe itself as a vehicle.
///
/// `display_info` is the overridable operation. Calling it through a
/// `&dyn Vehicle` always reaches the concrete type's implementation.
pub trait Vehicle {
    fn base(&self) -> &BaseCar;

    fn display_info(&self) -> String;

    fn start(&self) -> String {
        format!("{} is starting.", self.base().brand)
    }

    fn start_in(&self, mode: &str) -> String {
        format!("{} is starting in {} mode.", self.base().brand, mode)
    }
}

impl Vehicle for BaseCar {
    fn base(&self) -> &BaseCar {
        self
    }

    fn display_info(&self) -> String {
        format!("Brand: {}, Speed: {} km/h", self.brand, self.speed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElectricCar {
    base: BaseCar,
    battery_level: u8,
}

impl ElectricCar {
    pub fn new(brand: impl Into<String>, speed: u32, battery_level: u8) -> Self {
        Self {
            base: BaseCar::new(brand, speed),
            battery_level,
        }
    }
}

impl Vehicle for ElectricCar {
    fn base(&self) -> &BaseCar {
        &self.base
    }

    fn display_info(&self) -> String {
        format!(
            "Electric Car - Brand: {}, Speed: {} km/h, Battery: {}%",
            self.base.brand, self.base.speed, self.battery_level
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManualCar {
    base: BaseCar,
    gear_type: String,
}

impl ManualCar {
    pub fn new(brand: impl Into<String>, speed: u32, gear_type: impl Into<String>) -> Self {
        Self {
            base: BaseCar::new(brand, speed),
            gear_type: gear_type.into(),
        }
    }
}

impl Vehicle for ManualCar {
    fn base(&self) -> &BaseCar {
        &self.base
    }

    fn display_info(&self) -> String {
        format!(
            "Manual Car - Brand: {}, Speed: {} km/h, Gear Type: {}",
            self.base.brand, self.base.speed, self.gear_type
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HybridCar {
    base: BaseCar,
    fuel_efficiency: f32,
}

impl HybridCar {
    pub fn new(brand: impl Into<String>, speed: u32, fuel_efficiency: f32) -> Self {
        Self {
            base: BaseCar::new(brand, speed),
            fuel_efficiency,
        }
    }
}

impl Vehicle for HybridCar {
    fn base(&self) -> &BaseCar {
        &self.base
    }

    fn display_info(&self) -> String {
        format!(
            "Hybrid Car - Brand: {}, Speed: {} km/h, Fuel Efficiency: {} km/l",
            self.base.brand, self.base.speed, self.fuel_efficiency
        )
    }
}

/// Heterogeneous, owning collection of vehicles.
#[derive(Default)]
pub struct Fleet {
    vehicles: Vec<Box<dyn Vehicle>>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, vehicle: impl Vehicle + 'static) {
        self.vehicles.push(Box::new(vehicle));
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn display_all(&self) -> Vec<String> {
        self.vehicles.iter().map(|v| v.display_info()).collect()
    }
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.vehicles.iter().map(|v| v.base().brand.as_str()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(vehicle: &dyn Vehicle) -> String {
        vehicle.display_info()
    }

    #[test]
    fn test_base_start_overloads() {
        let base = BaseCar::new("Generic", 60);
        assert_eq!(base.start(), "Generic is starting.");
        assert_eq!(base.start_in("Eco"), "Generic is starting in Eco mode.");
        assert_eq!(base.display_info(), "Brand: Generic, Speed: 60 km/h");
        assert_eq!(BaseCar::default(), BaseCar::new("Generic", 0));
    }

    #[test]
    fn test_dispatch_through_base_handle_reaches_variant() {
        let tesla = ElectricCar::new("Tesla", 120, 85);
        let suzuki = ManualCar::new("Suzuki", 80, "5-speed");
        let prius = HybridCar::new("Toyota Prius", 100, 22.5);

        assert_eq!(
            describe(&tesla),
            "Electric Car - Brand: Tesla, Speed: 120 km/h, Battery: 85%"
        );
        assert_eq!(
            describe(&suzuki),
            "Manual Car - Brand: Suzuki, Speed: 80 km/h, Gear Type: 5-speed"
        );
        assert_eq!(
            describe(&prius),
            "Hybrid Car - Brand: Toyota Prius, Speed: 100 km/h, Fuel Efficiency: 22.5 km/l"
        );
    }

    #[test]
    fn test_variants_never_fall_back_to_base_format() {
        let tesla = ElectricCar::new("Tesla", 120, 85);
        let base_format = tesla.base().display_info();
        assert_eq!(base_format, "Brand: Tesla, Speed: 120 km/h");
        assert_ne!(describe(&tesla), base_format);
    }

    #[test]
    fn test_variants_inherit_start() {
        let suzuki = ManualCar::new("Suzuki", 80, "5-speed");
        assert_eq!(suzuki.start(), "Suzuki is starting.");
        assert_eq!(suzuki.start_in("Sport"), "Suzuki is starting in Sport mode.");
    }

    #[test]
    fn test_fleet_displays_each_variant() {
        let mut fleet = Fleet::new();
        assert!(fleet.is_empty());
        fleet.add(BaseCar::default());
        fleet.add(ElectricCar::new("Tesla", 120, 85));
        fleet.add(HybridCar::new("Toyota Prius", 100, 22.5));

        let lines = fleet.display_all();
        assert_eq!(fleet.len(), 3);
        assert_eq!(lines[0], "Brand: Generic, Speed: 0 km/h");
        assert!(lines[1].starts_with("Electric Car"));
        assert!(lines[2].starts_with("Hybrid Car"));
        assert_eq!(format!("{fleet:?}"), r#"["Generic", "Tesla", "Toyota Prius"]"#);
    }
}
