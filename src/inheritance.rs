//! Inheritance with access levels, expressed through composition.
//!
//! Every specialization *holds* a [`CarCore`] instead of extending a base
//! class. What a specialization exposes is decided by which traits it
//! implements:
//!
//! | specialization | base behavior exposed            |
//! |----------------|----------------------------------|
//! | [`ElectricCar`] | all of [`CarControls`] ("public") |
//! | [`ManualCar`]   | none, only its own report ("private") |
//! | [`HybridCar`]   | none, only its own methods ("protected") |

// =============================================================================
// Shared state
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CarCore {
    pub brand: String,
    // Only reachable through `display_info`, like a private base member.
    fuel_type: String,
    // Readable by specializations in this module, like a protected member.
    pub(crate) speed: u32,
}

impl CarCore {
    pub fn new(brand: impl Into<String>, fuel_type: impl Into<String>, speed: u32) -> Self {
        Self {
            brand: brand.into(),
            fuel_type: fuel_type.into(),
            speed,
        }
    }
}

impl Default for CarCore {
    fn default() -> Self {
        Self::new("Generic", "Petrol", 0)
    }
}

/// The public surface of a car. Implementing it is the equivalent of
/// inheriting publicly.
pub trait CarControls {
    fn core(&self) -> &CarCore;

    fn start(&self) -> String {
        format!("{} is starting.", self.core().brand)
    }

    fn stop(&self) -> String {
        format!("{} is stopping.", self.core().brand)
    }

    fn display_info(&self) -> String {
        let core = self.core();
        format!(
            "Brand: {}, Fuel: {}, Speed: {} km/h",
            core.brand, core.fuel_type, core.speed
        )
    }
}

// =============================================================================
// Base car
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Car {
    core: CarCore,
}

impl Car {
    pub fn new(brand: impl Into<String>, fuel_type: impl Into<String>, speed: u32) -> Self {
        Self {
            core: CarCore::new(brand, fuel_type, speed),
        }
    }
}

impl CarControls for Car {
    fn core(&self) -> &CarCore {
        &self.core
    }
}

// =============================================================================
// Public specialization
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ElectricCar {
    core: CarCore,
    pub battery_percentage: u8,
}

impl ElectricCar {
    pub fn new(brand: impl Into<String>, speed: u32, battery_percentage: u8) -> Self {
        Self {
            core: CarCore::new(brand, "Electric", speed),
            battery_percentage,
        }
    }

    pub fn charge(&self) -> String {
        format!(
            "{} is charging. Battery: {}%",
            self.core.brand, self.battery_percentage
        )
    }
}

impl CarControls for ElectricCar {
    fn core(&self) -> &CarCore {
        &self.core
    }
}

// =============================================================================
// Private specialization
// =============================================================================

/// Uses the base state internally but offers none of [`CarControls`].
#[derive(Debug, Clone, PartialEq)]
pub struct ManualCar {
    core: CarCore,
    pub gear_count: u8,
}

impl ManualCar {
    pub fn new(brand: impl Into<String>, speed: u32, gear_count: u8) -> Self {
        Self {
            core: CarCore::new(brand, "Petrol", speed),
            gear_count,
        }
    }

    pub fn show_manual_info(&self) -> String {
        format!(
            "Manual Car - Brand: {}, Gears: {}, Speed: {}",
            self.core.brand, self.gear_count, self.core.speed
        )
    }
}

// =============================================================================
// Protected specialization
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct HybridCar {
    core: CarCore,
    pub is_electric_mode: bool,
}

impl HybridCar {
    pub fn new(brand: impl Into<String>, speed: u32, is_electric_mode: bool) -> Self {
        Self {
            core: CarCore::new(brand, "Hybrid", speed),
            is_electric_mode,
        }
    }

    fn mode_label(&self) -> &'static str {
        if self.is_electric_mode {
            "Electric"
        } else {
            "Manual"
        }
    }

    pub fn toggle_mode(&mut self) -> String {
        self.is_electric_mode = !self.is_electric_mode;
        tracing::debug!(brand = %self.core.brand, electric = self.is_electric_mode, "mode toggled");
        format!("{} is now in {} mode.", self.core.brand, self.mode_label())
    }

    pub fn show_hybrid_info(&self) -> String {
        format!(
            "Hybrid Car - Brand: {}, Speed: {}, Mode: {}",
            self.core.brand,
            self.core.speed,
            self.mode_label()
        )
    }
}
