//! Association: a person may use a car without owning it.

/// A car that exists independently of anyone who drives it.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub model: String,
}

impl Car {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    pub fn drive(&self) -> String {
        format!("Driving {}", self.model)
    }
}

/// Holds an optional borrow of a [`Car`]; never responsible for its lifetime.
#[derive(Debug, Clone)]
pub struct Person<'a> {
    pub name: String,
    car: Option<&'a Car>,
}

impl<'a> Person<'a> {
    pub fn new(name: impl Into<String>, car: Option<&'a Car>) -> Self {
        Self {
            name: name.into(),
            car,
        }
    }

    pub fn car(&self) -> Option<&'a Car> {
        self.car
    }

    pub fn use_car(&self) -> String {
        match self.car {
            Some(car) => car.drive(),
            None => format!("{} has no car.", self.name),
        }
    }
}
