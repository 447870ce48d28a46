//! Abstraction: callers see only the [`Drivable`] interface.

pub trait Drivable {
    fn start_engine(&self) -> String;
    fn stop_engine(&self) -> String;
    fn drive(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tesla {
    pub name: String,
    pub model: String,
    pub is_electric: bool,
    pub current_speed: u32,
    pub max_speed: u32,
}

impl Tesla {
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        is_electric: bool,
        current_speed: u32,
        max_speed: u32,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            is_electric,
            current_speed,
            max_speed,
        }
    }
}

impl Drivable for Tesla {
    fn start_engine(&self) -> String {
        "Tesla engine started".to_string()
    }

    fn stop_engine(&self) -> String {
        "Tesla engine stopped".to_string()
    }

    fn drive(&self) -> String {
        "Tesla is driving".to_string()
    }
}

impl Drop for Tesla {
    fn drop(&mut self) {
        tracing::debug!(name = %self.name, model = %self.model, "car released");
    }
}
