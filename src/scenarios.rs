//! Driver routines: one fixed, straight-line walk-through per concept.
//!
//! Each routine records what it would print into a [`Transcript`]; the
//! binaries hand that to [`crate::console`].

use crate::abstraction::{Drivable, Tesla};
use crate::account::BankAccount;
use crate::http_request::{HttpRequest, HttpRequestBuilder, Method, RequestDirector, RequestError};
use crate::inheritance::{self, CarControls};
use crate::polymorphism::{self, BaseCar, Vehicle};
use crate::relationships::aggregation::{Department, Employee};
use crate::relationships::association::{Car, Person};
use crate::relationships::composition::House;

#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Text(String),
    Heading(String),
    Separator(&'static str),
    Blank,
}

impl Line {
    pub const SEPARATOR: &'static str = "------------------";
    pub const WIDE_SEPARATOR: &'static str = "----------------------------";

    pub fn as_plain(&self) -> &str {
        match self {
            Line::Text(text) | Line::Heading(text) => text.as_str(),
            Line::Separator(rule) => *rule,
            Line::Blank => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    name: &'static str,
    lines: Vec<Line>,
}

impl Transcript {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            lines: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.lines.push(Line::Text(text.into()));
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines.into_iter().map(Line::Text));
    }

    pub fn heading(&mut self, title: impl Into<String>) {
        self.lines.push(Line::Heading(title.into()));
    }

    pub fn separator(&mut self) {
        self.lines.push(Line::Separator(Line::SEPARATOR));
    }

    pub fn wide_separator(&mut self) {
        self.lines.push(Line::Separator(Line::WIDE_SEPARATOR));
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::Blank);
    }

    /// Uncolored rendering, one line per entry.
    pub fn plain_lines(&self) -> Vec<&str> {
        self.lines.iter().map(Line::as_plain).collect()
    }
}

pub fn encapsulation() -> Transcript {
    tracing::info!("running encapsulation scenario");
    let mut out = Transcript::new("encapsulation");

    let mut account = BankAccount::new();
    account.deposit(1000.0);
    account.withdraw(500.0);
    out.text(format!("Current balance: {}", account.balance()));
    out
}

pub fn inheritance() -> Transcript {
    tracing::info!("running inheritance scenario");
    let mut out = Transcript::new("inheritance");

    let tesla = inheritance::ElectricCar::new("Tesla Model S", 250, 80);
    out.text(tesla.start());
    out.text(tesla.display_info());
    out.text(tesla.charge());
    out.text(tesla.stop());

    out.separator();

    let suzuki = inheritance::ManualCar::new("Suzuki Swift", 180, 5);
    out.text(suzuki.show_manual_info());

    out.separator();

    let mut toyota = inheritance::HybridCar::new("Toyota Prius", 200, true);
    out.text(toyota.toggle_mode());
    out.text(toyota.show_hybrid_info());
    out
}

pub fn polymorphism() -> Transcript {
    tracing::info!("running polymorphism scenario");
    let mut out = Transcript::new("polymorphism");

    let base = BaseCar::new("Generic", 60);
    let tesla = polymorphism::ElectricCar::new("Tesla", 120, 85);
    let suzuki = polymorphism::ManualCar::new("Suzuki", 80, "5-speed");
    let prius = polymorphism::HybridCar::new("Toyota Prius", 100, 22.5);

    out.text(base.start());
    out.text(base.start_in("Eco"));

    out.blank();
    out.heading("--- Overriding (Polymorphism) ---");

    let handles: [&dyn Vehicle; 3] = [&tesla, &suzuki, &prius];
    for car in handles {
        out.text(car.display_info());
    }
    out
}

pub fn abstraction() -> Transcript {
    tracing::info!("running abstraction scenario");
    let mut out = Transcript::new("abstraction");

    let car: Box<dyn Drivable> = Box::new(Tesla::new("Tesla", "Model S", true, 0, 200));
    out.text(car.start_engine());
    out.text(car.drive());
    out.text(car.stop_engine());
    out
}

pub fn association() -> Transcript {
    tracing::info!("running association scenario");
    let mut out = Transcript::new("association");

    let car = Car::new("Toyota");
    let alice = Person::new("Alice", Some(&car));
    out.text(alice.use_car());

    let bob = Person::new("Bob", None);
    out.text(bob.use_car());
    out
}

pub fn aggregation() -> Transcript {
    tracing::info!("running aggregation scenario");
    let mut out = Transcript::new("aggregation");

    let alice = Employee::new("Alice");
    let bob = Employee::new("Bob");

    let mut dept = Department::new("Engineering");
    dept.add_employee(&alice);
    dept.add_employee(&bob);
    out.extend(dept.show_employees());
    out
}

pub fn composition() -> Transcript {
    tracing::info!("running composition scenario");
    let mut out = Transcript::new("composition");

    let mut house = House::new("123 Main St");
    house.add_room("Living Room");
    house.add_room("Kitchen");
    out.extend(house.describe_house());
    out
}

pub fn http_builder() -> Result<Transcript, RequestError> {
    tracing::info!("running builder scenario");
    let mut out = Transcript::new("http_builder");

    let normal: HttpRequest = HttpRequestBuilder::new()
        .url("https://api.example.com")
        .method(Method::Post)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .query_param("key", "12345")
        .body(r#"{"name": "Aditya"}"#)
        .timeout(60)
        .build()?;
    out.extend(normal.execute());

    out.blank();
    out.wide_separator();
    out.blank();

    let get = RequestDirector::get("https://api.example.com/users")?;
    out.extend(get.execute());

    out.blank();
    out.wide_separator();
    out.blank();

    let post = RequestDirector::json_post(
        "https://api.example.com/users",
        r#"{"name": "Aditya", "email": "aditya@example.com"}"#,
    )?;
    out.extend(post.execute());
    Ok(out)
}
