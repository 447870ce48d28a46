//! Aggregation: a department groups employees it only borrows.

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
}

impl Employee {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn work(&self) -> String {
        format!("{} is working.", self.name)
    }
}

/// Groups employees it does not own. Dropping a department leaves every
/// member untouched.
#[derive(Debug, Clone)]
pub struct Department<'a> {
    pub name: String,
    employees: Vec<&'a Employee>,
}

impl<'a> Department<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            employees: Vec::new(),
        }
    }

    pub fn add_employee(&mut self, employee: &'a Employee) {
        tracing::debug!(department = %self.name, employee = %employee.name, "employee added");
        self.employees.push(employee);
    }

    pub fn employees(&self) -> &[&'a Employee] {
        &self.employees
    }

    /// Department header followed by one line per employee, in the order
    /// they were added.
    pub fn show_employees(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.employees.len() + 1);
        lines.push(format!("Department: {}", self.name));
        lines.extend(self.employees.iter().map(|e| e.work()));
        lines
    }
}
