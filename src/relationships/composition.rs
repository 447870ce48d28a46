//! Composition: a house creates its rooms and drops them with itself.

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub name: String,
}

impl Room {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn describe(&self) -> String {
        format!("This is a {}.", self.name)
    }
}

impl Drop for Room {
    fn drop(&mut self) {
        tracing::debug!(room = %self.name, "room released");
    }
}

/// Owns its rooms by value: rooms are created by the house and dropped with it.
#[derive(Debug)]
pub struct House {
    pub address: String,
    rooms: Vec<Room>,
}

impl House {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            rooms: Vec::new(),
        }
    }

    pub fn add_room(&mut self, name: impl Into<String>) {
        self.rooms.push(Room::new(name));
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn describe_house(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rooms.len() + 1);
        lines.push(format!("House at {} has:", self.address));
        lines.extend(self.rooms.iter().map(Room::describe));
        lines
    }
}

impl Drop for House {
    fn drop(&mut self) {
        tracing::debug!(address = %self.address, rooms = self.rooms.len(), "house released");
    }
}
