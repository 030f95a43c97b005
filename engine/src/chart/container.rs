use std::cell::Cell;

/// The element a chart is drawn into. Width is read live on every resize.
pub trait Container {
    fn id(&self) -> &str;
    fn client_width(&self) -> u32;
    fn is_attached(&self) -> bool;

    fn is_ready(&self) -> bool {
        self.is_attached() && self.client_width() > 0
    }
}

// Container whose width is pushed in by whoever measures the real element.
#[derive(Debug, Default)]
pub struct MeasuredContainer {
    id: String,
    width: Cell<u32>,
    attached: Cell<bool>,
}

impl MeasuredContainer {
    /// A detached, zero-width container.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            width: Cell::new(0),
            attached: Cell::new(false),
        }
    }

    pub fn attached(id: impl Into<String>, width: u32) -> Self {
        let container = Self::new(id);
        container.attach(width);
        container
    }

    pub fn attach(&self, width: u32) {
        self.width.set(width);
        self.attached.set(true);
    }

    pub fn detach(&self) {
        self.attached.set(false);
    }

    pub fn set_width(&self, width: u32) {
        self.width.set(width);
    }
}

impl Container for MeasuredContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn client_width(&self) -> u32 {
        self.width.get()
    }

    fn is_attached(&self) -> bool {
        self.attached.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readiness() {
        let c = MeasuredContainer::new("chart");
        assert!(!c.is_ready());
        c.set_width(800);
        assert!(!c.is_ready());
        c.attach(0);
        assert!(!c.is_ready());
        c.set_width(640);
        assert!(c.is_ready());
        c.detach();
        assert!(!c.is_ready());
    }
}
