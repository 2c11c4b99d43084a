use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKind {
    Distance,
    Area,
}

/// Selection state for the 3D measurement widgets.
///
/// Only one measurement can run at a time; activating one clears whatever
/// the other had drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeasureTools {
    active: Option<MeasurementKind>,
}

impl MeasureTools {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<MeasurementKind> {
        self.active
    }

    /// Activate a measurement, returning the kind that must be cleared
    /// first (the previously active widget, if any).
    pub fn activate(&mut self, kind: MeasurementKind) -> Option<MeasurementKind> {
        let previous = self.active.take();
        self.active = Some(kind);
        previous
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{MeasureTools, MeasurementKind};

    #[test]
    fn activating_reports_previous_widget() {
        let mut tools = MeasureTools::new();
        assert_eq!(tools.activate(MeasurementKind::Distance), None);
        assert_eq!(
            tools.activate(MeasurementKind::Area),
            Some(MeasurementKind::Distance)
        );
        assert_eq!(tools.active(), Some(MeasurementKind::Area));
    }

    #[test]
    fn clear_deactivates_everything() {
        let mut tools = MeasureTools::new();
        tools.activate(MeasurementKind::Distance);
        tools.clear();
        assert_eq!(tools.active(), None);
    }
}
