use serde::Serialize;

/// One labelled result value, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// What a formula produces; the simulator stamps its identity on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    metrics: Vec<Metric>,
    notes: Vec<String>,
    steps: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metric(
        mut self,
        key: &'static str,
        label: &'static str,
        value: impl Into<String>,
    ) -> Self {
        self.metrics.push(Metric {
            key,
            label,
            value: value.into(),
        });
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Append a worked step; numbering is added here.
    pub fn step(mut self, text: impl AsRef<str>) -> Self {
        let number = self.steps.len() + 1;
        self.steps.push(format!("Step {number}: {}", text.as_ref()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutcome {
    pub module: &'static str,
    pub simulator: &'static str,
    pub title: &'static str,
    pub metrics: Vec<Metric>,
    pub notes: Vec<String>,
    pub steps: Vec<String>,
}

impl SimulationOutcome {
    pub(crate) fn from_report(
        module: &'static str,
        simulator: &'static str,
        title: &'static str,
        report: Report,
    ) -> Self {
        Self {
            module,
            simulator,
            title,
            metrics: report.metrics,
            notes: report.notes,
            steps: report.steps,
        }
    }

    /// Value of the metric with `key`.
    pub fn metric(&self, key: &str) -> Option<&str> {
        self.metrics
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.value.as_str())
    }
}
