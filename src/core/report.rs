//! Stage output rendering.

use serde::Serialize;

use crate::error::Result;

/// Render a sequence as its stage lines print it: comma-space separated,
/// no trailing separator, empty sequence as the empty string.
pub fn render(values: &[i64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Machine-readable rendering of the surviving sequences, emitted by the
/// final stage when JSON output is requested.
#[derive(Serialize)]
pub struct FinalReport<'a> {
    #[serde(rename = "mySequence")]
    pub my_sequence: &'a [i64],
    #[serde(rename = "mySequence_2")]
    pub my_sequence_2: &'a [i64],
    #[serde(rename = "mySequence_3_plus")]
    pub my_sequence_3_plus: &'a [i64],
    #[serde(rename = "mySequence_4")]
    pub my_sequence_4: &'a [i64],
}

enum Sink {
    Stdout,
    Buffer(String),
}

/// Writes the numbered stage lines. Stage output owns stdout; diagnostics go
/// through `tracing` to stderr. The buffered sink exists so tests can assert
/// on the transcript.
pub struct StageReporter {
    next_stage: usize,
    sink: Sink,
}

impl StageReporter {
    pub fn stdout() -> Self {
        Self {
            next_stage: 1,
            sink: Sink::Stdout,
        }
    }

    pub fn buffered() -> Self {
        Self {
            next_stage: 1,
            sink: Sink::Buffer(String::new()),
        }
    }

    /// Emit the next numbered stage line: `N. text`
    pub fn stage(&mut self, text: impl AsRef<str>) {
        let line = format!("{}. {}", self.next_stage, text.as_ref());
        self.next_stage += 1;
        self.emit(&line);
    }

    /// Emit an unnumbered continuation line under the current stage
    pub fn continuation(&mut self, text: impl AsRef<str>) {
        let line = format!("    {}", text.as_ref());
        self.emit(&line);
    }

    /// Emit the final report as a single JSON document
    pub fn json(&mut self, report: &FinalReport) -> Result<()> {
        let doc = serde_json::to_string(report)?;
        self.next_stage += 1;
        self.emit(&doc);
        Ok(())
    }

    /// The accumulated transcript, if this reporter is buffered
    pub fn transcript(&self) -> Option<&str> {
        match &self.sink {
            Sink::Stdout => None,
            Sink::Buffer(buffer) => Some(buffer),
        }
    }

    fn emit(&mut self, line: &str) {
        match &mut self.sink {
            Sink::Stdout => println!("{line}"),
            Sink::Buffer(buffer) => {
                buffer.push_str(line);
                buffer.push('\n');
            }
        }
    }
}
