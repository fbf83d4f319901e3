// Pipeline core - stage orchestration

use tracing::debug;

use crate::core::report::StageReporter;
use crate::core::sequence::SequenceStore;
use crate::error::{PipelineError, Result};
use crate::input::InputSource;
use crate::rng::DrawStream;

/// Everything a stage may touch: the named sequences, the single draw
/// stream, the reporter and the input source. The draw stream lives here
/// rather than in the store so it is handed out by mutable reference only,
/// never cloned.
pub struct StageContext {
    pub sequences: SequenceStore,
    pub rng: DrawStream,
    pub reporter: StageReporter,
    pub input: InputSource,
    /// Final stage emits JSON instead of text lines when set
    pub json_report: bool,
}

impl StageContext {
    pub fn new(rng: DrawStream, input: InputSource) -> Self {
        Self {
            sequences: SequenceStore::new(),
            rng,
            reporter: StageReporter::stdout(),
            input,
            json_report: false,
        }
    }

    pub fn with_reporter(mut self, reporter: StageReporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_json_report(mut self, json_report: bool) -> Self {
        self.json_report = json_report;
        self
    }
}

/// One transformation step in the fixed pipeline.
pub trait StageNode: Send + Sync {
    fn name(&self) -> String;

    /// Names of the sequences the stage reads; all must exist before it runs
    fn input(&self) -> Vec<String>;

    /// Names of the sequences present after the stage has run
    fn output(&self) -> Vec<String>;

    fn process(&self, ctx: &mut StageContext) -> Result<()>;
}

/// Pipeline - executes stages strictly in insertion order.
pub struct Pipeline {
    name: String,
    nodes: Vec<Box<dyn StageNode>>,
    external_inputs: Vec<String>,
}

impl Pipeline {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            external_inputs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare sequences that will be present in the initial store
    pub fn with_external_inputs(mut self, inputs: Vec<String>) -> Self {
        self.external_inputs = inputs;
        self
    }

    /// Append a stage, checking that every sequence it reads is produced by
    /// an earlier stage or listed as an external input.
    pub fn add_node(mut self, node: Box<dyn StageNode>) -> Result<Self> {
        let mut available = self.external_inputs.clone();
        for existing in &self.nodes {
            available.extend(existing.output());
        }

        let missing: Vec<String> = node
            .input()
            .into_iter()
            .filter(|input| !available.iter().any(|source| source == input))
            .collect();

        if !missing.is_empty() {
            return Err(PipelineError::ConfigError {
                message: format!(
                    "Stage '{}' reads sequences {:?} that no earlier stage produces.\n\
                     Available sources (previous stage outputs + external inputs): {:?}",
                    node.name(),
                    missing,
                    available
                ),
            }
            .into());
        }

        debug!(
            "Adding stage '{}' to pipeline '{}'. Inputs: {:?}",
            node.name(),
            self.name,
            node.input()
        );

        self.nodes.push(node);
        Ok(self)
    }

    pub fn execute(&self, mut ctx: StageContext) -> Result<StageContext> {
        debug!(
            "Executing pipeline '{}' with {} stages",
            self.name,
            self.nodes.len()
        );

        for (index, node) in self.nodes.iter().enumerate() {
            debug!("Processing stage {}: '{}'", index + 1, node.name());

            self.validate_input(node.as_ref(), &ctx)?;

            node.process(&mut ctx)?;

            self.validate_output(node.as_ref(), &ctx)?;

            debug!("Stage '{}' processed successfully", node.name());
        }

        debug!("Pipeline '{}' executed successfully", self.name);
        Ok(ctx)
    }

    fn validate_input(&self, node: &dyn StageNode, ctx: &StageContext) -> Result<()> {
        for input in node.input() {
            if !ctx.sequences.contains(&input) {
                return Err(PipelineError::MissingInput {
                    stage: node.name(),
                    required: input,
                }
                .into());
            }
        }
        Ok(())
    }

    fn validate_output(&self, node: &dyn StageNode, ctx: &StageContext) -> Result<()> {
        for output in node.output() {
            if !ctx.sequences.contains(&output) {
                return Err(PipelineError::MissingOutput {
                    stage: node.name(),
                    required: output,
                }
                .into());
            }
        }
        Ok(())
    }
}
