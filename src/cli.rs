use clap::Parser;
use tracing::debug;

use crate::error::Result;
use crate::input::InputSource;
use crate::pipeline::nodes::inspect::{
    CountOddNode, EqualRangeNode, FinalReportNode, FindSimpleNode, MinMaxNode, SumNode, TopKNode,
};
use crate::pipeline::nodes::source::{
    GenerateSequenceNode, OverwritePrefixNode, ReadInputNode, SecondSequenceNode,
};
use crate::pipeline::nodes::transform::{
    ClampNode, DifferenceNode, MergeNode, ResortNode, ReverseCopyNode, ShuffleNode, SortDedupNode,
    SquareMapNode, StripZerosNode,
};
use crate::pipeline::{Pipeline, StageContext};
use crate::rng::DrawStream;

/// Run a pseudo-random sequence and ten user-supplied integers through a
/// fixed chain of sequence transformations
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pin the generator seed for a reproducible run
    #[clap(short, long)]
    pub seed: Option<u64>,

    /// Print the final report as one JSON document
    #[clap(short, long)]
    pub json: bool,
}

/// Assemble the twenty stages in their fixed order.
pub fn build_pipeline() -> Result<Pipeline> {
    Pipeline::new("sequence-demo")
        .add_node(Box::new(GenerateSequenceNode))?
        .add_node(Box::new(ReadInputNode))?
        .add_node(Box::new(ShuffleNode))?
        .add_node(Box::new(SortDedupNode))?
        .add_node(Box::new(CountOddNode))?
        .add_node(Box::new(MinMaxNode))?
        .add_node(Box::new(FindSimpleNode))?
        .add_node(Box::new(SquareMapNode))?
        .add_node(Box::new(SecondSequenceNode))?
        .add_node(Box::new(SumNode))?
        .add_node(Box::new(OverwritePrefixNode))?
        .add_node(Box::new(DifferenceNode))?
        .add_node(Box::new(ClampNode))?
        .add_node(Box::new(StripZerosNode))?
        .add_node(Box::new(ReverseCopyNode))?
        .add_node(Box::new(TopKNode))?
        .add_node(Box::new(ResortNode))?
        .add_node(Box::new(MergeNode))?
        .add_node(Box::new(EqualRangeNode))?
        .add_node(Box::new(FinalReportNode))
}

pub fn run_command(seed: Option<u64>, json: bool) -> Result<()> {
    let rng = match seed {
        Some(value) => DrawStream::from_seed_value(value),
        None => DrawStream::from_clock(),
    };
    debug!("Draw stream seeded with {}", rng.seed());

    let ctx = StageContext::new(rng, InputSource::Stdin).with_json_report(json);

    let pipeline = build_pipeline()?;
    pipeline.execute(ctx)?;
    Ok(())
}
