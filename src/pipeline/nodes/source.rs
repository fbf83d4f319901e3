//! Stages that create or extend sequences.

use tracing::debug;

use crate::config::constants;
use crate::core::report::render;
use crate::error::Result;
use crate::pipeline::core::{StageContext, StageNode};
use crate::pipeline::keys;

/// Generator node - draw the initial values into `mySequence`
pub struct GenerateSequenceNode;

impl StageNode for GenerateSequenceNode {
    fn name(&self) -> String {
        "GenerateSequence".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![]
    }

    fn output(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string()]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let mut values = Vec::with_capacity(constants::GENERATED_COUNT);
        for _ in 0..constants::GENERATED_COUNT {
            values.push(ctx.rng.draw_in(constants::FIRST_RANGE));
        }

        debug!(
            "Generated {} values in {:?}",
            values.len(),
            constants::FIRST_RANGE
        );

        ctx.reporter
            .stage(format!("Generated sequence: {}", render(&values)));
        ctx.sequences.insert(keys::MY_SEQUENCE, values);
        Ok(())
    }
}

/// Input node - append the user-supplied integers to `mySequence`
pub struct ReadInputNode;

impl StageNode for ReadInputNode {
    fn name(&self) -> String {
        "ReadInput".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string()]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        // Prompt first: the read below blocks on interactive runs
        ctx.reporter.stage("Enter ten numbers:");

        let supplied = ctx.input.read_integers(constants::INPUT_COUNT)?;
        debug!("Read {} values from the input source", supplied.len());

        ctx.sequences
            .get_mut(keys::MY_SEQUENCE)?
            .extend_from_slice(&supplied);
        Ok(())
    }
}

/// Second generator node - build `mySequence_2`, one draw per element of
/// `mySequence`, continuing the same draw stream
pub struct SecondSequenceNode;

impl StageNode for SecondSequenceNode {
    fn name(&self) -> String {
        "SecondSequence".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE_2.to_string()]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let len = ctx.sequences.get(keys::MY_SEQUENCE)?.len();

        let mut values = Vec::with_capacity(len);
        for _ in 0..len {
            values.push(ctx.rng.draw_in(constants::SECOND_RANGE));
        }

        ctx.reporter
            .stage(format!("Second generated sequence: {}", render(&values)));
        ctx.sequences.insert(keys::MY_SEQUENCE_2, values);
        Ok(())
    }
}

/// Prefix overwrite node - set a random-length prefix of `mySequence_2` to 1.
///
/// The count is drawn from `[1, max(1, |mySequence|/2)]`; the clamp keeps the
/// draw well-defined when deduplication has shrunk the store to one element.
pub struct OverwritePrefixNode;

impl StageNode for OverwritePrefixNode {
    fn name(&self) -> String {
        "OverwritePrefix".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string(), keys::MY_SEQUENCE_2.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE_2.to_string()]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let len = ctx.sequences.get(keys::MY_SEQUENCE)?.len();
        let upper = (len / 2).max(1);
        let count = ctx.rng.draw_count(upper);

        debug!("Overwriting first {} of {} elements with 1", count, len);

        let second = ctx.sequences.get_mut(keys::MY_SEQUENCE_2)?;
        for value in second.iter_mut().take(count) {
            *value = 1;
        }

        let line = format!("mySequence_2 with leading ones: {}", render(second));
        ctx.reporter.stage(line);
        Ok(())
    }
}
