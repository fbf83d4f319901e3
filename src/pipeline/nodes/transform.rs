//! Stages that derive new sequences or reshape existing ones.

use crate::core::report::render;
use crate::error::Result;
use crate::pipeline::core::{StageContext, StageNode};
use crate::pipeline::keys;
use crate::util::algo;

/// Shuffle node - permute `mySequence` uniformly in place
pub struct ShuffleNode;

impl StageNode for ShuffleNode {
    fn name(&self) -> String {
        "Shuffle".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string()]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let StageContext {
            sequences,
            rng,
            reporter,
            ..
        } = ctx;

        let seq = sequences.get_mut(keys::MY_SEQUENCE)?;
        rng.shuffle(seq);

        reporter.stage(format!("Shuffled sequence: {}", render(seq)));
        Ok(())
    }
}

/// Sort + dedup node - sort `mySequence` ascending and drop duplicate values
pub struct SortDedupNode;

impl StageNode for SortDedupNode {
    fn name(&self) -> String {
        "SortDedup".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string()]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let seq = ctx.sequences.get_mut(keys::MY_SEQUENCE)?;
        seq.sort_unstable();
        seq.dedup();

        let line = format!("Sorted unique sequence: {}", render(seq));
        ctx.reporter.stage(line);
        Ok(())
    }
}

/// Square map node - build `mySquareSequence` from the squares of `mySequence`
pub struct SquareMapNode;

impl StageNode for SquareMapNode {
    fn name(&self) -> String {
        "SquareMap".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![keys::MY_SQUARE_SEQUENCE.to_string()]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let squares: Vec<i64> = ctx
            .sequences
            .get(keys::MY_SEQUENCE)?
            .iter()
            .map(|&value| value * value)
            .collect();

        ctx.reporter
            .stage(format!("Squared sequence: {}", render(&squares)));
        ctx.sequences.insert(keys::MY_SQUARE_SEQUENCE, squares);
        Ok(())
    }
}

/// Difference node - build `mySequence_3` as the element-wise difference of
/// `mySequence` and `mySequence_2`. The zip stops at the shorter input; both
/// always have equal length here.
pub struct DifferenceNode;

impl StageNode for DifferenceNode {
    fn name(&self) -> String {
        "Difference".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string(), keys::MY_SEQUENCE_2.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE_3.to_string()]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let lhs = ctx.sequences.get(keys::MY_SEQUENCE)?;
        let rhs = ctx.sequences.get(keys::MY_SEQUENCE_2)?;

        let diff: Vec<i64> = lhs
            .iter()
            .zip(rhs.iter())
            .map(|(&a, &b)| a - b)
            .collect();

        let line = format!("Difference sequence: {}", render(&diff));
        ctx.sequences.insert(keys::MY_SEQUENCE_3, diff);
        ctx.reporter.stage(line);
        Ok(())
    }
}

/// Clamp node - build `mySequence_3_plus` by mapping negatives to zero
pub struct ClampNode;

impl StageNode for ClampNode {
    fn name(&self) -> String {
        "Clamp".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE_3.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE_3_PLUS.to_string()]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let clamped: Vec<i64> = ctx
            .sequences
            .get(keys::MY_SEQUENCE_3)?
            .iter()
            .map(|&value| value.max(0))
            .collect();

        let line = format!("Non-negative difference sequence: {}", render(&clamped));
        ctx.sequences.insert(keys::MY_SEQUENCE_3_PLUS, clamped);
        ctx.reporter.stage(line);
        Ok(())
    }
}

/// Zero strip node - remove every zero from `mySequence_3_plus` in place,
/// keeping survivor order
pub struct StripZerosNode;

impl StageNode for StripZerosNode {
    fn name(&self) -> String {
        "StripZeros".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE_3_PLUS.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE_3_PLUS.to_string()]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let seq = ctx.sequences.get_mut(keys::MY_SEQUENCE_3_PLUS)?;
        seq.retain(|&value| value != 0);

        let line = format!("Difference sequence without zeros: {}", render(seq));
        ctx.reporter.stage(line);
        Ok(())
    }
}

/// Reverse copy node - build `mySequence_3_plus_reversed`
pub struct ReverseCopyNode;

impl StageNode for ReverseCopyNode {
    fn name(&self) -> String {
        "ReverseCopy".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE_3_PLUS.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE_3_PLUS_REVERSED.to_string()]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let reversed: Vec<i64> = ctx
            .sequences
            .get(keys::MY_SEQUENCE_3_PLUS)?
            .iter()
            .rev()
            .copied()
            .collect();

        let line = format!("Reversed difference sequence: {}", render(&reversed));
        ctx.sequences.insert(keys::MY_SEQUENCE_3_PLUS_REVERSED, reversed);
        ctx.reporter.stage(line);
        Ok(())
    }
}

/// Re-sort node - sort `mySequence` and `mySequence_2` ascending in place
/// ahead of the merge
pub struct ResortNode;

impl StageNode for ResortNode {
    fn name(&self) -> String {
        "Resort".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string(), keys::MY_SEQUENCE_2.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string(), keys::MY_SEQUENCE_2.to_string()]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        ctx.sequences.get_mut(keys::MY_SEQUENCE)?.sort_unstable();
        ctx.sequences.get_mut(keys::MY_SEQUENCE_2)?.sort_unstable();

        let first = render(ctx.sequences.get(keys::MY_SEQUENCE)?);
        let second = render(ctx.sequences.get(keys::MY_SEQUENCE_2)?);

        ctx.reporter.stage(format!("mySequence sorted: {first}"));
        ctx.reporter
            .continuation(format!("mySequence_2 sorted: {second}"));
        Ok(())
    }
}

/// Merge node - build `mySequence_4` as the stable ascending merge of the
/// two sorted sequences
pub struct MergeNode;

impl StageNode for MergeNode {
    fn name(&self) -> String {
        "Merge".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string(), keys::MY_SEQUENCE_2.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE_4.to_string()]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let merged = {
            let lhs = ctx.sequences.get(keys::MY_SEQUENCE)?;
            let rhs = ctx.sequences.get(keys::MY_SEQUENCE_2)?;
            algo::merge_sorted(lhs, rhs)
        };

        let line = format!("Merged sequence mySequence_4: {}", render(&merged));
        ctx.sequences.insert(keys::MY_SEQUENCE_4, merged);
        ctx.reporter.stage(line);
        Ok(())
    }
}
