//! Read-only stages that report on the sequences without reshaping them.

use crate::config::constants;
use crate::core::report::{FinalReport, render};
use crate::error::{Result, SeqPipeError};
use crate::pipeline::core::{StageContext, StageNode};
use crate::pipeline::keys;
use crate::util::algo;

/// A value is simple when it lies strictly between 1 and 10 and is not
/// divisible by 2, 3, 5 and 7 at once.
fn is_simple_below_ten(value: i64) -> bool {
    value > 1
        && value < 10
        && !(value % 2 == 0 && value % 3 == 0 && value % 5 == 0 && value % 7 == 0)
}

/// Odd count node - report how many elements of `mySequence` are odd
pub struct CountOddNode;

impl StageNode for CountOddNode {
    fn name(&self) -> String {
        "CountOdd".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let count = ctx
            .sequences
            .get(keys::MY_SEQUENCE)?
            .iter()
            .filter(|&&value| value % 2 == 1)
            .count();

        ctx.reporter
            .stage(format!("Odd elements in mySequence: {count}"));
        Ok(())
    }
}

/// Min/max node - report the smallest and largest element of `mySequence`
pub struct MinMaxNode;

impl StageNode for MinMaxNode {
    fn name(&self) -> String {
        "MinMax".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let seq = ctx.sequences.get(keys::MY_SEQUENCE)?;

        let min = seq
            .iter()
            .min()
            .ok_or_else(|| SeqPipeError::empty_sequence(keys::MY_SEQUENCE))?;
        let max = seq
            .iter()
            .max()
            .ok_or_else(|| SeqPipeError::empty_sequence(keys::MY_SEQUENCE))?;

        let line = format!("Min & max of mySequence: {min} & {max}");
        ctx.reporter.stage(line);
        Ok(())
    }
}

/// Search node - report the first simple element of `mySequence` below 10
pub struct FindSimpleNode;

impl StageNode for FindSimpleNode {
    fn name(&self) -> String {
        "FindSimple".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let found = ctx
            .sequences
            .get(keys::MY_SEQUENCE)?
            .iter()
            .copied()
            .find(|&value| is_simple_below_ten(value))
            .ok_or_else(|| SeqPipeError::not_found(keys::MY_SEQUENCE))?;

        ctx.reporter
            .stage(format!("First simple number below 10: {found}"));
        Ok(())
    }
}

/// Sum node - report the sum of `mySequence_2`
pub struct SumNode;

impl StageNode for SumNode {
    fn name(&self) -> String {
        "Sum".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE_2.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let sum: i64 = ctx.sequences.get(keys::MY_SEQUENCE_2)?.iter().sum();

        ctx.reporter.stage(format!("Sum of mySequence_2: {sum}"));
        Ok(())
    }
}

/// Selection node - report the three largest elements of
/// `mySequence_3_plus_reversed` in ascending order
pub struct TopKNode;

impl StageNode for TopKNode {
    fn name(&self) -> String {
        "TopK".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE_3_PLUS_REVERSED.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let seq = ctx.sequences.get(keys::MY_SEQUENCE_3_PLUS_REVERSED)?;

        let top = algo::top_k(seq, constants::TOP_K).ok_or(SeqPipeError::InsufficientElements {
            needed: constants::TOP_K,
            len: seq.len(),
        })?;

        let line = format!(
            "Top {} of mySequence_3_plus_reversed: {}",
            constants::TOP_K,
            render(&top)
        );
        ctx.reporter.stage(line);
        Ok(())
    }
}

/// Equal range node - report the width of the run of 1s in `mySequence_4`
pub struct EqualRangeNode;

impl StageNode for EqualRangeNode {
    fn name(&self) -> String {
        "EqualRange".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![keys::MY_SEQUENCE_4.to_string()]
    }

    fn output(&self) -> Vec<String> {
        vec![]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let seq = ctx.sequences.get(keys::MY_SEQUENCE_4)?;
        let width = algo::equal_range(seq, constants::EQUAL_RANGE_KEY);

        let line = format!(
            "Run of {}s in mySequence_4: {width}",
            constants::EQUAL_RANGE_KEY
        );
        ctx.reporter.stage(line);
        Ok(())
    }
}

/// Final report node - print the surviving sequences, as text lines or as
/// one JSON document
pub struct FinalReportNode;

impl StageNode for FinalReportNode {
    fn name(&self) -> String {
        "FinalReport".to_string()
    }

    fn input(&self) -> Vec<String> {
        vec![
            keys::MY_SEQUENCE.to_string(),
            keys::MY_SEQUENCE_2.to_string(),
            keys::MY_SEQUENCE_3_PLUS.to_string(),
            keys::MY_SEQUENCE_4.to_string(),
        ]
    }

    fn output(&self) -> Vec<String> {
        vec![]
    }

    fn process(&self, ctx: &mut StageContext) -> Result<()> {
        let StageContext {
            sequences,
            reporter,
            json_report,
            ..
        } = ctx;

        let my_sequence = sequences.get(keys::MY_SEQUENCE)?;
        let my_sequence_2 = sequences.get(keys::MY_SEQUENCE_2)?;
        let my_sequence_3_plus = sequences.get(keys::MY_SEQUENCE_3_PLUS)?;
        let my_sequence_4 = sequences.get(keys::MY_SEQUENCE_4)?;

        if *json_report {
            let report = FinalReport {
                my_sequence: my_sequence.as_slice(),
                my_sequence_2: my_sequence_2.as_slice(),
                my_sequence_3_plus: my_sequence_3_plus.as_slice(),
                my_sequence_4: my_sequence_4.as_slice(),
            };
            reporter.json(&report)?;
        } else {
            reporter.stage(format!("mySequence: {}", render(my_sequence)));
            reporter.continuation(format!("mySequence_2: {}", render(my_sequence_2)));
            reporter.continuation(format!(
                "mySequence_3_plus: {}",
                render(my_sequence_3_plus)
            ));
            reporter.continuation(format!("mySequence_4: {}", render(my_sequence_4)));
        }
        Ok(())
    }
}
