pub mod core;
pub mod keys;
pub mod nodes;

pub use crate::error::PipelineError;
pub use core::{Pipeline, StageContext, StageNode};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, SeqPipeError};
    use crate::input::InputSource;
    use crate::rng::DrawStream;

    struct FakeNode {
        name: &'static str,
        reads: Vec<&'static str>,
        writes: Vec<&'static str>,
        honest: bool,
    }

    impl StageNode for FakeNode {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn input(&self) -> Vec<String> {
            self.reads.iter().map(|s| s.to_string()).collect()
        }

        fn output(&self) -> Vec<String> {
            self.writes.iter().map(|s| s.to_string()).collect()
        }

        fn process(&self, ctx: &mut StageContext) -> Result<()> {
            if self.honest {
                for written in &self.writes {
                    ctx.sequences.insert(written, vec![1, 2, 3]);
                }
            }
            Ok(())
        }
    }

    fn test_context() -> StageContext {
        StageContext::new(DrawStream::from_seed_value(0), InputSource::Fixed(vec![]))
    }

    #[test]
    fn test_wiring_accepts_chained_stages() {
        let pipeline = Pipeline::new("test")
            .add_node(Box::new(FakeNode {
                name: "producer",
                reads: vec![],
                writes: vec!["a"],
                honest: true,
            }))
            .unwrap()
            .add_node(Box::new(FakeNode {
                name: "consumer",
                reads: vec!["a"],
                writes: vec!["a", "b"],
                honest: true,
            }))
            .unwrap();

        let ctx = pipeline.execute(test_context()).unwrap();
        assert!(ctx.sequences.contains("a"));
        assert!(ctx.sequences.contains("b"));
    }

    #[test]
    fn test_wiring_rejects_unsatisfied_input() {
        let err = Pipeline::new("test")
            .add_node(Box::new(FakeNode {
                name: "consumer",
                reads: vec!["never_produced"],
                writes: vec![],
                honest: true,
            }))
            .err()
            .expect("wiring check should reject the stage");

        match err {
            SeqPipeError::Pipeline(PipelineError::ConfigError { message }) => {
                assert!(message.contains("never_produced"));
            }
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_external_inputs_satisfy_wiring() {
        let pipeline = Pipeline::new("test")
            .with_external_inputs(vec!["seeded".to_string()])
            .add_node(Box::new(FakeNode {
                name: "consumer",
                reads: vec!["seeded"],
                writes: vec!["out"],
                honest: true,
            }))
            .unwrap();

        let mut ctx = test_context();
        ctx.sequences.insert("seeded", vec![7]);
        let ctx = pipeline.execute(ctx).unwrap();
        assert!(ctx.sequences.contains("out"));
    }

    #[test]
    fn test_execute_flags_missing_output() {
        let pipeline = Pipeline::new("test")
            .add_node(Box::new(FakeNode {
                name: "liar",
                reads: vec![],
                writes: vec!["promised"],
                honest: false,
            }))
            .unwrap();

        let err = pipeline.execute(test_context()).unwrap_err();
        assert!(matches!(
            err,
            SeqPipeError::Pipeline(PipelineError::MissingOutput { .. })
        ));
    }

    #[test]
    fn test_execute_flags_missing_input_at_runtime() {
        // Wiring is satisfied by an external declaration, but the store the
        // pipeline actually runs with never held the sequence.
        let pipeline = Pipeline::new("test")
            .with_external_inputs(vec!["declared".to_string()])
            .add_node(Box::new(FakeNode {
                name: "consumer",
                reads: vec!["declared"],
                writes: vec![],
                honest: true,
            }))
            .unwrap();

        let err = pipeline.execute(test_context()).unwrap_err();
        assert!(matches!(
            err,
            SeqPipeError::Pipeline(PipelineError::MissingInput { .. })
        ));
    }
}
