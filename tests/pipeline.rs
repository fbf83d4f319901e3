// Integration tests driving the full twenty-stage run
use seqpipe::cli::build_pipeline;
use seqpipe::core::report::StageReporter;
use seqpipe::error::SeqPipeError;
use seqpipe::input::InputSource;
use seqpipe::pipeline::nodes::source::{GenerateSequenceNode, ReadInputNode};
use seqpipe::pipeline::nodes::transform::{ShuffleNode, SortDedupNode};
use seqpipe::pipeline::{Pipeline, StageContext, keys};
use seqpipe::rng::DrawStream;

// A `2` keeps the simple-number search satisfied whatever the generator
// drew; the values above 50 guarantee positive differences against
// `mySequence_2`, so the selection stage always has its three elements.
const SAFE_INPUT: [i64; 10] = [2, 60, 70, 80, 90, 100, 110, 120, 130, 140];

fn run_to_completion(seed: u64, input: Vec<i64>, json: bool) -> StageContext {
    let ctx = StageContext::new(DrawStream::from_seed_value(seed), InputSource::Fixed(input))
        .with_reporter(StageReporter::buffered())
        .with_json_report(json);

    build_pipeline()
        .expect("pipeline wiring is fixed")
        .execute(ctx)
        .expect("run should complete")
}

#[test]
fn test_fixed_seed_and_input_are_deterministic() {
    let first = run_to_completion(1234, SAFE_INPUT.to_vec(), false);
    let second = run_to_completion(1234, SAFE_INPUT.to_vec(), false);

    assert_eq!(
        first.reporter.transcript().unwrap(),
        second.reporter.transcript().unwrap()
    );
    assert_eq!(
        first.sequences.get(keys::MY_SEQUENCE_4).unwrap(),
        second.sequences.get(keys::MY_SEQUENCE_4).unwrap()
    );
}

#[test]
fn test_transcript_shape() {
    let ctx = run_to_completion(99, SAFE_INPUT.to_vec(), false);
    let transcript = ctx.reporter.transcript().unwrap();
    let lines: Vec<&str> = transcript.lines().collect();

    // 20 numbered stage lines plus one continuation under stage 17 and
    // three under stage 20
    assert_eq!(lines.len(), 24);
    assert!(lines[0].starts_with("1. Generated sequence: "));
    assert_eq!(lines[1], "2. Enter ten numbers:");
    for stage in 1..=20 {
        assert!(
            lines.iter().any(|line| line.starts_with(&format!("{stage}. "))),
            "no line for stage {stage}"
        );
    }
    assert!(lines[23].starts_with("    mySequence_4: "));
}

#[test]
fn test_final_store_properties() {
    let ctx = run_to_completion(7, SAFE_INPUT.to_vec(), false);

    let my_sequence = ctx.sequences.get(keys::MY_SEQUENCE).unwrap();
    let my_sequence_2 = ctx.sequences.get(keys::MY_SEQUENCE_2).unwrap();
    let my_sequence_3_plus = ctx.sequences.get(keys::MY_SEQUENCE_3_PLUS).unwrap();
    let reversed = ctx
        .sequences
        .get(keys::MY_SEQUENCE_3_PLUS_REVERSED)
        .unwrap();
    let merged = ctx.sequences.get(keys::MY_SEQUENCE_4).unwrap();

    // strictly ascending after dedup and the re-sort
    assert!(my_sequence.windows(2).all(|pair| pair[0] < pair[1]));

    // second sequence was created one draw per element and never resized
    assert_eq!(my_sequence_2.len(), my_sequence.len());

    // no zeros survive the strip stage
    assert!(my_sequence_3_plus.iter().all(|&value| value != 0));

    // the reverse copy really is the reverse
    let back: Vec<i64> = reversed.iter().rev().copied().collect();
    assert_eq!(&back, my_sequence_3_plus);

    // merge is a sorted, length-preserving interleaving
    assert_eq!(merged.len(), my_sequence.len() + my_sequence_2.len());
    assert!(merged.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_equal_range_line_matches_merged_ones() {
    let ctx = run_to_completion(41, SAFE_INPUT.to_vec(), false);

    let merged = ctx.sequences.get(keys::MY_SEQUENCE_4).unwrap();
    let ones = merged.iter().filter(|&&value| value == 1).count();
    // the overwrite stage plants at least one 1 in mySequence_2
    assert!(ones >= 1);

    let transcript = ctx.reporter.transcript().unwrap();
    let expected = format!("19. Run of 1s in mySequence_4: {ones}");
    assert!(
        transcript.lines().any(|line| line == expected),
        "missing '{expected}' in transcript"
    );
}

#[test]
fn test_json_final_report() {
    let ctx = run_to_completion(5, SAFE_INPUT.to_vec(), true);
    let transcript = ctx.reporter.transcript().unwrap();

    let last_line = transcript.lines().last().unwrap();
    let value: serde_json::Value = serde_json::from_str(last_line).unwrap();

    let merged = ctx.sequences.get(keys::MY_SEQUENCE_4).unwrap();
    assert_eq!(
        value["mySequence_4"],
        serde_json::to_value(merged).unwrap()
    );
    assert!(value["mySequence"].is_array());
    assert!(value["mySequence_2"].is_array());
    assert!(value["mySequence_3_plus"].is_array());
}

#[test]
fn test_all_fives_collapse_to_one() {
    // Only the first four stages: generate, read, shuffle, sort + dedup
    let pipeline = Pipeline::new("prefix")
        .add_node(Box::new(GenerateSequenceNode))
        .unwrap()
        .add_node(Box::new(ReadInputNode))
        .unwrap()
        .add_node(Box::new(ShuffleNode))
        .unwrap()
        .add_node(Box::new(SortDedupNode))
        .unwrap();

    let ctx = StageContext::new(
        DrawStream::from_seed_value(2026),
        InputSource::Fixed(vec![5; 10]),
    )
    .with_reporter(StageReporter::buffered());

    let ctx = pipeline.execute(ctx).unwrap();
    let seq = ctx.sequences.get(keys::MY_SEQUENCE).unwrap();

    assert_eq!(seq.iter().filter(|&&value| value == 5).count(), 1);
    assert!(seq.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_input_underflow_aborts_run() {
    let ctx = StageContext::new(
        DrawStream::from_seed_value(1),
        InputSource::Fixed(vec![1, 2, 3]),
    )
    .with_reporter(StageReporter::buffered());

    let err = build_pipeline().unwrap().execute(ctx).unwrap_err();
    assert!(matches!(
        err,
        SeqPipeError::InputUnderflow {
            expected: 10,
            got: 3
        }
    ));
}
