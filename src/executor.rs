//! Record-at-a-time stage executor.
//!
//! Each input record is pushed through the entire stage chain before the
//! next one is read. Once input is exhausted, stages are flushed in order
//! and each flush output is pushed through the stages downstream of it.

use crate::record::BookRecord;
use crate::stage::SelectionStage;

/// A boxed stage borrowing records for `'a`.
pub type BoxedStage<'a> = Box<dyn SelectionStage<'a> + 'a>;

/// Push records through a slice of stages, processing each record
/// through each stage in sequence.
fn push_through_stages<'a>(
    records: Vec<&'a BookRecord>,
    stages: &mut [BoxedStage<'a>],
) -> Vec<&'a BookRecord> {
    let mut current = records;
    for stage in stages.iter_mut() {
        let mut next = Vec::new();
        for r in current {
            next.extend(stage.process(r));
        }
        current = next;
    }
    current
}

/// Run `input` through `stages` and return what comes out the far end.
pub fn execute_stages<'a, I>(input: I, stages: &mut [BoxedStage<'a>]) -> Vec<&'a BookRecord>
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    let mut output = Vec::new();
    let mut input_count = 0;

    for record in input {
        input_count += 1;
        output.extend(push_through_stages(vec![record], stages));
    }

    for i in 0..stages.len() {
        let flush_output = stages[i].flush();
        if !flush_output.is_empty() {
            log::debug!(
                "{} flushed {} records",
                stages[i].name(),
                flush_output.len()
            );
            output.extend(push_through_stages(flush_output, &mut stages[i + 1..]));
        }
    }

    log::debug!(
        "Executed {} stages: {} -> {} records",
        stages.len(),
        input_count,
        output.len()
    );
    output
}
