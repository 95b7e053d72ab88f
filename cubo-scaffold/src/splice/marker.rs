use super::{SpliceOutcome, Spliced};

/// Insert `block` right after the first line containing `marker`
///
/// Matching is by substring, so the marker may sit inside a longer line. Only
/// the first match receives the block; later marker lines are copied unchanged
/// and counted in [`SpliceOutcome::Inserted::ignored`]. Without a match the
/// output equals the input.
#[must_use]
pub fn insert_after_marker(lines: &[String], marker: &str, block: &str) -> Spliced {
    let mut output = Vec::with_capacity(lines.len() + block.lines().count());
    let mut outcome = SpliceOutcome::MarkerMissing;

    for line in lines {
        output.push(line.clone());
        if !line.contains(marker) {
            continue;
        }

        outcome = match outcome {
            SpliceOutcome::Inserted { at, ignored } => SpliceOutcome::Inserted {
                at,
                ignored: ignored + 1,
            },
            _ => {
                let at = output.len();
                output.extend(block.lines().map(str::to_owned));
                SpliceOutcome::Inserted { at, ignored: 0 }
            }
        };
    }

    if let SpliceOutcome::Inserted { ignored, .. } = outcome {
        if ignored > 0 {
            tracing::warn!(marker, ignored, "marker found on several lines, only the first was used");
        }
    }

    Spliced {
        lines: output,
        outcome,
    }
}
