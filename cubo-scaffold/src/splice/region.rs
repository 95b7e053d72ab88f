use super::{SpliceOutcome, Spliced};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegionState {
    Outside,
    Inside,
    Done,
}

/// Insert `line` right before the closing tag of the first region
///
/// A region opens on a line containing `open_tag` and closes on the next line
/// containing `close_tag`. Only the first region receives the line; regions
/// opened afterwards are copied unchanged and counted in
/// [`SpliceOutcome::Inserted::ignored`].
///
/// A line carrying both tags only opens the region. If the open tag never
/// appears the outcome is [`SpliceOutcome::RegionMissing`]; if the document
/// ends before the region closes it is [`SpliceOutcome::RegionUnclosed`]. In
/// both cases the output equals the input.
#[must_use]
pub fn insert_before_close(
    lines: &[String],
    open_tag: &str,
    close_tag: &str,
    line: &str,
) -> Spliced {
    let mut output = Vec::with_capacity(lines.len() + 1);
    let mut state = RegionState::Outside;
    let mut at = 0;
    let mut ignored = 0;

    for current in lines {
        match state {
            RegionState::Outside => {
                if current.contains(open_tag) {
                    state = RegionState::Inside;
                }
            }
            RegionState::Inside => {
                if !current.contains(open_tag) && current.contains(close_tag) {
                    at = output.len();
                    output.push(line.to_owned());
                    state = RegionState::Done;
                }
            }
            RegionState::Done => {
                if current.contains(open_tag) {
                    ignored += 1;
                }
            }
        }
        output.push(current.clone());
    }

    let outcome = match state {
        RegionState::Done => {
            if ignored > 0 {
                tracing::warn!(open_tag, ignored, "several regions found, only the first was used");
            }
            SpliceOutcome::Inserted { at, ignored }
        }
        RegionState::Inside => SpliceOutcome::RegionUnclosed,
        RegionState::Outside => SpliceOutcome::RegionMissing,
    };

    Spliced {
        lines: output,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splice::lines;
    use proptest::prelude::*;

    const OPEN: &str = "<modules>";
    const CLOSE: &str = "</modules>";
    const MODULE: &str = "        <module>cubo-launcher-spring-boot</module>";

    #[test]
    fn test_empty_region() {
        let doc = lines("<modules>\n</modules>");
        let spliced = insert_before_close(&doc, OPEN, CLOSE, MODULE);

        assert_eq!(spliced.lines, vec![OPEN.to_string(), MODULE.to_string(), CLOSE.to_string()]);
        assert_eq!(spliced.outcome, SpliceOutcome::Inserted { at: 1, ignored: 0 });
    }

    #[test]
    fn test_inserts_after_existing_modules() {
        let doc = lines(
            "<project>\n    <modules>\n        <module>cubo-dict-spring-boot</module>\n    </modules>\n</project>",
        );
        let spliced = insert_before_close(&doc, OPEN, CLOSE, MODULE);

        assert_eq!(spliced.lines[3], MODULE);
        assert_eq!(spliced.lines[4], "    </modules>");
        assert_eq!(spliced.lines.len(), doc.len() + 1);
    }

    #[test]
    fn test_close_before_open_is_ignored() {
        let doc = lines("</modules>\n<modules>\n</modules>");
        let spliced = insert_before_close(&doc, OPEN, CLOSE, MODULE);

        assert_eq!(spliced.outcome, SpliceOutcome::Inserted { at: 2, ignored: 0 });
        assert_eq!(spliced.lines[2], MODULE);
    }

    #[test]
    fn test_only_first_region_receives_line() {
        let doc = lines("<modules>\n</modules>\n<profile>\n<modules>\n</modules>\n</profile>");
        let spliced = insert_before_close(&doc, OPEN, CLOSE, MODULE);

        assert_eq!(spliced.outcome, SpliceOutcome::Inserted { at: 1, ignored: 1 });
        assert_eq!(spliced.lines.iter().filter(|l| *l == MODULE).count(), 1);
        assert_eq!(spliced.lines[5], CLOSE);
    }

    #[test]
    fn test_missing_open_tag_is_noop() {
        let doc = lines("<project>\n</modules>\n</project>");
        let spliced = insert_before_close(&doc, OPEN, CLOSE, MODULE);

        assert_eq!(spliced.lines, doc);
        assert_eq!(spliced.outcome, SpliceOutcome::RegionMissing);
    }

    #[test]
    fn test_unclosed_region_is_noop() {
        let doc = lines("<project>\n<modules>\n<module>a</module>\n</project>");
        let spliced = insert_before_close(&doc, OPEN, CLOSE, MODULE);

        assert_eq!(spliced.lines, doc);
        assert_eq!(spliced.outcome, SpliceOutcome::RegionUnclosed);
    }

    #[test]
    fn test_single_line_region_only_opens() {
        let doc = lines("<modules></modules>");
        let spliced = insert_before_close(&doc, OPEN, CLOSE, MODULE);

        assert_eq!(spliced.lines, doc);
        assert_eq!(spliced.outcome, SpliceOutcome::RegionUnclosed);
    }

    proptest! {
        #[test]
        fn line_lands_directly_before_close(
            head in prop::collection::vec("[a-z ]{0,10}", 0..5),
            body in prop::collection::vec("[a-z ]{0,10}", 0..5),
            tail in prop::collection::vec("[a-z ]{0,10}", 0..5),
        ) {
            let mut doc = head.clone();
            doc.push(OPEN.to_string());
            doc.extend(body.iter().cloned());
            doc.push(CLOSE.to_string());
            doc.extend(tail.iter().cloned());

            let spliced = insert_before_close(&doc, OPEN, CLOSE, MODULE);
            let close_index = head.len() + body.len() + 2;

            prop_assert_eq!(spliced.lines.len(), doc.len() + 1);
            prop_assert_eq!(spliced.lines.iter().filter(|l| *l == MODULE).count(), 1);
            prop_assert_eq!(&spliced.lines[close_index - 1], MODULE);
            prop_assert_eq!(&spliced.lines[close_index], CLOSE);
        }
    }
}
