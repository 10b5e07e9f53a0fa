use super::{Anchor, CoordinateGrammar, RawMatch};
use tracing::trace;

/// Returns `true` if no letter or digit immediately precedes byte offset `pos` of `text`.
fn at_word_start(text: &str, pos: usize) -> bool {
    text[..pos]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric())
}

/// Find every non-overlapping match of grammar `G` in `text`, scanning left to right. A match
/// may only start where no letter or digit precedes it and may only end where none follows it.
/// After a match, scanning resumes at its end.
pub fn scan<'a, G: CoordinateGrammar<'a>>(text: &'a str) -> Vec<RawMatch<'a, G>> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let i = &text[pos..];

        if at_word_start(text, pos) && G::can_parse(i) {
            if let Some((rest, captures)) = G::parse(i, Anchor::Boundary) {
                let end = text.len() - rest.len();
                if end > pos {
                    trace!(grammar = G::NAME, start = pos, end, "match");
                    matches.push(RawMatch {
                        start: pos,
                        end,
                        text: &text[pos..end],
                        captures,
                    });
                    pos = end;
                    continue;
                }
            }
        }

        pos += i.chars().next().map_or(1, char::len_utf8);
    }

    matches
}
