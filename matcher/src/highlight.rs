use crate::chars;
use crate::pattern::Term;

/// Fills `mask` with one bool per char of `haystack`, `true` at
/// every position where the folded title char equals any char of
/// any term.
///
/// This marks every occurrence of every term char, not the positions
/// of one particular subsequence alignment: `"ban"` against
/// `"banana"` marks all six chars. The over marking is deliberate
/// and part of the rendered output contract; do not minimize it to
/// the true alignment.
pub(crate) fn highlight_into(
    haystack: &str,
    terms: &[Term],
    scratch: &mut String,
    mask: &mut Vec<bool>,
) {
    let haystack = chars::fold(scratch, haystack);
    mask.clear();
    mask.resize(haystack.chars().count(), false);
    for term in terms {
        for needle in term.as_str().chars() {
            for (i, c) in haystack.chars().enumerate() {
                if c == needle {
                    mask[i] = true;
                }
            }
        }
    }
}
