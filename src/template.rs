use std::collections::HashMap;

use crate::legacy;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Expand legacy color codes and `{{key}}` variables in one text fragment.
///
/// The scan is a single left-to-right pass and each key costs one map lookup,
/// so templates can carry many variables without slowing down. A key found in
/// the table replaces its whole `{{key}}` span and the inserted value is not
/// rescanned; a missing key leaves the span verbatim. An unmatched `{{` ends
/// the scan with the remainder of the string unchanged.
pub fn substitute(raw: &str, variables: &HashMap<String, String>) -> String {
    let text = legacy::translate_ampersand_codes(raw);
    let mut out = String::with_capacity(text.len());
    let mut rest = text.as_str();

    while let Some(open) = rest.find(OPEN) {
        let Some(close) = rest[open + OPEN.len()..].find(CLOSE) else {
            break;
        };
        let key_start = open + OPEN.len();
        let span_end = key_start + close + CLOSE.len();

        out.push_str(&rest[..open]);
        match variables.get(&rest[key_start..key_start + close]) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[open..span_end]),
        }
        rest = &rest[span_end..];
    }
    out.push_str(rest);
    out
}
