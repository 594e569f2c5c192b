//! Substitutes resolved attributes into the bag name template.

use crate::attributes::ResolvedAttributes;

/// Characters stripped from both ends of the rendered name. Removes the
/// separators left dangling when an adjacent attribute was empty.
const TRIMMED: [char; 2] = [' ', '-'];

/// Renders `template` with `attrs` in a single pass.
///
/// Recognized placeholders are replaced by their resolved value (which may
/// be empty); unrecognized ones are kept as literal text. Substituted values
/// are never rescanned. The result is trimmed of leading and trailing
/// spaces and hyphens; an empty result means the rename should be skipped.
pub fn render(template: &str, attrs: &ResolvedAttributes) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        match after.find('}') {
            Some(end) => match attrs.get(&after[1..end]) {
                Some(val) => {
                    out.push_str(val);
                    rest = &after[end + 1..];
                }
                None => {
                    out.push('{');
                    rest = &after[1..];
                }
            },
            None => {
                out.push_str(after);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out.trim_matches(TRIMMED).to_owned()
}
