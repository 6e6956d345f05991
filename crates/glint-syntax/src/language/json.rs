//! JSON node classification.

use crate::structured::{Flow, Walk};

pub(crate) fn classify(walk: &mut Walk<'_>, id: usize) -> Flow {
    let tag = match walk.kind(id) {
        "string" if walk.parent_kind(id) == Some("pair") && walk.field(id) == Some("key") => "key",
        "string" => "string",
        "number" => "number",
        "true" | "false" => "boolean",
        "null" => "null",
        "comment" => "comment",
        _ => return Flow::Continue,
    };
    walk.emit(tag, id);
    Flow::Skip
}

#[cfg(test)]
mod tests {
    use crate::Language;
    use crate::mapper::LineIndex;
    use crate::structured::{StructuredParser, highlight_structured};
    use glint_buffer::Position;

    #[test]
    fn test_keys_and_values() {
        let text = "{\"name\": \"glint\", \"size\": 3.5, \"ok\": true, \"none\": null}";
        let lines = LineIndex::new(text);
        let mut parser = StructuredParser::new(Language::Json).unwrap();
        let tree = parser.parse(text, &lines).unwrap();
        let mut out: Vec<(&'static str, Position, Position)> = Vec::new();
        let symbols = Language::Json.extract_symbols(text);
        highlight_structured(Language::Json, &tree, text, &lines, &symbols, &mut out);

        let found: Vec<(&str, &str)> = out
            .iter()
            .map(|&(tag, s, e)| {
                (tag, &text[lines.offset_of(text, s)..lines.offset_of(text, e)])
            })
            .collect();
        assert_eq!(
            found,
            vec![
                ("key", "\"name\""),
                ("string", "\"glint\""),
                ("key", "\"size\""),
                ("number", "3.5"),
                ("key", "\"ok\""),
                ("boolean", "true"),
                ("key", "\"none\""),
                ("null", "null"),
            ]
        );
    }
}
