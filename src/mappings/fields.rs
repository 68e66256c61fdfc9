use crate::constants::FIELD_NAMES;

/// Tracker name for a top-level GraphQL field. Unknown names are returned as is.
pub fn tracker_field_name(field: &str) -> &str {
    FIELD_NAMES
        .iter()
        .find(|(graphql, _)| *graphql == field)
        .map(|(_, tracker)| *tracker)
        .unwrap_or(field)
}

/// Reduces requested field paths to the flat `include_fields` list.
///
/// Nested paths resolve through their head segment (`assignee.name` needs
/// `assigned_to`), so a nested selection never asks for more than the
/// top-level tracker field that carries it. Output keeps first-seen order
/// without duplicates.
pub fn fields_to_include_fields<I, S>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut include_fields: Vec<String> = Vec::new();

    for path in fields {
        let head = path.as_ref().split('.').next().unwrap_or_default().trim();

        if head.is_empty() || head.starts_with("__") {
            continue;
        }

        let name = tracker_field_name(head);
        if !include_fields.iter().any(|existing| existing == name) {
            include_fields.push(name.to_string());
        }
    }

    include_fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection() {
        let fields: Vec<&str> = Vec::new();
        assert!(fields_to_include_fields(fields).is_empty());
    }

    #[test]
    fn test_renames_and_collapses_nested_paths() {
        let result = fields_to_include_fields([
            "id",
            "assignee.name",
            "assignee.email",
            "creationTime",
            "__typename",
        ]);
        assert_eq!(result, vec!["id", "assigned_to", "creation_time"]);
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        assert_eq!(fields_to_include_fields(["cf_crash_signature"]), vec!["cf_crash_signature"]);
        assert_eq!(tracker_field_name("opSys"), "op_sys");
    }

    #[test]
    fn test_deterministic() {
        let fields = ["summary", "id", "summary", "status"];
        let first = fields_to_include_fields(fields);
        assert_eq!(first, fields_to_include_fields(fields));
        assert_eq!(first, vec!["summary", "id", "status"]);
    }
}
