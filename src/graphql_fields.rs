use std::fmt;

/// The output fields a GraphQL query asked for, flattened to dotted paths
/// such as `assignee.name`. Duplicates collapse; first-seen order is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestedFields {
    paths: Vec<String>,
}

impl RequestedFields {
    pub fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// Add a single path
    pub fn field(mut self, path: &str) -> Self {
        self.push(path.to_string());
        self
    }

    /// Add several top-level paths
    pub fn fields(mut self, paths: &[&str]) -> Self {
        for path in paths {
            self.push(path.to_string());
        }
        self
    }

    /// Add a nested selection under `name`, e.g. `assignee { name email }`
    pub fn nested(mut self, name: &str, selection: RequestedFields) -> Self {
        if selection.is_empty() {
            self.push(name.to_string());
        }
        for path in selection.paths {
            self.push(format!("{}.{}", name, path));
        }
        self
    }

    pub fn push(&mut self, path: String) {
        if !path.is_empty() && !self.paths.contains(&path) {
            self.paths.push(path);
        }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for RequestedFields {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut fields = RequestedFields::new();
        for path in iter {
            fields.push(path.as_ref().to_string());
        }
        fields
    }
}

impl fmt::Display for RequestedFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.paths.join(","))
    }
}

/// Predefined selections used by the command line
pub mod selections {
    use super::RequestedFields;

    pub fn user_fields() -> RequestedFields {
        RequestedFields::new().fields(&["name", "realName", "email"])
    }

    pub fn bug_list_fields() -> RequestedFields {
        RequestedFields::new()
            .fields(&["id", "summary", "status", "resolution", "priority"])
            .nested("assignee", user_fields())
    }

    pub fn bug_detail_fields() -> RequestedFields {
        bug_list_fields()
            .fields(&[
                "product", "component", "severity", "keywords", "whiteboard",
                "creationTime", "lastChangeTime", "url",
            ])
            .nested("creator", user_fields())
    }
}
