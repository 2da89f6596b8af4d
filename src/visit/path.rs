use std::fmt;

/// The path from a traversal's root node to the node that's currently visited.
///
/// Paths are printed as dot-separated segments, e.g. `0.selectionSet.1.arguments.0`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

impl Path {
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment)
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// A single step of a [Path], either a named child slot of a node or an index into a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Index(usize),

    Arguments,
    DefaultValue,
    Directives,
    Fields,
    SelectionSet,
    Value,
    Values,
    VariableDefinitions,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(index) => write!(f, "{}", index),
            PathSegment::Arguments => f.write_str("arguments"),
            PathSegment::DefaultValue => f.write_str("defaultValue"),
            PathSegment::Directives => f.write_str("directives"),
            PathSegment::Fields => f.write_str("fields"),
            PathSegment::SelectionSet => f.write_str("selectionSet"),
            PathSegment::Value => f.write_str("value"),
            PathSegment::Values => f.write_str("values"),
            PathSegment::VariableDefinitions => f.write_str("variableDefinitions"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print() {
        let mut path = Path::default();
        assert!(path.is_empty());
        for segment in [
            PathSegment::Index(0),
            PathSegment::VariableDefinitions,
            PathSegment::Index(1),
            PathSegment::DefaultValue,
            PathSegment::Fields,
            PathSegment::Index(0),
            PathSegment::Value,
        ] {
            path.push(segment);
        }
        assert_eq!(path.len(), 7);
        assert_eq!(
            path.to_string(),
            "0.variableDefinitions.1.defaultValue.fields.0.value"
        );
        assert_eq!(path.pop(), Some(PathSegment::Value));
        assert_eq!(path.to_string(), "0.variableDefinitions.1.defaultValue.fields.0");
    }
}
