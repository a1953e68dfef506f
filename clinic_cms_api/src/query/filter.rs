//! Field filters, serialized as `filters[field][$op]=value`.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterOp {
    Eq(String),
    Ne(String),
}

impl FilterOp {
    pub fn operator(&self) -> &'static str {
        match self {
            FilterOp::Eq(_) => "$eq",
            FilterOp::Ne(_) => "$ne",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            FilterOp::Eq(value) | FilterOp::Ne(value) => value,
        }
    }
}

/// A comparison on a field. `path` has more than one segment when filtering
/// through a relation, e.g. `["category", "slug"]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    pub path: Vec<String>,
    pub op: FilterOp,
}

impl Filter {
    pub fn eq(field: &str, value: &str) -> Self {
        Self::nested(&[field], FilterOp::Eq(value.to_string()))
    }

    pub fn ne(field: &str, value: &str) -> Self {
        Self::nested(&[field], FilterOp::Ne(value.to_string()))
    }

    pub fn nested(path: &[&str], op: FilterOp) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
            op,
        }
    }

    /// The bracketed parameter name, e.g. `filters[slug][$eq]`.
    pub fn key(&self) -> String {
        let mut key = String::from("filters");
        for segment in &self.path {
            key.push('[');
            key.push_str(segment);
            key.push(']');
        }
        key.push('[');
        key.push_str(self.op.operator());
        key.push(']');
        key
    }
}
