/// How the matcher treats an ingredient lookup that fails
///
/// A failed lookup cannot tell us whether a recipe contains that ingredient,
/// so a result built without it is weaker than a full intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the whole evaluation on the first failed lookup
    #[default]
    Strict,
    /// Intersect over the lookups that succeeded and flag the result as partial
    Partial,
}

impl FailurePolicy {
    pub fn from_allow_partial(allow_partial: bool) -> Self {
        if allow_partial {
            FailurePolicy::Partial
        } else {
            FailurePolicy::Strict
        }
    }
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(FailurePolicy::Strict),
            "partial" => Ok(FailurePolicy::Partial),
            _ => Err(format!(
                "Invalid failure policy: {}. Please specify 'strict' or 'partial'",
                s
            )),
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::Strict => write!(f, "strict"),
            FailurePolicy::Partial => write!(f, "partial"),
        }
    }
}
