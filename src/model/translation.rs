use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationCandidate {
    pub source_term: String,
    pub est_term: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RuleRef {
    pub number: String,
    pub text: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub est_term: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Unresolved rule numbers stay in place as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Vec<Option<RuleRef>>>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub engl_term: String,
    pub list: Vec<Definition>,
}
