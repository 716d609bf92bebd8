use crate::model::rule::RuleTable;
use crate::model::translation::RuleRef;

/// One slot per number; unknown numbers stay as `None` in their position.
pub fn resolve(table: &RuleTable, numbers: &[String]) -> Vec<Option<RuleRef>> {
    numbers
        .iter()
        .map(|n| {
            table.get(n).map(|entry| RuleRef {
                number: n.clone(),
                text: entry.base.clone(),
            })
        })
        .collect()
}
