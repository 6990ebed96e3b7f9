//! Function grouping.

use indexmap::IndexMap;
use tagen_ir::{ApiIR, FunctionSpec};

/// Group name used for functions without a `GroupId`.
pub const UNGROUPED: &str = "Ungrouped";

/// Functions grouped by `GroupId`, in first-seen order.
///
/// Functions within a group keep schema order.
#[derive(Debug, Clone)]
pub struct FunctionGroups<'a> {
    groups: IndexMap<&'a str, Vec<&'a FunctionSpec>>,
}

impl<'a> FunctionGroups<'a> {
    /// Group every function of the model.
    pub fn new(api: &'a ApiIR) -> Self {
        let mut groups: IndexMap<&'a str, Vec<&'a FunctionSpec>> = IndexMap::new();
        for function in &api.functions {
            let group = function.group.as_deref().unwrap_or(UNGROUPED);
            groups.entry(group).or_default().push(function);
        }
        Self { groups }
    }

    /// Iterate over `(group, functions)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a FunctionSpec])> {
        self.groups.iter().map(|(name, fns)| (*name, fns.as_slice()))
    }

    /// Functions of one group.
    pub fn get(&self, group: &str) -> Option<&[&'a FunctionSpec]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_groups_keep_first_seen_order() {
        let api = testing::all();
        let groups = FunctionGroups::new(&api);

        let names: Vec<_> = groups.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            ["Overlap Studies", "Momentum Indicators", "Pattern Recognition"]
        );

        let overlap: Vec<_> = groups
            .get("Overlap Studies")
            .unwrap()
            .iter()
            .map(|f| f.abbreviation.as_str())
            .collect();
        assert_eq!(overlap, ["SMA", "SAR", "MA", "MAVP"]);
    }

    #[test]
    fn test_missing_group() {
        let mut sma = testing::sma();
        sma.group = None;
        let api = testing::api([sma]);

        let groups = FunctionGroups::new(&api);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get(UNGROUPED).map(<[_]>::len), Some(1));
    }
}
