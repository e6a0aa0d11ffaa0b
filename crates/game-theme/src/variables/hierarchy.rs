//! Nested view of the variable forest.

use std::collections::HashMap;

use super::definition::VariableDefinition;
use super::registry::VariableRegistry;

/// A definition together with the definitions that derive from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNode {
    pub definition: VariableDefinition,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(HierarchyNode::size).sum::<usize>()
    }

    /// Pre-order walk over this subtree.
    pub fn walk(&self) -> Vec<&HierarchyNode> {
        let mut out = Vec::with_capacity(self.size());
        self.collect_into(&mut out);
        out
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a HierarchyNode>) {
        out.push(self);
        for child in &self.children {
            child.collect_into(out);
        }
    }
}

/// Groups the flat registry into root nodes, children kept in registry order.
///
/// Definitions whose parent is missing from the registry are dropped, which
/// cannot happen for a registry built through [`VariableRegistry::new`].
pub fn build_hierarchy(registry: &VariableRegistry) -> Vec<HierarchyNode> {
    let defs = registry.definitions();
    let index: HashMap<&str, usize> = defs
        .iter()
        .enumerate()
        .map(|(i, def)| (def.name.as_str(), i))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); defs.len()];
    let mut roots = Vec::new();
    for (i, def) in defs.iter().enumerate() {
        match &def.parent {
            Some(parent) => {
                if let Some(&p) = index.get(parent.as_str()) {
                    children[p].push(i);
                }
            }
            None => roots.push(i),
        }
    }

    roots
        .into_iter()
        .map(|i| assemble(i, defs, &children))
        .collect()
}

fn assemble(i: usize, defs: &[VariableDefinition], children: &[Vec<usize>]) -> HierarchyNode {
    HierarchyNode {
        definition: defs[i].clone(),
        children: children[i]
            .iter()
            .map(|&c| assemble(c, defs, children))
            .collect(),
    }
}
