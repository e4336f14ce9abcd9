use crate::{FragmentIndex, FragmentNameSet};
use apollo_compiler::Name;
use std::collections::VecDeque;

/// The transitive set of fragments a document needs, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentClosure {
    names: FragmentNameSet,
}

impl FragmentClosure {
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Name> {
        self.names.iter()
    }
}

impl<'a> IntoIterator for &'a FragmentClosure {
    type Item = &'a Name;
    type IntoIter = indexmap::set::Iter<'a, Name>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Expand `direct` into every fragment reachable through the index.
///
/// Fragments the index does not know are kept in the closure as leaves;
/// reporting them is up to the caller.
pub fn resolve_closure<I>(direct: I, index: &FragmentIndex) -> FragmentClosure
where
    I: IntoIterator<Item = Name>,
{
    resolve_closure_with(direct, |name| {
        index.dependencies(name).map(|deps| deps.iter().cloned())
    })
}

/// Expand `direct` using `lookup` to find each fragment's direct spreads.
///
/// `lookup` is called at most once per name. A `None` result marks a leaf.
pub fn resolve_closure_with<I, F, D>(direct: I, mut lookup: F) -> FragmentClosure
where
    I: IntoIterator<Item = Name>,
    F: FnMut(&str) -> Option<D>,
    D: IntoIterator<Item = Name>,
{
    let mut names = FragmentNameSet::new();
    let mut to_process = VecDeque::new();

    for name in direct {
        if names.insert(name.clone()) {
            to_process.push_back(name);
        }
    }

    while let Some(name) = to_process.pop_front() {
        let Some(dependencies) = lookup(name.as_str()) else {
            continue;
        };
        for dependency in dependencies {
            if names.insert(dependency.clone()) {
                to_process.push_back(dependency);
            }
        }
    }

    FragmentClosure { names }
}
