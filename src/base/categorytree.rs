use crate::base;

/// Read-only view of the category forest. Built once per query from the
/// parent back-references, after which descendant lookups do not rescan the
/// category table.
#[derive(Debug)]
pub struct Categorytree<'a> {
    /// Storage order.
    order: Vec<&'a base::Category>,
    by_id: std::collections::HashMap<base::CategoryId, &'a base::Category>,
    /// Direct children of each parent, in storage order.
    children: std::collections::HashMap<base::CategoryId, Vec<&'a base::Category>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("category {0} is its own ancestor")]
    Cycle(base::CategoryId),
    #[error("category id {0} is used more than once")]
    DuplicateId(base::CategoryId),
}

impl<'a> Categorytree<'a> {
    pub fn new<I>(categories: I) -> Result<Self, StructureError>
    where
        I: IntoIterator<Item = &'a base::Category>,
    {
        let order = categories.into_iter().collect::<Vec<_>>();
        let mut by_id = std::collections::HashMap::with_capacity(order.len());
        let mut children =
            std::collections::HashMap::<base::CategoryId, Vec<&'a base::Category>>::new();
        for &c in order.iter() {
            if by_id.insert(c.id(), c).is_some() {
                return Err(StructureError::DuplicateId(c.id()));
            }
            if let Some(parent) = c.parent() {
                children.entry(parent).or_default().push(c);
            }
        }
        let tree = Self {
            order,
            by_id,
            children,
        };
        tree.check_acyclic()?;
        Ok(tree)
    }

    /// Walks each category's ancestor chain. Chains already proven to end at a
    /// root or at a dangling parent reference are not walked again.
    fn check_acyclic(&self) -> Result<(), StructureError> {
        let mut acyclic = std::collections::HashSet::<base::CategoryId>::new();
        for c in self.order.iter() {
            let mut chain = std::collections::HashSet::new();
            let mut cursor = Some(c.id());
            while let Some(id) = cursor {
                if acyclic.contains(&id) {
                    break;
                }
                if !chain.insert(id) {
                    return Err(StructureError::Cycle(id));
                }
                cursor = self.by_id.get(&id).and_then(|c| c.parent());
            }
            acyclic.extend(chain);
        }
        Ok(())
    }

    pub fn get(&self, id: base::CategoryId) -> Option<&'a base::Category> {
        self.by_id.get(&id).copied()
    }

    /// All categories without a parent, in storage order.
    pub fn root_categories(&self) -> impl Iterator<Item = &'a base::Category> + '_ {
        self.order.iter().copied().filter(|c| c.is_root())
    }

    /// Categories whose parent does not exist. They are unreachable from any
    /// root.
    pub fn orphans(&self) -> impl Iterator<Item = &'a base::Category> + '_ {
        self.order
            .iter()
            .copied()
            .filter(|c| c.parent().is_some_and(|p| !self.by_id.contains_key(&p)))
    }

    /// Direct children of `id`, in storage order.
    pub fn children(&self, id: base::CategoryId) -> &[&'a base::Category] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `id` together with the ids of all of its descendants. The
    /// result always contains `id`, even if no such category exists.
    pub fn resolve_descendants(
        &self,
        id: base::CategoryId,
    ) -> std::collections::BTreeSet<base::CategoryId> {
        let mut out = std::collections::BTreeSet::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if !out.insert(next) {
                continue;
            }
            stack.extend(self.children(next).iter().map(|c| c.id()));
        }
        out
    }

    /// Categories whose name equals `name`, ignoring case, in storage order.
    pub fn find_by_name(&self, name: &str) -> Vec<&'a base::Category> {
        self.order
            .iter()
            .copied()
            .filter(|c| c.name().is_some_and(|n| n.eq_ignore_ascii_case(name)))
            .collect()
    }
}
