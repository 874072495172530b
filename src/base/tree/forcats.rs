use crate::base;

/// Draws the category forest, each category followed by its id.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    charset: base::Charset,
    /// One top-level node per drawn category, holding all of its descendants.
    root: base::tree::Node,
}

impl Config {
    /// Draws every root category, followed by categories whose parent is
    /// missing.
    pub fn new(
        charset: base::Charset,
        categories: base::Categories,
    ) -> Result<Self, base::categorytree::StructureError> {
        let tree = base::Categorytree::new(&categories)?;
        let tops = tree.root_categories().chain(tree.orphans());
        Ok(Self {
            charset,
            root: forest(&tree, tops),
        })
    }

    /// Draws only the categories accepted by `filter`, in storage order.
    pub fn with_filter<F>(
        charset: base::Charset,
        categories: base::Categories,
        filter: F,
    ) -> Result<Self, base::categorytree::StructureError>
    where
        F: Fn(&base::Category) -> bool,
    {
        let tree = base::Categorytree::new(&categories)?;
        let tops = categories.iter().filter(|c| filter(c));
        Ok(Self {
            charset,
            root: forest(&tree, tops),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    pub fn to_tree(&'_ self) -> base::Tree<'_> {
        base::Tree {
            charset: &self.charset,
            root: self.root.clone(),
        }
    }
}

fn forest<'a>(
    tree: &base::Categorytree,
    tops: impl Iterator<Item = &'a base::Category>,
) -> base::tree::Node {
    fn add_children(node: &mut base::tree::Node, tree: &base::Categorytree, id: base::CategoryId) {
        for c in tree.children(id) {
            let child = node.push(format!("{} [{}]", c.label(), c.id()));
            add_children(child, tree, c.id());
        }
    }

    let mut root = base::tree::Node::default();
    for c in tops {
        let mut data = format!("{} [{}]", c.label(), c.id());
        if let Some(parent) = c.parent().filter(|&p| tree.get(p).is_none()) {
            data.push_str(&format!(" (parent {} missing)", parent));
        }
        let node = root.push(data);
        add_children(node, tree, c.id());
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use rstest::fixture;
    use rstest::rstest;

    #[fixture]
    fn categories() -> base::Categories {
        r#"
            {"id":1,"name":"Food"}
            {"id":2,"name":"Groceries","parent":1}
            {"id":3,"name":"Eating Out","parent":1}
            {"id":4,"name":"Takeaway","parent":3}
            {"id":5,"parent":1}
            {"id":6,"name":"Transport"}
            {"id":7,"name":"Stray","parent":42}
        "#
        .parse()
        .unwrap()
    }

    #[rstest]
    fn test_forest(categories: base::Categories) {
        let config = Config::new(base::Charset::default(), categories).unwrap();
        assert!(!config.is_empty());
        assert_eq!(
            config.to_tree().to_string(),
            indoc!(
                "
                Food [1]
                |-- Groceries [2]
                |-- Eating Out [3]
                |   `-- Takeaway [4]
                `-- (Unnamed) [5]
                Transport [6]
                Stray [7] (parent 42 missing)
                "
            )
        )
    }

    #[rstest]
    fn test_filter(categories: base::Categories) {
        let config = Config::with_filter(base::Charset::default(), categories, |c| {
            c.name()
                .is_some_and(|n| n.ends_with("Out") || n.ends_with("port"))
        })
        .unwrap();
        assert_eq!(
            config.to_tree().to_string(),
            indoc!(
                "
                Eating Out [3]
                `-- Takeaway [4]
                Transport [6]
                "
            )
        )
    }

    #[rstest]
    fn test_forest_outlives_categories(categories: base::Categories) {
        let config = {
            let categories = categories.clone();
            Config::new(base::Charset::default(), categories).unwrap()
        };
        let first = config.to_tree().to_string();
        assert_eq!(config.to_tree().to_string(), first);
        assert!(first.starts_with("Food [1]\n|-- Groceries [2]\n"));
        assert!(first.ends_with("Stray [7] (parent 42 missing)\n"));
    }

    #[rstest]
    fn test_filter_no_match(categories: base::Categories) {
        let config = Config::with_filter(base::Charset::default(), categories, |_| false).unwrap();
        assert!(config.is_empty());
        assert_eq!(config.to_tree().to_string(), "");
    }

    #[test]
    fn test_cycle() {
        let categories = r#"
            {"id":1,"name":"a","parent":2}
            {"id":2,"name":"b","parent":1}
        "#
        .parse::<base::Categories>()
        .unwrap();
        assert_eq!(
            Config::new(base::Charset::default(), categories),
            Err(base::categorytree::StructureError::Cycle(base::CategoryId(1)))
        );
    }
}
