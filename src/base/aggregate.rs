use crate::base;

/// Running per-key sums plus a grand total. Keys iterate in ascending order.
#[derive(Debug, Clone)]
pub struct Aggregate<K, V> {
    m: std::collections::BTreeMap<K, V>,
    sum: V,
}

impl<K, V> Default for Aggregate<K, V>
where
    V: Default,
{
    fn default() -> Self {
        Self {
            m: Default::default(),
            sum: Default::default(),
        }
    }
}

impl<K, V> PartialEq for Aggregate<K, V>
where
    K: Ord,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m && self.sum == other.sum
    }
}

impl<K, V> Eq for Aggregate<K, V>
where
    K: Ord,
    V: Eq,
{
}

impl<K, V> Aggregate<K, V> {
    pub fn sum(&self) -> V
    where
        V: Copy,
    {
        self.sum
    }

    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    pub fn len(&self) -> usize {
        self.m.len()
    }

    pub fn add(&mut self, key: K, value: V)
    where
        K: Ord,
        V: Copy + Default + std::ops::AddAssign,
    {
        *(self.m.entry(key).or_default()) += value;
        self.sum += value;
    }

    pub fn get(&self, key: &K) -> Option<V>
    where
        K: Ord,
        V: Copy,
    {
        self.m.get(key).copied()
    }

    /// Ascending by key.
    pub fn iter(&self) -> impl Iterator<Item = (&K, V)> + '_
    where
        V: Copy,
    {
        self.m.iter().map(|(k, &v)| (k, v))
    }
}

impl<K> Aggregate<K, base::Cents>
where
    K: Ord,
{
    /// Like [`Aggregate::add`], but leaves the aggregate unchanged if either
    /// the key's sum or the grand total would overflow.
    pub fn try_add(&mut self, key: K, value: base::Cents) -> Result<(), base::cents::OverflowError> {
        let entry = self.m.get(&key).copied().unwrap_or_default().checked_add(value)?;
        let sum = self.sum.checked_add(value)?;
        self.m.insert(key, entry);
        self.sum = sum;
        Ok(())
    }
}

impl<K, V> IntoIterator for Aggregate<K, V> {
    type Item = (K, V);
    type IntoIter = std::collections::btree_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.m.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Ord,
    V: Copy + Default + std::ops::AddAssign,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Aggregate::<K, V>::default();
        for (k, v) in iter {
            agg.add(k, v);
        }
        agg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate() {
        let mut agg = Aggregate::<&'static str, i32>::default();
        assert!(agg.is_empty());
        assert_eq!(agg.sum(), 0);

        agg.add("b", 10);
        agg.add("a", -100);
        assert!(!agg.is_empty());
        assert_eq!(agg.get(&"b"), Some(10));
        assert_eq!(agg.get(&"a"), Some(-100));
        assert!(agg.get(&"c").is_none());
        assert_eq!(agg.sum(), -90);

        agg.add("b", -3);
        agg.add("c", 0);
        assert_eq!(agg.len(), 3);
        assert_eq!(agg.sum(), -93);

        let vec = agg.iter().map(|(&k, v)| (k, v)).collect::<Vec<_>>();
        assert_eq!(vec, vec![("a", -100), ("b", 7), ("c", 0)]);

        let agg2 = vec.into_iter().collect::<Aggregate<_, _>>();
        assert_eq!(agg, agg2);
        assert_eq!(
            agg2.into_iter().map(|(k, _)| k).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_try_add() {
        let mut agg = Aggregate::<&'static str, base::Cents>::default();
        assert!(agg.try_add("a", base::Cents(i64::MAX - 1)).is_ok());
        assert!(agg.try_add("b", base::Cents(2)).is_err());
        assert!(agg.try_add("a", base::Cents(2)).is_err());
        assert_eq!(agg.len(), 1);
        assert_eq!(agg.get(&"a"), Some(base::Cents(i64::MAX - 1)));
        assert_eq!(agg.sum(), base::Cents(i64::MAX - 1));

        assert!(agg.try_add("b", base::Cents(-5)).is_ok());
        assert_eq!(agg.sum(), base::Cents(i64::MAX - 6));
    }
}
