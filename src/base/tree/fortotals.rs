use crate::base;

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub report: base::Report,
}

impl Config {
    const TOTALS: &str = "Totals";
    const TOTAL: &str = "Total";
    const AVERAGE: &str = "Weekly average";

    pub fn to_tree(&'_ self) -> base::Tree<'_> {
        let labels = self.report.label_totals();
        let summary = self.report.summary();
        let sumv = vec![
            (Self::TOTAL, summary.total),
            (Self::AVERAGE, summary.average_weekly),
        ];

        let alignment_charlen = [labels.as_slice(), sumv.as_slice()]
            .iter()
            .copied()
            .flatten()
            .map(|&(label, amount)| base::util::leaf_charlen(label, amount))
            .max()
            .unwrap_or_default();

        let mut root = base::tree::Node::default();
        self.add_vec_to_tree(&mut root, labels, Self::TOTALS.to_string(), alignment_charlen);
        let name = match summary.weeks {
            1 => "Summary (1 week)".to_string(),
            n => format!("Summary ({} weeks)", n),
        };
        self.add_vec_to_tree(&mut root, sumv, name, alignment_charlen);
        base::Tree {
            charset: &self.charset,
            root,
        }
    }

    fn add_vec_to_tree(
        &self,
        root: &mut base::tree::Node,
        v: Vec<(&str, base::Cents)>,
        name: String,
        alignment_charlen: usize,
    ) {
        if v.is_empty() {
            return;
        }
        let node = root.push(name);
        for (label, amount) in v {
            node.push(base::util::leaf_data(
                label,
                amount,
                alignment_charlen,
                self.charset.dash,
            ));
        }
    }
}
