use crate::base;

/// Lists a report week by week: one node per week, one leaf per series with
/// spending in that week.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub report: base::Report,
}

impl Config {
    pub fn to_tree(&'_ self) -> base::Tree<'_> {
        let mut weeks = std::collections::BTreeMap::<base::Date, Vec<&base::WeeklyRow>>::new();
        for row in self.report.rows() {
            weeks.entry(row.week_start).or_default().push(row);
        }
        let alignment_charlen = self
            .report
            .rows()
            .iter()
            .map(|r| base::util::leaf_charlen(&r.label, r.amount))
            .max()
            .unwrap_or_default();

        let mut root = base::tree::Node::default();
        for (week_start, rows) in weeks {
            let node = root.push(format!("Week of {}", week_start));
            for r in rows {
                node.push(base::util::leaf_data(
                    &r.label,
                    r.amount,
                    alignment_charlen,
                    self.charset.dash,
                ));
            }
        }
        base::Tree {
            charset: &self.charset,
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use rstest::rstest;

    fn report(rows: &[(&str, i64, &str)]) -> base::Report {
        rows.iter()
            .map(|&(week_start, amount, label)| base::WeeklyRow {
                week_start: week_start.parse().unwrap(),
                amount: base::Cents(amount),
                label: label.to_string(),
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[rstest]
    #[case(&[], "")]
    #[case(
        &[("2024-01-01", 5000, "Groceries")],
        indoc!("
            Week of 2024-01-01
            `-- Groceries -- 50.00
        "),
    )]
    #[case(
        &[
            ("2024-01-01", 5000, "Groceries"),
            ("2024-01-08", 3300, "Eating Out"),
            ("2024-01-08", -150, "Food (Unnamed)"),
            ("2024-01-01", 123456, "Food (Direct)"),
        ],
        indoc!("
            Week of 2024-01-01
            |-- Groceries --------- 50.00
            `-- Food (Direct) -- 1,234.56
            Week of 2024-01-08
            |-- Eating Out -------- 33.00
            `-- Food (Unnamed) ---- (1.50)
        "),
    )]
    fn test_to_tree(#[case] rows: &[(&str, i64, &str)], #[case] want: &str) {
        let config = Config {
            charset: base::Charset::default(),
            report: report(rows),
        };
        assert_eq!(config.to_tree().to_string(), want)
    }
}
