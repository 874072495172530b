use crate::base;

pub struct Barchart<'a> {
    charset: &'a base::Charset,
    weeks: Vec<base::Date>,
    pos: base::Aggregate<base::Date, base::Cents>,
    neg: base::Aggregate<base::Date, base::Cents>,
    max_abs_val: base::Cents,
    max_barlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub bounds: base::Interval,
    pub term_width: usize,
    /// Draw weeks without spending as zero-length bars instead of skipping
    /// them.
    pub show_empty_weeks: bool,
    pub report: base::Report,
}

impl Config {
    const LABEL_CHARLEN: usize = 10; // yyyy-mm-dd

    pub fn to_barchart(&'_ self) -> Barchart<'_> {
        let rows = self.report.rows();
        let bounds = match (
            rows.iter().map(|r| r.week_start).min(),
            rows.iter().map(|r| r.week_start).max(),
        ) {
            (Some(start), Some(end)) => base::Interval {
                start,
                end: end.week_end(),
            }
            .intersection(self.bounds),
            _ => base::Interval::EMPTY,
        };
        let first_week = bounds.start.week_start();

        let mut pos = base::Aggregate::<base::Date, base::Cents>::default();
        let mut neg = base::Aggregate::<base::Date, base::Cents>::default();
        for r in rows {
            if bounds.is_empty() || r.week_start < first_week || r.week_start > bounds.end {
                continue;
            }
            match r.amount.cmp(&base::Cents(0)) {
                std::cmp::Ordering::Greater => pos.add(r.week_start, r.amount),
                std::cmp::Ordering::Less => neg.add(r.week_start, r.amount),
                _ => {}
            }
        }
        let weeks = bounds
            .weeks()
            .filter(|dt| {
                self.show_empty_weeks || pos.get(dt).is_some() || neg.get(dt).is_some()
            })
            .collect();

        // Computing `max_barlen` from `(-max_abs_val)` reserves room for the
        // widest possible amount, so a chart whose largest value is positive
        // may end up one or two chars narrower than `term_width`.
        let max_abs_val = base::Cents::max(
            pos.iter().map(|(_, v)| v.abs()).max().unwrap_or_default(),
            neg.iter().map(|(_, v)| v.abs()).max().unwrap_or_default(),
        );
        let max_barlen = self.term_width.max(base::util::MIN_TERM_WIDTH)
            - Self::LABEL_CHARLEN
            - base::util::BOUNDING_SPACES_COUNT
            - 1 // axis
            - (-max_abs_val).charlen();

        Barchart {
            charset: &self.charset,
            weeks,
            pos,
            neg,
            max_abs_val,
            max_barlen,
        }
    }
}

impl Barchart<'_> {
    fn barlen(&self, val: base::Cents) -> usize {
        let x = (val.abs().0 as f64) / (self.max_abs_val.0 as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw_bar(&self, w: &mut impl std::fmt::Write, val: base::Cents) -> std::fmt::Result {
        let barlen = self.barlen(val);
        if barlen > 0 {
            w.write_str(&self.charset.bar(barlen, val < base::Cents(0)))?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", val)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, dt: base::Date) -> std::fmt::Result {
        write!(w, "{} {}", dt, self.charset.chart_axis)?;
        if !self.pos.is_empty() {
            self.draw_bar(w, self.pos.get(&dt).unwrap_or_default())?;
            if self.neg.is_empty() {
                return Ok(());
            }
            for _ in 0..Config::LABEL_CHARLEN {
                w.write_char(' ')?;
            }
            write!(w, " {}", self.charset.chart_axis)?;
        }
        self.draw_bar(w, self.neg.get(&dt).unwrap_or_default())
    }
}

impl std::fmt::Display for Barchart<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &dt in self.weeks.iter() {
            self.draw(f, dt)?;
        }
        Ok(())
    }
}
