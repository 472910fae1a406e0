// Plain text report.
// Renders Stats as aligned hour, weekday and place tables.

use std::io::{self, Write};

use crate::stats::{Stats, WEEKDAY_NAMES};

pub fn write_report(out: &mut impl Write, stats: &Stats) -> io::Result<()> {
    writeln!(out, "Processed {} tweets", stats.total)?;

    writeln!(out, "Favorite hour in UTC:")?;
    for (hour, count) in stats.hours.iter().enumerate() {
        writeln!(out, "  {:2}: {:3}", hour, count)?;
    }

    writeln!(out, "Favorite weekday in UTC:")?;
    for (name, count) in WEEKDAY_NAMES.iter().zip(stats.weekdays.iter()) {
        writeln!(out, "  {:>9}: {:3}", name, count)?;
    }

    writeln!(out, "Favorite places:")?;
    for (place, count) in &stats.places {
        writeln!(out, "  {:>width$}: {}", place, count, width = stats.place_width)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_layout() {
        let mut stats = Stats {
            total: 3,
            ..Stats::default()
        };
        stats.hours[3] = 2;
        stats.hours[14] = 1;
        stats.weekdays[1] = 2;
        stats.weekdays[5] = 1;
        stats.places.insert("NYC".to_string(), 2);
        stats.places.insert("Zürich".to_string(), 1);
        stats.place_width = 6;

        let mut out = Vec::new();
        write_report(&mut out, &stats).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Processed 3 tweets");
        assert_eq!(lines[1], "Favorite hour in UTC:");
        assert_eq!(lines[2], "   0:   0");
        assert_eq!(lines[5], "   3:   2");
        assert_eq!(lines[16], "  14:   1");
        assert_eq!(lines[26], "Favorite weekday in UTC:");
        assert_eq!(lines[27], "     Sunday:   0");
        assert_eq!(lines[28], "     Monday:   2");
        assert_eq!(lines[30], "  Wednesday:   0");
        assert_eq!(lines[34], "Favorite places:");
        assert_eq!(lines[35], "     NYC: 2");
        assert_eq!(lines[36], "  Zürich: 1");
        assert_eq!(lines.len(), 37);
    }
}
