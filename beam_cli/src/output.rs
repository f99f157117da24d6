//! Report rendering: text table, JSON, CSV.

use std::io::Write;

use beam_core::report::AnalysisReport;

/// Rows of the curve shown in the text table (plus the right support)
const TABLE_ROWS: usize = 20;

pub fn write_json<W: Write>(report: &AnalysisReport, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{}", report.to_json_pretty()?)?;
    Ok(())
}

/// One `position,shear,moment` row per sample, with a header
pub fn write_csv<W: Write>(report: &AnalysisReport, out: &mut W) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for sample in report.results.curve.iter() {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_table<W: Write>(report: &AnalysisReport, out: &mut W) -> anyhow::Result<()> {
    let results = &report.results;
    let summary = &results.summary;
    let rule = "═══════════════════════════════════════════════";

    writeln!(out, "{rule}")?;
    writeln!(out, "  BEAM ANALYSIS  (L = {})", report.spec.length)?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Samples:         {}", results.curve.len())?;
    writeln!(out, "  Centroid rule:   {}", report.settings.centroid_rule.display_name())?;
    writeln!(out, "  Partial loads:   {}", report.settings.partial_profile.display_name())?;
    writeln!(out)?;
    writeln!(out, "Load resultants:")?;
    for load in &results.loads {
        writeln!(
            out,
            "  {:<12} W = {:>12.3}  at x = {:>8.3}",
            load.label, load.resultant.magnitude, load.resultant.centroid
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Reactions:")?;
    writeln!(out, "  RA = {:.3}", results.reactions.left)?;
    writeln!(out, "  RB = {:.3}", results.reactions.right)?;
    writeln!(out)?;
    writeln!(out, "Extremes:")?;
    writeln!(
        out,
        "  |V|max = {:.3} at x = {:.3}",
        summary.max_shear, summary.max_shear_position
    )?;
    writeln!(
        out,
        "  M_max  = {:.3} at x = {:.3}",
        summary.max_moment, summary.max_moment_position
    )?;
    writeln!(
        out,
        "  M_min  = {:.3} at x = {:.3}",
        summary.min_moment, summary.min_moment_position
    )?;
    if !summary.shear_zero_crossings.is_empty() {
        let crossings: Vec<String> = summary
            .shear_zero_crossings
            .iter()
            .map(|x| format!("{x:.3}"))
            .collect();
        writeln!(out, "  V = 0 near x = {}", crossings.join(", "))?;
    }
    writeln!(out)?;

    writeln!(out, "{:>10}  {:>14}  {:>14}", "x", "V", "M")?;
    let samples = &results.curve.samples;
    let step = (samples.len() / TABLE_ROWS).max(1);
    let last = samples.len().saturating_sub(1);
    for (i, s) in samples.iter().enumerate() {
        if i % step == 0 || i == last {
            writeln!(out, "{:>10.3}  {:>14.3}  {:>14.3}", s.position, s.shear, s.moment)?;
        }
    }
    writeln!(out, "{rule}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beam_core::beam::BeamSpec;
    use beam_core::loads::PointLoad;
    use beam_core::settings::AnalysisSettings;

    fn report(samples: usize) -> AnalysisReport {
        let spec = BeamSpec::new(10.0).with_point_load(PointLoad::new(100.0, 5.0));
        AnalysisReport::generate(spec, AnalysisSettings::default().with_sample_count(samples)).unwrap()
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let mut buf = Vec::new();
        write_csv(&report(3), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "position,shear,moment");
        assert_eq!(lines.len(), 4);
        assert!(lines[3].starts_with("10.0,-50.0,"));
    }

    #[test]
    fn test_table_shows_reactions() {
        let mut buf = Vec::new();
        write_table(&report(500), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("RA = 50.000"));
        assert!(text.contains("RB = 50.000"));
        assert!(text.contains("Point load"));
        // Decimated to about TABLE_ROWS rows, right support always shown
        assert!(text.contains("    10.000"));
        assert!(text.lines().count() < 60);
    }

    #[test]
    fn test_json_parses_back() {
        let mut buf = Vec::new();
        write_json(&report(5), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let back = AnalysisReport::from_json(&text).unwrap();
        assert_eq!(back.results.curve.len(), 5);
    }
}
