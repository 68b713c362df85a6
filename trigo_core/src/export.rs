//! # Export Projections
//!
//! Flat text projections of solved triangles and exercise lists for the
//! copy/export consumers. The core produces strings only — writing files,
//! clipboards, or spreadsheets is the host's job.
//!
//! CSV output targets the pt-BR locale convention the tool ships with:
//! semicolon field delimiter and comma decimal separator. The
//! tab-separated clipboard table keeps plain period decimals.

use crate::generator::TrigoExercise;
use crate::solver::TriangleData;

/// Format a number with a comma decimal separator.
fn format_locale(value: f64) -> String {
    value.to_string().replace('.', ",")
}

/// Tab-separated per-vertex results table for clipboard copy.
///
/// One row per vertex: angle, opposite side, and the three cevian lengths
/// toward that side, followed by an area/perimeter footer.
pub fn results_table_tsv(t: &TriangleData) -> String {
    let rows = [
        ("A", t.angle_a, t.a, t.heights.a, t.medians.a, t.bisectors.a),
        ("B", t.angle_b, t.b, t.heights.b, t.medians.b, t.bisectors.b),
        ("C", t.angle_c, t.c, t.heights.c, t.medians.c, t.bisectors.c),
    ];
    let mut lines = vec![
        "Vertex\tAngle\tOpposite side\tHeight (h)\tMedian (m)\tBisector (\u{3b2})".to_string(),
    ];
    for (vertex, angle, side, h, m, bis) in rows {
        lines.push(format!("{vertex}\t{angle}\t{side}\t{h}\t{m}\t{bis}"));
    }
    lines.push(String::new());
    lines.push(format!("Area: {}\tPerimeter: {}", t.area, t.perimeter));
    lines.join("\n")
}

/// Semicolon-delimited per-vertex results table (locale decimals).
pub fn results_table_csv(t: &TriangleData) -> String {
    let rows = [
        ("A", t.angle_a, t.a, t.heights.a, t.medians.a, t.bisectors.a),
        ("B", t.angle_b, t.b, t.heights.b, t.medians.b, t.bisectors.b),
        ("C", t.angle_c, t.c, t.heights.c, t.medians.c, t.bisectors.c),
    ];
    let mut lines = vec![
        "Vertex;Angle;Opposite side;Height (h);Median (m);Bisector (\u{3b2})".to_string(),
    ];
    for (vertex, angle, side, h, m, bis) in rows {
        lines.push(format!(
            "{vertex};{};{};{};{};{}",
            format_locale(angle),
            format_locale(side),
            format_locale(h),
            format_locale(m),
            format_locale(bis)
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Area;{};Perimeter;{}",
        format_locale(t.area),
        format_locale(t.perimeter)
    ));
    lines.join("\n")
}

/// Semicolon-delimited exercise list: one row per exercise with the flat
/// solution fields (locale decimals).
pub fn exercises_csv(exercises: &[TrigoExercise]) -> String {
    let mut lines = vec![
        "ID;Mode;Side a;Side b;Side c;Angle A;Angle B;Angle C;Area;Perimeter".to_string(),
    ];
    for ex in exercises {
        let s = &ex.solution;
        lines.push(format!(
            "{};{};{};{};{};{};{};{};{};{}",
            ex.id,
            ex.mode,
            format_locale(s.a),
            format_locale(s.b),
            format_locale(s.c),
            format_locale(s.angle_a),
            format_locale(s.angle_b),
            format_locale(s.angle_c),
            format_locale(s.area),
            format_locale(s.perimeter)
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_list;
    use crate::solver::{solve, TriangleMode};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_results_tsv_layout() {
        let t = solve(TriangleMode::Sss, 3.0, 4.0, 5.0);
        let tsv = results_table_tsv(&t);
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Vertex\tAngle"));
        assert!(lines[1].starts_with("A\t36.9\t3"));
        assert!(lines[3].starts_with("C\t90\t5"));
        assert!(lines[5].contains("Area: 6"));
        assert!(lines[5].contains("Perimeter: 12"));
    }

    #[test]
    fn test_results_csv_uses_locale_decimals() {
        let t = solve(TriangleMode::Sas, 5.0, 90.0, 5.0);
        let csv = results_table_csv(&t);
        // a = 7.1 renders as 7,1
        assert!(csv.contains(";7,1;"));
        assert!(!csv.lines().nth(1).unwrap().contains("7.1"));
        assert!(csv.contains("Area;"));
    }

    #[test]
    fn test_exercises_csv_rows() {
        let mut rng = StdRng::seed_from_u64(5);
        let list = generate_list(2, 2, &mut rng);
        let csv = exercises_csv(&list);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), list.len() + 1);
        assert!(lines[0].starts_with("ID;Mode;"));
        assert!(lines[1].starts_with("1;Right;"));
        // Mode column uses the wire tag for oblique modes too
        let tags = ["SSS", "SAS", "ASA", "AAS"];
        assert!(tags.iter().any(|tag| csv.contains(&format!(";{tag};"))));
    }

    #[test]
    fn test_exercises_csv_empty_list() {
        let csv = exercises_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }
}
