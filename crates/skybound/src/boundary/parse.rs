use super::types::{BoundarySet, RawPolygon, Vertex};

/// Parse boundary text into raw per-constellation polygons.
///
/// Line format: `<ra_hours> <dec_degrees> <code> [ignored...]`. Lines with
/// fewer than three tokens, or whose first two tokens are not finite numbers,
/// are dropped. Codes are trimmed and uppercased; vertex order follows the
/// file.
pub fn parse_boundaries(text: &str) -> BoundarySet<RawPolygon> {
    let mut boundaries = BoundarySet::<RawPolygon>::new();
    let mut skipped = 0usize;
    for line in text.lines() {
        match parse_line(line) {
            Some((code, vertex)) => boundaries.entry(code).or_default().push(vertex),
            None => {
                if !line.trim().is_empty() {
                    skipped += 1;
                }
            }
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "dropped malformed boundary lines");
    }
    tracing::info!(
        constellations = boundaries.len(),
        "parsed constellation boundaries"
    );
    boundaries
}

fn parse_line(line: &str) -> Option<(String, Vertex)> {
    let mut parts = line.split_whitespace();
    let ra_tok = parts.next()?;
    let dec_tok = parts.next()?;
    let code_tok = parts.next()?;
    let ra: f64 = ra_tok.parse().ok()?;
    let dec: f64 = dec_tok.parse().ok()?;
    if !(ra.is_finite() && dec.is_finite()) {
        return None;
    }
    Some((code_tok.trim().to_uppercase(), Vertex::new(ra, dec)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cds_style_lines() {
        let text = "\
 22.8666667 +35.0000000 AND O
 22.8666667 +53.0000000 and O
  5.5000000 +10.0000000 ORI
";
        let set = parse_boundaries(text);
        assert_eq!(set.len(), 2);
        let and = &set["AND"];
        assert_eq!(and.len(), 2);
        assert_eq!(and[0], Vertex::new(22.8666667, 35.0));
        assert_eq!(and[1], Vertex::new(22.8666667, 53.0));
        assert_eq!(set["ORI"], vec![Vertex::new(5.5, 10.0)]);
    }

    #[test]
    fn skips_short_and_non_numeric_lines() {
        let text = "\
# header line
1.0 2.0
abc 2.0 ORI
1.0 xyz ORI
NaN 2.0 ORI
1.0 inf ORI

3.0 4.0 ori extra tokens here
";
        let set = parse_boundaries(text);
        assert_eq!(set.len(), 1);
        assert_eq!(set["ORI"], vec![Vertex::new(3.0, 4.0)]);
    }

    #[test]
    fn keeps_file_order_across_interleaved_codes() {
        let text = "1 1 AAA\n2 2 BBB\n3 3 AAA\n4 4 BBB\n5 5 AAA\n";
        let set = parse_boundaries(text);
        let ras: Vec<f64> = set["AAA"].iter().map(|v| v.ra).collect();
        assert_eq!(ras, vec![1.0, 3.0, 5.0]);
        let ras: Vec<f64> = set["BBB"].iter().map(|v| v.ra).collect();
        assert_eq!(ras, vec![2.0, 4.0]);
    }

    #[test]
    fn empty_text_gives_empty_set() {
        assert!(parse_boundaries("").is_empty());
        assert!(parse_boundaries("\n\n   \n").is_empty());
    }
}
