// String similarity for near-duplicate detection.
//
// The measure is the longest-common-subsequence ratio over characters:
//
//     similarity(a, b) = 2 * |LCS(a, b)| / (|a| + |b|)
//
// It is symmetric, reflexive (similarity(a, a) == 1.0, including for the
// empty string), and always within [0, 1]. Keyword candidates are short,
// so the quadratic DP table is not a concern.

/// Similarity between two strings in [0, 1].
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let lcs = lcs_length(&a, &b);
    (2 * lcs) as f64 / (a.len() + b.len()) as f64
}

/// Length of the longest common subsequence, computed with a rolling
/// single-row DP table.
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut prev_diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let current = row[j + 1];
            row[j + 1] = if ca == cb {
                prev_diag + 1
            } else {
                row[j + 1].max(row[j])
            };
            prev_diag = current;
        }
    }
    row[b.len()]
}
