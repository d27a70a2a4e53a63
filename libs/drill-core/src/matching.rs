//! Answer matching: fuzzy similarity and the multi-translation fallback.

/// Minimum similarity for an answer to be accepted unless configured otherwise.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Outcome of judging a typed answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Best similarity score observed, between 0.0 and 1.0.
    pub similarity: f64,
    /// True when only the first listed translation matched.
    pub matched_first_alternative: bool,
}

/// Judge a typed answer against the correct translation.
///
/// If the full translation is not close enough and it lists several glosses
/// separated by commas, the answer is compared once more against the text
/// before the first comma. Later glosses are never tried.
pub fn judge(user_input: &str, correct_answer: &str, threshold: f64) -> Verdict {
    let score = similarity(user_input, correct_answer);
    if score >= threshold {
        return Verdict {
            is_correct: true,
            similarity: score,
            matched_first_alternative: false,
        };
    }

    match correct_answer.split_once(',') {
        Some((first, _)) => {
            let first_score = similarity(user_input, first);
            let is_correct = first_score >= threshold;
            Verdict {
                is_correct,
                similarity: score.max(first_score),
                matched_first_alternative: is_correct,
            }
        }
        None => Verdict {
            is_correct: false,
            similarity: score,
            matched_first_alternative: false,
        },
    }
}

/// Whether a typed answer is close enough to the correct translation.
pub fn is_correct(user_input: &str, correct_answer: &str, threshold: f64) -> bool {
    judge(user_input, correct_answer, threshold).is_correct
}

/// Case- and surrounding-whitespace-insensitive similarity in `[0.0, 1.0]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0; // Both empty strings are identical
    }

    let distance = levenshtein_distance(&a, &b);
    1.0 - (distance as f64 / max_len as f64)
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
