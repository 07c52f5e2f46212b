//! Heuristic binary-text scraper.
//!
//! Last-resort fallback for legacy slide decks the conversion tool
//! cannot handle. Deliberately lossy: it scans permissively decoded
//! bytes for runs that look like prose and discards everything else.
//! Not reliable text recovery.

use regex::Regex;

/// Tunable thresholds for the scraper.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Minimum length of a printable-ASCII run worth considering.
    pub min_ascii_run: usize,
    /// Minimum length of a letters-and-whitespace run worth considering.
    pub min_letter_run: usize,
    /// Minimum length of a trimmed candidate.
    pub min_candidate_chars: usize,
    /// Minimum number of letters a candidate must contain.
    pub min_letters: usize,
    /// Minimum total length of the joined result; anything shorter is
    /// treated as noise and dropped wholesale.
    pub min_total_chars: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            min_ascii_run: 15,
            min_letter_run: 25,
            min_candidate_chars: 15,
            min_letters: 5,
            min_total_chars: 100,
        }
    }
}

/// Control characters that mark a candidate as binary noise.
const NOISE_CHARS: [char; 4] = ['\x00', '\x01', '\x02', '\x03'];

/// Scans raw bytes for readable text runs.
pub struct BinaryScraper {
    config: ScraperConfig,
    printable_runs: Regex,
    letter_runs: Regex,
}

impl BinaryScraper {
    pub fn new(config: ScraperConfig) -> Self {
        let printable_runs = Regex::new(&format!(r"[\x20-\x7E]{{{},}}", config.min_ascii_run))
            .expect("printable-run pattern");
        let letter_runs = Regex::new(&format!(r"[A-Za-z\s]{{{},}}", config.min_letter_run))
            .expect("letter-run pattern");
        Self {
            config,
            printable_runs,
            letter_runs,
        }
    }

    /// Scrape readable text out of binary content. Returns empty when
    /// the survivors do not add up to a meaningful amount of text.
    pub fn scrape(&self, content: &[u8]) -> String {
        // Permissive decode: every byte maps to the code point of the
        // same value, so decoding can never fail.
        let decoded: String = content.iter().map(|&b| b as char).collect();

        let mut accepted: Vec<String> = Vec::new();
        let mut seen_lower: Vec<String> = Vec::new();

        for pattern in [&self.printable_runs, &self.letter_runs] {
            for found in pattern.find_iter(&decoded) {
                let candidate = found.as_str().trim();
                if !self.keep(candidate) {
                    continue;
                }

                // Drop a candidate already contained in an accepted one.
                let lower = candidate.to_lowercase();
                if seen_lower.iter().any(|seen| seen.contains(&lower)) {
                    continue;
                }

                accepted.push(candidate.to_string());
                seen_lower.push(lower);
            }
        }

        let joined = accepted.join(" ");
        if joined.chars().count() > self.config.min_total_chars {
            joined
        } else {
            String::new()
        }
    }

    fn keep(&self, candidate: &str) -> bool {
        candidate.chars().count() > self.config.min_candidate_chars
            && !candidate.chars().any(|c| NOISE_CHARS.contains(&c))
            && candidate.chars().any(|c| c.is_alphabetic())
            && candidate.chars().filter(|c| c.is_alphabetic()).count() > self.config.min_letters
    }
}

impl Default for BinaryScraper {
    fn default() -> Self {
        Self::new(ScraperConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrape(content: &[u8]) -> String {
        BinaryScraper::default().scrape(content)
    }

    /// Binary padding around a readable run.
    fn embed_in_noise(text: &str) -> Vec<u8> {
        let mut bytes = vec![0x00, 0x01, 0xff, 0xfe];
        bytes.extend_from_slice(text.as_bytes());
        bytes.extend_from_slice(&[0x02, 0x03, 0x80, 0x00]);
        bytes
    }

    #[test]
    fn test_joined_output_above_floor_is_returned() {
        // 101 characters of letters and spaces.
        let text = format!("{}a", "word ".repeat(20));
        assert_eq!(text.chars().count(), 101);

        let result = scrape(&embed_in_noise(&text));
        assert_eq!(result, text);
    }

    #[test]
    fn test_joined_output_at_or_below_floor_is_dropped() {
        // 99 characters: real text, but below the meaningful floor.
        let text = "word ".repeat(20).trim_end().to_string();
        assert_eq!(text.chars().count(), 99);

        assert_eq!(scrape(&embed_in_noise(&text)), "");
    }

    #[test]
    fn test_short_runs_are_ignored() {
        let result = scrape(&embed_in_noise("tiny run"));
        assert_eq!(result, "");
    }

    #[test]
    fn test_runs_without_letters_are_ignored() {
        let text = "0123456789 0123456789 0123456789 0123456789 0123456789 \
                    0123456789 0123456789 0123456789 0123456789 0123456789";
        assert_eq!(scrape(&embed_in_noise(text)), "");
    }

    #[test]
    fn test_contained_duplicates_are_dropped() {
        let sentence = "Quarterly revenue projections for the upcoming fiscal year and planning notes";
        let mut bytes = embed_in_noise(sentence);
        // A second run that is a substring of the first.
        bytes.extend(embed_in_noise("revenue projections for the upcoming"));
        bytes.extend(embed_in_noise("Headcount growth assumptions across all regional offices"));

        let result = scrape(&bytes);
        assert!(result.contains(sentence));
        assert!(result.contains("Headcount growth assumptions"));
        assert_eq!(result.matches("revenue projections").count(), 1);
    }

    #[test]
    fn test_pure_binary_yields_empty() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        // Control characters break up any long printable runs.
        assert_eq!(scrape(&bytes), "");
    }
}
