//! Contraction detectors
//!
//! A left substring can look like a noun while really being a noun glued
//! to the start of a particle (대학생으 + 로) or of a verb ending
//! (폭행당 + 했다). These tests recognise such fragments.

use super::FilterContext;
use crate::predictor::ratio;
use crate::text::{char_len, split_at_char, split_from_end};

impl FilterContext<'_> {
    /// Noun + particle fragment, such as "대학생으" in "대학생으로"
    ///
    /// Looks for the longest plausible noun prefix; when the candidate is
    /// clearly rarer than that prefix and almost every token it starts
    /// ends in a particle cut at a noun prefix, it is a fragment.
    pub fn is_particle_contraction(&self, l: &str) -> bool {
        let t = self.thresholds;
        let n = char_len(l);

        let cuts: Vec<usize> = (2..n)
            .filter(|&e| self.is_likely_noun(split_at_char(l, e).0, t.njsubj_noun_score))
            .collect();
        // Prefixes of one string have distinct lengths, so the longest is unique
        let Some(&longest) = cuts.last() else {
            return false;
        };

        let base = self.frequency(split_at_char(l, longest).0);
        if base == 0 {
            return false;
        }
        if ratio(self.frequency(l) as f64, base as f64) > t.njsubj_frequency_droprate {
            return false;
        }

        let Some(extensions) = self.graph.right_extensions(l) else {
            return false;
        };
        let total: u64 = extensions.values().sum();
        let matched: u64 = extensions
            .iter()
            .filter(|(r, _)| {
                let token = format!("{l}{r}");
                cuts.iter()
                    .any(|&e| self.resources.is_particle(split_at_char(&token, e).1))
            })
            .map(|(_, &count)| count)
            .sum();

        ratio(matched as f64, total as f64) > t.njsubj_proportion
    }

    /// Truncated prefixes such as "떡볶" of "떡볶이"
    ///
    /// Returns prefixes whose remainder is a particle, that score as
    /// nouns on their own, yet occur almost only as part of `l`.
    pub fn truncated_prefixes(&self, l: &str) -> Vec<String> {
        let t = self.thresholds;
        let n = char_len(l);
        let l_frequency = self.frequency(l) as f64;

        (2..n)
            .map(|e| split_at_char(l, e))
            .filter(|(_, r)| self.resources.is_particle(r))
            .filter(|(l0, _)| {
                self.predictor.score(l0) > t.nsubj_noun_score
                    && ratio(self.frequency(l0) as f64, l_frequency) > t.nsubj_proportion
            })
            .map(|(l0, _)| l0.to_string())
            .collect()
    }

    /// Noun + start of a verb ending, such as "폭행당" in "폭행당했다"
    ///
    /// Cuts one or two trailing characters; if the head is a strong
    /// candidate in the dictionary and the cut characters plus each right
    /// extension mostly form standalone tokens, `l` is a contraction.
    pub fn is_verb_ending_contraction(&self, l: &str) -> bool {
        let t = self.thresholds;
        let Some(extensions) = self.graph.right_extensions(l) else {
            return false;
        };
        let total: u64 = extensions.values().sum();
        if total == 0 {
            return false;
        }

        for b in trailing_cut_lengths(l) {
            let (l0, r0) = split_from_end(l, b);
            if !(self.candidates.contains_key(l0) && self.dictionary.contains(l0)) {
                continue;
            }
            let as_eojeol: u64 = extensions
                .iter()
                .filter(|(r, _)| self.is_mostly_standalone(&format!("{r0}{r}")))
                .map(|(_, &count)| count)
                .sum();
            if ratio(as_eojeol as f64, total as f64) > t.nvsube_eojeol_proportion {
                return true;
            }
        }
        false
    }

    /// Whether `l` keeps only a small fraction of a known head's frequency
    pub fn is_frequency_drop(&self, l: &str) -> bool {
        let t = self.thresholds;
        let l_frequency = self.frequency(l) as f64;

        trailing_cut_lengths(l).any(|b| {
            let (l0, _) = split_from_end(l, b);
            self.is_known_noun(l0)
                && ratio(l_frequency, self.frequency(l0) as f64) < t.nwsub_frequency_droprate
        })
    }

    fn is_mostly_standalone(&self, word: &str) -> bool {
        let total = self.frequency(word);
        if total == 0 {
            return false;
        }
        let proportion = ratio(self.graph.eojeol_frequency(word) as f64, total as f64).min(1.0);
        proportion > self.thresholds.nvsube_eojeol_proportion
    }
}

/// One trailing character for short words, one or two otherwise
fn trailing_cut_lengths(l: &str) -> impl Iterator<Item = usize> {
    let max = if char_len(l) <= 3 { 1 } else { 2 };
    1..=max
}
