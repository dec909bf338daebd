//! Hard rules applied to strong candidates after scoring

use super::FilterContext;
use crate::hangul;
use crate::predictor::ratio;
use crate::tables::{
    self, LOCATIVE_SUFFIX, PASSIVE_SYLLABLE, RETENTION_BIGRAMS, RETENTION_CHARS, STOP_BIGRAMS,
    TRAILING_FRAGMENT_RULES, VERBALIZER_INITIAL,
};
use crate::text::{char_len, last_char, split_from_end};

impl FilterContext<'_> {
    /// Rare candidates with a single positive feature must show noun-like
    /// extensions
    ///
    /// Candidates outside the strong set, or frequent enough, pass. Otherwise
    /// more than half of the non-empty right extensions must start with a
    /// pass-set particle or read as noun + particle.
    pub fn passes_unique_particle(&self, l: &str) -> bool {
        let t = self.thresholds;
        let Some(record) = self.candidates.get(l) else {
            return true;
        };
        if record.count > t.unijosa_max_count
            || record.positive_features > t.unijosa_max_positive_features
        {
            return true;
        }

        let Some(extensions) = self.graph.right_extensions(l).filter(|e| !e.is_empty()) else {
            return false;
        };
        let (passed, nonempty) = extensions
            .iter()
            .filter(|(r, _)| !r.is_empty())
            .fold((0u64, 0u64), |(passed, nonempty), (r, &count)| {
                let ok = tables::in_pass_set(r) || self.is_noun_particle(r);
                (passed + if ok { count } else { 0 }, nonempty + count)
            });

        ratio(passed as f64, nonempty as f64) > t.unijosa_pass_proportion
    }

    /// Rejects endings that mark `l` as a stem or a noun + particle
    pub fn passes_suffix_stoplist(&self, l: &str) -> bool {
        let t = self.thresholds;
        if self.resources.is_predicate_stem(l) {
            return false;
        }

        let tail = split_from_end(l, 2).1;
        if STOP_BIGRAMS.contains(&tail) {
            return false;
        }

        let Some(last) = last_char(l) else {
            return true;
        };

        for (ch, particles) in TRAILING_FRAGMENT_RULES {
            if last != *ch {
                continue;
            }
            let proportion: f64 = particles
                .iter()
                .map(|r| self.graph.extension_proportion(l, r))
                .sum();
            if proportion > t.suffix_particle_proportion {
                return false;
            }
        }

        if (RETENTION_CHARS.contains(&last) || RETENTION_BIGRAMS.contains(&tail))
            && self.retention(l) < t.suffix_frequency_droprate
        {
            return false;
        }

        if tail == LOCATIVE_SUFFIX {
            let head = split_from_end(l, 2).0;
            if char_len(l) == 3 || self.is_accepted_noun(head) {
                return false;
            }
        }

        true
    }

    /// Rejects 당/하다 verbalizations
    ///
    /// Passes at once when `l` does not end in 당 and its head without
    /// the last character is a known noun. Otherwise the extensions whose
    /// first syllable starts with ㅎ must stay below the configured share
    /// of all uses of `l`.
    pub fn passes_verbalizer(&self, l: &str) -> bool {
        let head = split_from_end(l, 1).0;
        if last_char(l) != Some(PASSIVE_SYLLABLE) && self.is_known_noun(head) {
            return true;
        }

        let Some(extensions) = self.graph.right_extensions(l) else {
            return true;
        };
        let total: u64 = extensions.values().sum();
        if total == 0 {
            return true;
        }
        let verbalized: u64 = extensions
            .iter()
            .filter(|(r, _)| {
                r.chars()
                    .next()
                    .and_then(hangul::initial_consonant)
                    .is_some_and(|initial| initial == VERBALIZER_INITIAL)
            })
            .map(|(_, &count)| count)
            .sum();

        ratio(verbalized as f64, total as f64) < self.thresholds.dang_hada_h_proportion
    }

    /// Frequency of `l` relative to `l` minus its last character
    fn retention(&self, l: &str) -> f64 {
        let shorter = split_from_end(l, 1).0;
        if !self.graph.contains_left(shorter) {
            return 0.0;
        }
        ratio(self.frequency(l) as f64, self.frequency(shorter) as f64)
    }
}
