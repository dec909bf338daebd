//! Decomposition tests: compounds, noun + particle and noun + predicate

use super::FilterContext;
use crate::text::{char_boundaries, char_len, split_at_char};

impl FilterContext<'_> {
    /// Whether `l` splits into two, or three for six characters and more,
    /// adjacent known nouns
    ///
    /// The head always has at least two characters. The tail of a two-way
    /// split may be a single character; each part of a three-way split has
    /// two or more. Strings under four characters are never compounds.
    pub fn is_compound(&self, l: &str) -> bool {
        let bounds = char_boundaries(l);
        let n = bounds.len() - 1;
        if n < 4 {
            return false;
        }

        let two_way = (2..n).any(|e| {
            let (l0, l1) = l.split_at(bounds[e]);
            self.is_known_noun(l0) && self.is_known_noun(l1)
        });
        if two_way {
            return true;
        }

        if n < 6 {
            return false;
        }
        for e1 in 2..n - 3 {
            let l0 = &l[..bounds[e1]];
            if !self.is_known_noun(l0) {
                continue;
            }
            for e2 in e1 + 2..n - 1 {
                let l1 = &l[bounds[e1]..bounds[e2]];
                let l2 = &l[bounds[e2]..];
                if self.is_known_noun(l1) && self.is_known_noun(l2) {
                    return true;
                }
            }
        }
        false
    }

    /// Known noun followed by nothing or by a positively scored suffix
    pub fn is_noun_particle(&self, w: &str) -> bool {
        (2..=char_len(w)).any(|e| {
            let (l, r) = split_at_char(w, e);
            self.is_known_noun(l)
                && (r.is_empty() || self.resources.suffix_score(r).is_some_and(|s| s > 0.0))
        })
    }

    /// Accepted noun followed by a verb or adjective stem
    pub fn is_noun_predicate(&self, l: &str) -> bool {
        (2..char_len(l)).any(|e| {
            let (head, tail) = split_at_char(l, e);
            self.is_accepted_noun(head) && self.resources.is_predicate_stem(tail)
        })
    }
}
