//! Extraction pipeline
//!
//! [`NounExtractor`] owns the configuration, the resources and the trained
//! graph. Each extraction runs the same stages:
//!
//! 1. seed nouns fused to a predicate stem in standalone tokens
//! 2. score every frequent left substring
//! 3. keep the strong candidates and run the filter cascade over them
//! 4. accept compounds among the remaining standalone tokens
//! 5. merge everything into the output dictionary
//!
//! A trained extractor can be reused with different [`ExtractParams`];
//! every call starts again from the base dictionary.

use crate::config::{ExtractParams, ExtractorConfig};
use crate::dictionary::{NounDictionary, NounEntry};
use crate::error::Result;
use crate::filters::{CandidateScores, FilterContext};
use crate::graph::CooccurrenceGraph;
use crate::predictor::{NounPredictor, NounScore};
use crate::resources::ResourceStore;
use crate::seed;
use crate::text::char_len;
use std::collections::{BTreeSet, HashSet};

/// Unsupervised noun extractor
#[derive(Debug, Clone)]
pub struct NounExtractor {
    config: ExtractorConfig,
    resources: ResourceStore,
    base_dictionary: NounDictionary,
    graph: CooccurrenceGraph,
}

impl NounExtractor {
    /// Create an untrained extractor
    ///
    /// The particle set of `resources` is rebuilt from the configured
    /// `particle_score`.
    pub fn new(config: ExtractorConfig, resources: ResourceStore) -> Result<Self> {
        config.validate()?;
        let resources = resources.with_particle_threshold(config.thresholds.particle_score);
        Ok(Self {
            config,
            resources,
            base_dictionary: NounDictionary::new(),
            graph: CooccurrenceGraph::default(),
        })
    }

    /// Start every extraction from `dictionary` instead of an empty one
    ///
    /// Entries that stay provisional are scored by the predictor at the
    /// end of the run when the word occurs in the corpus.
    pub fn with_base_dictionary(mut self, dictionary: NounDictionary) -> Self {
        self.base_dictionary = dictionary;
        self
    }

    /// Build the substring graph from whitespace-delimited sentences
    ///
    /// Replaces any previously trained graph.
    pub fn train<I, S>(&mut self, sentences: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.graph = CooccurrenceGraph::build(
            sentences,
            self.config.l_max_length,
            self.config.r_max_length,
        );
    }

    /// Train, then extract with `params`, restricted to `wordset` when given
    pub fn train_extract<I, S>(
        &mut self,
        sentences: I,
        wordset: Option<&HashSet<String>>,
        params: &ExtractParams,
    ) -> NounDictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.train(sentences);
        self.extract_from(wordset, params)
    }

    /// Extract nouns from every left substring of two characters or more
    pub fn extract(&self, params: &ExtractParams) -> NounDictionary {
        self.extract_from(None, params)
    }

    /// Extract nouns, restricting the scored candidates to `wordset` when given
    pub fn extract_from(
        &self,
        wordset: Option<&HashSet<String>>,
        params: &ExtractParams,
    ) -> NounDictionary {
        let thresholds = &self.config.thresholds;
        let mut dictionary = self.base_dictionary.clone();

        let eojeol_candidates = seed::eojeol_candidates(
            &self.graph,
            params.min_count,
            thresholds.minimum_eojeol_proportion,
        );
        let seeded = seed::seed_nouns(
            &self.graph,
            &self.resources,
            &eojeol_candidates,
            thresholds.seed_noun_score,
            &mut dictionary,
        );
        log::info!("seeded {seeded} nouns from noun + predicate tokens");

        let scores = self.score_candidates(wordset, params.min_count);
        log::debug!("scored {} candidates", scores.len());

        let strong: CandidateScores = scores
            .into_iter()
            .filter(|(l, score)| {
                score.score > params.minimum_noun_score
                    && score.feature_proportion > params.minimum_feature_proportion
                    && char_len(l) > 1
            })
            .collect();
        log::debug!("{} strong candidates", strong.len());

        let accepted = self.postprocess(&dictionary, &strong);
        log::info!("accepted {} of {} strong candidates", accepted.len(), strong.len());

        let compounds =
            self.accept_compounds(&eojeol_candidates, &strong, &accepted, &mut dictionary);
        log::info!("accepted {compounds} compounds from standalone tokens");

        self.merge(dictionary, accepted)
    }

    /// Score the candidate left substrings
    ///
    /// Without a `wordset` every left substring of two characters or more
    /// is a candidate. Candidates must occur at least `min_count` times and
    /// must not be a suffix in the resources.
    pub fn score_candidates(
        &self,
        wordset: Option<&HashSet<String>>,
        min_count: u64,
    ) -> CandidateScores {
        let predictor = self.predictor();
        let keep = |l: &str| {
            self.graph.l_frequency(l) >= min_count && !self.resources.is_grammatical(l)
        };

        match wordset.filter(|words| !words.is_empty()) {
            Some(words) => words
                .iter()
                .filter(|l| keep(l.as_str()))
                .map(|l| (l.clone(), predictor.predict(l)))
                .collect(),
            None => self
                .graph
                .left_counts()
                .filter(|&(l, _)| char_len(l) >= 2 && keep(l))
                .map(|(l, _)| (l.to_string(), predictor.predict(l)))
                .collect(),
        }
    }

    /// Noun-likelihood record of `l` in the trained graph
    pub fn predict(&self, l: &str) -> NounScore {
        self.predictor().predict(l)
    }

    /// The trained graph
    pub fn graph(&self) -> &CooccurrenceGraph {
        &self.graph
    }

    /// The loaded resources
    pub fn resources(&self) -> &ResourceStore {
        &self.resources
    }

    /// The configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The dictionary every extraction starts from
    pub fn base_dictionary(&self) -> &NounDictionary {
        &self.base_dictionary
    }

    fn predictor(&self) -> NounPredictor<'_> {
        NounPredictor::new(&self.graph, &self.resources)
    }

    fn context<'a>(
        &'a self,
        dictionary: &'a NounDictionary,
        strong: &'a CandidateScores,
        accepted: &'a CandidateScores,
    ) -> FilterContext<'a> {
        FilterContext::new(
            &self.graph,
            &self.resources,
            &self.config.thresholds,
            dictionary,
            strong,
            accepted,
        )
    }

    /// Run the filter cascade over the strong candidates
    ///
    /// Candidates are visited in key order; the locative rule of the suffix
    /// stoplist sees the candidates accepted before it.
    fn postprocess(
        &self,
        dictionary: &NounDictionary,
        strong: &CandidateScores,
    ) -> CandidateScores {
        let empty = CandidateScores::new();
        let ctx = self.context(dictionary, strong, &empty);

        let particle_contractions: BTreeSet<&str> = strong
            .keys()
            .map(String::as_str)
            .filter(|l| ctx.is_particle_contraction(l))
            .collect();
        let truncated: BTreeSet<String> = strong
            .keys()
            .filter(|l| !particle_contractions.contains(l.as_str()))
            .flat_map(|l| ctx.truncated_prefixes(l))
            .collect();
        let verb_contractions: BTreeSet<&str> = strong
            .keys()
            .map(String::as_str)
            .filter(|l| {
                ctx.is_verb_ending_contraction(l) && ctx.is_frequency_drop(l) && !ctx.is_compound(l)
            })
            .collect();
        log::debug!(
            "contractions: {} noun + particle, {} truncated, {} noun + ending",
            particle_contractions.len(),
            truncated.len(),
            verb_contractions.len()
        );

        let mut accepted = CandidateScores::new();
        for (noun, score) in strong {
            if particle_contractions.contains(noun.as_str())
                || truncated.contains(noun)
                || verb_contractions.contains(noun.as_str())
            {
                continue;
            }

            let ctx = self.context(dictionary, strong, &accepted);
            let passes = (ctx.passes_unique_particle(noun) || ctx.is_compound(noun))
                && ctx.passes_suffix_stoplist(noun)
                && ctx.passes_verbalizer(noun);
            if passes {
                accepted.insert(noun.clone(), *score);
            }
        }
        accepted
    }

    /// Accept compounds among standalone tokens the cascade did not accept
    ///
    /// Returns the number of compounds added to `dictionary`.
    fn accept_compounds(
        &self,
        candidates: &[(&str, u64)],
        strong: &CandidateScores,
        accepted: &CandidateScores,
        dictionary: &mut NounDictionary,
    ) -> usize {
        let mut added = 0;
        for &(l, count) in candidates {
            if accepted.contains_key(l) {
                continue;
            }

            let ctx = self.context(dictionary, strong, accepted);
            if ctx.is_particle_contraction(l)
                || ctx.is_noun_particle(l)
                || ctx.is_noun_predicate(l)
            {
                continue;
            }
            if ctx.passes_suffix_stoplist(l) && ctx.is_compound(l) {
                dictionary.insert(l, NounEntry::Provisional(count as f64));
                added += 1;
            }
        }
        added
    }

    /// Score provisional entries and lay the accepted nouns over them
    ///
    /// Particles never reach the output, even when the base dictionary
    /// lists them.
    fn merge(&self, mut dictionary: NounDictionary, accepted: CandidateScores) -> NounDictionary {
        dictionary.retain(|noun, _| !self.resources.is_particle(noun));

        let predictor = self.predictor();
        let rescore: Vec<String> = dictionary
            .iter()
            .filter(|(noun, entry)| {
                entry.is_provisional()
                    && !accepted.contains_key(noun.as_str())
                    && self.graph.contains_left(noun)
            })
            .map(|(noun, _)| noun.clone())
            .collect();
        for noun in rescore {
            let score = predictor.predict(&noun);
            dictionary.insert(noun, score);
        }

        for (noun, score) in accepted {
            dictionary.insert(noun, score);
        }
        dictionary
    }
}
