//! TF-IDF vectorization over a jointly-built vocabulary.
//!
//! Every vector produced by one call to [`vectorize`] shares the same
//! dimension ordering, so any two of them can be compared directly.

use std::collections::{HashMap, HashSet};

use ndarray::{Array1, ArrayView1};

/// Common English words that carry no signal for matching videos
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "an", "and", "are", "as", "at", "be", "been", "but", "by",
    "can", "for", "from", "had", "has", "have", "he", "her", "his", "how", "i", "if", "in",
    "into", "is", "it", "its", "of", "on", "or", "our", "she", "so", "than", "that", "the",
    "their", "them", "then", "there", "they", "this", "to", "was", "we", "were", "what",
    "when", "which", "who", "will", "with", "you", "your",
];

/// Term-to-dimension mapping shared by every vector of one invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    idf: Array1<f64>,
}

impl Vocabulary {
    /// Number of dimensions
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    /// Dimension assigned to `term`, if it was observed
    pub fn dimension(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Inverse document frequency of `term`, if it was observed
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.dimension(term).map(|dim| self.idf[dim])
    }
}

/// Term weights for one document
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Array1<f64>);

impl FeatureVector {
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.0.view()
    }

    /// Weight of dimension `dim`
    pub fn weight(&self, dim: usize) -> f64 {
        self.0[dim]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// L2 norm
    pub fn magnitude(&self) -> f64 {
        self.0.dot(&self.0).sqrt()
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(weights: Vec<f64>) -> Self {
        Self(Array1::from_vec(weights))
    }
}

impl From<Array1<f64>> for FeatureVector {
    fn from(weights: Array1<f64>) -> Self {
        Self(weights)
    }
}

/// Lowercases `text`, splits on anything that is not alphanumeric and drops
/// stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
        .collect()
}

/// Builds one vocabulary from all `documents` and returns a TF-IDF vector
/// for each of them, in input order.
///
/// Dimensions are assigned in first-seen order, so the output is
/// deterministic for a given document sequence. Weights are
/// `count(term, doc) * idf(term)` with the smoothed
/// `idf = ln((1 + N) / (1 + df)) + 1`.
pub fn vectorize<S: AsRef<str>>(documents: &[S]) -> (Vocabulary, Vec<FeatureVector>) {
    let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut doc_freq: Vec<usize> = Vec::new();

    for tokens in &tokenized {
        let mut seen: HashSet<&str> = HashSet::new();
        for token in tokens {
            let dim = match index.get(token) {
                Some(&dim) => dim,
                None => {
                    let dim = doc_freq.len();
                    index.insert(token.clone(), dim);
                    doc_freq.push(0);
                    dim
                }
            };
            if seen.insert(token.as_str()) {
                doc_freq[dim] += 1;
            }
        }
    }

    let n_docs = documents.len() as f64;
    let idf: Array1<f64> = doc_freq
        .iter()
        .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    let vectors = tokenized
        .iter()
        .map(|tokens| {
            let mut counts = Array1::<f64>::zeros(idf.len());
            for token in tokens {
                counts[index[token]] += 1.0;
            }
            FeatureVector(counts * &idf)
        })
        .collect();

    tracing::debug!(
        documents = documents.len(),
        vocabulary = idf.len(),
        "Vectorized documents"
    );

    (Vocabulary { index, idf }, vectors)
}
