//! Cosine similarity calculations

use ndarray::{Array2, ArrayView1};

use super::vectorizer::FeatureVector;

/// Calculate cosine similarity between two feature vectors
///
/// Formula: cos(θ) = (A · B) / (||A|| ||B||)
///
/// Returns 0.0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f64 {
    debug_assert_eq!(
        a.len(),
        b.len(),
        "Feature vectors must come from the same vocabulary"
    );

    let dot_product = a.view().dot(&b.view());

    let norm_a = a.magnitude();
    let norm_b = b.magnitude();

    // Avoid division by zero
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Similarity of `query` against each vector in `vectors`, in order
pub fn similarity_row(query: &FeatureVector, vectors: &[FeatureVector]) -> Vec<f64> {
    vectors
        .iter()
        .map(|vector| cosine_similarity(query, vector))
        .collect()
}

/// Dense, symmetric N×N matrix of pairwise cosine similarities
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    data: Array2<f64>,
}

impl SimilarityMatrix {
    /// Computes every pairwise similarity once and mirrors it across the
    /// diagonal. The diagonal is 1.0 for nonzero vectors and 0.0 otherwise.
    pub fn build(vectors: &[FeatureVector]) -> Self {
        let size = vectors.len();
        let mut data = Array2::<f64>::zeros((size, size));

        for i in 0..size {
            data[[i, i]] = if vectors[i].magnitude() > 0.0 { 1.0 } else { 0.0 };
            for j in (i + 1)..size {
                let score = cosine_similarity(&vectors[i], &vectors[j]);
                data[[i, j]] = score;
                data[[j, i]] = score;
            }
        }

        tracing::debug!(size, "Built similarity matrix");

        Self { data }
    }

    /// Number of rows (and columns)
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Similarity between documents `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[[i, j]]
    }

    /// All similarities of document `i`
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.data.row(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fv(weights: &[f64]) -> FeatureVector {
        FeatureVector::from(weights.to_vec())
    }

    #[test]
    fn test_cosine_similarity_identical() {
        let a = fv(&[1.0, 2.0, 3.0]);
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = fv(&[1.0, 0.0]);
        let b = fv(&[0.0, 1.0]);
        assert!(cosine_similarity(&a, &b).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_similarity_opposite() {
        let a = fv(&[1.0, 2.0]);
        let b = fv(&[-1.0, -2.0]);
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_similarity_is_symmetric() {
        let a = fv(&[0.3, 1.7, 0.0, 2.2]);
        let b = fv(&[1.1, 0.0, 0.4, 0.9]);
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        let a = fv(&[0.0, 0.0]);
        let b = fv(&[1.0, 1.0]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&a, &a), 0.0);
    }

    #[test]
    fn test_matrix_is_symmetric_with_unit_diagonal() {
        let vectors = vec![
            fv(&[1.0, 0.0, 2.0]),
            fv(&[0.5, 1.5, 0.0]),
            fv(&[2.0, 2.0, 2.0]),
        ];
        let matrix = SimilarityMatrix::build(&vectors);

        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
                assert!((-1.0..=1.0).contains(&matrix.get(i, j)));
            }
        }
    }

    #[test]
    fn test_matrix_zero_vector_row() {
        let vectors = vec![fv(&[0.0, 0.0]), fv(&[1.0, 0.0])];
        let matrix = SimilarityMatrix::build(&vectors);

        assert_eq!(matrix.row(0).to_vec(), vec![0.0, 0.0]);
        assert_eq!(matrix.get(1, 1), 1.0);
    }

    #[test]
    fn test_similarity_row_matches_pairwise() {
        let query = fv(&[1.0, 1.0]);
        let vectors = vec![fv(&[1.0, 0.0]), fv(&[1.0, 1.0])];
        let row = similarity_row(&query, &vectors);

        assert_eq!(row.len(), 2);
        assert!((row[1] - 1.0).abs() < 1e-12);
        assert!(row[0] < row[1]);
    }
}
