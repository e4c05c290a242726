use serde::{Deserialize, Serialize};

use crate::recommend::RecommendError;

/// Characters that only show up inside a genre label when a raw delimited
/// string was passed through without being split.
const LIST_DELIMITERS: [char; 3] = ['|', ',', ';'];

/// A video as consumed by the recommendation engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoRecord {
    /// Display title, also the identity key within one candidate set
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Ordered genre labels (e.g. "Comedy", "Sci-Fi")
    pub genres: Vec<String>,
}

impl VideoRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>, genres: &[&str]) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    /// Returns true if any of this video's genres appears in `favorites`
    pub fn has_any_genre(&self, favorites: &[String]) -> bool {
        self.genres.iter().any(|genre| favorites.contains(genre))
    }

    /// Text fed to the vectorizer in title-similarity mode
    pub fn document(&self) -> String {
        let mut parts = Vec::with_capacity(self.genres.len() + 2);
        parts.push(self.title.as_str());
        parts.push(self.description.as_str());
        parts.extend(self.genres.iter().map(String::as_str));
        parts.join(" ")
    }

    /// Rejects records that were not normalized before entering the engine
    pub fn validate(&self) -> Result<(), RecommendError> {
        if self.title.trim().is_empty() {
            return Err(RecommendError::InvalidRecord(
                "video title must not be blank".to_string(),
            ));
        }

        for genre in &self.genres {
            if genre.trim().is_empty() {
                return Err(RecommendError::InvalidRecord(format!(
                    "video '{}' has a blank genre label",
                    self.title
                )));
            }
            if genre.contains(LIST_DELIMITERS) {
                return Err(RecommendError::InvalidRecord(format!(
                    "video '{}' has an unsplit genre list '{}'",
                    self.title, genre
                )));
            }
        }

        Ok(())
    }
}

/// Genre field as stored by the catalog: either a proper list or a single
/// delimited string such as `"Adventure|Animation|Children"`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum GenreField {
    List(Vec<String>),
    Delimited(String),
}

impl GenreField {
    /// Splits the field into trimmed, non-empty labels
    pub fn into_labels(self, delimiter: char) -> Vec<String> {
        let labels: Vec<String> = match self {
            GenreField::List(labels) => labels,
            GenreField::Delimited(raw) => raw.split(delimiter).map(str::to_string).collect(),
        };

        labels
            .into_iter()
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty())
            .collect()
    }
}

impl Default for GenreField {
    fn default() -> Self {
        GenreField::List(Vec::new())
    }
}

/// A video exactly as the catalog returns it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawVideo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genres: GenreField,
}

impl RawVideo {
    /// Converts the catalog shape into an engine record
    pub fn normalize(self, delimiter: char) -> VideoRecord {
        VideoRecord {
            title: self.title.trim().to_string(),
            description: self.description.unwrap_or_default(),
            genres: self.genres.into_labels(delimiter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_delimited_genres() {
        let raw = RawVideo {
            title: "Toy Story (1995)".to_string(),
            description: None,
            genres: GenreField::Delimited("Adventure|Animation| Children |".to_string()),
        };

        let video = raw.normalize('|');
        assert_eq!(video.title, "Toy Story (1995)");
        assert_eq!(video.description, "");
        assert_eq!(video.genres, vec!["Adventure", "Animation", "Children"]);
    }

    #[test]
    fn test_normalize_list_genres_is_untouched() {
        let raw = RawVideo {
            title: "Heat (1995)".to_string(),
            description: Some("A heist".to_string()),
            genres: GenreField::List(vec!["Action".to_string(), "Crime".to_string()]),
        };

        let video = raw.normalize('|');
        assert_eq!(video.genres, vec!["Action", "Crime"]);
        assert!(video.validate().is_ok());
    }

    #[test]
    fn test_genre_field_deserializes_both_shapes() {
        let delimited: RawVideo =
            serde_json::from_str(r#"{"title":"A","genres":"Comedy|Drama"}"#).unwrap();
        assert_eq!(
            delimited.genres,
            GenreField::Delimited("Comedy|Drama".to_string())
        );

        let list: RawVideo =
            serde_json::from_str(r#"{"title":"B","genres":["Comedy","Drama"]}"#).unwrap();
        assert_eq!(
            list.genres,
            GenreField::List(vec!["Comedy".to_string(), "Drama".to_string()])
        );

        let missing: RawVideo = serde_json::from_str(r#"{"title":"C"}"#).unwrap();
        assert_eq!(missing.genres, GenreField::List(vec![]));
    }

    #[test]
    fn test_validate_rejects_unsplit_genres() {
        let video = VideoRecord::new("A", "", &["Comedy|Drama"]);
        assert!(matches!(
            video.validate(),
            Err(RecommendError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let video = VideoRecord::new("  ", "", &["Comedy"]);
        assert!(matches!(
            video.validate(),
            Err(RecommendError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_document_joins_all_fields() {
        let video = VideoRecord::new("Heat", "A heist", &["Action", "Crime"]);
        assert_eq!(video.document(), "Heat A heist Action Crime");
    }

    #[test]
    fn test_has_any_genre() {
        let video = VideoRecord::new("A", "", &["Comedy", "Drama"]);
        assert!(video.has_any_genre(&["Drama".to_string()]));
        assert!(!video.has_any_genre(&["Horror".to_string()]));
    }
}
