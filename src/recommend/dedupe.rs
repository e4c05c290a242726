use std::collections::HashSet;

use crate::models::VideoRecord;

/// Keeps the first record seen for each title, in first-seen order
pub fn dedupe(videos: Vec<VideoRecord>) -> Vec<VideoRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(videos.len());
    videos
        .into_iter()
        .filter(|video| seen.insert(video.title.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(videos: &[VideoRecord]) -> Vec<&str> {
        videos.iter().map(|v| v.title.as_str()).collect()
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let videos = vec![
            VideoRecord::new("A", "first", &["Comedy"]),
            VideoRecord::new("B", "", &["Drama"]),
            VideoRecord::new("A", "second", &["Horror"]),
        ];

        let unique = dedupe(videos);
        assert_eq!(titles(&unique), vec!["A", "B"]);
        assert_eq!(unique[0].description, "first");
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let videos = vec![
            VideoRecord::new("C", "", &[]),
            VideoRecord::new("A", "", &[]),
            VideoRecord::new("C", "", &[]),
            VideoRecord::new("B", "", &[]),
            VideoRecord::new("A", "", &[]),
        ];

        let once = dedupe(videos);
        let twice = dedupe(once.clone());
        assert_eq!(once, twice);
        assert_eq!(titles(&once), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_dedupe_empty() {
        assert!(dedupe(Vec::new()).is_empty());
    }
}
