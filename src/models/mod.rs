mod video;

pub use video::{GenreField, RawVideo, VideoRecord};
