use serde;
use serde_with;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Default)]
pub struct ShowImage {
    pub medium: Option<String>,
    pub original: Option<String>,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Default)]
pub struct ShowRating {
    pub average: Option<f64>,
}

#[serde_with::serde_as]
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Default)]
pub struct Show {
    pub id: u32,
    pub name: String,
    pub image: Option<ShowImage>,
    pub rating: Option<ShowRating>,
    // tvmaze sends either an empty list or null for shows without genres
    #[serde_as(as = "serde_with::DefaultOnNull")]
    #[serde(default)]
    pub genres: Vec<String>,
    pub premiered: Option<String>,
}

impl Show {
    pub fn rating_average(&self) -> Option<f64> {
        self.rating.as_ref().and_then(|rating| rating.average)
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|entry| entry == genre)
    }

    pub fn first_genre(&self) -> Option<&str> {
        self.genres.first().map(|genre| genre.as_str())
    }

    pub fn image_medium(&self) -> Option<&str> {
        self.image.as_ref().and_then(|image| image.medium.as_deref())
    }

    pub fn image_original(&self) -> Option<&str> {
        self.image.as_ref().and_then(|image| image.original.as_deref())
    }
}
