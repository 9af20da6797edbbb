use chrono;
use tvmaze::models::Show;
use crate::view_state::ViewState;

pub const APP_TITLE: &str = "StreamFlex";
pub const APP_DESCRIPTION: &str = "Streaming dashboard demo built on the TVmaze public API";

pub const MISSING_VALUE: &str = "—";
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/300x450?text=No+Image";
pub const DEFAULT_BACKDROP_URL: &str =
    "https://images.pexels.com/photos/7991379/pexels-photo-7991379.jpeg?auto=compress&cs=tinysrgb&w=1600";

const HERO_DEFAULT_YEAR: &str = "2024";
const HERO_DEFAULT_GENRES: &str = "Drama";
const HERO_SUBTEXT: &str = "Live data • Demo project";

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Year of a `YYYY-MM-DD` premiere date, or an em-dash if absent or unparseable.
pub fn release_year(premiered: Option<&str>) -> String {
    let date = match non_empty(premiered) {
        Some(date) => date,
        None => return MISSING_VALUE.to_string(),
    };
    match chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) => chrono::Datelike::year(&date).to_string(),
        Err(_) => MISSING_VALUE.to_string(),
    }
}

pub fn rating_label(show: &Show) -> String {
    match show.rating_average() {
        Some(average) => average.to_string(),
        None => MISSING_VALUE.to_string(),
    }
}

pub fn poster_url(show: &Show) -> &str {
    non_empty(show.image_medium())
        .or(non_empty(show.image_original()))
        .unwrap_or(PLACEHOLDER_POSTER_URL)
}

pub fn backdrop_url(hero: Option<&Show>) -> &str {
    let hero = match hero {
        Some(hero) => hero,
        None => return DEFAULT_BACKDROP_URL,
    };
    non_empty(hero.image_original())
        .or(non_empty(hero.image_medium()))
        .unwrap_or(DEFAULT_BACKDROP_URL)
}

/// Strings shown in the hero banner. Each field falls back on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroText {
    pub tag: String,
    pub title: String,
    pub year: String,
    pub genres: String,
    pub subtext: String,
    pub backdrop_url: String,
}

impl HeroText {
    pub fn from_state(state: &ViewState) -> Self {
        let hero = state.hero();
        let error = state.error();

        let tag = if state.is_loading() {
            "Loading…"
        } else if hero.is_some() {
            "Top pick for you"
        } else {
            "No data"
        };

        let title = match (hero, error) {
            (Some(hero), _) => hero.name.clone(),
            (None, Some(_)) => "Error loading shows".to_string(),
            (None, None) => APP_TITLE.to_string(),
        };

        let year = match hero {
            Some(hero) => release_year(hero.premiered.as_deref()),
            None => HERO_DEFAULT_YEAR.to_string(),
        };

        let genres = hero
            .map(|hero| hero.genres.iter().take(2).map(|genre| genre.as_str()).collect::<Vec<_>>().join(" • "))
            .filter(|genres| !genres.is_empty())
            .unwrap_or_else(|| HERO_DEFAULT_GENRES.to_string());

        let subtext = error.unwrap_or(HERO_SUBTEXT).to_string();

        Self {
            tag: tag.to_string(),
            title,
            year,
            genres,
            subtext,
            backdrop_url: backdrop_url(hero).to_string(),
        }
    }
}
