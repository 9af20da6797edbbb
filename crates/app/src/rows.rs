use enum_map;
use tvmaze::models::Show;

#[derive(Debug, PartialEq, Eq, Copy, Clone, enum_map::Enum)]
pub enum RowKind {
    Trending,
    TopRated,
    Drama,
    SciFi,
}

impl RowKind {
    pub const ALL: [RowKind; 4] = [RowKind::Trending, RowKind::TopRated, RowKind::Drama, RowKind::SciFi];

    pub fn title(&self) -> &'static str {
        match self {
            RowKind::Trending => "Trending Now",
            RowKind::TopRated => "Top Rated",
            RowKind::Drama => "Drama Series",
            RowKind::SciFi => "Sci-Fi & Fantasy",
        }
    }

    /// Genre tag a record must carry to appear in this row, if the row filters by genre.
    pub fn genre(&self) -> Option<&'static str> {
        match self {
            RowKind::Drama => Some("Drama"),
            RowKind::SciFi => Some("Science-Fiction"),
            RowKind::Trending | RowKind::TopRated => None,
        }
    }

    fn accepts(&self, show: &Show, rules: &RowRules) -> bool {
        match self {
            RowKind::Trending => true,
            RowKind::TopRated => show.rating_average().unwrap_or(0.0) >= rules.top_rated_threshold,
            RowKind::Drama | RowKind::SciFi => self.genre().map_or(false, |genre| show.has_genre(genre)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowRules {
    pub row_limit: usize,
    pub top_rated_threshold: f64,
}

impl Default for RowRules {
    fn default() -> Self {
        Self {
            row_limit: 20,
            top_rated_threshold: 8.0,
        }
    }
}

/// Indices into the batch for each row, filtered first and capped second.
pub type RowIndices = enum_map::EnumMap<RowKind, Vec<usize>>;

fn derive_row(shows: &[Show], kind: RowKind, rules: &RowRules) -> Vec<usize> {
    shows
        .iter()
        .enumerate()
        .filter(|(_, show)| kind.accepts(show, rules))
        .map(|(index, _)| index)
        .take(rules.row_limit)
        .collect()
}

pub fn derive_rows(shows: &[Show], rules: &RowRules) -> RowIndices {
    enum_map::enum_map! {
        kind => derive_row(shows, kind, rules),
    }
}

/// A fetched batch together with its derived rows.
#[derive(Debug, Clone)]
pub struct Catalog {
    shows: Vec<Show>,
    rows: RowIndices,
}

impl Catalog {
    pub fn new(shows: Vec<Show>, rules: &RowRules) -> Self {
        let rows = derive_rows(shows.as_slice(), rules);
        Self { shows, rows }
    }

    pub fn shows(&self) -> &[Show] {
        self.shows.as_slice()
    }

    pub fn row(&self, kind: RowKind) -> Vec<&Show> {
        self.rows[kind].iter().map(|&index| &self.shows[index]).collect()
    }

    pub fn hero(&self) -> Option<&Show> {
        self.rows[RowKind::Trending].first().map(|&index| &self.shows[index])
    }
}
