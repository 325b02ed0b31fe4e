//! Puzzle sources: where today's puzzle comes from.
//!
//! A source only fetches a [`PuzzleCollection`]. [`load_daily`] turns that
//! into a playable puzzle and absorbs every failure by falling back to the
//! built-in puzzle, so players never see a loading error.

use async_trait::async_trait;
use chrono::Datelike;
use derive_more::{Display, Error};
use intersections_core::{Puzzle, PuzzleCollection, PuzzleError};
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// Anything that can produce a puzzle collection.
#[async_trait]
pub trait PuzzleSource: Send + Sync {
    /// Fetches and parses the collection.
    async fn fetch(&self) -> Result<PuzzleCollection, SourceError>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}

/// Puzzle collection stored in a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a file source.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PuzzleSource for FileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<PuzzleCollection, SourceError> {
        let json = tokio::fs::read_to_string(&self.path).await?;
        let collection = PuzzleCollection::from_json(&json)?;
        debug!(count = collection.len(), "Read puzzle file");
        Ok(collection)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Puzzle collection served over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Creates an HTTP source.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PuzzleSource for HttpSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<PuzzleCollection, SourceError> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let collection: PuzzleCollection = response.json().await?;
        debug!(count = collection.len(), "Fetched puzzle collection");
        Ok(collection)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Picks a source for a configured location: URLs go over HTTP, anything else is a file.
#[instrument]
pub fn source_for(location: &str) -> Box<dyn PuzzleSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// A puzzle ready to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPuzzle {
    /// The puzzle.
    pub puzzle: Puzzle,
    /// 1-based number within the collection; `None` for the built-in puzzle.
    pub number: Option<usize>,
}

impl LoadedPuzzle {
    /// The built-in puzzle.
    pub fn fallback() -> Self {
        Self {
            puzzle: Puzzle::fallback(),
            number: None,
        }
    }
}

/// 1-based day of the current year in the local timezone.
pub fn today() -> u32 {
    chrono::Local::now().ordinal()
}

/// Loads the puzzle for a day of the year, falling back on any failure.
#[instrument(skip(source), fields(location = %source.location()))]
pub async fn load_daily(source: &dyn PuzzleSource, day_of_year: u32) -> LoadedPuzzle {
    match try_load_daily(source, day_of_year).await {
        Ok(loaded) => {
            info!(number = ?loaded.number, "Loaded daily puzzle");
            loaded
        }
        Err(e) => {
            warn!(error = %e, "Could not load puzzle, using built-in puzzle");
            LoadedPuzzle::fallback()
        }
    }
}

async fn try_load_daily(
    source: &dyn PuzzleSource,
    day_of_year: u32,
) -> Result<LoadedPuzzle, SourceError> {
    let collection = source.fetch().await?;
    let (index, puzzle) = collection.daily(day_of_year)?;
    Ok(LoadedPuzzle {
        puzzle,
        number: Some(index + 1),
    })
}

/// Puzzle source error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Puzzle source error: {} at {}:{}", message, file, line)]
pub struct SourceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SourceError {
    /// Creates a new source error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for SourceError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for SourceError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed puzzle file: {}", err))
    }
}

impl From<reqwest::Error> for SourceError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("HTTP error: {}", err))
    }
}

impl From<PuzzleError> for SourceError {
    #[track_caller]
    fn from(err: PuzzleError) -> Self {
        Self::new(format!("Invalid puzzle: {}", err))
    }
}
