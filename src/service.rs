// Book catalog service: fetches the catalog through a `BookSource` and
// derives the sorted and filtered views. Nothing is cached, every query
// goes back to the source.

use crate::error::CatalogError;
use crate::model::{Book, Catalog};
use tracing::{debug, error};

/// Anything that can produce the raw catalog document.
pub trait BookSource {
    /// Return the raw catalog body, one retrieval per call.
    fn fetch(&self) -> Result<Vec<u8>, CatalogError>;
}

impl<F> BookSource for F
where
    F: Fn() -> Result<Vec<u8>, CatalogError>,
{
    fn fetch(&self) -> Result<Vec<u8>, CatalogError> {
        self()
    }
}

/// Catalog queries over a `BookSource`.
pub struct BookService<S> {
    source: S,
}

impl<S: BookSource> BookService<S> {
    /// Wrap `source`; every query fetches through it.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Retrieve the whole catalog in source order.
    pub fn fetch_catalog(&self) -> Result<Vec<Book>, CatalogError> {
        let body = self.source.fetch().map_err(|e| {
            error!("error while fetching books: {e}");
            e
        })?;
        debug!(bytes = body.len(), "catalog fetched");

        let catalog = Catalog::from_slice(&body).map_err(|e| {
            error!("error while parsing books: {e}");
            CatalogError::from(e)
        })?;
        debug!(books = catalog.books.len(), "catalog decoded");
        Ok(catalog.books)
    }

    /// Catalog ordered by author. Books by the same author keep their
    /// source order.
    pub fn sort_by_author(&self) -> Result<Vec<Book>, CatalogError> {
        let mut books = self.fetch_catalog()?;
        books.sort_by(|a, b| a.author.cmp(&b.author));
        Ok(books)
    }

    /// Books whose title contains `query`, ignoring case.
    pub fn search_by_title(&self, query: &str) -> Result<Vec<Book>, CatalogError> {
        let books = self.fetch_catalog()?;
        let needle = query.to_lowercase();
        let matches: Vec<Book> = books
            .into_iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .collect();
        debug!(query, matches = matches.len(), "title search finished");
        Ok(matches)
    }
}
