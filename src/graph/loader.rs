//! CSV ingestion of the three relation files.
//!
//! A data directory holds `people.csv` (`id,name,birth`), `movies.csv`
//! (`id,title,year`) and `stars.csv` (`person_id,movie_id`). Star rows that
//! reference an unknown person or movie are skipped; an unparsable birth or
//! year loads as unknown.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::info;

use crate::entity::{Movie, MovieId, Person, PersonId};
use crate::error::LoadError;
use crate::graph::store::{GraphStore, GraphStoreBuilder};

/// People file name inside a data directory.
pub const PEOPLE_FILE: &str = "people.csv";
/// Movies file name inside a data directory.
pub const MOVIES_FILE: &str = "movies.csv";
/// Star links file name inside a data directory.
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    #[serde(default)]
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    #[serde(default)]
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

fn parse_year(raw: &str) -> Option<u16> {
    raw.trim().parse().ok()
}

fn read_rows<T, R>(reader: R, path: &Path) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn assemble(people: Vec<PersonRow>, movies: Vec<MovieRow>, stars: Vec<StarRow>) -> GraphStore {
    let mut builder = GraphStoreBuilder::new();
    for row in people {
        let mut person = Person::new(row.id, row.name);
        person.birth = parse_year(&row.birth);
        builder.add_person(person);
    }
    for row in movies {
        let mut movie = Movie::new(row.id, row.title);
        movie.year = parse_year(&row.year);
        builder.add_movie(movie);
    }
    // people and movies must all be present before any star row is linked
    for row in stars {
        builder.link(&PersonId::new(row.person_id), &MovieId::new(row.movie_id));
    }
    builder.build()
}

/// Load a graph from CSV sources that are already open.
///
/// # Errors
/// - `Csv`: if any source is malformed (path fields name the logical file)
pub fn load_readers<P, M, S>(people: P, movies: M, stars: S) -> Result<GraphStore, LoadError>
where
    P: Read,
    M: Read,
    S: Read,
{
    let people: Vec<PersonRow> = read_rows(people, Path::new(PEOPLE_FILE))?;
    let movies: Vec<MovieRow> = read_rows(movies, Path::new(MOVIES_FILE))?;
    let stars: Vec<StarRow> = read_rows(stars, Path::new(STARS_FILE))?;

    Ok(assemble(people, movies, stars))
}

/// Load a graph from a directory holding the three relation files.
///
/// # Errors
/// - `Io`: if a file is missing or unreadable
/// - `Csv`: if a file is malformed
pub fn load_directory(dir: impl AsRef<Path>) -> Result<GraphStore, LoadError> {
    let dir = dir.as_ref();
    info!(dir = %dir.display(), "loading relation files");

    let paths: [PathBuf; 3] = [dir.join(PEOPLE_FILE), dir.join(MOVIES_FILE), dir.join(STARS_FILE)];
    let people = read_rows::<PersonRow, _>(open(&paths[0])?, &paths[0])?;
    let movies = read_rows::<MovieRow, _>(open(&paths[1])?, &paths[1])?;
    let stars = read_rows::<StarRow, _>(open(&paths[2])?, &paths[2])?;

    Ok(assemble(people, movies, stars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CostarGraph;

    const PEOPLE: &str = "id,name,birth\n1,Kevin Bacon,1958\n2,Tom Hanks,1956\n3,Unknown Extra,\n";
    const MOVIES: &str = "id,title,year\n10,Apollo 13,1995\n";
    const STARS: &str = "person_id,movie_id\n1,10\n2,10\n99,10\n";

    #[test]
    fn test_load_readers() {
        let graph = load_readers(PEOPLE.as_bytes(), MOVIES.as_bytes(), STARS.as_bytes()).unwrap();
        assert_eq!(graph.person_count(), 3);
        assert_eq!(graph.movie_count(), 1);

        let bacon = graph.person(&PersonId::new("1")).unwrap();
        assert_eq!(bacon.name, "Kevin Bacon");
        assert_eq!(bacon.birth, Some(1958));

        let extra = graph.person(&PersonId::new("3")).unwrap();
        assert_eq!(extra.birth, None);

        let apollo = graph.movie(&MovieId::new("10")).unwrap();
        assert_eq!(apollo.year, Some(1995));
        assert_eq!(apollo.stars.len(), 2);

        let n = graph.neighbors(&PersonId::new("1")).unwrap();
        assert!(n.iter().any(|x| x.person == PersonId::new("2")));
    }

    #[test]
    fn test_malformed_stars_file() {
        let stars = "person_id\n1\n";
        let err = load_readers(PEOPLE.as_bytes(), MOVIES.as_bytes(), stars.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv { ref path, .. } if path == Path::new(STARS_FILE)));
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year(" 1999 "), Some(1999));
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("unknown"), None);
    }
}
