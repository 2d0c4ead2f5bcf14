use crate::{Document, Error};
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Reads a corpus from CSV text with `id`, `text` and `label` header columns.
pub fn read_corpus_from_string(csv: &str) -> Result<Vec<Document>, Error> {
    read_corpus_from_reader(Cursor::new(csv))
}

/// Reads a corpus CSV file; paths ending in `.gz` are decompressed on the fly.
pub fn read_corpus_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Document>, Error> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);

    let is_gzipped = path
        .extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

    if is_gzipped {
        read_corpus_from_reader(GzDecoder::new(file))
    } else {
        read_corpus_from_reader(file)
    }
}

/// Reads a corpus from any CSV source. Column order is free and extra columns are ignored, but
/// document ids must be unique.
pub fn read_corpus_from_reader<R: Read>(reader: R) -> Result<Vec<Document>, Error> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
    };

    let id_column = column("id")?;
    let text_column = column("text")?;
    let label_column = column("label")?;

    let mut documents = vec![];
    let mut seen_ids = HashSet::new();

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let document = Document::from_fields(
            record.get(id_column),
            record.get(text_column),
            record.get(label_column),
        )?;

        if !seen_ids.insert(document.id().to_string()) {
            return Err(Error::InvalidInputError(format!(
                "Duplicate document id `{}`",
                document.id()
            )));
        }

        documents.push(document);
    }

    Ok(documents)
}
