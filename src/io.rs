use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{error::Result, query::response::Response, query::RequestDocument};

pub fn read_document<R: Read>(rdr: R) -> Result<RequestDocument> {
    let document = serde_json::from_reader(BufReader::new(rdr))?;
    Ok(document)
}

pub fn read_document_file<P: AsRef<Path>>(path: P) -> Result<RequestDocument> {
    let f = File::open(path)?;
    read_document(f)
}

pub fn write_responses<W: Write>(wtr: W, responses: &[Response], pretty: bool) -> Result<()> {
    let mut wtr = BufWriter::new(wtr);
    if pretty {
        serde_json::to_writer_pretty(&mut wtr, responses)?;
    } else {
        serde_json::to_writer(&mut wtr, responses)?;
    }
    writeln!(wtr)?;
    wtr.flush()?;
    Ok(())
}

pub fn write_responses_file<P: AsRef<Path>>(
    path: P,
    responses: &[Response],
    pretty: bool,
) -> Result<()> {
    let f = File::create(path)?;
    write_responses(f, responses, pretty)
}
