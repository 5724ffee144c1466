use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use itertools::Itertools;
use thiserror::Error;

use super::{Distance, Vertex, WeightedEdge};

/// Structural errors of the incidence-matrix text format. Every variant is
/// detected before any graph algorithm sees the input.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("reading graph file: {0}")]
    Io(#[from] std::io::Error),

    #[error("header line must be '<vertices> <edges>'")]
    MalformedHeader,

    #[error("line {line}: unable to parse '{token}' as an integer")]
    BadToken { line: usize, token: String },

    #[error("input ends after {found} line(s), expected {expected} (header, matrix rows, weight line)")]
    TruncatedInput { found: usize, expected: usize },

    #[error("matrix row {row} has {found} column(s), header declares {expected}")]
    TruncatedRow {
        row: Vertex,
        found: usize,
        expected: u32,
    },

    #[error("weight line has {found} entry/entries, header declares {expected} edge(s)")]
    WeightCountMismatch { found: usize, expected: u32 },

    #[error("edge column {column} marks {endpoints} vertex/vertices, expected exactly 2")]
    MalformedEdge { column: u32, endpoints: usize },

    #[error("edge column {column} has invalid weight {weight}")]
    InvalidWeight { column: u32, weight: i64 },

    #[error("matrix entry at row {row}, column {column} must be 0 or 1, found {value}")]
    NotIncidence {
        row: Vertex,
        column: u32,
        value: i64,
    },
}

/// Encodes a graph as incidence-matrix text: a `<V> <E>` header, `V` rows
/// of `E` space-separated 0/1 entries, and one column-aligned weight line.
/// Edge order fixes the column order. Every endpoint must be in range.
pub fn encode(number_of_vertices: u32, edges: &[WeightedEdge]) -> String {
    let mut matrix = vec![vec![0u8; edges.len()]; number_of_vertices as usize];
    for (column, edge) in edges.iter().enumerate() {
        matrix[edge.tail as usize][column] = 1;
        matrix[edge.head as usize][column] = 1;
    }

    let mut text = format!("{} {}\n", number_of_vertices, edges.len());
    for row in &matrix {
        text.push_str(&row.iter().join(" "));
        text.push('\n');
    }
    text.push_str(&edges.iter().map(|edge| edge.weight).join(" "));
    text.push('\n');

    text
}

/// Decodes incidence-matrix text back into a vertex count and edge list.
///
/// Validation is eager and strict: the weight line is checked against the
/// declared edge count before the matrix is interpreted, and any column
/// whose endpoint count differs from 2 fails the whole decode. Blank lines
/// are skipped.
pub fn decode(text: &str) -> Result<(u32, Vec<WeightedEdge>), FormatError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let header = lines.first().ok_or(FormatError::MalformedHeader)?;
    let mut header_values = header.split_whitespace();
    let number_of_vertices = parse_count(header_values.next(), 1)?;
    let number_of_edges = parse_count(header_values.next(), 1)?;
    if header_values.next().is_some() {
        return Err(FormatError::MalformedHeader);
    }

    // Zero columns carry no information; the matrix rows and the weight
    // line are all blank and were already skipped.
    if number_of_edges == 0 {
        return Ok((number_of_vertices, Vec::new()));
    }

    let expected_lines = 1 + number_of_vertices as usize + 1;
    if lines.len() < expected_lines {
        return Err(FormatError::TruncatedInput {
            found: lines.len(),
            expected: expected_lines,
        });
    }

    let weights = parse_weight_line(
        lines[1 + number_of_vertices as usize],
        number_of_vertices,
        number_of_edges,
    )?;

    let mut matrix = Vec::with_capacity(number_of_vertices as usize);
    for row in 0..number_of_vertices {
        matrix.push(parse_matrix_row(
            lines[1 + row as usize],
            row,
            number_of_edges,
        )?);
    }

    let mut edges = Vec::with_capacity(number_of_edges as usize);
    for column in 0..number_of_edges {
        let endpoints: Vec<Vertex> = (0..number_of_vertices)
            .filter(|&row| matrix[row as usize][column as usize])
            .collect();

        if endpoints.len() != 2 {
            return Err(FormatError::MalformedEdge {
                column,
                endpoints: endpoints.len(),
            });
        }

        edges.push(WeightedEdge::new(
            endpoints[0],
            endpoints[1],
            weights[column as usize],
        ));
    }

    Ok((number_of_vertices, edges))
}

pub fn write_incidence_file(
    path: &Path,
    number_of_vertices: u32,
    edges: &[WeightedEdge],
) -> Result<(), FormatError> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(encode(number_of_vertices, edges).as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn read_incidence_file(path: &Path) -> Result<(u32, Vec<WeightedEdge>), FormatError> {
    let text = std::fs::read_to_string(path)?;
    decode(&text)
}

fn parse_count(token: Option<&str>, line: usize) -> Result<u32, FormatError> {
    let token = token.ok_or(FormatError::MalformedHeader)?;
    token.parse().map_err(|_| FormatError::BadToken {
        line,
        token: token.to_string(),
    })
}

fn parse_weight_line(
    line: &str,
    number_of_vertices: u32,
    number_of_edges: u32,
) -> Result<Vec<Distance>, FormatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != number_of_edges as usize {
        return Err(FormatError::WeightCountMismatch {
            found: tokens.len(),
            expected: number_of_edges,
        });
    }

    let mut weights = Vec::with_capacity(tokens.len());
    for (column, token) in tokens.iter().enumerate() {
        let value: i64 = token.parse().map_err(|_| FormatError::BadToken {
            line: 2 + number_of_vertices as usize,
            token: token.to_string(),
        })?;

        if value < 0 || value > Distance::MAX as i64 {
            return Err(FormatError::InvalidWeight {
                column: column as u32,
                weight: value,
            });
        }

        weights.push(value as Distance);
    }

    Ok(weights)
}

fn parse_matrix_row(
    line: &str,
    row: Vertex,
    number_of_edges: u32,
) -> Result<Vec<bool>, FormatError> {
    let mut entries = Vec::with_capacity(number_of_edges as usize);
    for (column, token) in line.split_whitespace().enumerate() {
        let value: i64 = token.parse().map_err(|_| FormatError::BadToken {
            line: 2 + row as usize,
            token: token.to_string(),
        })?;

        if value != 0 && value != 1 {
            return Err(FormatError::NotIncidence {
                row,
                column: column as u32,
                value,
            });
        }

        entries.push(value == 1);
    }

    if entries.len() != number_of_edges as usize {
        return Err(FormatError::TruncatedRow {
            row,
            found: entries.len(),
            expected: number_of_edges,
        });
    }

    Ok(entries)
}
