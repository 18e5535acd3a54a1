use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use log::info;

use super::{city::City, highway::Highway, road_map::RoadMap};
use crate::{error::LoadError, utility::get_progressspinner};

/// A highway line as read from a file, before the city names are resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct HighwayRecord {
    pub from: String,
    pub to: String,
    pub highway: Highway,
    pub line: usize,
}

/// Reads both files and builds a road map from them. Either every record is
/// inserted or an error is returned and nothing is built.
pub fn load_road_map(cities_file: &Path, highways_file: &Path) -> Result<RoadMap, LoadError> {
    let spinner = get_progressspinner("Reading road map");
    let road_map = (|| -> Result<RoadMap, LoadError> {
        let cities = read_cities(open(cities_file)?, cities_file)?;
        let highways = read_highways(open(highways_file)?, highways_file)?;
        build_road_map(cities, cities_file, &highways, highways_file)
    })();
    spinner.finish_and_clear();

    let road_map = road_map?;
    info!(
        "Read {} cities and {} highways",
        road_map.number_of_vertices(),
        road_map.number_of_edges()
    );
    Ok(road_map)
}

/// Parses `name,x,y` lines.
pub fn read_cities<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<(usize, City)>, LoadError> {
    records(reader, origin)
        .map(|record| {
            let (line, fields) = record?;
            let [name, x, y] = expect_fields::<3>(&fields, origin, line)?;
            let x: i32 = parse_field(x, "x coordinate", origin, line)?;
            let y: i32 = parse_field(y, "y coordinate", origin, line)?;
            Ok((line, City::new(name, x, y)))
        })
        .collect()
}

/// Parses `from,to,distance,hours,minutes` lines.
pub fn read_highways<R: BufRead>(
    reader: R,
    origin: &Path,
) -> Result<Vec<HighwayRecord>, LoadError> {
    records(reader, origin)
        .map(|record| {
            let (line, fields) = record?;
            let [from, to, distance, hours, minutes] = expect_fields::<5>(&fields, origin, line)?;
            let highway = Highway::new(
                parse_weight(distance, "distance", origin, line)?,
                parse_weight(hours, "hours", origin, line)?,
                parse_weight(minutes, "minutes", origin, line)?,
            );
            Ok(HighwayRecord {
                from: from.to_string(),
                to: to.to_string(),
                highway,
                line,
            })
        })
        .collect()
}

/// Inserts the parsed records into a fresh road map.
pub fn build_road_map(
    cities: Vec<(usize, City)>,
    cities_origin: &Path,
    highways: &[HighwayRecord],
    highways_origin: &Path,
) -> Result<RoadMap, LoadError> {
    let mut road_map = RoadMap::new();

    for (line, city) in cities {
        road_map
            .insert_vertex(city)
            .map_err(|source| LoadError::Graph {
                path: cities_origin.to_path_buf(),
                line,
                source,
            })?;
    }

    for record in highways {
        let resolve = |name: &str| {
            road_map
                .vertex_by_name(name)
                .ok_or_else(|| LoadError::UnknownCity {
                    path: highways_origin.to_path_buf(),
                    line: record.line,
                    name: name.to_string(),
                })
        };
        let from = resolve(&record.from)?;
        let to = resolve(&record.to)?;
        road_map
            .insert_edge(from, to, record.highway)
            .map_err(|source| LoadError::Graph {
                path: highways_origin.to_path_buf(),
                line: record.line,
                source,
            })?;
    }

    Ok(road_map)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Yields the comma separated, trimmed fields of every line together with its
/// 1-based line number. Blank lines and `#` comments are skipped.
fn records<'a, R: BufRead + 'a>(
    reader: R,
    origin: &'a Path,
) -> impl Iterator<Item = Result<(usize, Vec<String>), LoadError>> + 'a {
    reader
        .lines()
        .enumerate()
        .filter_map(move |(index, line)| {
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(LoadError::Io {
                        path: origin.to_path_buf(),
                        source,
                    }))
                }
            };
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let fields = trimmed.split(',').map(|field| field.trim().to_string()).collect();
            Some(Ok((index + 1, fields)))
        })
}

fn expect_fields<'a, const N: usize>(
    fields: &'a [String],
    origin: &Path,
    line: usize,
) -> Result<[&'a str; N], LoadError> {
    let malformed = |reason: String| LoadError::Malformed {
        path: origin.to_path_buf(),
        line,
        reason,
    };
    if fields.len() != N {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            N,
            fields.len()
        )));
    }
    if let Some(position) = fields.iter().position(String::is_empty) {
        return Err(malformed(format!("field {} is empty", position + 1)));
    }
    let mut result = [""; N];
    for (slot, field) in result.iter_mut().zip(fields) {
        *slot = field.as_str();
    }
    Ok(result)
}

fn parse_field<T: FromStr>(
    field: &str,
    what: &str,
    origin: &Path,
    line: usize,
) -> Result<T, LoadError> {
    field.parse().map_err(|_| LoadError::Malformed {
        path: origin.to_path_buf(),
        line,
        reason: format!("unable to parse {} from {:?}", what, field),
    })
}

/// Weights must be finite and non-negative for the search to be correct.
fn parse_weight(field: &str, what: &str, origin: &Path, line: usize) -> Result<f64, LoadError> {
    let weight: f64 = parse_field(field, what, origin, line)?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(LoadError::Malformed {
            path: origin.to_path_buf(),
            line,
            reason: format!("{} must be a non-negative number, found {}", what, field),
        });
    }
    Ok(weight)
}
