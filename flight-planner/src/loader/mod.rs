//! Flight schedule loading.
//!
//! Schedules are CSV files with exactly the columns in [`COLUMNS`], in that
//! order. Rows are parsed into validated [`Flight`]s and returned sorted by
//! departure time, which is the order the planner requires.

mod error;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AirportCode, DomainError, Flight, FlightTime};

pub use error::LoadError;

/// Required header of a schedule file.
pub const COLUMNS: [&str; 8] = [
    "flight_no",
    "origin",
    "destination",
    "departure",
    "arrival",
    "base_price",
    "bag_price",
    "bags_allowed",
];

/// One CSV row before validation.
#[derive(Debug, Deserialize)]
struct FlightRow {
    flight_no: String,
    origin: String,
    destination: String,
    departure: String,
    arrival: String,
    base_price: f64,
    bag_price: f64,
    bags_allowed: u32,
}

impl FlightRow {
    fn into_flight(self) -> Result<Flight, DomainError> {
        let flight = Flight {
            origin: AirportCode::parse(&self.origin)?,
            destination: AirportCode::parse(&self.destination)?,
            departure: FlightTime::parse(&self.departure)?,
            arrival: FlightTime::parse(&self.arrival)?,
            flight_no: self.flight_no,
            base_price: self.base_price,
            bag_price: self.bag_price,
            bags_allowed: self.bags_allowed,
        };
        flight.validate()?;
        Ok(flight)
    }
}

/// Load a schedule file.
///
/// # Errors
///
/// Returns `Err` if the file cannot be opened, or for any error
/// [`read_flights`] reports.
pub fn load_flights(path: impl AsRef<Path>) -> Result<Vec<Flight>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let flights = read_flights(file)?;
    debug!(path = %path.display(), flights = flights.len(), "Loaded schedule");
    Ok(flights)
}

/// Read a schedule from any CSV source.
///
/// Surrounding whitespace in fields is ignored. The result is sorted by
/// departure time; flights departing at the same moment keep file order.
///
/// # Errors
///
/// Returns `Err` if the header differs from [`COLUMNS`], a row has the wrong
/// number of fields or a non-numeric price or bag count, or a row describes
/// an invalid flight (blank airport code, bad timestamp, arrival before
/// departure, negative price). Row numbers count data rows from 1.
///
/// # Examples
///
/// ```
/// use flight_planner::loader::read_flights;
///
/// let csv = "\
/// flight_no,origin,destination,departure,arrival,base_price,bag_price,bags_allowed
/// PV404,DHE,NIZ,2021-09-01T10:00:00,2021-09-01T14:30:00,44.0,12,1
/// ";
/// let flights = read_flights(csv.as_bytes()).unwrap();
/// assert_eq!(flights.len(), 1);
/// assert_eq!(flights[0].bags_allowed, 1);
/// ```
pub fn read_flights<R: Read>(reader: R) -> Result<Vec<Flight>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    if headers.iter().ne(COLUMNS) {
        return Err(LoadError::IllegalColumns {
            expected: COLUMNS.join(","),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut flights = Vec::new();
    for (index, row) in csv_reader.deserialize::<FlightRow>().enumerate() {
        let flight = row?
            .into_flight()
            .map_err(|source| LoadError::InvalidRow {
                row: index + 1,
                source,
            })?;
        flights.push(flight);
    }

    if !flights.is_sorted_by_key(|f| f.departure) {
        debug!(flights = flights.len(), "Schedule not in departure order, sorting");
        sort_by_departure(&mut flights);
    }

    Ok(flights)
}

/// Sort flights by departure time, keeping the relative order of flights
/// that depart at the same moment.
pub fn sort_by_departure(flights: &mut [Flight]) {
    flights.sort_by_key(|f| f.departure);
}
