//! Tests for wp-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;
    use wp_core::GeoPoint;
    use wp_survey::FlightPath;

    use crate::csv::{CsvWriter, FLIGHT_PATH_FILE};
    use crate::writer::PathWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn path() -> FlightPath {
        FlightPath::new(vec![
            GeoPoint::new(0.0, 0.01),
            GeoPoint::new(0.0005, 0.01),
            GeoPoint::new(0.0005, 0.009),
        ])
    }

    #[test]
    fn csv_file_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(FLIGHT_PATH_FILE).exists());
    }

    #[test]
    fn csv_header_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(FLIGHT_PATH_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["seq", "latitude", "longitude"]);
    }

    #[test]
    fn csv_waypoints_read_back() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_path(&path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(FLIGHT_PATH_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[2][0], "2");
        let lat: f64 = rows[1][1].parse().unwrap();
        let lon: f64 = rows[2][2].parse().unwrap();
        assert!((lat - 0.0005).abs() < 1e-12);
        assert!((lon - 0.009).abs() < 1e-12);
    }

    #[test]
    fn sequence_continues_across_paths() {
        let mut w = CsvWriter::from_writer(Vec::new()).unwrap();
        w.write_path(&path()).unwrap();
        w.write_path(&path()).unwrap();
        assert_eq!(w.rows_written(), 6);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
