use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AppError, AppResult};

pub const AZIMUTH_STEPS: usize = 360;
pub const ALTITUDE_STEPS: usize = 90;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Horizon {
    source: Option<PathBuf>,
    /// (azimuth, altitude) in degrees, sorted by azimuth.
    points: Vec<(f64, f64)>,
}

impl Horizon {
    /// Builds a table from raw pairs; pairs that are not finite are dropped.
    pub fn from_points(mut points: Vec<(f64, f64)>) -> Self {
        points.retain(|(az, alt)| az.is_finite() && alt.is_finite());
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self {
            source: None,
            points,
        }
    }

    pub fn read_file(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path)?;
        let mut horizon = Self::parse(&raw)?;
        horizon.source = Some(path.to_path_buf());
        debug!(path = %path.display(), points = horizon.points.len(), "read horizon");
        Ok(horizon)
    }

    /// Parses `azimuth altitude` pairs, one per line.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let mut points = Vec::new();
        for (index, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields = line.split_whitespace().collect::<Vec<_>>();
            let [az, alt] = fields.as_slice() else {
                return Err(AppError::Horizon(format!(
                    "line {}: expected `azimuth altitude`, got `{line}`",
                    index + 1
                )));
            };

            let parse = |value: &str| {
                value
                    .parse::<f64>()
                    .ok()
                    .filter(|number| number.is_finite())
                    .ok_or_else(|| {
                        AppError::Horizon(format!(
                            "line {}: `{value}` is not a finite number",
                            index + 1
                        ))
                    })
            };
            points.push((parse(*az)?, parse(*alt)?));
        }

        Ok(Self::from_points(points))
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Horizon altitude at `azimuth`, linearly interpolated and held flat past the table ends.
    pub fn altitude_at(&self, azimuth: f64) -> Option<f64> {
        if !azimuth.is_finite() {
            return None;
        }
        let (first, last) = (self.points.first()?, self.points.last()?);
        if azimuth <= first.0 {
            return Some(first.1);
        }
        if azimuth >= last.0 {
            return Some(last.1);
        }

        let upper = self.points.partition_point(|(az, _)| *az <= azimuth);
        let (az0, alt0) = self.points[upper - 1];
        let (az1, alt1) = self.points[upper];
        if az1 == az0 {
            return Some(alt1);
        }
        Some(alt0 + (alt1 - alt0) * (azimuth - az0) / (az1 - az0))
    }

    pub fn is_visible(&self, azimuth: f64, altitude: f64) -> bool {
        self.altitude_at(azimuth)
            .is_none_or(|horizon| altitude > horizon)
    }

    /// 360 x 90 grid indexed `[azimuth][altitude]`; `true` marks sky hidden by the horizon.
    ///
    /// Each horizon altitude is padded by one degree so that partial degrees
    /// count as blocked.
    pub fn horizon_map(&self) -> Vec<[bool; ALTITUDE_STEPS]> {
        (0..AZIMUTH_STEPS)
            .map(|az| {
                let mut column = [false; ALTITUDE_STEPS];
                let Some(altitude) = self.altitude_at(az as f64) else {
                    return column;
                };
                let blocked = (altitude + 1.0).clamp(0.0, ALTITUDE_STEPS as f64) as usize;
                column[..blocked].fill(true);
                column
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_between_points() {
        let horizon = Horizon::parse("0 10\n90 30\n180 10\n").expect("parse");
        assert_eq!(horizon.altitude_at(45.0), Some(20.0));
        assert_eq!(horizon.altitude_at(90.0), Some(30.0));
        assert_eq!(horizon.altitude_at(135.0), Some(20.0));
    }

    #[test]
    fn holds_end_values_outside_range() {
        let horizon = Horizon::parse("10 5\n200 15\n").expect("parse");
        assert_eq!(horizon.altitude_at(0.0), Some(5.0));
        assert_eq!(horizon.altitude_at(359.0), Some(15.0));
    }

    #[test]
    fn empty_table_has_no_altitude() {
        let horizon = Horizon::parse("\n\n").expect("parse");
        assert_eq!(horizon.altitude_at(10.0), None);
        assert!(horizon.is_visible(10.0, 0.0));
    }

    #[test]
    fn unsorted_input_is_sorted() {
        let horizon = Horizon::parse("180 0\n0 20\n").expect("parse");
        assert_eq!(horizon.points()[0], (0.0, 20.0));
        assert_eq!(horizon.altitude_at(90.0), Some(10.0));
    }

    #[test]
    fn reports_bad_lines() {
        let err = Horizon::parse("0 10\n90\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert!(Horizon::parse("0 ten\n").is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = Horizon::parse("0 10\nnan 10\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert!(Horizon::parse("0 inf\n").is_err());
    }

    #[test]
    fn non_finite_azimuth_has_no_altitude() {
        let horizon = Horizon::parse("0 10\n90 30\n").expect("parse");
        assert_eq!(horizon.altitude_at(f64::NAN), None);
        assert_eq!(horizon.altitude_at(f64::INFINITY), None);
        assert!(horizon.is_visible(f64::NAN, 5.0));
    }

    #[test]
    fn non_finite_points_are_dropped() {
        let horizon = Horizon::from_points(vec![(f64::NAN, 10.0), (0.0, f64::NAN)]);
        assert!(horizon.points().is_empty());
        assert!(horizon.horizon_map().iter().all(|column| column.iter().all(|b| !*b)));
    }

    #[test]
    fn map_pads_horizon_by_one_degree() {
        let horizon = Horizon::from_points(vec![(0.0, 10.0), (359.0, 10.0)]);
        let map = horizon.horizon_map();
        assert_eq!(map.len(), AZIMUTH_STEPS);
        assert!(map[0][10]);
        assert!(!map[0][11]);

        let high = Horizon::from_points(vec![(0.0, 95.0)]);
        assert!(high.horizon_map()[100].iter().all(|blocked| *blocked));
    }

    #[test]
    fn visibility_compares_against_horizon() {
        let horizon = Horizon::from_points(vec![(0.0, 20.0), (359.0, 20.0)]);
        assert!(!horizon.is_visible(100.0, 15.0));
        assert!(horizon.is_visible(100.0, 25.0));
    }
}
