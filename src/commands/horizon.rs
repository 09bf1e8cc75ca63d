use serde::Serialize;

use crate::cli::HorizonArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::horizon::Horizon;

#[derive(Debug, Serialize)]
struct HorizonView {
    file: String,
    points: usize,
    min_altitude: Option<f64>,
    max_altitude: Option<f64>,
    azimuth: Option<f64>,
    altitude: Option<f64>,
}

pub fn run(ctx: &AppContext, args: HorizonArgs) -> AppResult<()> {
    let horizon = Horizon::read_file(&args.file)?;
    let file = horizon.source().unwrap_or(args.file.as_path()).display().to_string();
    let view = summarize(&horizon, &file, args.azimuth);

    let text = match (view.azimuth, view.altitude) {
        (Some(azimuth), Some(altitude)) => {
            format!("horizon at az {azimuth:.1}°: alt {altitude:.1}°")
        }
        _ => match (view.min_altitude, view.max_altitude) {
            (Some(min), Some(max)) => format!(
                "{}: {} points, altitude {min:.1}° to {max:.1}°",
                view.file, view.points
            ),
            _ => format!("{}: no points", view.file),
        },
    };
    ctx.output.emit(&text, &view)
}

fn summarize(horizon: &Horizon, file: &str, azimuth: Option<f64>) -> HorizonView {
    let altitudes = horizon.points().iter().map(|(_, alt)| *alt);
    let min_altitude = altitudes.clone().reduce(f64::min);
    let max_altitude = altitudes.reduce(f64::max);

    HorizonView {
        file: file.to_string(),
        points: horizon.points().len(),
        min_altitude,
        max_altitude,
        azimuth,
        altitude: azimuth.and_then(|azimuth| horizon.altitude_at(azimuth)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_altitude_range() {
        let horizon = Horizon::from_points(vec![(0.0, 12.0), (180.0, 30.0), (270.0, 5.0)]);
        let view = summarize(&horizon, "east.hzn", Some(90.0));
        assert_eq!(view.points, 3);
        assert_eq!(view.min_altitude, Some(5.0));
        assert_eq!(view.max_altitude, Some(30.0));
        assert_eq!(view.altitude, Some(21.0));
    }

    #[test]
    fn empty_horizon_has_no_range() {
        let view = summarize(&Horizon::default(), "flat.hzn", None);
        assert_eq!(view.min_altitude, None);
        assert_eq!(view.altitude, None);
    }
}
