use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use geodesy::prelude::*;
use serde_json::{Map, Value, json};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered ellipsoid models
    Models,

    /// Convert a coordinate triple between systems (angles in degrees)
    Convert {
        from: System,
        to: System,

        /// x, r or h
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// y or latitude
        #[arg(allow_negative_numbers = true)]
        b: f64,

        /// z or longitude
        #[arg(allow_negative_numbers = true)]
        c: f64,

        /// Ellipsoid model name
        #[arg(long, default_value = "WGS84")]
        model: String,
    },

    /// Radius of the ellipsoid surface at a latitude (degrees)
    Radius {
        kind: RadiusKind,

        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Ellipsoid model name
        #[arg(long, default_value = "WGS84")]
        model: String,

        /// Azimuth in degrees from north, for the curvature radius
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        azimuth: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum System {
    Cart,
    Geocentric,
    Geodetic,
}

impl System {
    fn name(&self) -> &'static str {
        match self {
            System::Cart => "cart",
            System::Geocentric => "geocentric",
            System::Geodetic => "geodetic",
        }
    }

    fn components(&self) -> [&'static str; 3] {
        match self {
            System::Cart => ["x", "y", "z"],
            System::Geocentric => ["r", "lat", "lon"],
            System::Geodetic => ["h", "lat", "lon"],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum RadiusKind {
    Geodetic,
    Geocentric,
    Curvature,
}

fn lookup_model(name: &str) -> Result<&'static EllipsoidModel> {
    ellipsoidmodels()
        .get(name)
        .with_context(|| format!("Available models: {}", ellipsoidmodels().models().collect::<Vec<_>>().join(", ")))
}

fn convert(from: System, to: System, (a, b, c): (f64, f64, f64), model: &EllipsoidModel) -> geodesy::Result<(f64, f64, f64)> {
    match (from, to) {
        (System::Cart, System::Geocentric) => cart2geocentric(&a, &b, &c),
        (System::Cart, System::Geodetic) => cart2geodetic(&a, &b, &c, model),
        (System::Geocentric, System::Cart) => geocentric2cart(&a, &b, &c),
        (System::Geocentric, System::Geodetic) => geocentric2geodetic(&a, &b, &c, model),
        (System::Geodetic, System::Cart) => geodetic2cart(&a, &b, &c, model),
        (System::Geodetic, System::Geocentric) => geodetic2geocentric(&a, &b, &c, model),
        (System::Cart, System::Cart) | (System::Geocentric, System::Geocentric) | (System::Geodetic, System::Geodetic) => Ok((a, b, c)),
    }
}

fn radius(kind: RadiusKind, model: &EllipsoidModel, lat: f64, azimuth: f64) -> geodesy::Result<f64> {
    match kind {
        RadiusKind::Geodetic => ellipsoid_r_geodetic(model, &lat),
        RadiusKind::Geocentric => ellipsoid_r_geocentric(model, &lat),
        RadiusKind::Curvature => ellipsoid_r_curvature(model, &lat, &azimuth),
    }
}

/// Runs a command and returns its result as a JSON value.
fn execute(command: Command) -> Result<Value> {
    match command {
        Command::Models => {
            let mut models = Vec::with_capacity(ellipsoidmodels().len());
            for (name, model) in ellipsoidmodels().iter() {
                let mut entry = serde_json::to_value(model)?;
                entry["name"] = json!(name);
                models.push(entry);
            }
            Ok(Value::Array(models))
        }
        Command::Convert { from, to, a, b, c, model } => {
            let ellipsoid = lookup_model(&model)?;
            let (u, v, w) = convert(from, to, (a, b, c), ellipsoid)
                .with_context(|| format!("Failed to convert {} to {}", from.name(), to.name()))?;
            let mut out = Map::new();
            out.insert("system".to_owned(), json!(to.name()));
            out.insert("model".to_owned(), json!(model));
            for (name, value) in to.components().into_iter().zip([u, v, w]) {
                out.insert(name.to_owned(), json!(value));
            }
            Ok(Value::Object(out))
        }
        Command::Radius { kind, lat, model, azimuth } => {
            let ellipsoid = lookup_model(&model)?;
            let r = radius(kind, ellipsoid, lat, azimuth).context("Failed to compute radius")?;
            Ok(json!({ "model": model, "lat": lat, "radius": r }))
        }
    }
}

/// Plain text rendering: one line per array entry, `key = value` pairs per object.
fn to_text(value: &Value) -> String {
    match value {
        Value::Array(items) => items.iter().map(to_text).collect::<Vec<_>>().join("\n"),
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| format!("{} = {}", key, to_text(value)))
            .collect::<Vec<_>>()
            .join(", "),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn run(args: Args) -> Result<()> {
    let output = execute(args.command)?;
    if args.json {
        println!("{}", output);
    } else {
        println!("{}", to_text(&output));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn parses_convert_with_negative_values() {
        let args = Args::try_parse_from(["geodesy", "convert", "geodetic", "cart", "1", "-13", "42", "--model", "EllipsoidMars"]).unwrap();
        match args.command {
            Command::Convert { from, to, b, model, .. } => {
                assert_eq!(from, System::Geodetic);
                assert_eq!(to, System::Cart);
                assert_eq!(b, -13.0);
                assert_eq!(model, "EllipsoidMars");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn radius_defaults() {
        let args = Args::try_parse_from(["geodesy", "--json", "radius", "curvature", "45"]).unwrap();
        assert!(args.json);
        match args.command {
            Command::Radius { kind, model, azimuth, .. } => {
                assert_eq!(kind, RadiusKind::Curvature);
                assert_eq!(model, "WGS84");
                assert_eq!(azimuth, 0.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_system() {
        assert!(Args::try_parse_from(["geodesy", "convert", "polar", "cart", "1", "2", "3"]).is_err());
    }

    #[test]
    fn convert_round_trips() {
        let model = lookup_model("WGS84").unwrap();
        let cart = convert(System::Geodetic, System::Cart, (1., -13., 42.), model).unwrap();
        let geod = convert(System::Cart, System::Geodetic, cart, model).unwrap();
        assert_abs_diff_eq!(geod.0, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(geod.1, -13.0, epsilon = 1e-9);
        assert_abs_diff_eq!(geod.2, 42.0, epsilon = 1e-9);
        assert_eq!(convert(System::Cart, System::Cart, (1., 2., 3.), model).unwrap(), (1., 2., 3.));
    }

    #[test]
    fn unknown_model_is_an_error() {
        let err = lookup_model("Pluto").unwrap_err();
        assert!(format!("{:#}", err).contains("WGS84"));
    }

    #[test]
    fn equatorial_radius() {
        let model = lookup_model("EllipsoidJupiter").unwrap();
        assert_eq!(radius(RadiusKind::Geodetic, model, 0.0, 0.0).unwrap(), model.equatorial_radius);
    }

    #[test]
    fn models_listing_has_every_model() {
        let out = execute(Command::Models).unwrap();
        let models = out.as_array().unwrap();
        assert_eq!(models.len(), ellipsoidmodels().len());
        assert_eq!(models[1]["name"], "WGS84");
        assert_eq!(models[1]["equatorial_radius"], 6378137.0);
        assert!(models.iter().all(|m| m["eccentricity"].is_f64()));
    }

    #[test]
    fn convert_output_names_components() {
        let args = Args::try_parse_from(["geodesy", "--json", "convert", "geodetic", "cart", "0", "0", "0"]).unwrap();
        let out = execute(args.command).unwrap();
        assert_eq!(out["system"], "cart");
        assert_eq!(out["model"], "WGS84");
        assert_eq!(out["x"], 6378137.0);
        assert_eq!(out["y"], 0.0);
        assert_eq!(out["z"], 0.0);

        let text = to_text(&out);
        assert!(text.contains("system = cart"));
        assert!(text.contains("x = 6378137"));
    }

    #[test]
    fn radius_output() {
        let args = Args::try_parse_from(["geodesy", "radius", "geocentric", "0", "--model", "EllipsoidIo"]).unwrap();
        let out = execute(args.command).unwrap();
        assert_eq!(out["model"], "EllipsoidIo");
        assert_eq!(out["lat"], 0.0);
        assert_eq!(out["radius"], 1829400.0);
    }

    #[test]
    fn unknown_model_fails_the_command() {
        let args = Args::try_parse_from(["geodesy", "radius", "geodetic", "10", "--model", "Pluto"]).unwrap();
        assert!(execute(args.command).is_err());
    }
}
