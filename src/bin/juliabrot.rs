// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error};
use log::info;
use num::Complex;

use juliabrot::axes::AxisOverlay;
use juliabrot::config::{DEFAULT_HEIGHT, DEFAULT_ITERATIONS, DEFAULT_WIDTH, JULIA_SEED};
use juliabrot::{Color, ColorSchema, FractalConfig, FractalRenderer};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    parse_pair(s, ',').map(|(re, im)| Complex { re, im })
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_parse<T: FromStr>(s: &str) -> Result<(), String>
where
    T::Err: std::fmt::Display,
{
    T::from_str(s).map(|_| ()).map_err(|e| e.to_string())
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const JULIA: &str = "julia";
const SEED: &str = "seed";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const ITERATIONS: &str = "iterations";
const SCHEMA: &str = "schema";
const CONVERGENCE: &str = "convergence-color";
const THREADS: &str = "threads";
const AXES: &str = "axes";

fn args<'a>(size: &'a str, seed: &'a str, iterations: &'a str) -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("juliabrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot and Julia set renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; the extension picks the format"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value(size)
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(JULIA)
                .long(JULIA)
                .short("j")
                .help("Render a Julia set instead of the Mandelbrot set"),
        )
        .arg(
            Arg::with_name(SEED)
                .required(false)
                .long(SEED)
                .short("z")
                .takes_value(true)
                .default_value(seed)
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse Julia seed"))
                .help("Constant added at every step of a Julia set"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the complex plane [default: per set]"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the complex plane [default: per set]"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value(iterations)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iterations before a point counts as inside the set"),
        )
        .arg(
            Arg::with_name(SCHEMA)
                .required(false)
                .long(SCHEMA)
                .short("c")
                .takes_value(true)
                .default_value("RED")
                .validator(|s| validate_parse::<ColorSchema>(&s))
                .help("Color schema: RED, YELLOW, MAGENTA, BLUE, GREEN, CYAN or DEFAULT"),
        )
        .arg(
            Arg::with_name(CONVERGENCE)
                .required(false)
                .long(CONVERGENCE)
                .short("k")
                .takes_value(true)
                .default_value("white")
                .validator(|s| validate_parse::<Color>(&s))
                .help("Color of points inside the set, by name or as #rrggbb"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver"),
        )
        .arg(
            Arg::with_name(AXES)
                .long(AXES)
                .short("a")
                .help("Draw the coordinate axes over the image"),
        )
        .get_matches()
}

// Everything below has already been through a validator, so a parse
// failure here means the validators and the parsers disagree.
fn value<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, Error> {
    matches
        .value_of(name)
        .ok_or_else(|| format_err!("Missing value for --{}", name))
}

fn complex(matches: &ArgMatches, name: &str) -> Result<Option<Complex<f64>>, Error> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(s) => parse_complex(s)
            .map(Some)
            .ok_or_else(|| format_err!("Could not parse --{} {:?}", name, s)),
    }
}

fn config(matches: &ArgMatches) -> Result<FractalConfig, Error> {
    let preset = if matches.is_present(JULIA) {
        let seed = complex(matches, SEED)?.unwrap_or(JULIA_SEED);
        FractalConfig::julia(seed)
    } else {
        FractalConfig::mandelbrot()
    };
    let leftlower = complex(matches, LEFTLOWER)?.unwrap_or(preset.leftlower);
    let rightupper = complex(matches, RIGHTUPPER)?.unwrap_or(preset.rightupper);

    Ok(preset
        .with_bounds(leftlower, rightupper)
        .with_max_iterations(usize::from_str(value(matches, ITERATIONS)?)?)
        .with_color_schema(ColorSchema::from_str(value(matches, SCHEMA)?)?)
        .with_convergence_color(Color::from_str(value(matches, CONVERGENCE)?)?))
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let (width, height) = parse_pair::<usize>(value(matches, SIZE)?, 'x')
        .ok_or_else(|| format_err!("Error parsing image dimensions"))?;
    let threads = usize::from_str(value(matches, THREADS)?)?;
    let output = value(matches, OUTPUT)?;

    let renderer = FractalRenderer::new(config(matches)?, width, height)?;
    let mut raster = if threads > 1 {
        renderer.render_threaded(threads)
    } else {
        renderer.render()
    };
    if matches.is_present(AXES) {
        AxisOverlay::new(renderer.plane()).draw(&mut raster, Color::RED);
    }
    raster.save(output)?;
    info!("Wrote {}", output);
    Ok(())
}

fn main() {
    env_logger::init();
    let size = format!("{}x{}", DEFAULT_WIDTH, DEFAULT_HEIGHT);
    let seed = format!("{},{}", JULIA_SEED.re, JULIA_SEED.im);
    let iterations = DEFAULT_ITERATIONS.to_string();
    let matches = args(&size, &seed, &iterations);

    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
