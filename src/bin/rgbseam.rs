// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgGroup, ArgMatches};
use failure::{format_err, Error};
use log::info;
use rgbseam::{energy_to_image, Carve, SeamCarver};
use std::path::{Path, PathBuf};

const DEFAULT_COUNT: &str = "100";

// photo.png -> photo_cropped.png; a path without an extension just
// gets the suffix.
fn cropped_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{}_cropped.{}", stem, ext.to_string_lossy()),
        None => format!("{}_cropped", stem),
    };
    input.with_file_name(name)
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let input = Path::new(
        matches
            .value_of("image")
            .ok_or_else(|| format_err!("no image given"))?,
    );
    let direction = if matches.is_present("horizontal") {
        Carve::Height
    } else {
        Carve::Width
    };
    let count: u32 = matches
        .value_of("count")
        .unwrap_or(DEFAULT_COUNT)
        .parse()
        .map_err(|_| format_err!("the seam count must be a non-negative integer"))?;
    let output = matches
        .value_of("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| cropped_path(input));

    let image = image::open(input)?.to_rgb8();
    info!(
        "loaded {} ({}x{})",
        input.display(),
        image.width(),
        image.height()
    );

    let mut carver = SeamCarver::new(image)?;
    carver.carve(direction, count)?;

    if let Some(energy_path) = matches.value_of("energy-map") {
        energy_to_image(&carver.energy_matrix()).save(energy_path)?;
        info!("wrote energy map to {}", energy_path);
    }

    carver.image().save(&output)?;
    info!("wrote {}", output.display());
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = App::new("rgbseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::with_name("image")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("count")
                .help("How many seams to remove [default: 100]")
                .index(2),
        )
        .arg(
            Arg::with_name("horizontal")
                .short("h")
                .long("horizontal")
                .help("Remove horizontal seams, making the image shorter"),
        )
        .arg(
            Arg::with_name("vertical")
                .short("v")
                .long("vertical")
                .help("Remove vertical seams, making the image narrower"),
        )
        .group(
            ArgGroup::with_name("direction")
                .args(&["horizontal", "vertical"])
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("FILE")
                .help("Where to save the result [default: <image>_cropped.<ext>]"),
        )
        .arg(
            Arg::with_name("energy-map")
                .short("e")
                .long("energy-map")
                .takes_value(true)
                .value_name("FILE")
                .help("Also save the carved image's energy as a greyscale image"),
        )
        .get_matches();

    if let Err(error) = run(&matches) {
        eprintln!("rgbseam: {}", error);
        std::process::exit(1);
    }
}
